//! benchmark configuration
//!
//! Defaults describe the groth16 registration circuit sweep: `go run
//! main.go` inside `./ProofReg`, sizes 10 through 160. Every field can be
//! overridden from a TOML file, e.g.
//!
//! ```toml
//! program = "./target/release/prover"
//! args = []
//! workdir = "."
//! sizes = [16, 18, 20]
//! size_env = "BENCH_SIZE"
//! on_failure = "skip"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Sizes swept when nothing else is configured.
pub const DEFAULT_SIZES: [u64; 16] = [
    10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160,
];

/// What to do when a single invocation cannot be measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// stop the whole sweep and return the error
    #[default]
    Abort,
    /// log the error, record the size as skipped, move on
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Executable to launch for every size.
    pub program: String,
    /// Arguments passed verbatim; the size is not appended.
    pub args: Vec<String>,
    /// Working directory of the child.
    pub workdir: PathBuf,
    /// Sweep parameter, strictly increasing.
    pub sizes: Vec<u64>,
    /// If set, the child sees the current size in this env var.
    pub size_env: Option<String>,
    pub on_failure: FailurePolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            program: "go".into(),
            args: vec!["run".into(), "main.go".into()],
            workdir: PathBuf::from("./ProofReg"),
            sizes: DEFAULT_SIZES.to_vec(),
            size_env: None,
            on_failure: FailurePolicy::Abort,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(BenchError::Config("program must not be empty".into()));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::Config("at least one size is required".into()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::Config("sizes must be positive".into()));
        }
        if let Some(w) = self.sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(BenchError::Config(format!(
                "sizes must be strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
        if matches!(&self.size_env, Some(var) if var.is_empty() || var.contains('=')) {
            return Err(BenchError::Config("size_env is not a valid variable name".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_registration_sweep() {
        let config = BenchConfig::default();
        assert_eq!(config.program, "go");
        assert_eq!(config.args, ["run", "main.go"]);
        assert_eq!(config.workdir, PathBuf::from("./ProofReg"));
        assert_eq!(config.sizes.len(), 16);
        assert_eq!(config.sizes.first(), Some(&10));
        assert_eq!(config.sizes.last(), Some(&160));
        assert_eq!(config.on_failure, FailurePolicy::Abort);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BenchConfig::from_toml_str("sizes = [1, 2, 3]\non_failure = \"skip\"\n").unwrap();
        assert_eq!(config.sizes, vec![1, 2, 3]);
        assert_eq!(config.on_failure, FailurePolicy::Skip);
        assert_eq!(config.program, "go");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = BenchConfig::from_toml_str("sizez = [1]").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_validation() {
        let bad = |sizes: Vec<u64>| BenchConfig {
            sizes,
            ..Default::default()
        };
        assert!(bad(vec![]).validate().is_err());
        assert!(bad(vec![0, 10]).validate().is_err());
        assert!(bad(vec![10, 10]).validate().is_err());
        assert!(bad(vec![20, 10]).validate().is_err());
        assert!(bad(vec![10, 20]).validate().is_ok());

        let config = BenchConfig {
            program: " ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            size_env: Some("A=B".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "program = \"sh\"").unwrap();
        writeln!(file, "args = [\"-c\", \"true\"]").unwrap();
        writeln!(file, "workdir = \"/tmp\"").unwrap();
        writeln!(file, "size_env = \"BENCH_SIZE\"").unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.program, "sh");
        assert_eq!(config.args, ["-c", "true"]);
        assert_eq!(config.workdir, PathBuf::from("/tmp"));
        assert_eq!(config.size_env.as_deref(), Some("BENCH_SIZE"));
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BenchConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, BenchError::ConfigIo { .. }));
    }
}
