//! sequential sweep driver
//!
//! One child at a time: spawn, wait for exit with no timeout, parse,
//! append. There is no retry. Under [`FailurePolicy::Abort`] the first
//! failure ends the sweep and whatever was measured so far is dropped.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{BenchConfig, FailurePolicy};
use crate::error::{BenchError, Result};
use crate::parse::{extract_prover_time, extract_verification_time};
use crate::report::BenchReport;

/// Everything observed about a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub size: u64,
    pub wall_clock: Duration,
    /// `None` when the child was killed by a signal
    pub exit_status: Option<i32>,
    pub prover_time: f64,
    pub verification_time: f64,
    pub stdout: String,
    pub stderr: String,
}

pub struct Runner {
    config: BenchConfig,
}

impl Runner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Sweep the configured sizes.
    pub fn run(&self) -> Result<BenchReport> {
        self.run_sizes(&self.config.sizes)
    }

    /// Sweep `sizes` in the order given.
    pub fn run_sizes(&self, sizes: &[u64]) -> Result<BenchReport> {
        let mut report = BenchReport::new();

        for (i, &size) in sizes.iter().enumerate() {
            info!(
                "[{}/{}] size {}: running `{}` in {}",
                i + 1,
                sizes.len(),
                size,
                self.command_line(),
                self.config.workdir.display()
            );

            match self.run_once(size) {
                Ok(run) => report.push(&run),
                Err(e) => match self.config.on_failure {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        warn!("size {} skipped: {}", size, e);
                        report.skip(size, e.to_string());
                    }
                },
            }
        }

        Ok(report)
    }

    /// Launch the program once and extract both timings from its stdout.
    pub fn run_once(&self, size: u64) -> Result<RunResult> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args)
            .current_dir(&self.config.workdir)
            .stdin(Stdio::null());
        if let Some(var) = &self.config.size_env {
            cmd.env(var, size.to_string());
        }

        let start = Instant::now();
        let output = cmd.output().map_err(|source| BenchError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;
        let wall_clock = start.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!("stdout:\n{}", stdout);
        debug!("stderr:\n{}", stderr);

        if !output.status.success() {
            warn!("size {}: `{}` exited with {}", size, self.config.program, output.status);
        }

        // both are parsed before anything is recorded so the report's
        // sequences can never drift apart
        let prover_time = extract_prover_time(&stdout)?;
        let verification_time = extract_verification_time(&stdout)?;

        info!("proof generation time: {:.2} ms", prover_time);
        info!("proof verification time: {:.2} ms", verification_time);
        debug!("wall clock: {:.3}s", wall_clock.as_secs_f64());

        Ok(RunResult {
            size,
            wall_clock,
            exit_status: output.status.code(),
            prover_time,
            verification_time,
            stdout,
            stderr,
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(self.config.program.as_str())
            .chain(self.config.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(program: &str) -> Runner {
        Runner::new(BenchConfig {
            program: program.into(),
            args: vec![],
            workdir: std::env::temp_dir(),
            sizes: vec![1, 2],
            size_env: None,
            on_failure: FailurePolicy::Abort,
        })
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = runner("proofbench-definitely-not-installed")
            .run_once(1)
            .unwrap_err();
        assert!(matches!(err, BenchError::Spawn { .. }));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_missing_program_aborts_sweep() {
        let err = runner("proofbench-definitely-not-installed").run().unwrap_err();
        assert!(matches!(err, BenchError::Spawn { .. }));
    }

    #[test]
    fn test_missing_program_skipped_when_configured() {
        let mut r = runner("proofbench-definitely-not-installed");
        r.config.on_failure = FailurePolicy::Skip;
        let report = r.run().unwrap();
        assert!(report.is_empty());
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].size, 1);
        assert_eq!(report.failures[1].size, 2);
    }

    #[test]
    fn test_command_line() {
        let r = Runner::new(BenchConfig::default());
        assert_eq!(r.command_line(), "go run main.go");
    }
}
