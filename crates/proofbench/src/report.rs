//! aggregated sweep results

use std::fmt;

use serde::Serialize;

use crate::runner::RunResult;

/// A size that was skipped under [`FailurePolicy::Skip`](crate::FailurePolicy::Skip).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRun {
    pub size: u64,
    pub reason: String,
}

/// Parallel sequences, one entry per measured size, in sweep order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchReport {
    pub sizes: Vec<u64>,
    /// ms, as printed by the prover
    pub prover_times: Vec<f64>,
    /// ms, as printed by the prover
    pub verification_times: Vec<f64>,
    /// wall clock around each child, seconds
    #[serde(rename = "execution_times_secs")]
    pub execution_times: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SkippedRun>,
}

impl BenchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, run: &RunResult) {
        self.sizes.push(run.size);
        self.prover_times.push(run.prover_time);
        self.verification_times.push(run.verification_time);
        self.execution_times.push(run.wall_clock.as_secs_f64());
    }

    pub fn skip(&mut self, size: u64, reason: impl Into<String>) {
        self.failures.push(SkippedRun {
            size,
            reason: reason.into(),
        });
    }

    /// Number of measured sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sizes {:?}", self.sizes)?;
        writeln!(f, "prover_times {:?}", self.prover_times)?;
        write!(f, "verification_times {:?}", self.verification_times)?;
        for skipped in &self.failures {
            write!(f, "\nskipped size {}: {}", skipped.size, skipped.reason)?;
        }
        Ok(())
    }
}
