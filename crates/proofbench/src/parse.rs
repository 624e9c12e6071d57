//! positional extraction of timings from the prover's console output
//!
//! The prover does not emit a structured report. Its log lines look like
//!
//! ```text
//! 14:02:11 INF prove done acceleration=none backend=groth16 curve=bw6_761 nbConstraints=81502 took=1843.210375
//! 14:02:11 INF verifier done backend=groth16 curve=bw6_761 took=4.081042
//! ```
//!
//! with every value wrapped in color codes. We locate a timing by line
//! number and `=`-separated field index, which only holds as long as the
//! prover keeps that exact log layout.

use crate::ansi::strip_ansi;
use crate::error::{BenchError, Result};

/// A 0-indexed line of stdout and a 0-indexed `=`-separated field in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocator {
    pub line: usize,
    pub field: usize,
}

impl FieldLocator {
    pub const fn new(line: usize, field: usize) -> Self {
        Self { line, field }
    }
}

/// Proof generation time, in the unit the prover prints (ms).
pub const PROVER_TIME: FieldLocator = FieldLocator::new(4, 5);

/// Proof verification time (ms).
pub const VERIFICATION_TIME: FieldLocator = FieldLocator::new(5, 3);

/// Pull the number at `at` out of `output`.
pub fn extract_field(output: &str, at: FieldLocator) -> Result<f64> {
    // split on '\n' only: a trailing '\r' would land in the last field and
    // is taken care of by the trim below
    let line = output
        .split('\n')
        .nth(at.line)
        .ok_or_else(|| BenchError::MissingLine {
            line: at.line,
            available: output.split('\n').count(),
        })?;

    let raw = line
        .split('=')
        .nth(at.field)
        .ok_or_else(|| BenchError::MissingField {
            line: at.line,
            field: at.field,
            available: line.split('=').count(),
        })?;

    let text = strip_ansi(raw);
    text.trim()
        .parse::<f64>()
        .map_err(|source| BenchError::InvalidNumber {
            line: at.line,
            field: at.field,
            text: text.into_owned(),
            source,
        })
}

pub fn extract_prover_time(output: &str) -> Result<f64> {
    extract_field(output, PROVER_TIME)
}

pub fn extract_verification_time(output: &str) -> Result<f64> {
    extract_field(output, VERIFICATION_TIME)
}
