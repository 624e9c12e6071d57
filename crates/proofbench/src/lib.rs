//! proofbench: sweep an external prover/verifier over input sizes
//!
//! The program under test is launched once per size, sequentially, and
//! its console output is scraped for two numbers: proof generation time
//! and proof verification time. Results are collected into a
//! [`BenchReport`] of parallel sequences.
//!
//! ```no_run
//! use proofbench::{BenchConfig, Runner};
//!
//! let config = BenchConfig {
//!     sizes: vec![10, 20],
//!     ..Default::default()
//! };
//! let report = Runner::new(config).run()?;
//! println!("{report}");
//! # Ok::<(), proofbench::BenchError>(())
//! ```

pub mod ansi;
pub mod config;
pub mod error;
pub mod parse;
pub mod report;
pub mod runner;

pub use ansi::strip_ansi;
pub use config::{BenchConfig, FailurePolicy, DEFAULT_SIZES};
pub use error::{BenchError, Result};
pub use parse::{
    extract_field, extract_prover_time, extract_verification_time, FieldLocator, PROVER_TIME,
    VERIFICATION_TIME,
};
pub use report::{BenchReport, SkippedRun};
pub use runner::{RunResult, Runner};
