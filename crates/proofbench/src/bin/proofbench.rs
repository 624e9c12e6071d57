//! proofbench CLI - time an external prover across a sweep of sizes
//!
//! # Examples
//!
//! ```bash
//! # default sweep: `go run main.go` in ./ProofReg, sizes 10..=160
//! proofbench
//!
//! # custom program and sizes, keep going past broken runs
//! proofbench --program ./prover --workdir build --sizes 16,18,20 --keep-going
//!
//! # settings from a file, machine-readable summary
//! proofbench --config bench.toml --format json > results.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use proofbench::{BenchConfig, FailurePolicy, Runner};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "proofbench")]
#[command(about = "Sweep a prover/verifier over input sizes and collect its timings", long_about = None)]
struct Cli {
    /// TOML config file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program to launch for every size
    #[arg(short, long)]
    program: Option<String>,

    /// Argument passed to the program (repeat for several; replaces configured args)
    #[arg(short = 'a', long = "arg", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Working directory of the program
    #[arg(short, long)]
    workdir: Option<PathBuf>,

    /// Comma-separated sizes, strictly increasing
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<u64>>,

    /// Export the current size to the program under this env var
    #[arg(long)]
    size_env: Option<String>,

    /// Skip sizes whose output cannot be parsed instead of aborting
    #[arg(short, long)]
    keep_going: bool,

    /// Summary format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("proofbench={}", level).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    info!("program: {} {}", config.program, config.args.join(" "));
    info!("workdir: {}", config.workdir.display());
    info!("sizes: {:?}", config.sizes);
    info!("on failure: {:?}", config.on_failure);

    let report = Runner::new(config)
        .run()
        .context("benchmark aborted")?;

    match cli.format {
        Format::Text => println!("{}", report),
        Format::Json => println!("{}", report.to_json().context("failed to serialize report")?),
    }

    Ok(())
}

/// Defaults, then the config file, then flags.
fn build_config(cli: &Cli) -> Result<BenchConfig> {
    let mut config = match &cli.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(program) = &cli.program {
        config.program = program.clone();
    }
    if !cli.args.is_empty() {
        config.args = cli.args.clone();
    }
    if let Some(workdir) = &cli.workdir {
        config.workdir = workdir.clone();
    }
    if let Some(sizes) = &cli.sizes {
        config.sizes = sizes.clone();
    }
    if let Some(var) = &cli.size_env {
        config.size_env = Some(var.clone());
    }
    if cli.keep_going {
        config.on_failure = FailurePolicy::Skip;
    }

    config.validate()?;
    Ok(config)
}
