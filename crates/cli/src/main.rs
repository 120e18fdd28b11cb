// gridbench - XLSX fixture generator for import benchmarking

mod exit_codes;
mod generate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use exit_codes::{EXIT_IO_ERROR, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "gridbench")]
#[command(about = "Generate XLSX fixtures for import performance benchmarking")]
#[command(long_version = long_version())]
#[command(version)]
#[command(after_help = "\
Generates three files into the output directory, overwriting existing ones:
  small.xlsx   ~5k cells
  medium.xlsx  ~200k cells with formulas
  large.xlsx   ~1M cells across 4 sheets

Examples:
  gridbench
  gridbench --out-dir target/fixtures --seed 42
  gridbench --json --quiet

Run benchmarks against the generated files with:
  cargo test -p gridbench-io --release -- import_benchmark --nocapture --ignored")]
struct Cli {
    /// Directory to write fixtures into (created if absent)
    #[arg(long, default_value = "benchmarks/fixtures")]
    out_dir: PathBuf,

    /// Seed for the random number generator; same seed, same cell values
    #[arg(long)]
    seed: Option<u64>,

    /// Print a machine-readable JSON report to stdout
    #[arg(long)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = generate::cmd_generate(cli.out_dir, cli.seed, cli.json, cli.quiet);

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
