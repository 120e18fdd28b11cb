//! `gridbench` — generate the three XLSX benchmark fixtures.
//!
//! One run produces small.xlsx, medium.xlsx and large.xlsx in the output
//! directory, overwriting existing files without confirmation. Shape is
//! identical on every run; cell values vary unless `--seed` is given.
//! A failure while writing any tier aborts the run, leaving earlier
//! fixtures in place and no cleanup of a partially written file.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use gridbench_fixtures::tiers::LARGE_SHEETS;
use gridbench_fixtures::{large_sheet, medium_workbook, small_workbook, Tier};
use gridbench_io::xlsx;
use gridbench_model::Workbook;

use crate::CliError;

/// Per-file statistics for the JSON report.
#[derive(Serialize)]
struct TierReport {
    tier: &'static str,
    file: String,
    sheets: usize,
    cells: usize,
    formulas: usize,
    bytes: u64,
    duration_ms: u128,
}

pub fn cmd_generate(
    out_dir: PathBuf,
    seed: Option<u64>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    std::fs::create_dir_all(&out_dir)
        .map_err(|e| CliError::io(format!("cannot create {}: {e}", out_dir.display())))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !quiet {
        eprintln!("Output directory: {}", out_dir.display());
        eprintln!();
    }

    let mut reports = Vec::with_capacity(Tier::ALL.len());
    for tier in Tier::ALL {
        if !quiet {
            eprintln!("Generating {} ({})...", tier.file_name(), tier.describe());
        }

        let workbook = build_tier(tier, &mut rng, quiet);
        let path = out_dir.join(tier.file_name());
        let result = xlsx::export(&workbook, &path).map_err(|e| {
            CliError::io(format!("cannot write {}: {e}", path.display()))
                .with_hint("is the output directory writable?")
        })?;

        if !quiet {
            eprintln!(
                "  Created: {} ({} bytes)",
                path.display(),
                thousands(result.file_size)
            );
        }

        reports.push(TierReport {
            tier: tier.name(),
            file: path.display().to_string(),
            sheets: result.sheets_exported,
            cells: result.cells_exported,
            formulas: result.formulas_exported,
            bytes: result.file_size,
            duration_ms: result.export_duration_ms,
        });
    }

    if json {
        let report = serde_json::json!({
            "status": "ok",
            "out_dir": out_dir.display().to_string(),
            "seed": seed,
            "files": reports,
        });
        println!("{}", serde_json::to_string(&report).unwrap());
    } else if !quiet {
        eprintln!();
        eprintln!("Done! Run benchmarks with:");
        eprintln!("  cargo test -p gridbench-io --release -- import_benchmark --nocapture --ignored");
    }

    Ok(())
}

/// Build one tier's workbook. The large tier reports per-sheet progress
/// since it dominates the runtime.
fn build_tier(tier: Tier, rng: &mut StdRng, quiet: bool) -> Workbook {
    match tier {
        Tier::Small => small_workbook(rng),
        Tier::Medium => medium_workbook(rng),
        Tier::Large => {
            let mut workbook = Workbook::new();
            for sheet_num in 1..=LARGE_SHEETS {
                if !quiet {
                    eprintln!("  Generating sheet {}/{}...", sheet_num, LARGE_SHEETS);
                }
                workbook.push_sheet(large_sheet(rng, sheet_num));
            }
            workbook
        }
    }
}

/// Format a count with thousands separators (1234567 -> "1,234,567")
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
