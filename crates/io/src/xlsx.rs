// XLSX export (write-only)
//
// Fixture workbooks are written once and read back by the import
// benchmarks. Cells are plain strings, numbers, and formula source text;
// there is no formatting, merging, or validation to carry over, so the
// writer is a straight streaming pass over each sheet's cells.

use std::path::Path;
use std::time::Instant;

use rust_xlsxwriter::Workbook as XlsxWorkbook;

use gridbench_model::{CellValue, Workbook};

/// Result of an XLSX export operation
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Number of sheets exported
    pub sheets_exported: usize,
    /// Total cells exported
    pub cells_exported: usize,
    /// Formulas exported as formulas
    pub formulas_exported: usize,
    /// Size of the saved file in bytes
    pub file_size: u64,
    /// Export duration in milliseconds
    pub export_duration_ms: u128,
}

impl ExportResult {
    /// Returns a summary message suitable for display
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} sheet{}", self.sheets_exported, if self.sheets_exported == 1 { "" } else { "s" }),
            format!("{} cells", self.cells_exported),
        ];
        if self.formulas_exported > 0 {
            parts.push(format!("{} formulas", self.formulas_exported));
        }
        parts.join(", ")
    }
}

/// Export a workbook to an XLSX file.
///
/// Sheets keep their model order and cells are written in the order the
/// builders emitted them. Formula cells are stored as formulas (Excel
/// recalculates on open); no cached results are computed here.
///
/// # Returns
/// * `Ok(ExportResult)` - Statistics about the exported file
/// * `Err(String)` - Error message if export failed
pub fn export(workbook: &Workbook, path: &Path) -> Result<ExportResult, String> {
    let start_time = Instant::now();
    let mut result = ExportResult::default();

    let mut xlsx_workbook = XlsxWorkbook::new();

    for sheet in workbook.sheets() {
        let worksheet = xlsx_workbook
            .add_worksheet()
            .set_name(&sheet.name)
            .map_err(|e| format!("Failed to create sheet '{}': {}", sheet.name, e))?;

        for (row, col, value) in sheet.cells() {
            // Model coordinates are 1-based; rust_xlsxwriter wants 0-based u32/u16
            let row32 = (row - 1) as u32;
            let col16 = (col - 1) as u16;

            match value {
                CellValue::Text(s) => {
                    worksheet
                        .write_string(row32, col16, s)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
                }
                CellValue::Number(n) => {
                    worksheet
                        .write_number(row32, col16, *n)
                        .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
                }
                CellValue::Formula(source) => {
                    // Store the formula string (strip leading '=')
                    let formula_str = source.strip_prefix('=').unwrap_or(source);
                    worksheet
                        .write_formula(row32, col16, formula_str)
                        .map_err(|e| format!("Failed to write formula ({}, {}): {}", row, col, e))?;
                    result.formulas_exported += 1;
                }
            }
            result.cells_exported += 1;
        }

        result.sheets_exported += 1;
    }

    xlsx_workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))?;

    result.file_size = std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| format!("Failed to stat {}: {}", path.display(), e))?;
    result.export_duration_ms = start_time.elapsed().as_millis();
    Ok(result)
}
