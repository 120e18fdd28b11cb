//! Workbook builders for the three fixture tiers.
//!
//! Shape (dimensions, headers, formula templates) is fixed; cell values
//! come from the caller's RNG. Passing a seeded RNG reproduces a workbook
//! exactly; an entropy-seeded RNG gives fresh values with the same shape.

use gridbench_model::{column_letter, Sheet, Workbook};
use rand::Rng;

use crate::tiers::{
    LARGE_COLS, LARGE_DATA_ROWS, LARGE_SHEETS, MEDIUM_DATA_ROWS, SMALL_COLS, SMALL_ROWS,
};

pub const SALES_HEADERS: [&str; 8] = [
    "ID", "Region", "Product", "Quantity", "Price", "Total", "Tax", "Grand Total",
];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

pub const PRODUCTS: [&str; 5] = ["Widget", "Gadget", "Gizmo", "Doohickey", "Thingamajig"];

fn pick<'a>(rng: &mut impl Rng, options: &'a [&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Small tier: one 100x50 "Data" sheet of literals, no formulas.
///
/// Column 1 is a `Row N` label, column 2 is `N * 10`, the rest are random
/// reals in `[0, 1000)`. Every cell in the rectangle is populated.
pub fn small_workbook(rng: &mut impl Rng) -> Workbook {
    let mut sheet = Sheet::with_capacity("Data", SMALL_ROWS * SMALL_COLS);
    for row in 1..=SMALL_ROWS {
        for col in 1..=SMALL_COLS {
            if col == 1 {
                sheet.set_text(row, col, format!("Row {}", row));
            } else if col == 2 {
                sheet.set_number(row, col, (row * 10) as f64);
            } else {
                sheet.set_number(row, col, rng.gen_range(0.0..1000.0));
            }
        }
    }

    let mut workbook = Workbook::new();
    workbook.push_sheet(sheet);
    workbook
}

/// Medium tier: a 25,001-row "Sales" sheet where the last three columns
/// are row-parameterized formulas, plus a "Summary" sheet of three
/// cross-sheet aggregates.
///
/// Formula strings embed their own row (`=D7*E7` on row 7), so the sheet
/// stays consistent if rows are copied as logical units by an importer.
pub fn medium_workbook(rng: &mut impl Rng) -> Workbook {
    let mut sales = Sheet::with_capacity("Sales", (MEDIUM_DATA_ROWS + 1) * SALES_HEADERS.len());
    for (i, header) in SALES_HEADERS.iter().enumerate() {
        sales.set_text(1, i + 1, *header);
    }

    for row in 2..=MEDIUM_DATA_ROWS + 1 {
        sales.set_number(row, 1, (row - 1) as f64);
        sales.set_text(row, 2, pick(rng, &REGIONS));
        sales.set_text(row, 3, pick(rng, &PRODUCTS));
        sales.set_number(row, 4, rng.gen_range(1..=100) as f64);
        sales.set_number(row, 5, round2(rng.gen_range(10.0..=500.0)));
        sales.set_formula(row, 6, format!("=D{row}*E{row}"));
        sales.set_formula(row, 7, format!("=F{row}*0.08"));
        sales.set_formula(row, 8, format!("=F{row}+G{row}"));
    }

    let mut summary = Sheet::with_capacity("Summary", 6);
    summary.set_text(1, 1, "Total Records");
    summary.set_formula(1, 2, "=COUNTA(Sales!A:A)-1");
    summary.set_text(2, 1, "Sum of Totals");
    summary.set_formula(2, 2, "=SUM(Sales!F:F)");
    summary.set_text(3, 1, "Average Price");
    summary.set_formula(3, 2, "=AVERAGE(Sales!E:E)");

    let mut workbook = Workbook::new();
    workbook.push_sheet(sales);
    workbook.push_sheet(summary);
    workbook
}

/// One large-tier sheet: a `Col_N` header row plus 5,000 data rows of 50
/// mixed-content columns. `sheet_num` is 1-based and appears in both the
/// sheet name (`Data_3`) and the column-1 identifiers (`S3R42`).
///
/// Data-row content is selected by a priority chain, first match wins:
/// identifier column, then every-5th-column formulas, then every-3rd-column
/// text, then random numbers. Columns divisible by both 5 and 3 (15, 30,
/// 45) resolve to the formula branch because it is checked first; the
/// branches must not be reordered.
pub fn large_sheet(rng: &mut impl Rng, sheet_num: usize) -> Sheet {
    let mut sheet = Sheet::with_capacity(
        format!("Data_{}", sheet_num),
        (LARGE_DATA_ROWS + 1) * LARGE_COLS,
    );

    for col in 1..=LARGE_COLS {
        sheet.set_text(1, col, format!("Col_{}", col));
    }

    for row in 2..=LARGE_DATA_ROWS + 1 {
        for col in 1..=LARGE_COLS {
            if col == 1 {
                sheet.set_text(row, col, format!("S{}R{}", sheet_num, row));
            } else if col % 5 == 0 {
                let prev_col = column_letter(col - 1);
                sheet.set_formula(row, col, format!("={}{}*2", prev_col, row));
            } else if col % 3 == 0 {
                sheet.set_text(row, col, format!("Text_{}_{}", row, col));
            } else {
                sheet.set_number(row, col, rng.gen_range(0.0..10_000.0));
            }
        }
    }

    sheet
}

/// Large tier: four large sheets in one workbook, `Data_1` through
/// `Data_4`, about a million cells total.
pub fn large_workbook(rng: &mut impl Rng) -> Workbook {
    let mut workbook = Workbook::new();
    for sheet_num in 1..=LARGE_SHEETS {
        workbook.push_sheet(large_sheet(rng, sheet_num));
    }
    workbook
}
