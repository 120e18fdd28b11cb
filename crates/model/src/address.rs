//! A1 notation helpers.
//!
//! Rows and columns are 1-based throughout the workbook model, matching
//! how the generated formulas reference cells (`=D2*E2`, `=N5001*2`).

/// Convert 1-based column index to letter (1 -> A, 26 -> Z, 27 -> AA)
pub fn column_letter(col: usize) -> String {
    debug_assert!(col >= 1, "columns are 1-based");
    let mut result = String::new();
    let mut c = col - 1;
    loop {
        result.insert(0, (b'A' + (c % 26) as u8) as char);
        if c < 26 {
            break;
        }
        c = c / 26 - 1;
    }
    result
}

/// Convert 1-based row/col to A1 notation (1,1 -> A1)
pub fn cell_address(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row)
}
