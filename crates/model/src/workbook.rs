//! In-memory workbook model for fixture generation.
//!
//! This is a write-only model: generators append typed cell values in a
//! deterministic order and the export layer streams them out in that same
//! order. There is no formula evaluation and no mutation of existing cells.

/// A single cell value. Formulas are stored as source text with the
/// leading `=` (e.g. `=D2*E2`); the export layer decides how to encode
/// them for the target format.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Formula(String),
}

impl CellValue {
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }
}

/// A named sheet holding cells in insertion order.
///
/// Coordinates are 1-based. Generators never write the same cell twice,
/// so no deduplication is done here.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    cells: Vec<(usize, usize, CellValue)>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), cells: Vec::new() }
    }

    /// Pre-size the cell buffer when the generator knows the count up front.
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self { name: name.into(), cells: Vec::with_capacity(capacity) }
    }

    pub fn set_text(&mut self, row: usize, col: usize, text: impl Into<String>) {
        self.cells.push((row, col, CellValue::Text(text.into())));
    }

    pub fn set_number(&mut self, row: usize, col: usize, value: f64) {
        self.cells.push((row, col, CellValue::Number(value)));
    }

    /// Store a formula as source text. Callers pass the full `=...` form.
    pub fn set_formula(&mut self, row: usize, col: usize, source: impl Into<String>) {
        self.cells.push((row, col, CellValue::Formula(source.into())));
    }

    /// Cells in the order they were written.
    pub fn cells(&self) -> &[(usize, usize, CellValue)] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn formula_count(&self) -> usize {
        self.cells.iter().filter(|(_, _, v)| v.is_formula()).count()
    }

    /// Look up a cell by position. Linear scan; meant for tests and
    /// spot-checks, not bulk access.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(r, c, _)| *r == row && *c == col)
            .map(|(_, _, v)| v)
    }

    /// Highest row/col touched, or (0, 0) for an empty sheet.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(mr, mc), (r, c, _)| {
            (mr.max(*r), mc.max(*c))
        })
    }
}

/// A workbook containing one or more sheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sheet(&mut self, sheet: Sheet) {
        debug_assert!(
            !self.sheets.iter().any(|s| s.name == sheet.name),
            "duplicate sheet name: {}",
            sheet.name
        );
        self.sheets.push(sheet);
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Total cells across all sheets.
    pub fn cell_count(&self) -> usize {
        self.sheets.iter().map(|s| s.cell_count()).sum()
    }

    /// Total formula cells across all sheets.
    pub fn formula_count(&self) -> usize {
        self.sheets.iter().map(|s| s.formula_count()).sum()
    }
}
