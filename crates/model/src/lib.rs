pub mod address;
pub mod workbook;

pub use address::{cell_address, column_letter};
pub use workbook::{CellValue, Sheet, Workbook};
