//! Builders for the three benchmark fixture workbooks.
//!
//! Each tier has a fixed shape (sheet names, dimensions, header labels,
//! formula templates) and random cell values. Shape is identical on every
//! run; values vary unless the caller seeds the RNG. See [`tiers::Tier`]
//! for the per-tier dimensions.

pub mod builders;
pub mod tiers;

pub use builders::{large_sheet, large_workbook, medium_workbook, small_workbook};
pub use tiers::Tier;
