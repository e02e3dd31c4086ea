//! # claimsearch-data
//!
//! Spreadsheet access for claimsearch - open a workbook, pick a sheet and
//! read its full grid as typed cells.
//!
//! ## Features
//!
//! - **Workbook Support**: `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` via `calamine`
//! - **Typed Cells**: values keep their scalar type (`Cell`)
//! - **Data-only Reads**: formula cells yield their cached value
//!
//! ## Example
//!
//! ```rust,ignore
//! use claimsearch_data::{SheetSource, WorkbookSource};
//!
//! let source = WorkbookSource::new("claims.xlsx")?;
//! let grid = source.read_sheet(None)?;
//! ```

pub mod cell;
pub mod error;
pub mod sources;

// Re-exports
pub use cell::Cell;
pub use error::{DataError, Result};
pub use sources::{SheetSource, WorkbookSource};

/// Read the full grid of a sheet in one call
///
/// # Arguments
/// * `path` - Path to the workbook
/// * `sheet` - Sheet name (optional, uses the first sheet if None)
pub fn read_sheet(path: impl AsRef<std::path::Path>, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>> {
    WorkbookSource::new(path)?.read_sheet(sheet)
}
