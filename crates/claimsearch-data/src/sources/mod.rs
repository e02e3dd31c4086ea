//! Sheet source implementations.
//!
//! This module contains adapters for grid-shaped data sources.

pub mod workbook;

pub use workbook::WorkbookSource;

use crate::cell::Cell;
use crate::error::Result;

/// Trait for data sources that can provide a full sheet of cells
pub trait SheetSource {
    /// Read every cell of a sheet
    ///
    /// # Arguments
    /// * `sheet` - Sheet name, or `None` for the default sheet
    ///
    /// # Returns
    /// A rectangular grid anchored at the first cell (A1) of the sheet.
    /// An empty sheet yields an empty grid.
    fn read_sheet(&self, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>>;

    /// List available sheets in the source
    fn list_sheets(&self) -> Result<Vec<String>>;

    /// Get the default sheet name
    fn default_sheet(&self) -> Option<String>;
}
