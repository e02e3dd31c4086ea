//! Spreadsheet workbook source using calamine.

use std::io;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use crate::cell::Cell;
use crate::error::{DataError, Result};
use crate::sources::SheetSource;

/// Workbook data source (xlsx, xlsm, xlsb, xls, ods)
pub struct WorkbookSource {
    /// Path to the workbook file
    path: PathBuf,
    /// Sheet names cache, in workbook order
    sheet_names: Vec<String>,
}

impl WorkbookSource {
    /// Create a new workbook source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        std::fs::metadata(path).map_err(|e| stat_error(&path_str, e))?;

        let workbook = open_workbook_auto(path)
            .map_err(|e| DataError::WorkbookOpen(format!("{}: {}", path_str, e)))?;

        let sheet_names = workbook.sheet_names().to_vec();
        debug!(path = %path_str, sheets = sheet_names.len(), "opened workbook");

        Ok(Self {
            path: path.to_path_buf(),
            sheet_names,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve an optional sheet name against the workbook
    fn resolve_sheet(&self, sheet: Option<&str>) -> Result<String> {
        match sheet {
            Some(name) if self.sheet_names.iter().any(|s| s == name) => Ok(name.to_string()),
            Some(name) => Err(DataError::SheetNotFound(name.to_string())),
            None => self
                .default_sheet()
                .ok_or_else(|| DataError::SheetNotFound("No sheets in workbook".to_string())),
        }
    }

    /// Expand a calamine range into a grid starting at A1.
    ///
    /// Calamine ranges begin at the first populated cell; positions before
    /// it are filled with `Cell::Null` so row 0 is always the sheet's first row.
    fn grid_from_range(range: &Range<Data>) -> Vec<Vec<Cell>> {
        let Some((end_row, end_col)) = range.end() else {
            return Vec::new();
        };

        (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| range.get_value((row, col)).map(Cell::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// A missing path is `FileNotFound`; any other failure to stat it is `Io`
fn stat_error(path_str: &str, err: io::Error) -> DataError {
    match err.kind() {
        io::ErrorKind::NotFound => DataError::FileNotFound(path_str.to_string()),
        _ => DataError::Io(err),
    }
}

impl SheetSource for WorkbookSource {
    fn read_sheet(&self, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>> {
        let sheet_name = self.resolve_sheet(sheet)?;

        // Re-open workbook for reading; the handle is dropped on return
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| DataError::WorkbookOpen(format!("{}: {}", self.path.display(), e)))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let grid = Self::grid_from_range(&range);

        debug!(
            sheet = %sheet_name,
            rows = grid.len(),
            columns = grid.first().map_or(0, Vec::len),
            "read sheet"
        );

        Ok(grid)
    }

    fn list_sheets(&self) -> Result<Vec<String>> {
        Ok(self.sheet_names.clone())
    }

    fn default_sheet(&self) -> Option<String> {
        self.sheet_names.first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_sheets(names: &[&str]) -> WorkbookSource {
        WorkbookSource {
            path: PathBuf::from("unused.xlsx"),
            sheet_names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_grid_from_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(WorkbookSource::grid_from_range(&range).is_empty());
    }

    #[test]
    fn test_grid_anchored_at_a1() {
        // Data occupies B2:C3 only
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Complaint".to_string()));
        range.set_value((1, 2), Data::String("ID".to_string()));
        range.set_value((2, 1), Data::String("Door rattles".to_string()));
        range.set_value((2, 2), Data::Float(7.0));

        let grid = WorkbookSource::grid_from_range(&range);

        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 3));
        assert!(grid[0].iter().all(Cell::is_null));
        assert_eq!(grid[1][0], Cell::Null);
        assert_eq!(grid[1][1], Cell::from("Complaint"));
        assert_eq!(grid[2][2], Cell::Number(7.0));
    }

    #[test]
    fn test_resolve_sheet() {
        let source = source_with_sheets(&["Claims", "Archive"]);

        assert_eq!(source.resolve_sheet(None).unwrap(), "Claims");
        assert_eq!(source.resolve_sheet(Some("Archive")).unwrap(), "Archive");
        assert!(matches!(
            source.resolve_sheet(Some("Missing")),
            Err(DataError::SheetNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_stat_error_mapping() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            stat_error("claims.xlsx", missing),
            DataError::FileNotFound(path) if path == "claims.xlsx"
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(stat_error("claims.xlsx", denied), DataError::Io(_)));
    }

    #[test]
    fn test_resolve_sheet_no_sheets() {
        let source = source_with_sheets(&[]);
        assert!(matches!(
            source.resolve_sheet(None),
            Err(DataError::SheetNotFound(_))
        ));
        assert_eq!(source.default_sheet(), None);
    }
}
