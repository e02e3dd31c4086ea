//! In-memory claims table: a header row plus data rows.

use claimsearch_data::Cell;

/// Header labels and data rows loaded from one sheet
///
/// Every row holds exactly one cell per header: narrower rows are padded
/// with `Cell::Null` and wider rows are truncated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Create a dataset from headers and rows, normalizing row widths
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Null);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Split a sheet grid into the header row and data rows
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Self {
        let mut grid = grid.into_iter();
        let Some(header_row) = grid.next() else {
            return Self::default();
        };

        let headers = header_row.iter().map(header_label).collect();
        Self::new(headers, grid.collect())
    }

    /// Column labels, in sheet order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in sheet order
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header text for a cell; empty cells give an empty label
fn header_label(cell: &Cell) -> String {
    cell.to_string()
}
