//! Search results: rows keyed by header.

use std::ops::Index;

use claimsearch_data::Cell;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One matching row as an ordered header -> cell mapping
///
/// Keys keep column order. A repeated header label keeps its first
/// position and takes the value of its last column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimRecord {
    fields: Vec<(String, Cell)>,
}

impl ClaimRecord {
    /// Pair each header with the cell at the same position
    pub fn from_row(headers: &[String], row: &[Cell]) -> Self {
        let mut fields: Vec<(String, Cell)> = Vec::with_capacity(headers.len());

        for (header, cell) in headers.iter().zip(row) {
            match fields.iter_mut().find(|(key, _)| key == header) {
                Some(slot) => slot.1 = cell.clone(),
                None => fields.push((header.clone(), cell.clone())),
            }
        }

        Self { fields }
    }

    /// Look up a cell by header label
    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, cell)| cell)
    }

    /// Iterate over `(header, cell)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(key, cell)| (key.as_str(), cell))
    }

    /// Header labels, in column order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Index<&str> for ClaimRecord {
    type Output = Cell;

    fn index(&self, header: &str) -> &Cell {
        self.get(header)
            .unwrap_or_else(|| panic!("no column named {:?}", header))
    }
}

impl Serialize for ClaimRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, cell) in &self.fields {
            map.serialize_entry(key, cell)?;
        }
        map.end()
    }
}

/// A matching row together with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredClaim {
    /// Similarity of the row's first cell to the query
    pub score: f64,
    /// The matching row
    pub record: ClaimRecord,
}
