//! Complaint search over a loaded claims sheet.

use std::path::Path;

use claimsearch_data::{Cell, Result, SheetSource, WorkbookSource};
use tracing::debug;

use crate::dataset::Dataset;
use crate::record::{ClaimRecord, ScoredClaim};
use crate::similarity::{lowercase_chars, SequenceMatcher};

/// Minimum similarity used when no threshold is given
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Finds past complaints similar to a new one
///
/// The sheet is read once at construction; queries scan the in-memory rows
/// and compare the query with each row's first cell.
#[derive(Debug, Clone)]
pub struct ClaimSearcher {
    dataset: Dataset,
}

impl ClaimSearcher {
    /// Load a searcher from a workbook
    ///
    /// # Arguments
    /// * `path` - Path to the spreadsheet of past complaints
    /// * `sheet` - Sheet name (optional, uses the first sheet if None)
    pub fn new(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<Self> {
        let source = WorkbookSource::new(path)?;
        Self::from_source(&source, sheet)
    }

    /// Load a searcher from any sheet source
    pub fn from_source<S: SheetSource>(source: &S, sheet: Option<&str>) -> Result<Self> {
        let grid = source.read_sheet(sheet)?;
        let dataset = Dataset::from_grid(grid);

        debug!(
            columns = dataset.headers().len(),
            rows = dataset.len(),
            "loaded claims"
        );

        Ok(Self::from_dataset(dataset))
    }

    /// Wrap an already loaded dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn headers(&self) -> &[String] {
        self.dataset.headers()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        self.dataset.rows()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Rows whose first cell scores at least `threshold` against `complaint`
    ///
    /// Results keep sheet order. The threshold is not range-checked: above
    /// `1.0` nothing matches, at or below `0.0` everything does.
    pub fn find_similar(&self, complaint: &str, threshold: f64) -> Vec<ClaimRecord> {
        self.find_similar_scored(complaint, threshold)
            .into_iter()
            .map(|scored| scored.record)
            .collect()
    }

    /// [`find_similar`](Self::find_similar) with [`DEFAULT_THRESHOLD`]
    pub fn find_similar_default(&self, complaint: &str) -> Vec<ClaimRecord> {
        self.find_similar(complaint, DEFAULT_THRESHOLD)
    }

    /// Like [`find_similar`](Self::find_similar), keeping each row's score
    pub fn find_similar_scored(&self, complaint: &str, threshold: f64) -> Vec<ScoredClaim> {
        let query = lowercase_chars(complaint);
        let headers = self.dataset.headers();

        let matches: Vec<ScoredClaim> = self
            .dataset
            .rows()
            .iter()
            .filter_map(|row| {
                let text = row.first().map(Cell::to_string).unwrap_or_default();
                let text = lowercase_chars(&text);
                let matcher = SequenceMatcher::new(&query, &text);

                // Upper bounds first; they only rule out rows the full ratio would reject
                if matcher.real_quick_ratio() < threshold || matcher.quick_ratio() < threshold {
                    return None;
                }

                let score = matcher.ratio();
                (score >= threshold).then(|| ScoredClaim {
                    score,
                    record: ClaimRecord::from_row(headers, row),
                })
            })
            .collect();

        debug!(
            threshold,
            scanned = self.dataset.len(),
            matched = matches.len(),
            "searched claims"
        );

        matches
    }
}
