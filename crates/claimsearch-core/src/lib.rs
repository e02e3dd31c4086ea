//! claimsearch-core - find similar past complaints
//!
//! Loads a sheet of past complaints (header row + data rows) and returns the
//! rows whose first column is similar to a new complaint.
//!
//! # Example
//!
//! ```
//! use claimsearch_core::{Cell, ClaimSearcher, Dataset};
//!
//! let dataset = Dataset::new(
//!     vec!["Complaint".to_string(), "ID".to_string()],
//!     vec![
//!         vec![Cell::from("Engine noise at startup"), Cell::from(1_i64)],
//!         vec![Cell::from("Brake squeal when hot"), Cell::from(2_i64)],
//!     ],
//! );
//! let searcher = ClaimSearcher::from_dataset(dataset);
//!
//! let matches = searcher.find_similar("engine noise when starting", 0.7);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0]["ID"], Cell::Number(1.0));
//! ```
//!
//! Loading from a workbook:
//!
//! ```rust,ignore
//! let searcher = ClaimSearcher::new("claims.xlsx", Some("Claims"))?;
//! let matches = searcher.find_similar_default("door rattles at speed");
//! ```

pub mod config;
pub mod dataset;
pub mod record;
pub mod searcher;
pub mod similarity;

// Re-export main types and functions
pub use claimsearch_data::{Cell, DataError, Result};
pub use config::{ConfigError, OutputFormat, Settings};
pub use dataset::Dataset;
pub use record::{ClaimRecord, ScoredClaim};
pub use searcher::{ClaimSearcher, DEFAULT_THRESHOLD};
pub use similarity::{similarity, Match, SequenceMatcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
