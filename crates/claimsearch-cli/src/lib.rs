//! claimsearch CLI - Command-line interface library
//!
//! This library provides the CLI functionality for claimsearch:
//! - Search: find complaints similar to a new one
//! - Sheets: list the sheets of a workbook
//! - Headers: show the header row of a sheet
//!
//! # Library Usage
//!
//! ```ignore
//! use claimsearch_cli::{search_command, SearchOptions};
//!
//! let mut out = std::io::stdout();
//! search_command(&mut out, "claims.xlsx".as_ref(), "engine noise", &SearchOptions::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Search with the default threshold (0.6)
//! claimsearch search claims.xlsx "engine noise when starting"
//!
//! # Stricter threshold, JSON output with scores
//! claimsearch search claims.xlsx "engine noise" --threshold 0.8 --format json --scores
//!
//! # Inspect a workbook
//! claimsearch sheets claims.xlsx
//! claimsearch headers claims.xlsx --sheet Archive
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{headers_command, load_settings, search_command, sheets_command};
pub use app::{run_cli, FormatArg, SearchOptions};
