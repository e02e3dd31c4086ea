//! Configuration for claimsearch.
//!
//! # Configuration File
//!
//! Settings are loaded from `claimsearch.toml` in the working directory:
//!
//! ```toml
//! [search]
//! threshold = 0.7
//! sheet = "Claims"
//!
//! [output]
//! format = "json"
//! show_scores = true
//! ```
//!
//! Every field is optional; missing fields take their defaults.

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{
    ConfigError, OutputFormat, OutputSettings, SearchSettings, Settings, CONFIG_FILE_NAME,
};
