//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use claimsearch_core::{ClaimSearcher, OutputFormat, ScoredClaim, Settings};
use claimsearch_data::{SheetSource, WorkbookSource};

/// Output format for search results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text output
    Text,
    /// JSON output for tool consumption
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "claimsearch")]
#[command(author, version, about = "Find similar past complaints in a spreadsheet", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path (defaults to ./claimsearch.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a workbook for complaints similar to the given text
    Search {
        /// Workbook of past complaints
        file: PathBuf,

        /// New complaint text
        complaint: String,

        /// Sheet to search (defaults to the first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Minimum similarity ratio for a match
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Include similarity scores
        #[arg(long)]
        scores: bool,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Workbook file
        file: PathBuf,
    },

    /// Show the header row and row count of a sheet
    Headers {
        /// Workbook file
        file: PathBuf,

        /// Sheet to inspect (defaults to the first sheet)
        #[arg(short, long)]
        sheet: Option<String>,
    },
}

/// Resolved options for a search, after merging config and flags
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub sheet: Option<String>,
    pub threshold: f64,
    pub format: OutputFormat,
    pub show_scores: bool,
}

impl SearchOptions {
    /// Start from config values; flags that were given take precedence
    pub fn resolve(
        settings: &Settings,
        sheet: Option<String>,
        threshold: Option<f64>,
        format: Option<FormatArg>,
        scores: bool,
    ) -> Self {
        Self {
            sheet: sheet.or_else(|| settings.search.sheet.clone()),
            threshold: threshold.unwrap_or(settings.search.threshold),
            format: format.map(Into::into).unwrap_or(settings.output.format),
            show_scores: scores || settings.output.show_scores,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::resolve(&Settings::default(), None, None, None, false)
    }
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search {
            file,
            complaint,
            sheet,
            threshold,
            format,
            scores,
        } => {
            let options = SearchOptions::resolve(&settings, sheet, threshold, format, scores);
            search_command(&mut out, &file, &complaint, &options)?;
        }
        Commands::Sheets { file } => {
            sheets_command(&mut out, &file)?;
        }
        Commands::Headers { file, sheet } => {
            let sheet = sheet.or(settings.search.sheet);
            headers_command(&mut out, &file, sheet.as_deref())?;
        }
    }

    Ok(())
}

/// Log level selected by the `-v` count
fn level_for_verbosity(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v` when set
fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::default().add_directive(level_for_verbosity(verbose).into())
    });

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Load the explicit config file, or discover one in the working directory
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            Settings::discover(&cwd).context("Failed to load claimsearch.toml")
        }
    }
}

/// Execute the search command, returning the number of matches
pub fn search_command(
    out: &mut impl Write,
    file: &Path,
    complaint: &str,
    options: &SearchOptions,
) -> Result<usize> {
    let searcher = ClaimSearcher::new(file, options.sheet.as_deref())
        .with_context(|| format!("Failed to load claims from {}", file.display()))?;
    info!(
        file = %file.display(),
        rows = searcher.len(),
        threshold = options.threshold,
        "searching"
    );

    let matches = searcher.find_similar_scored(complaint, options.threshold);

    match options.format {
        OutputFormat::Json => write_json(out, &matches, options.show_scores)?,
        OutputFormat::Text => write_text(out, &matches, options.show_scores)?,
    }

    Ok(matches.len())
}

fn write_json(out: &mut impl Write, matches: &[ScoredClaim], show_scores: bool) -> Result<()> {
    let written = if show_scores {
        serde_json::to_writer_pretty(&mut *out, matches)
    } else {
        let records: Vec<_> = matches.iter().map(|m| &m.record).collect();
        serde_json::to_writer_pretty(&mut *out, &records)
    };
    written.context("Failed to serialize matches to JSON")?;

    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, matches: &[ScoredClaim], show_scores: bool) -> Result<()> {
    if matches.is_empty() {
        writeln!(out, "No similar complaints found.")?;
        return Ok(());
    }

    for (index, scored) in matches.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        if show_scores {
            writeln!(out, "Match {} (score {:.3}):", index + 1, scored.score)?;
        } else {
            writeln!(out, "Match {}:", index + 1)?;
        }
        for (header, cell) in scored.record.iter() {
            writeln!(out, "  {}: {}", header, cell)?;
        }
    }

    Ok(())
}

/// Execute the sheets command
pub fn sheets_command(out: &mut impl Write, file: &Path) -> Result<()> {
    let source = WorkbookSource::new(file)
        .with_context(|| format!("Failed to open workbook: {}", file.display()))?;
    let default = source.default_sheet();

    for name in source.list_sheets()? {
        if default.as_deref() == Some(name.as_str()) {
            writeln!(out, "{} (default)", name)?;
        } else {
            writeln!(out, "{}", name)?;
        }
    }

    Ok(())
}

/// Execute the headers command
pub fn headers_command(out: &mut impl Write, file: &Path, sheet: Option<&str>) -> Result<()> {
    let searcher = ClaimSearcher::new(file, sheet)
        .with_context(|| format!("Failed to load claims from {}", file.display()))?;
    debug!(columns = searcher.headers().len(), "read headers");

    for (index, header) in searcher.headers().iter().enumerate() {
        let label = if header.is_empty() { "(blank)" } else { header };
        writeln!(out, "{:>3}. {}", index + 1, label)?;
    }
    writeln!(out, "{} data rows", searcher.len())?;

    Ok(())
}
