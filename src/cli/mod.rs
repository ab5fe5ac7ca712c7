//! Command-line interface for shelf.
//!
//! Runs the catalog demo, lists the demo entries, checks identifier codes
//! and shows the resolved configuration.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{self, OutputFormat, ResolvedConfig};
use crate::domain::ItemKind;
use crate::library::{demo_catalog, Catalog};

pub mod render;

pub use render::DemoReport;

/// shelf - In-memory media catalog
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the demo catalog and print every query result (default)
    Demo {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List demo catalog entries in insertion order
    List {
        /// Only show one kind (book, magazine, dvd)
        #[arg(short, long)]
        kind: Option<ItemKind>,
    },

    /// Check the ISBN of every book in the demo catalog
    Check,

    /// Show resolved configuration (debug)
    Config {
        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Flags layered over SHELF_YEAR, SHELF_FORMAT and the config file
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct QueryArgs {
    /// Year used by the year filter
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl QueryArgs {
    /// Merge the flags over the resolved configuration
    fn apply(&self, cfg: &ResolvedConfig) -> (i32, OutputFormat) {
        let year = self.year.unwrap_or(cfg.year);
        let format = self.format.map(OutputFormat::from).unwrap_or(cfg.format);
        (year, format)
    }
}

/// Output format for CLI (maps to OutputFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Labelled plain text
    Text,

    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Execute the CLI command, printing to stdout
    pub fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        self.execute_to(&mut stdout.lock())
    }

    /// Execute the CLI command, writing its output to `out`
    pub fn execute_to<W: Write>(self, out: &mut W) -> Result<()> {
        let command = self.command.unwrap_or(Commands::Demo {
            query: QueryArgs::default(),
        });

        match command {
            Commands::Demo { query } => run_demo(&query, out),
            Commands::List { kind } => list_entries(&demo_catalog(), kind, out),
            Commands::Check => check_identifiers(&demo_catalog(), out),
            Commands::Config { query } => show_config(&query, out),
        }
    }
}

/// Print the four query results over the demo catalog
fn run_demo(query: &QueryArgs, out: &mut impl Write) -> Result<()> {
    let cfg = config::config()?;
    let (year, format) = query.apply(cfg);

    let catalog = demo_catalog();
    let report = DemoReport::build(&catalog, year, cfg.duration_unit.as_str());

    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    Ok(())
}

/// List catalog entries, optionally restricted to one kind
fn list_entries(catalog: &Catalog, kind: Option<ItemKind>, out: &mut impl Write) -> Result<()> {
    let entries = match kind {
        Some(kind) => catalog.filter_by_kind(kind),
        None => catalog.iter().collect(),
    };

    if entries.is_empty() {
        writeln!(out, "No entries found")?;
        return Ok(());
    }

    writeln!(out, "{:<4} {:<10} {:<50}", "#", "KIND", "TITLE")?;
    writeln!(out, "{}", "-".repeat(64))?;

    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<10} {:<50}",
            i + 1,
            entry.kind().to_string(),
            entry.title()
        )?;
    }

    writeln!(out, "\nTotal: {} of {} entries", entries.len(), catalog.len())?;

    Ok(())
}

/// Report which books carry a malformed ISBN
fn check_identifiers(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    let mut malformed = 0;

    for book in catalog.books() {
        match book.check_isbn() {
            Ok(()) => writeln!(out, "ok    {:<20} {}", book.isbn(), book.title())?,
            Err(e) => {
                malformed += 1;
                writeln!(out, "FAIL  {:<20} {}: {}", book.isbn(), book.title(), e)?;
            }
        }
    }

    writeln!(
        out,
        "\n{} of {} identifier codes are malformed",
        malformed,
        catalog.books().count()
    )?;

    Ok(())
}

/// Show resolved configuration after CLI overrides
fn show_config(query: &QueryArgs, out: &mut impl Write) -> Result<()> {
    let cfg = config::config()?;
    let (year, format) = query.apply(cfg);

    writeln!(out, "shelf configuration")?;
    writeln!(out)?;
    writeln!(
        out,
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    )?;
    writeln!(out)?;
    writeln!(out, "Demo:")?;
    writeln!(out, "  Year:          {}", year)?;
    writeln!(out)?;
    writeln!(out, "Output:")?;
    writeln!(out, "  Format:        {}", format)?;
    writeln!(out, "  Duration unit: {}", cfg.duration_unit)?;

    Ok(())
}
