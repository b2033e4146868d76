//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse and search the LEGO building-instructions catalog
#[derive(Parser, Debug)]
#[command(name = "brick-instructions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Stop paginated fetches after this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search set names and numbers
    Search {
        term: String,
    },

    /// Fetch instructions for a search result string
    Text {
        text: String,
    },

    /// Fetch every instruction in a theme range
    ThemeRange {
        /// Range identifier (e.g. 10000-20130)
        range: String,

        /// Start offset
        #[arg(long)]
        from: Option<u32>,
    },

    /// Fetch every instruction in a theme, by exact name
    Theme {
        name: String,
    },

    /// Fetch every instruction for a launch year
    Year {
        year: u16,

        /// Start offset
        #[arg(long)]
        from: Option<u32>,
    },

    /// List themes and their range identifiers
    Themes,

    /// List years with published instructions
    Years,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
