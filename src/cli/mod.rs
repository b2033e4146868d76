//! CLI module
//!
//! Command-line interface for querying the catalog.
//!
//! # Commands
//!
//! - `search` - Search set names and numbers
//! - `text` - Fetch instructions for a search result
//! - `theme-range` / `theme` - Fetch every instruction in a theme
//! - `year` - Fetch every instruction for a launch year
//! - `themes` / `years` - List the browse dropdowns

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
