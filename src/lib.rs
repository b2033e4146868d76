//! # brick-instructions
//!
//! An async client for the public LEGO building-instructions catalog.
//!
//! ## Features
//!
//! - **Search**: Free-text completion over set numbers and names
//! - **Browse**: List themes and launch years from the catalog page
//! - **Paginated retrieval**: Follow the service's `MoreData` flag until a
//!   theme or year listing is complete, with an optional page/time budget
//! - **Explicit errors**: Every operation returns `Result<T, Error>`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brick_instructions::{CatalogClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = CatalogClient::new()?;
//!
//!     for theme in client.get_theme_ranges().await? {
//!         println!("{} => {}", theme.name, theme.value);
//!     }
//!
//!     let sets = client.get_for_theme_name("World Racers").await?;
//!     println!("{} instruction sets", sets.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CatalogClient                         │
//! │  search  get_by_text  get_for_theme_*  get_for_year  get_*  │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬──────────────────┐
//! │  Pagination  │          Decode          │       HTTP       │
//! ├──────────────┼──────────────────────────┼──────────────────┤
//! │ PageSource   │ Content/MoreData JSON    │ reqwest GET      │
//! │ Fetcher      │ dropdown <option> HTML   │ timeout, status  │
//! │ PageBudget   │                          │                  │
//! └──────────────┴──────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Record types and type aliases
pub mod types;

/// Catalog configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Response decoders (JSON envelopes, HTML dropdowns)
pub mod decode;

/// Paginated fetching
pub mod pagination;

/// Catalog client and operations
pub mod catalog;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::CatalogClient;
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use pagination::{PageBudget, PageRequest, PaginatedFetcher, Query};
pub use types::{Record, ThemeRange};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
