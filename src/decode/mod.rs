//! Response decoder module
//!
//! Turns raw response bodies into typed values.
//!
//! # Overview
//!
//! - [`envelope`] parses the service's JSON bodies: the `Content`/`MoreData`
//!   page envelope and the plain string list returned by search.
//! - [`options`] selects `<option>` elements from the catalog landing page
//!   to enumerate themes and years.

pub mod envelope;
pub mod options;

pub use envelope::{decode_content, decode_page, decode_search};
pub use options::{decode_theme_ranges, decode_years, extract_options, OptionEntry};
