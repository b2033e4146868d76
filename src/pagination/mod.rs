//! Pagination module
//!
//! # Overview
//!
//! The catalog's listing endpoints return results in bounded chunks with a
//! `MoreData` continuation flag. [`PaginatedFetcher`] chains page requests,
//! advancing the offset by the number of items actually received, until the
//! flag is false. All accumulation state is local to a single fetch.

mod fetcher;
mod types;

pub use fetcher::PaginatedFetcher;
pub use types::{AggregationState, PageBudget, PageRequest, PageResponse, PageSource, Query};
