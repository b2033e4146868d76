//! Pagination types and traits
//!
//! Defines the page request/response shapes, the per-fetch aggregation
//! state, and the [`PageSource`] seam the fetcher pulls pages through.

use crate::error::{Error, Result};
use crate::types::{Record, ThemeRange};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Index of the first item of the page
    pub offset: u32,
    /// Theme range, year, or other listing key
    pub query_value: String,
}

impl PageRequest {
    pub fn new(offset: u32, query_value: impl Into<String>) -> Self {
        Self {
            offset,
            query_value: query_value.into(),
        }
    }

    /// First page for a query value
    pub fn first(query_value: impl Into<String>) -> Self {
        Self::new(0, query_value)
    }

    /// The request following this one after `received` items came back
    pub fn following(&self, received: usize) -> Result<Self> {
        Ok(Self {
            offset: advance(self.offset, received)?,
            query_value: self.query_value.clone(),
        })
    }
}

/// Offset after `received` more items, failing when it no longer fits a `u32`
fn advance(offset: u32, received: usize) -> Result<u32> {
    u32::try_from(received)
        .ok()
        .and_then(|received| offset.checked_add(received))
        .ok_or_else(|| {
            Error::upstream(format!(
                "offset overflow: {received} items past offset {offset}"
            ))
        })
}

/// One page as returned by the remote service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResponse {
    pub items: Vec<Record>,
    /// Continuation flag (`MoreData`)
    pub has_more: bool,
}

impl PageResponse {
    pub fn new(items: Vec<Record>, has_more: bool) -> Self {
        Self { items, has_more }
    }
}

/// Input to a paginated fetch: a bare query value or a continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Fresh fetch from offset 0
    Start(String),
    /// Continue from an explicit offset
    Resume(PageRequest),
}

impl Query {
    /// The first request this query issues
    pub fn into_request(self) -> PageRequest {
        match self {
            Self::Start(value) => PageRequest::first(value),
            Self::Resume(request) => request,
        }
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::Start(value.to_string())
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Self::Start(value)
    }
}

impl From<&String> for Query {
    fn from(value: &String) -> Self {
        Self::Start(value.clone())
    }
}

impl From<u16> for Query {
    fn from(year: u16) -> Self {
        Self::Start(year.to_string())
    }
}

impl From<u32> for Query {
    fn from(value: u32) -> Self {
        Self::Start(value.to_string())
    }
}

impl From<&ThemeRange> for Query {
    fn from(range: &ThemeRange) -> Self {
        Self::Start(range.value.clone())
    }
}

impl From<PageRequest> for Query {
    fn from(request: PageRequest) -> Self {
        Self::Resume(request)
    }
}

/// Records gathered so far by one in-flight fetch.
///
/// `next_offset` is the start offset plus the number of records absorbed.
#[derive(Debug, Clone, Default)]
pub struct AggregationState {
    accumulated: Vec<Record>,
    next_offset: u32,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a fetch resumed at `offset`
    pub fn starting_at(offset: u32) -> Self {
        Self {
            accumulated: Vec::new(),
            next_offset: offset,
        }
    }

    /// Append a page's items after everything accumulated so far
    pub fn absorb(&mut self, items: Vec<Record>) -> Result<()> {
        self.next_offset = advance(self.next_offset, items.len())?;
        self.accumulated.extend(items);
        Ok(())
    }

    pub fn next_offset(&self) -> u32 {
        self.next_offset
    }

    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.accumulated
    }
}

/// Optional bounds on a paginated fetch. The default is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageBudget {
    /// Maximum number of page requests
    pub max_pages: Option<u32>,
    /// Wall-clock limit for the whole fetch
    pub max_duration: Option<Duration>,
}

impl PageBudget {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn max_pages(pages: u32) -> Self {
        Self {
            max_pages: Some(pages),
            max_duration: None,
        }
    }

    #[must_use]
    pub fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    /// Fail if another page would exceed the page limit.
    ///
    /// A limit of zero permits no requests at all.
    pub fn check(&self, pages_fetched: u32, next_offset: u32) -> Result<()> {
        match self.max_pages {
            Some(max) if pages_fetched >= max => Err(Error::PageBudgetExceeded {
                pages: pages_fetched,
                offset: next_offset,
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn timeout_error(&self) -> Error {
        Error::Timeout {
            timeout_ms: self
                .max_duration
                .map_or(0, |d| d.as_millis() as u64),
        }
    }
}

/// Anything that can answer a [`PageRequest`]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch exactly one page
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for &T {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse> {
        (**self).fetch_page(request).await
    }
}
