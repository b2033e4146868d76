//! Offset-advancing paginated fetcher
//!
//! Requests one page at a time, and while the service reports more data,
//! requests the next page at an offset equal to the number of items received
//! so far. Pages are strictly sequential.

use super::types::{AggregationState, PageBudget, PageRequest, PageResponse, PageSource, Query};
use crate::error::{Error, Result};
use crate::types::Record;
use futures::stream::{self, Stream, TryStreamExt};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Where a page stream stands between polls
struct Cursor {
    next: Option<PageRequest>,
    pages: u32,
}

/// Drives a [`PageSource`] until its continuation flag turns false
#[derive(Debug, Clone)]
pub struct PaginatedFetcher<S> {
    source: S,
    budget: PageBudget,
}

impl<S: PageSource> PaginatedFetcher<S> {
    /// Create an unbounded fetcher
    pub fn new(source: S) -> Self {
        Self {
            source,
            budget: PageBudget::unbounded(),
        }
    }

    #[must_use]
    pub fn with_budget(mut self, budget: PageBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn budget(&self) -> PageBudget {
        self.budget
    }

    /// Stream pages as they arrive.
    ///
    /// Once the page budget is spent while more data remains, the stream
    /// yields `PageBudgetExceeded` after the last permitted page.
    pub fn pages(&self, query: impl Into<Query>) -> impl Stream<Item = Result<PageResponse>> + '_ {
        let budget = self.budget;
        let deadline = budget.max_duration.map(|limit| Instant::now() + limit);
        let cursor = Cursor {
            next: Some(query.into().into_request()),
            pages: 0,
        };

        stream::try_unfold(cursor, move |mut cursor| async move {
            let Some(request) = cursor.next.take() else {
                return Ok(None);
            };
            budget.check(cursor.pages, request.offset)?;

            let page = match deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, self.source.fetch_page(&request))
                    .await
                    .map_err(|_| budget.timeout_error())??,
                None => self.source.fetch_page(&request).await?,
            };
            cursor.pages += 1;

            debug!(
                "Fetched page {} for '{}' at offset {}: {} items, more={}",
                cursor.pages,
                request.query_value,
                request.offset,
                page.items.len(),
                page.has_more
            );

            if page.has_more {
                if page.items.is_empty() {
                    warn!(
                        "Empty page with more data flagged for '{}' at offset {}",
                        request.query_value, request.offset
                    );
                }
                cursor.next = Some(request.following(page.items.len())?);
            }

            Ok::<_, Error>(Some((page, cursor)))
        })
    }

    /// Fetch every page and return all records in arrival order
    pub async fn fetch_all(&self, query: impl Into<Query>) -> Result<Vec<Record>> {
        let first = query.into().into_request();
        let query_value = first.query_value.clone();
        let mut state = AggregationState::starting_at(first.offset);
        let mut page_count = 0u32;

        let pages = self.pages(first);
        futures::pin_mut!(pages);
        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            state.absorb(page.items)?;
        }

        info!(
            "Fetched {} records for '{}' in {} pages",
            state.len(),
            query_value,
            page_count
        );
        Ok(state.into_records())
    }
}
