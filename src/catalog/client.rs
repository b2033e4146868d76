//! Catalog client
//!
//! The public operations of the building-instructions catalog:
//! search, text lookup, theme and year listings, and the paginated
//! theme/year retrievals.

use super::endpoint::ListingEndpoint;
use crate::config::{CatalogConfig, ListingEndpointConfig};
use crate::decode::{decode_content, decode_search, decode_theme_ranges, decode_years};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{PageRequest, PaginatedFetcher, Query};
use crate::types::{Record, ThemeRange};
use std::time::Duration;
use tracing::{debug, info};

/// Client for the building-instructions catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a client for the public service
    pub fn new() -> Result<Self> {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a client from a configuration
    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;

        let mut http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .timeout(Duration::from_secs(config.http.timeout_secs));
        if let Some(agent) = &config.http.user_agent {
            http_config = http_config.user_agent(agent);
        }
        let http = HttpClient::with_config(http_config.build())?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Paginated fetcher over a listing endpoint, bounded by the configured budget
    pub fn fetcher<'a>(
        &'a self,
        endpoint: &'a ListingEndpointConfig,
    ) -> PaginatedFetcher<ListingEndpoint<'a>> {
        PaginatedFetcher::new(ListingEndpoint::new(&self.http, endpoint))
            .with_budget(self.config.pagination.budget())
    }

    // ========================================================================
    // Search and lookup
    // ========================================================================

    /// Completion strings ("SetID SET_NAME") matching a search term
    pub async fn search(&self, term: &str) -> Result<Vec<String>> {
        let search = &self.config.search;
        let query = [
            (search.count_param.as_str(), search.results_max.to_string()),
            (search.query_param.as_str(), term.to_string()),
        ];
        let body = self.http.get_text(&search.path, &query).await?;
        let results = decode_search(&body)?;
        debug!("Search '{}' matched {} entries", term, results.len());
        Ok(results)
    }

    /// Records for a completion string returned by [`search`](Self::search).
    ///
    /// Only the first page is requested.
    pub async fn get_by_text(&self, text: &str) -> Result<Vec<Record>> {
        let endpoint = ListingEndpoint::new(&self.http, &self.config.get_by_text);
        let body = endpoint.fetch_body(&PageRequest::first(text)).await?;
        decode_content(&body)
    }

    // ========================================================================
    // Themes
    // ========================================================================

    /// Every record for a theme range, or a continuation of one
    pub async fn get_for_theme_range(&self, range: impl Into<Query>) -> Result<Vec<Record>> {
        let query = range.into();
        self.fetcher(&self.config.theme_range).fetch_all(query).await
    }

    /// Every record for a theme looked up by exact name.
    ///
    /// Resolves to an empty list unless exactly one theme carries the name.
    pub async fn get_for_theme_name(&self, name: &str) -> Result<Vec<Record>> {
        let ranges = self.get_theme_ranges().await?;
        let matches: Vec<&ThemeRange> = ranges.iter().filter(|r| r.name == name).collect();

        match matches.as_slice() {
            [range] => {
                info!("Theme '{}' resolved to range {}", name, range.value);
                let value = range.value.clone();
                self.get_for_theme_range(value).await
            }
            _ => {
                debug!("Theme '{}' matched {} ranges, returning nothing", name, matches.len());
                Ok(Vec::new())
            }
        }
    }

    /// Themes and their range identifiers, in dropdown order
    pub async fn get_theme_ranges(&self) -> Result<Vec<ThemeRange>> {
        let body = self.http.get_text(&self.config.page, &[]).await?;
        decode_theme_ranges(&body, &self.config.theme_selector)
    }

    // ========================================================================
    // Years
    // ========================================================================

    /// Every record for a launch year, or a continuation of one
    pub async fn get_for_year(&self, year: impl Into<Query>) -> Result<Vec<Record>> {
        let query = year.into();
        self.fetcher(&self.config.year).fetch_all(query).await
    }

    /// Years instructions have been published for, in dropdown order
    pub async fn get_years(&self) -> Result<Vec<u16>> {
        let body = self.http.get_text(&self.config.page, &[]).await?;
        decode_years(&body, &self.config.year_selector)
    }
}
