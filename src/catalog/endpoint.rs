//! Listing endpoints as page sources

use crate::config::ListingEndpointConfig;
use crate::decode::decode_page;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{PageRequest, PageResponse, PageSource};
use async_trait::async_trait;

/// One `Content`/`MoreData` endpoint bound to an HTTP client
#[derive(Debug, Clone, Copy)]
pub struct ListingEndpoint<'a> {
    http: &'a HttpClient,
    config: &'a ListingEndpointConfig,
}

impl<'a> ListingEndpoint<'a> {
    pub fn new(http: &'a HttpClient, config: &'a ListingEndpointConfig) -> Self {
        Self { http, config }
    }

    /// Query parameters for a page request, offset first
    pub fn query_params(&self, request: &PageRequest) -> Vec<(&'a str, String)> {
        vec![
            (self.config.offset_param.as_str(), request.offset.to_string()),
            (self.config.query_param.as_str(), request.query_value.clone()),
        ]
    }

    /// Raw body of one page
    pub async fn fetch_body(&self, request: &PageRequest) -> Result<String> {
        self.http
            .get_text(&self.config.path, &self.query_params(request))
            .await
    }
}

#[async_trait]
impl PageSource for ListingEndpoint<'_> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse> {
        let body = self.fetch_body(request).await?;
        decode_page(&body)
    }
}
