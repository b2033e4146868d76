//! JSON response envelopes
//!
//! Listing endpoints answer with `{"Content": [...], "MoreData": bool}`.
//! Search answers with a bare array of completion strings.

use crate::error::{Error, Result};
use crate::pagination::PageResponse;
use crate::types::Record;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    #[serde(rename = "Content", default)]
    content: Option<Vec<Record>>,

    #[serde(rename = "MoreData", default)]
    more_data: Option<bool>,
}

impl ContentEnvelope {
    fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    fn into_content(self) -> Result<Vec<Record>> {
        self.content
            .ok_or_else(|| Error::upstream("response has no Content array"))
    }
}

/// Decode one page of a paginated listing. A missing `MoreData` means no more pages.
pub fn decode_page(body: &str) -> Result<PageResponse> {
    let envelope = ContentEnvelope::parse(body)?;
    let has_more = envelope.more_data.unwrap_or(false);
    Ok(PageResponse {
        items: envelope.into_content()?,
        has_more,
    })
}

/// Decode only the `Content` of a listing response, ignoring `MoreData`
pub fn decode_content(body: &str) -> Result<Vec<Record>> {
    ContentEnvelope::parse(body)?.into_content()
}

/// Decode the search completion list
pub fn decode_search(body: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}
