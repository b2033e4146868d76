//! Common types used throughout brick-instructions
//!
//! This module contains the record types returned by the catalog
//! and the JSON value alias they wrap.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Record
// ============================================================================

/// One catalog entry (build-instruction metadata) as returned by the service.
///
/// The payload is passed through untouched; serialization is transparent so a
/// `Record` round-trips to exactly the JSON the service sent. The accessors
/// below only read the fields the service is known to populate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(JsonValue);

impl Record {
    /// Wrap a raw JSON value
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// Take the raw JSON value
    pub fn into_value(self) -> JsonValue {
        self.0
    }

    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(JsonValue::as_str)
    }

    /// Name of the set
    pub fn product_name(&self) -> Option<&str> {
        self.str_field("ProductName")
    }

    /// Product ID of the set
    pub fn product_id(&self) -> Option<&str> {
        self.str_field("ProductId")
    }

    /// URL of the instructions PDF
    pub fn pdf_location(&self) -> Option<&str> {
        self.str_field("PdfLocation")
    }

    /// Small product image
    pub fn image_location(&self) -> Option<&str> {
        self.str_field("ImageLocation")
    }

    /// Human-readable size of the PDF download
    pub fn download_size(&self) -> Option<&str> {
        self.str_field("DownloadSize")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("Description")
    }

    pub fn frontpage_info(&self) -> Option<&str> {
        self.str_field("FrontpageInfo")
    }

    pub fn product_image_info(&self) -> Option<&str> {
        self.str_field("ProductImageInfo")
    }

    pub fn is_alternative(&self) -> Option<bool> {
        self.get("IsAlternative").and_then(JsonValue::as_bool)
    }
}

impl From<JsonValue> for Record {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

// ============================================================================
// Theme Range
// ============================================================================

/// A theme as listed in the catalog's theme dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRange {
    /// Display name (e.g. "World Racers")
    pub name: String,
    /// Opaque range identifier (e.g. "10000-20130")
    pub value: String,
}

impl ThemeRange {
    /// Create a new theme range
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
