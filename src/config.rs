//! Catalog configuration
//!
//! Endpoint paths, parameter names, and selectors for the remote catalog.
//! Every field defaults to the public service, so an empty YAML document
//! is a valid configuration.

use crate::error::{Error, Result};
use crate::pagination::PageBudget;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const SERVICE_PATH: &str = "/Views/Service/Pages/BIService.ashx";

// ============================================================================
// Top-Level Catalog Config
// ============================================================================

/// Complete catalog client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Scheme and host of the catalog service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTML landing page carrying the theme and year dropdowns
    #[serde(default = "default_page")]
    pub page: String,

    /// Free-text completion endpoint
    #[serde(default)]
    pub search: SearchEndpoint,

    /// Lookup of full records from a completion string
    #[serde(default = "default_get_by_text")]
    pub get_by_text: ListingEndpointConfig,

    /// Paginated listing by theme range
    #[serde(default = "default_theme_range")]
    pub theme_range: ListingEndpointConfig,

    /// Paginated listing by launch year
    #[serde(default = "default_year")]
    pub year: ListingEndpointConfig,

    /// Selector for the theme dropdown's options
    #[serde(default = "default_theme_selector")]
    pub theme_selector: String,

    /// Selector for the year dropdown's options
    #[serde(default = "default_year_selector")]
    pub year_selector: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Bounds on paginated fetches
    #[serde(default)]
    pub pagination: PaginationSettings,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            search: SearchEndpoint::default(),
            get_by_text: default_get_by_text(),
            theme_range: default_theme_range(),
            year: default_year(),
            theme_selector: default_theme_selector(),
            year_selector: default_year_selector(),
            http: HttpConfig::default(),
            pagination: PaginationSettings::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the page budget
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.pagination.max_pages = Some(max_pages);
        self
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.search.results_max == 0 {
            return Err(Error::config("search.results_max must be at least 1"));
        }
        if self.pagination.max_pages == Some(0) {
            return Err(Error::config("pagination.max_pages must be at least 1"));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://service.lego.com".to_string()
}

fn default_page() -> String {
    "/en-us/buildinginstructions".to_string()
}

fn default_theme_selector() -> String {
    "#ThemeDropdown option".to_string()
}

fn default_year_selector() -> String {
    "#YearDropdown option".to_string()
}

fn default_get_by_text() -> ListingEndpointConfig {
    ListingEndpointConfig::new(
        format!("{SERVICE_PATH}/GetCompletionListHtml"),
        "prefixText",
    )
}

fn default_theme_range() -> ListingEndpointConfig {
    ListingEndpointConfig::new(format!("{SERVICE_PATH}/GetThemeListHtml"), "searchValue")
}

fn default_year() -> ListingEndpointConfig {
    ListingEndpointConfig::new(format!("{SERVICE_PATH}/SearchByLaunchYear"), "searchValue")
}

// ============================================================================
// Endpoints
// ============================================================================

/// Search completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEndpoint {
    #[serde(default = "default_search_path")]
    pub path: String,

    /// Parameter carrying the maximum number of completions
    #[serde(default = "default_count_param")]
    pub count_param: String,

    #[serde(default = "default_prefix_param")]
    pub query_param: String,

    /// Maximum completions requested
    #[serde(default = "default_results_max")]
    pub results_max: u32,
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self {
            path: default_search_path(),
            count_param: default_count_param(),
            query_param: default_prefix_param(),
            results_max: default_results_max(),
        }
    }
}

fn default_search_path() -> String {
    format!("{SERVICE_PATH}/GetCompletionList")
}

fn default_count_param() -> String {
    "count".to_string()
}

fn default_prefix_param() -> String {
    "prefixText".to_string()
}

fn default_results_max() -> u32 {
    10
}

/// An endpoint returning a `Content`/`MoreData` envelope addressed by offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEndpointConfig {
    pub path: String,

    /// Parameter carrying the start offset
    #[serde(default = "default_offset_param")]
    pub offset_param: String,

    /// Parameter carrying the query value
    pub query_param: String,
}

impl ListingEndpointConfig {
    /// Create an endpoint config with the default offset parameter
    pub fn new(path: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            offset_param: default_offset_param(),
            query_param: query_param.into(),
        }
    }
}

fn default_offset_param() -> String {
    "fromIdx".to_string()
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent (defaults to the crate name and version)
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination limits; unset means unbounded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    #[serde(default)]
    pub max_pages: Option<u32>,

    #[serde(default)]
    pub max_duration_secs: Option<u64>,
}

impl PaginationSettings {
    /// Convert to the budget enforced by the fetcher
    pub fn budget(&self) -> PageBudget {
        PageBudget {
            max_pages: self.max_pages,
            max_duration: self.max_duration_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_public_service() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "http://service.lego.com");
        assert_eq!(config.page, "/en-us/buildinginstructions");
        assert_eq!(
            config.theme_range.path,
            "/Views/Service/Pages/BIService.ashx/GetThemeListHtml"
        );
        assert_eq!(config.theme_range.offset_param, "fromIdx");
        assert_eq!(config.theme_range.query_param, "searchValue");
        assert_eq!(config.get_by_text.query_param, "prefixText");
        assert_eq!(config.search.results_max, 10);
        assert_eq!(config.pagination.max_pages, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = CatalogConfig::from_yaml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
base_url: http://localhost:8080
search:
  results_max: 25
year:
  path: /years
  query_param: y
pagination:
  max_pages: 5
  max_duration_secs: 60
"#;
        let config = CatalogConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.search.results_max, 25);
        assert_eq!(config.search.query_param, "prefixText");
        assert_eq!(config.year.path, "/years");
        assert_eq!(config.year.offset_param, "fromIdx");
        assert_eq!(config.theme_selector, "#ThemeDropdown option");

        let budget = config.pagination.budget();
        assert_eq!(budget.max_pages, Some(5));
        assert_eq!(budget.max_duration, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            CatalogConfig::from_yaml_str("base_url: not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            CatalogConfig::from_yaml_str("pagination:\n  max_pages: 0"),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            CatalogConfig::from_yaml_str("search:\n  results_max: 0"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page: /en-gb/buildinginstructions").unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page, "/en-gb/buildinginstructions");
    }

    #[test]
    fn test_from_missing_file() {
        let err = CatalogConfig::from_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
