//! Dropdown option extraction from the catalog landing page

use crate::error::{Error, Result};
use crate::types::ThemeRange;
use scraper::{Html, Selector};

/// A selected element's text and `value` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub value: String,
}

/// Select elements matching `selector` and keep those with a non-empty `value`,
/// in document order.
pub fn extract_options(html: &str, selector: &str) -> Result<Vec<OptionEntry>> {
    let sel = Selector::parse(selector).map_err(|e| Error::selector(selector, e.to_string()))?;
    let doc = Html::parse_document(html);

    let entries = doc
        .select(&sel)
        .filter_map(|el| {
            let value = el.value().attr("value")?;
            if value.is_empty() {
                return None;
            }
            Some(OptionEntry {
                label: el.text().collect::<String>().trim().to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    Ok(entries)
}

/// Theme dropdown → name/range pairs
pub fn decode_theme_ranges(html: &str, selector: &str) -> Result<Vec<ThemeRange>> {
    Ok(extract_options(html, selector)?
        .into_iter()
        .map(|entry| ThemeRange {
            name: entry.label,
            value: entry.value,
        })
        .collect())
}

/// Year dropdown → launch years
pub fn decode_years(html: &str, selector: &str) -> Result<Vec<u16>> {
    extract_options(html, selector)?
        .into_iter()
        .map(|entry| {
            entry.value.trim().parse::<u16>().map_err(|_| {
                Error::upstream(format!("year option has non-numeric value '{}'", entry.value))
            })
        })
        .collect()
}
