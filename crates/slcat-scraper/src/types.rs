//! Searchspring search API response types (`resultsFormat=native`).
//!
//! Only the parts the walker needs are typed. Items stay as raw JSON maps:
//! field names vary between catalogs (`sale_price` vs `salePrice`,
//! `thumbnail_image` vs `thumbnailImage`) and the full payload is carried
//! through to the output untouched.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One page of `GET /api/search/search.json`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPage {
    /// Absent on some pages, notably past-the-end pages.
    #[serde(default)]
    pub pagination: Option<Pagination>,

    #[serde(default)]
    pub results: Vec<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

impl SearchPage {
    /// `totalPages` as reported by this page, if any.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.as_ref().and_then(|p| p.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_page() {
        let page: SearchPage = serde_json::from_str(
            r#"{"pagination":{"totalPages":3,"currentPage":1},"results":[{"name":"A","url":"/p/1"}]}"#,
        )
        .unwrap();
        assert_eq!(page.total_pages(), Some(3));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0]["name"], "A");
    }

    #[test]
    fn missing_fields_default() {
        let page: SearchPage = serde_json::from_str("{}").unwrap();
        assert!(page.total_pages().is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn null_pagination_and_total_pages() {
        let page: SearchPage =
            serde_json::from_str(r#"{"pagination":null,"results":[]}"#).unwrap();
        assert!(page.total_pages().is_none());

        let page: SearchPage =
            serde_json::from_str(r#"{"pagination":{"totalPages":null}}"#).unwrap();
        assert!(page.total_pages().is_none());
    }
}
