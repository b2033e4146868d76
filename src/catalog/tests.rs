//! Tests for the catalog client

use super::*;
use crate::config::CatalogConfig;
use crate::error::Error;
use crate::pagination::PageRequest;
use crate::types::ThemeRange;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LANDING_PAGE: &str = include_str!("../../tests/fixtures/buildinginstructions.html");
const THEME_PATH: &str = "/Views/Service/Pages/BIService.ashx/GetThemeListHtml";
const YEAR_PATH: &str = "/Views/Service/Pages/BIService.ashx/SearchByLaunchYear";

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::with_config(CatalogConfig::default().with_base_url(server.uri())).unwrap()
}

fn page(ids: &[&str], more: bool) -> ResponseTemplate {
    let content: Vec<_> = ids
        .iter()
        .map(|id| json!({"ProductId": id, "ProductName": format!("Set {id}")}))
        .collect();
    ResponseTemplate::new(200).set_body_json(json!({"Content": content, "MoreData": more}))
}

async fn mount_page(server: &MockServer, endpoint: &str, value: &str, offset: u32, ids: &[&str], more: bool) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("fromIdx", offset.to_string()))
        .and(query_param("searchValue", value))
        .respond_with(page(ids, more))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_landing_page(server: &MockServer, html: &str) {
    Mock::given(method("GET"))
        .and(path("/en-us/buildinginstructions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

fn ids(records: &[crate::types::Record]) -> Vec<&str> {
    records.iter().filter_map(|r| r.product_id()).collect()
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = CatalogConfig::default().with_base_url("not a url");
    assert!(CatalogClient::with_config(config).is_err());
}

#[tokio::test]
async fn test_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Views/Service/Pages/BIService.ashx/GetCompletionList"))
        .and(query_param("count", "10"))
        .and(query_param("prefixText", "train"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "10020 Santa Fe Train Locomotive",
            "7938 Passenger Train",
            "3677 Red Cargo Train"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search("train").await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.to_lowercase().contains("train")));
}

#[tokio::test]
async fn test_get_by_text_requests_first_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Views/Service/Pages/BIService.ashx/GetCompletionListHtml"))
        .and(query_param("fromIdx", "0"))
        .and(query_param("prefixText", "10020 Santa Fe Locomotive City Trains"))
        .respond_with(page(&["10020"], true))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .get_by_text("10020 Santa Fe Locomotive City Trains")
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["10020"]);
}

#[tokio::test]
async fn test_get_for_theme_range_follows_more_data() {
    let server = MockServer::start().await;
    mount_page(&server, THEME_PATH, "10000-20130", 0, &["8898", "8899"], true).await;
    mount_page(&server, THEME_PATH, "10000-20130", 2, &["8864", "8865", "8866"], true).await;
    mount_page(&server, THEME_PATH, "10000-20130", 5, &["8137"], false).await;

    let records = client_for(&server)
        .get_for_theme_range("10000-20130")
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["8898", "8899", "8864", "8865", "8866", "8137"]);
}

#[tokio::test]
async fn test_get_for_theme_range_continuation() {
    let server = MockServer::start().await;
    mount_page(&server, THEME_PATH, "10000-20130", 2, &["8864"], true).await;
    mount_page(&server, THEME_PATH, "10000-20130", 3, &["8137"], false).await;

    let records = client_for(&server)
        .get_for_theme_range(PageRequest::new(2, "10000-20130"))
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["8864", "8137"]);
}

#[tokio::test]
async fn test_get_for_year() {
    let server = MockServer::start().await;
    mount_page(&server, YEAR_PATH, "1997", 0, &["6335", "6336"], true).await;
    mount_page(&server, YEAR_PATH, "1997", 2, &["6337"], false).await;

    let records = client_for(&server).get_for_year(1997u16).await.unwrap();

    assert_eq!(ids(&records), vec!["6335", "6336", "6337"]);
}

#[tokio::test]
async fn test_get_for_year_respects_page_budget() {
    let server = MockServer::start().await;
    mount_page(&server, YEAR_PATH, "2013", 0, &["1"], true).await;
    mount_page(&server, YEAR_PATH, "2013", 1, &["2"], true).await;

    let config = CatalogConfig::default()
        .with_base_url(server.uri())
        .with_max_pages(2);
    let client = CatalogClient::with_config(config).unwrap();

    let err = client.get_for_year(2013u16).await.unwrap_err();
    assert!(matches!(err, Error::PageBudgetExceeded { pages: 2, offset: 2 }));
}

#[tokio::test]
async fn test_paginated_fetch_surfaces_bad_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(YEAR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_for_year(1997u16).await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_get_theme_ranges() {
    let server = MockServer::start().await;
    mount_landing_page(&server, LANDING_PAGE).await;

    let ranges = client_for(&server).get_theme_ranges().await.unwrap();

    assert_eq!(ranges.len(), 4);
    assert_eq!(ranges[1], ThemeRange::new("World Racers", "10000-20130"));
}

#[tokio::test]
async fn test_get_years() {
    let server = MockServer::start().await;
    mount_landing_page(&server, LANDING_PAGE).await;

    let years = client_for(&server).get_years().await.unwrap();

    assert_eq!(years, vec![2013, 2012, 1997]);
}

#[tokio::test]
async fn test_get_for_theme_name_matches_range() {
    let server = MockServer::start().await;
    mount_landing_page(&server, LANDING_PAGE).await;
    Mock::given(method("GET"))
        .and(path(THEME_PATH))
        .and(query_param("fromIdx", "0"))
        .and(query_param("searchValue", "10000-20130"))
        .respond_with(page(&["8898", "8899"], false))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let by_name = client.get_for_theme_name("World Racers").await.unwrap();
    let by_range = client.get_for_theme_range("10000-20130").await.unwrap();

    assert_eq!(by_name, by_range);
    assert_eq!(by_name.len(), 2);
}

#[tokio::test]
async fn test_get_for_theme_name_unknown_is_empty() {
    let server = MockServer::start().await;
    mount_landing_page(&server, LANDING_PAGE).await;
    Mock::given(method("GET"))
        .and(path(THEME_PATH))
        .respond_with(page(&["1"], false))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.get_for_theme_name("Space Police").await.unwrap().is_empty());
    // Exact match only
    assert!(client.get_for_theme_name("world racers").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_for_theme_name_ambiguous_is_empty() {
    let server = MockServer::start().await;
    let html = r#"<select id="ThemeDropdown">
        <option value="10000-20010">Castle</option>
        <option value="10000-20011">Castle</option>
    </select>"#;
    mount_landing_page(&server, html).await;
    Mock::given(method("GET"))
        .and(path(THEME_PATH))
        .respond_with(page(&["1"], false))
        .expect(0)
        .mount(&server)
        .await;

    let records = client_for(&server).get_for_theme_name("Castle").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_get_for_theme_name_propagates_listing_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/buildinginstructions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_for_theme_name("World Racers")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}
