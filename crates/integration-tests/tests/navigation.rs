//! Integration tests for page navigation.
//!
//! Run with: cargo test -p gymstore-integration-tests --test navigation

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use gymstore_integration_tests::{CUSTOMER_EMAIL, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_fresh_visitor_sees_home() {
    let mut app = TestApp::new();

    let resp = app.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["page"]["kind"], "home");
    assert_eq!(resp.body["depth"], 1);
    assert_eq!(resp.body["can_go_back"], false);
    assert_eq!(resp.body["content"]["kind"], "home");
    assert_eq!(resp.body["content"]["best_sellers"].as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn test_back_restores_listing_and_scroll() {
    let mut app = TestApp::new();

    app.navigate(json!({ "kind": "category", "name": "Whey Protein" }), 640)
        .await;
    let resp = app
        .navigate(json!({ "kind": "product", "product_id": 3 }), 1200)
        .await;
    assert_eq!(resp.body["page"]["kind"], "product-detail");
    assert_eq!(resp.body["content"]["product"]["id"], 3);
    assert_eq!(resp.body["depth"], 3);

    let resp = app.post("/navigate/back").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["page"]["kind"], "category-listing");
    assert_eq!(resp.body["page"]["filter"]["kind"], "category");
    assert_eq!(resp.body["page"]["filter"]["value"], "Whey Protein");
    assert_eq!(resp.body["scroll_offset"], 1200);

    let resp = app.post("/navigate/back").await;
    assert_eq!(resp.body["page"]["kind"], "home");
    assert_eq!(resp.body["scroll_offset"], 640);

    // Already at the root: nothing to restore
    let resp = app.post("/navigate/back").await;
    assert_eq!(resp.body["page"]["kind"], "home");
    assert!(resp.body["scroll_offset"].is_null());
}

#[tokio::test]
async fn test_home_truncates_history() {
    let mut app = TestApp::new();

    app.navigate(json!({ "kind": "brand", "name": "Rule 1" }), 0).await;
    app.navigate(json!({ "kind": "product", "product_id": 2 }), 0).await;
    app.navigate(json!({ "kind": "brands" }), 0).await;

    let resp = app.post("/navigate/home").await;
    assert_eq!(resp.body["page"]["kind"], "home");
    assert_eq!(resp.body["depth"], 1);
    assert_eq!(resp.body["scroll_offset"], 0);
}

#[tokio::test]
async fn test_brands_menu_entry_opens_brands_page() {
    let mut app = TestApp::new();

    let resp = app
        .navigate(json!({ "kind": "category", "name": "Thương hiệu" }), 0)
        .await;
    assert_eq!(resp.body["page"]["kind"], "brands-listing");
    assert_eq!(resp.body["content"]["brands"].as_array().map(Vec::len), Some(9));
}

#[tokio::test]
async fn test_listing_sort_query() {
    let mut app = TestApp::new();
    app.navigate(json!({ "kind": "category", "name": "Whey Protein" }), 0)
        .await;

    let resp = app.get("/?sort=price-desc").await;
    assert_eq!(resp.body["content"]["sort"], "price-desc");
    let prices: Vec<u64> = resp.body["content"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["price"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(prices.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_unknown_product_is_not_pushed() {
    let mut app = TestApp::new();

    let resp = app
        .navigate(json!({ "kind": "product", "product_id": 9999 }), 0)
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = app.get("/").await;
    assert_eq!(resp.body["page"]["kind"], "home");
}

#[tokio::test]
async fn test_signed_in_pages_require_login() {
    let mut app = TestApp::new();

    for kind in ["checkout", "account", "order-history"] {
        let resp = app.navigate(json!({ "kind": kind }), 0).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{kind}");
    }

    app.login(CUSTOMER_EMAIL).await;
    let resp = app.navigate(json!({ "kind": "account" }), 0).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["content"]["user"]["email"], CUSTOMER_EMAIL);
}

#[tokio::test]
async fn test_login_resets_history() {
    let mut app = TestApp::new();
    app.navigate(json!({ "kind": "knowledge", "category": "Kiến thức Supplement" }), 0)
        .await;

    app.login(CUSTOMER_EMAIL).await;

    let resp = app.get("/").await;
    assert_eq!(resp.body["page"]["kind"], "home");
    assert_eq!(resp.body["depth"], 1);
    assert_eq!(resp.body["user"]["name"], "An.nguyen");
}

#[tokio::test]
async fn test_theme_preference_persists() {
    let mut app = TestApp::new();

    let resp = app
        .post_json("/preferences/theme", json!({ "theme": "black" }))
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let resp = app.get("/").await;
    assert_eq!(resp.body["theme"], "black");
}
