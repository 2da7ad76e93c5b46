//! Integration tests for checkout and customer order management.
//!
//! Run with: cargo test -p gymstore-integration-tests --test checkout

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use gymstore_core::OrderNumber;
use gymstore_integration_tests::{CUSTOMER_EMAIL, TestApp, checkout_form};
use serde_json::json;

#[tokio::test]
async fn test_checkout_requires_login() {
    let mut app = TestApp::new();
    app.add_to_cart(11, 1, None, None).await;

    let resp = app
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "cod"))
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = app.get("/cart/count").await;
    assert_eq!(resp.body["count"], 1);
}

#[tokio::test]
async fn test_empty_cart_is_rejected() {
    let mut app = TestApp::new();
    app.login(CUSTOMER_EMAIL).await;

    let resp = app
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "cod"))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_incomplete_shipping_details() {
    let mut app = TestApp::new();
    app.login(CUSTOMER_EMAIL).await;
    app.add_to_cart(11, 1, None, None).await;

    let mut form = checkout_form(CUSTOMER_EMAIL, "cod");
    form["address"] = json!("   ");
    let resp = app.post_json("/checkout", form).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app.get("/cart/count").await;
    assert_eq!(resp.body["count"], 1);
}

#[tokio::test]
async fn test_order_placed_clears_cart_and_returns_home() {
    let mut app = TestApp::new();
    app.login(CUSTOMER_EMAIL).await;
    app.add_to_cart(1, 2, Some("5Lbs"), Some("Double Rich Chocolate"))
        .await;
    app.add_to_cart(11, 1, None, None).await;
    app.navigate(json!({ "kind": "checkout" }), 900).await;

    let resp = app
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "card"))
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let order = resp.body;
    assert!(OrderNumber::parse(order["id"].as_str().unwrap()).is_ok());
    assert_eq!(order["status"], "processing");
    assert_eq!(order["payment_status"], "paid");
    assert_eq!(order["total"], "3850000");
    assert_eq!(order["items"].as_array().map(Vec::len), Some(2));

    let resp = app.get("/").await;
    assert_eq!(resp.body["page"]["kind"], "home");
    assert_eq!(resp.body["depth"], 1);
    assert_eq!(resp.body["cart_count"], 0);

    let resp = app.get("/account/orders").await;
    assert_eq!(resp.body[0]["id"], order["id"]);
}

#[tokio::test]
async fn test_cash_on_delivery_starts_unpaid() {
    let mut app = TestApp::new();
    app.login(CUSTOMER_EMAIL).await;
    app.add_to_cart(11, 1, None, None).await;

    let resp = app
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "cod"))
        .await;
    assert_eq!(resp.body["payment_status"], "unpaid");
}

#[tokio::test]
async fn test_cancel_own_order() {
    let mut app = TestApp::new();
    app.login(CUSTOMER_EMAIL).await;
    app.add_to_cart(11, 1, None, None).await;
    let resp = app
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "cod"))
        .await;
    let id = resp.body["id"].as_str().unwrap().to_string();

    let resp = app.post(&format!("/account/orders/{id}/cancel")).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "cancelled");

    // Cancelling twice is a conflict
    let resp = app.post(&format!("/account/orders/{id}/cancel")).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cannot_cancel_someone_elses_order() {
    let mut owner = TestApp::new();
    owner.login(CUSTOMER_EMAIL).await;
    owner.add_to_cart(11, 1, None, None).await;
    let resp = owner
        .post_json("/checkout", checkout_form(CUSTOMER_EMAIL, "cod"))
        .await;
    let id = resp.body["id"].as_str().unwrap().to_string();

    let mut other = owner.new_visitor();
    other.login("binh.tran@example.com").await;
    let resp = other.post(&format!("/account/orders/{id}/cancel")).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = other.get("/account/orders").await;
    assert!(resp.body.as_array().unwrap().iter().all(|o| o["id"] != id.as_str()));
}

#[tokio::test]
async fn test_account_requires_login() {
    let mut app = TestApp::new();

    let resp = app.get("/account").await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    let resp = app.get("/account/orders").await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}
