//! Integration tests for GymStore.
//!
//! The storefront router is driven in-process with `tower::ServiceExt::oneshot`;
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gymstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `navigation` - history stack driven over HTTP
//! - `cart` - cart aggregation and validation
//! - `checkout` - order placement and cancellation
//! - `admin` - back-office access control and CRUD

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use gymstore_storefront::config::StorefrontConfig;
use gymstore_storefront::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Admin sign-in used by the tests.
pub const ADMIN_EMAIL: &str = "admin@stu.ptit.edu.vn";

/// Customer sign-in used by the tests.
pub const CUSTOMER_EMAIL: &str = "an.nguyen@example.com";

/// A response with its body parsed as JSON (`Null` when empty).
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// One browser talking to a fresh storefront.
///
/// The session cookie is carried between requests the way a browser would.
pub struct TestApp {
    state: AppState,
    router: Router,
    cookie: Option<String>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Start a storefront over the seeded catalog.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default());
        let router = gymstore_storefront::app(state.clone());
        Self {
            state,
            router,
            cookie: None,
        }
    }

    /// A second browser on the same storefront, without cookies.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            state: self.state.clone(),
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Shared state, for inspecting the store directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request, keeping any session cookie the response sets.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not JSON.
    pub async fn request(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        if let Some(pair) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
        {
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str) -> TestResponse {
        self.request(Method::POST, uri, None).await
    }

    pub async fn post_json(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put_json(&mut self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Sign in with any password.
    ///
    /// # Panics
    ///
    /// Panics if the sign-in is rejected.
    pub async fn login(&mut self, email: &str) -> TestResponse {
        let response = self
            .post_json(
                "/auth/login",
                json!({ "email": email, "password": "secret" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response
    }

    /// Navigate to `target`, leaving the current page at `scroll_offset`.
    pub async fn navigate(&mut self, target: Value, scroll_offset: u32) -> TestResponse {
        self.post_json(
            "/navigate",
            json!({ "target": target, "scroll_offset": scroll_offset }),
        )
        .await
    }

    /// Add a product to the cart.
    pub async fn add_to_cart(
        &mut self,
        product_id: i32,
        quantity: u32,
        size: Option<&str>,
        flavor: Option<&str>,
    ) -> TestResponse {
        self.post_json(
            "/cart/add",
            json!({
                "product_id": product_id,
                "quantity": quantity,
                "size": size,
                "flavor": flavor,
            }),
        )
        .await
    }
}

/// A valid checkout form for `email`.
#[must_use]
pub fn checkout_form(email: &str, payment_method: &str) -> Value {
    json!({
        "name": "Nguyễn Văn An",
        "email": email,
        "phone": "0901234567",
        "address": "123 Đường A, Quận B, TP. HCM",
        "payment_method": payment_method,
    })
}
