//! Integration tests for the Samaj portal.
//!
//! These tests drive a running portal over HTTP, so they are all
//! `#[ignore]`d and `cargo test` stays hermetic without a server.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations, then provision the two seeded test accounts
//! cargo run -p samaj-cli -- migrate
//! cargo run -p samaj-cli -- admin create \
//!     -e super@test.samaj.org -n "Test Super" -r super_admin -p test-super-password
//! cargo run -p samaj-cli -- admin create \
//!     -e standard@test.samaj.org -n "Test Standard" -p test-standard-password
//!
//! # Start the portal, then run the ignored tests
//! cargo run -p samaj-portal &
//! cargo test -p samaj-integration-tests -- --ignored
//! ```
//!
//! Tests that mutate accounts create their own throwaway accounts; the
//! two seeded ones are only ever used to log in.
//!
//! # Environment Variables
//!
//! - `PORTAL_BASE_URL` - Portal URL (default: `http://localhost:3002`)
//! - `PORTAL_TEST_SUPER_EMAIL` / `PORTAL_TEST_SUPER_PASSWORD`
//! - `PORTAL_TEST_STANDARD_EMAIL` / `PORTAL_TEST_STANDARD_PASSWORD`

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

/// Base URL for the portal API (configurable via environment).
#[must_use]
pub fn portal_base_url() -> String {
    std::env::var("PORTAL_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}

/// Email of the seeded super admin test account.
#[must_use]
pub fn super_admin_email() -> String {
    std::env::var("PORTAL_TEST_SUPER_EMAIL").unwrap_or_else(|_| "super@test.samaj.org".to_string())
}

/// Password of the seeded super admin test account.
#[must_use]
pub fn super_admin_password() -> String {
    std::env::var("PORTAL_TEST_SUPER_PASSWORD").unwrap_or_else(|_| "test-super-password".to_string())
}

/// Email of the seeded standard admin test account.
#[must_use]
pub fn standard_admin_email() -> String {
    std::env::var("PORTAL_TEST_STANDARD_EMAIL")
        .unwrap_or_else(|_| "standard@test.samaj.org".to_string())
}

/// Password of the seeded standard admin test account.
#[must_use]
pub fn standard_admin_password() -> String {
    std::env::var("PORTAL_TEST_STANDARD_PASSWORD")
        .unwrap_or_else(|_| "test-standard-password".to_string())
}

/// Plain HTTP client.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// Log in and return the bearer token.
pub async fn login(client: &Client, email: &str, password: &str) -> String {
    let resp = client
        .post(format!("{}/api/auth/login", portal_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(resp.status(), StatusCode::OK, "login failed for {email}");

    let body: Value = resp.json().await.expect("Failed to parse login response");
    body["token"]
        .as_str()
        .expect("login response missing token")
        .to_string()
}

/// Log in as the seeded super admin.
pub async fn super_admin_token(client: &Client) -> String {
    login(client, &super_admin_email(), &super_admin_password()).await
}

/// Log in as the seeded standard admin.
pub async fn standard_admin_token(client: &Client) -> String {
    login(client, &standard_admin_email(), &standard_admin_password()).await
}

/// Create a throwaway standard admin via the API.
///
/// Returns `(id, email, password)`. The email is unique per call, so
/// tests can run in parallel without colliding.
pub async fn create_test_admin(client: &Client, super_token: &str) -> (i64, String, String) {
    let email = format!("it-{}@test.samaj.org", Uuid::new_v4().simple());
    let password = format!("pw-{}", Uuid::new_v4().simple());

    let resp = client
        .post(format!("{}/api/admins", portal_base_url()))
        .bearer_auth(super_token)
        .json(&json!({
            "email": email,
            "full_name": "Integration Test Admin",
            "password": password,
        }))
        .send()
        .await
        .expect("Failed to create test admin");

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse create response");
    let id = body["id"].as_i64().expect("create response missing id");

    (id, email, password)
}
