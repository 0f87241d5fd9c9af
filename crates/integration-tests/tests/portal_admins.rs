//! Integration tests for admin account administration.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The portal running (cargo run -p samaj-portal)
//! - The seeded test accounts (see crate docs)

use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use samaj_integration_tests::{
    client, create_test_admin, portal_base_url, standard_admin_token, super_admin_token,
};

// ============================================================================
// Role Gate Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_admin_list_requires_super_admin() {
    let client = client();
    let base_url = portal_base_url();

    // No token: identity fails first
    let resp = client
        .get(format!("{base_url}/api/admins"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Bad token on a super-only route is still 401, not 403
    let resp = client
        .get(format!("{base_url}/api/admins"))
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Authenticated but not super: 403
    let standard_token = standard_admin_token(&client).await;
    let resp = client
        .get(format!("{base_url}/api/admins"))
        .bearer_auth(&standard_token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Super admin: 200 with an array
    let super_token = super_admin_token(&client).await;
    let resp = client
        .get(format!("{base_url}/api/admins"))
        .bearer_auth(&super_token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_standard_admin_cannot_manage_accounts() {
    let client = client();
    let token = standard_admin_token(&client).await;

    let resp = client
        .post(format!("{}/api/admins", portal_base_url()))
        .bearer_auth(&token)
        .json(&json!({
            "email": "blocked@test.samaj.org",
            "full_name": "Should Not Exist",
            "password": "long-enough-password",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// ============================================================================
// Account Creation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_create_admin_and_duplicate_conflict() {
    let client = client();
    let base_url = portal_base_url();
    let super_token = super_admin_token(&client).await;

    let email = format!("dup-{}@test.samaj.org", Uuid::new_v4().simple());
    let request = json!({
        "email": email,
        "full_name": "Duplicate Check",
        "password": "long-enough-password",
        "role": "standard_admin",
    });

    let resp = client
        .post(format!("{base_url}/api/admins"))
        .bearer_auth(&super_token)
        .json(&request)
        .send()
        .await
        .expect("Failed to create admin");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["email"], email);
    assert_eq!(body["role"], "standard_admin");
    assert_eq!(body["active"], true);
    // The hash never appears in API responses
    assert!(body.get("password_hash").is_none());

    // Same email again: 409
    let resp = client
        .post(format!("{base_url}/api/admins"))
        .bearer_auth(&super_token)
        .json(&request)
        .send()
        .await
        .expect("Failed to send duplicate request");
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_create_admin_validation() {
    let client = client();
    let base_url = portal_base_url();
    let super_token = super_admin_token(&client).await;

    // Invalid email
    let resp = client
        .post(format!("{base_url}/api/admins"))
        .bearer_auth(&super_token)
        .json(&json!({
            "email": "not-an-email",
            "full_name": "Bad Email",
            "password": "long-enough-password",
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Short password
    let resp = client
        .post(format!("{base_url}/api/admins"))
        .bearer_auth(&super_token)
        .json(&json!({
            "email": format!("short-{}@test.samaj.org", Uuid::new_v4().simple()),
            "full_name": "Short Password",
            "password": "short",
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Role & Active Update Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_role_update_returns_updated_account() {
    let client = client();
    let base_url = portal_base_url();
    let super_token = super_admin_token(&client).await;

    let (id, email, _password) = create_test_admin(&client, &super_token).await;

    let resp = client
        .put(format!("{base_url}/api/admins/{id}/role"))
        .bearer_auth(&super_token)
        .json(&json!({ "role": "super_admin" }))
        .send()
        .await
        .expect("Failed to change role");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["email"], email);
    assert_eq!(body["role"], "super_admin");
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_active_update_returns_updated_account() {
    let client = client();
    let base_url = portal_base_url();
    let super_token = super_admin_token(&client).await;

    let (id, _email, _password) = create_test_admin(&client, &super_token).await;

    let resp = client
        .put(format!("{base_url}/api/admins/{id}/active"))
        .bearer_auth(&super_token)
        .json(&json!({ "active": false }))
        .send()
        .await
        .expect("Failed to deactivate account");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["active"], false);
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_unknown_account_id_is_404() {
    let client = client();
    let super_token = super_admin_token(&client).await;

    let resp = client
        .put(format!("{}/api/admins/999999999/role", portal_base_url()))
        .bearer_auth(&super_token)
        .json(&json!({ "role": "standard_admin" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
