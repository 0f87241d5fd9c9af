//! Integration tests for the community boards.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The portal running (cargo run -p samaj-portal)
//! - The seeded test accounts (see crate docs)

use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use samaj_integration_tests::{client, portal_base_url, standard_admin_token};

// ============================================================================
// Public Read Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_board_reads_need_no_token() {
    let client = client();
    let base_url = portal_base_url();

    for board in ["members", "sangathan", "badhai", "shok", "birthdays", "news"] {
        let resp = client
            .get(format!("{base_url}/api/{board}"))
            .send()
            .await
            .expect("Failed to fetch board");

        assert_eq!(resp.status(), StatusCode::OK, "board {board}");

        let body: Value = resp.json().await.expect("Failed to parse body");
        assert!(body.is_array(), "board {board} should return an array");
    }
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_list_limit_is_capped() {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .get(format!("{base_url}/api/members?limit=5000"))
        .send()
        .await
        .expect("Failed to fetch members");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body.as_array().expect("expected array").len() <= 200);

    let resp = client
        .get(format!("{base_url}/api/members?limit=1"))
        .send()
        .await
        .expect("Failed to fetch members");
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert!(body.as_array().expect("expected array").len() <= 1);
}

// ============================================================================
// Write Gate Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_board_mutations_require_token() {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .post(format!("{base_url}/api/news"))
        .json(&json!({
            "title": "Unauthorized",
            "body": "Should never be stored",
            "published_on": "2026-08-20",
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .put(format!("{base_url}/api/news/1"))
        .json(&json!({ "title": "Unauthorized" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .delete(format!("{base_url}/api/news/1"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_news_crud_roundtrip() {
    let client = client();
    let base_url = portal_base_url();
    let token = standard_admin_token(&client).await;

    // Create
    let marker = Uuid::new_v4().simple().to_string();
    let resp = client
        .post(format!("{base_url}/api/news"))
        .bearer_auth(&token)
        .json(&json!({
            "title": format!("Diwali Mela {marker}"),
            "body": "Community gathering at the city hall grounds.",
            "published_on": "2026-08-20",
        }))
        .send()
        .await
        .expect("Failed to create news item");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = resp.json().await.expect("Failed to parse body");
    let id = created["id"].as_i64().expect("missing id");
    assert_eq!(created["published_on"], "2026-08-20");

    // Update one field; the others keep their values
    let resp = client
        .put(format!("{base_url}/api/news/{id}"))
        .bearer_auth(&token)
        .json(&json!({ "title": format!("Diwali Mela {marker} (updated)") }))
        .send()
        .await
        .expect("Failed to update news item");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Failed to parse body");
    assert!(updated["title"].as_str().expect("missing title").ends_with("(updated)"));
    assert_eq!(updated["body"], created["body"]);

    // Visible in the public listing
    let resp = client
        .get(format!("{base_url}/api/news"))
        .send()
        .await
        .expect("Failed to fetch news");
    let listing: Value = resp.json().await.expect("Failed to parse body");
    assert!(listing
        .as_array()
        .expect("expected array")
        .iter()
        .any(|item| item["id"].as_i64() == Some(id)));

    // Delete, then the id is gone
    let resp = client
        .delete(format!("{base_url}/api/news/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete news item");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .delete(format!("{base_url}/api/news/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_badhai_crud_roundtrip() {
    let client = client();
    let base_url = portal_base_url();
    let token = standard_admin_token(&client).await;

    let resp = client
        .post(format!("{base_url}/api/badhai"))
        .bearer_auth(&token)
        .json(&json!({
            "person_name": "Ramesh Sharma",
            "occasion": "Wedding",
            "event_date": "2026-09-14",
            "city": "Jaipur",
            "details": "Reception at the community hall.",
        }))
        .send()
        .await
        .expect("Failed to create badhai entry");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = resp.json().await.expect("Failed to parse body");
    let id = created["id"].as_i64().expect("missing id");
    assert_eq!(created["occasion"], "Wedding");

    let resp = client
        .put(format!("{base_url}/api/badhai/{id}"))
        .bearer_auth(&token)
        .json(&json!({ "city": "Udaipur" }))
        .send()
        .await
        .expect("Failed to update badhai entry");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(updated["city"], "Udaipur");
    assert_eq!(updated["person_name"], "Ramesh Sharma");

    let resp = client
        .delete(format!("{base_url}/api/badhai/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete badhai entry");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_member_with_sangathan_roundtrip() {
    let client = client();
    let base_url = portal_base_url();
    let token = standard_admin_token(&client).await;

    // Chapter first
    let resp = client
        .post(format!("{base_url}/api/sangathan"))
        .bearer_auth(&token)
        .json(&json!({
            "name": format!("Yuva Sangathan {}", Uuid::new_v4().simple()),
            "city": "Kota",
        }))
        .send()
        .await
        .expect("Failed to create sangathan");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let chapter: Value = resp.json().await.expect("Failed to parse body");
    let chapter_id = chapter["id"].as_i64().expect("missing id");

    // Member affiliated with it
    let resp = client
        .post(format!("{base_url}/api/members"))
        .bearer_auth(&token)
        .json(&json!({
            "full_name": "Sunita Devi",
            "city": "Kota",
            "phone": "+91 98290 00000",
            "occupation": "Shopkeeper",
            "sangathan_id": chapter_id,
        }))
        .send()
        .await
        .expect("Failed to create member");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let member: Value = resp.json().await.expect("Failed to parse body");
    let member_id = member["id"].as_i64().expect("missing id");
    assert_eq!(member["sangathan_id"].as_i64(), Some(chapter_id));

    // Cleanup
    let resp = client
        .delete(format!("{base_url}/api/members/{member_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete member");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .delete(format!("{base_url}/api/sangathan/{chapter_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to delete sangathan");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_blank_required_fields_are_rejected() {
    let client = client();
    let token = standard_admin_token(&client).await;

    let resp = client
        .post(format!("{}/api/members", portal_base_url()))
        .bearer_auth(&token)
        .json(&json!({
            "full_name": "   ",
            "city": "Jaipur",
            "phone": "+91 98290 00000",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running portal server and seeded test accounts"]
async fn test_unknown_board_id_is_404() {
    let client = client();
    let token = standard_admin_token(&client).await;

    let resp = client
        .put(format!("{}/api/members/999999999", portal_base_url()))
        .bearer_auth(&token)
        .json(&json!({ "city": "Jaipur" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
