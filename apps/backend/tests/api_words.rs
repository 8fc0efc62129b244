//! Words API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// A missing topic yields an empty list, not an error.
#[tokio::test]
#[ignore = "requires database"]
async fn list_without_topic_is_empty() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/words").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

/// Topic listing returns presets for everyone plus the caller's own words.
#[tokio::test]
#[ignore = "requires database"]
async fn list_merges_presets_and_own_words() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let topic = fixtures::unique_topic("travel");
    let user_id = fixtures::unique_user_id("u");

    let response = server
        .post("/words/preset")
        .json(&fixtures::preset_request("destination", &topic))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/words")
        .json(&fixtures::create_word_request("journey", &topic, &user_id))
        .await;
    response.assert_status_ok();

    // Preset plus own entry for the owner.
    let response = server
        .get("/words")
        .add_query_param("topic", &topic)
        .add_query_param("userId", &user_id)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let words = body.as_array().unwrap();
    assert_eq!(words.len(), 2);

    let preset = words.iter().find(|w| w["english"] == "destination").unwrap();
    assert_eq!(preset["isPreset"], true);
    assert_eq!(preset["userId"], "SYSTEM");
    assert_eq!(preset["learned"], false);

    // Only the preset for an anonymous caller.
    let response = server.get("/words").add_query_param("topic", &topic).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Another user does not see the first user's words.
    let other = fixtures::unique_user_id("other");
    let response = server
        .get("/words")
        .add_query_param("topic", &topic)
        .add_query_param("userId", &other)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    ctx.cleanup_topic(&topic).await;
}

/// Preset creation rejects missing required fields before any write.
#[tokio::test]
#[ignore = "requires database"]
async fn preset_with_missing_fields_is_rejected() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/words/preset")
        .json(&serde_json::json!({ "english": "routine", "meaning": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Missing fields");
}

/// Prefix search matches "ca" against cat and car but not dog.
#[tokio::test]
#[ignore = "requires database"]
async fn search_matches_prefix_range() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let topic = fixtures::unique_topic("animals");
    let user_id = fixtures::unique_user_id("u");

    for english in ["cat", "car", "dog"] {
        let response = server
            .post("/words")
            .json(&fixtures::create_word_request(english, &topic, &user_id))
            .await;
        response.assert_status_ok();
    }

    let response = server
        .get("/words/search")
        .add_query_param("userId", &user_id)
        .add_query_param("q", "ca")
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let mut found: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["english"].as_str().unwrap())
        .collect();
    found.sort();
    assert_eq!(found, vec!["car", "cat"]);

    // The term is lower-cased server-side.
    let response = server
        .get("/words/search")
        .add_query_param("userId", &user_id)
        .add_query_param("q", "CA")
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    // An empty term returns the full deck.
    let response = server
        .get("/words/search")
        .add_query_param("userId", &user_id)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 3);

    ctx.cleanup_user(&user_id).await;
}

/// The learned flag round-trips through the update route.
#[tokio::test]
#[ignore = "requires database"]
async fn set_learned_updates_single_entry() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let topic = fixtures::unique_topic("daily");
    let user_id = fixtures::unique_user_id("u");

    let response = server
        .post("/words")
        .json(&fixtures::create_word_request("routine", &topic, &user_id))
        .await;
    response.assert_status_ok();
    let created: serde_json::Value = response.json();
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["learned"], false);

    let response = server
        .put(&format!("/words/{id}/learned"))
        .json(&fixtures::set_learned_request(true))
        .await;
    response.assert_status_ok();

    // Writing the same value again is idempotent.
    let response = server
        .put(&format!("/words/{id}/learned"))
        .json(&fixtures::set_learned_request(true))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/words/mine")
        .add_query_param("userId", &user_id)
        .await;
    let body: serde_json::Value = response.json();
    let words = body.as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0]["learned"], true);

    ctx.cleanup_user(&user_id).await;
}

/// Unknown and malformed ids are rejected with the right statuses.
#[tokio::test]
#[ignore = "requires database"]
async fn set_learned_rejects_bad_ids() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .put(&format!("/words/{}/learned", uuid::Uuid::new_v4()))
        .json(&fixtures::set_learned_request(true))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .put("/words/not-a-uuid/learned")
        .json(&fixtures::set_learned_request(true))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Duplicate creation is allowed; the store never deduplicates.
#[tokio::test]
#[ignore = "requires database"]
async fn create_never_deduplicates() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let topic = fixtures::unique_topic("daily");
    let user_id = fixtures::unique_user_id("u");

    for _ in 0..2 {
        let response = server
            .post("/words")
            .json(&fixtures::create_word_request("routine", &topic, &user_id))
            .await;
        response.assert_status_ok();
    }

    let response = server
        .get("/words/mine")
        .add_query_param("userId", &user_id)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    ctx.cleanup_user(&user_id).await;
}
