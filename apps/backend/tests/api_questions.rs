//! Question API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL environment variable before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use common::fixtures;
use common::TestContext;

fn id_of(body: &serde_json::Value) -> Uuid {
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Test creating and fetching a cloze question.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_get_cloze() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/questions")
        .json(&fixtures::france_cloze_request())
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = id_of(&created);
    assert_eq!(created["type"], "cloze");
    assert_eq!(created["data"]["blankCount"], 2);
    assert!(created["createdAt"].is_string());

    let response = server.get(&format!("/api/questions/{}", id)).await;
    response.assert_status_ok();
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["data"]["answers"], serde_json::json!(["Paris", "Euro"]));

    // Cleanup
    ctx.cleanup_questions(&[id]).await;
}

/// Test list returns every variant in creation order.
#[tokio::test]
#[ignore = "requires database"]
async fn test_list_questions() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let mut ids = Vec::new();
    for payload in [
        fixtures::categorize_request(),
        fixtures::france_cloze_request(),
        fixtures::comprehension_request(0),
    ] {
        let response = server.post("/api/questions").json(&payload).await;
        response.assert_status(StatusCode::CREATED);
        ids.push(id_of(&response.json()));
    }

    let response = server.get("/api/questions").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let listed: Vec<Uuid> = body
        .as_array()
        .unwrap()
        .iter()
        .map(id_of)
        .filter(|id| ids.contains(id))
        .collect();

    assert_eq!(listed, ids);

    // Cleanup
    ctx.cleanup_questions(&ids).await;
}

/// Test fetching a question that does not exist.
#[tokio::test]
#[ignore = "requires database"]
async fn test_get_missing_question() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get(&format!("/api/questions/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test deleting a single question.
#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_question() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/questions")
        .json(&fixtures::categorize_request())
        .await;
    let id = id_of(&response.json());

    let response = server.delete(&format!("/api/questions/{}", id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], true);

    let response = server.delete(&format!("/api/questions/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test clearing every question.
#[tokio::test]
#[ignore = "requires database"]
async fn test_clear_questions() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/questions")
        .json(&fixtures::comprehension_request(1))
        .await;
    let id = id_of(&response.json());

    let response = server.delete("/api/questions").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["deleted_count"].as_u64().unwrap() >= 1);

    let response = server.get(&format!("/api/questions/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test a stored question can drive a form session.
#[tokio::test]
#[ignore = "requires database"]
async fn test_loaded_questions_drive_session() {
    use form_core::{FormSession, Interaction, Question, QuestionPreview};

    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/questions")
        .json(&fixtures::france_cloze_request())
        .await;
    let question: Question = response.json();
    let id = question.id;

    let mut session = FormSession::new(vec![question]);
    assert!(session.interact(Interaction::Fill {
        blank: 0,
        word: "Paris".to_string(),
    }));
    match session.preview() {
        Some(QuestionPreview::Cloze(preview)) => {
            assert_eq!(preview.available_words(), vec!["Euro"]);
        }
        other => panic!("unexpected preview: {:?}", other),
    }

    // Cleanup
    ctx.cleanup_questions(&[id]).await;
}
