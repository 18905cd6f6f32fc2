use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{build_service, lead, onboarding};
use crate::session::router::session_router;

fn build_router() -> axum::Router {
    let (service, _, _) = build_service();
    session_router(Arc::new(service))
}

async fn dispatch(router: &axum::Router, method: &str, uri: String, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&payload).expect("serialize payload")))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router dispatch");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, payload)
}

#[tokio::test]
async fn post_sessions_returns_created_with_progress_view() {
    let router = build_router();
    let (status, payload) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(json!({ "email": "visitor@example.com", "phone": "+33102030405" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payload.get("step"), Some(&json!("onboarding")));
    assert_eq!(payload.get("answered_questions"), Some(&json!(0)));
    assert_eq!(payload.get("total_questions"), Some(&json!(6)));
    assert!(payload.get("session_id").is_some());
}

#[tokio::test]
async fn invalid_email_is_unprocessable() {
    let router = build_router();
    let (status, payload) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(json!({ "email": "nope", "phone": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let router = build_router();
    let (status, _) = dispatch(
        &router,
        "GET",
        "/api/v1/assessment/sessions/sess-does-not-exist".to_string(),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn results_before_completion_are_a_retryable_conflict() {
    let router = build_router();
    let (_, created) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(json!({ "email": "visitor@example.com", "phone": "" })),
    )
    .await;
    let session_id = created["session_id"].as_str().expect("id").to_string();

    let (status, payload) = dispatch(
        &router,
        "GET",
        format!("/api/v1/assessment/sessions/{session_id}/results"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(payload.get("retryable"), Some(&json!(true)));
}

#[tokio::test]
async fn full_flow_over_http_returns_the_result() {
    let router = build_router();
    let (_, created) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(serde_json::to_value(lead()).expect("lead json")),
    )
    .await;
    let session_id = created["session_id"].as_str().expect("id").to_string();

    let (status, _) = dispatch(
        &router,
        "POST",
        format!("/api/v1/assessment/sessions/{session_id}/onboarding"),
        Some(serde_json::to_value(onboarding()).expect("onboarding json")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (question_id, value) in [("s1", json!(5)), ("s2", json!(4)), ("q1", json!("unknown"))] {
        let (status, payload) = dispatch(
            &router,
            "PUT",
            format!("/api/v1/assessment/sessions/{session_id}/answers"),
            Some(json!({ "question_id": question_id, "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "answer {question_id}: {payload}");
    }

    let (status, result) = dispatch(
        &router,
        "POST",
        format!("/api/v1/assessment/sessions/{session_id}/complete"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.get("global_score"), Some(&json!(4.5)));
    assert_eq!(result.get("maturity_level"), Some(&json!(5)));
    assert!(result.get("market_position").is_some());

    let (status, fetched) = dispatch(
        &router,
        "GET",
        format!("/api/v1/assessment/sessions/{session_id}/results"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, result);
}

#[tokio::test]
async fn answering_an_unknown_question_is_unprocessable() {
    let router = build_router();
    let (_, created) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(serde_json::to_value(lead()).expect("lead json")),
    )
    .await;
    let session_id = created["session_id"].as_str().expect("id").to_string();
    dispatch(
        &router,
        "POST",
        format!("/api/v1/assessment/sessions/{session_id}/onboarding"),
        Some(serde_json::to_value(onboarding()).expect("onboarding json")),
    )
    .await;

    let (status, _) = dispatch(
        &router,
        "PUT",
        format!("/api/v1/assessment/sessions/{session_id}/answers"),
        Some(json!({ "question_id": "zz-1", "value": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn resubmitted_capture_form_resumes_over_http() {
    let router = build_router();
    let (_, created) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(serde_json::to_value(lead()).expect("lead json")),
    )
    .await;
    let session_id = created["session_id"].as_str().expect("id").to_string();

    let (status, payload) = dispatch(
        &router,
        "POST",
        format!("/api/v1/assessment/sessions/{session_id}/back"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.get("step"), Some(&json!("capture")));

    let (status, payload) = dispatch(
        &router,
        "PUT",
        format!("/api/v1/assessment/sessions/{session_id}/lead"),
        Some(json!({ "email": "visitor@example.com", "phone": "+33102030405" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.get("step"), Some(&json!("onboarding")));
}

#[tokio::test]
async fn back_from_onboarding_then_answering_is_a_conflict() {
    let router = build_router();
    let (_, created) = dispatch(
        &router,
        "POST",
        "/api/v1/assessment/sessions".to_string(),
        Some(serde_json::to_value(lead()).expect("lead json")),
    )
    .await;
    let session_id = created["session_id"].as_str().expect("id").to_string();

    let (status, payload) = dispatch(
        &router,
        "POST",
        format!("/api/v1/assessment/sessions/{session_id}/back"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.get("step"), Some(&json!("capture")));

    let (status, _) = dispatch(
        &router,
        "PUT",
        format!("/api/v1/assessment/sessions/{session_id}/answers"),
        Some(json!({ "question_id": "s1", "value": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
