use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{LeadContact, OnboardingDetails, SessionId};
use super::repository::{LeadPublisher, RepositoryError, SessionRepository};
use super::service::{AssessmentService, SessionError};
use crate::scoring::AnswerValue;

/// Router builder exposing the assessment flow over HTTP.
pub fn session_router<R, P>(service: Arc<AssessmentService<R, P>>) -> Router
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessment/sessions", post(start_handler::<R, P>))
        .route(
            "/api/v1/assessment/sessions/:session_id",
            get(status_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/lead",
            put(recapture_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/onboarding",
            post(onboarding_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/answers",
            put(answer_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/back",
            post(back_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/complete",
            post(complete_handler::<R, P>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/results",
            get(results_handler::<R, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: String,
    pub(crate) value: AnswerValue,
}

pub(crate) async fn start_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    axum::Json(lead): axum::Json<LeadContact>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.start(lead) {
        Ok(record) => {
            let view = record.status_view(service.engine().catalog().question_count());
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.status(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recapture_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
    axum::Json(lead): axum::Json<LeadContact>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.recapture(&SessionId(session_id), lead) {
        Ok(record) => {
            let view = record.status_view(service.engine().catalog().question_count());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn onboarding_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
    axum::Json(details): axum::Json<OnboardingDetails>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.onboard(&SessionId(session_id), details) {
        Ok(record) => {
            let view = record.status_view(service.engine().catalog().question_count());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.record_answer(&SessionId(session_id), &request.question_id, request.value) {
        Ok(record) => {
            let view = record.status_view(service.engine().catalog().question_count());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn back_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.go_back(&SessionId(session_id)) {
        Ok(record) => {
            let view = record.status_view(service.engine().catalog().question_count());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.complete(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    match service.results(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionError) -> Response {
    let status = match &error {
        SessionError::InvalidLead(_)
        | SessionError::InvalidOnboarding(_)
        | SessionError::UnknownQuestion(_)
        | SessionError::OutOfScale { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::WrongStep { .. } | SessionError::BackUnavailable(_) => StatusCode::CONFLICT,
        SessionError::ResultsUnavailable => StatusCode::CONFLICT,
        SessionError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionError::Repository(RepositoryError::Unavailable(_))
        | SessionError::Publish(_)
        | SessionError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = match &error {
        // The UI renders a "go back and finish the questionnaire" affordance
        // from this shape rather than a crash screen.
        SessionError::ResultsUnavailable => json!({
            "error": error.to_string(),
            "retryable": true,
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, axum::Json(payload)).into_response()
}
