use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use datapulse::catalog::{self, Catalog, ContextOption};
use datapulse::error::AppError;
use datapulse::scoring::{Answer, AnswerSheet, AssessmentResult};
use datapulse::session::{session_router, AssessmentService, LeadPublisher, SessionRepository};

/// Static content the questionnaire UI needs to render itself.
#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) catalog: Catalog,
    pub(crate) industries: &'static [ContextOption],
    pub(crate) company_sizes: &'static [ContextOption],
    pub(crate) roles: &'static [ContextOption],
}

/// One-shot scoring request: the full answer list plus the industry key.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: Vec<Answer>,
    #[serde(default = "default_industry")]
    pub(crate) industry: String,
}

fn default_industry() -> String {
    "other".to_string()
}

pub(crate) fn with_assessment_routes<R, P>(service: Arc<AssessmentService<R, P>>) -> Router
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    let api = Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_endpoint::<R, P>))
        .route("/api/v1/assessment/score", post(score_endpoint::<R, P>))
        .route("/api/v1/leads/export", get(leads_export_endpoint::<R, P>))
        .with_state(service.clone());

    session_router(service)
        .merge(api)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
) -> Json<CatalogResponse>
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    Json(CatalogResponse {
        catalog: service.engine().catalog().clone(),
        industries: catalog::industries(),
        company_sizes: catalog::company_sizes(),
        roles: catalog::roles(),
    })
}

/// Stateless scoring for clients that hold their own answer state (exports,
/// embedded widgets). Sessions are not touched.
pub(crate) async fn score_endpoint<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Json(request): Json<ScoreRequest>,
) -> Json<AssessmentResult>
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    let sheet = AnswerSheet::from_answers(request.answers);
    let result = service.engine().calculate(&sheet, &request.industry);
    Json(result)
}

pub(crate) async fn leads_export_endpoint<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
) -> Result<impl IntoResponse, AppError>
where
    R: SessionRepository + 'static,
    P: LeadPublisher + 'static,
{
    let csv = service.export_leads()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        csv,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryLeadPublisher, InMemorySessionRepository};
    use datapulse::scoring::{AnswerValue, ScoringEngine};

    fn build_service() -> Arc<AssessmentService<InMemorySessionRepository, InMemoryLeadPublisher>> {
        let repository = Arc::new(InMemorySessionRepository::default());
        let leads = Arc::new(InMemoryLeadPublisher::default());
        let engine = ScoringEngine::new(Catalog::standard());
        Arc::new(AssessmentService::new(engine, repository, leads))
    }

    #[tokio::test]
    async fn catalog_endpoint_serves_the_standard_content() {
        let service = build_service();
        let Json(body) = catalog_endpoint(State(service)).await;

        assert_eq!(body.catalog.domains.len(), 6);
        assert!(body.industries.iter().any(|option| option.value == "tech"));
        assert!(!body.roles.is_empty());
    }

    #[tokio::test]
    async fn score_endpoint_collapses_duplicates_before_scoring() {
        let service = build_service();
        let request = ScoreRequest {
            answers: vec![
                Answer { question_id: "str-1".to_string(), value: AnswerValue::Rating(1) },
                Answer { question_id: "str-1".to_string(), value: AnswerValue::Rating(5) },
                Answer { question_id: "gov-1".to_string(), value: AnswerValue::Unknown },
            ],
            industry: "xyz".to_string(),
        };

        let Json(result) = score_endpoint(State(service), Json(request)).await;
        // Only the last str-1 answer counts; the unknown contributes nothing.
        assert_eq!(result.global_score, 5.0);
        assert!(result.market_position >= 1 && result.market_position <= 99);
    }

    #[tokio::test]
    async fn merged_router_serves_health_and_catalog() {
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use tower::ServiceExt;

        let router = with_assessment_routes(build_service());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/assessment/catalog")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["catalog"]["scale"]["max"], json!(5));
    }

    #[tokio::test]
    async fn leads_export_starts_empty() {
        let service = build_service();
        let response = leads_export_endpoint(State(service))
            .await
            .expect("export succeeds")
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
