use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::super::export::AgencySummaryView;
use super::super::intake::SurveySubmission;
use super::service::{MatchingService, MatchingServiceError};

/// Survey answers plus an optional shortlist size.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(flatten)]
    pub survey: SurveySubmission,
}

/// Router builder exposing the matching endpoints.
pub fn matching_router(service: Arc<MatchingService>) -> Router {
    Router::new()
        .route("/api/v1/agencies", get(agencies_handler))
        .route("/api/v1/matches", post(match_handler))
        .route("/api/v1/matches/report", post(report_handler))
        .with_state(service)
}

pub(crate) async fn agencies_handler(State(service): State<Arc<MatchingService>>) -> Response {
    let agencies: Vec<AgencySummaryView> = service
        .catalog()
        .iter()
        .map(AgencySummaryView::from)
        .collect();
    (StatusCode::OK, Json(agencies)).into_response()
}

pub(crate) async fn match_handler(
    State(service): State<Arc<MatchingService>>,
    Json(request): Json<MatchRequest>,
) -> Response {
    match service.match_submission(request.survey, request.top_n) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler(
    State(service): State<Arc<MatchingService>>,
    Json(request): Json<MatchRequest>,
) -> Response {
    let today = Local::now().date_naive();
    match service.report(request.survey, request.top_n, today) {
        Ok(report) => {
            let disposition = format!("attachment; filename=\"{}\"", report.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                report.body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: MatchingServiceError) -> Response {
    match error {
        MatchingServiceError::Intake(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        other => {
            warn!(error = %other, "matching request failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
