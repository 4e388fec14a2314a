use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AssessmentSubmission, JobId};
use super::repository::{AssessmentReceipt, AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

const RECENT_LIMIT: usize = 20;

/// Router builder exposing assessment intake and report endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(recent_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:job_id/report",
            get(report_handler::<R>),
        )
        .route("/api/v1/reports/preview", post(preview_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.receipt())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.recent(RECENT_LIMIT) {
        Ok(records) => {
            let receipts: Vec<AssessmentReceipt> =
                records.iter().map(|record| record.receipt()).collect();
            (StatusCode::OK, axum::Json(receipts)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = JobId(job_id);
    match service.report(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report.summary())).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "assessment not found",
                "job_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.preview(&submission) {
        Ok(report) => (StatusCode::OK, axum::Json(report.summary())).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::Roster(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
