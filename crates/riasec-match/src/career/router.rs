use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Answer, UserId};
use super::repository::{ProfileRepository, RepositoryError};
use super::scoring::ScoringError;
use super::service::{CareerMatchingService, CareerMatchingServiceError};
use super::views::{MatchingResultsView, QuestionView};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Option<Answer>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router exposing questionnaire scoring and stored results.
pub fn career_router<R>(service: Arc<CareerMatchingService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/career-matching/questions",
            get(questions_handler::<R>),
        )
        .route("/api/v1/career-matching/score", post(score_handler::<R>))
        .route(
            "/api/v1/career-matching/users/:user_id/results",
            post(submit_handler::<R>).get(results_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<CareerMatchingService<R>>>,
) -> Json<Vec<QuestionView>>
where
    R: ProfileRepository + 'static,
{
    Json(service.questions().iter().map(QuestionView::from).collect())
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<CareerMatchingService<R>>>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.score(&request.answers) {
        Ok(outcome) => {
            let view = MatchingResultsView::from_outcome(&outcome, service.limit(request.limit));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CareerMatchingService<R>>>,
    Path(user_id): Path<String>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.submit(UserId(user_id), &request.answers, request.limit) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<Arc<CareerMatchingService<R>>>,
    Path(user_id): Path<String>,
    Query(query): Query<ResultsQuery>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.results(&UserId(user_id), query.limit) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: CareerMatchingServiceError) -> Response {
    let status = match &error {
        CareerMatchingServiceError::Incomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CareerMatchingServiceError::Scoring(ScoringError::InputLengthMismatch { .. })
        | CareerMatchingServiceError::Scoring(ScoringError::UnknownQuestion(_)) => {
            StatusCode::BAD_REQUEST
        }
        CareerMatchingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CareerMatchingServiceError::NoQuestions
        | CareerMatchingServiceError::Scoring(ScoringError::EmptyCatalog)
        | CareerMatchingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = match &error {
        CareerMatchingServiceError::Incomplete { missing } => json!({
            "error": error.to_string(),
            "missing": missing,
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, Json(payload)).into_response()
}
