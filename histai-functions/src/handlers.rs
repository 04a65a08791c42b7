use crate::digest;
use crate::email::Mailer;
use crate::models::{NewSubmission, Submission, SubmissionStatus};
use crate::store::{ListQuery, SearchQuery, SubmissionStore};
use crate::validate;
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
    pub mailer: Arc<Mailer>,
    pub digest_recipient: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/submissions", post(submit_handler).get(list_handler))
        .route("/submissions/search", get(search_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/digest", post(digest_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

enum ApiError {
    BadRequest(String),
    Internal(anyhow::Error),
}

impl<E: Into<anyhow::Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            Self::Internal(err) => {
                error!("request failed: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Serialize)]
pub(crate) struct SubmitResponse {
    pub success: bool,
    pub id: i64,
    pub message: &'static str,
}

async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<NewSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = validate::validate(&submission);
    if !errors.is_empty() {
        return Err(ApiError::BadRequest(errors.join("; ")));
    }

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    let id = state.store.insert(&submission, user_agent).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            id,
            message: "Contribution submitted successfully",
        }),
    ))
}

#[derive(Deserialize)]
struct ListParams {
    limit: Option<i64>,
    status: Option<String>,
    #[serde(rename = "startAfter")]
    start_after: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListResponse {
    pub submissions: Vec<Submission>,
    pub has_more: bool,
    pub last_id: Option<i64>,
}

async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListQuery {
        limit: params.limit,
        // Unknown status values are ignored, not rejected.
        status: params.status.as_deref().and_then(SubmissionStatus::parse),
        start_after: params.start_after,
    };

    let page = state.store.list(&query).await?;
    Ok(Json(ListResponse {
        submissions: page.submissions,
        has_more: page.has_more,
        last_id: page.last_id,
    }))
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
    difficulty: Option<String>,
    #[serde(rename = "answerType")]
    answer_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchFilters {
    difficulty: Option<String>,
    answer_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    submissions: Vec<Submission>,
    count: usize,
    search_term: Option<String>,
    filters: SearchFilters,
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let none = |s: &Option<String>| s.as_deref().is_none_or(|v| v.trim().is_empty());
    if none(&params.q) && none(&params.difficulty) && none(&params.answer_type) {
        return Err(ApiError::BadRequest(
            "At least one search parameter is required".to_string(),
        ));
    }

    let query = SearchQuery {
        term: params.q.clone().filter(|s| !s.trim().is_empty()),
        difficulty: params.difficulty.clone().filter(|s| !s.trim().is_empty()),
        answer_type: params.answer_type.clone().filter(|s| !s.trim().is_empty()),
    };

    let submissions = state.store.search(&query).await?;
    Ok(Json(SearchResponse {
        count: submissions.len(),
        submissions,
        search_term: query.term,
        filters: SearchFilters {
            difficulty: query.difficulty,
            answer_type: query.answer_type,
        },
    }))
}

async fn stats_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let counts = state.store.stats().await?;
    Ok(Json(serde_json::json!({
        "total": counts.total,
        "pending": counts.pending,
        "processed": counts.processed,
        "emailed": counts.emailed,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn digest_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sent =
        digest::process_pending(&state.store, &state.mailer, &state.digest_recipient).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Email digest triggered successfully ({sent} submissions)"),
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
