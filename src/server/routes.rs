//! HTTP handlers

use crate::pipeline::GeneratedQuiz;
use crate::quiz::QuestionRecord;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::storage::{QuizRecord, QuizSummary};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /generate-quiz/`
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful response of `POST /generate-quiz/`
#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub questions: Vec<QuestionRecord>,
    pub related_topics: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedQuiz> for GenerateQuizResponse {
    fn from(generated: GeneratedQuiz) -> Self {
        let GeneratedQuiz {
            record,
            summary,
            related_topics,
        } = generated;

        Self {
            id: record.id,
            url: record.source_url,
            title: record.title,
            summary,
            questions: record.questions,
            related_topics,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quizzes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parses the request body; an empty body counts as `{}`
fn parse_generate_request(body: &[u8]) -> Result<GenerateQuizRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateQuizRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

/// `POST /generate-quiz/`
pub async fn generate_quiz_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateQuizResponse>, ApiError> {
    let request = parse_generate_request(&body)?;
    let generated = state.pipeline.generate(request.url.as_deref()).await?;
    Ok(Json(generated.into()))
}

/// `GET /history/`
pub async fn history_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizSummary>>, ApiError> {
    Ok(Json(state.pipeline.history()?))
}

/// `GET /history/{id}/`
///
/// An id that is not an integer cannot name a quiz, so it is answered like
/// any other unknown id.
pub async fn quiz_detail_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<QuizRecord>, ApiError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Quiz {} not found", raw_id)))?;

    Ok(Json(state.pipeline.quiz(id)?))
}

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.pipeline.quiz_count() {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                quizzes: Some(count),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "error",
                quizzes: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
