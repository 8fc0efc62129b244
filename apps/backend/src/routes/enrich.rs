//! Enrichment endpoints
//!
//! These proxy one third-party API each. An upstream failure is never a
//! user-visible error: the route answers 500 with a default-valued body so
//! the entry-creation form proceeds without enrichment.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::models::{GenerateExampleRequest, GenerateExampleResponse, TranscriptionResponse, TranslateResponse};
use crate::AppState;

/// Query parameters shared by the word-based lookups
#[derive(Debug, Deserialize)]
pub struct EnrichQuery {
    pub word: Option<String>,
}

/// GET /translate
pub async fn translate(
    State(state): State<AppState>,
    Query(query): Query<EnrichQuery>,
) -> Response {
    let Some(word) = query.word.filter(|w| !w.trim().is_empty()) else {
        return Json(TranslateResponse::default()).into_response();
    };

    match state.enrichment.translate(&word).await {
        Ok(meaning) => Json(TranslateResponse { meaning }).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, %word, "translation lookup failed");
            degraded(TranslateResponse::default())
        }
    }
}

/// GET /transcription
pub async fn transcription(
    State(state): State<AppState>,
    Query(query): Query<EnrichQuery>,
) -> Response {
    let Some(word) = query.word.filter(|w| !w.trim().is_empty()) else {
        return Json(TranscriptionResponse::default()).into_response();
    };

    match state.enrichment.transcribe(&word).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, %word, "dictionary lookup failed");
            degraded(TranscriptionResponse::default())
        }
    }
}

/// POST /generate-example
pub async fn generate_example(
    State(state): State<AppState>,
    Json(payload): Json<GenerateExampleRequest>,
) -> Response {
    let result = state
        .enrichment
        .generate_example(
            &payload.word,
            &payload.meaning,
            &payload.topic,
            payload.part_of_speech.as_deref(),
        )
        .await;

    match result {
        Ok(example) => Json(GenerateExampleResponse { example }).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, word = %payload.word, "example generation failed");
            degraded(GenerateExampleResponse::default())
        }
    }
}

/// 500 with a default-valued body, the degraded answer for upstream failure.
fn degraded<T: serde::Serialize>(body: T) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
