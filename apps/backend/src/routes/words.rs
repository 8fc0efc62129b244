//! Vocabulary entry endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::seed;
use crate::AppState;

/// GET /words
///
/// Preset entries for the topic plus, when a caller is identified, their
/// own entries, deduplicated by id. A missing topic yields an empty list.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<Vec<VocabularyEntry>>> {
    let Some(topic) = query.topic.filter(|t| !t.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    let rows = state
        .db
        .list_by_topic(&topic, query.user_id.as_deref())
        .await?;

    Ok(Json(rows.iter().map(WordRow::to_api_entry).collect()))
}

/// GET /words/mine
pub async fn mine(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<Vec<VocabularyEntry>>> {
    let Some(user_id) = query.user_id.filter(|u| !u.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    let rows = state.db.list_by_user(&user_id).await?;
    Ok(Json(rows.iter().map(WordRow::to_api_entry).collect()))
}

/// GET /words/search
///
/// Prefix range scan over the caller's entries. The term is lower-cased
/// here while stored values keep their case, so a case-mismatched entry
/// will not match (kept reference limitation). An empty term returns the
/// caller's full deck.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<Vec<VocabularyEntry>>> {
    let Some(user_id) = query.user_id.filter(|u| !u.is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    let term = query
        .q
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let rows = if term.is_empty() {
        state.db.list_by_user(&user_id).await?
    } else {
        state.db.search_by_prefix(&user_id, &term).await?
    };

    Ok(Json(rows.iter().map(WordRow::to_api_entry).collect()))
}

/// POST /words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<Json<VocabularyEntry>> {
    payload.draft.validate()?;
    if payload.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId is required".to_string()));
    }

    let row = state
        .db
        .create_word(&payload.draft, &payload.user_id, false)
        .await?;

    tracing::info!(word = %row.english, topic = %row.topic, "created entry");
    Ok(Json(row.to_api_entry()))
}

/// POST /words/preset
pub async fn create_preset(
    State(state): State<AppState>,
    Json(payload): Json<CreatePresetRequest>,
) -> Result<Json<SuccessResponse>> {
    let draft = EntryDraft {
        english: payload.english,
        meaning: payload.meaning,
        topic: payload.topic,
        example: payload.example,
        ..Default::default()
    };
    draft.validate()?;

    state.db.create_word(&draft, SYSTEM_USER_ID, true).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /words/{id}/learned
pub async fn set_learned(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetLearnedRequest>,
) -> Result<Json<SuccessResponse>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest(format!("invalid entry id: {id}")))?;

    if !state.db.set_learned(id, payload.learned).await? {
        return Err(ApiError::NotFound(format!("word {id}")));
    }

    Ok(Json(SuccessResponse::ok()))
}

/// POST /seed
pub async fn run_seed(State(state): State<AppState>) -> Result<Json<SeedResponse>> {
    let added = seed::run_seed(&state.db).await?;

    Ok(Json(SeedResponse {
        message: "Seed completed".to_string(),
        added,
    }))
}
