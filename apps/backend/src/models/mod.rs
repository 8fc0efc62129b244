//! Database models and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from vocadeck-core
pub use vocadeck_core::types::{EntryDraft, Progress, TopicProgress, VocabularyEntry};
pub use vocadeck_core::SYSTEM_USER_ID;

// === Database Entity Types ===

/// Vocabulary entry stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordRow {
    pub id: Uuid,
    pub english: String,
    pub meaning: String,
    pub topic: String,
    pub example: String,
    pub learned: bool,
    pub user_id: String,
    pub is_preset: bool,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub part_of_speech: Option<String>,
    pub created_at: i64,
}

impl WordRow {
    /// Convert to the API entry type (flat camelCase document)
    pub fn to_api_entry(&self) -> VocabularyEntry {
        VocabularyEntry {
            id: self.id.to_string(),
            english: self.english.clone(),
            meaning: self.meaning.clone(),
            topic: self.topic.clone(),
            example: self.example.clone(),
            learned: self.learned,
            user_id: self.user_id.clone(),
            is_preset: self.is_preset,
            phonetic: self.phonetic.clone(),
            audio_url: self.audio_url.clone(),
            part_of_speech: self.part_of_speech.clone(),
            created_at: self.created_at,
        }
    }
}

// === Enrichment API Types ===

/// GET /translate response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub meaning: String,
}

/// One part-of-speech block from the dictionary lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningBlock {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionEntry>,
}

/// One definition within a part-of-speech block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// GET /transcription response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResponse {
    pub phonetic: String,
    pub audio_url: String,
    pub meanings: Vec<MeaningBlock>,
}

/// POST /generate-example request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateExampleRequest {
    pub word: String,
    pub meaning: String,
    pub topic: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
}

/// POST /generate-example response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateExampleResponse {
    pub example: String,
}

// === Words API Types ===

/// GET /words and /words/mine and /words/search query params
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsQuery {
    pub topic: Option<String>,
    pub user_id: Option<String>,
    /// Search term for the prefix scan (search route only)
    pub q: Option<String>,
}

/// POST /words request: a draft plus its owner
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
    #[serde(flatten)]
    pub draft: EntryDraft,
    pub user_id: String,
}

/// POST /words/preset request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePresetRequest {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub topic: String,
}

/// PUT /words/{id}/learned request
#[derive(Debug, Clone, Deserialize)]
pub struct SetLearnedRequest {
    pub learned: bool,
}

/// Generic `{ success: true }` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// POST /seed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub added: usize,
}
