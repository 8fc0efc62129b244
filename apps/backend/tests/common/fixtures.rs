//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Generate a unique user id to avoid collisions between test runs.
pub fn unique_user_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Generate a unique topic label.
pub fn unique_topic(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Create a word creation request body.
pub fn create_word_request(english: &str, topic: &str, user_id: &str) -> serde_json::Value {
    json!({
        "english": english,
        "meaning": format!("meaning of {english}"),
        "topic": topic,
        "example": format!("An example with {english}."),
        "userId": user_id,
    })
}

/// Create a preset creation request body.
pub fn preset_request(english: &str, topic: &str) -> serde_json::Value {
    json!({
        "english": english,
        "meaning": format!("meaning of {english}"),
        "example": format!("An example with {english}."),
        "topic": topic,
    })
}

/// Create a generate-example request body.
pub fn generate_example_request(word: &str, topic: &str) -> serde_json::Value {
    json!({
        "word": word,
        "meaning": format!("meaning of {word}"),
        "topic": topic,
        "partOfSpeech": "noun",
    })
}

/// Create a learned-flag update body.
pub fn set_learned_request(learned: bool) -> serde_json::Value {
    json!({ "learned": learned })
}
