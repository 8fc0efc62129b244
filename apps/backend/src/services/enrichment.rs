//! Enrichment gateways: translation, dictionary lookup, and example
//! generation.
//!
//! Each gateway is one stateless request against one third-party HTTP API,
//! fire-and-forget: no retry, no backoff, no caching. Upstream payloads are
//! parsed against an explicit schema and collapse to empty values on shape
//! mismatch, so callers can always proceed without enrichment.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{DefinitionEntry, MeaningBlock, TranscriptionResponse};

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Client for the three enrichment APIs.
pub struct EnrichmentClient {
    http: Client,
    gemini_api_key: Option<String>,
}

impl EnrichmentClient {
    /// Build from the environment. `GEMINI_API_KEY` is optional; without it
    /// example generation degrades to empty output.
    pub fn from_env() -> Self {
        Self {
            http: Client::new(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
        }
    }

    /// Translate an English word or phrase to Vietnamese.
    pub async fn translate(&self, word: &str) -> Result<String> {
        let payload: Value = self
            .http
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", "vi"),
                ("dt", "t"),
                ("q", word),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(parse_translation(&payload))
    }

    /// Look up phonetic transcription, pronunciation audio, and
    /// part-of-speech definitions for a single word.
    pub async fn transcribe(&self, word: &str) -> Result<TranscriptionResponse> {
        let payload: Value = self
            .http
            .get(format!("{DICTIONARY_URL}/{}", urlencoding::encode(word)))
            .send()
            .await?
            .json()
            .await?;

        Ok(parse_transcription(&payload))
    }

    /// Generate one example sentence for a word. The raw model output is
    /// cleaned before it reaches the caller.
    pub async fn generate_example(
        &self,
        word: &str,
        meaning: &str,
        topic: &str,
        part_of_speech: Option<&str>,
    ) -> Result<String> {
        let Some(api_key) = self.gemini_api_key.as_deref() else {
            tracing::warn!("GEMINI_API_KEY not set, skipping example generation");
            return Ok(String::new());
        };

        let prompt = example_prompt(word, meaning, topic, part_of_speech);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.7, "maxOutputTokens": 100 }
        });

        let payload: Value = self
            .http
            .post(GEMINI_URL)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        let raw = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default();
        tracing::debug!(raw, "generation response");

        Ok(clean_generated_example(raw))
    }
}

fn example_prompt(word: &str, meaning: &str, topic: &str, part_of_speech: Option<&str>) -> String {
    let mut prompt = format!(
        "Create ONE simple English sentence using the word \"{word}\".\n\
         Meaning: {meaning}\n\
         Context: {topic}\n"
    );
    if let Some(pos) = part_of_speech {
        prompt.push_str(&format!("Part of speech: {pos}\n"));
    }
    prompt.push_str("\nRules:\n- One sentence only\n- Simple, natural English\n- No explanation\n");
    prompt
}

/// Pull the translated text out of the translate endpoint's nested-array
/// payload (`[[["<translation>", ...], ...], ...]`).
pub fn parse_translation(payload: &Value) -> String {
    payload[0][0][0].as_str().unwrap_or_default().to_string()
}

/// Schema of one dictionaryapi.dev entry. Unknown or missing pieces fall
/// back to defaults instead of failing the lookup.
#[derive(Debug, Default, Deserialize)]
struct DictEntry {
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<DictPhonetic>,
    #[serde(default)]
    meanings: Vec<DictMeaning>,
}

#[derive(Debug, Default, Deserialize)]
struct DictPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictMeaning {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DictDefinition>,
}

#[derive(Debug, Default, Deserialize)]
struct DictDefinition {
    #[serde(default)]
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

/// Reduce a dictionary payload to the transcription response shape.
/// The lookup returns an array of entries; only the first is used.
pub fn parse_transcription(payload: &Value) -> TranscriptionResponse {
    let Some(entry) = payload
        .get(0)
        .and_then(|v| serde_json::from_value::<DictEntry>(v.clone()).ok())
    else {
        return TranscriptionResponse::default();
    };

    let phonetic = entry
        .phonetic
        .filter(|p| !p.is_empty())
        .or_else(|| entry.phonetics.iter().find_map(|p| p.text.clone()))
        .unwrap_or_default();

    let audio_url = entry
        .phonetics
        .iter()
        .find_map(|p| p.audio.clone().filter(|a| !a.is_empty()))
        .unwrap_or_default();

    let meanings = entry
        .meanings
        .into_iter()
        .map(|m| MeaningBlock {
            part_of_speech: m.part_of_speech,
            definitions: m
                .definitions
                .into_iter()
                .map(|d| DefinitionEntry {
                    definition: d.definition,
                    example: d.example,
                })
                .collect(),
        })
        .collect();

    TranscriptionResponse {
        phonetic,
        audio_url,
        meanings,
    }
}

/// Clean raw generation output: keep only the first line, strip surrounding
/// quote characters, trim. Generation models sometimes return quoted or
/// multi-line text despite the one-sentence prompt.
pub fn clean_generated_example(raw: &str) -> String {
    let first_line = raw.trim().lines().next().unwrap_or_default().trim();
    first_line
        .trim_matches(|c| matches!(c, '"' | '\'' | '\u{201c}' | '\u{201d}'))
        .trim()
        .to_string()
}
