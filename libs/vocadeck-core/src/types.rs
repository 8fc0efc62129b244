//! Core types for the vocabulary flashcard application.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Owner sentinel for system-seeded entries. Preset entries always carry
/// this user id and are visible to every user of their topic.
pub const SYSTEM_USER_ID: &str = "SYSTEM";

/// Part-of-speech label used for multi-word inputs, which the dictionary
/// lookup cannot classify.
pub const PHRASE_PART_OF_SPEECH: &str = "phrase";

/// One vocabulary record. The sole persisted entity of the system.
///
/// Serialized as a flat camelCase document; this is both the store schema
/// and the API wire shape. After creation only `learned` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// Opaque identifier assigned by the store on creation.
    pub id: String,
    /// The word or phrase. Uniqueness is not enforced.
    pub english: String,
    /// Translation text, user-editable at creation time.
    pub meaning: String,
    /// Free-form category label, not a separate entity.
    pub topic: String,
    /// Optional usage sentence (empty string when absent).
    pub example: String,
    /// User progress flag.
    pub learned: bool,
    /// Owning user, or [`SYSTEM_USER_ID`] for presets.
    pub user_id: String,
    /// System-seeded entries are shared across users.
    pub is_preset: bool,
    /// IPA-like transcription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Pronunciation audio reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Grammatical category, or `"phrase"` for multi-word inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Creation input for a vocabulary entry, before the store assigns an id.
///
/// Enrichment results (meaning, phonetic, audio, example, part of speech)
/// are filled in by the caller before the draft is saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub english: String,
    pub meaning: String,
    pub topic: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
}

impl EntryDraft {
    /// Check required fields. Rejection happens before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("english", &self.english),
            ("meaning", &self.meaning),
            ("topic", &self.topic),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Whether the input is a multi-word phrase rather than a single word.
    pub fn is_phrase(&self) -> bool {
        self.english.trim().contains(' ')
    }
}

/// Current time in milliseconds since the Unix epoch, the `createdAt`
/// representation used by the store.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Learning progress derived from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub learned: usize,
    /// `round(learned / total * 100)`, 0 for an empty deck.
    pub percent: u8,
}

impl Progress {
    /// Aggregate over a full deck. Never derived from a filtered subset,
    /// so search scoping cannot distort the denominator.
    pub fn of(entries: &[VocabularyEntry]) -> Self {
        let total = entries.len();
        let learned = entries.iter().filter(|e| e.learned).count();
        let percent = if total == 0 {
            0
        } else {
            (learned as f64 / total as f64 * 100.0).round() as u8
        };
        Self {
            total,
            learned,
            percent,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.learned
    }
}

/// Per-topic learned/total aggregation for the dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicProgress {
    pub topic: String,
    pub total: usize,
    pub learned: usize,
}

/// Group entries by topic, preserving first-seen topic order. Entries with
/// an empty topic are grouped under `"Other"`.
pub fn topic_progress(entries: &[VocabularyEntry]) -> Vec<TopicProgress> {
    let mut stats: Vec<TopicProgress> = Vec::new();
    for entry in entries {
        let topic = if entry.topic.is_empty() {
            "Other"
        } else {
            &entry.topic
        };
        let slot = match stats.iter_mut().position(|s| s.topic == topic) {
            Some(i) => &mut stats[i],
            None => {
                stats.push(TopicProgress {
                    topic: topic.to_string(),
                    total: 0,
                    learned: 0,
                });
                stats.last_mut().unwrap()
            }
        };
        slot.total += 1;
        if entry.learned {
            slot.learned += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(english: &str, topic: &str, learned: bool) -> VocabularyEntry {
        VocabularyEntry {
            id: english.to_string(),
            english: english.to_string(),
            meaning: String::new(),
            topic: topic.to_string(),
            example: String::new(),
            learned,
            user_id: "u1".to_string(),
            is_preset: false,
            phonetic: None,
            audio_url: None,
            part_of_speech: None,
            created_at: 0,
        }
    }

    #[test]
    fn draft_missing_english_is_rejected() {
        let draft = EntryDraft {
            meaning: "nghĩa".to_string(),
            topic: "Daily".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::MissingField { field: "english" })
        ));
    }

    #[test]
    fn draft_whitespace_only_field_is_rejected() {
        let draft = EntryDraft {
            english: "cat".to_string(),
            meaning: "  ".to_string(),
            topic: "Daily".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn draft_with_required_fields_passes() {
        let draft = EntryDraft {
            english: "cat".to_string(),
            meaning: "con mèo".to_string(),
            topic: "Daily".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn phrase_detection_uses_inner_whitespace() {
        let mut draft = EntryDraft {
            english: "give up".to_string(),
            ..Default::default()
        };
        assert!(draft.is_phrase());
        draft.english = " cat ".to_string();
        assert!(!draft.is_phrase());
    }

    #[test]
    fn progress_of_empty_deck_is_zero_percent() {
        let progress = Progress::of(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn progress_full_deck_is_hundred_percent() {
        let entries = vec![entry("a", "Daily", true), entry("b", "Daily", true)];
        assert_eq!(Progress::of(&entries).percent, 100);
    }

    #[test]
    fn progress_half_learned() {
        let entries = vec![entry("cat", "Daily", false), entry("dog", "Daily", true)];
        let progress = Progress::of(&entries);
        assert_eq!(progress.learned, 1);
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.remaining(), 1);
    }

    #[test]
    fn topic_progress_groups_and_counts() {
        let entries = vec![
            entry("a", "Daily", true),
            entry("b", "Travel", false),
            entry("c", "Daily", false),
            entry("d", "", true),
        ];
        let stats = topic_progress(&entries);
        assert_eq!(
            stats,
            vec![
                TopicProgress {
                    topic: "Daily".to_string(),
                    total: 2,
                    learned: 1
                },
                TopicProgress {
                    topic: "Travel".to_string(),
                    total: 1,
                    learned: 0
                },
                TopicProgress {
                    topic: "Other".to_string(),
                    total: 1,
                    learned: 1
                },
            ]
        );
    }
}
