//! One-time preset seeding.
//!
//! Seeds a small shared vocabulary owned by the SYSTEM user. Safe to call
//! repeatedly: entries already present by (english, topic, preset) are
//! skipped and only the number of newly added entries is reported.

use crate::db::Database;
use crate::error::Result;
use vocadeck_core::{EntryDraft, SYSTEM_USER_ID};

/// One preset vocabulary definition.
pub struct PresetWord {
    pub english: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
    pub topic: &'static str,
}

/// The built-in preset vocabulary.
pub const PRESET_WORDS: &[PresetWord] = &[
    PresetWord {
        english: "routine",
        meaning: "thói quen hằng ngày",
        example: "My morning routine starts at 6 a.m.",
        topic: "Daily",
    },
    PresetWord {
        english: "expression",
        meaning: "sự diễn đạt, biểu cảm",
        example: "Her facial expression showed happiness.",
        topic: "Daily",
    },
    PresetWord {
        english: "destination",
        meaning: "điểm đến",
        example: "Paris is my favorite destination.",
        topic: "Travel",
    },
];

/// Insert any presets not yet in the store. Returns how many were added.
pub async fn run_seed(db: &Database) -> Result<usize> {
    let mut added = 0;

    for preset in PRESET_WORDS {
        if db.preset_exists(preset.english, preset.topic).await? {
            continue;
        }

        let draft = EntryDraft {
            english: preset.english.to_string(),
            meaning: preset.meaning.to_string(),
            topic: preset.topic.to_string(),
            example: preset.example.to_string(),
            ..Default::default()
        };
        db.create_word(&draft, SYSTEM_USER_ID, true).await?;
        added += 1;
    }

    tracing::info!(added, "seed completed");
    Ok(added)
}
