//! PostgreSQL store gateway for vocabulary entries

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use vocadeck_core::{now_millis, EntryDraft};

/// Highest Unicode code point Firestore-style prefix queries bound with.
/// `[prefix, prefix + U+F8FF)` covers every string starting with `prefix`.
const PREFIX_RANGE_MAX: char = '\u{f8ff}';

const WORD_COLUMNS: &str = "id, english, meaning, topic, example, learned, user_id, is_preset, \
                            phonetic, audio_url, part_of_speech, created_at";

/// Upper bound of the prefix range scan for `prefix`.
pub fn prefix_upper_bound(prefix: &str) -> String {
    format!("{prefix}{PREFIX_RANGE_MAX}")
}

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Entry Repository ===

    /// Persist a new entry. Duplicates are never checked; the store accepts
    /// whatever the caller validated.
    pub async fn create_word(
        &self,
        draft: &EntryDraft,
        user_id: &str,
        is_preset: bool,
    ) -> Result<WordRow> {
        let word = sqlx::query_as::<_, WordRow>(&format!(
            r#"
            INSERT INTO words (id, english, meaning, topic, example, learned, user_id,
                               is_preset, phonetic, audio_url, part_of_speech, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7, $8, $9, $10, $11)
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&draft.english)
        .bind(&draft.meaning)
        .bind(&draft.topic)
        .bind(&draft.example)
        .bind(user_id)
        .bind(is_preset)
        .bind(&draft.phonetic)
        .bind(&draft.audio_url)
        .bind(&draft.part_of_speech)
        .bind(now_millis())
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Union of preset entries for `topic` and, when a caller is given,
    /// that caller's own entries for the topic, deduplicated by id.
    pub async fn list_by_topic(
        &self,
        topic: &str,
        user_id: Option<&str>,
    ) -> Result<Vec<WordRow>> {
        let presets = sqlx::query_as::<_, WordRow>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words
            WHERE topic = $1 AND is_preset = TRUE
            ORDER BY created_at
            "#
        ))
        .bind(topic)
        .fetch_all(&self.pool)
        .await?;

        let mut merged = presets;
        if let Some(user_id) = user_id {
            let own = sqlx::query_as::<_, WordRow>(&format!(
                r#"
                SELECT {WORD_COLUMNS}
                FROM words
                WHERE topic = $1 AND user_id = $2
                ORDER BY created_at
                "#
            ))
            .bind(topic)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

            for row in own {
                if !merged.iter().any(|w| w.id == row.id) {
                    merged.push(row);
                }
            }
        }

        Ok(merged)
    }

    /// All entries owned by `user_id`, presets of other owners excluded.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<WordRow>> {
        let words = sqlx::query_as::<_, WordRow>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words
            WHERE user_id = $1
            ORDER BY created_at
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Prefix range scan over the caller's entries. Matching is
    /// case-sensitive against stored values; callers lower-case the term,
    /// so case-mismatched entries will not match (kept limitation).
    pub async fn search_by_prefix(&self, user_id: &str, prefix: &str) -> Result<Vec<WordRow>> {
        let words = sqlx::query_as::<_, WordRow>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words
            WHERE user_id = $1 AND english >= $2 AND english < $3
            ORDER BY english
            "#
        ))
        .bind(user_id)
        .bind(prefix)
        .bind(prefix_upper_bound(prefix))
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Update exactly one field. Returns false when no entry matched.
    pub async fn set_learned(&self, id: Uuid, learned: bool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE words
            SET learned = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(learned)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a preset for (english, topic) already exists. Seeding uses
    /// this to stay idempotent.
    pub async fn preset_exists(&self, english: &str, topic: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM words
                WHERE english = $1 AND topic = $2 AND is_preset = TRUE
            )
            "#,
        )
        .bind(english)
        .bind(topic)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
