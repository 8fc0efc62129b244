//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext wiring a real database connection and the
//! application router, plus factory helpers for request bodies.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).
//! Enrichment tests additionally need outbound network access.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use vocadeck_backend::db::Database;
use vocadeck_backend::services::enrichment::EnrichmentClient;
use vocadeck_backend::{router, AppState};

/// Test context containing database connection and the app router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let state = AppState {
            db: db.clone(),
            enrichment: Arc::new(EnrichmentClient::from_env()),
        };

        Self {
            app: router(state),
            db,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Remove every entry owned by `user_id`.
    pub async fn cleanup_user(&self, user_id: &str) {
        let _ = sqlx::query("DELETE FROM words WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }

    /// Remove every entry under `topic`, presets included.
    pub async fn cleanup_topic(&self, topic: &str) {
        let _ = sqlx::query("DELETE FROM words WHERE topic = $1")
            .bind(topic)
            .execute(self.db.pool())
            .await;
    }

    /// Remove all system presets, resetting the seed state.
    pub async fn cleanup_presets(&self) {
        let _ = sqlx::query("DELETE FROM words WHERE is_preset = TRUE")
            .execute(self.db.pool())
            .await;
    }
}
