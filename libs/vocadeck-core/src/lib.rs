//! Core vocabulary flashcard library shared by the backend service.
//!
//! Provides:
//! - Shared entry types and creation-input validation
//! - The review session state machine (deck, cursor, search scoping)
//! - Progress aggregation (overall and per topic)
//! - Keyboard navigation mapping
//! - Quiet-period debouncing for request-heavy inputs

pub mod debounce;
pub mod error;
pub mod keymap;
pub mod session;
pub mod types;

pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use error::ValidationError;
pub use keymap::{command_for, NavCommand};
pub use session::{ReviewSession, SearchTicket};
pub use types::{
    now_millis, topic_progress, EntryDraft, Progress, TopicProgress, VocabularyEntry,
    PHRASE_PART_OF_SPEECH, SYSTEM_USER_ID,
};
