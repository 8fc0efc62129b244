//! Review session state machine.
//!
//! Holds the in-memory deck for the active scope (one topic, or everything
//! the user owns), the cursor over the navigable subset, and the active
//! search filter. Navigation commands, search application, and learned-flag
//! confirmation all go through here; progress statistics are derived from
//! the full deck so an active filter never distorts them.
//!
//! The session is single-flow: callers interleave store I/O with state
//! updates, and the only ordering hazard is a search response arriving
//! after a newer search was issued. [`SearchTicket`] carries a sequence
//! number so stale results are discarded instead of overwriting state.

use rand::Rng;

use crate::types::{Progress, VocabularyEntry};

/// Ticket for an in-flight prefix search. Returned by
/// [`ReviewSession::begin_search`] and required to install results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    /// Lower-cased search term to run against the store.
    pub term: String,
}

/// Long-lived per-scope session state. Reset fully on scope change.
#[derive(Debug, Default)]
pub struct ReviewSession {
    all: Vec<VocabularyEntry>,
    visible: Vec<VocabularyEntry>,
    cursor: usize,
    search_term: String,
    search_seq: u64,
}

impl ReviewSession {
    /// Empty, unloaded session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the deck for the active scope. The visible subset starts as
    /// the whole deck with the cursor on the first card.
    pub fn load(&mut self, entries: Vec<VocabularyEntry>) {
        self.all = entries;
        self.visible = self.all.clone();
        self.cursor = 0;
        self.search_term.clear();
    }

    /// Drop all state, for topic switch or user change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The card under the cursor, if the visible deck is non-empty.
    pub fn current(&self) -> Option<&VocabularyEntry> {
        self.visible.get(self.cursor)
    }

    /// 0-based cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of navigable cards under the active filter.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Full deck size for the scope, independent of any filter.
    pub fn deck_len(&self) -> usize {
        self.all.len()
    }

    /// Currently applied search term (empty when no filter is active).
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Advance the cursor, wrapping past the end. No-op on an empty deck.
    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Step the cursor back, wrapping before the start. No-op on an empty
    /// deck.
    pub fn prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.visible.len() - 1) % self.visible.len();
    }

    /// Jump to a uniformly random card. The draw may land on the card
    /// already shown; accepted behavior.
    pub fn random(&mut self) {
        let mut rng = rand::rng();
        self.random_with(&mut rng);
    }

    /// [`Self::random`] with a caller-supplied source of randomness.
    pub fn random_with<R: Rng>(&mut self, rng: &mut R) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = rng.random_range(0..self.visible.len());
    }

    /// Start a search. An empty (or whitespace) term clears the filter
    /// immediately and returns no ticket. Otherwise the term is
    /// lower-cased, the sequence is bumped, and the caller runs the store
    /// prefix query before handing results to
    /// [`Self::apply_search_results`].
    ///
    /// Stored values are matched case-sensitively by the prefix scan, so a
    /// case-mismatched entry will not match; known limitation of the
    /// lookup, kept as-is.
    pub fn begin_search(&mut self, term: &str) -> Option<SearchTicket> {
        self.search_seq += 1;
        let term = term.trim();
        if term.is_empty() {
            self.search_term.clear();
            self.visible = self.all.clone();
            self.cursor = 0;
            return None;
        }
        Some(SearchTicket {
            seq: self.search_seq,
            term: term.to_lowercase(),
        })
    }

    /// Install prefix-search results. Returns false and leaves state
    /// untouched when a newer search superseded the ticket.
    pub fn apply_search_results(
        &mut self,
        ticket: &SearchTicket,
        results: Vec<VocabularyEntry>,
    ) -> bool {
        if ticket.seq != self.search_seq {
            return false;
        }
        self.search_term = ticket.term.clone();
        self.visible = results;
        self.cursor = 0;
        true
    }

    /// Filter the visible deck locally with a case-insensitive substring
    /// match on the word. This is how the topic view narrows its deck;
    /// note the semantics differ from the store prefix search (open
    /// product question, both behaviors kept).
    pub fn apply_local_filter(&mut self, term: &str) {
        self.search_seq += 1;
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            self.search_term.clear();
            self.visible = self.all.clone();
        } else {
            self.visible = self
                .all
                .iter()
                .filter(|e| e.english.to_lowercase().contains(&term))
                .cloned()
                .collect();
            self.search_term = term;
        }
        self.cursor = 0;
    }

    /// Reflect a confirmed learned-flag write in both the full and the
    /// visible deck. Entry identity and cursor are preserved. Called only
    /// after the store acknowledged the update, so there is nothing to
    /// roll back. Idempotent: the flag ends up at the written value.
    pub fn confirm_learned(&mut self, id: &str, learned: bool) {
        for entry in self.all.iter_mut().chain(self.visible.iter_mut()) {
            if entry.id == id {
                entry.learned = learned;
            }
        }
    }

    /// Progress over the full scope deck, never the filtered subset.
    pub fn progress(&self) -> Progress {
        Progress::of(&self.all)
    }
}
