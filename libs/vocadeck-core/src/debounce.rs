//! Quiet-period debouncing for request-heavy inputs.
//!
//! The meaning lookup and the search filter both fire a request per
//! settled input rather than per keystroke: an input only becomes ready
//! once no newer input arrived for the quiet period (500 ms in the
//! reference behavior). Each input gets a generation number; a generation
//! fires at most once, and only while it is still the latest, which pairs
//! with the session's stale-result guard.
//!
//! The type is driven explicitly with timestamps instead of owning a
//! timer, so it works under any runtime and is trivially testable.

use std::time::{Duration, Instant};

/// Default quiet period between last keystroke and request dispatch.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Timer-based debounce gate over a single input source.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
    generation: u64,
    fired: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
            generation: 0,
            fired: false,
        }
    }

    /// Record a keystroke at `now`. Supersedes any pending generation and
    /// returns the new one.
    pub fn record_input(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + self.quiet);
        self.fired = false;
        self.generation
    }

    /// Poll at `now`. Returns the generation to dispatch when the quiet
    /// period has elapsed since the latest input; each generation fires at
    /// most once.
    pub fn ready(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if !self.fired && now >= deadline => {
                self.fired = true;
                Some(self.generation)
            }
            _ => None,
        }
    }

    /// Whether `generation` is still the latest input. Responses for
    /// superseded generations should be dropped.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Next deadline, for schedulers that sleep until the gate can fire.
    pub fn deadline(&self) -> Option<Instant> {
        if self.fired {
            None
        } else {
            self.deadline
        }
    }
}
