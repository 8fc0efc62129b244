//! Error types for vocadeck-core.

use thiserror::Error;

/// Validation failures for entry creation input.
///
/// These are caught before any network or store call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
