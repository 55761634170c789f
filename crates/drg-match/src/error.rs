//! Error types for matching operations.

use thiserror::Error;

/// Errors from matching configuration.
///
/// Malformed *input* (empty names, absent codes) never produces an error —
/// it resolves to a negative match. Only bad *configuration* fails loudly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A similarity threshold outside the open interval (0, 1). A threshold
    /// of 0 or 1 would make the comparison meaningless, so it is rejected
    /// rather than clamped.
    #[error("similarity threshold must be strictly between 0 and 1, got {value}")]
    InvalidThreshold { value: f64 },
}
