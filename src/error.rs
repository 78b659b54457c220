//! Error types shared by the demand pipeline and its configuration.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the demand estimators and model construction.
#[derive(Debug, Error)]
pub enum DemandError {
    /// A per-slot input did not cover exactly one delivery window.
    #[error("expected {expected} half-hour slots, got {actual}")]
    SlotCountMismatch {
        /// Required number of slots.
        expected: usize,
        /// Number of slots supplied by the caller.
        actual: usize,
    },

    /// A delivery window would run past the last date chrono can represent.
    #[error("delivery window starting at {anchor} runs past the last representable date")]
    WindowOutOfRange {
        /// Start of the window that could not be laid out.
        anchor: NaiveDateTime,
    },

    /// The building configuration failed validation.
    #[error("invalid building configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
