//! Error types for variant-track
//!
//! Nothing in this crate is fatal to the hosting application: every failure
//! mode degrades to "tracking silently does nothing". The taxonomy below
//! exists for store/sink implementors and for internal logging.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// variant-track error types
#[derive(Error, Debug)]
pub enum Error {
    /// Persisted assignment store unavailable or failing
    #[error("assignment store unavailable: {0}\nDegrading to ephemeral assignment for this session")]
    Store(String),

    /// Analytics dispatch failure (best-effort delivery, never surfaced)
    #[error("analytics dispatch failed: {0}")]
    Dispatch(String),

    /// A stored label is outside the closed variant set
    #[error("unknown variant label: {0:?} (expected one of \"A\", \"B\")")]
    UnknownVariant(String),

    /// Empty experiment name (programming error in the caller)
    #[error("experiment name must be non-empty")]
    EmptyExperimentName,

    /// Empty action label (programming error in the caller)
    #[error("action label must be non-empty")]
    EmptyAction,
}
