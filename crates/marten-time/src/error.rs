//! Error type shared across the kernel.

use thiserror::Error;

/// Errors surfaced by the time kernel or its host collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// A required time property was absent, or explicitly undefined, during
    /// record extraction.
    #[error("required time property `{0}` is missing")]
    MissingField(&'static str),

    /// A field fell outside its canonical bounds where clamping was not
    /// allowed.
    #[error("time value out of range for a wall-clock time")]
    OutOfRange,

    /// Failure reported by a host collaborator, carried through unchanged.
    #[error("host error: {0}")]
    Host(String),
}

impl TimeError {
    /// Build a host-side error from any message.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}

/// Result alias used throughout the kernel.
pub type TimeResult<T> = std::result::Result<T, TimeError>;
