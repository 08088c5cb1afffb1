//! Contract-violation errors raised by the core.
//!
//! The core performs no I/O, so every error here is a caller bug surfaced
//! immediately rather than something to retry.

/// Error returned when a core operation receives input outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulerError {
    /// An argument was outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
