//! Error types for the greeting function.
//!
//! The error surface is deliberately small: the handler consumes no required
//! input, so the only failure modes are the clock read and response
//! serialization.

use thiserror::Error;

/// The error type for greeting computation and response shaping.
#[derive(Debug, Error)]
pub enum GreetingError {
    /// The host time source could not be read.
    ///
    /// Practically unreachable on any supported platform. The invocation
    /// fails and the Lambda runtime reports the failure to the caller.
    #[error("Clock unavailable: {message}")]
    ClockUnavailable {
        /// Description of the clock failure
        message: String,
    },

    /// The response body could not be serialized to JSON.
    #[error("Encoding error: {message}")]
    Encoding {
        /// Description of the serialization failure
        message: String,
    },
}

impl GreetingError {
    /// Creates a new ClockUnavailable error.
    pub fn clock_unavailable(message: impl Into<String>) -> Self {
        Self::ClockUnavailable {
            message: message.into(),
        }
    }

    /// Creates a new Encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GreetingError {
    fn from(err: serde_json::Error) -> Self {
        Self::encoding(err.to_string())
    }
}
