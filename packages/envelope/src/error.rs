//! Error type for the envelope layer.
//!
//! Errors at this level are shape-of-the-wire only. Unknown tags, payload
//! mismatches and unknown modules are semantic failures - those belong in
//! higher layers.

/// Errors at the envelope (wire) layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The text at the boundary was not a valid envelope.
    Malformed {
        /// Human-readable description of what went wrong.
        message: String,
    },
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvelopeError::Malformed { message } => {
                write!(f, "malformed envelope: {}", message)
            }
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl From<serde_json::Error> for EnvelopeError {
    fn from(e: serde_json::Error) -> Self {
        EnvelopeError::Malformed {
            message: e.to_string(),
        }
    }
}
