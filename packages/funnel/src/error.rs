//! Error types for the funnel layer.

use funnelstore_envelope::EnvelopeError;

/// Errors surfaced by funnel dispatch.
///
/// These are semantic failures on top of the wire layer: an envelope that
/// names no registered module, or a payload that does not decode under the
/// owning module's vocabulary. Both are returned as values to the caller;
/// nothing in the dispatch path aborts or leaves state partially updated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FunnelError {
    #[error("no funnel module registered for '{module}'")]
    UnknownModule { module: String },

    #[error("failed to decode '{module}' message: {message}")]
    Decode { module: String, message: String },

    #[error("{0}")]
    Envelope(#[from] EnvelopeError),
}

impl FunnelError {
    /// Build a decode error for the given module with a human-readable
    /// description of the payload mismatch.
    pub fn decode(module: impl Into<String>, message: impl Into<String>) -> Self {
        FunnelError::Decode {
            module: module.into(),
            message: message.into(),
        }
    }
}
