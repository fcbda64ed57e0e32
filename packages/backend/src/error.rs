//! Error types for the backend layer.

use funnelstore_funnel::FunnelError;

/// Errors at the backend/adapter layer.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    /// The underlying storage area failed.
    #[error("storage backend failure: {message}")]
    Backend { message: String },

    /// A request envelope did not decode under the storage vocabulary.
    #[error("{0}")]
    Funnel(#[from] FunnelError),
}

impl BackendError {
    /// Build a backend failure with a human-readable description.
    pub fn backend(message: impl Into<String>) -> Self {
        BackendError::Backend {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display() {
        let e = BackendError::backend("quota exceeded");
        assert_eq!(format!("{}", e), "storage backend failure: quota exceeded");
    }

    #[test]
    fn funnel_error_converts() {
        let funnel_err = FunnelError::decode("LocalStorage", "bad args");
        let e: BackendError = funnel_err.into();
        assert!(matches!(e, BackendError::Funnel(_)));
    }
}
