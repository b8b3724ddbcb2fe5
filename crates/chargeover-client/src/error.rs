//! Client error types.

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the ChargeOver client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// ChargeOver answered with `"status": "error"`.
    ///
    /// The code and message are the remote's, unmodified.
    #[error("ChargeOver API error: {code} - {message}")]
    Api {
        /// Remote error code.
        code: u16,
        /// Remote error message.
        message: String,
    },

    /// The request could not be sent, or the reply could not be read.
    ///
    /// The underlying cause is logged, not carried.
    #[error("Internal Server Error")]
    Internal,

    /// The operation is part of the API surface but has no implementation yet.
    #[error("operation not supported: {operation}")]
    NotSupported {
        /// Operation name.
        operation: &'static str,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP-style status code for this error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Api { code, .. } => *code,
            Self::Internal => 500,
            Self::NotSupported { .. } => 501,
            Self::Configuration(_) => 400,
        }
    }

    /// Log `cause` and collapse it into [`ClientError::Internal`].
    pub(crate) fn internal(context: &str, cause: &dyn std::error::Error) -> Self {
        tracing::error!(error = %cause, "{context}");
        Self::Internal
    }
}
