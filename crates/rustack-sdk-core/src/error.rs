//! Error types for the SDK core.

/// Errors raised while building configuration or wire requests.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The endpoint URL could not be parsed.
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint {
        /// The endpoint as given.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("invalid header {name}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// Wire text could not be converted to the requested primitive kind.
    #[error("cannot parse {text:?} as {kind}")]
    InvalidPrimitive {
        /// The primitive kind that was requested.
        kind: crate::PrimitiveKind,
        /// The raw text.
        text: String,
    },
}

/// Convenience result type for SDK core operations.
pub type CoreResult<T> = Result<T, CoreError>;
