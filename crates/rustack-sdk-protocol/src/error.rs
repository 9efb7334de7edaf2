//! Error types for marshalling and unmarshalling.

use std::fmt;

use rustack_sdk_core::CoreError;

use crate::context::WireFormat;

/// Where a cursor was when something went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorPosition {
    /// Nesting depth of the current token.
    pub depth: usize,
    /// Slash-separated element or property path, e.g. `/Response/Result/Port`.
    pub path: String,
    /// Description of the current token.
    pub token: String,
}

impl CursorPosition {
    /// Last path segment, which names the field being read.
    #[must_use]
    pub fn field(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {}, at {})", self.path, self.depth, self.token)
    }
}

/// Errors raised while decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum UnmarshallError {
    /// Wire content did not match the expected shape or type of a field.
    #[error("cannot read field {field} as {target_type} at {position}: {reason}")]
    Deserialization {
        /// Field being decoded.
        field: String,
        /// Declared target type.
        target_type: &'static str,
        /// Cursor position of the offending token.
        position: CursorPosition,
        /// What was wrong.
        reason: String,
    },

    /// The document ended in the middle of a value.
    #[error("unexpected end of document at {0}")]
    UnexpectedEof(CursorPosition),

    /// The XML reader failed.
    #[error("XML processing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The JSON body is not valid JSON.
    #[error("JSON processing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is well-formed but cannot be decoded (bad encoding, entity).
    #[error("malformed document: {0}")]
    Malformed(String),

    /// An error envelope lacked its code.
    #[error("error response has no error code")]
    MissingErrorCode,

    /// The unmarshaller has no implementation for this wire format.
    #[error("{target_type} cannot be read from {format}")]
    UnsupportedFormat {
        /// Type that was requested.
        target_type: &'static str,
        /// Wire format of the cursor.
        format: WireFormat,
    },
}

/// Errors raised while building a wire request.
#[derive(Debug, thiserror::Error)]
pub enum MarshallError {
    /// A field the protocol requires was not set.
    #[error("missing required field {shape}.{field}")]
    MissingRequiredField {
        /// Shape declaring the field.
        shape: &'static str,
        /// Field name.
        field: &'static str,
    },

    /// A double has no JSON representation (NaN or infinity).
    #[error("cannot write non-finite number {0} as JSON")]
    NonFiniteNumber(f64),

    /// The JSON body could not be written.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The wire request could not be built.
    #[error(transparent)]
    Request(#[from] CoreError),
}
