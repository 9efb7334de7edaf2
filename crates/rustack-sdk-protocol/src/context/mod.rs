//! The streaming unmarshaller cursor.
//!
//! XML and JSON documents are walked through the same cursor API so that
//! generated unmarshallers can be written once for both formats. Depths
//! follow one convention in both implementations:
//!
//! - a start token reports its nesting level; the document root (XML root
//!   element, JSON top-level `{`) is depth 1;
//! - an end token reports the depth of its matching start;
//! - XML attributes are tokens at element depth + 1;
//! - a JSON property value reports its property's depth when it is a
//!   scalar and one more when it is an object or array; array items report
//!   array depth + 1.
//!
//! An unmarshaller entered on a token at depth `d` loops with
//! [`UnmarshallerContext::read_at_depth`]`(d)`, which stops exactly on the
//! end token of its own subtree. Nested unmarshallers therefore never
//! consume tokens that belong to their parent.

mod json;
mod xml;

use std::fmt;

pub use json::JsonUnmarshallerContext;
pub use xml::XmlUnmarshallerContext;

use crate::error::{CursorPosition, UnmarshallError};
use crate::unmarshall::Unmarshaller;

/// Wire format of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// XML element tree.
    Xml,
    /// JSON document.
    Json,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
        })
    }
}

/// Format-agnostic cursor over a hierarchical document.
pub trait UnmarshallerContext {
    /// Wire format of the document.
    fn format(&self) -> WireFormat;

    /// Advance one token. Returns `false` at the end of input.
    fn read(&mut self) -> Result<bool, UnmarshallError>;

    /// Advance one token, returning `false` once the cursor leaves the
    /// subtree entered at depth `depth` (or input ends).
    fn read_at_depth(&mut self, depth: usize) -> Result<bool, UnmarshallError> {
        Ok(self.read()? && self.current_depth() > depth)
    }

    /// Depth of the current token; `0` before the first read.
    fn current_depth(&self) -> usize;

    /// Whether the current token is a start element, attribute or property
    /// called `name` at exactly `depth`.
    fn test_expression(&self, name: &str, depth: usize) -> bool;

    /// Whether the current token opens an element (XML) or names a property (JSON).
    fn is_start_element(&self) -> bool;

    /// Whether the current token closes an element, object or array.
    fn is_end_element(&self) -> bool;

    /// Whether the current token is an XML attribute.
    fn is_attribute(&self) -> bool;

    /// Whether nothing has been read yet.
    fn is_start_of_document(&self) -> bool;

    /// Whether the current token is a JSON `null`.
    fn is_null(&self) -> bool;

    /// Text of the current scalar. XML consumes through the element's end
    /// tag; JSON yields `None` for `null`.
    fn read_text(&mut self) -> Result<Option<String>, UnmarshallError>;

    /// Move from a matched member name to its value. A no-op for XML, where
    /// the start element already is the value.
    fn enter_value(&mut self) -> Result<(), UnmarshallError>;

    /// Fail unless the cursor sits on something a structure can be read from.
    fn expect_structure(&self, target_type: &'static str) -> Result<(), UnmarshallError>;

    /// Current position, for diagnostics.
    fn position(&self) -> CursorPosition;

    /// Run the format-specific half of an unmarshaller on this cursor.
    fn unmarshall<T, U>(&mut self, unmarshaller: &U) -> Result<Option<T>, UnmarshallError>
    where
        U: Unmarshaller<T> + ?Sized;

    /// Decode the value of the member the cursor was just matched on.
    fn read_member<T, U>(&mut self, unmarshaller: &U) -> Result<Option<T>, UnmarshallError>
    where
        U: Unmarshaller<T> + ?Sized,
    {
        self.enter_value()?;
        self.unmarshall(unmarshaller)
    }

    /// Build a deserialization error at the current position.
    fn deserialization_error(
        &self,
        target_type: &'static str,
        reason: impl Into<String>,
    ) -> UnmarshallError
    where
        Self: Sized,
    {
        let position = self.position();
        UnmarshallError::Deserialization {
            field: position.field().to_owned(),
            target_type,
            position,
            reason: reason.into(),
        }
    }
}

/// Bookkeeping for decoding one structure.
///
/// Captures the depth the structure was entered at. Members are matched at
/// [`target_depth`](Self::target_depth), which is one level deeper, plus the
/// envelope levels when decoding starts at the very beginning of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureScope {
    original_depth: usize,
    target_depth: usize,
}

impl StructureScope {
    /// Envelope levels of a plain structure.
    pub const STRUCTURE_LEVELS: usize = 1;
    /// Envelope levels of an `<Operation>Result` inside `<Operation>Response`.
    pub const RESULT_LEVELS: usize = 2;

    /// Enter a structure at the cursor's current token.
    pub fn enter<C: UnmarshallerContext + ?Sized>(
        ctx: &C,
        target_type: &'static str,
        envelope_levels: usize,
    ) -> Result<Self, UnmarshallError> {
        ctx.expect_structure(target_type)?;
        let original_depth = ctx.current_depth();
        let mut target_depth = original_depth + 1;
        if ctx.is_start_of_document() {
            target_depth += envelope_levels;
        }
        Ok(Self {
            original_depth,
            target_depth,
        })
    }

    /// Depth the structure was entered at.
    #[must_use]
    pub fn original_depth(&self) -> usize {
        self.original_depth
    }

    /// Depth at which members are matched.
    #[must_use]
    pub fn target_depth(&self) -> usize {
        self.target_depth
    }

    /// Advance within the structure. Returns `false` on the structure's own
    /// end token or at the end of input.
    pub fn next<C: UnmarshallerContext + ?Sized>(&self, ctx: &mut C) -> Result<bool, UnmarshallError> {
        ctx.read_at_depth(self.original_depth)
    }
}
