//! The marshaller contract.
//!
//! A [`Marshaller`] is a pure function from a typed request to a
//! [`WireRequest`]. Both protocol marshallers here walk the request's
//! static field table in declaration order and emit only fields that are
//! set; a `required` field without a value aborts marshalling before any
//! I/O happens.

mod json;
mod query;

pub use json::{JsonMarshaller, JsonVersion};
pub use query::{ListEncoding, QueryMarshaller};

use rustack_sdk_core::WireRequest;
use rustack_sdk_core::shape::{FieldValue, Structure, WireValue};

use crate::error::MarshallError;

/// Converts a typed request into a wire request.
pub trait Marshaller<I>: Send + Sync {
    /// Build the wire request for `input`.
    fn marshall(&self, input: &I) -> Result<WireRequest, MarshallError>;
}

/// Fields of `structure` that carry a value, failing on a missing required one.
fn set_fields(structure: &dyn Structure) -> Result<Vec<(FieldValue<'_>, WireValue<'_>)>, MarshallError> {
    let mut fields = Vec::new();
    for mut field in structure.field_values() {
        match field.value.take() {
            Some(value) => fields.push((field, value)),
            None if field.required => {
                return Err(MarshallError::MissingRequiredField {
                    shape: structure.shape_name(),
                    field: field.name,
                });
            }
            None => {}
        }
    }
    Ok(fields)
}
