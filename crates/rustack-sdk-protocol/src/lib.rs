//! Wire protocols for the Rustack SDK.
//!
//! This crate turns typed requests into wire requests and wire responses
//! back into typed results:
//!
//! - [`context`]: the streaming cursor shared by the XML and JSON readers.
//! - [`unmarshall`]: the unmarshaller contract, scalar and collection
//!   unmarshallers, response envelopes and error envelope parsers.
//! - [`marshall`]: the marshaller contract with query and JSON marshallers
//!   driven by static shape descriptors.

pub mod context;
pub mod error;
pub mod marshall;
pub mod unmarshall;

pub use context::{
    JsonUnmarshallerContext, StructureScope, UnmarshallerContext, WireFormat,
    XmlUnmarshallerContext,
};
pub use error::{CursorPosition, MarshallError, UnmarshallError};
pub use marshall::{JsonMarshaller, JsonVersion, ListEncoding, Marshaller, QueryMarshaller};
pub use unmarshall::{
    JsonResponseUnmarshaller, ListUnmarshaller, MapUnmarshaller, PrimitiveUnmarshaller,
    QueryResponseUnmarshaller, ResponseUnmarshaller, Unmarshaller, read_structure,
    unmarshall_fault,
};
