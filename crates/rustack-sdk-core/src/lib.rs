//! Core building blocks shared by every Rustack SDK service client.
//!
//! This crate holds the pieces that generated service code is written
//! against: the typed value model (presence tracking, primitive kinds and
//! static shape descriptors), the wire request and response envelopes,
//! client configuration, and the contract every per-service fault table
//! implements.

mod config;
mod error;
pub mod fault;
pub mod request;
pub mod response;
pub mod shape;
mod types;
pub mod value;

pub use config::ClientConfig;
pub use error::{CoreError, CoreResult};
pub use fault::{ErrorCode, ErrorEnvelope, FaultCategory, FaultCode, ServiceError};
pub use request::{HttpMethod, Parameters, SignedRequest, WireRequest};
pub use response::{HttpResponse, Response, ResponseMetadata};
pub use shape::{FieldDescriptor, Shape, Structure, WireValue};
pub use types::{Credentials, Region};
pub use value::{IsSet, Primitive, PrimitiveKind, PrimitiveValue, TimestampFormat};
