//! Scalar unmarshallers.

use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use rustack_sdk_core::{PrimitiveKind, PrimitiveValue};

use super::Unmarshaller;
use crate::context::{JsonUnmarshallerContext, UnmarshallerContext, XmlUnmarshallerContext};
use crate::error::UnmarshallError;

/// Reads one primitive value of type `T`.
///
/// Empty text for a non-string kind is treated as absent. Any other text
/// that does not parse is a deserialization error.
pub struct PrimitiveUnmarshaller<T>(PhantomData<fn() -> T>);

impl<T> PrimitiveUnmarshaller<T> {
    /// Create the unmarshaller.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for PrimitiveUnmarshaller<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrimitiveUnmarshaller<T> {}

impl<T> Default for PrimitiveUnmarshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PrimitiveUnmarshaller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimitiveUnmarshaller<{}>", std::any::type_name::<T>())
    }
}

/// Reads strings.
pub type StringUnmarshaller = PrimitiveUnmarshaller<String>;
/// Reads 32-bit integers.
pub type IntUnmarshaller = PrimitiveUnmarshaller<i32>;
/// Reads 64-bit integers.
pub type LongUnmarshaller = PrimitiveUnmarshaller<i64>;
/// Reads booleans.
pub type BoolUnmarshaller = PrimitiveUnmarshaller<bool>;
/// Reads doubles.
pub type DoubleUnmarshaller = PrimitiveUnmarshaller<f64>;
/// Reads timestamps.
pub type TimestampUnmarshaller = PrimitiveUnmarshaller<DateTime<Utc>>;
/// Reads base64 blobs.
pub type BlobUnmarshaller = PrimitiveUnmarshaller<Bytes>;

/// Shared string unmarshaller.
pub static STRING: StringUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared integer unmarshaller.
pub static INT: IntUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared long unmarshaller.
pub static LONG: LongUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared boolean unmarshaller.
pub static BOOL: BoolUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared double unmarshaller.
pub static DOUBLE: DoubleUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared timestamp unmarshaller.
pub static TIMESTAMP: TimestampUnmarshaller = PrimitiveUnmarshaller::new();
/// Shared blob unmarshaller.
pub static BLOB: BlobUnmarshaller = PrimitiveUnmarshaller::new();

fn read_scalar<T, C>(ctx: &mut C) -> Result<Option<T>, UnmarshallError>
where
    T: PrimitiveValue,
    C: UnmarshallerContext,
{
    let Some(text) = ctx.read_text()? else {
        return Ok(None);
    };
    if text.trim().is_empty() && T::KIND != PrimitiveKind::String {
        return Ok(None);
    }
    T::parse_wire(&text)
        .map(Some)
        .map_err(|e| ctx.deserialization_error(std::any::type_name::<T>(), e.to_string()))
}

impl<T: PrimitiveValue> Unmarshaller<T> for PrimitiveUnmarshaller<T> {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<T>, UnmarshallError> {
        read_scalar(ctx)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<T>, UnmarshallError> {
        read_scalar(ctx)
    }
}
