//! JSON protocol marshaller (`application/x-amz-json-1.x`).

use std::fmt;
use std::marker::PhantomData;

use rustack_sdk_core::shape::{Structure, WireValue};
use rustack_sdk_core::value::format_epoch_seconds;
use rustack_sdk_core::{HttpMethod, Primitive, TimestampFormat, WireRequest};
use serde_json::{Map, Number, Value};
use tracing::trace;

use super::{Marshaller, set_fields};
use crate::error::MarshallError;

/// JSON protocol version, which selects the content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonVersion {
    /// `application/x-amz-json-1.0`.
    V1_0,
    /// `application/x-amz-json-1.1`.
    #[default]
    V1_1,
}

impl JsonVersion {
    /// Content type for this version.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::V1_0 => "application/x-amz-json-1.0",
            Self::V1_1 => "application/x-amz-json-1.1",
        }
    }
}

/// Marshals a request into a JSON body for one operation.
pub struct JsonMarshaller<I> {
    service_name: &'static str,
    target_prefix: &'static str,
    operation: &'static str,
    version: JsonVersion,
    _input: PhantomData<fn(&I)>,
}

impl<I> JsonMarshaller<I> {
    /// Create a marshaller targeting `<target_prefix>.<operation>`.
    #[must_use]
    pub const fn new(
        service_name: &'static str,
        target_prefix: &'static str,
        operation: &'static str,
    ) -> Self {
        Self {
            service_name,
            target_prefix,
            operation,
            version: JsonVersion::V1_1,
            _input: PhantomData,
        }
    }

    /// Use a different protocol version.
    #[must_use]
    pub const fn with_version(mut self, version: JsonVersion) -> Self {
        self.version = version;
        self
    }
}

impl<I> fmt::Debug for JsonMarshaller<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonMarshaller")
            .field("service_name", &self.service_name)
            .field("target", &format_args!("{}.{}", self.target_prefix, self.operation))
            .field("version", &self.version)
            .finish()
    }
}

impl<I: Structure> Marshaller<I> for JsonMarshaller<I> {
    fn marshall(&self, input: &I) -> Result<WireRequest, MarshallError> {
        let body = Value::Object(to_object(input)?);
        let content = serde_json::to_vec(&body)?;

        let mut request = WireRequest::new(self.service_name);
        request.set_method(HttpMethod::Post);
        request.set_resource_path("/");
        request.set_header(
            "x-amz-target",
            &format!("{}.{}", self.target_prefix, self.operation),
        )?;
        request.set_header("content-type", self.version.content_type())?;
        trace!(
            service = self.service_name,
            operation = self.operation,
            bytes = content.len(),
            "marshalled JSON request"
        );
        request.set_content(content);
        Ok(request)
    }
}

fn to_object(structure: &dyn Structure) -> Result<Map<String, Value>, MarshallError> {
    let mut object = Map::new();
    for (field, value) in set_fields(structure)? {
        object.insert(field.name.to_owned(), to_json(value)?);
    }
    Ok(object)
}

fn to_json(value: WireValue<'_>) -> Result<Value, MarshallError> {
    Ok(match value {
        WireValue::Primitive(p) => primitive_to_json(p)?,
        WireValue::Structure(s) => Value::Object(to_object(s)?),
        WireValue::List(items) => Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        WireValue::Map(entries) => {
            let mut object = Map::new();
            for (key, value) in entries {
                object.insert(key, to_json(value)?);
            }
            Value::Object(object)
        }
    })
}

fn primitive_to_json(value: Primitive) -> Result<Value, MarshallError> {
    Ok(match value {
        Primitive::String(s) => Value::String(s),
        Primitive::Integer(v) => Value::from(v),
        Primitive::Long(v) => Value::from(v),
        Primitive::Boolean(v) => Value::Bool(v),
        Primitive::Double(v) => {
            Value::Number(Number::from_f64(v).ok_or(MarshallError::NonFiniteNumber(v))?)
        }
        Primitive::Timestamp(ts) => {
            Value::Number(format_epoch_seconds(&ts).parse::<Number>()?)
        }
        blob @ Primitive::Blob(_) => Value::String(blob.to_wire_string(TimestampFormat::EpochSeconds)),
    })
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::{DateTime, TimeZone, Utc};
    use rustack_sdk_core::shape::{self, FieldDescriptor, Shape};

    use super::*;
    use crate::context::{JsonUnmarshallerContext, StructureScope, UnmarshallerContext};
    use crate::error::UnmarshallError;
    use crate::unmarshall::{
        BLOB, BOOL, DOUBLE, INT, ListUnmarshaller, STRING, StringUnmarshaller, TIMESTAMP,
        Unmarshaller, read_structure,
    };

    #[derive(Debug, Default, PartialEq)]
    struct Volume {
        arn: Option<String>,
        size: Option<i32>,
        ratio: Option<f64>,
        encrypted: Option<bool>,
        created: Option<DateTime<Utc>>,
        payload: Option<Bytes>,
        labels: Vec<String>,
    }

    impl Shape for Volume {
        const SHAPE_NAME: &'static str = "Volume";
        const FIELDS: &'static [FieldDescriptor<Self>] = &[
            FieldDescriptor::new("VolumeARN", |s: &Self| shape::scalar(s.arn.as_ref())).required(),
            FieldDescriptor::new("SizeInGiB", |s| shape::scalar(s.size.as_ref())),
            FieldDescriptor::new("Ratio", |s| shape::scalar(s.ratio.as_ref())),
            FieldDescriptor::new("Encrypted", |s| shape::scalar(s.encrypted.as_ref())),
            FieldDescriptor::new("Created", |s| shape::scalar(s.created.as_ref())),
            FieldDescriptor::new("Payload", |s| shape::scalar(s.payload.as_ref())),
            FieldDescriptor::new("Labels", |s| shape::scalar_list(&s.labels)),
        ];
    }

    #[derive(Debug)]
    struct VolumeUnmarshaller;

    static LABELS: ListUnmarshaller<StringUnmarshaller> = ListUnmarshaller::new(StringUnmarshaller::new());

    fn read_volume<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<Volume, UnmarshallError> {
        let mut v = Volume::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("VolumeARN", depth) {
                v.arn = ctx.read_member(&STRING)?;
            } else if ctx.test_expression("SizeInGiB", depth) {
                v.size = ctx.read_member(&INT)?;
            } else if ctx.test_expression("Ratio", depth) {
                v.ratio = ctx.read_member(&DOUBLE)?;
            } else if ctx.test_expression("Encrypted", depth) {
                v.encrypted = ctx.read_member(&BOOL)?;
            } else if ctx.test_expression("Created", depth) {
                v.created = ctx.read_member(&TIMESTAMP)?;
            } else if ctx.test_expression("Payload", depth) {
                v.payload = ctx.read_member(&BLOB)?;
            } else if ctx.test_expression("Labels", depth) {
                v.labels = ctx.read_member(&LABELS)?.unwrap_or_default();
            }
        }
        Ok(v)
    }

    impl Unmarshaller<Volume> for VolumeUnmarshaller {
        fn unmarshall_json(
            &self,
            ctx: &mut JsonUnmarshallerContext,
        ) -> Result<Option<Volume>, UnmarshallError> {
            read_structure(ctx, StructureScope::STRUCTURE_LEVELS, read_volume)
        }
    }

    fn marshaller() -> JsonMarshaller<Volume> {
        JsonMarshaller::new("storagegateway", "StorageGateway_20130630", "DescribeVolume")
    }

    #[test]
    fn test_should_set_target_and_content_type() {
        let volume = Volume {
            arn: Some("arn:v".to_owned()),
            ..Volume::default()
        };
        let wire = marshaller().marshall(&volume).unwrap();
        assert_eq!(wire.header("x-amz-target"), Some("StorageGateway_20130630.DescribeVolume"));
        assert_eq!(wire.header("content-type"), Some("application/x-amz-json-1.1"));
        assert_eq!(wire.payload().as_ref(), br#"{"VolumeARN":"arn:v"}"#);
        assert!(!wire.parameters_in_body());

        let wire = marshaller()
            .with_version(JsonVersion::V1_0)
            .marshall(&volume)
            .unwrap();
        assert_eq!(wire.header("content-type"), Some("application/x-amz-json-1.0"));
    }

    #[test]
    fn test_should_write_native_json_types() {
        let volume = Volume {
            arn: Some("arn:v".to_owned()),
            size: Some(150),
            encrypted: Some(false),
            created: Some(Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap()),
            payload: Some(Bytes::from_static(b"hi")),
            ..Volume::default()
        };
        let wire = marshaller().marshall(&volume).unwrap();
        let body: Value = serde_json::from_slice(&wire.payload()).unwrap();
        assert_eq!(body["SizeInGiB"], 150);
        assert_eq!(body["Encrypted"], false);
        assert_eq!(body["Created"], 1_700_000_000.5);
        assert_eq!(body["Payload"], "aGk=");
        assert!(body.get("Labels").is_none());
    }

    #[test]
    fn test_should_round_trip_through_json_unmarshaller() {
        let volume = Volume {
            arn: Some("arn:aws:storagegateway:us-east-1:1:gateway/sgw-1/volume/vol-1".to_owned()),
            size: Some(0),
            ratio: Some(0.25),
            encrypted: Some(true),
            created: Some(Utc.with_ymd_and_hms(2023, 6, 30, 12, 0, 0).unwrap()),
            payload: Some(Bytes::from_static(b"\x00\x01binary")),
            labels: vec!["a".to_owned(), "b".to_owned()],
        };
        let wire = marshaller().marshall(&volume).unwrap();
        let mut ctx = JsonUnmarshallerContext::new(&wire.payload()).unwrap();
        let decoded = ctx.unmarshall(&VolumeUnmarshaller).unwrap().unwrap();
        assert_eq!(decoded, volume);
    }

    #[derive(Debug, Default)]
    struct Ordered {
        zeta: Option<String>,
        alpha: Option<String>,
        middle: Option<i32>,
    }

    impl Shape for Ordered {
        const SHAPE_NAME: &'static str = "Ordered";
        const FIELDS: &'static [FieldDescriptor<Self>] = &[
            FieldDescriptor::new("Zeta", |s| shape::scalar(s.zeta.as_ref())),
            FieldDescriptor::new("Alpha", |s| shape::scalar(s.alpha.as_ref())),
            FieldDescriptor::new("Middle", |s| shape::scalar(s.middle.as_ref())),
        ];
    }

    #[test]
    fn test_should_write_fields_in_declaration_order() {
        let ordered = Ordered {
            zeta: Some("z".to_owned()),
            alpha: Some("a".to_owned()),
            middle: Some(1),
        };
        let wire = JsonMarshaller::<Ordered>::new("svc", "Svc_1", "Op")
            .marshall(&ordered)
            .unwrap();
        assert_eq!(
            wire.payload().as_ref(),
            br#"{"Zeta":"z","Alpha":"a","Middle":1}"#
        );
    }

    #[test]
    fn test_should_reject_non_finite_doubles() {
        for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let volume = Volume {
                arn: Some("arn:v".to_owned()),
                ratio: Some(ratio),
                ..Volume::default()
            };
            let err = marshaller().marshall(&volume).unwrap_err();
            assert!(matches!(err, MarshallError::NonFiniteNumber(_)), "{ratio}");
        }
    }

    #[test]
    fn test_should_write_pre_epoch_timestamps_as_signed_seconds() {
        let volume = Volume {
            arn: Some("arn:v".to_owned()),
            created: Some(Utc.timestamp_millis_opt(-1_500).unwrap()),
            ..Volume::default()
        };
        let wire = marshaller().marshall(&volume).unwrap();
        let body: Value = serde_json::from_slice(&wire.payload()).unwrap();
        assert_eq!(body["Created"], -1.5);

        let mut ctx = JsonUnmarshallerContext::new(&wire.payload()).unwrap();
        let decoded = ctx.unmarshall(&VolumeUnmarshaller).unwrap().unwrap();
        assert_eq!(decoded.created, volume.created);
    }

    #[test]
    fn test_should_fail_on_missing_required_field() {
        let err = marshaller().marshall(&Volume::default()).unwrap_err();
        assert!(matches!(
            err,
            MarshallError::MissingRequiredField {
                shape: "Volume",
                field: "VolumeARN"
            }
        ));
    }
}
