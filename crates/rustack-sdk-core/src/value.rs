//! The typed value model.
//!
//! Every generated data object stores its fields as `Option<T>` or a
//! collection. Presence is tracked by the container, never by comparing a
//! value against a sentinel: a scalar explicitly set to `0` or `false` is
//! still set. Collections follow a stricter rule and only count as set when
//! they hold at least one element.
//!
//! Scalar values cross the wire through one closed tagged union,
//! [`Primitive`], whose text conversions are a single dispatch keyed by
//! [`PrimitiveKind`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{CoreError, CoreResult};

/// Presence query used by marshallers to decide whether to emit a field.
pub trait IsSet {
    /// Whether the field was explicitly assigned (and, for collections, is non-empty).
    fn is_set(&self) -> bool;
}

impl<T> IsSet for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

impl<T> IsSet for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> IsSet for HashMap<K, V, S> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> IsSet for BTreeMap<K, V> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

/// Tag of a supported primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Boolean.
    Boolean,
    /// 64-bit float.
    Double,
    /// Point in time (UTC).
    Timestamp,
    /// Opaque bytes, base64 on the wire.
    Blob,
}

impl PrimitiveKind {
    /// Name of the kind as used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How timestamps are rendered as wire text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `2014-07-15T10:00:00.000Z`, used by query and XML protocols.
    #[default]
    Iso8601,
    /// Fractional seconds since the Unix epoch, used by JSON protocols.
    EpochSeconds,
}

/// A scalar value of one of the supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// UTF-8 text.
    String(String),
    /// 32-bit signed integer.
    Integer(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// Boolean.
    Boolean(bool),
    /// 64-bit float.
    Double(f64),
    /// Point in time (UTC).
    Timestamp(DateTime<Utc>),
    /// Opaque bytes.
    Blob(Bytes),
}

impl Primitive {
    /// The kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::String(_) => PrimitiveKind::String,
            Self::Integer(_) => PrimitiveKind::Integer,
            Self::Long(_) => PrimitiveKind::Long,
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Double(_) => PrimitiveKind::Double,
            Self::Timestamp(_) => PrimitiveKind::Timestamp,
            Self::Blob(_) => PrimitiveKind::Blob,
        }
    }

    /// Render the value as wire text.
    #[must_use]
    pub fn to_wire_string(&self, format: TimestampFormat) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(v) => v.to_string(),
            Self::Long(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::Timestamp(ts) => format_timestamp(ts, format),
            Self::Blob(b) => BASE64.encode(b),
        }
    }

    /// Parse wire text into a value of the given kind.
    ///
    /// Timestamps are accepted as RFC 3339, epoch seconds or RFC 2822,
    /// independent of the format the service writes.
    pub fn parse(kind: PrimitiveKind, text: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidPrimitive {
            kind,
            text: text.to_owned(),
        };
        let trimmed = text.trim();

        let value = match kind {
            PrimitiveKind::String => Self::String(text.to_owned()),
            PrimitiveKind::Integer => Self::Integer(trimmed.parse().map_err(|_| invalid())?),
            PrimitiveKind::Long => Self::Long(trimmed.parse().map_err(|_| invalid())?),
            PrimitiveKind::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    Self::Boolean(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Self::Boolean(false)
                } else {
                    return Err(invalid());
                }
            }
            PrimitiveKind::Double => Self::Double(trimmed.parse().map_err(|_| invalid())?),
            PrimitiveKind::Timestamp => Self::Timestamp(parse_timestamp(trimmed).ok_or_else(invalid)?),
            PrimitiveKind::Blob => Self::Blob(Bytes::from(
                BASE64.decode(trimmed).map_err(|_| invalid())?,
            )),
        };
        Ok(value)
    }
}

/// Format a timestamp in the given wire format.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>, format: TimestampFormat) -> String {
    match format {
        TimestampFormat::Iso8601 => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        TimestampFormat::EpochSeconds => format_epoch_seconds(ts),
    }
}

/// Seconds since the epoch, with a three-digit fraction when the timestamp
/// is not on a whole second.
#[must_use]
pub fn format_epoch_seconds(ts: &DateTime<Utc>) -> String {
    let millis = ts.timestamp_millis();
    if millis % 1000 == 0 {
        return (millis / 1000).to_string();
    }
    let sign = if millis < 0 { "-" } else { "" };
    let abs = millis.unsigned_abs();
    format!("{sign}{}.{:03}", abs / 1000, abs % 1000)
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(secs) = text.parse::<f64>() {
        if !secs.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let millis = (secs * 1000.0).round() as i64;
        return Utc.timestamp_millis_opt(millis).single();
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// A Rust type that maps onto exactly one [`PrimitiveKind`].
///
/// The kind is resolved from the static type at the call site, so no runtime
/// type inspection is needed to pick a conversion.
pub trait PrimitiveValue: Sized + Clone {
    /// The kind this type is carried as.
    const KIND: PrimitiveKind;

    /// Wrap a copy of this value in the tagged union.
    fn to_primitive(&self) -> Primitive;

    /// Extract a value from the tagged union, if the tag matches.
    fn from_primitive(value: Primitive) -> Option<Self>;

    /// Parse wire text straight into this type.
    fn parse_wire(text: &str) -> CoreResult<Self> {
        Primitive::parse(Self::KIND, text).and_then(|p| {
            Self::from_primitive(p).ok_or_else(|| CoreError::InvalidPrimitive {
                kind: Self::KIND,
                text: text.to_owned(),
            })
        })
    }
}

macro_rules! primitive_value {
    ($ty:ty, $variant:ident) => {
        impl PrimitiveValue for $ty {
            const KIND: PrimitiveKind = PrimitiveKind::$variant;

            fn to_primitive(&self) -> Primitive {
                Primitive::$variant(self.clone())
            }

            fn from_primitive(value: Primitive) -> Option<Self> {
                match value {
                    Primitive::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

primitive_value!(String, String);
primitive_value!(i32, Integer);
primitive_value!(i64, Long);
primitive_value!(bool, Boolean);
primitive_value!(f64, Double);
primitive_value!(DateTime<Utc>, Timestamp);
primitive_value!(Bytes, Blob);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_treat_explicit_default_as_set() {
        let zero: Option<i32> = Some(0);
        let falsy: Option<bool> = Some(false);
        let empty_text: Option<String> = Some(String::new());
        assert!(zero.is_set());
        assert!(falsy.is_set());
        assert!(empty_text.is_set());
        assert!(!None::<i32>.is_set());
    }

    #[test]
    fn test_should_treat_empty_collection_as_unset() {
        let empty: Vec<String> = Vec::new();
        let full = vec!["a".to_owned()];
        assert!(!empty.is_set());
        assert!(full.is_set());
        assert!(!HashMap::<String, String>::new().is_set());
        assert!(BTreeMap::from([("k", "v")]).is_set());
    }

    #[test]
    fn test_should_format_primitives_as_wire_text() {
        let fmt = TimestampFormat::Iso8601;
        assert_eq!(Primitive::Boolean(false).to_wire_string(fmt), "false");
        assert_eq!(Primitive::Integer(-7).to_wire_string(fmt), "-7");
        assert_eq!(Primitive::Double(1.5).to_wire_string(fmt), "1.5");
        assert_eq!(
            Primitive::Blob(Bytes::from_static(b"hello")).to_wire_string(fmt),
            "aGVsbG8="
        );
    }

    #[test]
    fn test_should_format_timestamps_per_protocol() {
        let ts = Utc.with_ymd_and_hms(2014, 7, 15, 10, 0, 0).unwrap();
        assert_eq!(
            format_timestamp(&ts, TimestampFormat::Iso8601),
            "2014-07-15T10:00:00.000Z"
        );
        assert_eq!(
            format_timestamp(&ts, TimestampFormat::EpochSeconds),
            "1405418400"
        );
    }

    #[test]
    fn test_should_parse_timestamps_in_any_supported_form() {
        let expected = Utc.with_ymd_and_hms(2014, 7, 15, 10, 0, 0).unwrap();
        for text in [
            "2014-07-15T10:00:00Z",
            "2014-07-15T10:00:00.000Z",
            "1405418400",
            "1405418400.0",
            "Tue, 15 Jul 2014 10:00:00 GMT",
        ] {
            assert_eq!(DateTime::<Utc>::parse_wire(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_should_format_fractional_epoch_seconds_on_both_sides_of_1970() {
        let after = Utc.timestamp_millis_opt(1_500).unwrap();
        let before = Utc.timestamp_millis_opt(-1_500).unwrap();
        let just_before = Utc.timestamp_millis_opt(-250).unwrap();
        assert_eq!(format_epoch_seconds(&after), "1.500");
        assert_eq!(format_epoch_seconds(&before), "-1.500");
        assert_eq!(format_epoch_seconds(&just_before), "-0.250");
        assert_eq!(format_epoch_seconds(&Utc.timestamp_millis_opt(-2_000).unwrap()), "-2");
        for ts in [after, before, just_before] {
            let text = format_timestamp(&ts, TimestampFormat::EpochSeconds);
            assert_eq!(DateTime::<Utc>::parse_wire(&text).unwrap(), ts, "{text}");
        }
    }

    #[test]
    fn test_should_reject_non_finite_epoch_timestamps() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert!(
                matches!(
                    DateTime::<Utc>::parse_wire(text),
                    Err(CoreError::InvalidPrimitive {
                        kind: PrimitiveKind::Timestamp,
                        ..
                    })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn test_should_reject_unparsable_text() {
        assert!(matches!(
            i32::parse_wire("twelve"),
            Err(CoreError::InvalidPrimitive {
                kind: PrimitiveKind::Integer,
                ..
            })
        ));
        assert!(bool::parse_wire("yes").is_err());
        assert!(Bytes::parse_wire("not base64!").is_err());
    }

    #[test]
    fn test_should_round_trip_through_tagged_union() {
        let value = 42_i64;
        let primitive = value.to_primitive();
        assert_eq!(primitive.kind(), PrimitiveKind::Long);
        assert_eq!(i64::from_primitive(primitive), Some(42));
        assert_eq!(i32::from_primitive(Primitive::Long(1)), None);
    }
}
