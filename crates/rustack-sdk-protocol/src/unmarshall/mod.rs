//! The unmarshaller contract.
//!
//! An [`Unmarshaller`] decodes one value from a cursor. It has one entry
//! point per wire format; a type that is never read from one of the formats
//! keeps the default, which reports [`UnmarshallError::UnsupportedFormat`].
//!
//! Unmarshallers hold no per-call state. Generated code exposes them as
//! `static` items, which are built at compile time and shared freely.

mod collection;
mod fault;
mod response;
mod simple;

pub use collection::{ListUnmarshaller, MapUnmarshaller};
pub use fault::{parse_json_error, parse_xml_error, unmarshall_fault};
pub use response::{
    JsonResponseUnmarshaller, QueryResponseUnmarshaller, ResponseMetadataUnmarshaller,
    ResponseUnmarshaller,
};
pub use simple::{
    BLOB, BOOL, BlobUnmarshaller, BoolUnmarshaller, DOUBLE, DoubleUnmarshaller, INT,
    IntUnmarshaller, LONG, LongUnmarshaller, PrimitiveUnmarshaller, STRING, StringUnmarshaller,
    TIMESTAMP, TimestampUnmarshaller,
};

use crate::context::{
    JsonUnmarshallerContext, StructureScope, UnmarshallerContext, WireFormat,
    XmlUnmarshallerContext,
};
use crate::error::UnmarshallError;

/// Decodes a `T` from either wire format.
pub trait Unmarshaller<T>: Send + Sync {
    /// Decode from an XML cursor.
    fn unmarshall_xml(
        &self,
        _ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<T>, UnmarshallError> {
        Err(UnmarshallError::UnsupportedFormat {
            target_type: std::any::type_name::<T>(),
            format: WireFormat::Xml,
        })
    }

    /// Decode from a JSON cursor.
    fn unmarshall_json(
        &self,
        _ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<T>, UnmarshallError> {
        Err(UnmarshallError::UnsupportedFormat {
            target_type: std::any::type_name::<T>(),
            format: WireFormat::Json,
        })
    }
}

/// Decode a structure at the cursor with the given member reader.
///
/// A JSON `null` yields `None` without reading anything further. Otherwise
/// a [`StructureScope`] is entered and `read` is called to loop over the
/// members, matching each with
/// [`test_expression`](UnmarshallerContext::test_expression) at the scope's
/// target depth.
pub fn read_structure<T, C, F>(
    ctx: &mut C,
    envelope_levels: usize,
    read: F,
) -> Result<Option<T>, UnmarshallError>
where
    C: UnmarshallerContext,
    F: FnOnce(&mut C, &StructureScope) -> Result<T, UnmarshallError>,
{
    if ctx.is_null() {
        return Ok(None);
    }
    let scope = StructureScope::enter(ctx, std::any::type_name::<T>(), envelope_levels)?;
    read(ctx, &scope).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Attrs {
        x: Option<i32>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Outer {
        attrs: Option<Attrs>,
        y: Option<i32>,
        tags: Option<Vec<String>>,
    }

    #[derive(Debug)]
    struct AttrsUnmarshaller;

    #[derive(Debug)]
    struct OuterUnmarshaller;

    static ATTRS: AttrsUnmarshaller = AttrsUnmarshaller;
    static TAGS: ListUnmarshaller<StringUnmarshaller> = ListUnmarshaller::new(StringUnmarshaller::new());

    fn read_attrs<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<Attrs, UnmarshallError> {
        let mut attrs = Attrs::default();
        while scope.next(ctx)? {
            if ctx.test_expression("X", scope.target_depth()) {
                attrs.x = ctx.read_member(&INT)?;
            }
        }
        Ok(attrs)
    }

    fn read_outer<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<Outer, UnmarshallError> {
        let mut outer = Outer::default();
        while scope.next(ctx)? {
            if ctx.test_expression("Attrs", scope.target_depth()) {
                outer.attrs = ctx.read_member(&ATTRS)?;
                continue;
            }
            if ctx.test_expression("Y", scope.target_depth()) {
                outer.y = ctx.read_member(&INT)?;
                continue;
            }
            if ctx.test_expression("Tags", scope.target_depth()) {
                outer.tags = ctx.read_member(&TAGS)?;
            }
        }
        Ok(outer)
    }

    impl Unmarshaller<Attrs> for AttrsUnmarshaller {
        fn unmarshall_xml(
            &self,
            ctx: &mut XmlUnmarshallerContext<'_>,
        ) -> Result<Option<Attrs>, UnmarshallError> {
            read_structure(ctx, StructureScope::STRUCTURE_LEVELS, read_attrs)
        }

        fn unmarshall_json(
            &self,
            ctx: &mut JsonUnmarshallerContext,
        ) -> Result<Option<Attrs>, UnmarshallError> {
            read_structure(ctx, StructureScope::STRUCTURE_LEVELS, read_attrs)
        }
    }

    impl Unmarshaller<Outer> for OuterUnmarshaller {
        fn unmarshall_xml(
            &self,
            ctx: &mut XmlUnmarshallerContext<'_>,
        ) -> Result<Option<Outer>, UnmarshallError> {
            read_structure(ctx, StructureScope::STRUCTURE_LEVELS, read_outer)
        }

        fn unmarshall_json(
            &self,
            ctx: &mut JsonUnmarshallerContext,
        ) -> Result<Option<Outer>, UnmarshallError> {
            read_structure(ctx, StructureScope::STRUCTURE_LEVELS, read_outer)
        }
    }

    #[test]
    fn test_should_keep_nested_members_inside_their_structure() {
        let xml = b"<Result><Attrs><X>1</X><Y>99</Y></Attrs><Y>2</Y></Result>";
        let mut ctx = XmlUnmarshallerContext::new(xml);
        let outer = ctx.unmarshall(&OuterUnmarshaller).unwrap().unwrap();
        assert_eq!(outer.attrs, Some(Attrs { x: Some(1) }));
        assert_eq!(outer.y, Some(2));
    }

    #[test]
    fn test_should_read_same_shape_from_json() {
        let json = br#"{"Attrs":{"X":1,"Y":99},"Y":2,"Tags":["a","b"]}"#;
        let mut ctx = JsonUnmarshallerContext::new(json).unwrap();
        let outer = ctx.unmarshall(&OuterUnmarshaller).unwrap().unwrap();
        assert_eq!(
            outer,
            Outer {
                attrs: Some(Attrs { x: Some(1) }),
                y: Some(2),
                tags: Some(vec!["a".to_owned(), "b".to_owned()]),
            }
        );
    }

    #[test]
    fn test_should_yield_none_for_null_structure() {
        let json = br#"{"Attrs":null,"Y":3}"#;
        let mut ctx = JsonUnmarshallerContext::new(json).unwrap();
        let outer = ctx.unmarshall(&OuterUnmarshaller).unwrap().unwrap();
        assert_eq!(outer.attrs, None);
        assert_eq!(outer.y, Some(3));
    }

    #[test]
    fn test_should_reject_scalar_where_structure_expected() {
        let json = br#"{"Attrs":5}"#;
        let mut ctx = JsonUnmarshallerContext::new(json).unwrap();
        let err = ctx.unmarshall(&OuterUnmarshaller).unwrap_err();
        match err {
            UnmarshallError::Deserialization { field, .. } => assert_eq!(field, "Attrs"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_should_report_unsupported_format() {
        #[derive(Debug)]
        struct XmlOnly;
        impl Unmarshaller<String> for XmlOnly {}

        let mut ctx = JsonUnmarshallerContext::new(b"{}").unwrap();
        let err = ctx.unmarshall(&XmlOnly).unwrap_err();
        assert!(matches!(
            err,
            UnmarshallError::UnsupportedFormat {
                format: WireFormat::Json,
                ..
            }
        ));
    }
}
