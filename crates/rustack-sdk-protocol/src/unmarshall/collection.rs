//! List and map unmarshallers.

use std::collections::HashMap;

use super::{STRING, Unmarshaller};
use crate::context::{JsonUnmarshallerContext, UnmarshallerContext, XmlUnmarshallerContext};
use crate::error::UnmarshallError;

/// Reads a list whose elements are decoded by `U`.
///
/// In XML the list is a wrapper element with one child per item, named
/// `member` unless the shape says otherwise. In JSON it is an array.
/// Items that decode to nothing (empty text, `null`) are dropped.
#[derive(Debug, Clone, Copy)]
pub struct ListUnmarshaller<U> {
    element: U,
    member_name: &'static str,
}

impl<U> ListUnmarshaller<U> {
    /// A list of `member` elements.
    #[must_use]
    pub const fn new(element: U) -> Self {
        Self {
            element,
            member_name: "member",
        }
    }

    /// Use a different XML item element name, e.g. `CacheNode`.
    #[must_use]
    pub const fn with_member_name(mut self, member_name: &'static str) -> Self {
        self.member_name = member_name;
        self
    }
}

impl<T, U: Unmarshaller<T>> Unmarshaller<Vec<T>> for ListUnmarshaller<U> {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<Vec<T>>, UnmarshallError> {
        let depth = ctx.current_depth();
        let mut items = Vec::new();
        while ctx.read_at_depth(depth)? {
            if ctx.test_expression(self.member_name, depth + 1) {
                if let Some(item) = self.element.unmarshall_xml(ctx)? {
                    items.push(item);
                }
            }
        }
        Ok(Some(items))
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<Vec<T>>, UnmarshallError> {
        if ctx.is_null() {
            return Ok(None);
        }
        if !ctx.is_array_start() {
            return Err(ctx.deserialization_error(std::any::type_name::<Vec<T>>(), "expected a JSON array"));
        }
        let depth = ctx.current_depth();
        let mut items = Vec::new();
        while ctx.read_at_depth(depth)? {
            if let Some(item) = self.element.unmarshall_json(ctx)? {
                items.push(item);
            }
        }
        Ok(Some(items))
    }
}

/// Reads a string-keyed map whose values are decoded by `V`.
///
/// In XML each pair is an `entry` element holding `key` and `value`
/// children. In JSON the map is an object.
#[derive(Debug, Clone, Copy)]
pub struct MapUnmarshaller<V> {
    value: V,
    entry_name: &'static str,
    key_name: &'static str,
    value_name: &'static str,
}

impl<V> MapUnmarshaller<V> {
    /// A map using the default `entry`/`key`/`value` element names.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            entry_name: "entry",
            key_name: "key",
            value_name: "value",
        }
    }

    /// Override the XML element names.
    #[must_use]
    pub const fn with_names(
        mut self,
        entry_name: &'static str,
        key_name: &'static str,
        value_name: &'static str,
    ) -> Self {
        self.entry_name = entry_name;
        self.key_name = key_name;
        self.value_name = value_name;
        self
    }
}

impl<T, V: Unmarshaller<T>> Unmarshaller<HashMap<String, T>> for MapUnmarshaller<V> {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<HashMap<String, T>>, UnmarshallError> {
        let depth = ctx.current_depth();
        let mut map = HashMap::new();
        while ctx.read_at_depth(depth)? {
            if !ctx.test_expression(self.entry_name, depth + 1) {
                continue;
            }
            let (mut key, mut value) = (None, None);
            while ctx.read_at_depth(depth + 1)? {
                if ctx.test_expression(self.key_name, depth + 2) {
                    key = STRING.unmarshall_xml(ctx)?;
                } else if ctx.test_expression(self.value_name, depth + 2) {
                    value = self.value.unmarshall_xml(ctx)?;
                }
            }
            if let (Some(k), Some(v)) = (key, value) {
                map.insert(k, v);
            }
        }
        Ok(Some(map))
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<HashMap<String, T>>, UnmarshallError> {
        if ctx.is_null() {
            return Ok(None);
        }
        if !ctx.is_object_start() {
            return Err(ctx.deserialization_error(
                std::any::type_name::<HashMap<String, T>>(),
                "expected a JSON object",
            ));
        }
        let depth = ctx.current_depth();
        let mut map = HashMap::new();
        while ctx.read_at_depth(depth)? {
            let Some(key) = ctx.current_property_name().map(str::to_owned) else {
                continue;
            };
            if let Some(value) = ctx.read_member(&self.value)? {
                map.insert(key, value);
            }
        }
        Ok(Some(map))
    }
}
