//! Static shape descriptors.
//!
//! Each generated data object implements [`Shape`] with a `const` table of
//! [`FieldDescriptor`]s in declaration order. Marshallers walk that table
//! instead of inspecting types at runtime: a descriptor's getter returns
//! `None` for an unset field and a [`WireValue`] otherwise.

use std::collections::HashMap;
use std::fmt;

use crate::value::{Primitive, PrimitiveValue};

/// A field value ready to be written to the wire.
#[derive(Debug, Clone)]
pub enum WireValue<'a> {
    /// A scalar.
    Primitive(Primitive),
    /// An ordered list.
    List(Vec<WireValue<'a>>),
    /// String-keyed entries, ordered by key.
    Map(Vec<(String, WireValue<'a>)>),
    /// A nested structure.
    Structure(&'a dyn Structure),
}

/// Describes one field of a shape.
pub struct FieldDescriptor<S: 'static> {
    /// Wire name of the field.
    pub name: &'static str,
    /// Name used for flattened list members when it differs from `name`.
    pub location_name: Option<&'static str>,
    /// Whether the protocol requires the field to be present.
    pub required: bool,
    /// Accessor returning the field's wire value when it is set.
    pub get: for<'a> fn(&'a S) -> Option<WireValue<'a>>,
}

impl<S: 'static> FieldDescriptor<S> {
    /// Describe an optional field.
    #[must_use]
    pub const fn new(name: &'static str, get: for<'a> fn(&'a S) -> Option<WireValue<'a>>) -> Self {
        Self {
            name,
            location_name: None,
            required: false,
            get,
        }
    }

    /// Mark the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the member name used for flattened lists.
    #[must_use]
    pub const fn location_name(mut self, name: &'static str) -> Self {
        self.location_name = Some(name);
        self
    }
}

impl<S> fmt::Debug for FieldDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("location_name", &self.location_name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// A data object with a static field table.
pub trait Shape: fmt::Debug + Send + Sync + Sized + 'static {
    /// Name of the shape, used in diagnostics.
    const SHAPE_NAME: &'static str;
    /// Fields in declaration order.
    const FIELDS: &'static [FieldDescriptor<Self>];
}

/// One field of a structure paired with its current value.
#[derive(Debug)]
pub struct FieldValue<'a> {
    /// Wire name of the field.
    pub name: &'static str,
    /// Name used for flattened list members.
    pub location_name: Option<&'static str>,
    /// Whether the protocol requires the field to be present.
    pub required: bool,
    /// The value, or `None` when the field is not set.
    pub value: Option<WireValue<'a>>,
}

/// Object-safe view of a [`Shape`], used for nested structures.
pub trait Structure: fmt::Debug + Send + Sync {
    /// Name of the shape.
    fn shape_name(&self) -> &'static str;

    /// Current field values in declaration order.
    fn field_values(&self) -> Vec<FieldValue<'_>>;
}

impl<S: Shape> Structure for S {
    fn shape_name(&self) -> &'static str {
        S::SHAPE_NAME
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        S::FIELDS
            .iter()
            .map(|field| FieldValue {
                name: field.name,
                location_name: field.location_name,
                required: field.required,
                value: (field.get)(self),
            })
            .collect()
    }
}

/// Wire value of an optional scalar.
#[must_use]
pub fn scalar<T: PrimitiveValue>(value: Option<&T>) -> Option<WireValue<'_>> {
    value.map(|v| WireValue::Primitive(v.to_primitive()))
}

/// Wire value of a scalar list; `None` when empty.
#[must_use]
pub fn scalar_list<T: PrimitiveValue>(values: &[T]) -> Option<WireValue<'_>> {
    if values.is_empty() {
        return None;
    }
    Some(WireValue::List(
        values
            .iter()
            .map(|v| WireValue::Primitive(v.to_primitive()))
            .collect(),
    ))
}

/// Wire value of an optional nested structure.
#[must_use]
pub fn structure<T: Structure>(value: Option<&T>) -> Option<WireValue<'_>> {
    value.map(|v| WireValue::Structure(v))
}

/// Wire value of a structure list; `None` when empty.
#[must_use]
pub fn structure_list<T: Structure>(values: &[T]) -> Option<WireValue<'_>> {
    if values.is_empty() {
        return None;
    }
    Some(WireValue::List(
        values
            .iter()
            .map(|v| WireValue::Structure(v as &dyn Structure))
            .collect(),
    ))
}

/// Wire value of a string-keyed scalar map; `None` when empty.
#[must_use]
pub fn scalar_map<V: PrimitiveValue>(values: &HashMap<String, V>) -> Option<WireValue<'_>> {
    if values.is_empty() {
        return None;
    }
    let mut entries: Vec<(String, WireValue<'_>)> = values
        .iter()
        .map(|(k, v)| (k.clone(), WireValue::Primitive(v.to_primitive())))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Some(WireValue::Map(entries))
}
