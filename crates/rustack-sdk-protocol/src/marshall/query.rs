//! Query protocol marshaller (`application/x-www-form-urlencoded`).

use std::fmt;
use std::marker::PhantomData;

use rustack_sdk_core::request::FORM_CONTENT_TYPE;
use rustack_sdk_core::shape::{Structure, WireValue};
use rustack_sdk_core::{HttpMethod, Parameters, TimestampFormat, WireRequest};
use tracing::trace;

use super::{Marshaller, set_fields};
use crate::error::MarshallError;

/// How a service flattens lists into query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListEncoding {
    /// `Name.member.N`, or `Name.<LocationName>.N` when the field names its members.
    #[default]
    Member,
    /// `Name.N`, with the field's location name replacing `Name` when present.
    Flat,
}

/// Marshals a request into query parameters for one operation.
pub struct QueryMarshaller<I> {
    service_name: &'static str,
    action: &'static str,
    version: &'static str,
    list_encoding: ListEncoding,
    _input: PhantomData<fn(&I)>,
}

impl<I> QueryMarshaller<I> {
    /// Create a marshaller for `action` of API `version`.
    #[must_use]
    pub const fn new(service_name: &'static str, action: &'static str, version: &'static str) -> Self {
        Self {
            service_name,
            action,
            version,
            list_encoding: ListEncoding::Member,
            _input: PhantomData,
        }
    }

    /// Use a different list encoding.
    #[must_use]
    pub const fn with_list_encoding(mut self, list_encoding: ListEncoding) -> Self {
        self.list_encoding = list_encoding;
        self
    }

    /// Operation name.
    #[must_use]
    pub fn action(&self) -> &'static str {
        self.action
    }

    fn write_structure(
        &self,
        params: &mut Parameters,
        prefix: &str,
        structure: &dyn Structure,
    ) -> Result<(), MarshallError> {
        for (field, value) in set_fields(structure)? {
            match value {
                WireValue::List(items) => {
                    let base = match self.list_encoding {
                        ListEncoding::Member => format!(
                            "{}.{}",
                            join(prefix, field.name),
                            field.location_name.unwrap_or("member")
                        ),
                        ListEncoding::Flat => join(prefix, field.location_name.unwrap_or(field.name)),
                    };
                    for (index, item) in items.into_iter().enumerate() {
                        self.write_value(params, &format!("{base}.{}", index + 1), item)?;
                    }
                }
                value => self.write_value(params, &join(prefix, field.name), value)?,
            }
        }
        Ok(())
    }

    fn write_value(
        &self,
        params: &mut Parameters,
        name: &str,
        value: WireValue<'_>,
    ) -> Result<(), MarshallError> {
        match value {
            WireValue::Primitive(p) => params.insert(name, p.to_wire_string(TimestampFormat::Iso8601)),
            WireValue::Structure(s) => self.write_structure(params, name, s)?,
            WireValue::List(items) => {
                let base = match self.list_encoding {
                    ListEncoding::Member => format!("{name}.member"),
                    ListEncoding::Flat => name.to_owned(),
                };
                for (index, item) in items.into_iter().enumerate() {
                    self.write_value(params, &format!("{base}.{}", index + 1), item)?;
                }
            }
            WireValue::Map(entries) => {
                for (index, (key, value)) in entries.into_iter().enumerate() {
                    let entry = format!("{name}.entry.{}", index + 1);
                    params.insert(format!("{entry}.key"), key);
                    self.write_value(params, &format!("{entry}.value"), value)?;
                }
            }
        }
        Ok(())
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

impl<I> fmt::Debug for QueryMarshaller<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryMarshaller")
            .field("service_name", &self.service_name)
            .field("action", &self.action)
            .field("version", &self.version)
            .field("list_encoding", &self.list_encoding)
            .finish()
    }
}

impl<I: Structure> Marshaller<I> for QueryMarshaller<I> {
    fn marshall(&self, input: &I) -> Result<WireRequest, MarshallError> {
        let mut request = WireRequest::new(self.service_name);
        request.set_method(HttpMethod::Post);
        request.set_resource_path("/");
        request.set_header("content-type", FORM_CONTENT_TYPE)?;

        let params = request.parameters_mut();
        params.insert("Action", self.action);
        params.insert("Version", self.version);
        self.write_structure(params, "", input)?;

        trace!(
            service = self.service_name,
            action = self.action,
            parameters = request.parameters().len(),
            "marshalled query request"
        );
        Ok(request)
    }
}
