//! Response envelopes.
//!
//! A [`ResponseUnmarshaller`] owns everything around the typed result:
//! locating it inside the protocol's envelope, collecting response metadata
//! and reading the error envelope of a failed call.

use rustack_sdk_core::response::REQUEST_ID_HEADER;
use rustack_sdk_core::{ErrorEnvelope, HttpResponse, Response, ResponseMetadata};
use tracing::trace;

use super::fault::{parse_json_error, parse_xml_error};
use super::{STRING, Unmarshaller, read_structure};
use crate::context::{
    JsonUnmarshallerContext, StructureScope, UnmarshallerContext, XmlUnmarshallerContext,
};
use crate::error::UnmarshallError;

/// Decodes an HTTP response of one protocol into a typed result.
pub trait ResponseUnmarshaller<O>: Send + Sync {
    /// Decode a successful response.
    fn unmarshall(&self, response: &HttpResponse) -> Result<Response<O>, UnmarshallError>;

    /// Read the error envelope of a failed response.
    fn unmarshall_error(&self, response: &HttpResponse) -> Result<ErrorEnvelope, UnmarshallError>;
}

/// Reads the `<ResponseMetadata>` element of a query response.
///
/// `RequestId` is picked out; every other child is kept by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseMetadataUnmarshaller;

impl Unmarshaller<ResponseMetadata> for ResponseMetadataUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<ResponseMetadata>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, |ctx, scope| {
            let mut metadata = ResponseMetadata::default();
            while scope.next(ctx)? {
                if ctx.current_depth() != scope.target_depth() || !ctx.is_start_element() {
                    continue;
                }
                let name = ctx.current_name().unwrap_or_default().to_owned();
                let Some(value) = ctx.read_member(&STRING)? else {
                    continue;
                };
                if name == "RequestId" {
                    metadata.request_id = Some(value);
                } else {
                    metadata.metadata.insert(name, value);
                }
            }
            Ok(metadata)
        })
    }
}

/// Query protocol envelope:
/// `<OpResponse><OpResult>...</OpResult><ResponseMetadata/></OpResponse>`.
///
/// An operation without output has no result element and yields
/// `O::default()`.
#[derive(Debug, Clone, Copy)]
pub struct QueryResponseUnmarshaller<U> {
    result_element: &'static str,
    result: U,
}

impl<U> QueryResponseUnmarshaller<U> {
    /// Read the result from the `result_element` child of the root.
    #[must_use]
    pub const fn new(result_element: &'static str, result: U) -> Self {
        Self {
            result_element,
            result,
        }
    }
}

impl<O, U> ResponseUnmarshaller<O> for QueryResponseUnmarshaller<U>
where
    O: Default,
    U: Unmarshaller<O>,
{
    fn unmarshall(&self, response: &HttpResponse) -> Result<Response<O>, UnmarshallError> {
        let mut ctx = XmlUnmarshallerContext::new(&response.body);
        let mut result = None;
        let mut metadata = ResponseMetadata::default();

        if ctx.read()? {
            let root = ctx.current_depth();
            while ctx.read_at_depth(root)? {
                if ctx.test_expression(self.result_element, root + 1) {
                    result = ctx.unmarshall(&self.result)?;
                } else if ctx.test_expression("ResponseMetadata", root + 1) {
                    metadata = ResponseMetadataUnmarshaller
                        .unmarshall_xml(&mut ctx)?
                        .unwrap_or_default();
                }
            }
        }

        if metadata.request_id.is_none() {
            metadata.request_id = response.header(REQUEST_ID_HEADER).map(str::to_owned);
        }
        trace!(
            result = self.result_element,
            request_id = metadata.request_id(),
            "unmarshalled query response"
        );
        Ok(Response::new(result.unwrap_or_default(), metadata).with_status(response.status))
    }

    fn unmarshall_error(&self, response: &HttpResponse) -> Result<ErrorEnvelope, UnmarshallError> {
        parse_xml_error(response)
    }
}

/// JSON protocol envelope: the body is the result object itself and the
/// request id travels in the `x-amzn-RequestId` header.
#[derive(Debug, Clone, Copy)]
pub struct JsonResponseUnmarshaller<U> {
    result: U,
}

impl<U> JsonResponseUnmarshaller<U> {
    /// Read the whole body with `result`.
    #[must_use]
    pub const fn new(result: U) -> Self {
        Self { result }
    }
}

impl<O, U> ResponseUnmarshaller<O> for JsonResponseUnmarshaller<U>
where
    O: Default,
    U: Unmarshaller<O>,
{
    fn unmarshall(&self, response: &HttpResponse) -> Result<Response<O>, UnmarshallError> {
        let mut ctx = JsonUnmarshallerContext::new(&response.body)?;
        let result = if ctx.is_empty() {
            None
        } else {
            ctx.unmarshall(&self.result)?
        };
        let metadata = ResponseMetadata {
            request_id: response.header(REQUEST_ID_HEADER).map(str::to_owned),
            ..ResponseMetadata::default()
        };
        trace!(request_id = metadata.request_id(), "unmarshalled JSON response");
        Ok(Response::new(result.unwrap_or_default(), metadata).with_status(response.status))
    }

    fn unmarshall_error(&self, response: &HttpResponse) -> Result<ErrorEnvelope, UnmarshallError> {
        parse_json_error(response)
    }
}
