//! Error envelope parsing and fault mapping.

use rustack_sdk_core::response::REQUEST_ID_HEADER;
use rustack_sdk_core::{ErrorEnvelope, FaultCode, HttpResponse, ServiceError};
use serde_json::Value;
use tracing::warn;

use super::ResponseUnmarshaller;
use crate::context::{UnmarshallerContext, XmlUnmarshallerContext};
use crate::error::UnmarshallError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Read an XML error body.
///
/// Both `<ErrorResponse><Error>...</Error></ErrorResponse>` and
/// `<Response><Errors><Error>...</Error></Errors></Response>` are accepted;
/// the first `Code`, `Message`, `Type` and `RequestId` found win.
pub fn parse_xml_error(response: &HttpResponse) -> Result<ErrorEnvelope, UnmarshallError> {
    let mut ctx = XmlUnmarshallerContext::new(&response.body);
    let mut envelope = ErrorEnvelope::default();
    let (mut code, mut message) = (None, None);

    while ctx.read()? {
        if !ctx.is_start_element() {
            continue;
        }
        let slot = match ctx.current_name() {
            Some("Code") => &mut code,
            Some("Message") => &mut message,
            Some("Type") => &mut envelope.error_type,
            Some("RequestId" | "RequestID") => &mut envelope.request_id,
            _ => continue,
        };
        let text = ctx.read_text()?;
        if slot.is_none() {
            *slot = text;
        }
    }

    envelope.code = code.filter(|c| !c.is_empty()).ok_or(UnmarshallError::MissingErrorCode)?;
    envelope.message = message.unwrap_or_default();
    if envelope.request_id.is_none() {
        envelope.request_id = response.header(REQUEST_ID_HEADER).map(str::to_owned);
    }
    Ok(envelope)
}

/// Read a JSON error body.
///
/// The code comes from the `x-amzn-ErrorType` header, then `__type`, then
/// `code`. Namespace prefixes (`aws.protocoltests#`) and suffixes after `:`
/// are stripped.
pub fn parse_json_error(response: &HttpResponse) -> Result<ErrorEnvelope, UnmarshallError> {
    let body: Value = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&response.body)?
    };
    let field = |names: &[&str]| {
        names
            .iter()
            .find_map(|n| body.get(*n).and_then(Value::as_str))
            .map(str::to_owned)
    };

    let raw_code = response
        .header(ERROR_TYPE_HEADER)
        .map(str::to_owned)
        .or_else(|| field(&["__type", "code"]))
        .ok_or(UnmarshallError::MissingErrorCode)?;
    let code = sanitize_error_code(&raw_code);
    if code.is_empty() {
        return Err(UnmarshallError::MissingErrorCode);
    }

    Ok(ErrorEnvelope {
        code: code.to_owned(),
        message: field(&["message", "Message", "errorMessage"]).unwrap_or_default(),
        error_type: None,
        request_id: response.header(REQUEST_ID_HEADER).map(str::to_owned),
    })
}

fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or_default();
    code.rsplit('#').next().unwrap_or_default().trim()
}

/// Turn a failed response into the service's typed fault.
///
/// An error body that cannot be read still yields the generic fault, with
/// the parse failure attached as its source.
pub fn unmarshall_fault<C, O>(
    unmarshaller: &(impl ResponseUnmarshaller<O> + ?Sized),
    response: &HttpResponse,
) -> ServiceError<C>
where
    C: FaultCode,
{
    match unmarshaller.unmarshall_error(response) {
        Ok(envelope) => ServiceError::from_envelope(envelope, response.status),
        Err(e) => {
            warn!(
                service = C::SERVICE,
                status = response.status.as_u16(),
                error = %e,
                "failed to parse error response"
            );
            ServiceError::unparsable(
                response.status,
                response.header(REQUEST_ID_HEADER).map(str::to_owned),
                e,
            )
        }
    }
}
