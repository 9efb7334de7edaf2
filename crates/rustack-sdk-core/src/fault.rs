//! Service faults.
//!
//! Every service error response is first reduced to a format-neutral
//! [`ErrorEnvelope`]. The envelope's code is then looked up in the service's
//! closed fault table (a [`FaultCode`] enum). A hit yields a typed
//! [`ErrorCode::Known`] fault; a miss yields the service's generic fault
//! ([`ErrorCode::Unhandled`]) carrying the same fields. Mapping never fails.

use std::fmt;

use http::StatusCode;

/// Who is to blame for a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaultCategory {
    /// The request was invalid (`Sender`, 4xx).
    Client,
    /// The service failed (`Receiver`, 5xx).
    Server,
    /// Neither the body nor the status tells.
    #[default]
    Unknown,
}

impl FaultCategory {
    /// Derive the category from the envelope's `Type` field, falling back to
    /// the HTTP status.
    #[must_use]
    pub fn classify(error_type: Option<&str>, status: StatusCode) -> Self {
        match error_type {
            Some(t) if t.eq_ignore_ascii_case("sender") || t.eq_ignore_ascii_case("client") => {
                Self::Client
            }
            Some(t) if t.eq_ignore_ascii_case("receiver") || t.eq_ignore_ascii_case("server") => {
                Self::Server
            }
            _ if status.is_client_error() => Self::Client,
            _ if status.is_server_error() => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-neutral error body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Error code, e.g. `CacheClusterNotFound`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Raw `Type` field (`Sender` / `Receiver`) when present.
    pub error_type: Option<String>,
    /// Request id.
    pub request_id: Option<String>,
}

/// A closed per-service table of known fault codes.
///
/// Implementations are generated with [`fault_codes!`](crate::fault_codes).
pub trait FaultCode: fmt::Debug + Copy + Eq + Send + Sync + 'static {
    /// Service name, used to name the generic fault.
    const SERVICE: &'static str;
    /// Every known fault.
    const ALL: &'static [Self];

    /// Code as it appears on the wire.
    fn as_str(self) -> &'static str;

    /// Name of the typed fault, e.g. `CacheClusterNotFoundException`.
    fn name(self) -> &'static str;

    /// Exact-match lookup of a wire code. Codes are unique, so the scan
    /// order does not matter.
    #[must_use]
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

/// Either a known typed fault or the service's generic fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode<C> {
    /// The code matched an entry of the fault table.
    Known(C),
    /// The code is not in the table.
    Unhandled,
}

/// A typed service fault.
pub struct ServiceError<C: FaultCode> {
    code: ErrorCode<C>,
    raw_code: String,
    message: String,
    error_type: Option<String>,
    request_id: Option<String>,
    status: StatusCode,
    category: FaultCategory,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl<C: FaultCode> ServiceError<C> {
    /// Map an error envelope onto the service's fault table.
    #[must_use]
    pub fn from_envelope(envelope: ErrorEnvelope, status: StatusCode) -> Self {
        let code = C::from_code(&envelope.code).map_or(ErrorCode::Unhandled, ErrorCode::Known);
        let category = FaultCategory::classify(envelope.error_type.as_deref(), status);
        tracing::debug!(
            service = C::SERVICE,
            code = %envelope.code,
            known = matches!(code, ErrorCode::Known(_)),
            status = status.as_u16(),
            %category,
            "mapped service fault"
        );
        Self {
            code,
            raw_code: envelope.code,
            message: envelope.message,
            error_type: envelope.error_type,
            request_id: envelope.request_id,
            status,
            category,
            source: None,
        }
    }

    /// Generic fault for an error response whose body could not be read.
    #[must_use]
    pub fn unparsable(
        status: StatusCode,
        request_id: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code: ErrorCode::Unhandled,
            raw_code: String::new(),
            message: format!(
                "error response with status {status} could not be parsed: {source}"
            ),
            error_type: None,
            request_id,
            status,
            category: FaultCategory::classify(None, status),
            source: Some(Box::new(source)),
        }
    }

    /// Attach an underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Typed code.
    #[must_use]
    pub fn code(&self) -> ErrorCode<C> {
        self.code
    }

    /// Whether this is the given known fault.
    #[must_use]
    pub fn is(&self, code: C) -> bool {
        self.code == ErrorCode::Known(code)
    }

    /// Code exactly as the service sent it.
    #[must_use]
    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }

    /// Service message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw `Type` field.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    /// Request id.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Client or server fault.
    #[must_use]
    pub fn category(&self) -> FaultCategory {
        self.category
    }

    /// Name of the fault type: the known fault's name, or
    /// `<Service>Exception` for the generic fault.
    #[must_use]
    pub fn fault_name(&self) -> String {
        match self.code {
            ErrorCode::Known(code) => code.name().to_owned(),
            ErrorCode::Unhandled => format!("{}Exception", C::SERVICE),
        }
    }
}

impl<C: FaultCode> fmt::Debug for ServiceError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceError")
            .field("code", &self.code)
            .field("raw_code", &self.raw_code)
            .field("message", &self.message)
            .field("error_type", &self.error_type)
            .field("request_id", &self.request_id)
            .field("status", &self.status)
            .field("category", &self.category)
            .field("source", &self.source)
            .finish()
    }
}

impl<C: FaultCode> fmt::Display for ServiceError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.fault_name(), self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " (request id: {id})")?;
        }
        Ok(())
    }
}

impl<C: FaultCode> std::error::Error for ServiceError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Generate a per-service fault table.
///
/// ```
/// rustack_sdk_core::fault_codes! {
///     /// Known faults of the example service.
///     pub enum ExampleErrorCode for "Example" {
///         /// The thing was not found.
///         ThingNotFoundException => "ThingNotFound",
///     }
/// }
///
/// use rustack_sdk_core::FaultCode;
/// assert_eq!(ExampleErrorCode::from_code("ThingNotFound"), Some(ExampleErrorCode::ThingNotFoundException));
/// ```
#[macro_export]
macro_rules! fault_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $service:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $crate::fault::FaultCode for $name {
            const SERVICE: &'static str = $service;
            const ALL: &'static [Self] = &[ $( Self::$variant, )* ];

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::fault::FaultCode::name(*self))
            }
        }
    };
}
