//! Storage Gateway faults.

use rustack_sdk_runtime::SdkError;

rustack_sdk_core::fault_codes! {
    /// Error codes Storage Gateway returns in `__type` or `x-amzn-ErrorType`.
    #[non_exhaustive]
    pub enum StorageGatewayFault for "StorageGateway" {
        /// The request was malformed or named a missing resource.
        InvalidGatewayRequestException => "InvalidGatewayRequestException",
        /// The gateway failed internally.
        InternalServerError => "InternalServerError",
        /// The gateway is not connected to the service.
        ServiceUnavailableError => "ServiceUnavailableError",
    }
}

/// Error returned by every Storage Gateway operation.
pub type StorageGatewayError = SdkError<StorageGatewayFault>;
