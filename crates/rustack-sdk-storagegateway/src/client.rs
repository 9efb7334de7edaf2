//! Storage Gateway clients.

use std::sync::Arc;

use rustack_sdk_auth::ProvideCredentials;
use rustack_sdk_core::{ClientConfig, Response};
use rustack_sdk_runtime::{
    BlockingRuntime, BuildError, CancellationToken, ServiceClient, ServiceMetadata, TransportError,
};

use crate::error::StorageGatewayError;
use crate::input::{CreateSnapshotInput, DescribeGatewayInformationInput, ListVolumesInput};
use crate::operations;
use crate::output::{CreateSnapshotOutput, DescribeGatewayInformationOutput, ListVolumesOutput};

/// Identity of the Storage Gateway service.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "StorageGateway",
    signing_name: "storagegateway",
    endpoint_prefix: "storagegateway",
};

/// Asynchronous Storage Gateway client.
#[derive(Debug, Clone)]
pub struct StorageGatewayClient {
    inner: ServiceClient,
}

impl StorageGatewayClient {
    /// Create a client with the default SigV4 signer and HTTP transport.
    pub fn new(
        config: ClientConfig,
        credentials: Arc<dyn ProvideCredentials>,
    ) -> Result<Self, BuildError> {
        let inner = ServiceClient::builder(METADATA, credentials)
            .config(config)
            .build()?;
        Ok(Self { inner })
    }

    /// Wrap a client built from [`METADATA`] with a custom signer or transport.
    #[must_use]
    pub fn from_service_client(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Take an EBS snapshot of a volume.
    pub async fn create_snapshot(
        &self,
        input: &CreateSnapshotInput,
    ) -> Result<Response<CreateSnapshotOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::CREATE_SNAPSHOT, None)
            .await
    }

    /// [`create_snapshot`](Self::create_snapshot), abandoned when `cancel`
    /// fires.
    pub async fn create_snapshot_with_cancellation(
        &self,
        input: &CreateSnapshotInput,
        cancel: &CancellationToken,
    ) -> Result<Response<CreateSnapshotOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::CREATE_SNAPSHOT, Some(cancel))
            .await
    }

    /// List the volumes of a gateway.
    pub async fn list_volumes(
        &self,
        input: &ListVolumesInput,
    ) -> Result<Response<ListVolumesOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::LIST_VOLUMES, None)
            .await
    }

    /// [`list_volumes`](Self::list_volumes), abandoned when `cancel` fires.
    pub async fn list_volumes_with_cancellation(
        &self,
        input: &ListVolumesInput,
        cancel: &CancellationToken,
    ) -> Result<Response<ListVolumesOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::LIST_VOLUMES, Some(cancel))
            .await
    }

    /// Describe a gateway.
    pub async fn describe_gateway_information(
        &self,
        input: &DescribeGatewayInformationInput,
    ) -> Result<Response<DescribeGatewayInformationOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::DESCRIBE_GATEWAY_INFORMATION, None)
            .await
    }

    /// [`describe_gateway_information`](Self::describe_gateway_information),
    /// abandoned when `cancel` fires.
    pub async fn describe_gateway_information_with_cancellation(
        &self,
        input: &DescribeGatewayInformationInput,
        cancel: &CancellationToken,
    ) -> Result<Response<DescribeGatewayInformationOutput>, StorageGatewayError> {
        self.inner
            .invoke(input, &operations::DESCRIBE_GATEWAY_INFORMATION, Some(cancel))
            .await
    }
}

/// Blocking Storage Gateway client. Must not be used from inside an async
/// context.
#[derive(Debug)]
pub struct StorageGatewayBlockingClient {
    client: StorageGatewayClient,
    runtime: BlockingRuntime,
}

impl StorageGatewayBlockingClient {
    /// Wrap an asynchronous client.
    pub fn new(client: StorageGatewayClient) -> Result<Self, TransportError> {
        Ok(Self {
            client,
            runtime: BlockingRuntime::new()?,
        })
    }

    /// Take an EBS snapshot of a volume.
    pub fn create_snapshot(
        &self,
        input: &CreateSnapshotInput,
    ) -> Result<Response<CreateSnapshotOutput>, StorageGatewayError> {
        self.runtime.block_on(self.client.create_snapshot(input))
    }

    /// List the volumes of a gateway.
    pub fn list_volumes(
        &self,
        input: &ListVolumesInput,
    ) -> Result<Response<ListVolumesOutput>, StorageGatewayError> {
        self.runtime.block_on(self.client.list_volumes(input))
    }

    /// Describe a gateway.
    pub fn describe_gateway_information(
        &self,
        input: &DescribeGatewayInformationInput,
    ) -> Result<Response<DescribeGatewayInformationOutput>, StorageGatewayError> {
        self.runtime
            .block_on(self.client.describe_gateway_information(input))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, StatusCode};
    use rustack_sdk_auth::StaticCredentialsProvider;
    use rustack_sdk_core::{Credentials, HttpResponse};
    use rustack_sdk_runtime::Transport;

    use super::*;
    use crate::error::StorageGatewayFault;

    #[derive(Debug)]
    struct CannedTransport {
        status: StatusCode,
        headers: HeaderMap,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: http::Request<Bytes>) -> Result<HttpResponse, TransportError> {
            assert!(request.headers().contains_key("authorization"));
            Ok(HttpResponse::new(self.status, self.headers.clone(), self.body))
        }
    }

    fn client(status: StatusCode, headers: HeaderMap, body: &'static str) -> StorageGatewayClient {
        let credentials = StaticCredentialsProvider::new(Credentials::new("AKID", "SECRET"));
        let inner = ServiceClient::builder(METADATA, Arc::new(credentials))
            .config(ClientConfig::default().with_endpoint_url("http://localhost:4566"))
            .transport(Arc::new(CannedTransport {
                status,
                headers,
                body,
            }))
            .build()
            .unwrap();
        StorageGatewayClient::from_service_client(inner)
    }

    fn snapshot_input() -> CreateSnapshotInput {
        CreateSnapshotInput::default()
            .with_volume_arn("arn:gw/volume/vol-1")
            .with_snapshot_description("nightly")
    }

    #[tokio::test]
    async fn test_should_create_snapshot() {
        let client = client(
            StatusCode::OK,
            HeaderMap::new(),
            r#"{"VolumeARN":"arn:gw/volume/vol-1","SnapshotId":"snap-78e22663"}"#,
        );

        let response = client.create_snapshot(&snapshot_input()).await.unwrap();

        assert_eq!(response.result().snapshot_id(), "snap-78e22663");
        assert_eq!(response.result().volume_arn(), "arn:gw/volume/vol-1");
    }

    #[tokio::test]
    async fn test_should_map_fault_from_type_field() {
        let client = client(
            StatusCode::BAD_REQUEST,
            HeaderMap::new(),
            r#"{"__type":"com.amazonaws.storagegateway#InvalidGatewayRequestException","message":"The specified volume was not found."}"#,
        );

        let err = client.create_snapshot(&snapshot_input()).await.unwrap_err();

        assert!(err.is_fault(StorageGatewayFault::InvalidGatewayRequestException));
        assert_eq!(
            err.as_service_error().unwrap().message(),
            "The specified volume was not found."
        );
    }

    #[tokio::test]
    async fn test_should_prefer_error_type_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("InternalServerError:http://internal.amazon.com/"),
        );
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-5"));
        let client = client(StatusCode::INTERNAL_SERVER_ERROR, headers, "{}");

        let err = client
            .list_volumes(&ListVolumesInput::default())
            .await
            .unwrap_err();

        let fault = err.as_service_error().unwrap();
        assert!(fault.is(StorageGatewayFault::InternalServerError));
        assert_eq!(fault.request_id(), Some("req-5"));
    }

    #[test]
    fn test_should_run_blocking_client() {
        let client = client(
            StatusCode::OK,
            HeaderMap::new(),
            r#"{"GatewayARN":"arn:gw","GatewayNetworkInterfaces":[{"Ipv4Address":"10.0.0.1"}]}"#,
        );
        let blocking = StorageGatewayBlockingClient::new(client).unwrap();

        let response = blocking
            .describe_gateway_information(
                &DescribeGatewayInformationInput::default().with_gateway_arn("arn:gw"),
            )
            .unwrap();

        assert_eq!(
            response.result().gateway_network_interfaces()[0].ipv4_address(),
            "10.0.0.1"
        );
    }
}
