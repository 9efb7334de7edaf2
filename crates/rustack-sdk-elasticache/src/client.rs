//! ElastiCache clients.

use std::sync::Arc;

use rustack_sdk_auth::ProvideCredentials;
use rustack_sdk_core::{ClientConfig, Response};
use rustack_sdk_runtime::{
    BlockingRuntime, BuildError, CancellationToken, ServiceClient, ServiceMetadata, TransportError,
};

use crate::error::ElastiCacheError;
use crate::input::{
    CopySnapshotRequest, CreateCacheClusterRequest, DescribeCacheClustersRequest,
    RebootCacheClusterRequest,
};
use crate::operations;
use crate::output::{
    CopySnapshotResult, CreateCacheClusterResult, DescribeCacheClustersResult,
    RebootCacheClusterResult,
};

/// Identity of the ElastiCache service.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "ElastiCache",
    signing_name: "elasticache",
    endpoint_prefix: "elasticache",
};

/// Asynchronous ElastiCache client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ElastiCacheClient {
    inner: ServiceClient,
}

impl ElastiCacheClient {
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

    /// Wrap a client built with a custom signer or transport.
    ///
    /// The service client must have been built from [`METADATA`].
    #[must_use]
    pub fn from_service_client(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Underlying dispatcher.
    #[must_use]
    pub fn service_client(&self) -> &ServiceClient {
        &self.inner
    }

    /// Create a cache cluster.
    pub async fn create_cache_cluster(
        &self,
        input: &CreateCacheClusterRequest,
    ) -> Result<Response<CreateCacheClusterResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::CREATE_CACHE_CLUSTER, None)
            .await
    }

    /// [`create_cache_cluster`](Self::create_cache_cluster), abandoned when
    /// `cancel` fires.
    pub async fn create_cache_cluster_with_cancellation(
        &self,
        input: &CreateCacheClusterRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<CreateCacheClusterResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::CREATE_CACHE_CLUSTER, Some(cancel))
            .await
    }

    /// List cache clusters, one page at a time.
    pub async fn describe_cache_clusters(
        &self,
        input: &DescribeCacheClustersRequest,
    ) -> Result<Response<DescribeCacheClustersResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::DESCRIBE_CACHE_CLUSTERS, None)
            .await
    }

    /// [`describe_cache_clusters`](Self::describe_cache_clusters), abandoned
    /// when `cancel` fires.
    pub async fn describe_cache_clusters_with_cancellation(
        &self,
        input: &DescribeCacheClustersRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<DescribeCacheClustersResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::DESCRIBE_CACHE_CLUSTERS, Some(cancel))
            .await
    }

    /// Reboot some or all nodes of a cluster.
    pub async fn reboot_cache_cluster(
        &self,
        input: &RebootCacheClusterRequest,
    ) -> Result<Response<RebootCacheClusterResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::REBOOT_CACHE_CLUSTER, None)
            .await
    }

    /// [`reboot_cache_cluster`](Self::reboot_cache_cluster), abandoned when
    /// `cancel` fires.
    pub async fn reboot_cache_cluster_with_cancellation(
        &self,
        input: &RebootCacheClusterRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<RebootCacheClusterResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::REBOOT_CACHE_CLUSTER, Some(cancel))
            .await
    }

    /// Copy a snapshot.
    pub async fn copy_snapshot(
        &self,
        input: &CopySnapshotRequest,
    ) -> Result<Response<CopySnapshotResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::COPY_SNAPSHOT, None)
            .await
    }

    /// [`copy_snapshot`](Self::copy_snapshot), abandoned when `cancel` fires.
    pub async fn copy_snapshot_with_cancellation(
        &self,
        input: &CopySnapshotRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<CopySnapshotResult>, ElastiCacheError> {
        self.inner
            .invoke(input, &operations::COPY_SNAPSHOT, Some(cancel))
            .await
    }
}

/// Blocking ElastiCache client.
///
/// Each call drives the asynchronous client to completion on a private
/// single-threaded runtime, so it must not be used from inside an async
/// context.
#[derive(Debug)]
pub struct ElastiCacheBlockingClient {
    client: ElastiCacheClient,
    runtime: BlockingRuntime,
}

impl ElastiCacheBlockingClient {
    /// Wrap an asynchronous client.
    pub fn new(client: ElastiCacheClient) -> Result<Self, TransportError> {
        Ok(Self {
            client,
            runtime: BlockingRuntime::new()?,
        })
    }

    /// Asynchronous client behind this one.
    #[must_use]
    pub fn async_client(&self) -> &ElastiCacheClient {
        &self.client
    }

    /// Create a cache cluster.
    pub fn create_cache_cluster(
        &self,
        input: &CreateCacheClusterRequest,
    ) -> Result<Response<CreateCacheClusterResult>, ElastiCacheError> {
        self.runtime.block_on(self.client.create_cache_cluster(input))
    }

    /// List cache clusters, one page at a time.
    pub fn describe_cache_clusters(
        &self,
        input: &DescribeCacheClustersRequest,
    ) -> Result<Response<DescribeCacheClustersResult>, ElastiCacheError> {
        self.runtime.block_on(self.client.describe_cache_clusters(input))
    }

    /// Reboot some or all nodes of a cluster.
    pub fn reboot_cache_cluster(
        &self,
        input: &RebootCacheClusterRequest,
    ) -> Result<Response<RebootCacheClusterResult>, ElastiCacheError> {
        self.runtime.block_on(self.client.reboot_cache_cluster(input))
    }

    /// Copy a snapshot.
    pub fn copy_snapshot(
        &self,
        input: &CopySnapshotRequest,
    ) -> Result<Response<CopySnapshotResult>, ElastiCacheError> {
        self.runtime.block_on(self.client.copy_snapshot(input))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};
    use rustack_sdk_auth::StaticCredentialsProvider;
    use rustack_sdk_core::{Credentials, ErrorCode, HttpResponse};
    use rustack_sdk_runtime::Transport;

    use super::*;
    use crate::error::ElastiCacheFault;

    #[derive(Debug)]
    struct CannedTransport {
        status: StatusCode,
        body: &'static str,
        seen: Mutex<Vec<http::Request<Bytes>>>,
    }

    impl CannedTransport {
        fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn last_body(&self) -> String {
            let seen = self.seen.lock().unwrap();
            String::from_utf8(seen.last().unwrap().body().to_vec()).unwrap()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: http::Request<Bytes>) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse::new(self.status, HeaderMap::new(), self.body))
        }
    }

    fn client(transport: Arc<CannedTransport>) -> ElastiCacheClient {
        let credentials = StaticCredentialsProvider::new(Credentials::new("AKID", "SECRET"));
        let inner = ServiceClient::builder(METADATA, Arc::new(credentials))
            .config(ClientConfig::default().with_endpoint_url("http://localhost:4566"))
            .transport(transport)
            .build()
            .unwrap();
        ElastiCacheClient::from_service_client(inner)
    }

    const REBOOT_RESPONSE: &str = "<RebootCacheClusterResponse><RebootCacheClusterResult>\
        <CacheCluster><CacheClusterId>c1</CacheClusterId>\
        <CacheClusterStatus>rebooting cache cluster nodes</CacheClusterStatus></CacheCluster>\
        </RebootCacheClusterResult><ResponseMetadata><RequestId>rid-7</RequestId>\
        </ResponseMetadata></RebootCacheClusterResponse>";

    fn reboot_input() -> RebootCacheClusterRequest {
        RebootCacheClusterRequest::default()
            .with_cache_cluster_id("c1")
            .with_cache_node_ids_to_reboot(vec!["0001".to_owned()])
    }

    #[tokio::test]
    async fn test_should_reboot_cluster() {
        let transport = CannedTransport::new(StatusCode::OK, REBOOT_RESPONSE);
        let client = client(transport.clone());

        let response = client.reboot_cache_cluster(&reboot_input()).await.unwrap();

        assert_eq!(response.request_id(), "rid-7");
        let cluster = response.result().cache_cluster().unwrap();
        assert_eq!(cluster.cache_cluster_status(), "rebooting cache cluster nodes");
        assert_eq!(
            transport.last_body(),
            "Action=RebootCacheCluster&Version=2014-07-15&CacheClusterId=c1\
             &CacheNodeIdsToReboot.member.1=0001"
        );
    }

    #[tokio::test]
    async fn test_should_map_cluster_not_found_fault() {
        let transport = CannedTransport::new(
            StatusCode::NOT_FOUND,
            "<ErrorResponse><Error><Type>Sender</Type><Code>CacheClusterNotFound</Code>\
             <Message>Cluster c1 not found.</Message></Error><RequestId>rid-9</RequestId>\
             </ErrorResponse>",
        );
        let client = client(transport);

        let err = client.reboot_cache_cluster(&reboot_input()).await.unwrap_err();

        assert!(err.is_fault(ElastiCacheFault::CacheClusterNotFoundException));
        let fault = err.as_service_error().unwrap();
        assert_eq!(fault.message(), "Cluster c1 not found.");
        assert_eq!(fault.request_id(), Some("rid-9"));
        assert_eq!(fault.fault_name(), "CacheClusterNotFoundException");
    }

    #[tokio::test]
    async fn test_should_keep_unknown_fault_code() {
        let transport = CannedTransport::new(
            StatusCode::BAD_REQUEST,
            "<ErrorResponse><Error><Code>Throttling</Code><Message>slow down</Message></Error>\
             </ErrorResponse>",
        );
        let client = client(transport);

        let err = client
            .describe_cache_clusters(&DescribeCacheClustersRequest::default())
            .await
            .unwrap_err();

        let fault = err.as_service_error().unwrap();
        assert_eq!(fault.code(), ErrorCode::Unhandled);
        assert_eq!(fault.raw_code(), "Throttling");
        assert_eq!(fault.fault_name(), "ElastiCacheException");
    }

    #[tokio::test]
    async fn test_should_not_send_request_missing_required_field() {
        let transport = CannedTransport::new(StatusCode::OK, REBOOT_RESPONSE);
        let client = client(transport.clone());

        let err = client
            .reboot_cache_cluster(&RebootCacheClusterRequest::default().with_cache_cluster_id("c1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ElastiCacheError::Marshall(_)));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_should_run_blocking_client() {
        let transport = CannedTransport::new(StatusCode::OK, REBOOT_RESPONSE);
        let blocking = ElastiCacheBlockingClient::new(client(transport)).unwrap();

        let response = blocking.reboot_cache_cluster(&reboot_input()).unwrap();

        assert_eq!(response.result().cache_cluster().unwrap().cache_cluster_id(), "c1");
    }
}
