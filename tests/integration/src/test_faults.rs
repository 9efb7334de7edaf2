//! Fault mapping over the wire.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rustack_sdk_core::{ErrorCode, FaultCategory};
    use rustack_sdk_elasticache::ElastiCacheFault;
    use rustack_sdk_elasticache::input::{DescribeCacheClustersRequest, RebootCacheClusterRequest};
    use rustack_sdk_runtime::SdkError;
    use rustack_sdk_storagegateway::StorageGatewayFault;
    use rustack_sdk_storagegateway::input::ListVolumesInput;

    use crate::{CannedResponse, FakeEndpoint};

    fn reboot_input() -> RebootCacheClusterRequest {
        RebootCacheClusterRequest::default()
            .with_cache_cluster_id("missing")
            .with_cache_node_ids_to_reboot(vec!["0001".to_owned()])
    }

    #[tokio::test]
    async fn test_should_map_known_query_fault() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::with_status(
                StatusCode::NOT_FOUND,
                "<ErrorResponse xmlns=\"http://elasticache.amazonaws.com/doc/2014-07-15/\">\
                 <Error><Type>Sender</Type><Code>CacheClusterNotFound</Code>\
                 <Message>CacheCluster not found: missing</Message></Error>\
                 <RequestId>e1a0f1cc-0000-0000-0000-000000000000</RequestId></ErrorResponse>",
            )
        })
        .await
        .unwrap();
        let client = endpoint.elasticache().unwrap();

        let err = client.reboot_cache_cluster(&reboot_input()).await.unwrap_err();

        let fault = err.as_service_error().unwrap();
        assert_eq!(
            fault.code(),
            ErrorCode::Known(ElastiCacheFault::CacheClusterNotFoundException)
        );
        assert_eq!(fault.message(), "CacheCluster not found: missing");
        assert_eq!(fault.status(), StatusCode::NOT_FOUND);
        assert_eq!(fault.category(), FaultCategory::Client);
        assert_eq!(fault.request_id(), Some("e1a0f1cc-0000-0000-0000-000000000000"));
    }

    #[tokio::test]
    async fn test_should_fall_back_to_generic_fault_for_unknown_code() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::with_status(
                StatusCode::SERVICE_UNAVAILABLE,
                "<ErrorResponse><Error><Type>Receiver</Type><Code>ServiceUnavailable</Code>\
                 <Message>try later</Message></Error></ErrorResponse>",
            )
        })
        .await
        .unwrap();
        let client = endpoint.elasticache().unwrap();

        let err = client
            .describe_cache_clusters(&DescribeCacheClustersRequest::default())
            .await
            .unwrap_err();

        let fault = err.as_service_error().unwrap();
        assert_eq!(fault.code(), ErrorCode::Unhandled);
        assert_eq!(fault.raw_code(), "ServiceUnavailable");
        assert_eq!(fault.fault_name(), "ElastiCacheException");
        assert_eq!(fault.category(), FaultCategory::Server);
    }

    #[tokio::test]
    async fn test_should_keep_status_when_error_body_is_unreadable() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::with_status(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
        })
        .await
        .unwrap();
        let client = endpoint.elasticache().unwrap();

        let err = client.reboot_cache_cluster(&reboot_input()).await.unwrap_err();

        let SdkError::Service(fault) = err else {
            panic!("expected a service fault, got {err:?}");
        };
        assert_eq!(fault.code(), ErrorCode::Unhandled);
        assert_eq!(fault.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(fault.category(), FaultCategory::Server);
    }

    #[tokio::test]
    async fn test_should_map_json_fault() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::with_status(
                StatusCode::BAD_REQUEST,
                r#"{"__type":"InvalidGatewayRequestException","message":"The specified gateway was not found."}"#,
            )
            .header("x-amzn-requestid", "sgw-req-1")
        })
        .await
        .unwrap();
        let client = endpoint.storagegateway().unwrap();

        let err = client
            .list_volumes(&ListVolumesInput::default().with_gateway_arn("arn:missing"))
            .await
            .unwrap_err();

        assert!(err.is_fault(StorageGatewayFault::InvalidGatewayRequestException));
        let fault = err.as_service_error().unwrap();
        assert_eq!(fault.message(), "The specified gateway was not found.");
        assert_eq!(fault.request_id(), Some("sgw-req-1"));
    }
}
