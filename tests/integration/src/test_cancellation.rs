//! Cancelling in-flight calls.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rustack_sdk_elasticache::input::DescribeCacheClustersRequest;
    use rustack_sdk_runtime::{CancellationToken, SdkError};
    use rustack_sdk_storagegateway::input::ListVolumesInput;

    use crate::{CannedResponse, FakeEndpoint};

    #[tokio::test]
    async fn test_should_abandon_slow_call_when_cancelled() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::ok("<DescribeCacheClustersResponse/>").delayed(Duration::from_secs(5))
        })
        .await
        .unwrap();
        let client = endpoint.elasticache().unwrap();
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let err = client
            .describe_cache_clusters_with_cancellation(&DescribeCacheClustersRequest::default(), &token)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(matches!(err, SdkError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_should_not_send_when_already_cancelled() {
        let endpoint = FakeEndpoint::start(|_| CannedResponse::ok("{}")).await.unwrap();
        let client = endpoint.storagegateway().unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let err = client
            .list_volumes_with_cancellation(&ListVolumesInput::default(), &token)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(endpoint.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_complete_when_token_never_fires() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::ok(r#"{"GatewayARN":"arn:gw","VolumeInfos":[]}"#)
                .delayed(Duration::from_millis(50))
        })
        .await
        .unwrap();
        let client = endpoint.storagegateway().unwrap();
        let token = CancellationToken::new();

        let response = client
            .list_volumes_with_cancellation(&ListVolumesInput::default(), &token)
            .await
            .unwrap();

        assert_eq!(response.result().gateway_arn(), "arn:gw");
        assert!(response.result().volume_infos().is_empty());
    }
}
