//! Signer selection on the wire.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rustack_sdk_auth::{AnonymousSigner, SigV2Signer, SignatureMethod};
    use rustack_sdk_elasticache::input::DescribeCacheClustersRequest;
    use rustack_sdk_elasticache::{ElastiCacheClient, METADATA};

    use crate::{CannedResponse, FakeEndpoint};

    const EMPTY_DESCRIBE: &str = "<DescribeCacheClustersResponse><DescribeCacheClustersResult>\
        <CacheClusters/></DescribeCacheClustersResult></DescribeCacheClustersResponse>";

    #[tokio::test]
    async fn test_should_sign_query_parameters_with_sigv2() {
        let endpoint = FakeEndpoint::start(|_| CannedResponse::ok(EMPTY_DESCRIBE))
            .await
            .unwrap();
        let inner = endpoint
            .service_client(METADATA)
            .signer(Arc::new(SigV2Signer::new(SignatureMethod::HmacSha256)))
            .build()
            .unwrap();
        let client = ElastiCacheClient::from_service_client(inner);

        client
            .describe_cache_clusters(&DescribeCacheClustersRequest::default())
            .await
            .unwrap();

        let request = &endpoint.requests()[0];
        assert_eq!(request.form_param("AWSAccessKeyId").as_deref(), Some("AKIDEXAMPLE"));
        assert_eq!(request.form_param("SignatureVersion").as_deref(), Some("2"));
        assert_eq!(request.form_param("SignatureMethod").as_deref(), Some("HmacSHA256"));
        assert!(request.form_param("Timestamp").is_some());
        assert!(!request.form_param("Signature").unwrap_or_default().is_empty());
        assert!(request.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_should_send_unsigned_request_with_anonymous_signer() {
        let endpoint = FakeEndpoint::start(|_| CannedResponse::ok(EMPTY_DESCRIBE))
            .await
            .unwrap();
        let inner = endpoint
            .service_client(METADATA)
            .signer(Arc::new(AnonymousSigner))
            .build()
            .unwrap();
        let client = ElastiCacheClient::from_service_client(inner);

        let response = client
            .describe_cache_clusters(&DescribeCacheClustersRequest::default())
            .await
            .unwrap();

        assert!(response.result().cache_clusters().is_empty());
        let request = &endpoint.requests()[0];
        assert!(request.header("authorization").is_none());
        assert!(request.header("x-amz-date").is_none());
        assert_eq!(request.form_param("Action").as_deref(), Some("DescribeCacheClusters"));
    }
}
