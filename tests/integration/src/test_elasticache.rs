//! ElastiCache query-protocol round trips.

#[cfg(test)]
mod tests {
    use rustack_sdk_elasticache::ElastiCacheBlockingClient;
    use rustack_sdk_elasticache::input::{
        CopySnapshotRequest, CreateCacheClusterRequest, DescribeCacheClustersRequest,
        RebootCacheClusterRequest,
    };

    use crate::{CannedResponse, FakeEndpoint};

    const DESCRIBE_RESPONSE: &str = r#"<DescribeCacheClustersResponse xmlns="http://elasticache.amazonaws.com/doc/2014-07-15/">
  <DescribeCacheClustersResult>
    <CacheClusters>
      <CacheCluster>
        <CacheClusterId>simcoprod42</CacheClusterId>
        <CacheClusterStatus>available</CacheClusterStatus>
        <CacheNodeType>cache.m1.large</CacheNodeType>
        <Engine>memcached</Engine>
        <EngineVersion>1.4.5</EngineVersion>
        <NumCacheNodes>3</NumCacheNodes>
        <PreferredAvailabilityZone>us-west-2c</PreferredAvailabilityZone>
        <CacheClusterCreateTime>2011-07-27T02:55:54.814Z</CacheClusterCreateTime>
        <CacheNodes>
          <CacheNode>
            <CacheNodeId>0001</CacheNodeId>
            <CacheNodeStatus>available</CacheNodeStatus>
            <Endpoint>
              <Address>simcoprod42.m2st2p.0001.usw2.cache.amazonaws.com</Address>
              <Port>11211</Port>
            </Endpoint>
            <ParameterGroupStatus>in-sync</ParameterGroupStatus>
          </CacheNode>
        </CacheNodes>
      </CacheCluster>
    </CacheClusters>
  </DescribeCacheClustersResult>
  <ResponseMetadata>
    <RequestId>f270d58f-b7fb-11e0-9326-b7275b9d4a6c</RequestId>
  </ResponseMetadata>
</DescribeCacheClustersResponse>"#;

    const REBOOT_RESPONSE: &str = "<RebootCacheClusterResponse><RebootCacheClusterResult>\
        <CacheCluster><CacheClusterId>simcoprod42</CacheClusterId>\
        <CacheClusterStatus>rebooting cache cluster nodes</CacheClusterStatus></CacheCluster>\
        </RebootCacheClusterResult><ResponseMetadata><RequestId>r-1</RequestId>\
        </ResponseMetadata></RebootCacheClusterResponse>";

    #[tokio::test]
    async fn test_should_describe_cache_clusters() {
        let endpoint = FakeEndpoint::start(|_| CannedResponse::ok(DESCRIBE_RESPONSE))
            .await
            .unwrap();
        let client = endpoint.elasticache().unwrap();

        let response = client
            .describe_cache_clusters(
                &DescribeCacheClustersRequest::default()
                    .with_cache_cluster_id("simcoprod42")
                    .with_show_cache_node_info(true),
            )
            .await
            .unwrap();

        assert_eq!(response.request_id(), "f270d58f-b7fb-11e0-9326-b7275b9d4a6c");
        let cluster = &response.result().cache_clusters()[0];
        assert_eq!(cluster.cache_cluster_id(), "simcoprod42");
        assert_eq!(cluster.engine_version(), "1.4.5");
        assert_eq!(cluster.num_cache_nodes(), 3);
        let node = &cluster.cache_nodes()[0];
        assert_eq!(node.parameter_group_status(), "in-sync");
        assert_eq!(node.endpoint().unwrap().port(), 11211);

        let requests = endpoint.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.uri, "/");
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded; charset=utf-8")
        );
        assert_eq!(request.form_param("Action").as_deref(), Some("DescribeCacheClusters"));
        assert_eq!(request.form_param("Version").as_deref(), Some("2014-07-15"));
        assert_eq!(request.form_param("ShowCacheNodeInfo").as_deref(), Some("true"));
        assert!(request
            .header("authorization")
            .unwrap()
            .contains("/us-west-2/elasticache/aws4_request"));
        assert!(request.header("amz-sdk-invocation-id").is_some());
    }

    #[tokio::test]
    async fn test_should_send_member_list_when_rebooting() {
        let endpoint = FakeEndpoint::start(|_| CannedResponse::ok(REBOOT_RESPONSE))
            .await
            .unwrap();
        let client = endpoint.elasticache().unwrap();

        let response = client
            .reboot_cache_cluster(
                &RebootCacheClusterRequest::default()
                    .with_cache_cluster_id("simcoprod42")
                    .with_cache_node_ids_to_reboot(vec!["0001".to_owned(), "0003".to_owned()]),
            )
            .await
            .unwrap();

        assert_eq!(
            response.result().cache_cluster().unwrap().cache_cluster_status(),
            "rebooting cache cluster nodes"
        );
        let request = &endpoint.requests()[0];
        assert_eq!(request.form_param("CacheNodeIdsToReboot.member.1").as_deref(), Some("0001"));
        assert_eq!(request.form_param("CacheNodeIdsToReboot.member.2").as_deref(), Some("0003"));
    }

    #[tokio::test]
    async fn test_should_create_cluster_and_copy_snapshot() {
        let endpoint = FakeEndpoint::start(|request| {
            match request.form_param("Action").as_deref() {
                Some("CreateCacheCluster") => CannedResponse::ok(
                    "<CreateCacheClusterResponse><CreateCacheClusterResult><CacheCluster>\
                     <CacheClusterId>redis-1</CacheClusterId><CacheClusterStatus>creating</CacheClusterStatus>\
                     </CacheCluster></CreateCacheClusterResult></CreateCacheClusterResponse>",
                ),
                _ => CannedResponse::ok(
                    "<CopySnapshotResponse><CopySnapshotResult><Snapshot>\
                     <SnapshotName>redis-1-copy</SnapshotName><SnapshotStatus>creating</SnapshotStatus>\
                     </Snapshot></CopySnapshotResult></CopySnapshotResponse>",
                ),
            }
        })
        .await
        .unwrap();
        let client = endpoint.elasticache().unwrap();

        let created = client
            .create_cache_cluster(
                &CreateCacheClusterRequest::default()
                    .with_cache_cluster_id("redis-1")
                    .with_engine("redis")
                    .with_num_cache_nodes(1)
                    .with_security_group_ids(vec!["sg-1".to_owned()]),
            )
            .await
            .unwrap();
        let copied = client
            .copy_snapshot(
                &CopySnapshotRequest::default()
                    .with_source_snapshot_name("redis-1-nightly")
                    .with_target_snapshot_name("redis-1-copy"),
            )
            .await
            .unwrap();

        assert_eq!(created.result().cache_cluster().unwrap().cache_cluster_status(), "creating");
        assert_eq!(copied.result().snapshot().unwrap().snapshot_name(), "redis-1-copy");
        let requests = endpoint.requests();
        assert_eq!(
            requests[0].form_param("SecurityGroupIds.SecurityGroupId.1").as_deref(),
            Some("sg-1")
        );
        assert_eq!(
            requests[1].form_param("TargetSnapshotName").as_deref(),
            Some("redis-1-copy")
        );
    }

    #[test]
    fn test_should_describe_with_blocking_client() {
        let server = tokio::runtime::Runtime::new().unwrap();
        let endpoint = server
            .block_on(FakeEndpoint::start(|_| CannedResponse::ok(DESCRIBE_RESPONSE)))
            .unwrap();
        let client = ElastiCacheBlockingClient::new(endpoint.elasticache().unwrap()).unwrap();

        let response = client
            .describe_cache_clusters(&DescribeCacheClustersRequest::default())
            .unwrap();

        assert_eq!(response.result().cache_clusters().len(), 1);
        assert_eq!(endpoint.requests().len(), 1);
    }
}
