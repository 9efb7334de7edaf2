//! Static operation descriptors.
//!
//! Each operation pairs the query marshaller for its input with the
//! response unmarshaller for its `<Op>Result` element.

use rustack_sdk_protocol::{QueryMarshaller, QueryResponseUnmarshaller};
use rustack_sdk_runtime::Operation;

use crate::input::{
    CopySnapshotRequest, CreateCacheClusterRequest, DescribeCacheClustersRequest,
    RebootCacheClusterRequest,
};
use crate::output::{
    CopySnapshotResult, CopySnapshotResultUnmarshaller, CreateCacheClusterResult,
    CreateCacheClusterResultUnmarshaller, DescribeCacheClustersResult,
    DescribeCacheClustersResultUnmarshaller, RebootCacheClusterResult,
    RebootCacheClusterResultUnmarshaller,
};

/// Query API version sent with every request.
pub const API_VERSION: &str = "2014-07-15";

const SERVICE_NAME: &str = "ElastiCache";

static CREATE_CACHE_CLUSTER_MARSHALLER: QueryMarshaller<CreateCacheClusterRequest> =
    QueryMarshaller::new(SERVICE_NAME, "CreateCacheCluster", API_VERSION);
static CREATE_CACHE_CLUSTER_UNMARSHALLER: QueryResponseUnmarshaller<
    CreateCacheClusterResultUnmarshaller,
> = QueryResponseUnmarshaller::new("CreateCacheClusterResult", CreateCacheClusterResultUnmarshaller);

/// `CreateCacheCluster`.
pub static CREATE_CACHE_CLUSTER: Operation<CreateCacheClusterRequest, CreateCacheClusterResult> =
    Operation::new(
        "CreateCacheCluster",
        &CREATE_CACHE_CLUSTER_MARSHALLER,
        &CREATE_CACHE_CLUSTER_UNMARSHALLER,
    );

static DESCRIBE_CACHE_CLUSTERS_MARSHALLER: QueryMarshaller<DescribeCacheClustersRequest> =
    QueryMarshaller::new(SERVICE_NAME, "DescribeCacheClusters", API_VERSION);
static DESCRIBE_CACHE_CLUSTERS_UNMARSHALLER: QueryResponseUnmarshaller<
    DescribeCacheClustersResultUnmarshaller,
> = QueryResponseUnmarshaller::new(
    "DescribeCacheClustersResult",
    DescribeCacheClustersResultUnmarshaller,
);

/// `DescribeCacheClusters`.
pub static DESCRIBE_CACHE_CLUSTERS: Operation<
    DescribeCacheClustersRequest,
    DescribeCacheClustersResult,
> = Operation::new(
    "DescribeCacheClusters",
    &DESCRIBE_CACHE_CLUSTERS_MARSHALLER,
    &DESCRIBE_CACHE_CLUSTERS_UNMARSHALLER,
);

static REBOOT_CACHE_CLUSTER_MARSHALLER: QueryMarshaller<RebootCacheClusterRequest> =
    QueryMarshaller::new(SERVICE_NAME, "RebootCacheCluster", API_VERSION);
static REBOOT_CACHE_CLUSTER_UNMARSHALLER: QueryResponseUnmarshaller<
    RebootCacheClusterResultUnmarshaller,
> = QueryResponseUnmarshaller::new("RebootCacheClusterResult", RebootCacheClusterResultUnmarshaller);

/// `RebootCacheCluster`.
pub static REBOOT_CACHE_CLUSTER: Operation<RebootCacheClusterRequest, RebootCacheClusterResult> =
    Operation::new(
        "RebootCacheCluster",
        &REBOOT_CACHE_CLUSTER_MARSHALLER,
        &REBOOT_CACHE_CLUSTER_UNMARSHALLER,
    );

static COPY_SNAPSHOT_MARSHALLER: QueryMarshaller<CopySnapshotRequest> =
    QueryMarshaller::new(SERVICE_NAME, "CopySnapshot", API_VERSION);
static COPY_SNAPSHOT_UNMARSHALLER: QueryResponseUnmarshaller<CopySnapshotResultUnmarshaller> =
    QueryResponseUnmarshaller::new("CopySnapshotResult", CopySnapshotResultUnmarshaller);

/// `CopySnapshot`.
pub static COPY_SNAPSHOT: Operation<CopySnapshotRequest, CopySnapshotResult> = Operation::new(
    "CopySnapshot",
    &COPY_SNAPSHOT_MARSHALLER,
    &COPY_SNAPSHOT_UNMARSHALLER,
);

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};
    use rustack_sdk_core::{HttpMethod, HttpResponse};
    use rustack_sdk_protocol::{Marshaller, MarshallError, ResponseUnmarshaller};

    use super::*;

    #[test]
    fn test_should_marshall_reboot_with_member_list() {
        let input = RebootCacheClusterRequest::default()
            .with_cache_cluster_id("my-cluster")
            .with_cache_node_ids_to_reboot(vec!["0001".to_owned(), "0002".to_owned()]);
        let request = REBOOT_CACHE_CLUSTER_MARSHALLER.marshall(&input).unwrap();
        let params = request.parameters();

        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(params.get("Action"), Some("RebootCacheCluster"));
        assert_eq!(params.get("Version"), Some(API_VERSION));
        assert_eq!(params.get("CacheClusterId"), Some("my-cluster"));
        assert_eq!(params.get("CacheNodeIdsToReboot.member.1"), Some("0001"));
        assert_eq!(params.get("CacheNodeIdsToReboot.member.2"), Some("0002"));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_should_use_location_names_for_create_lists() {
        let input = CreateCacheClusterRequest::default()
            .with_cache_cluster_id("c1")
            .with_num_cache_nodes(2)
            .with_engine("memcached")
            .with_cache_security_group_names(vec!["default".to_owned()])
            .with_security_group_ids(vec!["sg-1".to_owned(), "sg-2".to_owned()])
            .with_auto_minor_version_upgrade(true);
        let request = CREATE_CACHE_CLUSTER_MARSHALLER.marshall(&input).unwrap();
        let params = request.parameters();

        assert_eq!(params.get("NumCacheNodes"), Some("2"));
        assert_eq!(
            params.get("CacheSecurityGroupNames.CacheSecurityGroupName.1"),
            Some("default")
        );
        assert_eq!(params.get("SecurityGroupIds.SecurityGroupId.2"), Some("sg-2"));
        assert_eq!(params.get("AutoMinorVersionUpgrade"), Some("true"));
        assert_eq!(params.get("ReplicationGroupId"), None);
    }

    #[test]
    fn test_should_reject_copy_without_target_name() {
        let input = CopySnapshotRequest::default().with_source_snapshot_name("nightly");
        let err = COPY_SNAPSHOT_MARSHALLER.marshall(&input).unwrap_err();
        assert!(matches!(
            err,
            MarshallError::MissingRequiredField { field: "TargetSnapshotName", .. }
        ));
    }

    #[test]
    fn test_should_omit_unset_optional_fields() {
        let request = DESCRIBE_CACHE_CLUSTERS_MARSHALLER
            .marshall(&DescribeCacheClustersRequest::default())
            .unwrap();
        assert_eq!(request.parameters().len(), 2);
    }

    #[test]
    fn test_should_unmarshall_describe_result_with_nodes() {
        let body = r#"<DescribeCacheClustersResponse xmlns="http://elasticache.amazonaws.com/doc/2014-07-15/">
  <DescribeCacheClustersResult>
    <Marker>next-page</Marker>
    <CacheClusters>
      <CacheCluster>
        <CacheClusterId>simcoprod42</CacheClusterId>
        <CacheClusterStatus>available</CacheClusterStatus>
        <NumCacheNodes>2</NumCacheNodes>
        <Engine>memcached</Engine>
        <AutoMinorVersionUpgrade>true</AutoMinorVersionUpgrade>
        <CacheClusterCreateTime>2014-03-27T02:55:54.814Z</CacheClusterCreateTime>
        <ConfigurationEndpoint>
          <Port>11211</Port>
          <Address>simcoprod42.m2st2p.cfg.cache.amazonaws.com</Address>
        </ConfigurationEndpoint>
        <CacheNodes>
          <CacheNode>
            <CacheNodeId>0001</CacheNodeId>
            <CacheNodeStatus>available</CacheNodeStatus>
            <Endpoint><Port>11211</Port><Address>node1.cache.amazonaws.com</Address></Endpoint>
          </CacheNode>
          <CacheNode>
            <CacheNodeId>0002</CacheNodeId>
            <CacheNodeStatus>rebooting</CacheNodeStatus>
          </CacheNode>
        </CacheNodes>
      </CacheCluster>
      <CacheCluster>
        <CacheClusterId>simcoprod43</CacheClusterId>
      </CacheCluster>
    </CacheClusters>
  </DescribeCacheClustersResult>
  <ResponseMetadata><RequestId>f270d58f-b7fb-11e0-9326-b7275b9d4a6c</RequestId></ResponseMetadata>
</DescribeCacheClustersResponse>"#;
        let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::from(body));

        let decoded = DESCRIBE_CACHE_CLUSTERS_UNMARSHALLER.unmarshall(&response).unwrap();
        assert_eq!(decoded.request_id(), "f270d58f-b7fb-11e0-9326-b7275b9d4a6c");
        let result = decoded.result();
        assert_eq!(result.marker(), "next-page");
        assert_eq!(result.cache_clusters().len(), 2);

        let first = &result.cache_clusters()[0];
        assert_eq!(first.cache_cluster_id(), "simcoprod42");
        assert_eq!(first.num_cache_nodes(), 2);
        assert!(first.auto_minor_version_upgrade());
        assert_eq!(
            first.cache_cluster_create_time().to_rfc3339(),
            "2014-03-27T02:55:54.814+00:00"
        );
        let config = first.configuration_endpoint().unwrap();
        assert_eq!(config.port(), 11211);
        assert_eq!(config.address(), "simcoprod42.m2st2p.cfg.cache.amazonaws.com");
        assert_eq!(first.cache_nodes().len(), 2);
        assert_eq!(first.cache_nodes()[0].endpoint().unwrap().address(), "node1.cache.amazonaws.com");
        assert_eq!(first.cache_nodes()[1].cache_node_status(), "rebooting");
        assert!(!first.cache_nodes()[1].is_set_endpoint());

        let second = &result.cache_clusters()[1];
        assert_eq!(second.cache_cluster_id(), "simcoprod43");
        assert!(!second.is_set_cache_nodes());
        assert!(!second.is_set_num_cache_nodes());
    }

    #[test]
    fn test_should_unmarshall_copy_snapshot_result() {
        let body = "<CopySnapshotResponse><CopySnapshotResult><Snapshot>\
            <SnapshotName>copy-of-nightly</SnapshotName><SnapshotStatus>creating</SnapshotStatus>\
            <SnapshotSource>manual</SnapshotSource><Port>6379</Port>\
            </Snapshot></CopySnapshotResult></CopySnapshotResponse>";
        let response = HttpResponse::new(StatusCode::OK, HeaderMap::new(), Bytes::from(body));

        let decoded = COPY_SNAPSHOT_UNMARSHALLER.unmarshall(&response).unwrap();
        let snapshot = decoded.result().snapshot().unwrap();
        assert_eq!(snapshot.snapshot_name(), "copy-of-nightly");
        assert_eq!(snapshot.snapshot_status(), "creating");
        assert_eq!(snapshot.snapshot_source(), "manual");
        assert_eq!(snapshot.port(), 6379);
        assert_eq!(decoded.request_id(), "");
    }
}
