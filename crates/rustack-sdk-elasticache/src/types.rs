//! Shared ElastiCache data types.

use chrono::{DateTime, Utc};
use rustack_sdk_core::IsSet;
use rustack_sdk_protocol::unmarshall::{
    BOOL, INT, ListUnmarshaller, STRING, TIMESTAMP, read_structure,
};
use rustack_sdk_protocol::{
    JsonUnmarshallerContext, StructureScope, UnmarshallError, Unmarshaller, UnmarshallerContext,
    XmlUnmarshallerContext,
};

static CACHE_CLUSTER_CACHE_NODES: ListUnmarshaller<CacheNodeUnmarshaller> =
    ListUnmarshaller::new(CacheNodeUnmarshaller).with_member_name("CacheNode");

/// Hostname and port of a cache node or cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    address: Option<String>,
    port: Option<i32>,
}

impl Endpoint {
    /// DNS hostname of the node. Empty when not set.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }

    /// Set `Address`.
    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = Some(value.into());
    }

    /// Builder-style setter for `Address`.
    #[must_use]
    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.set_address(value);
        self
    }

    /// Whether `Address` is set.
    #[must_use]
    pub fn is_set_address(&self) -> bool {
        self.address.is_set()
    }

    /// Port the cache engine listens on. `0` when not set.
    #[must_use]
    pub fn port(&self) -> i32 {
        self.port.unwrap_or_default()
    }

    /// Set `Port`.
    pub fn set_port(&mut self, value: i32) {
        self.port = Some(value);
    }

    /// Builder-style setter for `Port`.
    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.set_port(value);
        self
    }

    /// Whether `Port` is set.
    #[must_use]
    pub fn is_set_port(&self) -> bool {
        self.port.is_set()
    }
}

/// Reads [`Endpoint`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointUnmarshaller;

impl EndpointUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<Endpoint, UnmarshallError> {
        let mut value = Endpoint::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("Address", depth) {
                value.address = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("Port", depth) {
                value.port = ctx.read_member(&INT)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<Endpoint> for EndpointUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<Endpoint>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<Endpoint>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// One node of a cache cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheNode {
    cache_node_id: Option<String>,
    cache_node_status: Option<String>,
    cache_node_create_time: Option<DateTime<Utc>>,
    endpoint: Option<Endpoint>,
    parameter_group_status: Option<String>,
    source_cache_node_id: Option<String>,
}

impl CacheNode {
    /// Node identifier, unique within the cluster (`0001`, `0002`, ...). Empty when not set.
    #[must_use]
    pub fn cache_node_id(&self) -> &str {
        self.cache_node_id.as_deref().unwrap_or_default()
    }

    /// Set `CacheNodeId`.
    pub fn set_cache_node_id(&mut self, value: impl Into<String>) {
        self.cache_node_id = Some(value.into());
    }

    /// Builder-style setter for `CacheNodeId`.
    #[must_use]
    pub fn with_cache_node_id(mut self, value: impl Into<String>) -> Self {
        self.set_cache_node_id(value);
        self
    }

    /// Whether `CacheNodeId` is set.
    #[must_use]
    pub fn is_set_cache_node_id(&self) -> bool {
        self.cache_node_id.is_set()
    }

    /// Current state of the node. Empty when not set.
    #[must_use]
    pub fn cache_node_status(&self) -> &str {
        self.cache_node_status.as_deref().unwrap_or_default()
    }

    /// Set `CacheNodeStatus`.
    pub fn set_cache_node_status(&mut self, value: impl Into<String>) {
        self.cache_node_status = Some(value.into());
    }

    /// Builder-style setter for `CacheNodeStatus`.
    #[must_use]
    pub fn with_cache_node_status(mut self, value: impl Into<String>) -> Self {
        self.set_cache_node_status(value);
        self
    }

    /// Whether `CacheNodeStatus` is set.
    #[must_use]
    pub fn is_set_cache_node_status(&self) -> bool {
        self.cache_node_status.is_set()
    }

    /// When the node was created. The Unix epoch when not set.
    #[must_use]
    pub fn cache_node_create_time(&self) -> DateTime<Utc> {
        self.cache_node_create_time.unwrap_or_default()
    }

    /// Set `CacheNodeCreateTime`.
    pub fn set_cache_node_create_time(&mut self, value: DateTime<Utc>) {
        self.cache_node_create_time = Some(value);
    }

    /// Builder-style setter for `CacheNodeCreateTime`.
    #[must_use]
    pub fn with_cache_node_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.set_cache_node_create_time(value);
        self
    }

    /// Whether `CacheNodeCreateTime` is set.
    #[must_use]
    pub fn is_set_cache_node_create_time(&self) -> bool {
        self.cache_node_create_time.is_set()
    }

    /// Hostname and port used to connect to the node. `None` when not set.
    #[must_use]
    pub fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    /// Set `Endpoint`.
    pub fn set_endpoint(&mut self, value: Endpoint) {
        self.endpoint = Some(value);
    }

    /// Builder-style setter for `Endpoint`.
    #[must_use]
    pub fn with_endpoint(mut self, value: Endpoint) -> Self {
        self.set_endpoint(value);
        self
    }

    /// Whether `Endpoint` is set.
    #[must_use]
    pub fn is_set_endpoint(&self) -> bool {
        self.endpoint.is_set()
    }

    /// Status of the parameter group applied to the node. Empty when not set.
    #[must_use]
    pub fn parameter_group_status(&self) -> &str {
        self.parameter_group_status.as_deref().unwrap_or_default()
    }

    /// Set `ParameterGroupStatus`.
    pub fn set_parameter_group_status(&mut self, value: impl Into<String>) {
        self.parameter_group_status = Some(value.into());
    }

    /// Builder-style setter for `ParameterGroupStatus`.
    #[must_use]
    pub fn with_parameter_group_status(mut self, value: impl Into<String>) -> Self {
        self.set_parameter_group_status(value);
        self
    }

    /// Whether `ParameterGroupStatus` is set.
    #[must_use]
    pub fn is_set_parameter_group_status(&self) -> bool {
        self.parameter_group_status.is_set()
    }

    /// Primary node this read replica follows, if any. Empty when not set.
    #[must_use]
    pub fn source_cache_node_id(&self) -> &str {
        self.source_cache_node_id.as_deref().unwrap_or_default()
    }

    /// Set `SourceCacheNodeId`.
    pub fn set_source_cache_node_id(&mut self, value: impl Into<String>) {
        self.source_cache_node_id = Some(value.into());
    }

    /// Builder-style setter for `SourceCacheNodeId`.
    #[must_use]
    pub fn with_source_cache_node_id(mut self, value: impl Into<String>) -> Self {
        self.set_source_cache_node_id(value);
        self
    }

    /// Whether `SourceCacheNodeId` is set.
    #[must_use]
    pub fn is_set_source_cache_node_id(&self) -> bool {
        self.source_cache_node_id.is_set()
    }
}

/// Reads [`CacheNode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheNodeUnmarshaller;

impl CacheNodeUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<CacheNode, UnmarshallError> {
        let mut value = CacheNode::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("CacheNodeId", depth) {
                value.cache_node_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheNodeStatus", depth) {
                value.cache_node_status = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheNodeCreateTime", depth) {
                value.cache_node_create_time = ctx.read_member(&TIMESTAMP)?;
                continue;
            }
            if ctx.test_expression("Endpoint", depth) {
                value.endpoint = ctx.read_member(&EndpointUnmarshaller)?;
                continue;
            }
            if ctx.test_expression("ParameterGroupStatus", depth) {
                value.parameter_group_status = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("SourceCacheNodeId", depth) {
                value.source_cache_node_id = ctx.read_member(&STRING)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<CacheNode> for CacheNodeUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<CacheNode>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<CacheNode>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// A cache cluster and its nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheCluster {
    cache_cluster_id: Option<String>,
    configuration_endpoint: Option<Endpoint>,
    client_download_landing_page: Option<String>,
    cache_node_type: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    cache_cluster_status: Option<String>,
    num_cache_nodes: Option<i32>,
    preferred_availability_zone: Option<String>,
    cache_cluster_create_time: Option<DateTime<Utc>>,
    preferred_maintenance_window: Option<String>,
    cache_nodes: Vec<CacheNode>,
    auto_minor_version_upgrade: Option<bool>,
    cache_subnet_group_name: Option<String>,
    replication_group_id: Option<String>,
    snapshot_retention_limit: Option<i32>,
    snapshot_window: Option<String>,
}

impl CacheCluster {
    /// User-supplied cluster identifier. Empty when not set.
    #[must_use]
    pub fn cache_cluster_id(&self) -> &str {
        self.cache_cluster_id.as_deref().unwrap_or_default()
    }

    /// Set `CacheClusterId`.
    pub fn set_cache_cluster_id(&mut self, value: impl Into<String>) {
        self.cache_cluster_id = Some(value.into());
    }

    /// Builder-style setter for `CacheClusterId`.
    #[must_use]
    pub fn with_cache_cluster_id(mut self, value: impl Into<String>) -> Self {
        self.set_cache_cluster_id(value);
        self
    }

    /// Whether `CacheClusterId` is set.
    #[must_use]
    pub fn is_set_cache_cluster_id(&self) -> bool {
        self.cache_cluster_id.is_set()
    }

    /// Memcached configuration endpoint. `None` when not set.
    #[must_use]
    pub fn configuration_endpoint(&self) -> Option<&Endpoint> {
        self.configuration_endpoint.as_ref()
    }

    /// Set `ConfigurationEndpoint`.
    pub fn set_configuration_endpoint(&mut self, value: Endpoint) {
        self.configuration_endpoint = Some(value);
    }

    /// Builder-style setter for `ConfigurationEndpoint`.
    #[must_use]
    pub fn with_configuration_endpoint(mut self, value: Endpoint) -> Self {
        self.set_configuration_endpoint(value);
        self
    }

    /// Whether `ConfigurationEndpoint` is set.
    #[must_use]
    pub fn is_set_configuration_endpoint(&self) -> bool {
        self.configuration_endpoint.is_set()
    }

    /// Where to download the auto-discovery client. Empty when not set.
    #[must_use]
    pub fn client_download_landing_page(&self) -> &str {
        self.client_download_landing_page.as_deref().unwrap_or_default()
    }

    /// Set `ClientDownloadLandingPage`.
    pub fn set_client_download_landing_page(&mut self, value: impl Into<String>) {
        self.client_download_landing_page = Some(value.into());
    }

    /// Builder-style setter for `ClientDownloadLandingPage`.
    #[must_use]
    pub fn with_client_download_landing_page(mut self, value: impl Into<String>) -> Self {
        self.set_client_download_landing_page(value);
        self
    }

    /// Whether `ClientDownloadLandingPage` is set.
    #[must_use]
    pub fn is_set_client_download_landing_page(&self) -> bool {
        self.client_download_landing_page.is_set()
    }

    /// Compute and memory capacity of the nodes. Empty when not set.
    #[must_use]
    pub fn cache_node_type(&self) -> &str {
        self.cache_node_type.as_deref().unwrap_or_default()
    }

    /// Set `CacheNodeType`.
    pub fn set_cache_node_type(&mut self, value: impl Into<String>) {
        self.cache_node_type = Some(value.into());
    }

    /// Builder-style setter for `CacheNodeType`.
    #[must_use]
    pub fn with_cache_node_type(mut self, value: impl Into<String>) -> Self {
        self.set_cache_node_type(value);
        self
    }

    /// Whether `CacheNodeType` is set.
    #[must_use]
    pub fn is_set_cache_node_type(&self) -> bool {
        self.cache_node_type.is_set()
    }

    /// Cache engine, `memcached` or `redis`. Empty when not set.
    #[must_use]
    pub fn engine(&self) -> &str {
        self.engine.as_deref().unwrap_or_default()
    }

    /// Set `Engine`.
    pub fn set_engine(&mut self, value: impl Into<String>) {
        self.engine = Some(value.into());
    }

    /// Builder-style setter for `Engine`.
    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.set_engine(value);
        self
    }

    /// Whether `Engine` is set.
    #[must_use]
    pub fn is_set_engine(&self) -> bool {
        self.engine.is_set()
    }

    /// Engine version. Empty when not set.
    #[must_use]
    pub fn engine_version(&self) -> &str {
        self.engine_version.as_deref().unwrap_or_default()
    }

    /// Set `EngineVersion`.
    pub fn set_engine_version(&mut self, value: impl Into<String>) {
        self.engine_version = Some(value.into());
    }

    /// Builder-style setter for `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.set_engine_version(value);
        self
    }

    /// Whether `EngineVersion` is set.
    #[must_use]
    pub fn is_set_engine_version(&self) -> bool {
        self.engine_version.is_set()
    }

    /// Current state of the cluster (`available`, `creating`, `rebooting cache cluster nodes`, ...). Empty when not set.
    #[must_use]
    pub fn cache_cluster_status(&self) -> &str {
        self.cache_cluster_status.as_deref().unwrap_or_default()
    }

    /// Set `CacheClusterStatus`.
    pub fn set_cache_cluster_status(&mut self, value: impl Into<String>) {
        self.cache_cluster_status = Some(value.into());
    }

    /// Builder-style setter for `CacheClusterStatus`.
    #[must_use]
    pub fn with_cache_cluster_status(mut self, value: impl Into<String>) -> Self {
        self.set_cache_cluster_status(value);
        self
    }

    /// Whether `CacheClusterStatus` is set.
    #[must_use]
    pub fn is_set_cache_cluster_status(&self) -> bool {
        self.cache_cluster_status.is_set()
    }

    /// Number of nodes in the cluster. `0` when not set.
    #[must_use]
    pub fn num_cache_nodes(&self) -> i32 {
        self.num_cache_nodes.unwrap_or_default()
    }

    /// Set `NumCacheNodes`.
    pub fn set_num_cache_nodes(&mut self, value: i32) {
        self.num_cache_nodes = Some(value);
    }

    /// Builder-style setter for `NumCacheNodes`.
    #[must_use]
    pub fn with_num_cache_nodes(mut self, value: i32) -> Self {
        self.set_num_cache_nodes(value);
        self
    }

    /// Whether `NumCacheNodes` is set.
    #[must_use]
    pub fn is_set_num_cache_nodes(&self) -> bool {
        self.num_cache_nodes.is_set()
    }

    /// Availability zone the cluster is located in. Empty when not set.
    #[must_use]
    pub fn preferred_availability_zone(&self) -> &str {
        self.preferred_availability_zone.as_deref().unwrap_or_default()
    }

    /// Set `PreferredAvailabilityZone`.
    pub fn set_preferred_availability_zone(&mut self, value: impl Into<String>) {
        self.preferred_availability_zone = Some(value.into());
    }

    /// Builder-style setter for `PreferredAvailabilityZone`.
    #[must_use]
    pub fn with_preferred_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.set_preferred_availability_zone(value);
        self
    }

    /// Whether `PreferredAvailabilityZone` is set.
    #[must_use]
    pub fn is_set_preferred_availability_zone(&self) -> bool {
        self.preferred_availability_zone.is_set()
    }

    /// When the cluster was created. The Unix epoch when not set.
    #[must_use]
    pub fn cache_cluster_create_time(&self) -> DateTime<Utc> {
        self.cache_cluster_create_time.unwrap_or_default()
    }

    /// Set `CacheClusterCreateTime`.
    pub fn set_cache_cluster_create_time(&mut self, value: DateTime<Utc>) {
        self.cache_cluster_create_time = Some(value);
    }

    /// Builder-style setter for `CacheClusterCreateTime`.
    #[must_use]
    pub fn with_cache_cluster_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.set_cache_cluster_create_time(value);
        self
    }

    /// Whether `CacheClusterCreateTime` is set.
    #[must_use]
    pub fn is_set_cache_cluster_create_time(&self) -> bool {
        self.cache_cluster_create_time.is_set()
    }

    /// Weekly maintenance window. Empty when not set.
    #[must_use]
    pub fn preferred_maintenance_window(&self) -> &str {
        self.preferred_maintenance_window.as_deref().unwrap_or_default()
    }

    /// Set `PreferredMaintenanceWindow`.
    pub fn set_preferred_maintenance_window(&mut self, value: impl Into<String>) {
        self.preferred_maintenance_window = Some(value.into());
    }

    /// Builder-style setter for `PreferredMaintenanceWindow`.
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.set_preferred_maintenance_window(value);
        self
    }

    /// Whether `PreferredMaintenanceWindow` is set.
    #[must_use]
    pub fn is_set_preferred_maintenance_window(&self) -> bool {
        self.preferred_maintenance_window.is_set()
    }

    /// Nodes of the cluster, present when node info was requested. Empty when not set.
    #[must_use]
    pub fn cache_nodes(&self) -> &[CacheNode] {
        &self.cache_nodes
    }

    /// Set `CacheNodes`.
    pub fn set_cache_nodes(&mut self, values: Vec<CacheNode>) {
        self.cache_nodes = values;
    }

    /// Builder-style setter for `CacheNodes`.
    #[must_use]
    pub fn with_cache_nodes(mut self, values: Vec<CacheNode>) -> Self {
        self.cache_nodes = values;
        self
    }

    /// Whether `CacheNodes` is set.
    #[must_use]
    pub fn is_set_cache_nodes(&self) -> bool {
        self.cache_nodes.is_set()
    }

    /// Whether minor engine upgrades are applied automatically. `false` when not set.
    #[must_use]
    pub fn auto_minor_version_upgrade(&self) -> bool {
        self.auto_minor_version_upgrade.unwrap_or_default()
    }

    /// Set `AutoMinorVersionUpgrade`.
    pub fn set_auto_minor_version_upgrade(&mut self, value: bool) {
        self.auto_minor_version_upgrade = Some(value);
    }

    /// Builder-style setter for `AutoMinorVersionUpgrade`.
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, value: bool) -> Self {
        self.set_auto_minor_version_upgrade(value);
        self
    }

    /// Whether `AutoMinorVersionUpgrade` is set.
    #[must_use]
    pub fn is_set_auto_minor_version_upgrade(&self) -> bool {
        self.auto_minor_version_upgrade.is_set()
    }

    /// Subnet group of the cluster. Empty when not set.
    #[must_use]
    pub fn cache_subnet_group_name(&self) -> &str {
        self.cache_subnet_group_name.as_deref().unwrap_or_default()
    }

    /// Set `CacheSubnetGroupName`.
    pub fn set_cache_subnet_group_name(&mut self, value: impl Into<String>) {
        self.cache_subnet_group_name = Some(value.into());
    }

    /// Builder-style setter for `CacheSubnetGroupName`.
    #[must_use]
    pub fn with_cache_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.set_cache_subnet_group_name(value);
        self
    }

    /// Whether `CacheSubnetGroupName` is set.
    #[must_use]
    pub fn is_set_cache_subnet_group_name(&self) -> bool {
        self.cache_subnet_group_name.is_set()
    }

    /// Replication group the cluster belongs to. Empty when not set.
    #[must_use]
    pub fn replication_group_id(&self) -> &str {
        self.replication_group_id.as_deref().unwrap_or_default()
    }

    /// Set `ReplicationGroupId`.
    pub fn set_replication_group_id(&mut self, value: impl Into<String>) {
        self.replication_group_id = Some(value.into());
    }

    /// Builder-style setter for `ReplicationGroupId`.
    #[must_use]
    pub fn with_replication_group_id(mut self, value: impl Into<String>) -> Self {
        self.set_replication_group_id(value);
        self
    }

    /// Whether `ReplicationGroupId` is set.
    #[must_use]
    pub fn is_set_replication_group_id(&self) -> bool {
        self.replication_group_id.is_set()
    }

    /// Days automatic snapshots are kept. `0` when not set.
    #[must_use]
    pub fn snapshot_retention_limit(&self) -> i32 {
        self.snapshot_retention_limit.unwrap_or_default()
    }

    /// Set `SnapshotRetentionLimit`.
    pub fn set_snapshot_retention_limit(&mut self, value: i32) {
        self.snapshot_retention_limit = Some(value);
    }

    /// Builder-style setter for `SnapshotRetentionLimit`.
    #[must_use]
    pub fn with_snapshot_retention_limit(mut self, value: i32) -> Self {
        self.set_snapshot_retention_limit(value);
        self
    }

    /// Whether `SnapshotRetentionLimit` is set.
    #[must_use]
    pub fn is_set_snapshot_retention_limit(&self) -> bool {
        self.snapshot_retention_limit.is_set()
    }

    /// Daily window for automatic snapshots. Empty when not set.
    #[must_use]
    pub fn snapshot_window(&self) -> &str {
        self.snapshot_window.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotWindow`.
    pub fn set_snapshot_window(&mut self, value: impl Into<String>) {
        self.snapshot_window = Some(value.into());
    }

    /// Builder-style setter for `SnapshotWindow`.
    #[must_use]
    pub fn with_snapshot_window(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_window(value);
        self
    }

    /// Whether `SnapshotWindow` is set.
    #[must_use]
    pub fn is_set_snapshot_window(&self) -> bool {
        self.snapshot_window.is_set()
    }
}

/// Reads [`CacheCluster`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheClusterUnmarshaller;

impl CacheClusterUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<CacheCluster, UnmarshallError> {
        let mut value = CacheCluster::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("CacheClusterId", depth) {
                value.cache_cluster_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("ConfigurationEndpoint", depth) {
                value.configuration_endpoint = ctx.read_member(&EndpointUnmarshaller)?;
                continue;
            }
            if ctx.test_expression("ClientDownloadLandingPage", depth) {
                value.client_download_landing_page = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheNodeType", depth) {
                value.cache_node_type = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("Engine", depth) {
                value.engine = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("EngineVersion", depth) {
                value.engine_version = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheClusterStatus", depth) {
                value.cache_cluster_status = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("NumCacheNodes", depth) {
                value.num_cache_nodes = ctx.read_member(&INT)?;
                continue;
            }
            if ctx.test_expression("PreferredAvailabilityZone", depth) {
                value.preferred_availability_zone = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheClusterCreateTime", depth) {
                value.cache_cluster_create_time = ctx.read_member(&TIMESTAMP)?;
                continue;
            }
            if ctx.test_expression("PreferredMaintenanceWindow", depth) {
                value.preferred_maintenance_window = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheNodes", depth) {
                value.cache_nodes = ctx.read_member(&CACHE_CLUSTER_CACHE_NODES)?.unwrap_or_default();
                continue;
            }
            if ctx.test_expression("AutoMinorVersionUpgrade", depth) {
                value.auto_minor_version_upgrade = ctx.read_member(&BOOL)?;
                continue;
            }
            if ctx.test_expression("CacheSubnetGroupName", depth) {
                value.cache_subnet_group_name = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("ReplicationGroupId", depth) {
                value.replication_group_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("SnapshotRetentionLimit", depth) {
                value.snapshot_retention_limit = ctx.read_member(&INT)?;
                continue;
            }
            if ctx.test_expression("SnapshotWindow", depth) {
                value.snapshot_window = ctx.read_member(&STRING)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<CacheCluster> for CacheClusterUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<CacheCluster>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<CacheCluster>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// A point-in-time copy of a Redis cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    snapshot_name: Option<String>,
    cache_cluster_id: Option<String>,
    snapshot_status: Option<String>,
    snapshot_source: Option<String>,
    cache_node_type: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    num_cache_nodes: Option<i32>,
    port: Option<i32>,
    cache_cluster_create_time: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Name of the snapshot. Empty when not set.
    #[must_use]
    pub fn snapshot_name(&self) -> &str {
        self.snapshot_name.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotName`.
    pub fn set_snapshot_name(&mut self, value: impl Into<String>) {
        self.snapshot_name = Some(value.into());
    }

    /// Builder-style setter for `SnapshotName`.
    #[must_use]
    pub fn with_snapshot_name(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_name(value);
        self
    }

    /// Whether `SnapshotName` is set.
    #[must_use]
    pub fn is_set_snapshot_name(&self) -> bool {
        self.snapshot_name.is_set()
    }

    /// Source cluster identifier. Empty when not set.
    #[must_use]
    pub fn cache_cluster_id(&self) -> &str {
        self.cache_cluster_id.as_deref().unwrap_or_default()
    }

    /// Set `CacheClusterId`.
    pub fn set_cache_cluster_id(&mut self, value: impl Into<String>) {
        self.cache_cluster_id = Some(value.into());
    }

    /// Builder-style setter for `CacheClusterId`.
    #[must_use]
    pub fn with_cache_cluster_id(mut self, value: impl Into<String>) -> Self {
        self.set_cache_cluster_id(value);
        self
    }

    /// Whether `CacheClusterId` is set.
    #[must_use]
    pub fn is_set_cache_cluster_id(&self) -> bool {
        self.cache_cluster_id.is_set()
    }

    /// Current state of the snapshot (`creating`, `available`, ...). Empty when not set.
    #[must_use]
    pub fn snapshot_status(&self) -> &str {
        self.snapshot_status.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotStatus`.
    pub fn set_snapshot_status(&mut self, value: impl Into<String>) {
        self.snapshot_status = Some(value.into());
    }

    /// Builder-style setter for `SnapshotStatus`.
    #[must_use]
    pub fn with_snapshot_status(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_status(value);
        self
    }

    /// Whether `SnapshotStatus` is set.
    #[must_use]
    pub fn is_set_snapshot_status(&self) -> bool {
        self.snapshot_status.is_set()
    }

    /// Whether the snapshot is `manual` or `automated`. Empty when not set.
    #[must_use]
    pub fn snapshot_source(&self) -> &str {
        self.snapshot_source.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotSource`.
    pub fn set_snapshot_source(&mut self, value: impl Into<String>) {
        self.snapshot_source = Some(value.into());
    }

    /// Builder-style setter for `SnapshotSource`.
    #[must_use]
    pub fn with_snapshot_source(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_source(value);
        self
    }

    /// Whether `SnapshotSource` is set.
    #[must_use]
    pub fn is_set_snapshot_source(&self) -> bool {
        self.snapshot_source.is_set()
    }

    /// Node type of the source cluster. Empty when not set.
    #[must_use]
    pub fn cache_node_type(&self) -> &str {
        self.cache_node_type.as_deref().unwrap_or_default()
    }

    /// Set `CacheNodeType`.
    pub fn set_cache_node_type(&mut self, value: impl Into<String>) {
        self.cache_node_type = Some(value.into());
    }

    /// Builder-style setter for `CacheNodeType`.
    #[must_use]
    pub fn with_cache_node_type(mut self, value: impl Into<String>) -> Self {
        self.set_cache_node_type(value);
        self
    }

    /// Whether `CacheNodeType` is set.
    #[must_use]
    pub fn is_set_cache_node_type(&self) -> bool {
        self.cache_node_type.is_set()
    }

    /// Engine of the source cluster. Empty when not set.
    #[must_use]
    pub fn engine(&self) -> &str {
        self.engine.as_deref().unwrap_or_default()
    }

    /// Set `Engine`.
    pub fn set_engine(&mut self, value: impl Into<String>) {
        self.engine = Some(value.into());
    }

    /// Builder-style setter for `Engine`.
    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.set_engine(value);
        self
    }

    /// Whether `Engine` is set.
    #[must_use]
    pub fn is_set_engine(&self) -> bool {
        self.engine.is_set()
    }

    /// Engine version of the source cluster. Empty when not set.
    #[must_use]
    pub fn engine_version(&self) -> &str {
        self.engine_version.as_deref().unwrap_or_default()
    }

    /// Set `EngineVersion`.
    pub fn set_engine_version(&mut self, value: impl Into<String>) {
        self.engine_version = Some(value.into());
    }

    /// Builder-style setter for `EngineVersion`.
    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.set_engine_version(value);
        self
    }

    /// Whether `EngineVersion` is set.
    #[must_use]
    pub fn is_set_engine_version(&self) -> bool {
        self.engine_version.is_set()
    }

    /// Node count of the source cluster. `0` when not set.
    #[must_use]
    pub fn num_cache_nodes(&self) -> i32 {
        self.num_cache_nodes.unwrap_or_default()
    }

    /// Set `NumCacheNodes`.
    pub fn set_num_cache_nodes(&mut self, value: i32) {
        self.num_cache_nodes = Some(value);
    }

    /// Builder-style setter for `NumCacheNodes`.
    #[must_use]
    pub fn with_num_cache_nodes(mut self, value: i32) -> Self {
        self.set_num_cache_nodes(value);
        self
    }

    /// Whether `NumCacheNodes` is set.
    #[must_use]
    pub fn is_set_num_cache_nodes(&self) -> bool {
        self.num_cache_nodes.is_set()
    }

    /// Port of the source cluster. `0` when not set.
    #[must_use]
    pub fn port(&self) -> i32 {
        self.port.unwrap_or_default()
    }

    /// Set `Port`.
    pub fn set_port(&mut self, value: i32) {
        self.port = Some(value);
    }

    /// Builder-style setter for `Port`.
    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.set_port(value);
        self
    }

    /// Whether `Port` is set.
    #[must_use]
    pub fn is_set_port(&self) -> bool {
        self.port.is_set()
    }

    /// When the source cluster was created. The Unix epoch when not set.
    #[must_use]
    pub fn cache_cluster_create_time(&self) -> DateTime<Utc> {
        self.cache_cluster_create_time.unwrap_or_default()
    }

    /// Set `CacheClusterCreateTime`.
    pub fn set_cache_cluster_create_time(&mut self, value: DateTime<Utc>) {
        self.cache_cluster_create_time = Some(value);
    }

    /// Builder-style setter for `CacheClusterCreateTime`.
    #[must_use]
    pub fn with_cache_cluster_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.set_cache_cluster_create_time(value);
        self
    }

    /// Whether `CacheClusterCreateTime` is set.
    #[must_use]
    pub fn is_set_cache_cluster_create_time(&self) -> bool {
        self.cache_cluster_create_time.is_set()
    }
}

/// Reads [`Snapshot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotUnmarshaller;

impl SnapshotUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<Snapshot, UnmarshallError> {
        let mut value = Snapshot::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("SnapshotName", depth) {
                value.snapshot_name = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheClusterId", depth) {
                value.cache_cluster_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("SnapshotStatus", depth) {
                value.snapshot_status = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("SnapshotSource", depth) {
                value.snapshot_source = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheNodeType", depth) {
                value.cache_node_type = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("Engine", depth) {
                value.engine = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("EngineVersion", depth) {
                value.engine_version = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("NumCacheNodes", depth) {
                value.num_cache_nodes = ctx.read_member(&INT)?;
                continue;
            }
            if ctx.test_expression("Port", depth) {
                value.port = ctx.read_member(&INT)?;
                continue;
            }
            if ctx.test_expression("CacheClusterCreateTime", depth) {
                value.cache_cluster_create_time = ctx.read_member(&TIMESTAMP)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<Snapshot> for SnapshotUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<Snapshot>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<Snapshot>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}
