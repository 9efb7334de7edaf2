//! ElastiCache operation inputs.

use rustack_sdk_core::IsSet;
use rustack_sdk_core::shape::{self, FieldDescriptor, Shape};

/// Input of `CreateCacheCluster`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCacheClusterRequest {
    cache_cluster_id: Option<String>,
    replication_group_id: Option<String>,
    num_cache_nodes: Option<i32>,
    cache_node_type: Option<String>,
    engine: Option<String>,
    engine_version: Option<String>,
    cache_parameter_group_name: Option<String>,
    cache_subnet_group_name: Option<String>,
    cache_security_group_names: Vec<String>,
    security_group_ids: Vec<String>,
    snapshot_name: Option<String>,
    preferred_availability_zone: Option<String>,
    port: Option<i32>,
    auto_minor_version_upgrade: Option<bool>,
}

impl CreateCacheClusterRequest {
    /// Identifier of the new cluster. Empty when not set.
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

    /// Replication group to join as a read replica. Empty when not set.
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

    /// Number of nodes to create. `0` when not set.
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

    /// Node type, e.g. `cache.m1.small`. Empty when not set.
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

    /// Cache engine. Empty when not set.
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

    /// Parameter group to associate. Empty when not set.
    #[must_use]
    pub fn cache_parameter_group_name(&self) -> &str {
        self.cache_parameter_group_name.as_deref().unwrap_or_default()
    }

    /// Set `CacheParameterGroupName`.
    pub fn set_cache_parameter_group_name(&mut self, value: impl Into<String>) {
        self.cache_parameter_group_name = Some(value.into());
    }

    /// Builder-style setter for `CacheParameterGroupName`.
    #[must_use]
    pub fn with_cache_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.set_cache_parameter_group_name(value);
        self
    }

    /// Whether `CacheParameterGroupName` is set.
    #[must_use]
    pub fn is_set_cache_parameter_group_name(&self) -> bool {
        self.cache_parameter_group_name.is_set()
    }

    /// Subnet group for a VPC cluster. Empty when not set.
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

    /// Security groups for a non-VPC cluster. Empty when not set.
    #[must_use]
    pub fn cache_security_group_names(&self) -> &[String] {
        &self.cache_security_group_names
    }

    /// Set `CacheSecurityGroupNames`.
    pub fn set_cache_security_group_names(&mut self, values: Vec<String>) {
        self.cache_security_group_names = values;
    }

    /// Builder-style setter for `CacheSecurityGroupNames`.
    #[must_use]
    pub fn with_cache_security_group_names(mut self, values: Vec<String>) -> Self {
        self.cache_security_group_names = values;
        self
    }

    /// Whether `CacheSecurityGroupNames` is set.
    #[must_use]
    pub fn is_set_cache_security_group_names(&self) -> bool {
        self.cache_security_group_names.is_set()
    }

    /// VPC security groups. Empty when not set.
    #[must_use]
    pub fn security_group_ids(&self) -> &[String] {
        &self.security_group_ids
    }

    /// Set `SecurityGroupIds`.
    pub fn set_security_group_ids(&mut self, values: Vec<String>) {
        self.security_group_ids = values;
    }

    /// Builder-style setter for `SecurityGroupIds`.
    #[must_use]
    pub fn with_security_group_ids(mut self, values: Vec<String>) -> Self {
        self.security_group_ids = values;
        self
    }

    /// Whether `SecurityGroupIds` is set.
    #[must_use]
    pub fn is_set_security_group_ids(&self) -> bool {
        self.security_group_ids.is_set()
    }

    /// Snapshot to restore data from. Empty when not set.
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

    /// Availability zone to create the nodes in. Empty when not set.
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

    /// Port the nodes accept connections on. `0` when not set.
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
}

impl Shape for CreateCacheClusterRequest {
    const SHAPE_NAME: &'static str = "CreateCacheClusterRequest";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("CacheClusterId", |s: &Self| shape::scalar(s.cache_cluster_id.as_ref())).required(),
        FieldDescriptor::new("ReplicationGroupId", |s| shape::scalar(s.replication_group_id.as_ref())),
        FieldDescriptor::new("NumCacheNodes", |s| shape::scalar(s.num_cache_nodes.as_ref())),
        FieldDescriptor::new("CacheNodeType", |s| shape::scalar(s.cache_node_type.as_ref())),
        FieldDescriptor::new("Engine", |s| shape::scalar(s.engine.as_ref())),
        FieldDescriptor::new("EngineVersion", |s| shape::scalar(s.engine_version.as_ref())),
        FieldDescriptor::new("CacheParameterGroupName", |s| shape::scalar(s.cache_parameter_group_name.as_ref())),
        FieldDescriptor::new("CacheSubnetGroupName", |s| shape::scalar(s.cache_subnet_group_name.as_ref())),
        FieldDescriptor::new("CacheSecurityGroupNames", |s: &Self| shape::scalar_list(&s.cache_security_group_names)).location_name("CacheSecurityGroupName"),
        FieldDescriptor::new("SecurityGroupIds", |s: &Self| shape::scalar_list(&s.security_group_ids)).location_name("SecurityGroupId"),
        FieldDescriptor::new("SnapshotName", |s| shape::scalar(s.snapshot_name.as_ref())),
        FieldDescriptor::new("PreferredAvailabilityZone", |s| shape::scalar(s.preferred_availability_zone.as_ref())),
        FieldDescriptor::new("Port", |s| shape::scalar(s.port.as_ref())),
        FieldDescriptor::new("AutoMinorVersionUpgrade", |s| shape::scalar(s.auto_minor_version_upgrade.as_ref())),
    ];
}

/// Input of `DescribeCacheClusters`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeCacheClustersRequest {
    cache_cluster_id: Option<String>,
    max_records: Option<i32>,
    marker: Option<String>,
    show_cache_node_info: Option<bool>,
}

impl DescribeCacheClustersRequest {
    /// Restrict the result to one cluster. Empty when not set.
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

    /// Page size. `0` when not set.
    #[must_use]
    pub fn max_records(&self) -> i32 {
        self.max_records.unwrap_or_default()
    }

    /// Set `MaxRecords`.
    pub fn set_max_records(&mut self, value: i32) {
        self.max_records = Some(value);
    }

    /// Builder-style setter for `MaxRecords`.
    #[must_use]
    pub fn with_max_records(mut self, value: i32) -> Self {
        self.set_max_records(value);
        self
    }

    /// Whether `MaxRecords` is set.
    #[must_use]
    pub fn is_set_max_records(&self) -> bool {
        self.max_records.is_set()
    }

    /// Pagination token from a previous call. Empty when not set.
    #[must_use]
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or_default()
    }

    /// Set `Marker`.
    pub fn set_marker(&mut self, value: impl Into<String>) {
        self.marker = Some(value.into());
    }

    /// Builder-style setter for `Marker`.
    #[must_use]
    pub fn with_marker(mut self, value: impl Into<String>) -> Self {
        self.set_marker(value);
        self
    }

    /// Whether `Marker` is set.
    #[must_use]
    pub fn is_set_marker(&self) -> bool {
        self.marker.is_set()
    }

    /// Whether to include node details. `false` when not set.
    #[must_use]
    pub fn show_cache_node_info(&self) -> bool {
        self.show_cache_node_info.unwrap_or_default()
    }

    /// Set `ShowCacheNodeInfo`.
    pub fn set_show_cache_node_info(&mut self, value: bool) {
        self.show_cache_node_info = Some(value);
    }

    /// Builder-style setter for `ShowCacheNodeInfo`.
    #[must_use]
    pub fn with_show_cache_node_info(mut self, value: bool) -> Self {
        self.set_show_cache_node_info(value);
        self
    }

    /// Whether `ShowCacheNodeInfo` is set.
    #[must_use]
    pub fn is_set_show_cache_node_info(&self) -> bool {
        self.show_cache_node_info.is_set()
    }
}

impl Shape for DescribeCacheClustersRequest {
    const SHAPE_NAME: &'static str = "DescribeCacheClustersRequest";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("CacheClusterId", |s| shape::scalar(s.cache_cluster_id.as_ref())),
        FieldDescriptor::new("MaxRecords", |s| shape::scalar(s.max_records.as_ref())),
        FieldDescriptor::new("Marker", |s| shape::scalar(s.marker.as_ref())),
        FieldDescriptor::new("ShowCacheNodeInfo", |s| shape::scalar(s.show_cache_node_info.as_ref())),
    ];
}

/// Input of `RebootCacheCluster`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebootCacheClusterRequest {
    cache_cluster_id: Option<String>,
    cache_node_ids_to_reboot: Vec<String>,
}

impl RebootCacheClusterRequest {
    /// Cluster to reboot. Empty when not set.
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

    /// Nodes to reboot. Empty when not set.
    #[must_use]
    pub fn cache_node_ids_to_reboot(&self) -> &[String] {
        &self.cache_node_ids_to_reboot
    }

    /// Set `CacheNodeIdsToReboot`.
    pub fn set_cache_node_ids_to_reboot(&mut self, values: Vec<String>) {
        self.cache_node_ids_to_reboot = values;
    }

    /// Builder-style setter for `CacheNodeIdsToReboot`.
    #[must_use]
    pub fn with_cache_node_ids_to_reboot(mut self, values: Vec<String>) -> Self {
        self.cache_node_ids_to_reboot = values;
        self
    }

    /// Whether `CacheNodeIdsToReboot` is set.
    #[must_use]
    pub fn is_set_cache_node_ids_to_reboot(&self) -> bool {
        self.cache_node_ids_to_reboot.is_set()
    }
}

impl Shape for RebootCacheClusterRequest {
    const SHAPE_NAME: &'static str = "RebootCacheClusterRequest";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("CacheClusterId", |s: &Self| shape::scalar(s.cache_cluster_id.as_ref())).required(),
        FieldDescriptor::new("CacheNodeIdsToReboot", |s: &Self| shape::scalar_list(&s.cache_node_ids_to_reboot)).required(),
    ];
}

/// Input of `CopySnapshot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopySnapshotRequest {
    source_snapshot_name: Option<String>,
    target_snapshot_name: Option<String>,
}

impl CopySnapshotRequest {
    /// Snapshot to copy. Empty when not set.
    #[must_use]
    pub fn source_snapshot_name(&self) -> &str {
        self.source_snapshot_name.as_deref().unwrap_or_default()
    }

    /// Set `SourceSnapshotName`.
    pub fn set_source_snapshot_name(&mut self, value: impl Into<String>) {
        self.source_snapshot_name = Some(value.into());
    }

    /// Builder-style setter for `SourceSnapshotName`.
    #[must_use]
    pub fn with_source_snapshot_name(mut self, value: impl Into<String>) -> Self {
        self.set_source_snapshot_name(value);
        self
    }

    /// Whether `SourceSnapshotName` is set.
    #[must_use]
    pub fn is_set_source_snapshot_name(&self) -> bool {
        self.source_snapshot_name.is_set()
    }

    /// Name of the copy. Empty when not set.
    #[must_use]
    pub fn target_snapshot_name(&self) -> &str {
        self.target_snapshot_name.as_deref().unwrap_or_default()
    }

    /// Set `TargetSnapshotName`.
    pub fn set_target_snapshot_name(&mut self, value: impl Into<String>) {
        self.target_snapshot_name = Some(value.into());
    }

    /// Builder-style setter for `TargetSnapshotName`.
    #[must_use]
    pub fn with_target_snapshot_name(mut self, value: impl Into<String>) -> Self {
        self.set_target_snapshot_name(value);
        self
    }

    /// Whether `TargetSnapshotName` is set.
    #[must_use]
    pub fn is_set_target_snapshot_name(&self) -> bool {
        self.target_snapshot_name.is_set()
    }
}

impl Shape for CopySnapshotRequest {
    const SHAPE_NAME: &'static str = "CopySnapshotRequest";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("SourceSnapshotName", |s: &Self| shape::scalar(s.source_snapshot_name.as_ref())).required(),
        FieldDescriptor::new("TargetSnapshotName", |s: &Self| shape::scalar(s.target_snapshot_name.as_ref())).required(),
    ];
}
