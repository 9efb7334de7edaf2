//! ElastiCache operation results.

use rustack_sdk_core::IsSet;
use rustack_sdk_protocol::unmarshall::{ListUnmarshaller, STRING, read_structure};
use rustack_sdk_protocol::{
    JsonUnmarshallerContext, StructureScope, UnmarshallError, Unmarshaller, UnmarshallerContext,
    XmlUnmarshallerContext,
};

use crate::types::{CacheCluster, CacheClusterUnmarshaller, Snapshot, SnapshotUnmarshaller};

static DESCRIBE_CACHE_CLUSTERS_RESULT_CACHE_CLUSTERS: ListUnmarshaller<CacheClusterUnmarshaller> =
    ListUnmarshaller::new(CacheClusterUnmarshaller).with_member_name("CacheCluster");

/// Result of `CreateCacheCluster`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCacheClusterResult {
    cache_cluster: Option<CacheCluster>,
}

impl CreateCacheClusterResult {
    /// The new cluster. `None` when not set.
    #[must_use]
    pub fn cache_cluster(&self) -> Option<&CacheCluster> {
        self.cache_cluster.as_ref()
    }

    /// Set `CacheCluster`.
    pub fn set_cache_cluster(&mut self, value: CacheCluster) {
        self.cache_cluster = Some(value);
    }

    /// Builder-style setter for `CacheCluster`.
    #[must_use]
    pub fn with_cache_cluster(mut self, value: CacheCluster) -> Self {
        self.set_cache_cluster(value);
        self
    }

    /// Whether `CacheCluster` is set.
    #[must_use]
    pub fn is_set_cache_cluster(&self) -> bool {
        self.cache_cluster.is_set()
    }
}

/// Reads [`CreateCacheClusterResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateCacheClusterResultUnmarshaller;

impl CreateCacheClusterResultUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<CreateCacheClusterResult, UnmarshallError> {
        let mut value = CreateCacheClusterResult::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("CacheCluster", depth) {
                value.cache_cluster = ctx.read_member(&CacheClusterUnmarshaller)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<CreateCacheClusterResult> for CreateCacheClusterResultUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<CreateCacheClusterResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::RESULT_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<CreateCacheClusterResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// Result of `DescribeCacheClusters`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeCacheClustersResult {
    marker: Option<String>,
    cache_clusters: Vec<CacheCluster>,
}

impl DescribeCacheClustersResult {
    /// Pagination token for the next call. Empty when not set.
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

    /// Matching clusters. Empty when not set.
    #[must_use]
    pub fn cache_clusters(&self) -> &[CacheCluster] {
        &self.cache_clusters
    }

    /// Set `CacheClusters`.
    pub fn set_cache_clusters(&mut self, values: Vec<CacheCluster>) {
        self.cache_clusters = values;
    }

    /// Builder-style setter for `CacheClusters`.
    #[must_use]
    pub fn with_cache_clusters(mut self, values: Vec<CacheCluster>) -> Self {
        self.cache_clusters = values;
        self
    }

    /// Whether `CacheClusters` is set.
    #[must_use]
    pub fn is_set_cache_clusters(&self) -> bool {
        self.cache_clusters.is_set()
    }
}

/// Reads [`DescribeCacheClustersResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeCacheClustersResultUnmarshaller;

impl DescribeCacheClustersResultUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<DescribeCacheClustersResult, UnmarshallError> {
        let mut value = DescribeCacheClustersResult::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("Marker", depth) {
                value.marker = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("CacheClusters", depth) {
                value.cache_clusters = ctx.read_member(&DESCRIBE_CACHE_CLUSTERS_RESULT_CACHE_CLUSTERS)?.unwrap_or_default();
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<DescribeCacheClustersResult> for DescribeCacheClustersResultUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<DescribeCacheClustersResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::RESULT_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<DescribeCacheClustersResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// Result of `RebootCacheCluster`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebootCacheClusterResult {
    cache_cluster: Option<CacheCluster>,
}

impl RebootCacheClusterResult {
    /// The cluster being rebooted. `None` when not set.
    #[must_use]
    pub fn cache_cluster(&self) -> Option<&CacheCluster> {
        self.cache_cluster.as_ref()
    }

    /// Set `CacheCluster`.
    pub fn set_cache_cluster(&mut self, value: CacheCluster) {
        self.cache_cluster = Some(value);
    }

    /// Builder-style setter for `CacheCluster`.
    #[must_use]
    pub fn with_cache_cluster(mut self, value: CacheCluster) -> Self {
        self.set_cache_cluster(value);
        self
    }

    /// Whether `CacheCluster` is set.
    #[must_use]
    pub fn is_set_cache_cluster(&self) -> bool {
        self.cache_cluster.is_set()
    }
}

/// Reads [`RebootCacheClusterResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RebootCacheClusterResultUnmarshaller;

impl RebootCacheClusterResultUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<RebootCacheClusterResult, UnmarshallError> {
        let mut value = RebootCacheClusterResult::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("CacheCluster", depth) {
                value.cache_cluster = ctx.read_member(&CacheClusterUnmarshaller)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<RebootCacheClusterResult> for RebootCacheClusterResultUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<RebootCacheClusterResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::RESULT_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<RebootCacheClusterResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// Result of `CopySnapshot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopySnapshotResult {
    snapshot: Option<Snapshot>,
}

impl CopySnapshotResult {
    /// The copied snapshot. `None` when not set.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Set `Snapshot`.
    pub fn set_snapshot(&mut self, value: Snapshot) {
        self.snapshot = Some(value);
    }

    /// Builder-style setter for `Snapshot`.
    #[must_use]
    pub fn with_snapshot(mut self, value: Snapshot) -> Self {
        self.set_snapshot(value);
        self
    }

    /// Whether `Snapshot` is set.
    #[must_use]
    pub fn is_set_snapshot(&self) -> bool {
        self.snapshot.is_set()
    }
}

/// Reads [`CopySnapshotResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CopySnapshotResultUnmarshaller;

impl CopySnapshotResultUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<CopySnapshotResult, UnmarshallError> {
        let mut value = CopySnapshotResult::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("Snapshot", depth) {
                value.snapshot = ctx.read_member(&SnapshotUnmarshaller)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<CopySnapshotResult> for CopySnapshotResultUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<CopySnapshotResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::RESULT_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<CopySnapshotResult>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}
