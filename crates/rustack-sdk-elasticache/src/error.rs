//! ElastiCache faults.

use rustack_sdk_runtime::SdkError;

rustack_sdk_core::fault_codes! {
    /// Error codes ElastiCache returns in the `<Error><Code>` element.
    ///
    /// Codes outside this table surface as
    /// [`ErrorCode::Unhandled`](rustack_sdk_core::ErrorCode::Unhandled) with
    /// the raw code preserved.
    #[non_exhaustive]
    pub enum ElastiCacheFault for "ElastiCache" {
        /// The named cluster does not exist.
        CacheClusterNotFoundException => "CacheClusterNotFound",
        /// A cluster with the requested identifier already exists.
        CacheClusterAlreadyExistsException => "CacheClusterAlreadyExists",
        /// The cluster is not in the `available` state.
        InvalidCacheClusterStateException => "InvalidCacheClusterState",
        /// The requested node type has no capacity left in the zone.
        InsufficientCacheClusterCapacityException => "InsufficientCacheClusterCapacity",
        /// The account has reached its cluster quota.
        ClusterQuotaForCustomerExceededException => "ClusterQuotaForCustomerExceeded",
        /// The request would exceed the per-cluster node quota.
        NodeQuotaForClusterExceededException => "NodeQuotaForClusterExceeded",
        /// The request would exceed the per-account node quota.
        NodeQuotaForCustomerExceededException => "NodeQuotaForCustomerExceeded",
        /// The named parameter group does not exist.
        CacheParameterGroupNotFoundException => "CacheParameterGroupNotFound",
        /// The named security group does not exist.
        CacheSecurityGroupNotFoundException => "CacheSecurityGroupNotFound",
        /// The named subnet group does not exist.
        CacheSubnetGroupNotFoundException => "CacheSubnetGroupNotFoundFault",
        /// The VPC network is in an invalid state.
        InvalidVPCNetworkStateException => "InvalidVPCNetworkStateFault",
        /// The named replication group does not exist.
        ReplicationGroupNotFoundException => "ReplicationGroupNotFoundFault",
        /// The replication group is not in the `available` state.
        InvalidReplicationGroupStateException => "InvalidReplicationGroupState",
        /// A snapshot with the requested name already exists.
        SnapshotAlreadyExistsException => "SnapshotAlreadyExistsFault",
        /// The named snapshot does not exist.
        SnapshotNotFoundException => "SnapshotNotFoundFault",
        /// The account has reached its snapshot quota.
        SnapshotQuotaExceededException => "SnapshotQuotaExceededFault",
        /// The snapshot is not in the `available` state.
        InvalidSnapshotStateException => "InvalidSnapshotState",
        /// The engine does not support snapshots.
        SnapshotFeatureNotSupportedException => "SnapshotFeatureNotSupportedFault",
        /// A parameter value is out of range.
        InvalidParameterValueException => "InvalidParameterValue",
        /// Two parameters cannot be used together.
        InvalidParameterCombinationException => "InvalidParameterCombination",
    }
}

/// Error returned by every ElastiCache operation.
pub type ElastiCacheError = SdkError<ElastiCacheFault>;
