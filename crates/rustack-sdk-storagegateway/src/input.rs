//! Storage Gateway operation inputs.

use rustack_sdk_core::IsSet;
use rustack_sdk_core::shape::{self, FieldDescriptor, Shape};

/// Input of `CreateSnapshot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSnapshotInput {
    volume_arn: Option<String>,
    snapshot_description: Option<String>,
}

impl CreateSnapshotInput {
    /// Volume to snapshot. Empty when not set.
    #[must_use]
    pub fn volume_arn(&self) -> &str {
        self.volume_arn.as_deref().unwrap_or_default()
    }

    /// Set `VolumeARN`.
    pub fn set_volume_arn(&mut self, value: impl Into<String>) {
        self.volume_arn = Some(value.into());
    }

    /// Builder-style setter for `VolumeARN`.
    #[must_use]
    pub fn with_volume_arn(mut self, value: impl Into<String>) -> Self {
        self.set_volume_arn(value);
        self
    }

    /// Whether `VolumeARN` is set.
    #[must_use]
    pub fn is_set_volume_arn(&self) -> bool {
        self.volume_arn.is_set()
    }

    /// Description shown in the EC2 console. Empty when not set.
    #[must_use]
    pub fn snapshot_description(&self) -> &str {
        self.snapshot_description.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotDescription`.
    pub fn set_snapshot_description(&mut self, value: impl Into<String>) {
        self.snapshot_description = Some(value.into());
    }

    /// Builder-style setter for `SnapshotDescription`.
    #[must_use]
    pub fn with_snapshot_description(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_description(value);
        self
    }

    /// Whether `SnapshotDescription` is set.
    #[must_use]
    pub fn is_set_snapshot_description(&self) -> bool {
        self.snapshot_description.is_set()
    }
}

impl Shape for CreateSnapshotInput {
    const SHAPE_NAME: &'static str = "CreateSnapshotInput";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("VolumeARN", |s: &Self| shape::scalar(s.volume_arn.as_ref())).required(),
        FieldDescriptor::new("SnapshotDescription", |s: &Self| shape::scalar(s.snapshot_description.as_ref())).required(),
    ];
}

/// Input of `ListVolumes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVolumesInput {
    gateway_arn: Option<String>,
    marker: Option<String>,
    limit: Option<i32>,
}

impl ListVolumesInput {
    /// Gateway whose volumes are listed. Empty when not set.
    #[must_use]
    pub fn gateway_arn(&self) -> &str {
        self.gateway_arn.as_deref().unwrap_or_default()
    }

    /// Set `GatewayARN`.
    pub fn set_gateway_arn(&mut self, value: impl Into<String>) {
        self.gateway_arn = Some(value.into());
    }

    /// Builder-style setter for `GatewayARN`.
    #[must_use]
    pub fn with_gateway_arn(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_arn(value);
        self
    }

    /// Whether `GatewayARN` is set.
    #[must_use]
    pub fn is_set_gateway_arn(&self) -> bool {
        self.gateway_arn.is_set()
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

    /// Page size. `0` when not set.
    #[must_use]
    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or_default()
    }

    /// Set `Limit`.
    pub fn set_limit(&mut self, value: i32) {
        self.limit = Some(value);
    }

    /// Builder-style setter for `Limit`.
    #[must_use]
    pub fn with_limit(mut self, value: i32) -> Self {
        self.set_limit(value);
        self
    }

    /// Whether `Limit` is set.
    #[must_use]
    pub fn is_set_limit(&self) -> bool {
        self.limit.is_set()
    }
}

impl Shape for ListVolumesInput {
    const SHAPE_NAME: &'static str = "ListVolumesInput";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("GatewayARN", |s| shape::scalar(s.gateway_arn.as_ref())),
        FieldDescriptor::new("Marker", |s| shape::scalar(s.marker.as_ref())),
        FieldDescriptor::new("Limit", |s| shape::scalar(s.limit.as_ref())),
    ];
}

/// Input of `DescribeGatewayInformation`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeGatewayInformationInput {
    gateway_arn: Option<String>,
}

impl DescribeGatewayInformationInput {
    /// Gateway to describe. Empty when not set.
    #[must_use]
    pub fn gateway_arn(&self) -> &str {
        self.gateway_arn.as_deref().unwrap_or_default()
    }

    /// Set `GatewayARN`.
    pub fn set_gateway_arn(&mut self, value: impl Into<String>) {
        self.gateway_arn = Some(value.into());
    }

    /// Builder-style setter for `GatewayARN`.
    #[must_use]
    pub fn with_gateway_arn(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_arn(value);
        self
    }

    /// Whether `GatewayARN` is set.
    #[must_use]
    pub fn is_set_gateway_arn(&self) -> bool {
        self.gateway_arn.is_set()
    }
}

impl Shape for DescribeGatewayInformationInput {
    const SHAPE_NAME: &'static str = "DescribeGatewayInformationInput";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::new("GatewayARN", |s: &Self| shape::scalar(s.gateway_arn.as_ref())).required(),
    ];
}
