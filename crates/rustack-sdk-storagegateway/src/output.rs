//! Storage Gateway operation outputs.

use rustack_sdk_core::IsSet;
use rustack_sdk_protocol::unmarshall::{ListUnmarshaller, STRING, read_structure};
use rustack_sdk_protocol::{
    JsonUnmarshallerContext, StructureScope, UnmarshallError, Unmarshaller, UnmarshallerContext,
    XmlUnmarshallerContext,
};

use crate::types::{NetworkInterface, NetworkInterfaceUnmarshaller, VolumeInfo, VolumeInfoUnmarshaller};

static LIST_VOLUMES_OUTPUT_VOLUME_INFOS: ListUnmarshaller<VolumeInfoUnmarshaller> =
    ListUnmarshaller::new(VolumeInfoUnmarshaller);
static DESCRIBE_GATEWAY_INFORMATION_OUTPUT_GATEWAY_NETWORK_INTERFACES: ListUnmarshaller<NetworkInterfaceUnmarshaller> =
    ListUnmarshaller::new(NetworkInterfaceUnmarshaller);

/// Output of `CreateSnapshot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSnapshotOutput {
    volume_arn: Option<String>,
    snapshot_id: Option<String>,
}

impl CreateSnapshotOutput {
    /// Volume the snapshot was taken of. Empty when not set.
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

    /// EBS snapshot identifier, e.g. `snap-78e22663`. Empty when not set.
    #[must_use]
    pub fn snapshot_id(&self) -> &str {
        self.snapshot_id.as_deref().unwrap_or_default()
    }

    /// Set `SnapshotId`.
    pub fn set_snapshot_id(&mut self, value: impl Into<String>) {
        self.snapshot_id = Some(value.into());
    }

    /// Builder-style setter for `SnapshotId`.
    #[must_use]
    pub fn with_snapshot_id(mut self, value: impl Into<String>) -> Self {
        self.set_snapshot_id(value);
        self
    }

    /// Whether `SnapshotId` is set.
    #[must_use]
    pub fn is_set_snapshot_id(&self) -> bool {
        self.snapshot_id.is_set()
    }
}

/// Reads [`CreateSnapshotOutput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSnapshotOutputUnmarshaller;

impl CreateSnapshotOutputUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<CreateSnapshotOutput, UnmarshallError> {
        let mut value = CreateSnapshotOutput::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("VolumeARN", depth) {
                value.volume_arn = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("SnapshotId", depth) {
                value.snapshot_id = ctx.read_member(&STRING)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<CreateSnapshotOutput> for CreateSnapshotOutputUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<CreateSnapshotOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<CreateSnapshotOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// Output of `ListVolumes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVolumesOutput {
    gateway_arn: Option<String>,
    marker: Option<String>,
    volume_infos: Vec<VolumeInfo>,
}

impl ListVolumesOutput {
    /// Gateway the volumes belong to. Empty when not set.
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

    /// One entry per volume. Empty when not set.
    #[must_use]
    pub fn volume_infos(&self) -> &[VolumeInfo] {
        &self.volume_infos
    }

    /// Set `VolumeInfos`.
    pub fn set_volume_infos(&mut self, values: Vec<VolumeInfo>) {
        self.volume_infos = values;
    }

    /// Builder-style setter for `VolumeInfos`.
    #[must_use]
    pub fn with_volume_infos(mut self, values: Vec<VolumeInfo>) -> Self {
        self.volume_infos = values;
        self
    }

    /// Whether `VolumeInfos` is set.
    #[must_use]
    pub fn is_set_volume_infos(&self) -> bool {
        self.volume_infos.is_set()
    }
}

/// Reads [`ListVolumesOutput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListVolumesOutputUnmarshaller;

impl ListVolumesOutputUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<ListVolumesOutput, UnmarshallError> {
        let mut value = ListVolumesOutput::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("GatewayARN", depth) {
                value.gateway_arn = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("Marker", depth) {
                value.marker = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("VolumeInfos", depth) {
                value.volume_infos = ctx.read_member(&LIST_VOLUMES_OUTPUT_VOLUME_INFOS)?.unwrap_or_default();
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<ListVolumesOutput> for ListVolumesOutputUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<ListVolumesOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<ListVolumesOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// Output of `DescribeGatewayInformation`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeGatewayInformationOutput {
    gateway_arn: Option<String>,
    gateway_id: Option<String>,
    gateway_name: Option<String>,
    gateway_timezone: Option<String>,
    gateway_state: Option<String>,
    gateway_network_interfaces: Vec<NetworkInterface>,
    gateway_type: Option<String>,
    next_update_availability_date: Option<String>,
    last_software_update: Option<String>,
}

impl DescribeGatewayInformationOutput {
    /// ARN of the gateway. Empty when not set.
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

    /// Unique identifier of the gateway. Empty when not set.
    #[must_use]
    pub fn gateway_id(&self) -> &str {
        self.gateway_id.as_deref().unwrap_or_default()
    }

    /// Set `GatewayId`.
    pub fn set_gateway_id(&mut self, value: impl Into<String>) {
        self.gateway_id = Some(value.into());
    }

    /// Builder-style setter for `GatewayId`.
    #[must_use]
    pub fn with_gateway_id(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_id(value);
        self
    }

    /// Whether `GatewayId` is set.
    #[must_use]
    pub fn is_set_gateway_id(&self) -> bool {
        self.gateway_id.is_set()
    }

    /// Name of the gateway. Empty when not set.
    #[must_use]
    pub fn gateway_name(&self) -> &str {
        self.gateway_name.as_deref().unwrap_or_default()
    }

    /// Set `GatewayName`.
    pub fn set_gateway_name(&mut self, value: impl Into<String>) {
        self.gateway_name = Some(value.into());
    }

    /// Builder-style setter for `GatewayName`.
    #[must_use]
    pub fn with_gateway_name(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_name(value);
        self
    }

    /// Whether `GatewayName` is set.
    #[must_use]
    pub fn is_set_gateway_name(&self) -> bool {
        self.gateway_name.is_set()
    }

    /// Time zone the gateway runs its schedules in. Empty when not set.
    #[must_use]
    pub fn gateway_timezone(&self) -> &str {
        self.gateway_timezone.as_deref().unwrap_or_default()
    }

    /// Set `GatewayTimezone`.
    pub fn set_gateway_timezone(&mut self, value: impl Into<String>) {
        self.gateway_timezone = Some(value.into());
    }

    /// Builder-style setter for `GatewayTimezone`.
    #[must_use]
    pub fn with_gateway_timezone(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_timezone(value);
        self
    }

    /// Whether `GatewayTimezone` is set.
    #[must_use]
    pub fn is_set_gateway_timezone(&self) -> bool {
        self.gateway_timezone.is_set()
    }

    /// Either `RUNNING` or `SHUTDOWN`. Empty when not set.
    #[must_use]
    pub fn gateway_state(&self) -> &str {
        self.gateway_state.as_deref().unwrap_or_default()
    }

    /// Set `GatewayState`.
    pub fn set_gateway_state(&mut self, value: impl Into<String>) {
        self.gateway_state = Some(value.into());
    }

    /// Builder-style setter for `GatewayState`.
    #[must_use]
    pub fn with_gateway_state(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_state(value);
        self
    }

    /// Whether `GatewayState` is set.
    #[must_use]
    pub fn is_set_gateway_state(&self) -> bool {
        self.gateway_state.is_set()
    }

    /// Network interfaces of the gateway. Empty when not set.
    #[must_use]
    pub fn gateway_network_interfaces(&self) -> &[NetworkInterface] {
        &self.gateway_network_interfaces
    }

    /// Set `GatewayNetworkInterfaces`.
    pub fn set_gateway_network_interfaces(&mut self, values: Vec<NetworkInterface>) {
        self.gateway_network_interfaces = values;
    }

    /// Builder-style setter for `GatewayNetworkInterfaces`.
    #[must_use]
    pub fn with_gateway_network_interfaces(mut self, values: Vec<NetworkInterface>) -> Self {
        self.gateway_network_interfaces = values;
        self
    }

    /// Whether `GatewayNetworkInterfaces` is set.
    #[must_use]
    pub fn is_set_gateway_network_interfaces(&self) -> bool {
        self.gateway_network_interfaces.is_set()
    }

    /// Gateway type, e.g. `STORED` or `CACHED`. Empty when not set.
    #[must_use]
    pub fn gateway_type(&self) -> &str {
        self.gateway_type.as_deref().unwrap_or_default()
    }

    /// Set `GatewayType`.
    pub fn set_gateway_type(&mut self, value: impl Into<String>) {
        self.gateway_type = Some(value.into());
    }

    /// Builder-style setter for `GatewayType`.
    #[must_use]
    pub fn with_gateway_type(mut self, value: impl Into<String>) -> Self {
        self.set_gateway_type(value);
        self
    }

    /// Whether `GatewayType` is set.
    #[must_use]
    pub fn is_set_gateway_type(&self) -> bool {
        self.gateway_type.is_set()
    }

    /// When the next software update becomes available. Empty when not set.
    #[must_use]
    pub fn next_update_availability_date(&self) -> &str {
        self.next_update_availability_date.as_deref().unwrap_or_default()
    }

    /// Set `NextUpdateAvailabilityDate`.
    pub fn set_next_update_availability_date(&mut self, value: impl Into<String>) {
        self.next_update_availability_date = Some(value.into());
    }

    /// Builder-style setter for `NextUpdateAvailabilityDate`.
    #[must_use]
    pub fn with_next_update_availability_date(mut self, value: impl Into<String>) -> Self {
        self.set_next_update_availability_date(value);
        self
    }

    /// Whether `NextUpdateAvailabilityDate` is set.
    #[must_use]
    pub fn is_set_next_update_availability_date(&self) -> bool {
        self.next_update_availability_date.is_set()
    }

    /// When the last software update was applied. Empty when not set.
    #[must_use]
    pub fn last_software_update(&self) -> &str {
        self.last_software_update.as_deref().unwrap_or_default()
    }

    /// Set `LastSoftwareUpdate`.
    pub fn set_last_software_update(&mut self, value: impl Into<String>) {
        self.last_software_update = Some(value.into());
    }

    /// Builder-style setter for `LastSoftwareUpdate`.
    #[must_use]
    pub fn with_last_software_update(mut self, value: impl Into<String>) -> Self {
        self.set_last_software_update(value);
        self
    }

    /// Whether `LastSoftwareUpdate` is set.
    #[must_use]
    pub fn is_set_last_software_update(&self) -> bool {
        self.last_software_update.is_set()
    }
}

/// Reads [`DescribeGatewayInformationOutput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeGatewayInformationOutputUnmarshaller;

impl DescribeGatewayInformationOutputUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<DescribeGatewayInformationOutput, UnmarshallError> {
        let mut value = DescribeGatewayInformationOutput::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("GatewayARN", depth) {
                value.gateway_arn = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayId", depth) {
                value.gateway_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayName", depth) {
                value.gateway_name = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayTimezone", depth) {
                value.gateway_timezone = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayState", depth) {
                value.gateway_state = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayNetworkInterfaces", depth) {
                value.gateway_network_interfaces = ctx.read_member(&DESCRIBE_GATEWAY_INFORMATION_OUTPUT_GATEWAY_NETWORK_INTERFACES)?.unwrap_or_default();
                continue;
            }
            if ctx.test_expression("GatewayType", depth) {
                value.gateway_type = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("NextUpdateAvailabilityDate", depth) {
                value.next_update_availability_date = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("LastSoftwareUpdate", depth) {
                value.last_software_update = ctx.read_member(&STRING)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<DescribeGatewayInformationOutput> for DescribeGatewayInformationOutputUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<DescribeGatewayInformationOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<DescribeGatewayInformationOutput>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}
