//! Shared Storage Gateway data types.

use rustack_sdk_core::IsSet;
use rustack_sdk_protocol::unmarshall::{LONG, STRING, read_structure};
use rustack_sdk_protocol::{
    JsonUnmarshallerContext, StructureScope, UnmarshallError, Unmarshaller, UnmarshallerContext,
    XmlUnmarshallerContext,
};

/// Summary of one gateway volume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeInfo {
    volume_arn: Option<String>,
    volume_id: Option<String>,
    gateway_arn: Option<String>,
    gateway_id: Option<String>,
    volume_type: Option<String>,
    volume_size_in_bytes: Option<i64>,
}

impl VolumeInfo {
    /// ARN of the volume. Empty when not set.
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

    /// Unique identifier of the volume. Empty when not set.
    #[must_use]
    pub fn volume_id(&self) -> &str {
        self.volume_id.as_deref().unwrap_or_default()
    }

    /// Set `VolumeId`.
    pub fn set_volume_id(&mut self, value: impl Into<String>) {
        self.volume_id = Some(value.into());
    }

    /// Builder-style setter for `VolumeId`.
    #[must_use]
    pub fn with_volume_id(mut self, value: impl Into<String>) -> Self {
        self.set_volume_id(value);
        self
    }

    /// Whether `VolumeId` is set.
    #[must_use]
    pub fn is_set_volume_id(&self) -> bool {
        self.volume_id.is_set()
    }

    /// ARN of the gateway the volume belongs to. Empty when not set.
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

    /// Either `STORED` or `CACHED`. Empty when not set.
    #[must_use]
    pub fn volume_type(&self) -> &str {
        self.volume_type.as_deref().unwrap_or_default()
    }

    /// Set `VolumeType`.
    pub fn set_volume_type(&mut self, value: impl Into<String>) {
        self.volume_type = Some(value.into());
    }

    /// Builder-style setter for `VolumeType`.
    #[must_use]
    pub fn with_volume_type(mut self, value: impl Into<String>) -> Self {
        self.set_volume_type(value);
        self
    }

    /// Whether `VolumeType` is set.
    #[must_use]
    pub fn is_set_volume_type(&self) -> bool {
        self.volume_type.is_set()
    }

    /// Size of the volume in bytes. `0` when not set.
    #[must_use]
    pub fn volume_size_in_bytes(&self) -> i64 {
        self.volume_size_in_bytes.unwrap_or_default()
    }

    /// Set `VolumeSizeInBytes`.
    pub fn set_volume_size_in_bytes(&mut self, value: i64) {
        self.volume_size_in_bytes = Some(value);
    }

    /// Builder-style setter for `VolumeSizeInBytes`.
    #[must_use]
    pub fn with_volume_size_in_bytes(mut self, value: i64) -> Self {
        self.set_volume_size_in_bytes(value);
        self
    }

    /// Whether `VolumeSizeInBytes` is set.
    #[must_use]
    pub fn is_set_volume_size_in_bytes(&self) -> bool {
        self.volume_size_in_bytes.is_set()
    }
}

/// Reads [`VolumeInfo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeInfoUnmarshaller;

impl VolumeInfoUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<VolumeInfo, UnmarshallError> {
        let mut value = VolumeInfo::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("VolumeARN", depth) {
                value.volume_arn = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("VolumeId", depth) {
                value.volume_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayARN", depth) {
                value.gateway_arn = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("GatewayId", depth) {
                value.gateway_id = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("VolumeType", depth) {
                value.volume_type = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("VolumeSizeInBytes", depth) {
                value.volume_size_in_bytes = ctx.read_member(&LONG)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<VolumeInfo> for VolumeInfoUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<VolumeInfo>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<VolumeInfo>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}

/// A network interface of a gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkInterface {
    ipv4_address: Option<String>,
    mac_address: Option<String>,
    ipv6_address: Option<String>,
}

impl NetworkInterface {
    /// IPv4 address of the interface. Empty when not set.
    #[must_use]
    pub fn ipv4_address(&self) -> &str {
        self.ipv4_address.as_deref().unwrap_or_default()
    }

    /// Set `Ipv4Address`.
    pub fn set_ipv4_address(&mut self, value: impl Into<String>) {
        self.ipv4_address = Some(value.into());
    }

    /// Builder-style setter for `Ipv4Address`.
    #[must_use]
    pub fn with_ipv4_address(mut self, value: impl Into<String>) -> Self {
        self.set_ipv4_address(value);
        self
    }

    /// Whether `Ipv4Address` is set.
    #[must_use]
    pub fn is_set_ipv4_address(&self) -> bool {
        self.ipv4_address.is_set()
    }

    /// MAC address of the interface. Empty when not set.
    #[must_use]
    pub fn mac_address(&self) -> &str {
        self.mac_address.as_deref().unwrap_or_default()
    }

    /// Set `MacAddress`.
    pub fn set_mac_address(&mut self, value: impl Into<String>) {
        self.mac_address = Some(value.into());
    }

    /// Builder-style setter for `MacAddress`.
    #[must_use]
    pub fn with_mac_address(mut self, value: impl Into<String>) -> Self {
        self.set_mac_address(value);
        self
    }

    /// Whether `MacAddress` is set.
    #[must_use]
    pub fn is_set_mac_address(&self) -> bool {
        self.mac_address.is_set()
    }

    /// IPv6 address of the interface. Empty when not set.
    #[must_use]
    pub fn ipv6_address(&self) -> &str {
        self.ipv6_address.as_deref().unwrap_or_default()
    }

    /// Set `Ipv6Address`.
    pub fn set_ipv6_address(&mut self, value: impl Into<String>) {
        self.ipv6_address = Some(value.into());
    }

    /// Builder-style setter for `Ipv6Address`.
    #[must_use]
    pub fn with_ipv6_address(mut self, value: impl Into<String>) -> Self {
        self.set_ipv6_address(value);
        self
    }

    /// Whether `Ipv6Address` is set.
    #[must_use]
    pub fn is_set_ipv6_address(&self) -> bool {
        self.ipv6_address.is_set()
    }
}

/// Reads [`NetworkInterface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkInterfaceUnmarshaller;

impl NetworkInterfaceUnmarshaller {
    fn read<C: UnmarshallerContext>(
        ctx: &mut C,
        scope: &StructureScope,
    ) -> Result<NetworkInterface, UnmarshallError> {
        let mut value = NetworkInterface::default();
        let depth = scope.target_depth();
        while scope.next(ctx)? {
            if ctx.test_expression("Ipv4Address", depth) {
                value.ipv4_address = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("MacAddress", depth) {
                value.mac_address = ctx.read_member(&STRING)?;
                continue;
            }
            if ctx.test_expression("Ipv6Address", depth) {
                value.ipv6_address = ctx.read_member(&STRING)?;
            }
        }
        Ok(value)
    }
}

impl Unmarshaller<NetworkInterface> for NetworkInterfaceUnmarshaller {
    fn unmarshall_xml(
        &self,
        ctx: &mut XmlUnmarshallerContext<'_>,
    ) -> Result<Option<NetworkInterface>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }

    fn unmarshall_json(
        &self,
        ctx: &mut JsonUnmarshallerContext,
    ) -> Result<Option<NetworkInterface>, UnmarshallError> {
        read_structure(ctx, StructureScope::STRUCTURE_LEVELS, Self::read)
    }
}
