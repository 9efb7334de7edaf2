//! Static operation descriptors.

use rustack_sdk_protocol::{JsonMarshaller, JsonResponseUnmarshaller, JsonVersion};
use rustack_sdk_runtime::Operation;

use crate::input::{CreateSnapshotInput, DescribeGatewayInformationInput, ListVolumesInput};
use crate::output::{
    CreateSnapshotOutput, CreateSnapshotOutputUnmarshaller, DescribeGatewayInformationOutput,
    DescribeGatewayInformationOutputUnmarshaller, ListVolumesOutput, ListVolumesOutputUnmarshaller,
};

/// Prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "StorageGateway_20130630";

const SERVICE_NAME: &str = "StorageGateway";

static CREATE_SNAPSHOT_MARSHALLER: JsonMarshaller<CreateSnapshotInput> =
    JsonMarshaller::new(SERVICE_NAME, TARGET_PREFIX, "CreateSnapshot").with_version(JsonVersion::V1_1);
static CREATE_SNAPSHOT_UNMARSHALLER: JsonResponseUnmarshaller<CreateSnapshotOutputUnmarshaller> =
    JsonResponseUnmarshaller::new(CreateSnapshotOutputUnmarshaller);

/// `CreateSnapshot`.
pub static CREATE_SNAPSHOT: Operation<CreateSnapshotInput, CreateSnapshotOutput> = Operation::new(
    "CreateSnapshot",
    &CREATE_SNAPSHOT_MARSHALLER,
    &CREATE_SNAPSHOT_UNMARSHALLER,
);

static LIST_VOLUMES_MARSHALLER: JsonMarshaller<ListVolumesInput> =
    JsonMarshaller::new(SERVICE_NAME, TARGET_PREFIX, "ListVolumes").with_version(JsonVersion::V1_1);
static LIST_VOLUMES_UNMARSHALLER: JsonResponseUnmarshaller<ListVolumesOutputUnmarshaller> =
    JsonResponseUnmarshaller::new(ListVolumesOutputUnmarshaller);

/// `ListVolumes`.
pub static LIST_VOLUMES: Operation<ListVolumesInput, ListVolumesOutput> = Operation::new(
    "ListVolumes",
    &LIST_VOLUMES_MARSHALLER,
    &LIST_VOLUMES_UNMARSHALLER,
);

static DESCRIBE_GATEWAY_INFORMATION_MARSHALLER: JsonMarshaller<DescribeGatewayInformationInput> =
    JsonMarshaller::new(SERVICE_NAME, TARGET_PREFIX, "DescribeGatewayInformation")
        .with_version(JsonVersion::V1_1);
static DESCRIBE_GATEWAY_INFORMATION_UNMARSHALLER: JsonResponseUnmarshaller<
    DescribeGatewayInformationOutputUnmarshaller,
> = JsonResponseUnmarshaller::new(DescribeGatewayInformationOutputUnmarshaller);

/// `DescribeGatewayInformation`.
pub static DESCRIBE_GATEWAY_INFORMATION: Operation<
    DescribeGatewayInformationInput,
    DescribeGatewayInformationOutput,
> = Operation::new(
    "DescribeGatewayInformation",
    &DESCRIBE_GATEWAY_INFORMATION_MARSHALLER,
    &DESCRIBE_GATEWAY_INFORMATION_UNMARSHALLER,
);
