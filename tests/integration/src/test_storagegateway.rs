//! Storage Gateway JSON-protocol round trips.

#[cfg(test)]
mod tests {
    use rustack_sdk_storagegateway::input::{
        CreateSnapshotInput, DescribeGatewayInformationInput, ListVolumesInput,
    };

    use crate::{CannedResponse, FakeEndpoint};

    const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-west-2:111122223333:gateway/sgw-12A3456B";

    #[tokio::test]
    async fn test_should_create_snapshot() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::ok(
                r#"{"VolumeARN":"arn:aws:storagegateway:us-west-2:111122223333:gateway/sgw-12A3456B/volume/vol-1122AABB","SnapshotId":"snap-78e22663"}"#,
            )
            .header("x-amzn-requestid", "req-snap")
        })
        .await
        .unwrap();
        let client = endpoint.storagegateway().unwrap();

        let response = client
            .create_snapshot(
                &CreateSnapshotInput::default()
                    .with_volume_arn(format!("{GATEWAY_ARN}/volume/vol-1122AABB"))
                    .with_snapshot_description("snapshot description"),
            )
            .await
            .unwrap();

        assert_eq!(response.result().snapshot_id(), "snap-78e22663");
        assert_eq!(response.request_id(), "req-snap");

        let request = &endpoint.requests()[0];
        assert_eq!(
            request.header("x-amz-target"),
            Some("StorageGateway_20130630.CreateSnapshot")
        );
        assert_eq!(request.header("content-type"), Some("application/x-amz-json-1.1"));
        let body = std::str::from_utf8(&request.body).unwrap();
        assert!(body.contains(r#""SnapshotDescription":"snapshot description""#));
        assert!(request
            .header("authorization")
            .unwrap()
            .contains("/us-west-2/storagegateway/aws4_request"));
    }

    #[tokio::test]
    async fn test_should_list_volumes() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::ok(
                r#"{
                    "GatewayARN": "arn:aws:storagegateway:us-west-2:111122223333:gateway/sgw-12A3456B",
                    "VolumeInfos": [
                        {"VolumeARN": "vol-1", "VolumeType": "STORED", "VolumeSizeInBytes": 1099511627776},
                        {"VolumeARN": "vol-2", "VolumeType": "STORED"}
                    ]
                }"#,
            )
        })
        .await
        .unwrap();
        let client = endpoint.storagegateway().unwrap();

        let response = client
            .list_volumes(&ListVolumesInput::default().with_gateway_arn(GATEWAY_ARN).with_limit(2))
            .await
            .unwrap();

        let volumes = response.result().volume_infos();
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[0].volume_size_in_bytes(), 1_099_511_627_776);
        assert_eq!(volumes[1].volume_arn(), "vol-2");
        assert!(!response.result().is_set_marker());

        let body = std::str::from_utf8(&endpoint.requests()[0].body).unwrap().to_owned();
        assert!(body.contains(r#""Limit":2"#));
    }

    #[tokio::test]
    async fn test_should_describe_gateway_information() {
        let endpoint = FakeEndpoint::start(|_| {
            CannedResponse::ok(
                r#"{
                    "GatewayARN": "arn:aws:storagegateway:us-west-2:111122223333:gateway/sgw-12A3456B",
                    "GatewayId": "sgw-AABB1122",
                    "GatewayNetworkInterfaces": [{"Ipv4Address": "10.35.69.216"}],
                    "GatewayState": "STATE_RUNNING",
                    "GatewayTimezone": "GMT-8:00"
                }"#,
            )
        })
        .await
        .unwrap();
        let client = endpoint.storagegateway().unwrap();

        let response = client
            .describe_gateway_information(
                &DescribeGatewayInformationInput::default().with_gateway_arn(GATEWAY_ARN),
            )
            .await
            .unwrap();

        let output = response.result();
        assert_eq!(output.gateway_id(), "sgw-AABB1122");
        assert_eq!(output.gateway_timezone(), "GMT-8:00");
        assert_eq!(
            output.gateway_network_interfaces()[0].ipv4_address(),
            "10.35.69.216"
        );
    }
}
