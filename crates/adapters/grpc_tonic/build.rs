//! Generates the `tradfri.TradfriService` server glue.
//!
//! Messages are plain `prost` structs in `src/proto.rs`, so the manual
//! builder is used and no `protoc` is required.

use tonic_build::manual::{Builder, Method, Service};

/// `(rust method, rpc name)`; request and response types are `<rpc>Request`
/// and `<rpc>Response` in `crate::proto`.
const METHODS: &[(&str, &str)] = &[
    ("list_groups", "ListGroups"),
    ("get_group", "GetGroup"),
    ("list_devices", "ListDevices"),
    ("list_device_ids", "ListDeviceIDs"),
    ("get_device", "GetDevice"),
    ("change_device_color", "ChangeDeviceColor"),
    ("change_device_dimming", "ChangeDeviceDimming"),
    ("turn_device_on", "TurnDeviceOn"),
    ("turn_device_off", "TurnDeviceOff"),
    ("change_device_positioning", "ChangeDevicePositioning"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let service = METHODS.iter().fold(
        Service::builder().name("TradfriService").package("tradfri"),
        |service, (name, rpc)| {
            service.method(
                Method::builder()
                    .name(*name)
                    .route_name(*rpc)
                    .input_type(format!("crate::proto::{rpc}Request"))
                    .output_type(format!("crate::proto::{rpc}Response"))
                    .codec_path("tonic::codec::ProstCodec")
                    .build(),
            )
        },
    );

    Builder::new()
        .build_client(false)
        .compile(&[service.build()]);
}
