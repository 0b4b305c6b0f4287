//! `tradfri` protobuf messages and the generated service glue.
//!
//! The messages are declared here with `prost` derives so the build needs no
//! `protoc`; `build.rs` only generates the service glue. `proto/tradfri.proto`
//! is the published contract for clients and is not compiled: when a message
//! or field tag changes, change both files.

#![allow(clippy::pedantic)]

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Group {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(bool, tag = "3")]
    pub power: bool,
    #[prost(uint32, tag = "4")]
    pub dimmer: u32,
    #[prost(string, tag = "5")]
    pub created: String,
    #[prost(int64, repeated, tag = "6")]
    pub device_ids: Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceMetadata {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub vendor: String,
    #[prost(string, tag = "4")]
    pub r#type: String,
    #[prost(uint32, optional, tag = "5")]
    pub battery: Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bulb {
    #[prost(uint32, tag = "1")]
    pub dimmer: u32,
    #[prost(uint32, tag = "2")]
    pub xcolor: u32,
    #[prost(uint32, tag = "3")]
    pub ycolor: u32,
    #[prost(string, tag = "4")]
    pub rgbcolor: String,
    #[prost(bool, tag = "5")]
    pub power: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Blind {
    #[prost(float, tag = "1")]
    pub position: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Plug {
    #[prost(bool, tag = "1")]
    pub power: bool,
    #[prost(uint32, tag = "2")]
    pub dimmer: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Remote {
    #[prost(uint32, tag = "1")]
    pub switches: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<DeviceMetadata>,
    #[prost(oneof = "device::Control", tags = "2, 3, 4, 5")]
    pub control: Option<device::Control>,
}

pub mod device {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Control {
        #[prost(message, tag = "2")]
        Bulb(super::Bulb),
        #[prost(message, tag = "3")]
        Blind(super::Blind),
        #[prost(message, tag = "4")]
        Plug(super::Plug),
        #[prost(message, tag = "5")]
        Remote(super::Remote),
    }
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct XyColor {
    #[prost(uint32, tag = "1")]
    pub x: u32,
    #[prost(uint32, tag = "2")]
    pub y: u32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct HslColor {
    #[prost(double, tag = "1")]
    pub hue: f64,
    #[prost(double, tag = "2")]
    pub saturation: f64,
    #[prost(double, tag = "3")]
    pub lightness: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListGroupsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListGroupsResponse {
    #[prost(message, repeated, tag = "1")]
    pub groups: Vec<Group>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetGroupRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGroupResponse {
    #[prost(message, optional, tag = "1")]
    pub group: Option<Group>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListDevicesRequest {
    #[prost(int64, tag = "1")]
    pub group_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDevicesResponse {
    #[prost(message, repeated, tag = "1")]
    pub devices: Vec<Device>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListDeviceIDsRequest {
    #[prost(int64, tag = "1")]
    pub group_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListDeviceIDsResponse {
    #[prost(int64, repeated, tag = "1")]
    pub ids: Vec<i64>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetDeviceRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDeviceResponse {
    #[prost(message, optional, tag = "1")]
    pub device: Option<Device>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeDeviceColorRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(oneof = "change_device_color_request::Color", tags = "2, 3, 4")]
    pub color: Option<change_device_color_request::Color>,
    /// Milliseconds; `0` selects the default transition.
    #[prost(uint32, tag = "5")]
    pub transition_time: u32,
}

pub mod change_device_color_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Color {
        #[prost(string, tag = "2")]
        Rgb(String),
        #[prost(message, tag = "3")]
        Xy(super::XyColor),
        #[prost(message, tag = "4")]
        Hsl(super::HslColor),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeDeviceColorResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ChangeDeviceDimmingRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(uint32, tag = "2")]
    pub value: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeDeviceDimmingResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TurnDeviceOnRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TurnDeviceOnResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TurnDeviceOffRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TurnDeviceOffResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ChangeDevicePositioningRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(float, tag = "2")]
    pub value: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeDevicePositioningResponse {
    #[prost(string, tag = "1")]
    pub status: String,
}

include!(concat!(env!("OUT_DIR"), "/tradfri.TradfriService.rs"));
