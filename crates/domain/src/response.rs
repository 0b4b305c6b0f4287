//! Caller-facing projections of devices and groups.
//!
//! Every projection is derived from a [`Device`] or [`Group`] snapshot
//! without another gateway round trip. Field names follow the JSON the REST
//! API returns.

use serde::Serialize;

use crate::device::{Device, DeviceControl};
use crate::group::Group;
use crate::id::{DeviceId, GroupId};
use crate::time::to_rfc3339;

/// Identity and hardware summary shared by every device projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceMetadataResponse {
    pub id: DeviceId,
    pub name: String,
    pub vendor: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub battery: Option<u8>,
}

impl From<&Device> for DeviceMetadataResponse {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id,
            name: device.name.clone(),
            vendor: device.metadata.vendor.clone(),
            type_name: device.metadata.type_name.clone(),
            battery: device.metadata.battery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulbResponse {
    pub device_metadata: DeviceMetadataResponse,
    pub dimmer: u8,
    #[serde(rename = "xcolor")]
    pub x_color: u32,
    #[serde(rename = "ycolor")]
    pub y_color: u32,
    #[serde(rename = "rgbcolor")]
    pub rgb_color: String,
    pub power: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindResponse {
    pub device_metadata: DeviceMetadataResponse,
    pub position: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugResponse {
    pub device_metadata: DeviceMetadataResponse,
    pub power: bool,
    pub dimmer: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResponse {
    pub device_metadata: DeviceMetadataResponse,
    pub switches: usize,
}

/// Projection of any controllable device.
///
/// Serialises as the inner projection with no discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeviceResponse {
    Bulb(BulbResponse),
    Blind(BlindResponse),
    Plug(PlugResponse),
    Remote(RemoteResponse),
}

impl DeviceResponse {
    /// Project a device. Devices with no recognised control yield `None`.
    #[must_use]
    pub fn from_device(device: &Device) -> Option<Self> {
        let device_metadata = DeviceMetadataResponse::from(device);
        let response = match &device.control {
            DeviceControl::Bulb(light) => Self::Bulb(BulbResponse {
                device_metadata,
                dimmer: light.dimmer,
                x_color: light.color_x,
                y_color: light.color_y,
                rgb_color: light.rgb_hex.clone(),
                power: light.power,
            }),
            DeviceControl::Blind(blind) => Self::Blind(BlindResponse {
                device_metadata,
                position: blind.position,
            }),
            DeviceControl::Plug(plug) => Self::Plug(PlugResponse {
                device_metadata,
                power: plug.power,
                dimmer: plug.dimmer,
            }),
            DeviceControl::Remote { switches } => Self::Remote(RemoteResponse {
                device_metadata,
                switches: *switches,
            }),
            DeviceControl::Unknown => return None,
        };
        Some(response)
    }

    #[must_use]
    pub fn metadata(&self) -> &DeviceMetadataResponse {
        match self {
            Self::Bulb(inner) => &inner.device_metadata,
            Self::Blind(inner) => &inner.device_metadata,
            Self::Plug(inner) => &inner.device_metadata,
            Self::Remote(inner) => &inner.device_metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub power: bool,
    pub dimmer: u8,
    /// RFC 3339 creation instant, empty when the gateway did not report one.
    pub created: String,
    pub device_list: Vec<DeviceId>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            power: group.power,
            dimmer: group.dimmer,
            created: group.created_at.map(to_rfc3339).unwrap_or_default(),
            device_list: group.device_ids.clone(),
        }
    }
}

/// Outcome of a write, carrying the gateway's status text (`"Changed"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    #[serde(rename = "msg")]
    pub status: String,
}

impl CommandResult {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
