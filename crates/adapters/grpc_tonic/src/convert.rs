//! Domain snapshots → protobuf messages.

use tradfri_domain::device::{Device, DeviceControl};
use tradfri_domain::group::Group;
use tradfri_domain::time::to_rfc3339;

use crate::proto;

impl From<&Group> for proto::Group {
    fn from(group: &Group) -> Self {
        Self {
            id: i64::from(group.id.get()),
            name: group.name.clone(),
            power: group.power,
            dimmer: u32::from(group.dimmer),
            created: group.created_at.map(to_rfc3339).unwrap_or_default(),
            device_ids: group.device_ids.iter().map(|id| i64::from(id.get())).collect(),
        }
    }
}

impl From<&Device> for proto::Device {
    fn from(device: &Device) -> Self {
        let control = match &device.control {
            DeviceControl::Bulb(light) => Some(proto::device::Control::Bulb(proto::Bulb {
                dimmer: u32::from(light.dimmer),
                xcolor: light.color_x,
                ycolor: light.color_y,
                rgbcolor: light.rgb_hex.clone(),
                power: light.power,
            })),
            DeviceControl::Blind(blind) => Some(proto::device::Control::Blind(proto::Blind {
                position: blind.position,
            })),
            DeviceControl::Plug(plug) => Some(proto::device::Control::Plug(proto::Plug {
                power: plug.power,
                dimmer: u32::from(plug.dimmer),
            })),
            DeviceControl::Remote { switches } => {
                Some(proto::device::Control::Remote(proto::Remote {
                    switches: u32::try_from(*switches).unwrap_or(u32::MAX),
                }))
            }
            DeviceControl::Unknown => None,
        };
        Self {
            metadata: Some(proto::DeviceMetadata {
                id: i64::from(device.id.get()),
                name: device.name.clone(),
                vendor: device.metadata.vendor.clone(),
                r#type: device.metadata.type_name.clone(),
                battery: device.metadata.battery.map(u32::from),
            }),
            control,
        }
    }
}
