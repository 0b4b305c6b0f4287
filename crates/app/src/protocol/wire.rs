//! Gateway read payloads, keyed exactly as the gateway sends them.
//!
//! Every struct converts into its domain counterpart with `From`. Missing
//! optional fields take their defaults; only the `9003` id is required.

use serde::Deserialize;
use tradfri_domain::credentials::TokenExchange;
use tradfri_domain::device::{
    BlindControl, Device, DeviceControl, DeviceKind, DeviceMetadata, LightControl, PlugControl,
};
use tradfri_domain::group::Group;
use tradfri_domain::id::{DeviceId, GroupId};
use tradfri_domain::time::from_epoch_secs;

#[derive(Debug, Deserialize)]
pub struct WireDevice {
    #[serde(rename = "9003")]
    pub id: u32,
    #[serde(rename = "9001", default)]
    pub name: String,
    #[serde(rename = "5750", default)]
    pub kind: i64,
    #[serde(rename = "3", default)]
    pub metadata: WireMetadata,
    #[serde(rename = "9002", default)]
    pub created_at: i64,
    #[serde(rename = "9020", default)]
    pub last_seen: i64,
    #[serde(rename = "9019", default)]
    pub alive: i64,
    #[serde(rename = "3311", default)]
    pub light: Option<Vec<WireLight>>,
    #[serde(rename = "15015", default)]
    pub blind: Option<Vec<WireBlind>>,
    #[serde(rename = "3312", default)]
    pub plug: Option<Vec<WirePlug>>,
    #[serde(rename = "15009", default)]
    pub switches: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireMetadata {
    #[serde(rename = "0", default)]
    pub vendor: String,
    #[serde(rename = "1", default)]
    pub type_name: String,
    #[serde(rename = "2", default)]
    pub serial_number: String,
    #[serde(rename = "3", default)]
    pub firmware_version: String,
    #[serde(rename = "6", default)]
    pub power_source: i64,
    #[serde(rename = "9", default)]
    pub battery: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct WireLight {
    #[serde(rename = "5706", default)]
    pub rgb_hex: String,
    #[serde(rename = "5707", default)]
    pub hue: Option<u32>,
    #[serde(rename = "5708", default)]
    pub saturation: Option<u32>,
    #[serde(rename = "5709", default)]
    pub color_x: u32,
    #[serde(rename = "5710", default)]
    pub color_y: u32,
    #[serde(rename = "5711", default)]
    pub color_temperature: Option<u32>,
    #[serde(rename = "5712", default)]
    pub transition_time: Option<f64>,
    #[serde(rename = "5850", default)]
    pub power: i64,
    #[serde(rename = "5851", default)]
    pub dimmer: i64,
}

#[derive(Debug, Deserialize)]
pub struct WireBlind {
    #[serde(rename = "5536", default)]
    pub position: f32,
}

#[derive(Debug, Deserialize)]
pub struct WirePlug {
    #[serde(rename = "5850", default)]
    pub power: i64,
    #[serde(rename = "5851", default)]
    pub dimmer: i64,
}

#[derive(Debug, Deserialize)]
pub struct WireGroup {
    #[serde(rename = "9003")]
    pub id: u32,
    #[serde(rename = "9001", default)]
    pub name: String,
    #[serde(rename = "5850", default)]
    pub power: i64,
    #[serde(rename = "5851", default)]
    pub dimmer: i64,
    #[serde(rename = "9002", default)]
    pub created_at: i64,
    #[serde(rename = "9018", default)]
    pub content: Option<WireGroupContent>,
    #[serde(rename = "9039", default)]
    pub scene_id: Option<u32>,
    #[serde(rename = "9108", default)]
    pub group_type: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireGroupContent {
    #[serde(rename = "15002", default)]
    pub device_list: WireDeviceList,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireDeviceList {
    #[serde(rename = "9003", default)]
    pub ids: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WireTokenExchange {
    #[serde(rename = "9091")]
    pub token: String,
    #[serde(rename = "9029", default)]
    pub type_identifier: String,
}

fn level(value: i64) -> u8 {
    u8::try_from(value.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX)
}

/// First entry of an optional capability array; empty counts as absent.
fn first<T>(entries: Option<Vec<T>>) -> Option<T> {
    entries.and_then(|list| list.into_iter().next())
}

impl From<WireLight> for LightControl {
    fn from(wire: WireLight) -> Self {
        Self {
            rgb_hex: wire.rgb_hex,
            hue: wire.hue,
            saturation: wire.saturation,
            color_x: wire.color_x,
            color_y: wire.color_y,
            color_temperature: wire.color_temperature,
            transition_time: wire.transition_time,
            power: wire.power == 1,
            dimmer: level(wire.dimmer),
        }
    }
}

impl From<WireMetadata> for DeviceMetadata {
    fn from(wire: WireMetadata) -> Self {
        Self {
            vendor: wire.vendor,
            type_name: wire.type_name,
            serial_number: wire.serial_number,
            firmware_version: wire.firmware_version,
            power_source: wire.power_source,
            battery: wire.battery.map(level),
        }
    }
}

impl WireDevice {
    /// Select the control variant; light wins over blind, blind over plug,
    /// plug over remote.
    fn control(&mut self) -> DeviceControl {
        if let Some(light) = first(self.light.take()) {
            return DeviceControl::Bulb(light.into());
        }
        if let Some(blind) = first(self.blind.take()) {
            return DeviceControl::Blind(BlindControl {
                position: blind.position,
            });
        }
        if let Some(plug) = first(self.plug.take()) {
            return DeviceControl::Plug(PlugControl {
                power: plug.power == 1,
                dimmer: level(plug.dimmer),
            });
        }
        match self.switches.take() {
            Some(switches) if !switches.is_empty() => DeviceControl::Remote {
                switches: switches.len(),
            },
            _ => DeviceControl::Unknown,
        }
    }
}

impl From<WireDevice> for Device {
    fn from(mut wire: WireDevice) -> Self {
        let control = wire.control();
        Self {
            id: DeviceId::from_raw(wire.id),
            name: wire.name,
            kind: DeviceKind::from_code(wire.kind),
            metadata: wire.metadata.into(),
            created_at: from_epoch_secs(wire.created_at),
            last_seen: from_epoch_secs(wire.last_seen),
            alive: wire.alive == 1,
            control,
        }
    }
}

impl From<WireGroup> for Group {
    fn from(wire: WireGroup) -> Self {
        let device_ids = wire
            .content
            .map(|content| content.device_list.ids)
            .unwrap_or_default()
            .into_iter()
            .map(DeviceId::from_raw)
            .collect();
        Self {
            id: GroupId::from_raw(wire.id),
            name: wire.name,
            power: wire.power == 1,
            dimmer: level(wire.dimmer),
            created_at: from_epoch_secs(wire.created_at),
            device_ids,
            scene_id: wire.scene_id,
            group_type: wire.group_type,
        }
    }
}

impl From<WireTokenExchange> for TokenExchange {
    fn from(wire: WireTokenExchange) -> Self {
        Self {
            token: wire.token,
            type_identifier: wire.type_identifier,
        }
    }
}
