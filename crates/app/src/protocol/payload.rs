//! Write payloads. Each builder emits only the keys that change.

use serde::Serialize;
use tradfri_domain::color::{Hsl, TransitionTime, XyColor};
use tradfri_domain::command::{DeviceState, Position, Power};

/// One entry of the `3311` light array.
#[derive(Debug, Default, Serialize)]
struct LightUpdate {
    #[serde(rename = "5707", skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(rename = "5708", skip_serializing_if = "Option::is_none")]
    saturation: Option<u16>,
    #[serde(rename = "5709", skip_serializing_if = "Option::is_none")]
    color_x: Option<u16>,
    #[serde(rename = "5710", skip_serializing_if = "Option::is_none")]
    color_y: Option<u16>,
    #[serde(rename = "5712", skip_serializing_if = "Option::is_none")]
    transition_time: Option<u32>,
    #[serde(rename = "5850", skip_serializing_if = "Option::is_none")]
    power: Option<u8>,
    #[serde(rename = "5851", skip_serializing_if = "Option::is_none")]
    dimmer: Option<u8>,
}

#[derive(Debug, Serialize)]
struct LightPayload {
    #[serde(rename = "3311")]
    light: [LightUpdate; 1],
}

#[derive(Debug, Serialize)]
struct BlindUpdate {
    #[serde(rename = "5536")]
    position: f32,
}

#[derive(Debug, Serialize)]
struct BlindPayload {
    #[serde(rename = "15015")]
    blind: [BlindUpdate; 1],
}

/// Groups take flat objects, no capability array.
#[derive(Debug, Default, Serialize)]
struct GroupPayload {
    #[serde(rename = "5850", skip_serializing_if = "Option::is_none")]
    power: Option<u8>,
    #[serde(rename = "5851", skip_serializing_if = "Option::is_none")]
    dimmer: Option<u8>,
}

#[derive(Debug, Serialize)]
struct AuthPayload<'a> {
    #[serde(rename = "9090")]
    client_id: &'a str,
}

fn light(update: LightUpdate) -> serde_json::Value {
    serde_json::json!(LightPayload { light: [update] })
}

#[must_use]
pub fn device_dimming(dimming: u8) -> serde_json::Value {
    light(LightUpdate {
        dimmer: Some(dimming),
        ..LightUpdate::default()
    })
}

#[must_use]
pub fn device_power(power: Power) -> serde_json::Value {
    light(LightUpdate {
        power: Some(power.as_u8()),
        ..LightUpdate::default()
    })
}

/// Power and dimmer together, plus hue and saturation when a colour is set.
#[must_use]
pub fn device_state(state: DeviceState) -> serde_json::Value {
    let color = state.color.map(|rgb| rgb.to_hsl().to_hub());
    light(LightUpdate {
        hue: color.map(|c| c.hue),
        saturation: color.map(|c| c.saturation),
        power: Some(state.power.as_u8()),
        dimmer: Some(state.dimmer),
        ..LightUpdate::default()
    })
}

#[must_use]
pub fn device_color_xy(color: XyColor, transition: TransitionTime) -> serde_json::Value {
    light(LightUpdate {
        color_x: Some(color.x),
        color_y: Some(color.y),
        transition_time: Some(transition.to_hub()),
        ..LightUpdate::default()
    })
}

/// Hue, saturation and lightness (as dimmer) in gateway units.
#[must_use]
pub fn device_color_hsl(hsl: Hsl, transition: TransitionTime) -> serde_json::Value {
    let hub = hsl.to_hub();
    light(LightUpdate {
        hue: Some(hub.hue),
        saturation: Some(hub.saturation),
        dimmer: Some(hub.dimmer),
        transition_time: Some(transition.to_hub()),
        ..LightUpdate::default()
    })
}

#[must_use]
pub fn device_position(position: Position) -> serde_json::Value {
    serde_json::json!(BlindPayload {
        blind: [BlindUpdate {
            position: position.get(),
        }],
    })
}

#[must_use]
pub fn group_power(power: Power) -> serde_json::Value {
    serde_json::json!(GroupPayload {
        power: Some(power.as_u8()),
        ..GroupPayload::default()
    })
}

#[must_use]
pub fn group_dimming(dimming: u8) -> serde_json::Value {
    serde_json::json!(GroupPayload {
        dimmer: Some(dimming),
        ..GroupPayload::default()
    })
}

#[must_use]
pub fn auth_exchange(client_id: &str) -> serde_json::Value {
    serde_json::json!(AuthPayload { client_id })
}
