//! In-memory [`Gateway`] used by the router tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tradfri_app::ports::Gateway;
use tradfri_domain::color::{Hsl, Rgb, TransitionTime, XyColor};
use tradfri_domain::command::{DeviceState, Position, Power};
use tradfri_domain::device::{
    BlindControl, Device, DeviceControl, DeviceKind, DeviceMetadata, LightControl,
};
use tradfri_domain::error::{RejectedError, TimeoutError, TradfriError};
use tradfri_domain::group::Group;
use tradfri_domain::id::{DeviceId, GroupId};
use tradfri_domain::message::Code;
use tradfri_domain::response::CommandResult;
use tradfri_domain::time::from_epoch_secs;

/// One group (`131073`) holding a bulb, a blind and a motion sensor.
///
/// Writes validate like the real client, then record a short description.
#[derive(Clone, Default)]
pub struct StubGateway {
    calls: Arc<Mutex<Vec<String>>>,
    silent: bool,
}

impl StubGateway {
    /// Every read times out.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<CommandResult, TradfriError> {
        self.calls.lock().unwrap().push(call);
        Ok(CommandResult::new("Changed"))
    }

    fn check(&self, path: String) -> Result<(), TradfriError> {
        if self.silent {
            return Err(TimeoutError {
                path,
                after: Duration::from_secs(1),
            }
            .into());
        }
        Ok(())
    }

    fn group() -> Group {
        Group {
            id: GroupId::from_raw(131_073),
            name: "Kitchen".to_string(),
            power: true,
            dimmer: 200,
            created_at: from_epoch_secs(1_545_412_418),
            device_ids: [65537, 65538, 65539]
                .into_iter()
                .map(DeviceId::from_raw)
                .collect(),
            scene_id: None,
            group_type: None,
        }
    }

    fn device(id: DeviceId) -> Option<Device> {
        let (name, kind, type_name, control) = match id.get() {
            65537 => (
                "Ceiling",
                DeviceKind::Lightbulb,
                "TRADFRI bulb E27 CWS opal 600lm",
                DeviceControl::Bulb(LightControl {
                    rgb_hex: "f1e0b5".to_string(),
                    color_x: 30140,
                    color_y: 26909,
                    power: true,
                    dimmer: 120,
                    ..LightControl::default()
                }),
            ),
            65538 => (
                "Window",
                DeviceKind::Blind,
                "FYRTUR block-out roller blind",
                DeviceControl::Blind(BlindControl { position: 40.0 }),
            ),
            65539 => (
                "Motion sensor",
                DeviceKind::MotionSensor,
                "TRADFRI motion sensor",
                DeviceControl::Unknown,
            ),
            _ => return None,
        };
        Some(Device {
            id,
            name: name.to_string(),
            kind,
            metadata: DeviceMetadata {
                vendor: "IKEA of Sweden".to_string(),
                type_name: type_name.to_string(),
                ..DeviceMetadata::default()
            },
            created_at: None,
            last_seen: None,
            alive: true,
            control,
        })
    }

    fn not_found(path: String) -> TradfriError {
        RejectedError {
            path,
            code: Code::NOT_FOUND,
        }
        .into()
    }
}

impl Gateway for StubGateway {
    async fn list_groups(&self) -> Result<Vec<Group>, TradfriError> {
        self.check("/15004".to_string())?;
        Ok(vec![Self::group()])
    }

    async fn get_group(&self, id: GroupId) -> Result<Group, TradfriError> {
        let path = format!("/15004/{id}");
        self.check(path.clone())?;
        Some(Self::group())
            .filter(|group| group.id == id)
            .ok_or_else(|| Self::not_found(path))
    }

    async fn list_device_ids(&self) -> Result<Vec<DeviceId>, TradfriError> {
        self.check("/15001".to_string())?;
        Ok(Self::group().device_ids)
    }

    async fn list_devices(&self) -> Result<Vec<Device>, TradfriError> {
        self.check("/15001".to_string())?;
        Ok(Self::group()
            .device_ids
            .into_iter()
            .filter_map(Self::device)
            .collect())
    }

    async fn list_group_devices(&self, id: GroupId) -> Result<Vec<Device>, TradfriError> {
        let group = self.get_group(id).await?;
        Ok(group.device_ids.into_iter().filter_map(Self::device).collect())
    }

    async fn get_device(&self, id: DeviceId) -> Result<Device, TradfriError> {
        let path = format!("/15001/{id}");
        self.check(path.clone())?;
        Self::device(id).ok_or_else(|| Self::not_found(path))
    }

    async fn put_device_dimming(
        &self,
        id: DeviceId,
        dimming: u8,
    ) -> Result<CommandResult, TradfriError> {
        self.record(format!("dimmer {id} {dimming}"))
    }

    async fn put_device_power(&self, id: DeviceId, power: i64) -> Result<CommandResult, TradfriError> {
        let power = Power::try_from(power)?;
        self.record(format!("power {id} {}", power.as_u8()))
    }

    async fn put_device_state(
        &self,
        id: DeviceId,
        state: DeviceState,
    ) -> Result<CommandResult, TradfriError> {
        let power = if state.power.is_on() { "on" } else { "off" };
        let color = state.color.map(|rgb| rgb.to_string()).unwrap_or_default();
        self.record(format!("state {id} {power} {} {color}", state.dimmer))
    }

    async fn put_device_color_timed(
        &self,
        id: DeviceId,
        color: XyColor,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        self.record(format!(
            "color {id} {}/{} {}ms",
            color.x,
            color.y,
            transition.as_millis()
        ))
    }

    async fn put_device_color_rgb_timed(
        &self,
        id: DeviceId,
        rgb: &str,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        let rgb: Rgb = rgb.parse()?;
        self.record(format!("rgb {id} {rgb} {}ms", transition.as_millis()))
    }

    async fn put_device_color_hsl_timed(
        &self,
        id: DeviceId,
        hsl: Hsl,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        self.record(format!(
            "hsl {id} {}/{}/{} {}ms",
            hsl.hue,
            hsl.saturation,
            hsl.lightness,
            transition.as_millis()
        ))
    }

    async fn put_device_positioning(
        &self,
        id: DeviceId,
        positioning: f32,
    ) -> Result<CommandResult, TradfriError> {
        let position = Position::new(positioning)?;
        self.record(format!("position {id} {}", position.get()))
    }

    async fn put_group_power(&self, id: GroupId, power: i64) -> Result<CommandResult, TradfriError> {
        let power = Power::try_from(power)?;
        self.record(format!("group power {id} {}", power.as_u8()))
    }

    async fn put_group_dimming(
        &self,
        id: GroupId,
        dimming: u8,
    ) -> Result<CommandResult, TradfriError> {
        self.record(format!("group dimmer {id} {dimming}"))
    }
}
