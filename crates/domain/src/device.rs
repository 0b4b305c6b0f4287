//! Device — a physical unit managed by the gateway.
//!
//! A device carries exactly one [`DeviceControl`] variant, chosen when the
//! gateway payload is decoded from whichever capability array it contains.

use serde::Serialize;

use crate::id::DeviceId;
use crate::time::Timestamp;

/// Device type as reported by the gateway (`5750`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Remote,
    /// A remote paired with another remote.
    SlaveRemote,
    Lightbulb,
    Plug,
    MotionSensor,
    SignalRepeater,
    Blind,
    SoundRemote,
    Other(i64),
}

impl DeviceKind {
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Remote,
            1 => Self::SlaveRemote,
            2 => Self::Lightbulb,
            3 => Self::Plug,
            4 => Self::MotionSensor,
            5 => Self::SignalRepeater,
            6 => Self::Blind,
            7 => Self::SoundRemote,
            other => Self::Other(other),
        }
    }
}

/// Vendor and hardware details (`3` object).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceMetadata {
    pub vendor: String,
    /// Model/type name, e.g. `TRADFRI bulb E27 CWS opal 600lm`.
    pub type_name: String,
    pub serial_number: String,
    pub firmware_version: String,
    /// Power source code (`1` internal, `2` external, `3` battery, …).
    pub power_source: i64,
    /// Battery level in percent, when battery powered.
    pub battery: Option<u8>,
}

/// State of a light bulb (`3311` entry).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightControl {
    /// RGB hex reported by the bulb (`"f1e0b5"`), may be empty.
    pub rgb_hex: String,
    pub hue: Option<u32>,
    pub saturation: Option<u32>,
    pub color_x: u32,
    pub color_y: u32,
    pub color_temperature: Option<u32>,
    pub transition_time: Option<f64>,
    pub power: bool,
    pub dimmer: u8,
}

/// State of a blind (`15015` entry).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlindControl {
    /// Position in percent, `0` open to `100` closed.
    pub position: f32,
}

/// State of a smart plug (`3312` entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlugControl {
    pub power: bool,
    pub dimmer: u8,
}

/// Controllable state of a device, one variant per capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DeviceControl {
    Bulb(LightControl),
    Blind(BlindControl),
    Plug(PlugControl),
    /// Remotes expose no writable state; `switches` counts paired switch entries.
    Remote { switches: usize },
    #[default]
    Unknown,
}

/// Snapshot of a device as last reported by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub metadata: DeviceMetadata,
    pub created_at: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
    /// Whether the gateway currently reaches the device (`9019`).
    pub alive: bool,
    pub control: DeviceControl,
}

impl Device {
    /// Light state, when this device is a bulb.
    #[must_use]
    pub fn light(&self) -> Option<&LightControl> {
        match &self.control {
            DeviceControl::Bulb(light) => Some(light),
            _ => None,
        }
    }

    /// Blind state, when this device is a blind.
    #[must_use]
    pub fn blind(&self) -> Option<&BlindControl> {
        match &self.control {
            DeviceControl::Blind(blind) => Some(blind),
            _ => None,
        }
    }

    /// Plug state, when this device is a plug.
    #[must_use]
    pub fn plug(&self) -> Option<&PlugControl> {
        match &self.control {
            DeviceControl::Plug(plug) => Some(plug),
            _ => None,
        }
    }
}
