//! Colour math — RGB hex decoding, RGB → HSL, and remapping into the
//! gateway's native integer ranges.
//!
//! The pipeline is deterministic and truncating: bulbs react to the exact
//! integers, so every step mirrors what the gateway's own apps send.
//!
//! ```text
//! "8f2686" ──hex──▶ Rgb ──▶ Hsl (deg, %, %) ──remap──▶ HubColor (0..65279, 0..65279, 0..254)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound of the gateway's hue and saturation scales.
pub const HUB_COLOR_MAX: f64 = 65279.0;
/// Upper bound of the gateway's dimmer scale.
pub const HUB_DIMMER_MAX: f64 = 254.0;

/// Linearly remap `x` from `[in_min, in_max]` to `[out_min, out_max]`.
#[must_use]
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hue (degrees), saturation (%) and lightness (%).
    #[must_use]
    #[allow(clippy::float_cmp, clippy::many_single_char_names)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            hue: h * 360.0,
            saturation: s * 100.0,
            lightness: l * 100.0,
        }
    }
}

impl FromStr for Rgb {
    type Err = ValidationError;

    /// Parse six hexadecimal digits (`"8f2686"`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ValidationError::InvalidRgbHex(s.to_string()))?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(ValidationError::InvalidRgbHex(s.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360]`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Build a validated HSL colour.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when a component is outside its
    /// range or not a number.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ValidationError> {
        check_range("hue", hue, 360.0)?;
        check_range("saturation", saturation, 100.0)?;
        check_range("lightness", lightness, 100.0)?;
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Remap into the gateway's native integer ranges.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hub(self) -> HubColor {
        HubColor {
            hue: map_range(self.hue, 0.0, 360.0, 0.0, HUB_COLOR_MAX) as u16,
            saturation: map_range(self.saturation, 0.0, 100.0, 0.0, HUB_COLOR_MAX) as u16,
            dimmer: map_range(self.lightness, 0.0, 100.0, 0.0, HUB_DIMMER_MAX) as u8,
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

fn check_range(field: &'static str, value: f64, max: f64) -> Result<(), ValidationError> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: 0.0,
            max,
            value,
        })
    }
}

/// Colour expressed in the gateway's integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubColor {
    /// Hue, `0..=65279`.
    pub hue: u16,
    /// Saturation, `0..=65279`.
    pub saturation: u16,
    /// Dimmer level derived from lightness, `0..=254`.
    pub dimmer: u8,
}

/// CIE 1931 chromaticity coordinates in gateway units (`0..=65535`).
///
/// Many combinations lie outside a bulb's gamut and are ignored by the
/// hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XyColor {
    pub x: u16,
    pub y: u16,
}

/// Fade duration for colour changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTime {
    millis: u32,
}

impl TransitionTime {
    /// Duration used when a caller does not specify one.
    pub const DEFAULT: Self = Self::from_millis(500);

    #[must_use]
    pub const fn from_millis(millis: u32) -> Self {
        Self { millis }
    }

    #[must_use]
    pub const fn as_millis(self) -> u32 {
        self.millis
    }

    /// Gateway units: tenths of a second, truncated.
    #[must_use]
    pub const fn to_hub(self) -> u32 {
        self.millis / 100
    }
}

impl Default for TransitionTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}
