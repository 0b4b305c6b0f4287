//! Write commands — validated value objects describing a desired mutation.
//!
//! Commands are checked when constructed, so an invalid request never
//! reaches the network.

use serde::Serialize;

use crate::color::Rgb;
use crate::error::ValidationError;

/// On/off state. The gateway encodes it as `1`/`0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    Off,
    On,
}

impl Power {
    /// Gateway encoding.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl TryFrom<i64> for Power {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            other => Err(ValidationError::InvalidPower(other)),
        }
    }
}

/// Blind position in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position(f32);

impl Position {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `[0, 100]` or for NaN.
    pub fn new(percent: f32) -> Result<Self, ValidationError> {
        if (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(ValidationError::OutOfRange {
                field: "position",
                min: 0.0,
                max: 100.0,
                value: f64::from(percent),
            })
        }
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

/// Full light state applied in a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub power: Power,
    pub dimmer: u8,
    /// Optional colour; only its hue and saturation are applied, the explicit
    /// `dimmer` wins over the colour's lightness.
    pub color: Option<Rgb>,
}

impl DeviceState {
    /// Build from raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPower`] when `power` is not `0`/`1`
    /// and [`ValidationError::InvalidRgbHex`] for a malformed colour.
    pub fn new(power: i64, dimmer: u8, color: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            power: Power::try_from(power)?,
            dimmer,
            color: color.map(str::parse).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_zero_and_one_as_power() {
        assert_eq!(Power::try_from(0), Ok(Power::Off));
        assert_eq!(Power::try_from(1), Ok(Power::On));
    }

    #[test]
    fn should_reject_other_power_values() {
        assert_eq!(Power::try_from(2), Err(ValidationError::InvalidPower(2)));
        assert_eq!(Power::try_from(-1), Err(ValidationError::InvalidPower(-1)));
    }

    #[test]
    fn should_encode_power_as_integer() {
        assert_eq!(Power::On.as_u8(), 1);
        assert_eq!(Power::from(false).as_u8(), 0);
    }

    #[test]
    fn should_accept_position_bounds() {
        assert_eq!(Position::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Position::new(100.0).unwrap().get(), 100.0);
    }

    #[test]
    fn should_reject_position_out_of_range() {
        assert!(Position::new(100.5).is_err());
        assert!(Position::new(-0.1).is_err());
        assert!(Position::new(f32::NAN).is_err());
    }

    #[test]
    fn should_build_state_with_optional_colour() {
        let state = DeviceState::new(1, 200, Some("ff0000")).unwrap();
        assert_eq!(state.power, Power::On);
        assert_eq!(state.color, Some(Rgb::new(255, 0, 0)));

        let plain = DeviceState::new(0, 10, None).unwrap();
        assert!(plain.color.is_none());
    }

    #[test]
    fn should_reject_state_with_bad_power_or_colour() {
        assert!(DeviceState::new(3, 10, None).is_err());
        assert!(DeviceState::new(1, 10, Some("nothex")).is_err());
    }
}
