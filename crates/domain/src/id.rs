//! Typed identifier newtypes backed by the gateway's numeric ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap an id reported by the gateway.
            #[must_use]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Validate a caller-supplied id. The gateway never hands out `0`.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidId`] when `raw < 1`.
            pub fn new(raw: i64) -> Result<Self, ValidationError> {
                u32::try_from(raw)
                    .ok()
                    .filter(|value| *value >= 1)
                    .map(Self)
                    .ok_or_else(|| ValidationError::InvalidId {
                        kind: $kind,
                        value: raw.to_string(),
                    })
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let invalid = || ValidationError::InvalidId {
                    kind: $kind,
                    value: s.to_string(),
                };
                let raw: i64 = s.trim().parse().map_err(|_| invalid())?;
                Self::new(raw).map_err(|_| invalid())
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Device`](crate::device::Device) on the gateway.
    DeviceId,
    "device"
);

define_id!(
    /// Identifier of a [`Group`](crate::group::Group) on the gateway.
    GroupId,
    "group"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positive_id() {
        let id: DeviceId = "65537".parse().unwrap();
        assert_eq!(id.get(), 65537);
    }

    #[test]
    fn should_reject_zero_id() {
        let result = GroupId::new(0);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidId { kind: "group", .. })
        ));
    }

    #[test]
    fn should_reject_negative_id() {
        assert!(DeviceId::new(-4).is_err());
    }

    #[test]
    fn should_reject_non_numeric_id() {
        let result = DeviceId::from_str("bulb");
        assert_eq!(
            result,
            Err(ValidationError::InvalidId {
                kind: "device",
                value: "bulb".to_string(),
            })
        );
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = GroupId::from_raw(131_073);
        let parsed: GroupId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_integer() {
        let json = serde_json::to_string(&DeviceId::from_raw(65540)).unwrap();
        assert_eq!(json, "65540");
    }
}
