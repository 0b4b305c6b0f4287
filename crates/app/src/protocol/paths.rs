//! Resource paths exposed by the gateway.

use tradfri_domain::id::{DeviceId, GroupId};

/// Device collection.
pub const DEVICES: &str = "/15001";
/// Group collection.
pub const GROUPS: &str = "/15004";
/// Credential exchange endpoint used when provisioning a new identity.
pub const AUTH_EXCHANGE: &str = "/15011/9063";

#[must_use]
pub fn device(id: DeviceId) -> String {
    format!("{DEVICES}/{id}")
}

#[must_use]
pub fn group(id: GroupId) -> String {
    format!("{GROUPS}/{id}")
}

/// Prefix `path` with `/` when missing.
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_device_and_group_paths() {
        assert_eq!(device(DeviceId::from_raw(65537)), "/15001/65537");
        assert_eq!(group(GroupId::from_raw(131_073)), "/15004/131073");
    }

    #[test]
    fn should_add_missing_leading_slash() {
        assert_eq!(normalize("15001/65537"), "/15001/65537");
        assert_eq!(normalize("/15004"), "/15004");
    }
}
