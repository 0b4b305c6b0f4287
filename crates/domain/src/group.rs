//! Group — a named collection of devices with shared power/dimmer state.

use serde::Serialize;

use crate::id::{DeviceId, GroupId};
use crate::time::Timestamp;

/// Snapshot of a group as last reported by the gateway.
///
/// Members are referenced by id only; fetch each [`Device`](crate::device::Device)
/// separately when its state is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub power: bool,
    pub dimmer: u8,
    pub created_at: Option<Timestamp>,
    /// Member device ids, in the order the gateway lists them.
    pub device_ids: Vec<DeviceId>,
    /// Active scene id (`9039`).
    pub scene_id: Option<u32>,
    /// Group type (`9108`).
    pub group_type: Option<i64>,
}
