//! Gateway port — the driving port that REST, gRPC and CLI adapters call.
//!
//! [`GatewayClient`](crate::services::gateway_client::GatewayClient) is the
//! production implementation; adapter tests substitute in-memory stubs.

use std::future::Future;

use tradfri_domain::color::{Hsl, TransitionTime, XyColor};
use tradfri_domain::command::DeviceState;
use tradfri_domain::device::Device;
use tradfri_domain::error::TradfriError;
use tradfri_domain::group::Group;
use tradfri_domain::id::{DeviceId, GroupId};
use tradfri_domain::response::CommandResult;

/// Typed operations on the gateway's devices and groups.
pub trait Gateway: Send + Sync {
    /// Every group, in the order the gateway lists them.
    fn list_groups(&self) -> impl Future<Output = Result<Vec<Group>, TradfriError>> + Send;

    fn get_group(&self, id: GroupId) -> impl Future<Output = Result<Group, TradfriError>> + Send;

    /// Ids of every device known to the gateway.
    fn list_device_ids(&self) -> impl Future<Output = Result<Vec<DeviceId>, TradfriError>> + Send;

    /// Every device known to the gateway.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, TradfriError>> + Send;

    /// Members of a group, fetched one by one.
    fn list_group_devices(
        &self,
        id: GroupId,
    ) -> impl Future<Output = Result<Vec<Device>, TradfriError>> + Send;

    fn get_device(&self, id: DeviceId)
    -> impl Future<Output = Result<Device, TradfriError>> + Send;

    fn put_device_dimming(
        &self,
        id: DeviceId,
        dimming: u8,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    /// Switch a device on (`1`) or off (`0`); anything else is rejected
    /// before any IO.
    fn put_device_power(
        &self,
        id: DeviceId,
        power: i64,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    fn put_device_state(
        &self,
        id: DeviceId,
        state: DeviceState,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    fn put_device_color_timed(
        &self,
        id: DeviceId,
        color: XyColor,
        transition: TransitionTime,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    /// Set a colour from a six-digit RGB hex string such as `8f2686`.
    fn put_device_color_rgb_timed(
        &self,
        id: DeviceId,
        rgb: &str,
        transition: TransitionTime,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    fn put_device_color_hsl_timed(
        &self,
        id: DeviceId,
        hsl: Hsl,
        transition: TransitionTime,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    /// Move a blind to `positioning` percent (`0..=100`).
    fn put_device_positioning(
        &self,
        id: DeviceId,
        positioning: f32,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    fn put_group_power(
        &self,
        id: GroupId,
        power: i64,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    fn put_group_dimming(
        &self,
        id: GroupId,
        dimming: u8,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send;

    /// [`put_device_color_timed`](Self::put_device_color_timed) with the
    /// default transition.
    fn put_device_color(
        &self,
        id: DeviceId,
        color: XyColor,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send {
        self.put_device_color_timed(id, color, TransitionTime::DEFAULT)
    }

    /// [`put_device_color_rgb_timed`](Self::put_device_color_rgb_timed) with
    /// the default transition.
    fn put_device_color_rgb(
        &self,
        id: DeviceId,
        rgb: &str,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send {
        self.put_device_color_rgb_timed(id, rgb, TransitionTime::DEFAULT)
    }

    /// [`put_device_color_hsl_timed`](Self::put_device_color_hsl_timed) with
    /// the default transition.
    fn put_device_color_hsl(
        &self,
        id: DeviceId,
        hsl: Hsl,
    ) -> impl Future<Output = Result<CommandResult, TradfriError>> + Send {
        self.put_device_color_hsl_timed(id, hsl, TransitionTime::DEFAULT)
    }
}
