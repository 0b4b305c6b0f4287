//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod groups;

use axum::Router;
use axum::routing::{get, put};
use serde::Serialize;

use tradfri_app::ports::Gateway;
use tradfri_domain::device::Device;
use tradfri_domain::response::{DeviceMetadataResponse, DeviceResponse};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: Gateway + 'static,
{
    Router::new()
        // Groups
        .route("/groups", get(groups::list::<G>))
        .route("/groups/{group_id}", get(groups::get::<G>))
        .route("/groups/{group_id}/deviceIds", get(groups::device_ids::<G>))
        .route("/groups/{group_id}/devices", get(groups::devices::<G>))
        .route("/groups/{group_id}/power", put(groups::set_power::<G>))
        .route("/groups/{group_id}/dimmer", put(groups::set_dimmer::<G>))
        // Devices
        .route(
            "/device/{device_id}",
            get(devices::get::<G>).put(devices::set_state::<G>),
        )
        .route("/device/{device_id}/color", put(devices::set_color::<G>))
        .route("/device/{device_id}/rgb", put(devices::set_rgb::<G>))
        .route("/device/{device_id}/hsl", put(devices::set_hsl::<G>))
        .route("/device/{device_id}/dimmer", put(devices::set_dimmer::<G>))
        .route("/device/{device_id}/power", put(devices::set_power::<G>))
        .route(
            "/device/{device_id}/position",
            put(devices::set_position::<G>),
        )
}

/// A device as returned by the API.
///
/// Devices without a recognised control are reduced to their metadata.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DeviceBody {
    Known(DeviceResponse),
    Other {
        #[serde(rename = "deviceMetadata")]
        device_metadata: DeviceMetadataResponse,
    },
}

impl From<&Device> for DeviceBody {
    fn from(device: &Device) -> Self {
        DeviceResponse::from_device(device).map_or_else(
            || Self::Other {
                device_metadata: DeviceMetadataResponse::from(device),
            },
            Self::Known,
        )
    }
}
