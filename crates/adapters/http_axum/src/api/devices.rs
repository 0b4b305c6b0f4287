//! JSON REST handlers for a single device.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use tradfri_app::ports::Gateway;
use tradfri_domain::color::{Hsl, TransitionTime, XyColor};
use tradfri_domain::command::DeviceState;
use tradfri_domain::id::DeviceId;
use tradfri_domain::response::CommandResult;

use super::DeviceBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `PUT /api/device/{deviceId}/color`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRequest {
    pub xcolor: u16,
    pub ycolor: u16,
    /// Fade duration in milliseconds.
    pub transition_time: Option<u32>,
}

/// Body of `PUT /api/device/{deviceId}/rgb`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColorRequest {
    pub rgbcolor: String,
    pub transition_time: Option<u32>,
}

/// Body of `PUT /api/device/{deviceId}/hsl`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HslColorRequest {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub transition_time: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DimmingRequest {
    pub dimming: u8,
}

#[derive(Debug, Deserialize)]
pub struct PowerRequest {
    pub power: i64,
}

#[derive(Debug, Deserialize)]
pub struct PositioningRequest {
    pub positioning: f32,
}

/// Body of `PUT /api/device/{deviceId}`.
#[derive(Debug, Deserialize)]
pub struct StateRequest {
    pub power: i64,
    pub dimmer: u8,
    pub rgbcolor: Option<String>,
}

fn transition(millis: Option<u32>) -> TransitionTime {
    millis.map_or(TransitionTime::DEFAULT, TransitionTime::from_millis)
}

/// `GET /api/device/{deviceId}`
pub async fn get<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<DeviceBody>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let device = state.gateway.get_device(device_id).await?;
    Ok(Json(DeviceBody::from(&device)))
}

/// `PUT /api/device/{deviceId}/color`
pub async fn set_color<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<ColorRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let color = XyColor {
        x: req.xcolor,
        y: req.ycolor,
    };
    let result = state
        .gateway
        .put_device_color_timed(device_id, color, transition(req.transition_time))
        .await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}/rgb`
pub async fn set_rgb<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<RgbColorRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let result = state
        .gateway
        .put_device_color_rgb_timed(device_id, &req.rgbcolor, transition(req.transition_time))
        .await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}/hsl`
pub async fn set_hsl<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<HslColorRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let hsl = Hsl::new(req.hue, req.saturation, req.lightness)?;
    let result = state
        .gateway
        .put_device_color_hsl_timed(device_id, hsl, transition(req.transition_time))
        .await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}/dimmer`
pub async fn set_dimmer<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<DimmingRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let result = state
        .gateway
        .put_device_dimming(device_id, req.dimming)
        .await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}/power`
pub async fn set_power<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<PowerRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let result = state.gateway.put_device_power(device_id, req.power).await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}/position`
pub async fn set_position<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<PositioningRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let result = state
        .gateway
        .put_device_positioning(device_id, req.positioning)
        .await?;
    Ok(Json(result))
}

/// `PUT /api/device/{deviceId}` — power, dimmer and an optional colour at once.
pub async fn set_state<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<StateRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let device_id: DeviceId = id.parse()?;
    let Json(req) = payload?;
    let device_state = DeviceState::new(req.power, req.dimmer, req.rgbcolor.as_deref())?;
    let result = state
        .gateway
        .put_device_state(device_id, device_state)
        .await?;
    Ok(Json(result))
}
