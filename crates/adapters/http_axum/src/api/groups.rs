//! JSON REST handlers for groups.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use tradfri_app::ports::Gateway;
use tradfri_domain::id::{DeviceId, GroupId};
use tradfri_domain::response::{CommandResult, GroupResponse};

use super::DeviceBody;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PowerRequest {
    pub power: i64,
}

#[derive(Debug, Deserialize)]
pub struct DimmerRequest {
    pub dimming: u8,
}

/// `GET /api/groups`
pub async fn list<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = state.gateway.list_groups().await?;
    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}

/// `GET /api/groups/{groupId}`
pub async fn get<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group_id: GroupId = id.parse()?;
    let group = state.gateway.get_group(group_id).await?;
    Ok(Json(GroupResponse::from(&group)))
}

/// `GET /api/groups/{groupId}/deviceIds`
pub async fn device_ids<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DeviceId>>, ApiError> {
    let group_id: GroupId = id.parse()?;
    let group = state.gateway.get_group(group_id).await?;
    Ok(Json(group.device_ids))
}

/// `GET /api/groups/{groupId}/devices`
pub async fn devices<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DeviceBody>>, ApiError> {
    let group_id: GroupId = id.parse()?;
    let devices = state.gateway.list_group_devices(group_id).await?;
    Ok(Json(devices.iter().map(DeviceBody::from).collect()))
}

/// `PUT /api/groups/{groupId}/power`
pub async fn set_power<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<PowerRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let group_id: GroupId = id.parse()?;
    let Json(req) = payload?;
    let result = state.gateway.put_group_power(group_id, req.power).await?;
    Ok(Json(result))
}

/// `PUT /api/groups/{groupId}/dimmer`
pub async fn set_dimmer<G: Gateway + 'static>(
    State(state): State<AppState<G>>,
    Path(id): Path<String>,
    payload: Result<Json<DimmerRequest>, JsonRejection>,
) -> Result<Json<CommandResult>, ApiError> {
    let group_id: GroupId = id.parse()?;
    let Json(req) = payload?;
    let result = state
        .gateway
        .put_group_dimming(group_id, req.dimming)
        .await?;
    Ok(Json(result))
}
