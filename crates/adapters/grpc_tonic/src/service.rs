//! `tradfri.TradfriService` implementation over the [`Gateway`] port.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use tradfri_app::ports::Gateway;
use tradfri_domain::color::{Hsl, TransitionTime, XyColor};
use tradfri_domain::error::ValidationError;
use tradfri_domain::id::{DeviceId, GroupId};

use crate::error::GrpcError;
use crate::proto;
use crate::proto::change_device_color_request::Color;
use crate::proto::tradfri_service_server::{TradfriService, TradfriServiceServer};

/// gRPC front for a shared gateway.
pub struct TradfriGrpc<G> {
    gateway: Arc<G>,
}

impl<G> TradfriGrpc<G>
where
    G: Gateway + 'static,
{
    pub fn new(gateway: G) -> Self {
        Self::from_arc(Arc::new(gateway))
    }

    /// Share a gateway that the REST adapter also holds.
    pub fn from_arc(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Wrap into the tonic service ready to be added to a server.
    pub fn into_server(self) -> TradfriServiceServer<Self> {
        TradfriServiceServer::new(self)
    }
}

fn device_id(raw: i64) -> Result<DeviceId, Status> {
    DeviceId::new(raw).map_err(|err| GrpcError::from(err).into())
}

fn group_id(raw: i64) -> Result<GroupId, Status> {
    GroupId::new(raw).map_err(|err| GrpcError::from(err).into())
}

fn transition(millis: u32) -> TransitionTime {
    if millis == 0 {
        TransitionTime::DEFAULT
    } else {
        TransitionTime::from_millis(millis)
    }
}

fn out_of_range(field: &'static str, max: u16, value: impl Into<f64>) -> Status {
    GrpcError::from(ValidationError::OutOfRange {
        field,
        min: 0.0,
        max: f64::from(max),
        value: value.into(),
    })
    .into()
}

#[tonic::async_trait]
impl<G> TradfriService for TradfriGrpc<G>
where
    G: Gateway + 'static,
{
    async fn list_groups(
        &self,
        _request: Request<proto::ListGroupsRequest>,
    ) -> Result<Response<proto::ListGroupsResponse>, Status> {
        let groups = self
            .gateway
            .list_groups()
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::ListGroupsResponse {
            groups: groups.iter().map(proto::Group::from).collect(),
        }))
    }

    async fn get_group(
        &self,
        request: Request<proto::GetGroupRequest>,
    ) -> Result<Response<proto::GetGroupResponse>, Status> {
        let id = group_id(request.into_inner().id)?;
        let group = self.gateway.get_group(id).await.map_err(GrpcError::from)?;
        Ok(Response::new(proto::GetGroupResponse {
            group: Some(proto::Group::from(&group)),
        }))
    }

    async fn list_devices(
        &self,
        request: Request<proto::ListDevicesRequest>,
    ) -> Result<Response<proto::ListDevicesResponse>, Status> {
        let id = group_id(request.into_inner().group_id)?;
        let devices = self
            .gateway
            .list_group_devices(id)
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::ListDevicesResponse {
            devices: devices.iter().map(proto::Device::from).collect(),
        }))
    }

    async fn list_device_ids(
        &self,
        request: Request<proto::ListDeviceIDsRequest>,
    ) -> Result<Response<proto::ListDeviceIDsResponse>, Status> {
        let id = group_id(request.into_inner().group_id)?;
        let group = self.gateway.get_group(id).await.map_err(GrpcError::from)?;
        Ok(Response::new(proto::ListDeviceIDsResponse {
            ids: group
                .device_ids
                .iter()
                .map(|id| i64::from(id.get()))
                .collect(),
        }))
    }

    async fn get_device(
        &self,
        request: Request<proto::GetDeviceRequest>,
    ) -> Result<Response<proto::GetDeviceResponse>, Status> {
        let id = device_id(request.into_inner().id)?;
        let device = self.gateway.get_device(id).await.map_err(GrpcError::from)?;
        Ok(Response::new(proto::GetDeviceResponse {
            device: Some(proto::Device::from(&device)),
        }))
    }

    async fn change_device_color(
        &self,
        request: Request<proto::ChangeDeviceColorRequest>,
    ) -> Result<Response<proto::ChangeDeviceColorResponse>, Status> {
        let request = request.into_inner();
        let id = device_id(request.id)?;
        let fade = transition(request.transition_time);
        let result = match request.color {
            Some(Color::Rgb(rgb)) => {
                self.gateway
                    .put_device_color_rgb_timed(id, &rgb, fade)
                    .await
            }
            Some(Color::Xy(xy)) => {
                let color = XyColor {
                    x: u16::try_from(xy.x).map_err(|_| out_of_range("x", u16::MAX, xy.x))?,
                    y: u16::try_from(xy.y).map_err(|_| out_of_range("y", u16::MAX, xy.y))?,
                };
                self.gateway
                    .put_device_color_timed(id, color, fade)
                    .await
            }
            Some(Color::Hsl(hsl)) => {
                let hsl = Hsl::new(hsl.hue, hsl.saturation, hsl.lightness)
                    .map_err(GrpcError::from)?;
                self.gateway
                    .put_device_color_hsl_timed(id, hsl, fade)
                    .await
            }
            None => return Err(Status::invalid_argument("color is mandatory")),
        }
        .map_err(GrpcError::from)?;
        Ok(Response::new(proto::ChangeDeviceColorResponse {
            status: result.status,
        }))
    }

    async fn change_device_dimming(
        &self,
        request: Request<proto::ChangeDeviceDimmingRequest>,
    ) -> Result<Response<proto::ChangeDeviceDimmingResponse>, Status> {
        let request = request.into_inner();
        let id = device_id(request.id)?;
        let dimming = u8::try_from(request.value)
            .map_err(|_| out_of_range("dimming", u16::from(u8::MAX), request.value))?;
        let result = self
            .gateway
            .put_device_dimming(id, dimming)
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::ChangeDeviceDimmingResponse {
            status: result.status,
        }))
    }

    async fn turn_device_on(
        &self,
        request: Request<proto::TurnDeviceOnRequest>,
    ) -> Result<Response<proto::TurnDeviceOnResponse>, Status> {
        let id = device_id(request.into_inner().id)?;
        let result = self
            .gateway
            .put_device_power(id, 1)
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::TurnDeviceOnResponse {
            status: result.status,
        }))
    }

    async fn turn_device_off(
        &self,
        request: Request<proto::TurnDeviceOffRequest>,
    ) -> Result<Response<proto::TurnDeviceOffResponse>, Status> {
        let id = device_id(request.into_inner().id)?;
        let result = self
            .gateway
            .put_device_power(id, 0)
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::TurnDeviceOffResponse {
            status: result.status,
        }))
    }

    async fn change_device_positioning(
        &self,
        request: Request<proto::ChangeDevicePositioningRequest>,
    ) -> Result<Response<proto::ChangeDevicePositioningResponse>, Status> {
        let request = request.into_inner();
        let id = device_id(request.id)?;
        let result = self
            .gateway
            .put_device_positioning(id, request.value)
            .await
            .map_err(GrpcError::from)?;
        Ok(Response::new(proto::ChangeDevicePositioningResponse {
            status: result.status,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tonic::Code;
    use tradfri_domain::command::{DeviceState, Power};
    use tradfri_domain::device::{BlindControl, Device, DeviceControl, DeviceKind, DeviceMetadata};
    use tradfri_domain::error::{RejectedError, TradfriError};
    use tradfri_domain::group::Group;
    use tradfri_domain::message::Code as CoapCode;
    use tradfri_domain::response::CommandResult;

    use super::*;

    /// One group (`131073`) holding a single blind (`65538`).
    #[derive(Default)]
    struct StubGateway {
        calls: Mutex<Vec<String>>,
    }

    impl StubGateway {
        fn record(&self, call: String) -> Result<CommandResult, TradfriError> {
            self.calls.lock().unwrap().push(call);
            Ok(CommandResult::new("Changed"))
        }

        fn group() -> Group {
            Group {
                id: GroupId::from_raw(131_073),
                name: "Bedroom".to_string(),
                power: true,
                dimmer: 254,
                created_at: None,
                device_ids: vec![DeviceId::from_raw(65538)],
                scene_id: None,
                group_type: None,
            }
        }

        fn blind() -> Device {
            Device {
                id: DeviceId::from_raw(65538),
                name: "Blind".to_string(),
                kind: DeviceKind::Blind,
                metadata: DeviceMetadata::default(),
                created_at: None,
                last_seen: None,
                alive: true,
                control: DeviceControl::Blind(BlindControl { position: 30.0 }),
            }
        }

        fn missing(path: String) -> TradfriError {
            RejectedError {
                path,
                code: CoapCode::NOT_FOUND,
            }
            .into()
        }
    }

    impl Gateway for StubGateway {
        async fn list_groups(&self) -> Result<Vec<Group>, TradfriError> {
            Ok(vec![Self::group()])
        }

        async fn get_group(&self, id: GroupId) -> Result<Group, TradfriError> {
            if id == Self::group().id {
                Ok(Self::group())
            } else {
                Err(Self::missing(format!("/15004/{id}")))
            }
        }

        async fn list_device_ids(&self) -> Result<Vec<DeviceId>, TradfriError> {
            Ok(vec![Self::blind().id])
        }

        async fn list_devices(&self) -> Result<Vec<Device>, TradfriError> {
            Ok(vec![Self::blind()])
        }

        async fn list_group_devices(&self, id: GroupId) -> Result<Vec<Device>, TradfriError> {
            self.get_group(id).await.map(|_| vec![Self::blind()])
        }

        async fn get_device(&self, id: DeviceId) -> Result<Device, TradfriError> {
            if id == Self::blind().id {
                Ok(Self::blind())
            } else {
                Err(Self::missing(format!("/15001/{id}")))
            }
        }

        async fn put_device_dimming(
            &self,
            id: DeviceId,
            dimming: u8,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("dimmer {id} {dimming}"))
        }

        async fn put_device_power(
            &self,
            id: DeviceId,
            power: i64,
        ) -> Result<CommandResult, TradfriError> {
            let power = Power::try_from(power)?;
            self.record(format!("power {id} {}", power.as_u8()))
        }

        async fn put_device_state(
            &self,
            id: DeviceId,
            state: DeviceState,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("state {id} {}", state.dimmer))
        }

        async fn put_device_color_timed(
            &self,
            id: DeviceId,
            color: XyColor,
            transition: TransitionTime,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!(
                "xy {id} {}/{} {}ms",
                color.x,
                color.y,
                transition.as_millis()
            ))
        }

        async fn put_device_color_rgb_timed(
            &self,
            id: DeviceId,
            rgb: &str,
            transition: TransitionTime,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("rgb {id} {rgb} {}ms", transition.as_millis()))
        }

        async fn put_device_color_hsl_timed(
            &self,
            id: DeviceId,
            hsl: Hsl,
            _transition: TransitionTime,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("hsl {id} {}", hsl.hue))
        }

        async fn put_device_positioning(
            &self,
            id: DeviceId,
            positioning: f32,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("position {id} {positioning}"))
        }

        async fn put_group_power(
            &self,
            id: GroupId,
            power: i64,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("group power {id} {power}"))
        }

        async fn put_group_dimming(
            &self,
            id: GroupId,
            dimming: u8,
        ) -> Result<CommandResult, TradfriError> {
            self.record(format!("group dimmer {id} {dimming}"))
        }
    }

    fn service() -> TradfriGrpc<StubGateway> {
        TradfriGrpc::new(StubGateway::default())
    }

    fn calls(service: &TradfriGrpc<StubGateway>) -> Vec<String> {
        service.gateway.calls.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn should_list_groups() {
        let response = service()
            .list_groups(Request::new(proto::ListGroupsRequest {}))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].name, "Bedroom");
        assert_eq!(response.groups[0].device_ids, vec![65538]);
    }

    #[tokio::test]
    async fn should_reject_group_id_below_one() {
        let status = service()
            .get_group(Request::new(proto::GetGroupRequest { id: 0 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn should_map_missing_group_to_not_found() {
        let status = service()
            .list_device_ids(Request::new(proto::ListDeviceIDsRequest { group_id: 7 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn should_list_group_devices_with_control() {
        let response = service()
            .list_devices(Request::new(proto::ListDevicesRequest { group_id: 131_073 }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(
            response.devices[0].control,
            Some(proto::device::Control::Blind(proto::Blind { position: 30.0 }))
        );
    }

    #[tokio::test]
    async fn should_reject_negative_device_id_without_calling_gateway() {
        let service = service();
        let status = service
            .turn_device_on(Request::new(proto::TurnDeviceOnRequest { id: -1 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(calls(&service).is_empty());
    }

    #[tokio::test]
    async fn should_turn_device_on_and_off() {
        let service = service();
        let on = service
            .turn_device_on(Request::new(proto::TurnDeviceOnRequest { id: 65538 }))
            .await
            .unwrap()
            .into_inner();
        service
            .turn_device_off(Request::new(proto::TurnDeviceOffRequest { id: 65538 }))
            .await
            .unwrap();

        assert_eq!(on.status, "Changed");
        assert_eq!(calls(&service), vec!["power 65538 1", "power 65538 0"]);
    }

    #[tokio::test]
    async fn should_use_default_transition_when_zero() {
        let service = service();
        service
            .change_device_color(Request::new(proto::ChangeDeviceColorRequest {
                id: 65537,
                color: Some(Color::Rgb("8f2686".to_string())),
                transition_time: 0,
            }))
            .await
            .unwrap();

        assert_eq!(calls(&service), vec!["rgb 65537 8f2686 500ms"]);
    }

    #[tokio::test]
    async fn should_forward_xy_color_with_transition() {
        let service = service();
        service
            .change_device_color(Request::new(proto::ChangeDeviceColorRequest {
                id: 65537,
                color: Some(Color::Xy(proto::XyColor { x: 30140, y: 26909 })),
                transition_time: 1500,
            }))
            .await
            .unwrap();

        assert_eq!(calls(&service), vec!["xy 65537 30140/26909 1500ms"]);
    }

    #[tokio::test]
    async fn should_reject_color_request_without_color() {
        let status = service()
            .change_device_color(Request::new(proto::ChangeDeviceColorRequest {
                id: 65537,
                color: None,
                transition_time: 0,
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn should_reject_dimming_above_byte_range() {
        let service = service();
        let status = service
            .change_device_dimming(Request::new(proto::ChangeDeviceDimmingRequest {
                id: 65537,
                value: 256,
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(calls(&service).is_empty());
    }

    #[tokio::test]
    async fn should_change_positioning() {
        let service = service();
        service
            .change_device_positioning(Request::new(proto::ChangeDevicePositioningRequest {
                id: 65538,
                value: 80.0,
            }))
            .await
            .unwrap();

        assert_eq!(calls(&service), vec!["position 65538 80"]);
    }
}
