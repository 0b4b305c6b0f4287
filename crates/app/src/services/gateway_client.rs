//! Gateway client — request building, correlation and typed operations.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::{Instant, timeout, timeout_at};
use tradfri_domain::color::{Hsl, Rgb, TransitionTime, XyColor};
use tradfri_domain::command::{DeviceState, Position, Power};
use tradfri_domain::credentials::TokenExchange;
use tradfri_domain::device::Device;
use tradfri_domain::error::{ConnectionError, RejectedError, TimeoutError, TradfriError};
use tradfri_domain::group::Group;
use tradfri_domain::id::{DeviceId, GroupId};
use tradfri_domain::message::{Code, MessageType, Request, Response};
use tradfri_domain::response::CommandResult;

use crate::observer::TracingObserver;
use crate::ports::{Connector, ExchangeObserver, Gateway, MessageCodec, SecureChannel, SessionParams};
use crate::protocol::wire::{WireDevice, WireGroup, WireTokenExchange};
use crate::protocol::{self, paths, payload};

/// Bound on session establishment.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(30);
/// Bound on waiting for a response after a write.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Everything needed to open a session with the gateway.
#[derive(Clone)]
pub struct GatewayConfig {
    /// `host[:port]` of the gateway.
    pub address: String,
    /// PSK identity (the provisioned client id).
    pub identity: String,
    /// Pre-shared key issued for `identity`.
    pub psk: String,
    pub handshake_timeout: Duration,
    pub read_timeout: Duration,
}

impl GatewayConfig {
    /// Config with the default timeouts.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        identity: impl Into<String>,
        psk: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            identity: identity.into(),
            psk: psk.into(),
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("address", &self.address)
            .field("identity", &self.identity)
            .field("psk", &"<redacted>")
            .field("handshake_timeout", &self.handshake_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

/// Client for one gateway session.
///
/// Calls are serialised: one request is written and its response awaited
/// before the next call may touch the channel.
pub struct GatewayClient<C, K> {
    channel: Mutex<C>,
    codec: K,
    message_id: AtomicU16,
    read_timeout: Duration,
    observer: Arc<dyn ExchangeObserver>,
}

impl<C: SecureChannel, K: MessageCodec> GatewayClient<C, K> {
    /// Open a session through `connector`, bounded by the handshake timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Connection`] naming the gateway address when
    /// the handshake fails or does not finish in time.
    #[tracing::instrument(skip_all, fields(address = %config.address, identity = %config.identity))]
    pub async fn connect<N>(
        connector: &N,
        codec: K,
        config: GatewayConfig,
    ) -> Result<Self, TradfriError>
    where
        N: Connector<Channel = C>,
    {
        let params = SessionParams {
            address: config.address.clone(),
            identity: config.identity,
            psk: config.psk,
        };
        let channel = match timeout(config.handshake_timeout, connector.connect(&params)).await {
            Ok(Ok(channel)) => channel,
            Ok(Err(TradfriError::Connection(err))) => return Err(err.into()),
            Ok(Err(err)) => {
                return Err(ConnectionError {
                    address: config.address,
                    source: Box::new(err),
                }
                .into());
            }
            Err(elapsed) => {
                return Err(ConnectionError {
                    address: config.address,
                    source: Box::new(elapsed),
                }
                .into());
            }
        };
        tracing::info!("gateway session established");
        Ok(Self::from_channel(channel, codec).with_read_timeout(config.read_timeout))
    }

    /// Wrap an already established channel.
    pub fn from_channel(channel: C, codec: K) -> Self {
        Self {
            channel: Mutex::new(channel),
            codec,
            message_id: AtomicU16::new(0),
            read_timeout: DEFAULT_READ_TIMEOUT,
            observer: Arc::new(TracingObserver),
        }
    }

    #[must_use]
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ExchangeObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Continue numbering after `last`; the next request uses `last + 1`.
    #[must_use]
    pub fn with_last_message_id(self, last: u16) -> Self {
        self.message_id.store(last, Ordering::Relaxed);
        self
    }

    /// Release the channel, e.g. to close the session gracefully.
    pub fn into_channel(self) -> C {
        self.channel.into_inner()
    }

    fn next_message_id(&self) -> u16 {
        self.message_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    fn build(&self, code: Code, path: &str, payload: Vec<u8>) -> Request {
        Request {
            kind: MessageType::Confirmable,
            code,
            message_id: self.next_message_id(),
            token: Vec::new(),
            path: path.to_string(),
            payload,
        }
    }

    #[must_use]
    pub fn build_get(&self, path: &str) -> Request {
        self.build(Code::GET, path, Vec::new())
    }

    #[must_use]
    pub fn build_put(&self, path: &str, payload: Vec<u8>) -> Request {
        self.build(Code::PUT, path, payload)
    }

    #[must_use]
    pub fn build_post(&self, path: &str, payload: Vec<u8>) -> Request {
        self.build(Code::POST, path, payload)
    }

    /// Write `request` and wait for the response carrying its message id.
    ///
    /// Datagrams with any other message id are dropped. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Timeout`] when nothing matching arrives within
    /// the read timeout, [`TradfriError::Codec`] for undecodable bytes, or a
    /// transport error from the channel.
    #[tracing::instrument(
        skip_all,
        fields(code = %request.code, path = %request.path, message_id = request.message_id)
    )]
    pub async fn call(&self, request: Request) -> Result<Response, TradfriError> {
        let datagram = self.codec.encode(&request)?;
        let mut channel = self.channel.lock().await;
        self.observer.on_request(&request);
        channel.send(&datagram).await?;

        let deadline = Instant::now() + self.read_timeout;
        loop {
            let Ok(received) = timeout_at(deadline, channel.recv()).await else {
                return Err(TimeoutError {
                    path: request.path,
                    after: self.read_timeout,
                }
                .into());
            };
            let response = self.codec.decode(&received?)?;
            if response.message_id == request.message_id {
                self.observer.on_response(&request, &response);
                return Ok(response);
            }
            self.observer.on_discarded(&request, &response);
        }
    }

    /// GET an arbitrary resource. The response is returned whatever its code.
    ///
    /// # Errors
    ///
    /// Propagates [`call`](Self::call) errors.
    pub async fn get(&self, path: &str) -> Result<Response, TradfriError> {
        let request = self.build_get(&paths::normalize(path));
        self.call(request).await
    }

    /// PUT a raw payload to an arbitrary resource.
    ///
    /// # Errors
    ///
    /// Propagates [`call`](Self::call) errors.
    pub async fn put(&self, path: &str, payload: &str) -> Result<Response, TradfriError> {
        let request = self.build_put(&paths::normalize(path), payload.as_bytes().to_vec());
        self.call(request).await
    }

    /// Ask the gateway to issue a pre-shared key for `client_id`.
    ///
    /// Only meaningful on a session opened with the bootstrap identity and
    /// the gateway security code.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Rejected`] when the gateway refuses (e.g. the
    /// identity already exists), or a decode error for an unexpected body.
    #[tracing::instrument(skip(self))]
    pub async fn auth_exchange(&self, client_id: &str) -> Result<TokenExchange, TradfriError> {
        let body = encode_json(&payload::auth_exchange(client_id))?;
        let request = self.build_post(paths::AUTH_EXCHANGE, body);
        let response = self.call(request).await?;
        ensure_success(paths::AUTH_EXCHANGE, &response)?;
        let wire: WireTokenExchange = protocol::decode("token exchange", &response.payload)?;
        Ok(wire.into())
    }

    async fn read<T>(&self, path: &str, what: &'static str) -> Result<T, TradfriError>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.call(self.build_get(path)).await?;
        ensure_success(path, &response)?;
        Ok(protocol::decode(what, &response.payload)?)
    }

    async fn write(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<CommandResult, TradfriError> {
        let request = self.build_put(path, encode_json(body)?);
        let response = self.call(request).await?;
        Ok(CommandResult::new(response.code.to_string()))
    }
}

fn encode_json(value: &serde_json::Value) -> Result<Vec<u8>, TradfriError> {
    serde_json::to_vec(value).map_err(|err| TradfriError::Codec(Box::new(err)))
}

fn ensure_success(path: &str, response: &Response) -> Result<(), RejectedError> {
    if response.code.is_success() {
        Ok(())
    } else {
        Err(RejectedError {
            path: path.to_string(),
            code: response.code,
        })
    }
}

impl<C: SecureChannel, K: MessageCodec> Gateway for GatewayClient<C, K> {
    #[tracing::instrument(skip(self))]
    async fn list_groups(&self) -> Result<Vec<Group>, TradfriError> {
        let ids: Vec<u32> = self.read(paths::GROUPS, "group id list").await?;
        let mut groups = Vec::with_capacity(ids.len());
        for id in ids.into_iter().map(GroupId::from_raw) {
            let group = self.get_group(id).await.inspect_err(|err| {
                tracing::warn!(group_id = %id, error = %err, "unable to fetch group");
            })?;
            groups.push(group);
        }
        Ok(groups)
    }

    #[tracing::instrument(skip(self))]
    async fn get_group(&self, id: GroupId) -> Result<Group, TradfriError> {
        let wire: WireGroup = self.read(&paths::group(id), "group").await?;
        Ok(wire.into())
    }

    #[tracing::instrument(skip(self))]
    async fn list_device_ids(&self) -> Result<Vec<DeviceId>, TradfriError> {
        let ids: Vec<u32> = self.read(paths::DEVICES, "device id list").await?;
        Ok(ids.into_iter().map(DeviceId::from_raw).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn list_devices(&self) -> Result<Vec<Device>, TradfriError> {
        let ids = self.list_device_ids().await?;
        self.fetch_devices(ids).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_group_devices(&self, id: GroupId) -> Result<Vec<Device>, TradfriError> {
        let group = self.get_group(id).await?;
        self.fetch_devices(group.device_ids).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_device(&self, id: DeviceId) -> Result<Device, TradfriError> {
        let wire: WireDevice = self.read(&paths::device(id), "device").await?;
        Ok(wire.into())
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_dimming(
        &self,
        id: DeviceId,
        dimming: u8,
    ) -> Result<CommandResult, TradfriError> {
        self.write(&paths::device(id), &payload::device_dimming(dimming))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_power(&self, id: DeviceId, power: i64) -> Result<CommandResult, TradfriError> {
        let power = Power::try_from(power)?;
        self.write(&paths::device(id), &payload::device_power(power))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_state(
        &self,
        id: DeviceId,
        state: DeviceState,
    ) -> Result<CommandResult, TradfriError> {
        self.write(&paths::device(id), &payload::device_state(state))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_color_timed(
        &self,
        id: DeviceId,
        color: XyColor,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        self.write(&paths::device(id), &payload::device_color_xy(color, transition))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_color_rgb_timed(
        &self,
        id: DeviceId,
        rgb: &str,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        let rgb: Rgb = rgb.parse()?;
        self.put_device_color_hsl_timed(id, rgb.to_hsl(), transition)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_color_hsl_timed(
        &self,
        id: DeviceId,
        hsl: Hsl,
        transition: TransitionTime,
    ) -> Result<CommandResult, TradfriError> {
        self.write(&paths::device(id), &payload::device_color_hsl(hsl, transition))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_device_positioning(
        &self,
        id: DeviceId,
        positioning: f32,
    ) -> Result<CommandResult, TradfriError> {
        let position = Position::new(positioning)?;
        self.write(&paths::device(id), &payload::device_position(position))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_group_power(&self, id: GroupId, power: i64) -> Result<CommandResult, TradfriError> {
        let power = Power::try_from(power)?;
        self.write(&paths::group(id), &payload::group_power(power))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn put_group_dimming(
        &self,
        id: GroupId,
        dimming: u8,
    ) -> Result<CommandResult, TradfriError> {
        self.write(&paths::group(id), &payload::group_dimming(dimming))
            .await
    }
}

impl<C: SecureChannel, K: MessageCodec> GatewayClient<C, K> {
    /// Fetch devices one by one, failing on the first error.
    async fn fetch_devices(&self, ids: Vec<DeviceId>) -> Result<Vec<Device>, TradfriError> {
        let mut devices = Vec::with_capacity(ids.len());
        for id in ids {
            let device = self.get_device(id).await.inspect_err(|err| {
                tracing::warn!(device_id = %id, error = %err, "unable to fetch device");
            })?;
            devices.push(device);
        }
        Ok(devices)
    }
}
