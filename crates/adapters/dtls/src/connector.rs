//! Session establishment with the gateway.

use std::future::Future;
use std::sync::Arc;

use tokio::net::{UdpSocket, lookup_host};
use tradfri_app::ports::{Connector, SessionParams};
use tradfri_domain::error::{ConnectionError, TradfriError};
use webrtc_dtls::cipher_suite::CipherSuiteId;
use webrtc_dtls::config::Config;
use webrtc_dtls::conn::DTLSConn;

use crate::address::with_default_port;
use crate::channel::DtlsChannel;
use crate::error::DtlsError;
use crate::keystore::KeyStore;

/// Opens DTLS PSK sessions with the gateway.
#[derive(Debug, Clone, Default)]
pub struct DtlsConnector {
    keystore: KeyStore,
}

impl DtlsConnector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing key store, shared with other connectors.
    #[must_use]
    pub fn with_keystore(keystore: KeyStore) -> Self {
        Self { keystore }
    }

    #[must_use]
    pub fn keystore(&self) -> &KeyStore {
        &self.keystore
    }

    fn config(&self, identity: &str) -> Result<Config, DtlsError> {
        let key = self
            .keystore
            .get_key(identity)
            .ok_or_else(|| DtlsError::UnknownIdentity(identity.to_string()))?;
        Ok(Config {
            psk: Some(Arc::new(move |_hint: &[u8]| -> Result<Vec<u8>, webrtc_dtls::Error> {
                Ok(key.clone())
            })),
            psk_identity_hint: Some(identity.as_bytes().to_vec()),
            cipher_suites: vec![CipherSuiteId::Tls_Psk_With_Aes_128_Ccm_8],
            ..Config::default()
        })
    }

    async fn open(&self, params: &SessionParams) -> Result<DtlsChannel, DtlsError> {
        self.keystore
            .add_key(params.identity.as_str(), params.psk.as_bytes());

        let address = with_default_port(&params.address);
        let peer = lookup_host(address.as_str())
            .await
            .map_err(|source| DtlsError::Resolve {
                address: address.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| DtlsError::NoAddress(address.clone()))?;

        let local = if peer.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(local).await.map_err(DtlsError::Socket)?;
        socket.connect(peer).await.map_err(DtlsError::Socket)?;
        tracing::info!(%peer, identity = %params.identity, "starting DTLS handshake");

        let config = self.config(&params.identity)?;
        let conn = DTLSConn::new(Arc::new(socket), config, true, None)
            .await
            .map_err(DtlsError::Handshake)?;
        tracing::info!(%peer, "DTLS session established");

        Ok(DtlsChannel::new(conn))
    }
}

impl Connector for DtlsConnector {
    type Channel = DtlsChannel;

    fn connect(
        &self,
        params: &SessionParams,
    ) -> impl Future<Output = Result<Self::Channel, TradfriError>> + Send {
        async move {
            self.open(params).await.map_err(|err| {
                ConnectionError {
                    address: with_default_port(&params.address),
                    source: Box::new(err),
                }
                .into()
            })
        }
    }
}
