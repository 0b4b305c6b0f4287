//! Pairing — provisioning a new client identity with the gateway.
//!
//! A fresh identity is obtained by opening a session with the bootstrap
//! identity and the security code printed on the gateway, then asking the
//! gateway to issue a pre-shared key for the new client id.

use std::fmt;
use std::time::Duration;

use tradfri_domain::credentials::Credentials;
use tradfri_domain::error::{TradfriError, ValidationError};

use crate::ports::{Connector, MessageCodec};
use crate::services::gateway_client::{
    DEFAULT_HANDSHAKE_TIMEOUT, DEFAULT_READ_TIMEOUT, GatewayClient, GatewayConfig,
};

/// PSK identity the gateway accepts together with its security code.
pub const BOOTSTRAP_IDENTITY: &str = "Client_identity";
/// Gateway security codes are never shorter than this.
pub const MIN_SECURITY_CODE_LEN: usize = 10;

#[derive(Clone)]
pub struct PairingConfig {
    /// `host[:port]` of the gateway.
    pub address: String,
    /// Identity to provision.
    pub client_id: String,
    /// Security code printed on the gateway.
    pub security_code: String,
    pub handshake_timeout: Duration,
    pub read_timeout: Duration,
}

impl PairingConfig {
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        client_id: impl Into<String>,
        security_code: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            client_id: client_id.into(),
            security_code: security_code.into(),
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.trim().is_empty() {
            return Err(ValidationError::EmptyClientId);
        }
        if self.security_code.chars().count() < MIN_SECURITY_CODE_LEN {
            return Err(ValidationError::SecurityCodeTooShort {
                min: MIN_SECURITY_CODE_LEN,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for PairingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingConfig")
            .field("address", &self.address)
            .field("client_id", &self.client_id)
            .field("security_code", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Provision `config.client_id` and return its credentials.
///
/// The caller is responsible for persisting the result.
///
/// # Errors
///
/// Returns [`TradfriError::Validation`] before any IO for an empty client id
/// or a too short security code, [`TradfriError::Connection`] when the
/// bootstrap session cannot be opened, and [`TradfriError::Rejected`] when the
/// gateway refuses the exchange.
#[tracing::instrument(skip_all, fields(address = %config.address, client_id = %config.client_id))]
pub async fn pair<N, K>(
    connector: &N,
    codec: K,
    config: PairingConfig,
) -> Result<Credentials, TradfriError>
where
    N: Connector,
    K: MessageCodec,
{
    config.validate()?;

    let session = GatewayConfig {
        address: config.address,
        identity: BOOTSTRAP_IDENTITY.to_string(),
        psk: config.security_code,
        handshake_timeout: config.handshake_timeout,
        read_timeout: config.read_timeout,
    };
    let client = GatewayClient::connect(connector, codec, session).await?;
    let exchange = client.auth_exchange(&config.client_id).await?;
    tracing::info!(type_identifier = %exchange.type_identifier, "client identity provisioned");

    Ok(Credentials::new(config.client_id, exchange.token))
}

#[cfg(test)]
mod tests {
    use tradfri_domain::message::Code;

    use super::*;
    use crate::testing::{ConnectBehavior, ScriptedChannel, TestCodec, TestConnector};

    const CODE: &str = "AbCdEfGhIjKlMnOp";

    #[tokio::test]
    async fn should_open_bootstrap_session_with_security_code() {
        let channel = ScriptedChannel::new()
            .reply(Code::CREATED, r#"{"9091":"issued-psk","9029":"1.10.36"}"#);
        let connector = TestConnector::new(ConnectBehavior::Succeed(channel));

        let credentials = pair(
            &connector,
            TestCodec,
            PairingConfig::new("192.168.1.20", "kitchen-panel", CODE),
        )
        .await
        .unwrap();

        assert_eq!(credentials, Credentials::new("kitchen-panel", "issued-psk"));
        let sessions = connector.sessions();
        assert_eq!(sessions[0].identity, BOOTSTRAP_IDENTITY);
        assert_eq!(sessions[0].psk, CODE);
    }

    #[tokio::test]
    async fn should_reject_empty_client_id_without_io() {
        let connector = TestConnector::new(ConnectBehavior::Fail);
        let err = pair(&connector, TestCodec, PairingConfig::new("gw", "  ", CODE))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TradfriError::Validation(ValidationError::EmptyClientId)
        ));
        assert!(connector.sessions().is_empty());
    }

    #[tokio::test]
    async fn should_reject_short_security_code_without_io() {
        let connector = TestConnector::new(ConnectBehavior::Fail);
        let err = pair(&connector, TestCodec, PairingConfig::new("gw", "panel", "123456789"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(connector.sessions().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_connection_failure() {
        let connector = TestConnector::new(ConnectBehavior::Fail);
        let err = pair(&connector, TestCodec, PairingConfig::new("gw", "panel", CODE))
            .await
            .unwrap_err();
        assert!(matches!(err, TradfriError::Connection(_)));
    }
}
