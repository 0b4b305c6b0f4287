//! Secured channel port — the encrypted datagram pipe to the gateway.
//!
//! The client only needs "write one datagram" and "read one datagram"; the
//! read timeout is applied by the caller. Establishing the session (key
//! registration, local endpoint, handshake) is the [`Connector`]'s job.

use std::fmt;
use std::future::Future;

use tradfri_domain::error::TradfriError;

/// An established, encrypted, point-to-point datagram channel.
pub trait SecureChannel: Send {
    /// Write one whole datagram to the peer.
    fn send(&mut self, datagram: &[u8]) -> impl Future<Output = Result<(), TradfriError>> + Send;

    /// Wait for the next datagram from the peer.
    ///
    /// May wait forever; callers bound it with their own timeout.
    fn recv(&mut self) -> impl Future<Output = Result<Vec<u8>, TradfriError>> + Send;
}

/// Parameters of a pre-shared-key session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionParams {
    /// `host[:port]` of the gateway.
    pub address: String,
    /// PSK identity presented during the handshake.
    pub identity: String,
    /// Pre-shared secret registered for `identity`.
    pub psk: String,
}

impl fmt::Debug for SessionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionParams")
            .field("address", &self.address)
            .field("identity", &self.identity)
            .field("psk", &"<redacted>")
            .finish()
    }
}

/// Establishes secured sessions with the gateway.
///
/// Implementations register the identity/secret pair in their key store,
/// open a local ephemeral endpoint and perform the handshake. The caller
/// bounds the whole establishment with its handshake timeout.
pub trait Connector: Send + Sync {
    /// Channel produced by a successful handshake.
    type Channel: SecureChannel + 'static;

    /// Open a new session.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Connection`] when the handshake fails.
    fn connect(
        &self,
        params: &SessionParams,
    ) -> impl Future<Output = Result<Self::Channel, TradfriError>> + Send;
}
