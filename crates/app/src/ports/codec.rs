//! Message codec port — framing of the request/response envelope.

use tradfri_domain::error::TradfriError;
use tradfri_domain::message::{Request, Response};

/// Encodes requests into datagrams and decodes datagrams into responses.
///
/// Implementations are pure and synchronous; errors surface as
/// [`TradfriError::Codec`].
pub trait MessageCodec: Send + Sync {
    /// Serialise a request.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Codec`] when the request cannot be framed
    /// (e.g. an oversized token).
    fn encode(&self, request: &Request) -> Result<Vec<u8>, TradfriError>;

    /// Parse a datagram received from the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`TradfriError::Codec`] for malformed datagrams.
    fn decode(&self, datagram: &[u8]) -> Result<Response, TradfriError>;
}
