//! DTLS adapter error types.

use tradfri_domain::error::TradfriError;

/// Errors specific to the DTLS adapter.
#[derive(Debug, thiserror::Error)]
pub enum DtlsError {
    /// The gateway address could not be resolved.
    #[error("unable to resolve gateway address {address}")]
    Resolve {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Resolution succeeded but yielded no usable address.
    #[error("no socket address found for {0}")]
    NoAddress(String),

    /// Binding or connecting the local UDP socket failed.
    #[error("unable to open local UDP endpoint")]
    Socket(#[source] std::io::Error),

    /// The DTLS handshake failed.
    #[error("DTLS handshake failed")]
    Handshake(#[source] webrtc_dtls::Error),

    /// No key is registered for the identity presented during the handshake.
    #[error("no pre-shared key registered for identity {0:?}")]
    UnknownIdentity(String),

    /// Reading from or writing to the established connection failed.
    #[error("DTLS connection error")]
    Io(#[source] webrtc_util::Error),
}

impl DtlsError {
    /// Convert into a [`TradfriError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> TradfriError {
        TradfriError::Transport(Box::new(self))
    }
}

impl From<DtlsError> for TradfriError {
    fn from(err: DtlsError) -> Self {
        err.into_domain()
    }
}
