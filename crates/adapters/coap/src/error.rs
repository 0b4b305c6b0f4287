//! CoAP codec error types.

use coap_lite::error::MessageError;
use tradfri_domain::error::TradfriError;

/// Errors raised while framing or parsing CoAP messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoapError {
    /// The datagram is not a well-formed CoAP message.
    #[error("malformed CoAP message: {0}")]
    Malformed(String),

    /// Only version 1 is defined.
    #[error("unsupported CoAP version {0}")]
    UnsupportedVersion(u8),

    /// A request token longer than 8 bytes cannot be framed.
    #[error("token of {0} bytes exceeds the 8 byte limit")]
    TokenTooLong(usize),
}

impl From<MessageError> for CoapError {
    fn from(err: MessageError) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl CoapError {
    /// Convert into a [`TradfriError::Codec`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> TradfriError {
        TradfriError::Codec(Box::new(self))
    }
}

impl From<CoapError> for TradfriError {
    fn from(err: CoapError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_token_error() {
        assert_eq!(
            CoapError::TokenTooLong(9).to_string(),
            "token of 9 bytes exceeds the 8 byte limit"
        );
    }

    #[test]
    fn should_wrap_message_errors() {
        let err = CoapError::from(MessageError::InvalidPacketLength);
        assert!(matches!(err, CoapError::Malformed(_)));
    }

    #[test]
    fn should_convert_to_codec_error() {
        let err: TradfriError = CoapError::UnsupportedVersion(2).into();
        assert!(matches!(err, TradfriError::Codec(_)));
    }
}
