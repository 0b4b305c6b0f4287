//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TradfriError`] via `From`, so adapters can map a single enum onto their
//! wire conventions (HTTP status, gRPC code, process exit).

use std::time::Duration;

use crate::message::Code;

/// Boxed error used for failures raised by pluggable collaborators
/// (secured channel, message codec).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error for every gateway operation.
#[derive(Debug, thiserror::Error)]
pub enum TradfriError {
    /// Input rejected before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The secured session could not be established.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Writing to or reading from the secured channel failed.
    #[error("transport error")]
    Transport(#[source] BoxError),

    /// The message envelope could not be encoded or decoded.
    #[error("message codec error")]
    Codec(#[source] BoxError),

    /// No matching response arrived within the read timeout.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// The gateway answered with a non-success response code.
    #[error(transparent)]
    Rejected(#[from] RejectedError),

    /// The gateway's JSON payload did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl TradfriError {
    /// Whether the error was raised client-side, before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the gateway reported the addressed resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected(err) if err.code == Code::NOT_FOUND)
    }
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Power must be `0` (off) or `1` (on).
    #[error("invalid value for setting power state, must be 1 or 0 (got {0})")]
    InvalidPower(i64),

    /// A value fell outside its accepted range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// An RGB colour was not exactly six hexadecimal digits.
    #[error("invalid RGB hex colour {0:?}, expected six hex digits such as 8f2686")]
    InvalidRgbHex(String),

    /// Identifiers are positive integers.
    #[error("invalid {kind} identifier {value:?}")]
    InvalidId { kind: &'static str, value: String },

    /// The client identity to provision must not be empty.
    #[error("client id must not be empty")]
    EmptyClientId,

    /// The gateway security code is too short to be genuine.
    #[error("security code must be at least {min} characters")]
    SecurityCodeTooShort { min: usize },
}

/// The session handshake with the gateway failed or timed out.
#[derive(Debug, thiserror::Error)]
#[error("unable to connect to gateway at {address}")]
pub struct ConnectionError {
    /// Address the client tried to reach.
    pub address: String,
    /// Underlying cause.
    #[source]
    pub source: BoxError,
}

/// A call did not receive its response in time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no response from gateway for {path} within {after:?}")]
pub struct TimeoutError {
    /// Resource path of the unanswered request.
    pub path: String,
    /// Read timeout that elapsed.
    pub after: Duration,
}

/// The gateway answered a read with an error code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gateway rejected request to {path}: {code}")]
pub struct RejectedError {
    /// Resource path of the request.
    pub path: String,
    /// Response code sent by the gateway.
    pub code: Code,
}

/// A JSON payload from the gateway did not have the expected shape.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {what} from gateway payload")]
pub struct DecodeError {
    /// Human name of the expected value (e.g. `"device"`).
    pub what: &'static str,
    /// Underlying JSON error.
    #[source]
    pub source: BoxError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_power_validation_message() {
        let err = ValidationError::InvalidPower(2);
        assert_eq!(
            err.to_string(),
            "invalid value for setting power state, must be 1 or 0 (got 2)"
        );
    }

    #[test]
    fn should_include_address_in_connection_error() {
        let err = ConnectionError {
            address: "192.168.1.20:5684".to_string(),
            source: "handshake timed out".into(),
        };
        assert_eq!(
            err.to_string(),
            "unable to connect to gateway at 192.168.1.20:5684"
        );
    }

    #[test]
    fn should_flag_validation_errors() {
        let err: TradfriError = ValidationError::EmptyClientId.into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn should_flag_not_found_rejections() {
        let err: TradfriError = RejectedError {
            path: "/15001/65550".to_string(),
            code: Code::NOT_FOUND,
        }
        .into();
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn should_not_flag_other_rejections_as_not_found() {
        let err: TradfriError = RejectedError {
            path: "/15004".to_string(),
            code: Code::UNAUTHORIZED,
        }
        .into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn should_display_timeout_with_path() {
        let err = TimeoutError {
            path: "/15004".to_string(),
            after: Duration::from_secs(1),
        };
        assert_eq!(
            err.to_string(),
            "no response from gateway for /15004 within 1s"
        );
    }
}
