//! Protocol mapper — the gateway's resource paths and numerically keyed JSON.
//!
//! Reads go through the `wire` structs, which mirror the gateway payloads
//! and convert into domain types. Writes are built by `payload` as minimal
//! objects holding only the keys that change.

pub mod paths;
pub mod payload;
pub mod wire;

use serde::de::DeserializeOwned;
use tradfri_domain::error::DecodeError;

/// Parse a gateway JSON payload, naming `what` in the error.
///
/// # Errors
///
/// Returns [`DecodeError`] when `bytes` is not JSON of the expected shape.
pub fn decode<T: DeserializeOwned>(what: &'static str, bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError {
        what,
        source: Box::new(err),
    })
}
