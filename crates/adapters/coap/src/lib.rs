//! # tradfri-adapter-coap
//!
//! Message codec adapter — frames requests and responses as CoAP (RFC 7252)
//! messages.
//!
//! ## Responsibilities
//! - Implement the `MessageCodec` port from `tradfri-app`
//! - Map requests onto `coap_lite::Packet`: header, token, one `Uri-Path`
//!   option per segment, `Content-Format` and payload
//! - Decode and validate responses received from the gateway
//!
//! Only what the gateway dialect needs is supported: no block-wise transfer,
//! no observe, no option values beyond path and content format on requests.
//!
//! ## Dependency rule
//! Depends on `tradfri-app` (for the port trait), `tradfri-domain` and
//! `coap-lite` for the wire format.

mod codec;
pub mod error;

pub use codec::{CoapCodec, CONTENT_FORMAT_JSON};
pub use error::CoapError;
