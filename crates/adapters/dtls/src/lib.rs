//! # tradfri-adapter-dtls
//!
//! Secured channel adapter — DTLS 1.2 with pre-shared keys over UDP.
//!
//! ## Responsibilities
//! - Implement the `Connector` and `SecureChannel` ports from `tradfri-app`
//! - Keep identity → pre-shared key pairs in an in-memory [`KeyStore`]
//! - Resolve the gateway address, bind an ephemeral UDP endpoint and run the
//!   client handshake with `TLS_PSK_WITH_AES_128_CCM_8`
//!
//! Retransmission during the handshake is handled by `webrtc-dtls`; the
//! handshake deadline is applied by the caller.
//!
//! ## Dependency rule
//! Depends on `tradfri-app` (for the port traits) and `tradfri-domain`.

pub mod address;
mod channel;
mod connector;
pub mod error;
mod keystore;

pub use address::{DEFAULT_PORT, with_default_port};
pub use channel::DtlsChannel;
pub use connector::DtlsConnector;
pub use error::DtlsError;
pub use keystore::KeyStore;
