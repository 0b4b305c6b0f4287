//! Port definitions — traits that adapters implement or call.
//!
//! Ports are the boundaries between the gateway client and the outside world.
//! They are defined here (in `app`) so that both the client and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod channel;
pub mod codec;
pub mod gateway;
pub mod observer;

pub use channel::{Connector, SecureChannel, SessionParams};
pub use codec::MessageCodec;
pub use gateway::Gateway;
pub use observer::ExchangeObserver;
