//! Application services — use-case implementations.
//!
//! Services accept port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod gateway_client;
pub mod pairing;

pub use gateway_client::{GatewayClient, GatewayConfig};
pub use pairing::{PairingConfig, pair};
