//! # tradfri-app
//!
//! Application layer — the gateway client and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SecureChannel` — write/read whole datagrams to and from the gateway
//!   - `Connector` — establish a secured session and hand out a channel
//!   - `MessageCodec` — turn requests into bytes and bytes into responses
//!   - `ExchangeObserver` — hook notified of every exchange
//! - Define the **driving/inbound port** `Gateway` that REST and gRPC adapters call
//! - Implement the `GatewayClient`: message ids, request building, correlation
//!   and the typed device/group operations
//! - Map the gateway's numerically keyed JSON to and from domain types
//! - Provision new client identities (pairing)
//!
//! ## Dependency rule
//! Depends on `tradfri-domain` only (plus `tokio::sync`/`tokio::time` for the
//! call lock and timeouts). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod observer;
pub mod ports;
pub mod protocol;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
