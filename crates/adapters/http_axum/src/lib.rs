//! # tradfri-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a JSON REST API over the [`Gateway`](tradfri_app::ports::Gateway)
//!   port (`/api/groups`, `/api/device/{deviceId}`, …)
//! - Parse path identifiers and request bodies, rejecting bad input with
//!   `400 Bad Request` before the gateway is contacted
//! - Map [`TradfriError`](tradfri_domain::error::TradfriError) onto HTTP
//!   status codes
//!
//! ## Dependency rule
//! Depends on `tradfri-app` (for the port trait) and `tradfri-domain` (for
//! the projections it serialises). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
