//! # tradfri-adapter-grpc-tonic
//!
//! gRPC adapter built on [tonic](https://docs.rs/tonic), serving
//! `tradfri.TradfriService` (see `proto/tradfri.proto`).
//!
//! Identifiers below `1` are rejected with `InvalidArgument` before the
//! gateway is called. Gateway failures map to `NotFound` for a `4.04` and
//! `Internal` otherwise.

mod convert;
pub mod error;
pub mod proto;
mod service;

pub use service::TradfriGrpc;
