//! # tradfri-domain
//!
//! Pure domain model for the Trådfri gateway client.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (bulbs, blinds, plugs, remotes) and their control state
//! - Define **Groups** (named collections of device ids)
//! - Define **write commands** (power, dimmer, colour, position) with validation
//! - Colour math: RGB hex decoding, RGB → HSL, linear range remapping
//! - The request/response **message envelope** exchanged with the gateway
//! - Caller-facing **response projections** of devices and groups
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod color;
pub mod command;
pub mod credentials;
pub mod device;
pub mod group;
pub mod message;
pub mod response;
