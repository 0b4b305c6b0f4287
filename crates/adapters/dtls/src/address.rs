//! Gateway address helpers.

use std::net::{IpAddr, SocketAddr};

/// CoAP over DTLS port.
pub const DEFAULT_PORT: u16 = 5684;

/// Append [`DEFAULT_PORT`] to an address given without a port.
///
/// Bare IPv6 addresses are bracketed.
#[must_use]
pub fn with_default_port(address: &str) -> String {
    let address = address.trim();
    if address.parse::<SocketAddr>().is_ok() {
        return address.to_string();
    }
    if let Ok(IpAddr::V6(ip)) = address.parse::<IpAddr>() {
        return format!("[{ip}]:{DEFAULT_PORT}");
    }
    match address.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
            address.to_string()
        }
        _ => format!("{address}:{DEFAULT_PORT}"),
    }
}
