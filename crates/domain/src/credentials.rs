//! Credentials produced by pairing a new client identity with the gateway.

use std::fmt;

/// Result of the token exchange (`/15011/9063`).
#[derive(Clone, PartialEq, Eq)]
pub struct TokenExchange {
    /// Pre-shared key issued for the new identity (`9091`).
    pub token: String,
    /// Gateway-provided type identifier (`9029`).
    pub type_identifier: String,
}

/// A client identity with its issued pre-shared key.
///
/// The gateway client only produces this value; persisting it is the
/// caller's job.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub token: String,
}

impl Credentials {
    #[must_use]
    pub fn new(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for TokenExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenExchange")
            .field("token", &"<redacted>")
            .field("type_identifier", &self.type_identifier)
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_redact_token_in_debug_output() {
        let creds = Credentials::new("kitchen-panel", "s3cr3tT0k3n");
        let debug = format!("{creds:?}");
        assert!(debug.contains("kitchen-panel"));
        assert!(!debug.contains("s3cr3tT0k3n"));
    }
}
