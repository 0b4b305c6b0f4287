//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `tradfri.toml` in the working directory unless a path is given.
//! Every field has a default so the file is optional. Precedence, lowest
//! first: file, environment, `psk.key` credential file, command-line flags
//! (applied by the caller).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tradfri_adapter_dtls::with_default_port;
use tradfri_app::services::GatewayConfig;

use tradfri_domain::credentials::Credentials;

use crate::credentials::{self, CredentialsError};

/// Read when no `--config` path is given.
pub const DEFAULT_PATH: &str = "tradfri.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewaySettings,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Files the values were read from, logged once tracing is up.
    #[serde(skip)]
    pub sources: Sources,
}

/// Files that contributed to a [`Config`].
#[derive(Debug, Default)]
pub struct Sources {
    pub config_file: Option<PathBuf>,
    pub credentials_file: Option<PathBuf>,
}

/// Gateway session settings.
#[derive(Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// `host[:port]`; the port defaults to 5684.
    pub address: String,
    pub client_id: Option<String>,
    /// Pre-shared key issued for `client_id`.
    pub psk: Option<String>,
    /// Credential file written by `tradfri authenticate`.
    pub credentials_file: PathBuf,
    pub handshake_timeout_secs: u64,
    pub read_timeout_ms: u64,
}

/// REST and gRPC listeners.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    pub http_port: u16,
    pub grpc_port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `tradfri.toml` if present), then
    /// apply environment-variable overrides and the credential file.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file is malformed, if an explicitly given
    /// file cannot be read, or if the credential file is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let mut config = Self::from_file(path)?;
                config.sources.config_file = Some(path.to_path_buf());
                config
            }
            None => Self::from_optional_file(Path::new(DEFAULT_PATH))?,
        };
        config.apply_env_overrides();
        config.apply_credentials_file()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
                config.sources.config_file = Some(path.to_path_buf());
                Ok(config)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GATEWAY_IP") {
            self.gateway.address = val;
        }
        if let Some(val) = var("CLIENT_ID") {
            self.gateway.client_id = Some(val);
        }
        if let Some(val) = var("PRE_SHARED_KEY") {
            self.gateway.psk = Some(val);
        }
        if let Some(val) = var("TRADFRI_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("TRADFRI_HTTP_PORT").and_then(|val| val.parse().ok()) {
            self.server.http_port = port;
        }
        if let Some(port) = var("TRADFRI_GRPC_PORT").and_then(|val| val.parse().ok()) {
            self.server.grpc_port = port;
        }
        if let Some(val) = var("TRADFRI_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn apply_credentials_file(&mut self) -> Result<(), ConfigError> {
        if let Some(found) = credentials::read(&self.gateway.credentials_file)? {
            self.use_credentials(found);
        }
        Ok(())
    }

    /// Take `client_id` and `psk` from a credential file read from
    /// `gateway.credentials_file`.
    pub fn use_credentials(&mut self, found: Credentials) {
        self.gateway.client_id = Some(found.client_id);
        self.gateway.psk = Some(found.token);
        self.sources.credentials_file = Some(self.gateway.credentials_file.clone());
    }

    /// Report where the configuration came from. Call once the subscriber is
    /// installed; loading happens before the log filter is known.
    pub fn log_sources(&self) {
        match &self.sources.config_file {
            Some(path) => tracing::debug!(path = %path.display(), "loaded configuration file"),
            None => tracing::debug!("no configuration file, using defaults"),
        }
        if let Some(path) = &self.sources.credentials_file {
            tracing::debug!(
                path = %path.display(),
                client_id = self.gateway.client_id.as_deref().unwrap_or_default(),
                "using credentials from file"
            );
        }
    }

    /// Check the listener settings used by `serve`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a zero port.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 || self.server.grpc_port == 0 {
            return Err(ConfigError::Validation(
                "ports must be non-zero".to_string(),
            ));
        }
        if self.server.http_port == self.server.grpc_port {
            return Err(ConfigError::Validation(
                "http and grpc ports must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Gateway address with the default port applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when no address is configured.
    pub fn gateway_address(&self) -> Result<String, ConfigError> {
        let address = self.gateway.address.trim();
        if address.is_empty() {
            return Err(ConfigError::Validation(
                "gateway address is required (set --gateway or GATEWAY_IP)".to_string(),
            ));
        }
        Ok(with_default_port(address))
    }

    /// Session settings for an authenticated gateway client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the address, client id or
    /// pre-shared key is missing.
    pub fn session(&self) -> Result<GatewayConfig, ConfigError> {
        let address = self.gateway_address()?;
        let (Some(client_id), Some(psk)) = (
            non_empty(self.gateway.client_id.as_deref()),
            non_empty(self.gateway.psk.as_deref()),
        ) else {
            return Err(ConfigError::Validation(format!(
                "client id and pre-shared key are required (run `tradfri authenticate`, \
                 provide {} or set CLIENT_ID and PRE_SHARED_KEY)",
                self.gateway.credentials_file.display()
            )));
        };
        let mut session = GatewayConfig::new(address, client_id, psk);
        session.handshake_timeout = self.handshake_timeout();
        session.read_timeout = self.read_timeout();
        Ok(session)
    }

    #[must_use]
    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway.handshake_timeout_secs)
    }

    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.gateway.read_timeout_ms)
    }

    /// Return the `host:port` REST bind address.
    #[must_use]
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.http_port)
    }

    /// Return the `host:port` gRPC bind address.
    #[must_use]
    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.grpc_port)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

impl std::fmt::Debug for GatewaySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewaySettings")
            .field("address", &self.address)
            .field("client_id", &self.client_id)
            .field("psk", &self.psk.as_ref().map(|_| "<redacted>"))
            .field("credentials_file", &self.credentials_file)
            .field("handshake_timeout_secs", &self.handshake_timeout_secs)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .finish()
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            address: String::new(),
            client_id: None,
            psk: None,
            credentials_file: PathBuf::from(credentials::DEFAULT_PATH),
            handshake_timeout_secs: 30,
            read_timeout_ms: 1000,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
            grpc_port: 8081,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tradfri=info,tradfri_app=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
