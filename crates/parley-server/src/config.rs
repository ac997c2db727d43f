//! Server configuration loading from file and environment variables.

use parley_access::AccessPolicy;
use parley_analysis::CompletionConfig;
use parley_catalog::PlatformConfig;
use parley_identity::ProviderConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External identity provider settings.
    #[serde(default)]
    pub identity: ProviderConfig,

    /// Completion API settings (transcript analysis).
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Voice platform settings (agents and conversations).
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Permission policy: default pages and the ownership tables.
    #[serde(default)]
    pub access: AccessPolicy,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "parley_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `PARLEY_HOST` overrides `server.host`
/// - `PARLEY_PORT` overrides `server.port`
/// - `PARLEY_LOG_LEVEL` overrides `logging.level`
/// - `PARLEY_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `PARLEY_IDENTITY_BASE_URL` overrides `identity.base_url`
/// - `PARLEY_IDENTITY_SERVER_KEY` overrides `identity.server_key`
/// - `PARLEY_COMPLETION_API_KEY` overrides `completion.api_key`
/// - `PARLEY_PLATFORM_API_KEY` overrides `platform.api_key`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("PARLEY_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("PARLEY_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(level) = std::env::var("PARLEY_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("PARLEY_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(base_url) = std::env::var("PARLEY_IDENTITY_BASE_URL") {
        config.identity.base_url = base_url;
    }
    if let Ok(server_key) = std::env::var("PARLEY_IDENTITY_SERVER_KEY") {
        config.identity.server_key = server_key;
    }
    if let Ok(api_key) = std::env::var("PARLEY_COMPLETION_API_KEY") {
        config.completion.api_key = api_key;
    }
    if let Ok(api_key) = std::env::var("PARLEY_PLATFORM_API_KEY") {
        config.platform.api_key = api_key;
    }

    Ok(config)
}
