//! # Configuration
//!
//! Layered service configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. a TOML file (`config/default.toml` if present, or an explicit path)
//! 3. environment variables prefixed `DISCOVERY`, nested with `__`
//!    (e.g. `DISCOVERY__SERVER__PORT=4050`)
//!
//! # Examples
//!
//! ```no_run
//! use proposal_discovery::config::AppConfig;
//!
//! let config = AppConfig::load(None)?;
//! println!("listening on {}:{}", config.server.host, config.server.port);
//! # Ok::<(), proposal_discovery::config::ConfigError>(())
//! ```

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Default bind host.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
const DEFAULT_PORT: u16 = 4050;

/// Default registry base URL.
const DEFAULT_DISCOVERY_URL: &str = "http://127.0.0.1:8001/v1";

/// Default registry timeout in milliseconds.
const DEFAULT_DISCOVERY_TIMEOUT_MS: u64 = 5000;

/// Default quality oracle base URL.
const DEFAULT_QUALITY_ORACLE_URL: &str = "http://127.0.0.1:8002/api/v1";

/// Default quality oracle timeout in milliseconds.
const DEFAULT_QUALITY_ORACLE_TIMEOUT_MS: u64 = 3000;

/// Default log filter directive.
const DEFAULT_LOG_LEVEL: &str = "info";

/// File looked up when no explicit path is given.
const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Environment variable prefix.
const ENV_PREFIX: &str = "DISCOVERY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Settings for one upstream HTTP source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    /// Creates upstream settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid(format!("{}.base_url: {}", name, e)))?;
        if self.timeout_ms == 0 {
            return Err(ConfigError::invalid(format!(
                "{}.timeout_ms must be positive",
                name
            )));
        }
        Ok(())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable compact lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Proposal registry.
    pub discovery: UpstreamConfig,
    /// Quality oracle.
    pub quality_oracle: UpstreamConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            discovery: UpstreamConfig::new(DEFAULT_DISCOVERY_URL, DEFAULT_DISCOVERY_TIMEOUT_MS),
            quality_oracle: UpstreamConfig::new(
                DEFAULT_QUALITY_ORACLE_URL,
                DEFAULT_QUALITY_ORACLE_TIMEOUT_MS,
            ),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read or parsed and
    /// `ConfigError::Invalid` if a value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = with_defaults(builder)?.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host must not be empty"));
        }
        self.discovery.validate("discovery")?;
        self.quality_oracle.validate("quality_oracle")?;
        Ok(())
    }
}

/// Seeds every key so partial sections and single env overrides resolve.
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    builder
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", u64::from(DEFAULT_PORT))?
        .set_default("discovery.base_url", DEFAULT_DISCOVERY_URL)?
        .set_default("discovery.timeout_ms", DEFAULT_DISCOVERY_TIMEOUT_MS)?
        .set_default("quality_oracle.base_url", DEFAULT_QUALITY_ORACLE_URL)?
        .set_default("quality_oracle.timeout_ms", DEFAULT_QUALITY_ORACLE_TIMEOUT_MS)?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?
        .set_default("logging.format", "pretty")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn empty_source_yields_defaults() {
        assert_eq!(from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
            [server]
            port = 8080

            [discovery]
            base_url = "https://registry.example.com/v1"
            timeout_ms = 1500

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.discovery.base_url, "https://registry.example.com/v1");
        assert_eq!(config.discovery.timeout_ms, 1500);
        assert_eq!(config.quality_oracle.base_url, DEFAULT_QUALITY_ORACLE_URL);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = from_toml(
            r#"
            [discovery]
            timeout_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.discovery.timeout_ms, 1500);
        assert_eq!(config.discovery.base_url, DEFAULT_DISCOVERY_URL);
        assert_eq!(config.quality_oracle, AppConfig::default().quality_oracle);
    }

    #[test]
    fn single_key_override_without_file() {
        let config = AppConfig::from_builder(
            config::Config::builder().set_override("quality_oracle.timeout_ms", 250u64).unwrap(),
        )
        .unwrap();

        assert_eq!(config.quality_oracle.timeout_ms, 250);
        assert_eq!(config.quality_oracle.base_url, DEFAULT_QUALITY_ORACLE_URL);
        assert_eq!(config.discovery, AppConfig::default().discovery);
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = from_toml(
            r#"
            [quality_oracle]
            base_url = "not a url"
            timeout_ms = 100
            "#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("quality_oracle.base_url"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = from_toml(
            r#"
            [discovery]
            base_url = "http://localhost:8001"
            timeout_ms = 0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_explicit_file_fails() {
        let result = AppConfig::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
