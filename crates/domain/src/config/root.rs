use serde::{Deserialize, Serialize};

use super::decoder::{DecodeMode, DecoderConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::resolver::ResolverConfig;

/// Environment variable that replaces the configured resolver address.
pub const NAMESERVER_ENV: &str = "FERROUS_LOOKUP_NAMESERVER";

const LOCAL_CONFIG_PATH: &str = "ferrous-lookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-lookup/config.toml";

/// Main configuration structure for Ferrous Lookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub decoder: DecoderConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order (later wins):
    /// 1. Defaults
    /// 2. Explicit path, else ferrous-lookup.toml, else /etc/ferrous-lookup/config.toml
    /// 3. `FERROUS_LOOKUP_NAMESERVER`
    /// 4. Command-line overrides
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_nameserver_override(std::env::var(NAMESERVER_ENV).ok());
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Replace the resolver address; blank values are ignored
    pub fn apply_nameserver_override(&mut self, nameserver: Option<String>) {
        if let Some(nameserver) = nameserver.filter(|s| !s.trim().is_empty()) {
            self.resolver.address = nameserver.trim().to_string();
        }
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        self.apply_nameserver_override(overrides.nameserver);
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(mode) = overrides.decode_mode {
            self.decoder.mode = mode;
        }
        if let Some(hex_dump) = overrides.hex_dump {
            self.output.hex_dump = hex_dump;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.port == 0 {
            return Err(ConfigError::Validation(
                "Resolver port cannot be 0".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        let addr = self.resolver.socket_addr()?;
        if addr.port() == 0 {
            return Err(ConfigError::Validation(format!(
                "Resolver address {} has port 0",
                addr
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub nameserver: Option<String>,
    pub timeout_ms: Option<u64>,
    pub decode_mode: Option<DecodeMode>,
    pub hex_dump: Option<bool>,
    pub log_level: Option<String>,
}
