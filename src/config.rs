//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::sentiment::{Lexicon, SentimentClassifier};
use crate::state::{Reducer, Rewards};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub lexicon: LexiconConfig,

    #[serde(default)]
    pub rewards: Rewards,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Extra sentiment keywords on top of the built-in lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_positive: Vec<String>,

    #[serde(default)]
    pub extra_negative: Vec<String>,
}

impl LexiconConfig {
    /// Build the lexicon this configuration describes
    pub fn build(&self) -> Lexicon {
        if self.extra_positive.is_empty() && self.extra_negative.is_empty() {
            Lexicon::builtin().clone()
        } else {
            Lexicon::extended(&self.extra_positive, &self.extra_negative)
        }
    }
}

/// Session defaults
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Fixed seed for reproducible message picks
    pub rng_seed: Option<u64>,
}

fn default_user_name() -> String {
    "Alex".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            rng_seed: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("peacepal").join("config.toml")),
            Some(PathBuf::from("/etc/peacepal/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Classifier using the configured lexicon
    pub fn classifier(&self) -> SentimentClassifier {
        SentimentClassifier::new(self.lexicon.build())
    }

    /// Reducer using the configured lexicon and rewards
    pub fn reducer(&self) -> Reducer {
        Reducer::new(self.classifier(), self.rewards.clone())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = var("PEACEPAL_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("PEACEPAL_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PEACEPAL_API_PORT: {}", port),
            }
        }

        // Session overrides
        if let Some(name) = var("PEACEPAL_USER_NAME") {
            self.session.user_name = name;
        }
        if let Some(seed) = var("PEACEPAL_RNG_SEED") {
            match seed.parse() {
                Ok(s) => self.session.rng_seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid PEACEPAL_RNG_SEED: {}", seed),
            }
        }

        // Logging overrides
        if let Some(level) = var("PEACEPAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("PEACEPAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# PeacePal Configuration
#
# Environment variables override these settings:
# - PEACEPAL_API_HOST
# - PEACEPAL_API_PORT
# - PEACEPAL_USER_NAME
# - PEACEPAL_RNG_SEED
# - PEACEPAL_LOG_LEVEL
# - PEACEPAL_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8086

# Request timeout in seconds
request_timeout_secs = 30

[lexicon]
# Words counted as positive in addition to the built-in list
extra_positive = []

# Words counted as negative in addition to the built-in list
extra_negative = []

[rewards]
# Points per garden character interaction
character = 5

# Points per plant interaction
plant = 3

# Points for continuing the wellness journey
journey = 10

# Points per logged mood
mood = 15

# Points per journal formatting action
formatting = 2

[session]
# Display name of the user
user_name = "Alex"

# Fixed seed for reproducible message picks (omit for random)
# rng_seed = 42

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
