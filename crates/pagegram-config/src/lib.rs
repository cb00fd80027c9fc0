//! Configuration management for Pagegram.
//!
//! Parses `pagegram.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `llm.api_key`
//! - `llm.base_url`
//! - `diagrams.kroki_url`
//!
//! When `llm.api_key` is absent from the file, it is read from
//! `OPENAI_API_KEY` at load time.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override Kroki URL for diagram rendering.
    pub kroki_url: Option<String>,
    /// Override completion model.
    pub model: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagegram.toml";

/// Environment variable holding the model service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Default completion service base URL.
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default Kroki server.
pub const DEFAULT_KROKI_URL: &str = "https://kroki.io";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Completion service configuration.
    pub llm: LlmConfig,
    /// Diagram rendering configuration.
    pub diagrams: DiagramsConfig,
    /// Outbound page fetch configuration.
    pub fetch: FetchConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Completion service configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Bearer credential. `None` means every generation call fails.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API base URL (without trailing `/completions`).
    pub base_url: String,
    /// Request timeout in seconds (`None` waits indefinitely).
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_LLM_BASE_URL.to_owned(),
            timeout_secs: None,
        }
    }
}

/// Diagram rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DiagramsConfig {
    /// Kroki server URL. `None` disables server-side rendering.
    pub kroki_url: Option<String>,
    /// Request timeout in seconds (`None` waits indefinitely).
    pub timeout_secs: Option<u64>,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            kroki_url: Some(DEFAULT_KROKI_URL.to_owned()),
            timeout_secs: None,
        }
    }
}

/// Outbound page fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `User-Agent` header sent with page requests.
    pub user_agent: String,
    /// Request timeout in seconds (`None` waits indefinitely).
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("pagegram/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout_secs: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`llm.api_key`").
        field: String,
        /// Error message (e.g., "${`OPENAI_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagegram.toml` in current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.apply_api_key_env(std::env::var(API_KEY_ENV).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(kroki_url) = &settings.kroki_url {
            self.diagrams.kroki_url = Some(kroki_url.clone());
        }
        if let Some(model) = &settings.model {
            self.llm.model.clone_from(model);
        }
    }

    /// Fill `llm.api_key` from the environment when the file left it unset.
    fn apply_api_key_env(&mut self, env_value: Option<String>) {
        if self.llm.api_key.as_deref().is_none_or(str::is_empty) {
            self.llm.api_key = env_value.filter(|key| !key.is_empty());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_llm()?;
        self.validate_diagrams()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_llm(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.llm.model, "llm.model")?;
        require_non_empty(&self.llm.base_url, "llm.base_url")?;
        require_http_url(&self.llm.base_url, "llm.base_url")?;
        Ok(())
    }

    fn validate_diagrams(&self) -> Result<(), ConfigError> {
        if let Some(ref kroki_url) = self.diagrams.kroki_url {
            require_non_empty(kroki_url, "diagrams.kroki_url")?;
            require_http_url(kroki_url, "diagrams.kroki_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.llm.base_url = expand::expand_env(&self.llm.base_url, "llm.base_url")?;
        expand::expand_opt(&mut self.llm.api_key, "llm.api_key")?;
        expand::expand_opt(&mut self.diagrams.kroki_url, "diagrams.kroki_url")?;
        Ok(())
    }
}
