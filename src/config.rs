//! Configuration management for TRACERS Fetcher
//!
//! Every setting has a built-in default, so no file is required. A TOML file
//! may override any subset of them; it is looked up in this order:
//!
//! 1. the `--config` path (which must exist)
//! 2. `./tracers-fetcher.toml`
//! 3. `<user config dir>/tracers-fetcher/config.toml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::app::case_file::Layout;
use crate::app::ClientConfig;
use crate::constants::{config as config_constants, http, layout, limits, portal};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Portal location
    pub portal: PortalConfigToml,
    /// HTTP client settings
    pub client: ClientConfigToml,
    /// Local directory layout
    pub layout: LayoutConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// File the settings were read from; `None` when running on defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// TOML-friendly portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfigToml {
    /// Base URL that category listing paths are joined to; must end with '/'
    pub base_url: String,
}

impl Default for PortalConfigToml {
    fn default() -> Self {
        Self {
            base_url: portal::BASE_URL.to_string(),
        }
    }
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigToml {
    /// User agent header
    pub user_agent: String,
    /// TCP nodelay setting
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout in seconds (None = no timeout)
    pub pool_idle_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = wait indefinitely)
    pub request_timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Rate limit (requests per second, 0 = unlimited)
    pub rate_limit_rps: u32,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            user_agent: http::USER_AGENT.to_string(),
            tcp_nodelay: true,
            pool_idle_timeout_secs: Some(http::POOL_IDLE_TIMEOUT.as_secs()),
            request_timeout_secs: None,
            connect_timeout_secs: http::CONNECT_TIMEOUT.as_secs(),
            rate_limit_rps: limits::DEFAULT_RATE_LIMIT_RPS,
        }
    }
}

/// TOML-friendly directory layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfigToml {
    pub data_root: PathBuf,
    pub case_dir: PathBuf,
    pub output_root: PathBuf,
}

impl Default for LayoutConfigToml {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(layout::DATA_ROOT),
            case_dir: PathBuf::from(layout::CASE_DIR),
            output_root: PathBuf::from(layout::OUTPUT_ROOT),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults when no file is found
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing, or a file cannot
    /// be read, parsed or validated
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) if path.exists() => Some(path),
            Some(path) => return Err(ConfigError::NotFound { path }),
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => {
                let mut config = Self::load_from_file(&path).await?;
                config.source = Some(path);
                config
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(format!(
            "./{}",
            config_constants::LOCAL_FILE_NAME
        ))];
        if let Some(path) = Self::user_config_path() {
            search_paths.push(path);
        }

        let found = search_paths.into_iter().find(|path| path.exists());
        if let Some(ref path) = found {
            debug!("Found config file: {}", path.display());
        }
        found
    }

    /// Per-user config file path, if the platform has a config directory
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_constants::APP_DIR_NAME)
                .join("config.toml")
        })
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let config: AppConfig = toml::from_str(&content)?;

        debug!("Parsed configuration file {}", path.display());
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> ConfigResult<()> {
        self.base_url()?;
        Ok(())
    }

    /// Parsed portal base URL
    pub fn base_url(&self) -> ConfigResult<Url> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: "portal.base_url".to_string(),
            value: self.portal.base_url.clone(),
            reason,
        };

        let url = Url::parse(&self.portal.base_url).map_err(|e| invalid(e.to_string()))?;
        if !url.path().ends_with('/') {
            return Err(invalid(
                "The base URL must end with '/' so listing paths join beneath it".to_string(),
            ));
        }
        Ok(url)
    }

    /// Runtime HTTP client configuration
    pub fn client_config(&self) -> ClientConfig {
        self.client.to_runtime_config()
    }

    /// Runtime directory layout
    pub fn layout(&self) -> Layout {
        Layout {
            data_root: self.layout.data_root.clone(),
            case_dir: self.layout.case_dir.clone(),
            output_root: self.layout.output_root.clone(),
        }
    }
}

impl ClientConfigToml {
    /// Convert to runtime ClientConfig
    pub fn to_runtime_config(&self) -> ClientConfig {
        ClientConfig {
            user_agent: self.user_agent.clone(),
            tcp_nodelay: self.tcp_nodelay,
            pool_idle_timeout: self.pool_idle_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            rate_limit_rps: self.rate_limit_rps,
        }
    }
}
