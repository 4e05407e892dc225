//! Application configuration
//!
//! Layering, lowest precedence first:
//! 1. built-in defaults ([`AppConfig::default`])
//! 2. optional JSON file (explicit path, or `<config dir>/review-scraper/config.json`)
//! 3. environment variables, e.g. `REVIEW_SCRAPER_HTTP__TIMEOUT_SECONDS=10`
//!
//! Site profiles are part of the config so selector maintenance does not
//! need a rebuild.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::review::ReviewSource;
use crate::infrastructure::sites::{SiteProfile, capterra, g2, software_advice};

pub const APP_DIR_NAME: &str = "review-scraper";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ENV_PREFIX: &str = "REVIEW_SCRAPER";

/// Default values
pub mod defaults {
    /// Desktop Chrome on Windows
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    pub const MAX_RETRIES: u32 = 3;

    /// Pause between review pages; also the retry backoff base
    pub const REQUEST_DELAY_MS: u64 = 2000;

    pub const MAX_REVIEWS_PER_SOURCE: usize = 1000;

    pub const OUTPUT_DIR: &str = "output";

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = true;
    pub const LOG_FILE_NAME: &str = "review_scraper.log";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub sites: SitesConfig,
    /// Upper bound on reviews kept from any single source
    pub max_reviews_per_source: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            sites: SitesConfig::default(),
            max_reviews_per_source: defaults::MAX_REVIEWS_PER_SOURCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub request_delay_ms: u64,
    pub follow_redirects: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            max_retries: defaults::MAX_RETRIES,
            request_delay_ms: defaults::REQUEST_DELAY_MS,
            follow_redirects: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive for this crate, e.g. `info` or `debug`
    pub level: String,
    /// JSON lines in the log file
    pub json_format: bool,
    pub console_output: bool,
    pub file_output: bool,
    /// `None` means `logs/` next to the executable
    pub log_dir: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
            file_name: defaults::LOG_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitesConfig {
    pub g2: SiteProfile,
    pub capterra: SiteProfile,
    pub software_advice: SiteProfile,
}

impl SitesConfig {
    pub fn profile(&self, source: ReviewSource) -> &SiteProfile {
        match source {
            ReviewSource::G2 => &self.g2,
            ReviewSource::Capterra => &self.capterra,
            ReviewSource::SoftwareAdvice => &self.software_advice,
        }
    }
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            g2: g2::profile(),
            capterra: capterra::profile(),
            software_advice: software_advice::profile(),
        }
    }
}

/// Loads and writes the JSON configuration file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Per-user configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Manager for the default per-user config file
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: Self::get_config_dir()?.join(CONFIG_FILE_NAME),
        })
    }

    /// Manager for an explicit config file
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Defaults, then the config file if it exists, then the environment
    pub fn load_config(&self) -> Result<AppConfig> {
        let defaults = config::Config::try_from(&AppConfig::default())
            .context("Failed to serialize default configuration")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(self.config_path.as_path())
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {:?}", self.config_path))?;

        settings
            .try_deserialize::<AppConfig>()
            .context("Configuration file contains invalid values")
    }

    /// Write `config` as pretty JSON, creating the directory when needed
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            if !config_dir.as_os_str().is_empty() {
                fs::create_dir_all(config_dir)
                    .await
                    .with_context(|| format!("Failed to create config directory {config_dir:?}"))?;
            }
        }

        let content = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content)
            .await
            .with_context(|| format!("Failed to write configuration file {:?}", self.config_path))?;

        info!("✅ Configuration saved to: {:?}", self.config_path);
        Ok(())
    }
}
