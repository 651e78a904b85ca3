//! Command line and file configuration

use crate::error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use opti_transit_access::Section;
use serde::{Deserialize, Serialize};

/// Default event poll timeout in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

/// Resolved dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DashboardConfig {
    /// Section selected at startup
    pub start_section: Section,

    /// Start with the sidebar collapsed to icons
    pub collapsed_sidebar: bool,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,

    /// Directory for log files (a per-session directory under /tmp if unset)
    pub log_dir: Option<PathBuf>,

    /// Tracing filter directive
    pub log_level: String,

    /// Log file format
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_section: Section::Home,
            collapsed_sidebar: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl DashboardConfig {
    /// Load a config from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Command line arguments
#[derive(Clone, Debug, Default, Parser)]
#[command(version, about = "Opti-Transit terminal dashboard", long_about = None)]
pub struct Args {
    /// TOML config file
    #[arg(long, env = "OPTI_TRANSIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Section selected at startup
    #[arg(long, env = "OPTI_TRANSIT_START_SECTION")]
    pub start_section: Option<Section>,

    /// Start with the sidebar collapsed (`--collapsed-sidebar false` undoes the file)
    #[arg(
        long,
        env = "OPTI_TRANSIT_COLLAPSED_SIDEBAR",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub collapsed_sidebar: Option<bool>,

    /// Event poll timeout in milliseconds
    #[arg(long, env = "OPTI_TRANSIT_TICK_RATE_MS")]
    pub tick_rate_ms: Option<u64>,

    /// Directory for log files
    #[arg(long, env = "OPTI_TRANSIT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Tracing filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "OPTI_TRANSIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log file format
    #[arg(long, value_enum, env = "OPTI_TRANSIT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Args {
    /// Layer the arguments over the config file (if any) and the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file was given and cannot be loaded.
    pub fn resolve(self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(section) = self.start_section {
            config.start_section = section;
        }

        if let Some(collapsed_sidebar) = self.collapsed_sidebar {
            config.collapsed_sidebar = collapsed_sidebar;
        }

        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.tick_rate_ms = tick_rate_ms;
        }

        if let Some(log_dir) = self.log_dir {
            config.log_dir = Some(log_dir);
        }

        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }

        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }

        Ok(config)
    }
}
