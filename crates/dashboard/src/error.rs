use std::path::PathBuf;

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up the dashboard.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path of the config file
        path: PathBuf,

        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for a dashboard config.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        /// Path of the config file
        path: PathBuf,

        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    LogDir {
        /// Directory that could not be created
        path: PathBuf,

        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
