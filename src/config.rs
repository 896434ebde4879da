//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use log::LevelFilter;

/// Endpoint serving the JSON users list.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const LOG_FILE_NAME: &str = "user-table.log";

const ENDPOINT_VAR: &str = "USER_TABLE_ENDPOINT";
const TIMEOUT_VAR: &str = "USER_TABLE_TIMEOUT_SECS";
const LOG_LEVEL_VAR: &str = "USER_TABLE_LOG_LEVEL";
const LOG_FILE_VAR: &str = "USER_TABLE_LOG_FILE";

/// Errors produced when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be one of off, error, warn, info, debug, trace; got {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: LevelFilter::Info,
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup. Unset
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::Empty { var: ENDPOINT_VAR });
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_timeout(&raw)?;
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = raw
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: raw.clone(),
                })?;
        }

        if let Some(path) = lookup(LOG_FILE_VAR) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty { var: LOG_FILE_VAR });
            }
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: TIMEOUT_VAR,
            value: raw.to_string(),
        }),
    }
}

/// Platform cache directory, or the temp directory when no home is known.
fn default_log_file() -> PathBuf {
    ProjectDirs::from("dev", "user-table", "user-table")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(env::temp_dir)
        .join(LOG_FILE_NAME)
}
