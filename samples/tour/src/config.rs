//! Tour configuration.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file if present). Every setting has a default, so a missing
//! variable is never an error; a malformed one is.
//!
//! # Environment Variables
//!
//! - `TOUR_LOG_FORMAT`: `text` (default) or `json`
//! - `TOUR_PRINT_JSON`: `true` (default) or `false`; log the final
//!   dictionary serialized as JSON
//!
//! Log filtering itself uses the standard `RUST_LOG` variable.

use std::env;
use std::str::FromStr;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Tour configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    /// Log output format.
    pub log_format: LogFormat,
    /// Whether to log the final dictionary as JSON.
    pub print_json: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            print_json: true,
        }
    }
}

impl TourConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the raw value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_format = parse_optional(&lookup, "TOUR_LOG_FORMAT", defaults.log_format)?;
        let print_json = parse_optional(&lookup, "TOUR_PRINT_JSON", defaults.print_json)?;

        Ok(Self {
            log_format,
            print_json,
        })
    }
}

/// Parses an optional variable, falling back to `default` when it is unset.
fn parse_optional<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |value| {
        value.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
