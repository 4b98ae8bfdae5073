//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (and a
//! `.env` file when present). Missing or invalid values produce a
//! [`ConfigError`] naming the offending variable.
//!
//! # Example
//!
//! ```rust,ignore
//! use video_api::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Listening on {}:{}", config.app_host, config.app_port);
//! ```

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
///
/// # Fields
///
/// - `redis_url`: Redis connection string; the in-memory cache is used when unset
/// - `api_key`: value the `x-video-apikey` header must carry
/// - `flakiness_percentage`: chance (in percent) that a list read fails on purpose
/// - `rng_seed`: seed for the flakiness probe, for reproducible runs
/// - `app_host`: Host address for the HTTP server
/// - `app_port`: Port number for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Redis connection URL.
    pub redis_url: Option<String>,
    /// Expected API key.
    pub api_key: String,
    /// Flakiness percentage; zero or less disables the decorator.
    pub flakiness_percentage: i32,
    /// Optional seed for the flakiness probe.
    pub rng_seed: Option<u64>,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `API_KEY`: expected API key (required)
    /// - `REDIS_URL`: Redis connection string (optional)
    /// - `FLAKINESS_PERCENTAGE`: percentage of failed reads (optional, default: 0)
    /// - `RNG_SEED`: seed for the flakiness probe (optional)
    /// - `APP_HOST`: Server host (optional, default: "0.0.0.0")
    /// - `APP_PORT`: Server port (optional, default: 8080)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `API_KEY` is not set.
    /// Returns `ConfigError::InvalidValue` if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get_required(&lookup, "API_KEY")?;
        let redis_url = lookup("REDIS_URL").filter(|url| !url.is_empty());

        let flakiness_percentage = get_optional_parsed(&lookup, "FLAKINESS_PERCENTAGE", 0)?;
        let rng_seed = lookup("RNG_SEED")
            .map(|value| parse_value(&value, "RNG_SEED"))
            .transpose()?;
        let app_host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let app_port = get_optional_parsed(&lookup, "APP_PORT", 8080)?;

        Ok(Self {
            redis_url,
            api_key,
            flakiness_percentage,
            rng_seed,
            app_host,
            app_port,
        })
    }

    /// Creates a configuration for local runs and tests: in-memory cache,
    /// no flakiness.
    #[must_use]
    pub fn local(api_key: impl Into<String>) -> Self {
        Self {
            redis_url: None,
            api_key: api_key.into(),
            flakiness_percentage: 0,
            rng_seed: None,
            app_host: "127.0.0.1".to_string(),
            app_port: 8080,
        }
    }
}

/// Gets a required variable.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if the variable is not set.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Gets an optional variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be parsed.
fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| parse_value(&value, key))
}

fn parse_value<T>(value: &str, key: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}
