//! Environment-variable configuration helpers.

use std::str::FromStr;

/// Errors raised while reading service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Seed the process environment from a `.env` file, if one exists.
///
/// Variables already present in the environment take precedence.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Read a required, non-empty variable.
pub fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Read an optional string variable, falling back to `default`.
pub fn env_string_or(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Read and parse an optional variable, falling back to `default` when unset.
///
/// A variable that is set but does not parse is an error rather than a
/// silent fallback.
pub fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
