use bento_auth::token::DEFAULT_TOKEN_TTL_SECS;
use bento_core::config::{ConfigError, env_or, env_string_or, require_env};

/// Iris service configuration loaded from environment variables.
pub struct IrisConfig {
    /// Store URL. Env var: `DATABASE_URL` (default `sqlite://iris.db?mode=rwc`).
    pub database_url: String,
    /// HS256 signing secret. Env var: `JWT_SECRET` (required).
    pub jwt_secret: String,
    /// Access token lifetime in seconds. Env var: `TOKEN_TTL_SECS` (default 7200).
    pub token_ttl_secs: u64,
    /// TCP port for the HTTP server. Env var: `IRIS_PORT` (default 3001).
    pub port: u16,
    /// Decision forest JSON. Env var: `IRIS_MODEL_PATH` (default `model/iris_forest.json`).
    pub model_path: String,
}

impl IrisConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env_string_or("DATABASE_URL", "sqlite://iris.db?mode=rwc"),
            jwt_secret: require_env("JWT_SECRET")?,
            token_ttl_secs: env_or("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?,
            port: env_or("IRIS_PORT", 3001)?,
            model_path: env_string_or("IRIS_MODEL_PATH", "model/iris_forest.json"),
        })
    }
}
