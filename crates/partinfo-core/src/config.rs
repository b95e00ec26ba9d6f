//! Environment-driven configuration for provider construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Settings consumed when constructing providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Whether the Aliexpress provider is enabled. Drives
    /// `InfoProvider::is_active`.
    pub aliexpress_enabled: bool,
    /// Request timeout applied to the underlying HTTP client, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            aliexpress_enabled: true,
            request_timeout_secs: 30,
        }
    }
}

/// Load provider configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value. Unset
/// variables fall back to defaults.
pub fn load_provider_config() -> Result<ProviderConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_provider_config_from_env()
}

/// Load provider configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_provider_config_from_env() -> Result<ProviderConfig, ConfigError> {
    build_provider_config(|key| std::env::var(key))
}

/// Build provider configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var`
/// needed.
fn build_provider_config<F>(lookup: F) -> Result<ProviderConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got \"{other}\""),
            }),
        }
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(ProviderConfig {
        aliexpress_enabled: parse_bool("PARTINFO_ALIEXPRESS_ENABLED", "true")?,
        request_timeout_secs: parse_u64("PARTINFO_REQUEST_TIMEOUT_SECS", "30")?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
