use std::{path::PathBuf, str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SECRETS_PATH: &str = "secrets";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_BRIDGE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MODERATION_REASON: &str = "Requested by bot.";

pub struct Config {
    pub secrets_path: PathBuf,
    pub bind_address: String,

    /// How long a request waits for a gateway operation before giving up.
    pub bridge_timeout: Duration,
    /// Audit log reason attached to kicks and bans.
    pub moderation_reason: String,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling back to
    /// defaults for unset variables.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bridge_timeout_secs = match lookup("BRIDGE_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "BRIDGE_TIMEOUT_SECS".to_string(),
                        value,
                        reason: "expected a positive number of seconds".to_string(),
                    }
                    .into())
                }
            },
            None => DEFAULT_BRIDGE_TIMEOUT_SECS,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => Level::from_str(&value).map_err(|e| ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            secrets_path: lookup("SECRETS_PATH")
                .unwrap_or_else(|| DEFAULT_SECRETS_PATH.to_string())
                .into(),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            bridge_timeout: Duration::from_secs(bridge_timeout_secs),
            moderation_reason: lookup("MODERATION_REASON")
                .unwrap_or_else(|| DEFAULT_MODERATION_REASON.to_string()),
            log_level,
        })
    }
}
