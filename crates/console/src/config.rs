//! Process configuration read from the environment.

use core::str::FromStr;

use thiserror::Error;

use libris_auth::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use libris_inventory::FinePolicy;

pub const GRACE_DAYS_VAR: &str = "LIBRIS_GRACE_DAYS";
pub const DAILY_FINE_VAR: &str = "LIBRIS_DAILY_FINE";
pub const ADMIN_USERNAME_VAR: &str = "LIBRIS_ADMIN_USERNAME";
pub const ADMIN_PASSWORD_VAR: &str = "LIBRIS_ADMIN_PASSWORD";
pub const OUTPUT_VAR: &str = "LIBRIS_OUTPUT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// How item listings are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected one of: text, json".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub policy: FinePolicy,
    pub admin_username: String,
    pub admin_password: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: FinePolicy::default(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source; unset variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let grace_days = parse_var(&lookup, GRACE_DAYS_VAR)?.unwrap_or(defaults.policy.grace_days);
        let daily_rate = parse_var(&lookup, DAILY_FINE_VAR)?.unwrap_or(defaults.policy.daily_rate);
        let output = parse_var(&lookup, OUTPUT_VAR)?.unwrap_or(defaults.output);

        let admin_username = lookup(ADMIN_USERNAME_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.admin_username);

        let admin_password = lookup(ADMIN_PASSWORD_VAR).unwrap_or_else(|| {
            tracing::warn!("{ADMIN_PASSWORD_VAR} not set; using insecure dev default");
            defaults.admin_password
        });

        Ok(Self {
            policy: FinePolicy::new(grace_days, daily_rate),
            admin_username,
            admin_password,
            output,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        })
}
