use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::food::config::FoodConfig;

pub const DEFAULT_DATABASE_URL: &str = "data/nutrition.db";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
}

impl VisionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_endpoint = required(&lookup, "VISION_ENDPOINT")?;
        let mut endpoint = Url::parse(raw_endpoint.trim()).map_err(|e| ConfigError::Invalid {
            name: "VISION_ENDPOINT",
            value: raw_endpoint.clone(),
            reason: e.to_string(),
        })?;
        // Url::join drops the last path segment unless it ends with '/'
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        let api_key = required(&lookup, "VISION_KEY")?;

        let interval_ms: u64 = parsed_or(&lookup, "OCR_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)?;
        let max_poll_attempts: u32 =
            parsed_or(&lookup, "OCR_MAX_POLL_ATTEMPTS", DEFAULT_MAX_POLL_ATTEMPTS)?;
        if max_poll_attempts == 0 {
            return Err(ConfigError::Invalid {
                name: "OCR_MAX_POLL_ATTEMPTS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            endpoint,
            api_key,
            poll_interval: Duration::from_millis(interval_ms),
            max_poll_attempts,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub vision: VisionConfig,
    pub database_url: String,
    pub food: FoodConfig,
    pub history_days: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            vision: VisionConfig::from_lookup(&lookup)?,
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            food: FoodConfig::from_lookup(&lookup),
            history_days: parsed_or(&lookup, "SHOW_HISTORY_DAYS", 0)?,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parsed_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                name,
                value: value.clone(),
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}
