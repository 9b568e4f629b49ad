//! Configuration management for SplitCart.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Currency label shown in front of every amount
pub const DEFAULT_CURRENCY: &str = "KES";

/// Title of the shopping list
pub const DEFAULT_LIST_NAME: &str = "Weekly Grocery Shopping";

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "splitcart=info,splitcart_runtime=info";

/// Errors raised while reading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that cannot be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value as found in the environment
        value: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Currency label, e.g. `KES` (`SPLITCART_CURRENCY`)
    pub currency: String,
    /// Shopping list title (`SPLITCART_LIST_NAME`)
    pub list_name: String,
    /// Start from the starter household instead of an empty one (`SPLITCART_SEED`)
    pub seed: bool,
    /// Tracing filter directives (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            list_name: DEFAULT_LIST_NAME.to_string(),
            seed: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `SPLITCART_SEED` is not a
    /// recognizable boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset and blank variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `SPLITCART_SEED` is not a
    /// recognizable boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let seed = match get("SPLITCART_SEED") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                var: "SPLITCART_SEED",
                value: raw,
            })?,
            None => defaults.seed,
        };

        Ok(Self {
            currency: get("SPLITCART_CURRENCY").unwrap_or(defaults.currency),
            list_name: get("SPLITCART_LIST_NAME").unwrap_or(defaults.list_name),
            seed,
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
