//! Runtime configuration for the order desk.

use std::env;
use thiserror::Error;

/// Environment variable overriding [`DeskConfig::buffer_size`].
pub const BUFFER_ENV: &str = "ORDER_DESK_BUFFER";

const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidBufferSize { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskConfig {
    /// Capacity of the order book's request queue.
    pub buffer_size: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DeskConfig {
    /// Defaults, overridden by `ORDER_DESK_BUFFER` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_ENV) {
            config.buffer_size = parse_buffer_size(&raw)?;
        }
        Ok(config)
    }
}

fn parse_buffer_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidBufferSize {
            var: BUFFER_ENV,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, BUFFER_ENV);
            value.map(str::to_string)
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = DeskConfig::from_lookup(lookup_with(None)).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.buffer_size, 32);
    }

    #[test]
    fn reads_buffer_size() {
        let config = DeskConfig::from_lookup(lookup_with(Some(" 128 "))).unwrap();
        assert_eq!(config.buffer_size, 128);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for bad in ["0", "-4", "lots", ""] {
            let err = DeskConfig::from_lookup(lookup_with(Some(bad))).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidBufferSize {
                    var: BUFFER_ENV,
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn error_names_the_variable() {
        let err = DeskConfig::from_lookup(lookup_with(Some("zero"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ORDER_DESK_BUFFER must be a positive integer, got \"zero\""
        );
    }
}
