//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book service and demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the book created on startup (default: "Personal")
    pub default_book_name: String,

    /// Maximum number of fuzzy search results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DEFAULT_BOOK_NAME`: Book created on startup (default: "Personal")
    /// - `MAX_MATCH_RESULTS`: Max fuzzy search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let default_book_name =
            env::var("DEFAULT_BOOK_NAME").unwrap_or(defaults.default_book_name);
        if default_book_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_BOOK_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_match_results =
            Self::parse_env_usize("MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold =
            Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", defaults.match_confidence_threshold)?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_book_name,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_book_name: "Personal".to_string(),
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "info".to_string(),
        }
    }
}
