//! Engine configuration.
//!
//! Provides the point scheme and bracket size limit, with environment
//! overrides for deployments that score differently.

use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use thiserror::Error;

use crate::standings::PointScheme;

/// Default upper bound on entrants in one bracket
pub const DEFAULT_MAX_BRACKET_ENTRANTS: usize = 256;

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment value could not be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// Values parse but do not make sense together
    #[error("Invalid configuration: {0}")]
    Inconsistent(String),
}

impl ConfigError {
    pub fn status_code(&self) -> u16 {
        400
    }

    pub fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Standings point scheme
    pub points: PointScheme,

    /// Maximum number of entrants accepted for one bracket
    pub max_bracket_entrants: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            points: PointScheme::default(),
            max_bracket_entrants: DEFAULT_MAX_BRACKET_ENTRANTS,
        }
    }
}

impl EngineConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `PLYAZ_POINTS_WIN`: Points for a win (default: 3)
    /// - `PLYAZ_POINTS_DRAW`: Points for a draw (default: 1)
    /// - `PLYAZ_POINTS_LOSS`: Points for a loss (default: 0)
    /// - `PLYAZ_MAX_BRACKET_ENTRANTS`: Bracket entrant limit (default: 256)
    ///
    /// Unset variables fall back to the default; unparsable ones are an error.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            points: PointScheme {
                win: read(&lookup, "PLYAZ_POINTS_WIN", defaults.points.win)?,
                draw: read(&lookup, "PLYAZ_POINTS_DRAW", defaults.points.draw)?,
                loss: read(&lookup, "PLYAZ_POINTS_LOSS", defaults.points.loss)?,
            },
            max_bracket_entrants: read(
                &lookup,
                "PLYAZ_MAX_BRACKET_ENTRANTS",
                defaults.max_bracket_entrants,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.points.win < self.points.draw {
            return Err(ConfigError::Inconsistent(
                "a win must be worth at least a draw".to_string(),
            ));
        }

        if self.points.draw < self.points.loss {
            return Err(ConfigError::Inconsistent(
                "a draw must be worth at least a loss".to_string(),
            ));
        }

        if self.max_bracket_entrants < 2 {
            return Err(ConfigError::Inconsistent(
                "bracket limit must allow at least 2 entrants".to_string(),
            ));
        }

        Ok(())
    }
}

fn read<T, F>(lookup: &F, key: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
