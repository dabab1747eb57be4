use std::env;
use std::str::FromStr;

use crate::{ConfigError, Direction};

/// Tunable thresholds for the agent's layers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Vulnerable ghosts closer than this are chased.
    pub hunt_radius: f64,
    /// Dangerous ghosts closer than this are fled from.
    pub evade_radius: f64,
    /// Move returned when every layer defers or the deadline passes.
    pub fallback: Direction,
}

impl AgentConfig {
    // ===== tuned defaults =====
    pub const DEFAULT_HUNT_RADIUS: f64 = 75.0;
    pub const DEFAULT_EVADE_RADIUS: f64 = 5.0;

    pub const ENV_HUNT_RADIUS: &'static str = "AGENT_HUNT_RADIUS";
    pub const ENV_EVADE_RADIUS: &'static str = "AGENT_EVADE_RADIUS";
    pub const ENV_FALLBACK: &'static str = "AGENT_FALLBACK";

    pub const fn new() -> Self {
        Self {
            hunt_radius: Self::DEFAULT_HUNT_RADIUS,
            evade_radius: Self::DEFAULT_EVADE_RADIUS,
            fallback: Direction::Neutral,
        }
    }

    #[must_use]
    pub const fn with_hunt_radius(mut self, hunt_radius: f64) -> Self {
        self.hunt_radius = hunt_radius;
        self
    }

    #[must_use]
    pub const fn with_evade_radius(mut self, evade_radius: f64) -> Self {
        self.evade_radius = evade_radius;
        self
    }

    #[must_use]
    pub const fn with_fallback(mut self, fallback: Direction) -> Self {
        self.fallback = fallback;
        self
    }

    /// Checks that both radii are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radius("hunt_radius", self.hunt_radius)?;
        check_radius("evade_radius", self.evade_radius)?;
        Ok(())
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_HUNT_RADIUS` - Hunt radius (default: 75)
    /// - `AGENT_EVADE_RADIUS` - Evade radius (default: 5)
    /// - `AGENT_FALLBACK` - Fallback direction name (default: neutral)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AgentConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(radius) = read_value::<f64, _>(&lookup, Self::ENV_HUNT_RADIUS)? {
            config.hunt_radius = radius;
        }
        if let Some(radius) = read_value::<f64, _>(&lookup, Self::ENV_EVADE_RADIUS)? {
            config.evade_radius = radius;
        }
        if let Some(fallback) = read_value::<Direction, _>(&lookup, Self::ENV_FALLBACK)? {
            config.fallback = fallback;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_radius(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius { name, value })
    }
}

fn read_value<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { key, value: raw })
}
