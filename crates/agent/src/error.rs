//! Configuration errors.
//!
//! Decisions themselves never fail: unreachable targets, empty candidate sets
//! and an exhausted stack all degrade to deferring or to the fallback move.
//! Errors only come from building an agent out of invalid configuration
//! (and, for the sandbox, from parsing a maze; see [`crate::MazeError`]).

/// Invalid agent configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A layer radius is negative, NaN or infinite.
    #[error("{name} must be a finite, non-negative distance (got {value})")]
    InvalidRadius { name: &'static str, value: f64 },

    /// An environment override could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

impl ConfigError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidRadius { .. } => "CONFIG_INVALID_RADIUS",
            ConfigError::InvalidEnv { .. } => "CONFIG_INVALID_ENV",
        }
    }
}
