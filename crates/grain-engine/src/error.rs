//! Top-level error type for [`Simulation`](crate::Simulation) operations.

use std::error::Error;
use std::fmt;

use grain_core::RegistryError;
use grain_grid::GridError;

use crate::config::ConfigError;

/// Errors returned by [`Simulation`](crate::Simulation).
///
/// Wraps the subsystem errors so `?` composes across them. Stale
/// proposals are not errors and never surface here.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A grid access or write was rejected.
    Grid(GridError),
    /// A material lookup failed.
    Registry(RegistryError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Registry(e) => write!(f, "registry: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Registry(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RegistryError> for SimError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
