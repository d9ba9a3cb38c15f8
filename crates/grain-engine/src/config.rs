//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! any grid is allocated.

use std::error::Error;
use std::fmt;

use crate::CommitResolver;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `cell_size` is zero.
    ZeroCellSize,
    /// The screen is smaller than one cell along some axis.
    EmptyGrid {
        /// Derived grid width.
        width: u32,
        /// Derived grid height.
        height: u32,
    },
    /// Derived cell count does not fit in memory addressing.
    CellCountOverflow {
        /// The value that overflowed.
        value: u64,
    },
    /// `true_flood_threshold` is NaN or outside `[0, 1)`.
    InvalidThreshold {
        /// The invalid value.
        value: f32,
    },
    /// A prebuilt grid does not match the configured dimensions.
    GridMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// The grid's `(width, height)`.
        found: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellSize => write!(f, "cell_size must be at least 1"),
            Self::EmptyGrid { width, height } => {
                write!(f, "screen yields an empty {width}x{height} grid")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds addressable memory")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "true_flood_threshold must lie in [0, 1), got {value}")
            }
            Self::GridMismatch { expected, found } => write!(
                f,
                "grid is {}x{}, config expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for a [`Simulation`](crate::Simulation).
///
/// Grid dimensions are not stored; they follow from the screen size and
/// cell size by integer division. The defaults give an 80x60 grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Host surface width in pixels. Default: 1280.
    pub screen_width: u32,
    /// Host surface height in pixels. Default: 960.
    pub screen_height: u32,
    /// Edge length of one cell in pixels. Default: 16.
    pub cell_size: u32,
    /// Seed for the simulation's RNG. Default: 0.
    pub seed: u64,
    /// `TrueFlood` transfers from a source holding this much or less are
    /// skipped. Default: 0.1.
    pub true_flood_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 960,
            cell_size: 16,
            seed: 0,
            true_flood_threshold: CommitResolver::DEFAULT_TRUE_FLOOD_THRESHOLD,
        }
    }
}

impl SimConfig {
    /// Configuration whose derived grid is exactly `width x height` cells
    /// of `cell_size` pixels.
    pub fn for_grid(width: u32, height: u32, cell_size: u32, seed: u64) -> Self {
        Self {
            screen_width: width.saturating_mul(cell_size),
            screen_height: height.saturating_mul(cell_size),
            cell_size,
            seed,
            ..Self::default()
        }
    }

    /// Number of grid columns. Zero if `cell_size` is zero.
    pub fn grid_width(&self) -> u32 {
        self.screen_width.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Number of grid rows. Zero if `cell_size` is zero.
    pub fn grid_height(&self) -> u32 {
        self.screen_height.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let (width, height) = (self.grid_width(), self.grid_height());
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        let cells = u64::from(width) * u64::from(height);
        if usize::try_from(cells).is_err() || width > i32::MAX as u32 || height > i32::MAX as u32
        {
            return Err(ConfigError::CellCountOverflow { value: cells });
        }
        let t = self.true_flood_threshold;
        if !(0.0..1.0).contains(&t) {
            return Err(ConfigError::InvalidThreshold { value: t });
        }
        Ok(())
    }
}
