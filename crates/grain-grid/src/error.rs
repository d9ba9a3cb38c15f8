//! Error types for grid construction and cell access.

use grain_core::RegistryError;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A coordinate lies outside `[0, width) x [0, height)`.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A flat index is past the end of the grid.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A write would break the saturation invariant: Vacuum must hold
    /// exactly 0, any other material a quantity in `(0, 1]`.
    InvalidQuantity {
        /// The rejected quantity.
        quantity: f32,
    },
    /// The written material is not in the grid's registry.
    Material(RegistryError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "cell index {index} out of range for grid of {len} cells")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::InvalidQuantity { quantity } => {
                write!(f, "quantity {quantity} violates the saturation invariant")
            }
            Self::Material(e) => write!(f, "material: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Material(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for GridError {
    fn from(e: RegistryError) -> Self {
        Self::Material(e)
    }
}
