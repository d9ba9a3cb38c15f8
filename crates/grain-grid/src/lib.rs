//! Dense 2-D cell storage for the Grain sand simulator.
//!
//! [`Grid`] owns every [`Cell`](grain_core::Cell) of the playfield and is
//! the only mutable simulation state. Coordinates are `(x, y)` with `y = 0`
//! the top row; flat indices are row-major (`i = x + y * width`).
//!
//! All coordinate arguments are checked. Out-of-bounds access returns
//! [`GridError::OutOfBounds`]; there is no wraparound and no clamping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
