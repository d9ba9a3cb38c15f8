//! Core types and traits for the Grain sand simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Grain workspace:
//! material identifiers, the immutable material [`Registry`], the
//! per-position [`Cell`] value, error types, and the [`CellAccess`]
//! read trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod material;
pub mod registry;
pub mod traits;

pub use cell::{Cell, SATURATION};
pub use error::RegistryError;
pub use id::{MaterialId, TickId};
pub use material::{MaterialType, Phase, Rgba};
pub use registry::Registry;
pub use traits::CellAccess;
