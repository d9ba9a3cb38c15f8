//! Test utilities and fixtures for Grain development.
//!
//! Provides ASCII scene construction ([`scene`]), grid inspection helpers
//! ([`render_ascii`], [`positions_of`], [`total_quantity`],
//! [`total_mass`]), and a [`MockView`] implementing [`CellAccess`] for
//! exercising read-side code without a real grid.
//!
//! [`CellAccess`]: grain_core::CellAccess

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod scene;

pub use scene::{
    positions_of, render_ascii, scene, standard_registry, total_mass, total_quantity, MockView,
};
