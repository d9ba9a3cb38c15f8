//! Grain: a falling-sand cellular automaton.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Grain sub-crates. For most hosts, adding `grain` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use grain::prelude::*;
//!
//! // A 10x10 grid of 16-pixel cells.
//! let config = SimConfig::for_grid(10, 10, 16, 42);
//! let mut sim = Simulation::new(config, Arc::new(Registry::standard())).unwrap();
//!
//! // Paint one sand cell with the pointer, then let it fall.
//! sim.set_selected_material(MaterialId::SAND).unwrap();
//! let p = Pointer::at_cell(4, 0, 16);
//! sim.tick(&TickInput::stroke(p, p, PointerButton::Place)).unwrap();
//! for _ in 0..20 {
//!     sim.tick(&TickInput::idle()).unwrap();
//! }
//! assert_eq!(sim.cell_at(4, 9).unwrap().material, MaterialId::SAND);
//! assert_eq!(sim.current_tick(), TickId(21));
//!
//! let frame = Frame::capture(sim.grid(), FrameOptions::default());
//! assert_eq!(frame.pixels().len(), 100);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grain-core` | Material ids, phases, registry, cells, the `CellAccess` trait |
//! | [`grid`] | `grain-grid` | Dense cell storage and bounds-checked access |
//! | [`engine`] | `grain-engine` | Update pass, commit resolver, painting, frames, `Simulation` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`grain-core`).
///
/// Contains [`types::MaterialType`], the immutable [`types::Registry`],
/// the [`types::Cell`] value, and the [`types::CellAccess`] read trait.
pub use grain_core as types;

/// Dense cell storage (`grain-grid`).
pub use grain_grid as grid;

/// The tick engine (`grain-engine`).
///
/// [`engine::Simulation`] drives paint, update and commit; the phases are
/// also usable on their own through [`engine::update`],
/// [`engine::commit`] and [`engine::paint`].
pub use grain_engine as engine;

/// Common imports for typical Grain usage.
///
/// ```rust
/// use grain::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use grain_core::{
        Cell, CellAccess, MaterialId, MaterialType, Phase, Registry, Rgba, TickId, SATURATION,
    };

    // Grid
    pub use grain_grid::Grid;

    // Errors
    pub use grain_core::RegistryError;
    pub use grain_engine::{ConfigError, SimError};
    pub use grain_grid::GridError;

    // Engine
    pub use grain_engine::{
        Frame, FrameOptions, PaintAction, Pointer, PointerButton, SimConfig, Simulation,
        TickInput, TickMetrics, TransferMode,
    };
}
