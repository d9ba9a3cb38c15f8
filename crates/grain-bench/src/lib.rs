//! Benchmark profiles and utilities for the Grain sand simulator.
//!
//! Provides pre-built worlds for benchmarking and examples:
//!
//! - [`reference_profile`]: the default 80x60 grid, half full of sand
//!   and water over stone ledges
//! - [`stress_profile`]: 320x240 grid (~77K cells) with the same layout
//! - [`fill_reference_scene`]: deterministic layout used by both

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use grain_core::{MaterialId, Registry};
use grain_engine::{SimConfig, SimError, Simulation};

/// Build the reference benchmark world: 80x60 cells, the default screen.
pub fn reference_profile(seed: u64) -> Result<Simulation, SimError> {
    profile(SimConfig {
        seed,
        ..SimConfig::default()
    })
}

/// Build the stress benchmark world: 320x240 cells (~77K).
///
/// Same layout as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64) -> Result<Simulation, SimError> {
    profile(SimConfig::for_grid(320, 240, 4, seed))
}

fn profile(config: SimConfig) -> Result<Simulation, SimError> {
    let mut sim = Simulation::new(config, Arc::new(Registry::standard()))?;
    fill_reference_scene(&mut sim)?;
    Ok(sim)
}

/// Lay out the reference scene on `sim`, replacing whatever is there.
///
/// The top half alternates 3-wide bands of sand and water with a
/// half-full water cell every seventh column; stone ledges run across
/// the lower half with gaps every ten cells. Deterministic, no RNG.
pub fn fill_reference_scene(sim: &mut Simulation) -> Result<(), SimError> {
    sim.clear();
    let (w, h) = (sim.width() as i32, sim.height() as i32);
    for y in 0..h / 2 {
        for x in 0..w {
            let (material, quantity) = if x % 7 == 3 {
                (MaterialId::WATER, 0.5)
            } else if (x / 3) % 2 == 0 {
                (MaterialId::SAND, 1.0)
            } else {
                (MaterialId::WATER, 1.0)
            };
            sim.set_cell(x, y, material, quantity)?;
        }
    }
    for y in (h / 2 + 4..h).step_by(6) {
        for x in 0..w {
            if x % 10 != 5 {
                sim.set_cell(x, y, MaterialId::STONE, 1.0)?;
            }
        }
    }
    Ok(())
}
