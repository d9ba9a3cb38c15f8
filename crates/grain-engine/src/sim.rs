//! The simulation: grid, registry, RNG, and tick orchestration.
//!
//! [`Simulation`] is the host-facing API. Each call to
//! [`tick()`](Simulation::tick) runs one complete tick: paint the
//! pointer stroke, run the update pass unless paused, commit, and advance
//! the tick counter.
//!
//! # Ownership model
//!
//! The simulation exclusively owns its [`Grid`] and shares the immutable
//! [`Registry`] through an `Arc`. All mutating methods take `&mut self`;
//! reads hand out borrows of the grid, so a host cannot tick while
//! holding one. No background threads are involved.

use std::sync::Arc;
use std::time::Instant;

use grain_core::{Cell, MaterialId, Registry, TickId};
use grain_grid::Grid;
use rand::SeedableRng;

use crate::commit::CommitResolver;
use crate::config::{ConfigError, SimConfig};
use crate::error::SimError;
use crate::metrics::TickMetrics;
use crate::paint::{paint_stroke, PaintAction, Pointer};
use crate::proposal::{Proposal, ProposalBuffer, TransferMode};
use crate::rules::is_moveable_to;
use crate::update::propose_moves;
use crate::SimRng;

// ── TickInput ───────────────────────────────────────────────────

/// Which paint action, if any, the pointer requests this tick.
///
/// The host maps physical buttons onto these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Nothing held.
    #[default]
    Released,
    /// Paint the selected material.
    Place,
    /// Paint Vacuum.
    Erase,
}

/// Host input for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position at the previous tick.
    pub pointer_old: Pointer,
    /// Pointer position now.
    pub pointer_new: Pointer,
    /// Held button.
    pub button: PointerButton,
    /// Whether painting is allowed. Hosts clear this while a menu or
    /// other modal UI has the pointer.
    pub paint_active: bool,
    /// Skip the update pass. Painting and queued injections still apply.
    pub paused: bool,
}

impl TickInput {
    /// A tick with no pointer activity.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A tick that paints a stroke from `old` to `new`.
    pub fn stroke(old: Pointer, new: Pointer, button: PointerButton) -> Self {
        Self {
            pointer_old: old,
            pointer_new: new,
            button,
            paint_active: true,
            paused: false,
        }
    }

    /// Same input with the update pass skipped.
    pub fn paused(self) -> Self {
        Self {
            paused: true,
            ..self
        }
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// A falling-sand simulation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grain_core::{MaterialId, Registry};
/// use grain_engine::{SimConfig, Simulation, TickInput};
///
/// let config = SimConfig::for_grid(4, 4, 16, 7);
/// let mut sim = Simulation::new(config, Arc::new(Registry::standard())).unwrap();
/// sim.set_cell(1, 0, MaterialId::SAND, 1.0).unwrap();
/// sim.tick(&TickInput::idle()).unwrap();
/// assert_eq!(sim.cell_at(1, 1).unwrap().material, MaterialId::SAND);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    buffer: ProposalBuffer,
    resolver: CommitResolver,
    rng: SimRng,
    selected: MaterialId,
    tick: TickId,
    last_metrics: TickMetrics,
}

impl Simulation {
    /// Create an all-Vacuum simulation sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `config` fails validation.
    pub fn new(config: SimConfig, registry: Arc<Registry>) -> Result<Self, SimError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width(), config.grid_height(), registry)?;
        Ok(Self::assemble(config, grid))
    }

    /// Create a simulation around an existing grid.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `config` fails validation or its
    /// derived dimensions differ from the grid's.
    pub fn from_grid(config: SimConfig, grid: Grid) -> Result<Self, SimError> {
        config.validate()?;
        let expected = (config.grid_width(), config.grid_height());
        let found = (grid.width(), grid.height());
        if expected != found {
            return Err(ConfigError::GridMismatch { expected, found }.into());
        }
        Ok(Self::assemble(config, grid))
    }

    fn assemble(config: SimConfig, grid: Grid) -> Self {
        log::debug!(
            "simulation created: {}x{} cells, {} materials, seed {}",
            grid.width(),
            grid.height(),
            grid.registry().len(),
            config.seed
        );
        Self {
            buffer: ProposalBuffer::with_capacity(grid.len()),
            resolver: CommitResolver::new(config.true_flood_threshold),
            rng: SimRng::seed_from_u64(config.seed),
            selected: MaterialId::VACUUM,
            tick: TickId::default(),
            last_metrics: TickMetrics::default(),
            config,
            grid,
        }
    }

    /// Run one tick.
    ///
    /// Paints first (if `paint_active` and a button is held), then runs
    /// the update pass unless `paused`, then commits. The commit runs even
    /// while paused so queued injections land.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Grid`] if the paint stroke leaves the grid. The
    /// stroke is rejected whole, no update or commit runs, and the tick
    /// counter does not advance.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickMetrics, SimError> {
        let start = Instant::now();
        let mut metrics = TickMetrics::default();

        let action = match input.button {
            PointerButton::Place => Some(PaintAction::Place(self.selected)),
            PointerButton::Erase => Some(PaintAction::Erase),
            PointerButton::Released => None,
        };
        if let Some(action) = action.filter(|_| input.paint_active) {
            let t = Instant::now();
            metrics.painted_cells = paint_stroke(
                &mut self.grid,
                input.pointer_old,
                input.pointer_new,
                self.config.cell_size,
                action,
            )?;
            metrics.paint_us = t.elapsed().as_micros() as u64;
        }

        if !input.paused {
            let t = Instant::now();
            propose_moves(&self.grid, &mut self.rng, &mut self.buffer);
            metrics.update_us = t.elapsed().as_micros() as u64;
        }

        let t = Instant::now();
        metrics.commit = self
            .resolver
            .commit(&mut self.grid, &mut self.buffer, &mut self.rng)?;
        metrics.commit_us = t.elapsed().as_micros() as u64;

        self.tick = TickId(self.tick.0 + 1);
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics;
        log::trace!(
            "tick {}: {} proposed, {} applied, {} contested, {} stale, {} painted",
            self.tick,
            metrics.commit.proposed,
            metrics.commit.applied(),
            metrics.commit.contested_discarded,
            metrics.commit.stale_dropped,
            metrics.painted_cells
        );
        Ok(metrics)
    }

    /// Queue an `Inject` of the cell at `src` into `dst`, applied by the
    /// next [`tick()`](Self::tick).
    ///
    /// Returns `false` (and queues nothing) if the transfer is not
    /// currently eligible: `dst` must hold the same material as `src`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Grid`] if either coordinate is out of bounds.
    pub fn inject(&mut self, src: (i32, i32), dst: (i32, i32)) -> Result<bool, SimError> {
        let s = self.grid.index_of(src.0, src.1)?;
        let d = self.grid.index_of(dst.0, dst.1)?;
        if !is_moveable_to(&self.grid, s, d, TransferMode::Inject) {
            return Ok(false);
        }
        self.buffer.push(Proposal::new(s, d, TransferMode::Inject));
        Ok(true)
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Grid`] if the coordinate is out of bounds.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, SimError> {
        Ok(self.grid.get(x, y)?)
    }

    /// Overwrite the cell at `(x, y)` directly, bypassing the tick.
    ///
    /// # Errors
    ///
    /// As [`Grid::set`].
    pub fn set_cell(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialId,
        quantity: f32,
    ) -> Result<(), SimError> {
        Ok(self.grid.set(x, y, material, quantity)?)
    }

    /// Material painted by [`PointerButton::Place`]. Initially Vacuum.
    pub fn selected_material(&self) -> MaterialId {
        self.selected
    }

    /// Select the material to paint.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Registry`] if `id` is not registered.
    pub fn set_selected_material(&mut self, id: MaterialId) -> Result<(), SimError> {
        self.grid.registry().get(id)?;
        self.selected = id;
        Ok(())
    }

    /// Reset every cell to Vacuum and drop queued injections.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.buffer.clear();
        log::debug!("grid cleared at tick {}", self.tick);
    }

    /// Clear the grid and restart from tick 0 with a new seed.
    ///
    /// The selected material is kept.
    pub fn reset(&mut self, seed: u64) {
        self.grid.clear();
        self.buffer.clear();
        self.config.seed = seed;
        self.rng = SimRng::seed_from_u64(seed);
        self.tick = TickId::default();
        self.last_metrics = TickMetrics::default();
        log::debug!("simulation reset with seed {seed}");
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The shared material catalog.
    pub fn registry(&self) -> &Arc<Registry> {
        self.grid.registry()
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of completed ticks since construction or the last reset.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The seed the RNG was last seeded with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}
