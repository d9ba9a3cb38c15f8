//! Tick engine for the Grain sand simulator.
//!
//! Each tick runs in three phases that never interleave:
//!
//! 1. **Paint** ([`paint`]): pointer strokes overwrite cells directly.
//! 2. **Update** ([`update`]): a read-only scan of the grid records at most
//!    one [`Proposal`] per cell into the [`ProposalBuffer`].
//! 3. **Commit** ([`commit`]): the [`CommitResolver`] picks one proposal
//!    per destination at random, orders survivors by [`TransferMode`],
//!    re-validates each against the live grid, and applies it.
//!
//! Decisions are taken from one consistent view of the grid; effects are
//! serialized through the resolver. [`Simulation`] wires the phases
//! together behind a single [`tick()`](Simulation::tick) call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod commit;
pub mod config;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod paint;
pub mod proposal;
pub mod rules;
pub mod sim;
pub mod update;

pub use commit::{CommitResolver, CommitStats};
pub use config::{ConfigError, SimConfig};
pub use error::SimError;
pub use frame::{Frame, FrameOptions, Shade};
pub use metrics::TickMetrics;
pub use paint::{PaintAction, Pointer};
pub use proposal::{Proposal, ProposalBuffer, TransferMode};
pub use sim::{PointerButton, Simulation, TickInput};

/// The simulation's single pseudo-random source.
///
/// Seeded once from [`SimConfig::seed`]; every tie-break and conflict
/// draw comes from it, so a fixed seed reproduces a run exactly.
pub type SimRng = rand_chacha::ChaCha8Rng;
