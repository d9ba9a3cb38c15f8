//! The commit resolver: conflict resolution and transfer application.
//!
//! Consumes one tick's [`ProposalBuffer`] and applies it to the [`Grid`]:
//!
//! 1. Group proposals by destination (stable sort).
//! 2. For a contested destination keep one proposal, drawn uniformly at
//!    random; the rest are discarded.
//! 3. Order survivors by [`TransferMode::priority`]: swaps, then floods,
//!    then injections.
//! 4. Re-check each survivor against the *current* grid and drop it
//!    silently if it no longer holds.
//! 5. Apply by mode.
//! 6. Leave the buffer empty.
//!
//! The resolver is the only code path that changes two cells as one
//! transfer. It must stay single-threaded.

use crate::proposal::{Proposal, ProposalBuffer, TransferMode};
use crate::rules::is_moveable_to;
use crate::SimRng;
use grain_core::{Cell, SATURATION};
use grain_grid::{Grid, GridError};
use rand::Rng;

/// Counters from a single commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Proposals in the buffer when the commit started.
    pub proposed: usize,
    /// Proposals that lost a contested destination.
    pub contested_discarded: usize,
    /// Survivors whose preconditions no longer held when their turn came.
    pub stale_dropped: usize,
    /// Applied `Swap` transfers.
    pub applied_swap: usize,
    /// Applied `Flood` transfers.
    pub applied_flood: usize,
    /// Applied `TrueFlood` transfers.
    pub applied_true_flood: usize,
    /// Applied `Inject` transfers.
    pub applied_inject: usize,
}

impl CommitStats {
    /// Total transfers applied.
    pub fn applied(&self) -> usize {
        self.applied_swap + self.applied_flood + self.applied_true_flood + self.applied_inject
    }

    fn record(&mut self, mode: TransferMode) {
        match mode {
            TransferMode::Swap => self.applied_swap += 1,
            TransferMode::Flood => self.applied_flood += 1,
            TransferMode::TrueFlood => self.applied_true_flood += 1,
            TransferMode::Inject => self.applied_inject += 1,
        }
    }
}

/// Resolves and applies a tick's proposals.
///
/// Owns its scratch vectors so repeated commits do not reallocate.
#[derive(Clone, Debug)]
pub struct CommitResolver {
    true_flood_threshold: f32,
    survivors: Vec<Proposal>,
    applied: Vec<Proposal>,
}

impl CommitResolver {
    /// Default minimum source quantity for a `TrueFlood` to proceed.
    pub const DEFAULT_TRUE_FLOOD_THRESHOLD: f32 = 0.1;

    /// Create a resolver. `TrueFlood` transfers from sources holding
    /// `true_flood_threshold` or less are skipped.
    pub fn new(true_flood_threshold: f32) -> Self {
        Self {
            true_flood_threshold,
            survivors: Vec::new(),
            applied: Vec::new(),
        }
    }

    /// Proposals applied by the most recent [`commit`](Self::commit), in
    /// application order. Every destination appears at most once.
    pub fn applied(&self) -> &[Proposal] {
        &self.applied
    }

    /// Resolve and apply everything in `buffer`, leaving it empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if a proposal names an index
    /// past the end of the grid. The update pass never produces one; only
    /// hand-built buffers can.
    pub fn commit(
        &mut self,
        grid: &mut Grid,
        buffer: &mut ProposalBuffer,
        rng: &mut SimRng,
    ) -> Result<CommitStats, GridError> {
        let mut stats = CommitStats::default();
        self.applied.clear();

        let proposals = buffer.proposals_mut();
        stats.proposed = proposals.len();
        let len = grid.len();
        if let Some(bad) = proposals.iter().find(|p| p.src >= len || p.dst >= len) {
            let index = bad.src.max(bad.dst);
            proposals.clear();
            return Err(GridError::IndexOutOfRange { index, len });
        }

        proposals.sort_by_key(|p| p.dst);
        self.survivors.clear();
        for group in proposals.chunk_by(|a, b| a.dst == b.dst) {
            let pick = if group.len() == 1 {
                0
            } else {
                rng.random_range(0..group.len())
            };
            stats.contested_discarded += group.len() - 1;
            self.survivors.push(group[pick]);
        }
        proposals.clear();

        // Stable: within a rank, survivors stay in destination order.
        self.survivors.sort_by_key(|p| p.mode.priority());

        let survivors = std::mem::take(&mut self.survivors);
        for &proposal in &survivors {
            if is_moveable_to(&*grid, proposal.src, proposal.dst, proposal.mode)
                && apply(grid, proposal, self.true_flood_threshold)?
            {
                stats.record(proposal.mode);
                self.applied.push(proposal);
            } else {
                stats.stale_dropped += 1;
            }
        }
        self.survivors = survivors;
        Ok(stats)
    }
}

impl Default for CommitResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TRUE_FLOOD_THRESHOLD)
    }
}

/// Apply one eligible proposal. Returns `false` if the transfer declined
/// to proceed (a `TrueFlood` from a nearly empty source).
fn apply(grid: &mut Grid, p: Proposal, true_flood_threshold: f32) -> Result<bool, GridError> {
    let len = grid.len();
    let src = *grid
        .cell(p.src)
        .ok_or(GridError::IndexOutOfRange { index: p.src, len })?;
    let dst = *grid
        .cell(p.dst)
        .ok_or(GridError::IndexOutOfRange { index: p.dst, len })?;

    match p.mode {
        TransferMode::Swap => grid.swap(p.src, p.dst)?,
        TransferMode::Flood => {
            if dst.is_vacuum() {
                grid.replace(p.dst, src)?;
                grid.replace(p.src, Cell::VACUUM)?;
            } else {
                let moved = (SATURATION - dst.quantity).min(src.quantity);
                let left = src.quantity - moved;
                grid.replace(
                    p.dst,
                    Cell {
                        quantity: (dst.quantity + moved).min(SATURATION),
                        ..dst
                    },
                )?;
                grid.replace(p.src, drained(src, left))?;
            }
        }
        TransferMode::TrueFlood => {
            if src.quantity <= true_flood_threshold {
                return Ok(false);
            }
            let mean = 0.5 * (src.quantity + dst.quantity);
            let target = if dst.is_vacuum() { src } else { dst };
            grid.replace(
                p.dst,
                Cell {
                    quantity: mean,
                    ..target
                },
            )?;
            grid.replace(
                p.src,
                Cell {
                    quantity: mean,
                    ..src
                },
            )?;
        }
        TransferMode::Inject => {
            grid.replace(
                p.dst,
                Cell {
                    quantity: (dst.quantity + src.quantity).min(SATURATION),
                    ..src
                },
            )?;
            grid.replace(p.src, Cell::VACUUM)?;
        }
    }
    Ok(true)
}

/// `cell` with `quantity` left, or Vacuum once nothing is left.
fn drained(cell: Cell, quantity: f32) -> Cell {
    if quantity <= 0.0 {
        Cell::VACUUM
    } else {
        Cell { quantity, ..cell }
    }
}
