//! Move proposals and the per-tick proposal buffer.

/// How a committed proposal changes cell contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransferMode {
    /// Exchange the full contents of source and destination. Powders.
    Swap,
    /// Pour as much of the source as fits into the destination.
    Flood,
    /// Level source and destination to their mean quantity.
    TrueFlood,
    /// Merge the source into a destination of the same material.
    /// Only queued by the host's bulk-fill path.
    Inject,
}

impl TransferMode {
    /// Commit order: lower runs first. `Flood` and `TrueFlood` share a rank.
    pub fn priority(self) -> u8 {
        match self {
            Self::Swap => 0,
            Self::Flood | Self::TrueFlood => 1,
            Self::Inject => 2,
        }
    }
}

/// A candidate transfer recorded during the update pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Proposal {
    /// Flat index of the moving cell.
    pub src: usize,
    /// Flat index of the target cell.
    pub dst: usize,
    /// How the transfer is applied.
    pub mode: TransferMode,
}

impl Proposal {
    /// Construct a proposal.
    pub fn new(src: usize, dst: usize, mode: TransferMode) -> Self {
        Self { src, dst, mode }
    }
}

/// Transient list of proposals for one tick.
///
/// Filled by the update pass (and by queued injections), fully drained by
/// the [`CommitResolver`](crate::CommitResolver) at the end of the tick.
/// The allocation is reused across ticks.
#[derive(Clone, Debug, Default)]
pub struct ProposalBuffer {
    proposals: Vec<Proposal>,
}

impl ProposalBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` proposals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            proposals: Vec::with_capacity(capacity),
        }
    }

    /// Record a proposal.
    pub fn push(&mut self, proposal: Proposal) {
        self.proposals.push(proposal);
    }

    /// Number of pending proposals.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Whether no proposals are pending.
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Pending proposals in insertion order.
    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Discard all pending proposals.
    pub fn clear(&mut self) {
        self.proposals.clear();
    }

    pub(crate) fn proposals_mut(&mut self) -> &mut Vec<Proposal> {
        &mut self.proposals
    }
}

impl Extend<Proposal> for ProposalBuffer {
    fn extend<I: IntoIterator<Item = Proposal>>(&mut self, iter: I) {
        self.proposals.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_commits_before_floods_before_inject() {
        assert!(TransferMode::Swap.priority() < TransferMode::Flood.priority());
        assert_eq!(
            TransferMode::Flood.priority(),
            TransferMode::TrueFlood.priority()
        );
        assert!(TransferMode::TrueFlood.priority() < TransferMode::Inject.priority());
    }

    #[test]
    fn buffer_push_and_clear() {
        let mut b = ProposalBuffer::with_capacity(4);
        assert!(b.is_empty());
        b.push(Proposal::new(0, 1, TransferMode::Swap));
        b.extend([Proposal::new(2, 1, TransferMode::Flood)]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.as_slice()[1].mode, TransferMode::Flood);
        b.clear();
        assert!(b.is_empty());
    }
}
