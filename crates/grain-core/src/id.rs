//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a material within a [`Registry`](crate::Registry).
///
/// Materials are registered at startup and assigned sequential IDs.
/// `MaterialId(n)` corresponds to the n-th entry of the registry, and
/// `MaterialId(0)` is always Vacuum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl MaterialId {
    /// The empty hole. Always the first registry entry.
    pub const VACUUM: MaterialId = MaterialId(0);
    /// Standard catalog: water.
    pub const WATER: MaterialId = MaterialId(1);
    /// Standard catalog: sand.
    pub const SAND: MaterialId = MaterialId(2);
    /// Standard catalog: stone.
    pub const STONE: MaterialId = MaterialId(3);

    /// The registry slot this ID refers to.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaterialId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step, paused
/// frames included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
