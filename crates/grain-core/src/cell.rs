//! The per-position particle state.

use crate::id::MaterialId;
use crate::material::{MaterialType, Phase};

/// Quantity a single cell can hold. A cell at this level is saturated.
pub const SATURATION: f32 = 1.0;

/// One grid position's mutable particle state.
///
/// `phase` is copied from the material when the cell is written, so the
/// update pass can classify a cell without a registry lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Material occupying the cell.
    pub material: MaterialId,
    /// Mobility class of the occupant.
    pub phase: Phase,
    /// Saturation ("moles") in `[0, 1]`. Zero exactly when Vacuum.
    pub quantity: f32,
    /// Carried but inert.
    pub temperature: f32,
}

impl Cell {
    /// The empty hole.
    pub const VACUUM: Cell = Cell {
        material: MaterialId::VACUUM,
        phase: Phase::Gas,
        quantity: 0.0,
        temperature: 0.0,
    };

    /// A cell of `material` holding `quantity`.
    pub fn of(material: &MaterialType, quantity: f32) -> Self {
        Self {
            material: material.id,
            phase: material.phase,
            quantity,
            temperature: 0.0,
        }
    }

    /// Whether the cell holds Vacuum.
    pub fn is_vacuum(&self) -> bool {
        self.material == MaterialId::VACUUM
    }

    /// Whether the cell may act as a move source this tick.
    pub fn is_mobile(&self) -> bool {
        !self.is_vacuum() && self.phase.is_mobile()
    }

    /// Whether the cell can accept more quantity.
    pub fn is_saturated(&self) -> bool {
        self.quantity >= SATURATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::VACUUM
    }
}
