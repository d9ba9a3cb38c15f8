//! Material definitions: phases, colors, and the immutable [`MaterialType`].

use crate::id::MaterialId;

/// Mobility class of a material, ordered from least to most mobile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Immovable. Never a move source, never displaced.
    SolidStatic,
    /// Falls straight or diagonally down; no lateral flow.
    SolidPowder,
    /// Falls, slides diagonally, and spreads sideways.
    Liquid,
    /// Moves like a liquid.
    Gas,
}

impl Phase {
    /// `true` for [`Phase::Liquid`] and [`Phase::Gas`].
    pub fn is_fluid(self) -> bool {
        matches!(self, Self::Liquid | Self::Gas)
    }

    /// `true` for everything except [`Phase::SolidStatic`].
    pub fn is_mobile(self) -> bool {
        self != Self::SolidStatic
    }
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A particle type and its physical constants.
///
/// Owned by the [`Registry`](crate::Registry); cells refer to it by
/// [`MaterialId`].
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialType {
    /// Identity tag. Equal to the entry's position in the registry.
    pub id: MaterialId,
    /// Human-readable name, unique within a registry.
    pub name: String,
    /// Base display color.
    pub color: Rgba,
    /// Atomic mass in relative units. Only used for comparisons.
    pub atomic_mass: f32,
    /// Mobility class.
    pub phase: Phase,
}

impl MaterialType {
    /// Construct a material type.
    pub fn new(
        id: MaterialId,
        name: impl Into<String>,
        color: Rgba,
        atomic_mass: f32,
        phase: Phase,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            atomic_mass,
            phase,
        }
    }

    /// Whether this is the empty hole.
    pub fn is_vacuum(&self) -> bool {
        self.id == MaterialId::VACUUM
    }
}
