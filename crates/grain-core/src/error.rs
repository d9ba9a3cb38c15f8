//! Error types for registry construction and material lookup.

use crate::id::MaterialId;
use std::error::Error;
use std::fmt;

/// Errors from building or querying a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
    /// Lookup of an identity the registry does not contain.
    UnknownMaterial {
        /// The offending identity.
        id: MaterialId,
    },
    /// Attempted to build a registry with no materials.
    Empty,
    /// Entry 0 is not a massless material named `Vacuum`.
    MissingVacuum,
    /// A material's id does not match its position in the catalog.
    IdMismatch {
        /// The position in the catalog.
        expected: MaterialId,
        /// The id the entry declared.
        found: MaterialId,
    },
    /// Two materials share a name.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// Atomic mass is negative, NaN, or infinite.
    InvalidMass {
        /// Name of the offending material.
        name: String,
        /// The rejected mass.
        mass: f32,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaterial { id } => write!(f, "unknown material id {id}"),
            Self::Empty => write!(f, "registry must contain at least one material"),
            Self::MissingVacuum => {
                write!(f, "registry entry 0 must be a massless material named 'Vacuum'")
            }
            Self::IdMismatch { expected, found } => {
                write!(f, "material at position {expected} declares id {found}")
            }
            Self::DuplicateName { name } => write!(f, "duplicate material name '{name}'"),
            Self::InvalidMass { name, mass } => {
                write!(f, "material '{name}' has invalid atomic mass {mass}")
            }
        }
    }
}

impl Error for RegistryError {}
