//! The immutable material catalog.

use crate::error::RegistryError;
use crate::id::MaterialId;
use crate::material::{MaterialType, Phase, Rgba};
use indexmap::IndexMap;

/// Fixed, indexable catalog of [`MaterialType`]s.
///
/// Entries are keyed by name and kept in insertion order, so
/// `MaterialId(n)` is simply the n-th entry: lookup by identity is O(1)
/// and lookup by name is a hash lookup. There is no mutation API; build
/// one at startup and share it behind an `Arc`.
///
/// # Examples
///
/// ```
/// use grain_core::{MaterialId, Phase, Registry};
///
/// let registry = Registry::standard();
/// let sand = registry.get(MaterialId::SAND).unwrap();
/// assert_eq!(sand.name, "Sand");
/// assert_eq!(sand.phase, Phase::SolidPowder);
/// assert!(registry.get(MaterialId(99)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    materials: IndexMap<String, MaterialType>,
}

impl Registry {
    /// Build a registry from a catalog, validating its structure.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Empty`] if `materials` is empty.
    /// - [`RegistryError::MissingVacuum`] if entry 0 is not a massless
    ///   material named `Vacuum`.
    /// - [`RegistryError::IdMismatch`] if an entry's id differs from its
    ///   position.
    /// - [`RegistryError::DuplicateName`] on a repeated name.
    /// - [`RegistryError::InvalidMass`] on a negative or non-finite mass.
    pub fn new(materials: Vec<MaterialType>) -> Result<Self, RegistryError> {
        let first = materials.first().ok_or(RegistryError::Empty)?;
        if first.name != "Vacuum" || first.atomic_mass != 0.0 {
            return Err(RegistryError::MissingVacuum);
        }

        let mut by_name = IndexMap::with_capacity(materials.len());
        for (pos, material) in materials.into_iter().enumerate() {
            let expected = MaterialId(pos as u32);
            if material.id != expected {
                return Err(RegistryError::IdMismatch {
                    expected,
                    found: material.id,
                });
            }
            if !material.atomic_mass.is_finite() || material.atomic_mass < 0.0 {
                return Err(RegistryError::InvalidMass {
                    name: material.name,
                    mass: material.atomic_mass,
                });
            }
            if by_name.contains_key(&material.name) {
                return Err(RegistryError::DuplicateName {
                    name: material.name,
                });
            }
            by_name.insert(material.name.clone(), material);
        }
        Ok(Self { materials: by_name })
    }

    /// The standard four-material catalog: Vacuum, Water, Sand, Stone.
    pub fn standard() -> Self {
        let materials = [
            MaterialType::new(
                MaterialId::VACUUM,
                "Vacuum",
                Rgba::rgb(50, 50, 50),
                0.0,
                Phase::Gas,
            ),
            MaterialType::new(
                MaterialId::WATER,
                "Water",
                Rgba::rgb(170, 170, 200),
                16.0,
                Phase::Liquid,
            ),
            MaterialType::new(
                MaterialId::SAND,
                "Sand",
                Rgba::rgb(200, 200, 170),
                60.1,
                Phase::SolidPowder,
            ),
            MaterialType::new(
                MaterialId::STONE,
                "Stone",
                Rgba::rgb(100, 100, 130),
                100.1,
                Phase::SolidStatic,
            ),
        ]
        .into_iter()
        .map(|m| (m.name.clone(), m))
        .collect();
        Self { materials }
    }

    /// Look up a material by identity.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownMaterial`] if `id` is past the end of the
    /// catalog.
    pub fn get(&self, id: MaterialId) -> Result<&MaterialType, RegistryError> {
        self.materials
            .get_index(id.index())
            .map(|(_, m)| m)
            .ok_or(RegistryError::UnknownMaterial { id })
    }

    /// Look up a material by its display name.
    pub fn by_name(&self, name: &str) -> Option<&MaterialType> {
        self.materials.get(name)
    }

    /// Whether `id` names a registered material.
    pub fn contains(&self, id: MaterialId) -> bool {
        id.index() < self.materials.len()
    }

    /// The Vacuum entry.
    pub fn vacuum(&self) -> &MaterialType {
        // Construction guarantees entry 0 exists.
        &self.materials[0]
    }

    /// Number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Always `false`: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate materials in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialType> {
        self.materials.values()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
