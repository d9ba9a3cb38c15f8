//! The dense cell grid.

use crate::error::GridError;
use grain_core::{Cell, CellAccess, MaterialId, Registry, SATURATION};
use std::sync::Arc;

/// A fixed-size, row-major grid of [`Cell`]s.
///
/// Dimensions are fixed for the grid's lifetime and every flat index
/// `x + y * width` maps to exactly one cell. The grid starts all-Vacuum.
///
/// Two write paths exist: [`set`](Grid::set) is the checked,
/// coordinate-level overwrite used by painting; [`replace`](Grid::replace)
/// and [`swap`](Grid::swap) are the index-level primitives the commit
/// resolver builds transfers from.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use grain_core::{MaterialId, Registry};
/// use grain_grid::Grid;
///
/// let mut grid = Grid::new(8, 4, Arc::new(Registry::standard())).unwrap();
/// grid.set(3, 1, MaterialId::SAND, 1.0).unwrap();
/// assert_eq!(grid.get(3, 1).unwrap().material, MaterialId::SAND);
/// assert!(grid.get(8, 0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    registry: Arc<Registry>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-Vacuum grid of `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, registry: Arc<Registry>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::DimensionTooLarge {
                name: "width * height",
                value: width,
                max: Self::MAX_DIM,
            })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::VACUUM; len],
            registry,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The material catalog shared with the simulation.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        CellAccess::in_bounds(self, x, y)
    }

    /// Flat index of `(x, y)`.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize, GridError> {
        self.checked_index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// `(x, y)` of a flat index, or `None` past the end.
    pub fn coords_of(&self, index: usize) -> Option<(i32, i32)> {
        (index < self.cells.len()).then(|| {
            let w = self.width as usize;
            ((index % w) as i32, (index / w) as i32)
        })
    }

    /// Read-only view of the cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<&Cell, GridError> {
        let i = self.index_of(x, y)?;
        Ok(&self.cells[i])
    }

    /// The cell at a flat index, or `None` past the end.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite `(x, y)` with `material` at `quantity`.
    ///
    /// The cell's phase is taken from the registry and its temperature is
    /// reset.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] for a coordinate outside the grid.
    /// - [`GridError::Material`] if `material` is not registered.
    /// - [`GridError::InvalidQuantity`] if Vacuum is written with a
    ///   non-zero quantity, or any other material with a quantity outside
    ///   `(0, 1]`.
    pub fn set(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialId,
        quantity: f32,
    ) -> Result<(), GridError> {
        let i = self.index_of(x, y)?;
        let kind = self.registry.get(material)?;
        let valid = if kind.is_vacuum() {
            quantity == 0.0
        } else {
            quantity > 0.0 && quantity <= SATURATION
        };
        if !valid {
            return Err(GridError::InvalidQuantity { quantity });
        }
        self.cells[i] = Cell::of(kind, quantity);
        Ok(())
    }

    /// Replace the cell at a flat index, returning the previous contents.
    ///
    /// Low-level path for the commit resolver: the caller is responsible
    /// for the saturation invariant of `cell`.
    pub fn replace(&mut self, index: usize, cell: Cell) -> Result<Cell, GridError> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, cell))
    }

    /// Exchange the full contents of two cells.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), GridError> {
        let len = self.cells.len();
        for index in [a, b] {
            if index >= len {
                return Err(GridError::IndexOutOfRange { index, len });
            }
        }
        self.cells.swap(a, b);
        Ok(())
    }

    /// Quantity times atomic mass of the cell at `index`.
    pub fn mass_at(&self, index: usize) -> f32 {
        CellAccess::mass_at(self, index)
    }

    /// Reset every cell to Vacuum.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::VACUUM);
    }

    /// Number of non-Vacuum cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_vacuum()).count()
    }
}

impl CellAccess for Grid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }
}
