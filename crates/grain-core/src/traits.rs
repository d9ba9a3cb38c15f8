//! Core abstraction trait for read-only grid access.

use crate::cell::Cell;
use crate::registry::Registry;

/// Read-only view of a dense 2-D cell grid.
///
/// Movement decisions and frame read-back go through this trait rather
/// than through the concrete grid, so nothing on the decision side can
/// mutate cells mid-scan. Indices are row-major: `i = x + y * width`.
pub trait CellAccess {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The cell at a flat index, or `None` past the end.
    fn cell(&self, index: usize) -> Option<&Cell>;

    /// The material catalog the cells refer to.
    fn registry(&self) -> &Registry;

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Flat index of `(x, y)`, or `None` outside the grid.
    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| x as usize + y as usize * self.width() as usize)
    }

    /// Quantity times atomic mass. Zero for Vacuum and for indices past
    /// the end.
    fn mass_at(&self, index: usize) -> f32 {
        self.cell(index)
            .and_then(|c| {
                self.registry()
                    .get(c.material)
                    .ok()
                    .map(|m| c.quantity * m.atomic_mass)
            })
            .unwrap_or(0.0)
    }
}
