//! ASCII scenes.
//!
//! Each row string is one grid row, top first. Legend:
//!
//! | Char | Cell |
//! |------|------|
//! | `.` | Vacuum |
//! | `W` | Water, full |
//! | `w` | Water, half |
//! | `S` | Sand, full |
//! | `#` | Stone, full |
//!
//! Panics on malformed input; these are test fixtures.

use std::sync::Arc;

use grain_core::{Cell, CellAccess, MaterialId, Registry};
use grain_grid::Grid;

/// The standard four-material catalog, shared.
pub fn standard_registry() -> Arc<Registry> {
    Arc::new(Registry::standard())
}

fn glyph(c: char) -> (MaterialId, f32) {
    match c {
        '.' => (MaterialId::VACUUM, 0.0),
        'W' => (MaterialId::WATER, 1.0),
        'w' => (MaterialId::WATER, 0.5),
        'S' => (MaterialId::SAND, 1.0),
        '#' => (MaterialId::STONE, 1.0),
        other => panic!("unknown scene glyph {other:?}"),
    }
}

/// Build a grid from ASCII rows using the standard registry.
pub fn scene(rows: &[&str]) -> Grid {
    assert!(!rows.is_empty(), "scene needs at least one row");
    let width = rows[0].chars().count();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {y} is ragged");
    }
    let mut grid = Grid::new(width as u32, rows.len() as u32, standard_registry())
        .expect("scene dimensions");
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let (material, quantity) = glyph(c);
            grid.set(x as i32, y as i32, material, quantity)
                .expect("scene cell");
        }
    }
    grid
}

/// Render `view` back to rows. Water below saturation shows as `w`;
/// materials outside the legend as `?`.
pub fn render_ascii<G: CellAccess + ?Sized>(view: &G) -> Vec<String> {
    let w = view.width() as usize;
    (0..view.height() as usize)
        .map(|y| {
            (0..w)
                .map(|x| match view.cell(x + y * w) {
                    Some(c) if c.is_vacuum() => '.',
                    Some(c) if c.material == MaterialId::WATER => {
                        if c.is_saturated() {
                            'W'
                        } else {
                            'w'
                        }
                    }
                    Some(c) if c.material == MaterialId::SAND => 'S',
                    Some(c) if c.material == MaterialId::STONE => '#',
                    _ => '?',
                })
                .collect()
        })
        .collect()
}

/// Coordinates of every cell holding `material`, row-major.
pub fn positions_of<G: CellAccess + ?Sized>(view: &G, material: MaterialId) -> Vec<(i32, i32)> {
    let w = view.width() as usize;
    (0..w * view.height() as usize)
        .filter(|&i| view.cell(i).is_some_and(|c| c.material == material))
        .map(|i| ((i % w) as i32, (i / w) as i32))
        .collect()
}

/// Summed quantity of `material` over the grid.
pub fn total_quantity<G: CellAccess + ?Sized>(view: &G, material: MaterialId) -> f32 {
    let len = view.width() as usize * view.height() as usize;
    (0..len)
        .filter_map(|i| view.cell(i))
        .filter(|c| c.material == material)
        .map(|c| c.quantity)
        .sum()
}

/// Summed mass of every cell.
pub fn total_mass<G: CellAccess + ?Sized>(view: &G) -> f32 {
    let len = view.width() as usize * view.height() as usize;
    (0..len).map(|i| view.mass_at(i)).sum()
}

/// A bare [`CellAccess`] over a cell vector, with no write validation.
///
/// Lets tests present states a [`Grid`] would refuse, such as cells of
/// unregistered materials.
pub struct MockView {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Cell>,
    pub registry: Registry,
}

impl MockView {
    /// All-Vacuum view over the standard registry.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::VACUUM; width as usize * height as usize],
            registry: Registry::standard(),
        }
    }
}

impl CellAccess for MockView {
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
