//! Pointer painting.
//!
//! A paint stroke runs from the previous frame's pointer position to the
//! current one. Fast pointer motion skips over cells between frames, so
//! the stroke is walked one cell at a time from the new position back to
//! the old one and every cell on the way is written.
//!
//! Painting writes the grid directly. It is not a transfer and does not
//! go through the proposal buffer.

use grain_core::{Cell, MaterialId, SATURATION};
use grain_grid::{Grid, GridError};
use smallvec::SmallVec;

/// A pointer position in host surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate, `+y` down.
    pub y: f32,
}

impl Pointer {
    /// Construct a pointer position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pointer at the center of grid cell `(x, y)`.
    pub fn at_cell(x: i32, y: i32, cell_size: u32) -> Self {
        let s = cell_size as f32;
        Self::new((x as f32 + 0.5) * s, (y as f32 + 0.5) * s)
    }
}

/// What a stroke writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintAction {
    /// Fill with the material at full saturation. Placing Vacuum erases.
    Place(MaterialId),
    /// Reset to Vacuum.
    Erase,
}

/// The grid cell under `pointer`.
///
/// Floor division, so negative pixels land on negative cells. Non-finite
/// coordinates map to `i32::MIN`, which no grid contains.
pub fn pointer_to_cell(pointer: Pointer, cell_size: u32) -> (i32, i32) {
    let s = cell_size.max(1) as f32;
    let axis = |v: f32| {
        if v.is_finite() {
            (v / s).floor() as i32
        } else {
            i32::MIN
        }
    };
    (axis(pointer.x), axis(pointer.y))
}

/// Every cell a stroke from `old` to `new` touches, starting at `new`.
///
/// Steps one cell (`cell_size` pixels) at a time toward `old`, so
/// consecutive cells are 8-neighbors. Both endpoints are always included
/// and no cell repeats. The result has `max(|dx|, |dy|) + 1` entries
/// where `(dx, dy)` is the cell-space span.
///
/// Empty if either pointer maps off the coordinate space (non-finite, or
/// saturated to `i32::MIN`).
pub fn stroke_cells(old: Pointer, new: Pointer, cell_size: u32) -> SmallVec<[(i32, i32); 16]> {
    let (x0, y0) = pointer_to_cell(new, cell_size);
    let (x1, y1) = pointer_to_cell(old, cell_size);
    if [x0, y0, x1, y1].contains(&i32::MIN) {
        return SmallVec::new();
    }
    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);
    let steps = dx.abs().max(dy.abs());

    let mut cells = SmallVec::new();
    cells.push((x0, y0));
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let x = i64::from(x0) + (dx as f64 * t).round() as i64;
        let y = i64::from(y0) + (dy as f64 * t).round() as i64;
        // Both lie between the endpoints, which are i32.
        cells.push((x as i32, y as i32));
    }
    cells
}

/// Apply a stroke to `grid`, returning the number of cells written.
///
/// The stroke is all-or-nothing: every cell and the material are checked
/// before anything is written.
///
/// # Errors
///
/// - [`GridError::OutOfBounds`] if either endpoint lies outside the grid.
/// - [`GridError::Material`] if a placed material is not registered.
pub fn paint_stroke(
    grid: &mut Grid,
    old: Pointer,
    new: Pointer,
    cell_size: u32,
    action: PaintAction,
) -> Result<usize, GridError> {
    // Strokes are straight, so in-bounds endpoints keep every cell in bounds.
    let (nx, ny) = pointer_to_cell(new, cell_size);
    let (ox, oy) = pointer_to_cell(old, cell_size);
    grid.index_of(nx, ny)?;
    grid.index_of(ox, oy)?;

    let fill = match action {
        PaintAction::Erase => Cell::VACUUM,
        PaintAction::Place(id) => {
            let kind = grid.registry().get(id)?;
            if kind.is_vacuum() {
                Cell::VACUUM
            } else {
                Cell::of(kind, SATURATION)
            }
        }
    };

    let targets = stroke_cells(old, new, cell_size)
        .into_iter()
        .map(|(x, y)| grid.index_of(x, y))
        .collect::<Result<SmallVec<[usize; 16]>, _>>()?;
    for &i in &targets {
        grid.replace(i, fill)?;
    }
    Ok(targets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grain_core::RegistryError;
    use grain_test_utils::{positions_of, scene};
    use proptest::prelude::*;

    const CS: u32 = 16;

    // ── Pointer mapping ─────────────────────────────────────────

    #[test]
    fn pointer_maps_by_floor_division() {
        assert_eq!(pointer_to_cell(Pointer::new(0.0, 15.9), CS), (0, 0));
        assert_eq!(pointer_to_cell(Pointer::new(16.0, 33.0), CS), (1, 2));
        assert_eq!(pointer_to_cell(Pointer::new(-0.5, 8.0), CS), (-1, 0));
    }

    #[test]
    fn non_finite_pointer_maps_off_grid() {
        let c = pointer_to_cell(Pointer::new(f32::NAN, f32::INFINITY), CS);
        assert_eq!(c, (i32::MIN, i32::MIN));
    }

    // ── Stroke geometry ─────────────────────────────────────────

    #[test]
    fn stationary_pointer_touches_one_cell() {
        let p = Pointer::at_cell(3, 4, CS);
        assert_eq!(stroke_cells(p, p, CS).as_slice(), &[(3, 4)]);
    }

    #[test]
    fn vertical_stroke_runs_new_to_old() {
        let cells = stroke_cells(Pointer::at_cell(0, 0, CS), Pointer::at_cell(0, 5, CS), CS);
        let expected: Vec<(i32, i32)> = (0..=5).rev().map(|y| (0, y)).collect();
        assert_eq!(cells.to_vec(), expected);
    }

    #[test]
    fn non_finite_endpoint_yields_empty_stroke() {
        let good = Pointer::at_cell(2, 2, CS);
        for bad in [
            Pointer::new(f32::NAN, 8.0),
            Pointer::new(8.0, f32::NEG_INFINITY),
            Pointer::new(-1.0e30, 8.0),
        ] {
            assert!(stroke_cells(bad, good, CS).is_empty());
            assert!(stroke_cells(good, bad, CS).is_empty());
        }
    }

    #[test]
    fn diagonal_stroke_is_connected() {
        let cells = stroke_cells(Pointer::at_cell(0, 0, CS), Pointer::at_cell(6, 3, CS), CS);
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], (6, 3));
        assert_eq!(cells[6], (0, 0));
    }

    // ── Painting ────────────────────────────────────────────────

    #[test]
    fn paint_line_fills_every_cell_between_frames() {
        let mut g = scene(&[".", ".", ".", ".", ".", ".", "."]);
        let n = paint_stroke(
            &mut g,
            Pointer::at_cell(0, 0, CS),
            Pointer::at_cell(0, 5, CS),
            CS,
            PaintAction::Place(MaterialId::SAND),
        )
        .unwrap();
        assert_eq!(n, 6);
        let expected: Vec<(i32, i32)> = (0..=5).map(|y| (0, y)).collect();
        assert_eq!(positions_of(&g, MaterialId::SAND), expected);
        assert!(g.get(0, 6).unwrap().is_vacuum());
        assert_eq!(g.get(0, 3).unwrap().quantity, SATURATION);
    }

    #[test]
    fn erase_and_place_vacuum_both_clear() {
        for action in [PaintAction::Erase, PaintAction::Place(MaterialId::VACUUM)] {
            let mut g = scene(&["SW#"]);
            let n = paint_stroke(
                &mut g,
                Pointer::at_cell(0, 0, CS),
                Pointer::at_cell(2, 0, CS),
                CS,
                action,
            )
            .unwrap();
            assert_eq!(n, 3);
            assert_eq!(g.occupied(), 0);
        }
    }

    #[test]
    fn out_of_bounds_stroke_writes_nothing() {
        let mut g = scene(&["...", "..."]);
        let err = paint_stroke(
            &mut g,
            Pointer::at_cell(0, 0, CS),
            Pointer::at_cell(3, 0, CS),
            CS,
            PaintAction::Place(MaterialId::SAND),
        )
        .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { x: 3, y: 0, .. }));
        assert_eq!(g.occupied(), 0);
    }

    #[test]
    fn unknown_material_writes_nothing() {
        let mut g = scene(&["..."]);
        let err = paint_stroke(
            &mut g,
            Pointer::at_cell(0, 0, CS),
            Pointer::at_cell(2, 0, CS),
            CS,
            PaintAction::Place(MaterialId(42)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GridError::Material(RegistryError::UnknownMaterial { id: MaterialId(42) })
        );
        assert_eq!(g.occupied(), 0);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn strokes_are_connected_and_cover_both_ends(
            ox in -500.0f32..500.0, oy in -500.0f32..500.0,
            nx in -500.0f32..500.0, ny in -500.0f32..500.0,
            cs in 1u32..32,
        ) {
            let (old, new) = (Pointer::new(ox, oy), Pointer::new(nx, ny));
            let cells = stroke_cells(old, new, cs);
            prop_assert_eq!(cells[0], pointer_to_cell(new, cs));
            prop_assert_eq!(*cells.last().unwrap(), pointer_to_cell(old, cs));
            for w in cells.windows(2) {
                let (a, b) = (w[0], w[1]);
                prop_assert!(a != b);
                prop_assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
            }
        }
    }
}
