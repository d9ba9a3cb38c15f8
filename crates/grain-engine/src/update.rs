//! The update pass: per-phase movement rules.
//!
//! Scans the grid row-major (top row first, left to right) and, for every
//! occupied mobile cell, tries its phase's rules in priority order. The
//! first rule with an eligible destination records one [`Proposal`];
//! later rules are not attempted for that cell this tick.
//!
//! | Phase | 1 | 2 | 3 |
//! |-------|---|---|---|
//! | Liquid, Gas | down, `Flood` | down-left / down-right, `Flood` | left / right, `TrueFlood` |
//! | SolidPowder | down, `Swap` | down-left / down-right, `Swap` | - |
//! | SolidStatic | - | - | - |
//!
//! When both destinations of a pair are eligible, the lighter one wins;
//! a fair coin decides only on exactly equal mass.
//!
//! The pass reads through [`CellAccess`] and never mutates the grid, so
//! scan order cannot leak into the outcome.

use crate::proposal::{Proposal, ProposalBuffer, TransferMode};
use crate::rules::is_moveable_to;
use crate::SimRng;
use grain_core::{CellAccess, Phase};
use rand::Rng;

/// Where a rule looks, as `(dx, dy)` offsets with `+y` pointing down.
#[derive(Clone, Copy, Debug)]
enum Reach {
    /// A single destination.
    Direct((i32, i32)),
    /// Two destinations; the lighter eligible one is taken.
    Either((i32, i32), (i32, i32)),
}

const DOWN: Reach = Reach::Direct((0, 1));
const DOWN_SIDEWAYS: Reach = Reach::Either((-1, 1), (1, 1));
const SIDEWAYS: Reach = Reach::Either((-1, 0), (1, 0));

const FLUID_RULES: [(Reach, TransferMode); 3] = [
    (DOWN, TransferMode::Flood),
    (DOWN_SIDEWAYS, TransferMode::Flood),
    (SIDEWAYS, TransferMode::TrueFlood),
];

const POWDER_RULES: [(Reach, TransferMode); 2] = [
    (DOWN, TransferMode::Swap),
    (DOWN_SIDEWAYS, TransferMode::Swap),
];

fn rules_for(phase: Phase) -> &'static [(Reach, TransferMode)] {
    match phase {
        Phase::Liquid | Phase::Gas => &FLUID_RULES,
        Phase::SolidPowder => &POWDER_RULES,
        Phase::SolidStatic => &[],
    }
}

/// Run the update pass over `view`, appending proposals to `buffer`.
///
/// Returns the number of proposals recorded. `rng` is only drawn from on
/// an exact mass tie between two eligible destinations.
pub fn propose_moves<G>(view: &G, rng: &mut SimRng, buffer: &mut ProposalBuffer) -> usize
where
    G: CellAccess + ?Sized,
{
    let before = buffer.len();
    for y in 0..view.height() as i32 {
        for x in 0..view.width() as i32 {
            if let Some(proposal) = propose_cell(view, rng, x, y) {
                buffer.push(proposal);
            }
        }
    }
    buffer.len() - before
}

/// The winning proposal for the cell at `(x, y)`, if any rule applies.
pub fn propose_cell<G>(view: &G, rng: &mut SimRng, x: i32, y: i32) -> Option<Proposal>
where
    G: CellAccess + ?Sized,
{
    let src = view.checked_index(x, y)?;
    let cell = view.cell(src)?;
    if !cell.is_mobile() {
        return None;
    }
    rules_for(cell.phase).iter().find_map(|&(reach, mode)| {
        pick_destination(view, rng, x, y, src, reach, mode).map(|dst| Proposal::new(src, dst, mode))
    })
}

fn pick_destination<G>(
    view: &G,
    rng: &mut SimRng,
    x: i32,
    y: i32,
    src: usize,
    reach: Reach,
    mode: TransferMode,
) -> Option<usize>
where
    G: CellAccess + ?Sized,
{
    let eligible = |(dx, dy): (i32, i32)| {
        view.checked_index(x + dx, y + dy)
            .filter(|&dst| is_moveable_to(view, src, dst, mode))
    };
    match reach {
        Reach::Direct(offset) => eligible(offset),
        Reach::Either(first, second) => match (eligible(first), eligible(second)) {
            (Some(a), Some(b)) => {
                let (ma, mb) = (view.mass_at(a), view.mass_at(b));
                if ma < mb {
                    Some(a)
                } else if ma > mb {
                    Some(b)
                } else if rng.random_bool(0.5) {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            (a, b) => a.or(b),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grain_test_utils::scene;
    use rand::SeedableRng;

    fn rng() -> SimRng {
        SimRng::seed_from_u64(7)
    }

    fn proposals(rows: &[&str]) -> Vec<Proposal> {
        let g = scene(rows);
        let mut buf = ProposalBuffer::new();
        propose_moves(&g, &mut rng(), &mut buf);
        buf.as_slice().to_vec()
    }

    #[test]
    fn powder_falls_straight_down_with_swap() {
        let p = proposals(&[".S.", "...", "..."]);
        assert_eq!(p, vec![Proposal::new(1, 4, TransferMode::Swap)]);
    }

    #[test]
    fn powder_on_floor_proposes_nothing() {
        assert!(proposals(&["...", ".S."]).is_empty());
    }

    #[test]
    fn powder_on_stone_slides_diagonally() {
        // Left diagonal is stone, so only the right one is eligible.
        let p = proposals(&[".S.", "##."]);
        assert_eq!(p, vec![Proposal::new(1, 5, TransferMode::Swap)]);
    }

    #[test]
    fn powder_boxed_in_proposes_nothing() {
        assert!(proposals(&[".S.", "###"]).is_empty());
        assert!(proposals(&["S", "#"]).is_empty());
    }

    #[test]
    fn powder_never_moves_sideways() {
        // Sand resting on sand at the floor, vacuum on both sides.
        assert!(proposals(&["...", "SSS"]).is_empty());
        assert!(proposals(&[".S.", "SSS"]).is_empty());
    }

    #[test]
    fn powder_sinks_through_water() {
        let p = proposals(&["S", "W"]);
        assert_eq!(p, vec![Proposal::new(0, 1, TransferMode::Swap)]);
    }

    #[test]
    fn fluid_prefers_down_then_diagonal_then_sideways() {
        assert_eq!(
            proposals(&[".W.", "..."])[0],
            Proposal::new(1, 4, TransferMode::Flood)
        );
        assert_eq!(
            proposals(&[".W.", "#S."])[0],
            Proposal::new(1, 5, TransferMode::Flood)
        );
        assert_eq!(
            proposals(&[".W#", "#S#"])[0],
            Proposal::new(1, 0, TransferMode::TrueFlood)
        );
    }

    #[test]
    fn fluid_floods_partial_cell_of_same_material() {
        let p = proposals(&["W", "w"]);
        assert_eq!(p, vec![Proposal::new(0, 1, TransferMode::Flood)]);
    }

    #[test]
    fn fluid_does_not_flood_into_other_material() {
        // Water over sand, walled in: nowhere to go.
        assert!(proposals(&["#W#", "#S#"]).is_empty());
    }

    #[test]
    fn lighter_destination_wins_pair() {
        // Full water between half water (mass 8) and vacuum (mass 0).
        let p = proposals(&["wW.", "###"]);
        assert!(p.contains(&Proposal::new(1, 2, TransferMode::TrueFlood)));
    }

    #[test]
    fn equal_mass_pair_is_a_coin_flip() {
        let g = scene(&[".W.", "###"]);
        let mut r = rng();
        let (mut left, mut right) = (0, 0);
        for _ in 0..400 {
            match propose_cell(&g, &mut r, 1, 0) {
                Some(p) if p.dst == 0 => left += 1,
                Some(p) if p.dst == 2 => right += 1,
                other => panic!("unexpected proposal {other:?}"),
            }
        }
        assert!(left > 120 && right > 120, "left={left} right={right}");
    }

    #[test]
    fn static_solid_never_proposes() {
        assert!(proposals(&["#", "."]).is_empty());
    }

    #[test]
    fn one_proposal_per_cell() {
        let p = proposals(&["SWSW", "....", "...."]);
        let mut sources: Vec<usize> = p.iter().map(|p| p.src).collect();
        sources.sort_unstable();
        sources.dedup();
        assert_eq!(sources.len(), p.len());
        assert_eq!(p.len(), 4);
    }
}
