//! Transition rule - aging variant of Conway's Life
//!
//! - Birth: a dead cell with exactly 3 live neighbours becomes age 1.
//! - Death: a live cell with fewer than 2 or more than 3 live neighbours dies.
//! - Aging: a surviving cell gains one age per generation up to `MAX_AGE`.
//!
//! Neighbour liveness is boolean; age never changes the counts. The rule only
//! reports explicit assignments: `None` means "keep whatever `next` already
//! holds", which is the pre-seeded copy of the current state.

use crate::spatial::grid::{CellState, GenerationView, DEAD};

/// Age at which a surviving cell stops aging.
pub const MAX_AGE: CellState = 3;

pub const BIRTH_NEIGHBOURS: u8 = 3;
pub const MIN_SURVIVAL_NEIGHBOURS: u8 = 2;
pub const MAX_SURVIVAL_NEIGHBOURS: u8 = 3;

#[inline(always)]
pub fn next_state(current: CellState, live_neighbours: u8) -> Option<CellState> {
    if current == DEAD {
        return (live_neighbours == BIRTH_NEIGHBOURS).then_some(1);
    }

    if live_neighbours < MIN_SURVIVAL_NEIGHBOURS || live_neighbours > MAX_SURVIVAL_NEIGHBOURS {
        Some(DEAD)
    } else if current < MAX_AGE {
        Some(current + 1)
    } else {
        None
    }
}

/// Live cells among the eight toroidal neighbours of (column, row).
#[inline(always)]
pub fn live_neighbours(view: &GenerationView<'_>, column: isize, row: isize) -> u8 {
    view.live_at(column - 1, row - 1)
        + view.live_at(column, row - 1)
        + view.live_at(column + 1, row - 1)
        + view.live_at(column - 1, row)
        + view.live_at(column + 1, row)
        + view.live_at(column - 1, row + 1)
        + view.live_at(column, row + 1)
        + view.live_at(column + 1, row + 1)
}

/// Evaluate the rule for one flat index against the current generation.
#[inline]
pub fn evaluate_cell(view: &GenerationView<'_>, idx: usize) -> Option<CellState> {
    let column = (idx % view.columns()) as isize;
    let row = (idx / view.columns()) as isize;
    next_state(view.state(idx), live_neighbours(view, column, row))
}

/// Apply the rule to `out`, the slice of `next` covering indices
/// `start..start + out.len()`.
pub fn evaluate_range(view: GenerationView<'_>, start: usize, out: &mut [CellState]) {
    for (offset, slot) in out.iter_mut().enumerate() {
        if let Some(state) = evaluate_cell(&view, start + offset) {
            *slot = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::GridConfig;
    use crate::spatial::grid::Grid;

    #[test]
    fn birth_needs_exactly_three() {
        assert_eq!(next_state(DEAD, 3), Some(1));
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(DEAD, n), None, "n = {n}");
        }
    }

    #[test]
    fn survivors_age_until_cap() {
        for n in [2, 3] {
            assert_eq!(next_state(1, n), Some(2));
            assert_eq!(next_state(2, n), Some(3));
            assert_eq!(next_state(MAX_AGE, n), None);
        }
    }

    #[test]
    fn isolation_and_overcrowding_kill_any_age() {
        for age in 1..=MAX_AGE {
            for n in [0, 1, 4, 5, 6, 7, 8] {
                assert_eq!(next_state(age, n), Some(DEAD), "age = {age}, n = {n}");
            }
        }
    }

    #[test]
    fn neighbour_count_ignores_age_and_self() {
        let mut grid = Grid::new(&GridConfig::new(3, 3, 1.0, 0.0, 0.0)).unwrap();
        grid.current[0] = 3;
        grid.current[1] = 1;
        grid.current[4] = 2;
        // on a 3x3 torus every other cell is a neighbour of the centre
        assert_eq!(live_neighbours(&grid.view(), 1, 1), 2);
    }

    #[test]
    fn neighbour_count_wraps_corners() {
        let mut grid = Grid::new(&GridConfig::new(5, 5, 1.0, 0.0, 0.0)).unwrap();
        for idx in [24, 20, 4] {
            grid.current[idx] = 1;
        }
        assert_eq!(live_neighbours(&grid.view(), 0, 0), 3);
        assert_eq!(evaluate_cell(&grid.view(), 0), Some(1));
    }

    #[test]
    fn evaluate_range_leaves_unassigned_slots() {
        let mut grid = Grid::new(&GridConfig::new(4, 4, 1.0, 0.0, 0.0)).unwrap();
        grid.current[5] = MAX_AGE;
        grid.current[6] = 1;
        grid.current[9] = 1;
        grid.current[10] = 1;
        let mut out = vec![7u8; 16];
        evaluate_range(grid.view(), 0, &mut out);
        // block: capped survivor untouched, young survivors age
        assert_eq!(out[5], 7);
        assert_eq!(out[6], 2);
        assert_eq!(out[0], 7);
    }
}
