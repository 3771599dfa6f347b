use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn offsets(&self) -> (f32, f32) { (self.column_offset, self.row_offset) }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((idx % columns) as u32, (idx / columns) as u32)
    }

    /// Flat index of (x, y) after wrapping both axes onto the torus.
    #[inline]
    pub fn wrapped_index(&self, x: i64, y: i64) -> usize {
        let column = x.rem_euclid(self.columns as i64) as usize;
        let row = y.rem_euclid(self.rows as i64) as usize;
        row * self.columns as usize + column
    }

    /// 1 if the current-generation cell at wrapped (x, y) is alive, else 0.
    #[inline]
    pub fn live_at(&self, x: i64, y: i64) -> u8 {
        (self.current[self.wrapped_index(x, y)] > DEAD) as u8
    }

    /// Read-only view of the current generation.
    #[inline]
    pub fn view(&self) -> GenerationView<'_> {
        GenerationView {
            cells: &self.current,
            columns: self.columns as usize,
            rows: self.rows as usize,
        }
    }

    /// Split borrows for a step: current is shared, next is exclusive.
    #[inline]
    pub fn generations_mut(&mut self) -> (GenerationView<'_>, &mut [CellState]) {
        (
            GenerationView {
                cells: &self.current,
                columns: self.columns as usize,
                rows: self.rows as usize,
            },
            &mut self.next,
        )
    }
}

/// Shared read access to one generation; `Copy` so every worker gets its own.
#[derive(Clone, Copy)]
pub struct GenerationView<'a> {
    cells: &'a [CellState],
    columns: usize,
    rows: usize,
}

impl<'a> GenerationView<'a> {
    #[inline]
    pub fn columns(&self) -> usize { self.columns }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline(always)]
    pub fn state(&self, idx: usize) -> CellState {
        self.cells[idx]
    }

    /// Toroidal liveness probe. Any offset wraps, not just a single step past
    /// an edge.
    #[inline(always)]
    pub fn live_at(&self, x: isize, y: isize) -> u8 {
        let column = x.rem_euclid(self.columns as isize) as usize;
        let row = y.rem_euclid(self.rows as isize) as usize;
        (self.cells[row * self.columns + column] > DEAD) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(columns: u32, rows: u32, live: &[usize]) -> Grid {
        let mut grid = Grid::new(&GridConfig::new(columns, rows, 1.0, 0.0, 0.0)).unwrap();
        for &idx in live {
            grid.current[idx] = 1;
            grid.next[idx] = 1;
        }
        grid
    }

    #[test]
    fn index_and_coords_are_row_major() {
        let grid = grid_with(5, 3, &[]);
        assert_eq!(grid.index(4, 2), 14);
        assert_eq!(grid.coords(14), (4, 2));
        assert_eq!(grid.coords(5), (0, 1));
    }

    #[test]
    fn live_at_wraps_both_axes() {
        // column 4 of row 0 and column 0 of row 2
        let grid = grid_with(5, 3, &[4, 10]);
        assert_eq!(grid.live_at(-1, 0), 1);
        assert_eq!(grid.live_at(4, 0), 1);
        assert_eq!(grid.live_at(5, 2), 1);
        assert_eq!(grid.live_at(0, -1), 1);
        assert_eq!(grid.live_at(0, 0), 0);
    }

    #[test]
    fn live_at_wraps_large_offsets() {
        let grid = grid_with(5, 3, &[0]);
        assert_eq!(grid.live_at(-10, 6), 1);
        assert_eq!(grid.live_at(15, -9), 1);
    }

    #[test]
    fn live_at_treats_any_age_as_alive() {
        let mut grid = grid_with(3, 3, &[]);
        grid.current[4] = 3;
        assert_eq!(grid.live_at(1, 1), 1);
    }

    #[test]
    fn wrapped_index_matches_live_at() {
        let grid = grid_with(4, 4, &[]);
        assert_eq!(grid.wrapped_index(-1, -1), 15);
        assert_eq!(grid.wrapped_index(4, 4), 0);
    }

    #[test]
    fn generation_view_reads_states_and_wraps() {
        let mut grid = grid_with(4, 3, &[11]);
        grid.current[11] = 2;
        let view = grid.view();
        assert_eq!(view.state(11), 2);
        assert_eq!(view.live_at(-1, -1), 1);
        assert_eq!(view.live_at(7, 5), 1);
        assert_eq!(view.live_at(0, 0), 0);
    }

    #[test]
    #[should_panic]
    fn generation_view_state_is_bounds_checked() {
        let grid = grid_with(2, 2, &[]);
        let _ = grid.view().state(4);
    }
}
