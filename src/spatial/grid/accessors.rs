use rand::Rng;

use super::*;

/// Probability that `fill_random` makes a cell alive.
pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.3;

impl Grid {
    /// Kill every cell in both generations.
    pub fn clear(&mut self) {
        self.current.fill(DEAD);
        self.next.fill(DEAD);
    }

    /// Force a cell in both generations so `next` stays a copy of `current`.
    /// Caller guarantees `idx < size`.
    #[inline]
    pub fn set_cell(&mut self, idx: usize, state: CellState) {
        self.current[idx] = state;
        self.next[idx] = state;
    }

    #[inline]
    pub fn get_cell(&self, idx: usize) -> CellState {
        self.current[idx]
    }

    #[inline]
    pub fn is_alive(&self, idx: usize) -> bool {
        self.current[idx] > DEAD
    }

    /// Each cell independently alive (age 1) with probability 0.3, else dead.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for (cur, next) in self.current.iter_mut().zip(self.next.iter_mut()) {
            let state = if rng.gen_bool(RANDOM_ALIVE_PROBABILITY) { 1 } else { DEAD };
            *cur = state;
            *next = state;
        }
    }

    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|&&c| c > DEAD).count()
    }
}
