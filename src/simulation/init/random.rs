use rand::rngs::StdRng;
use rand::SeedableRng;

use super::SimulationCore;

/// Wall-clock milliseconds, the reseed source for `randomize_all`.
pub(super) fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

pub(super) fn randomize(sim: &mut SimulationCore, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    sim.grid.fill_random(&mut rng);
    log::debug!("randomized {} cells (seed {})", sim.grid.size(), seed);
}
