use crate::domain::rules::evaluate_range;
use crate::spatial::grid::{CellState, GenerationView};

use super::partition::{partition_bounds, split_partitions};
use super::{PerfTimer, SimulationCore};

/// Run every partition against the shared current generation.
///
/// All but the last partition are spawned into a rayon scope; the last runs on
/// the calling thread. Leaving the scope is the barrier: every worker has
/// finished (or its panic has been re-raised here) before this returns.
#[cfg(feature = "parallel")]
fn run_partitions(view: GenerationView<'_>, mut parts: Vec<(usize, &mut [CellState])>) {
    let Some((last_start, last_out)) = parts.pop() else {
        return;
    };

    rayon::scope(move |scope| {
        for (start, out) in parts {
            scope.spawn(move |_| evaluate_range(view, start, out));
        }
        evaluate_range(view, last_start, last_out);
    });
}

#[cfg(not(feature = "parallel"))]
fn run_partitions(view: GenerationView<'_>, parts: Vec<(usize, &mut [CellState])>) {
    for (start, out) in parts {
        evaluate_range(view, start, out);
    }
}

pub(super) fn step(sim: &mut SimulationCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    let ranges = partition_bounds(sim.grid.size(), sim.partitions);

    // === RULE PASS ===
    // Reads only `current`, writes only `next`; each partition owns a
    // disjoint slice of `next`.
    let t0 = PerfTimer::start_if(perf_on);
    {
        let (view, next) = sim.grid.generations_mut();
        let parts = split_partitions(next, &ranges);
        run_partitions(view, parts);
    }
    if let Some(t0) = t0 {
        sim.perf_stats.evaluate_ms = t0.elapsed_ms();
    }

    // === COMMIT ===
    // Whole-buffer copy, strictly after the barrier above.
    let t1 = PerfTimer::start_if(perf_on);
    sim.grid.commit();
    if let Some(t1) = t1 {
        sim.perf_stats.commit_ms = t1.elapsed_ms();
    }

    sim.generation += 1;

    if perf_on {
        sim.perf_stats.partitions = ranges.len() as u32;
        sim.perf_stats.live_cells = sim.grid.live_count() as u32;
        sim.perf_stats.grid_size = sim.grid.size() as u32;
        sim.perf_stats.generation = sim.generation;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    log::trace!("generation {} committed", sim.generation);
}
