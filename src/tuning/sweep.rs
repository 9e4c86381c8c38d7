use rayon::prelude::*;
use tracing::{debug, info};

use super::bracket::{find_d_max, find_d_min};
use super::best::{BestResult, BestTracker};
use super::config::SweepConfig;
use super::Gains;
use crate::error::TuneResult;
use crate::sim::{settle_tick, SimConfig};

/// Refinement passes per `k_p` grid point.
pub const REFINE_STEPS: usize = 10;

/// `a` settled strictly sooner than `b`; not settling is slower than any settle.
///
/// This differs from a bare `<` on the optional counts: a settled `d_min`
/// against an unsettled `d_max` counts as faster, so `d_max` is the bound moved.
pub fn faster(a: Option<usize>, b: Option<usize>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// What one `k_p` grid point produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub kp: f64,
    /// Initial bracket from the two bisection searches.
    pub bracket: (f64, f64),
    /// Every settling refinement candidate, in evaluation order.
    pub candidates: Vec<BestResult>,
}

impl StepOutcome {
    /// Earliest candidate with the lowest tick count.
    pub fn fastest(&self) -> Option<BestResult> {
        self.candidates
            .iter()
            .copied()
            .reduce(|best, c| if c.ticks < best.ticks { c } else { best })
    }
}

// ---------------------------------------------------------------------------
// Gain sweep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
    sim: SimConfig,
}

impl Sweep {
    pub fn new(config: SweepConfig, sim: SimConfig) -> TuneResult<Self> {
        config.validate()?;
        sim.validate()?;
        Ok(Self { config, sim })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn sim(&self) -> &SimConfig {
        &self.sim
    }

    /// Bracket `k_d` for one `k_p`, then narrow the bracket while collecting
    /// every settling candidate.
    pub fn step(&self, kp: f64) -> StepOutcome {
        let ki = self.config.ki;
        let (lo, hi) = self.config.d_min_bracket;
        let mut d_min = find_d_min(kp, ki, lo, hi, &self.sim);
        let (lo, hi) = self.config.d_max_bracket;
        let mut d_max = find_d_max(kp, ki, lo, hi, &self.sim);
        let bracket = (d_min, d_max);

        let mut candidates = Vec::new();
        for _ in 0..REFINE_STEPS {
            let kd = self.config.refine_step.next_kd(d_min, d_max);
            let at_min = settle_tick(Gains::new(kp, ki, d_min), &self.sim);
            let at_max = settle_tick(Gains::new(kp, ki, d_max), &self.sim);
            if faster(at_min, at_max) {
                d_max = kd;
            } else {
                d_min = kd;
            }

            let gains = Gains::new(kp, ki, kd);
            if let Some(ticks) = settle_tick(gains, &self.sim) {
                candidates.push(BestResult { ticks, gains });
            }
        }

        debug!(
            kp,
            d_min = bracket.0,
            d_max = bracket.1,
            settled = candidates.len(),
            "k_p step done"
        );
        StepOutcome {
            kp,
            bracket,
            candidates,
        }
    }

    /// Sequential sweep. `report` sees every improvement as soon as it is found.
    pub fn run<F>(&self, tracker: &mut BestTracker, mut report: F)
    where
        F: FnMut(&BestResult),
    {
        let n = self.config.grid_len();
        info!(
            points = n,
            kp_start = self.config.kp_start,
            kp_end = self.config.kp_end,
            ki = self.config.ki,
            "Starting gain sweep"
        );

        for i in 0..n {
            let outcome = self.step(self.config.kp_at(i));
            for candidate in outcome.candidates {
                if let Some(best) = tracker.offer(candidate) {
                    info!(
                        ticks = best.ticks,
                        kp = best.gains.kp,
                        kd = best.gains.kd,
                        "New best"
                    );
                    report(&best);
                }
            }
        }

        info!(best = ?tracker.best(), "Gain sweep finished");
    }

    /// Parallel sweep over the `k_p` grid. Per-point results are reduced after
    /// the fact; ties go to the earliest grid point, as in [`Sweep::run`].
    pub fn run_parallel(&self) -> Option<BestResult> {
        let n = self.config.grid_len();
        info!(
            points = n,
            threads = rayon::current_num_threads(),
            "Starting parallel gain sweep"
        );

        let best = (0..n)
            .into_par_iter()
            .filter_map(|i| {
                self.step(self.config.kp_at(i))
                    .fastest()
                    .map(|b| (i, b))
            })
            .min_by(|a, b| a.1.ticks.cmp(&b.1.ticks).then(a.0.cmp(&b.0)))
            .map(|(_, b)| b);

        info!(best = ?best, "Parallel gain sweep finished");
        best
    }
}
