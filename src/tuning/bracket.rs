//! Derivative-gain bracketing.
//!
//! Both searches run a fixed number of bisection steps on the predicate
//! "the run settles", assuming the settling region in `k_d` is contiguous.
//! A non-contiguous region yields an arbitrary bracket, not an error.

use tracing::debug;

use crate::sim::{settle_tick, SimConfig};
use super::Gains;

/// Bisection steps per bracket search, regardless of interval width.
pub const BISECTION_STEPS: usize = 10;

fn settles(kp: f64, ki: f64, kd: f64, config: &SimConfig) -> bool {
    settle_tick(Gains::new(kp, ki, kd), config).is_some()
}

/// Smallest settling `k_d` in `[low, high]`, approached from the settling side.
///
/// Returns `low` unchanged when it already settles.
pub fn find_d_min(kp: f64, ki: f64, mut low: f64, mut high: f64, config: &SimConfig) -> f64 {
    if settles(kp, ki, low, config) {
        return low;
    }
    for _ in 0..BISECTION_STEPS {
        let mid = (low + high) / 2.0;
        if settles(kp, ki, mid, config) {
            high = mid;
        } else {
            low = mid;
        }
    }
    debug!(kp, ki, d_min = high, "bracketed lower k_d");
    high
}

/// Largest settling `k_d` in `[low, high]`, approached from the settling side.
///
/// Returns `high` unchanged when it already settles.
pub fn find_d_max(kp: f64, ki: f64, mut low: f64, mut high: f64, config: &SimConfig) -> f64 {
    if settles(kp, ki, high, config) {
        return high;
    }
    for _ in 0..BISECTION_STEPS {
        let mid = (low + high) / 2.0;
        if settles(kp, ki, mid, config) {
            low = mid;
        } else {
            high = mid;
        }
    }
    debug!(kp, ki, d_max = low, "bracketed upper k_d");
    low
}
