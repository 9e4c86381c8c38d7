use nalgebra::Vector2;
use tracing::trace;

use super::config::SimConfig;
use crate::control::{Controller, Pid};
use crate::tuning::Gains;

// ---------------------------------------------------------------------------
// Run records
// ---------------------------------------------------------------------------

/// Snapshot taken at the end of a tick, after the correction was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRecord {
    pub tick: usize,
    pub angle: f64, // rad
    pub position: f64,
    pub speed: f64,
    pub correction: f64, // controller output, before rate limiting
    pub world: Vector2<f64>, // ball center in the pivot frame
}

/// A recorded run: every tick up to and including the settle tick.
#[derive(Debug, Clone)]
pub struct Run {
    pub trajectory: Vec<TickRecord>,
    pub settled_at: Option<usize>,
}

// ---------------------------------------------------------------------------
// Simulation loop
// ---------------------------------------------------------------------------

/// Fresh swing and ball, `controller` closing the loop on ball position.
/// Calls `observe` after every tick and returns the first settled tick.
fn run_loop<F>(
    config: &SimConfig,
    controller: &mut dyn Controller,
    mut observe: F,
) -> Option<usize>
where
    F: FnMut(TickRecord),
{
    let mut swing = config.swing();
    let mut ball = config.ball();
    controller.set_target(config.target);
    let dt = controller.dt();

    for tick in 0..config.max_ticks {
        ball.step(&swing, dt);
        let correction = controller.update(ball.position);
        swing.tilt(correction);

        observe(TickRecord {
            tick,
            angle: swing.angle(),
            position: ball.position,
            speed: ball.speed(),
            correction,
            world: ball.world_position(&swing),
        });

        if ball.is_centered(config.sigma) {
            trace!(controller = controller.name(), tick, "settled");
            return Some(tick);
        }
    }

    trace!(
        controller = controller.name(),
        ticks = config.max_ticks,
        "did not settle"
    );
    None
}

/// Tick at which the ball first settles under `controller`, if it does.
pub fn settle_tick_with(config: &SimConfig, controller: &mut dyn Controller) -> Option<usize> {
    run_loop(config, controller, |_| {})
}

/// Settle tick for a fresh PID built from `gains`.
pub fn settle_tick(gains: Gains, config: &SimConfig) -> Option<usize> {
    let mut pid = Pid::new(config.pid_config(gains));
    settle_tick_with(config, &mut pid)
}

/// Same loop as [`settle_tick_with`], keeping every tick.
pub fn simulate_with(config: &SimConfig, controller: &mut dyn Controller) -> Run {
    let mut trajectory = Vec::with_capacity(config.max_ticks.min(10_000));
    let settled_at = run_loop(config, controller, |rec| trajectory.push(rec));
    Run {
        trajectory,
        settled_at,
    }
}

/// Recorded run with a fresh PID (convenience wrapper).
pub fn simulate(gains: Gains, config: &SimConfig) -> Run {
    let mut pid = Pid::new(config.pid_config(gains));
    simulate_with(config, &mut pid)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
