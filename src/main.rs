use tracing_subscriber::EnvFilter;

use swing_tune::{BestTracker, SimConfig, Sweep, SweepConfig, TuneResult};

fn main() -> TuneResult<()> {
    // Diagnostics go to stderr; stdout carries only the improving bests.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let sweep = Sweep::new(SweepConfig::default(), SimConfig::default())?;
    let mut tracker = BestTracker::new();

    // -----------------------------------------------------------------------
    // Sweep k_p, printing every improvement as it is found:
    //   ticks, k_p, k_i, k_d
    // -----------------------------------------------------------------------
    sweep.run(&mut tracker, |best| println!("{best}"));

    Ok(())
}
