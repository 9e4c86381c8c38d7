pub mod gains;
pub mod bracket;
pub mod best;
pub mod config;
pub mod sweep;

pub use gains::Gains;
pub use bracket::{find_d_max, find_d_min, BISECTION_STEPS};
pub use best::{BestResult, BestTracker};
pub use config::{RefineStep, SweepConfig};
pub use sweep::{faster, StepOutcome, Sweep, REFINE_STEPS};
