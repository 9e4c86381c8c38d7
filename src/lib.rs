pub mod physics;
pub mod control;
pub mod sim;
pub mod tuning;
pub mod io;
pub mod error;

pub use error::{TuneError, TuneResult};
pub use tuning::{BestResult, BestTracker, Gains, Sweep, SweepConfig};
pub use sim::SimConfig;
