pub mod config;
pub mod runner;

pub use config::SimConfig;
pub use runner::{settle_tick, settle_tick_with, simulate, simulate_with, Run, TickRecord};
