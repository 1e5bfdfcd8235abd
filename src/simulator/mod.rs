//! Headless simulator for difficulty analysis.
//!
//! Plays many episodes with a scripted pilot and reports score and survival
//! statistics, using the same `SimulationState` the terminal game runs.

mod config;
mod pilot;
mod report;
mod runner;

pub use config::SimConfig;
pub use pilot::should_jump;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
