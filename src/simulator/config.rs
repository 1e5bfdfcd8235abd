//! Simulation configuration.

use crate::config::Difficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of episodes to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per episode before it counts as timed out
    pub max_frames_per_run: u64,

    /// Tunables profile to play with
    pub difficulty: Difficulty,

    /// Output verbosity (0 = report only, 1 = banner and summary line, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames_per_run: 20_000,
            difficulty: Difficulty::Standard,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded config for quick checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_frames_per_run: 5_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
