//! Simulation runner driving `SimulationState` with the scripted pilot.

use super::config::SimConfig;
use super::pilot::should_jump;
use super::report::{RunStats, SimReport};
use crate::config::Tunables;
use crate::game::SimulationState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured episode and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let tunables = config.difficulty.tunables();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(tunables, config.max_frames_per_run, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Frames {}{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.frames,
                if stats.crashed { "" } else { " (timed out)" }
            );
        }
        all_runs.push(stats);
    }

    let report = SimReport::from_runs(all_runs, tunables);
    if config.verbosity >= 1 {
        println!("{}", report.summary_line());
    }
    report
}

/// Play one episode until the crash or the frame limit.
pub fn simulate_single_run<R: Rng>(tunables: Tunables, max_frames: u64, rng: &mut R) -> RunStats {
    let mut state = SimulationState::with_tunables(tunables);
    let mut frames = 0;

    while !state.game_over && frames < max_frames {
        if should_jump(&state) {
            state.jump();
        }
        state.update(rng);
        frames += 1;
    }

    RunStats {
        score: state.score,
        frames,
        crashed: state.game_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;

    #[test]
    fn test_single_run_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(Difficulty::Standard.tunables(), 2_000, &mut rng);
        assert!(stats.frames > 0);
        assert!(stats.frames <= 2_000);
        assert!(stats.crashed || stats.frames == 2_000);
    }

    #[test]
    fn test_scores_are_even() {
        // Both halves of a pair share x, so they always score together
        let config = SimConfig::quick(5);
        let report = run_simulation(&config);
        assert!(report.runs.iter().all(|r| r.score % 2 == 0));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig::quick(99);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.runs, b.runs);
    }

    #[test]
    fn test_frame_limit_times_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(Difficulty::Standard.tunables(), 1, &mut rng);
        assert_eq!(stats.frames, 1);
        assert!(!stats.crashed);
    }

    #[test]
    fn test_report_echoes_tunables() {
        let config = SimConfig {
            difficulty: Difficulty::Easy,
            ..SimConfig::quick(2)
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 10);
        assert_eq!(report.tunables, Difficulty::Easy.tunables());
    }
}
