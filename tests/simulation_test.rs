//! Integration test: simulation physics, spawning, collision and scoring
//!
//! Drives `SimulationState` through its public API with a seeded RNG.

use flappy::{
    Difficulty, Pipe, PipeKind, SimulationState, FIELD_HEIGHT, PIPE_GAP, PIPE_WIDTH,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Run ticks until the game ends or `max` ticks elapse; returns ticks run.
fn run_until_over(state: &mut SimulationState, rng: &mut ChaCha8Rng, max: u32) -> u32 {
    let mut ticks = 0;
    while !state.game_over && ticks < max {
        state.update(rng);
        ticks += 1;
    }
    ticks
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_first_tick_from_rest() {
    let mut state = SimulationState::new();
    let mut rng = seeded(1);

    state.update(&mut rng);

    assert!((state.bird.velocity - 0.3).abs() < 1e-9);
    assert!((state.bird.y - 200.3).abs() < 1e-9);
    assert_eq!(state.pipes.len(), 2, "empty pipe list must spawn a pair");
}

#[test]
fn test_velocity_grows_by_gravity_every_live_tick() {
    let mut state = SimulationState::new();
    let mut rng = seeded(2);

    for _ in 0..30 {
        let (v0, y0) = (state.bird.velocity, state.bird.y);
        state.update(&mut rng);
        if state.game_over {
            break;
        }
        assert!((state.bird.velocity - (v0 + state.gravity)).abs() < 1e-9);
        assert!((state.bird.y - (y0 + state.bird.velocity)).abs() < 1e-9);
    }
}

#[test]
fn test_jump_discards_prior_velocity() {
    for prior in [-20.0, -7.0, 0.0, 4.2, 15.0] {
        let mut state = SimulationState::new();
        state.bird.velocity = prior;
        state.jump();
        assert_eq!(state.bird.velocity, state.jump_strength);
    }
}

#[test]
fn test_bird_x_never_moves() {
    let mut state = SimulationState::new();
    let mut rng = seeded(3);
    for i in 0..200 {
        if i % 25 == 0 {
            state.jump();
        }
        state.update(&mut rng);
        assert_eq!(state.bird.x, 50.0);
    }
}

// =============================================================================
// Pipes
// =============================================================================

#[test]
fn test_every_generated_pair_fills_the_field() {
    let mut state = SimulationState::new();
    let mut rng = seeded(4);
    for _ in 0..1000 {
        state.add_pipe(&mut rng);
    }

    for pair in state.pipes.chunks(2) {
        let (top, bottom) = (&pair[0], &pair[1]);
        assert_eq!(top.kind(), PipeKind::Top);
        assert_eq!(bottom.kind(), PipeKind::Bottom);
        assert!((80.0..=280.0).contains(&top.height));
        assert_eq!(top.height + PIPE_GAP + bottom.height, FIELD_HEIGHT);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.width, PIPE_WIDTH);
    }
}

#[test]
fn test_spawned_heights_cover_the_range() {
    let mut state = SimulationState::new();
    let mut rng = seeded(5);
    for _ in 0..5000 {
        state.add_pipe(&mut rng);
    }
    let heights: Vec<f64> = state
        .pipes
        .iter()
        .filter(|p| p.kind() == PipeKind::Top)
        .map(|p| p.height)
        .collect();
    assert!(heights.iter().any(|&h| h == 80.0));
    assert!(heights.iter().any(|&h| h == 280.0));
}

#[test]
fn test_offscreen_pair_is_pruned() {
    let mut state = SimulationState::new();
    let mut rng = seeded(6);
    state.pipes.push(Pipe {
        x: -45.0,
        y: 0.0,
        width: PIPE_WIDTH,
        height: 100.0,
        passed: false,
    });
    state.pipes.push(Pipe {
        x: -45.0,
        y: 280.0,
        width: PIPE_WIDTH,
        height: 320.0,
        passed: false,
    });

    // -45 -> -46.5 -> -48 -> -49.5: still partly visible
    for _ in 0..3 {
        state.update(&mut rng);
    }
    assert_eq!(state.pipes.iter().filter(|p| p.x < 0.0).count(), 2);

    // -51 <= -50: gone, leaving only the pair spawned on the first tick
    state.update(&mut rng);
    assert!(!state.game_over);
    assert_eq!(state.pipes.len(), 2);
    assert!(state.pipes.iter().all(|p| p.x > 300.0));
}

#[test]
fn test_spawn_cadence_follows_literal_threshold() {
    let mut state = SimulationState::new();
    let mut rng = seeded(13);

    // Newest pair sits at 400 - 1.5 * ticks; the next spawns once the check
    // sees it below 200, on tick 135.
    for tick in 1..=135 {
        state.bird.y = 300.0;
        state.bird.velocity = 0.0;
        state.update(&mut rng);
        assert!(!state.game_over);
        if tick == 134 {
            assert_eq!(state.pipes.len(), 2);
        }
    }
    assert_eq!(state.pipes.len(), 4);
}

// =============================================================================
// Collision
// =============================================================================

#[test]
fn test_ceiling_breach_regardless_of_pipes() {
    let mut state = SimulationState::new();
    let mut rng = seeded(7);
    state.add_pipe(&mut rng);
    state.bird.y = -1.0;
    assert!(state.check_collision());
}

#[test]
fn test_exact_overlap_then_touching() {
    let mut state = SimulationState::new();
    state.pipes.push(Pipe {
        x: state.bird.x,
        y: state.bird.y,
        width: state.bird.width,
        height: state.bird.height,
        passed: false,
    });
    assert!(state.check_collision());

    state.pipes[0].x = state.bird.x + state.bird.width;
    assert!(!state.check_collision());
}

#[test]
fn test_falling_bird_eventually_crashes() {
    let mut state = SimulationState::new();
    let mut rng = seeded(8);
    let ticks = run_until_over(&mut state, &mut rng, 1000);
    assert!(state.game_over);
    assert!(ticks < 1000);
    assert!(state.bird.y + state.bird.height > FIELD_HEIGHT);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_pair_scores_two_on_first_crossing_only() {
    let mut state = SimulationState::new();
    let mut rng = seeded(9);
    // Gap spans 150..330; bird sits inside it
    state.pipes.push(Pipe {
        x: 10.0,
        y: 0.0,
        width: PIPE_WIDTH,
        height: 150.0,
        passed: false,
    });
    state.pipes.push(Pipe {
        x: 10.0,
        y: 330.0,
        width: PIPE_WIDTH,
        height: 270.0,
        passed: false,
    });

    let mut scores = Vec::new();
    for _ in 0..10 {
        state.bird.y = 200.0;
        state.bird.velocity = 0.0;
        state.update(&mut rng);
        scores.push(state.score);
    }

    assert!(!state.game_over);
    // Right edge 60 -> crosses below 50 on the 7th tick (60 - 7*1.5 = 49.5)
    assert_eq!(scores[5], 0);
    assert_eq!(scores[6], 2);
    assert_eq!(scores[9], 2);
}

// =============================================================================
// Game over and reset
// =============================================================================

#[test]
fn test_game_over_freezes_everything() {
    let mut state = SimulationState::new();
    let mut rng = seeded(10);
    run_until_over(&mut state, &mut rng, 1000);

    let frozen = state.clone();
    for _ in 0..50 {
        state.update(&mut rng);
        state.jump();
    }
    assert_eq!(state, frozen);
}

#[test]
fn test_reset_after_game_over_equals_fresh_state() {
    let mut state = SimulationState::new();
    let mut rng = seeded(11);
    run_until_over(&mut state, &mut rng, 1000);
    assert!(state.game_over);

    state.reset();
    assert_eq!(state, SimulationState::new());
    assert_eq!(state.bird.x, 50.0);
    assert_eq!(state.bird.y, 200.0);
    assert_eq!(state.bird.velocity, 0.0);
}

#[test]
fn test_reset_keeps_easy_tunables() {
    let mut state = SimulationState::with_tunables(Difficulty::Easy.tunables());
    let mut rng = seeded(12);
    run_until_over(&mut state, &mut rng, 5000);
    state.reset();
    assert_eq!(state, SimulationState::with_tunables(Difficulty::Easy.tunables()));
}
