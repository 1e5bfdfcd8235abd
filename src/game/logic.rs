//! Per-tick simulation logic: physics, spawning, collision and scoring.

use super::types::{Bird, Pipe, SimulationState};
use crate::constants::{
    FIELD_HEIGHT, PIPE_GAP, PIPE_MAX_HEIGHT, PIPE_MIN_HEIGHT, PIPE_SPAWN_X, PIPE_WIDTH,
};
use rand::Rng;

impl SimulationState {
    /// Advance the simulation by one tick. Inert once the game is over.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        if self.game_over {
            return;
        }

        // Semi-implicit Euler
        self.bird.velocity += self.gravity;
        self.bird.y += self.bird.velocity;

        // Compares the newest pipe's absolute x against the interval, not the
        // distance travelled since it spawned.
        let should_spawn = match self.pipes.last() {
            None => true,
            Some(last) => last.x < self.pipe_interval,
        };
        if should_spawn {
            self.add_pipe(rng);
        }

        for pipe in &mut self.pipes {
            pipe.x -= self.pipe_speed;
        }

        self.pipes.retain(|p| p.x > -p.width);

        if self.check_collision() {
            self.game_over = true;
            log::debug!("collision at score {}", self.score);
            return;
        }

        self.update_score();
    }

    /// Append a top/bottom pipe pair at the right edge with a random gap.
    pub fn add_pipe<R: Rng>(&mut self, rng: &mut R) {
        let height = rng.gen_range(PIPE_MIN_HEIGHT..=PIPE_MAX_HEIGHT) as f64;

        self.pipes.push(Pipe {
            x: PIPE_SPAWN_X,
            y: 0.0,
            width: PIPE_WIDTH,
            height,
            passed: false,
        });
        self.pipes.push(Pipe {
            x: PIPE_SPAWN_X,
            y: height + PIPE_GAP,
            width: PIPE_WIDTH,
            height: FIELD_HEIGHT - height - PIPE_GAP,
            passed: false,
        });

        log::debug!("spawned pipe pair with top height {}", height);
    }

    /// True if the bird is out of bounds or overlaps any pipe.
    pub fn check_collision(&self) -> bool {
        let bird = &self.bird;
        if bird.y < 0.0 || bird.y + bird.height > FIELD_HEIGHT {
            return true;
        }

        self.pipes.iter().any(|pipe| overlaps(bird, pipe))
    }

    /// Score every pipe whose right edge is now strictly left of the bird.
    ///
    /// Each pipe scores on its own, so a top/bottom pair is worth 2.
    pub fn update_score(&mut self) {
        let bird_x = self.bird.x;
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.right() < bird_x {
                pipe.passed = true;
                self.score += 1;
            }
        }
    }

    /// Reset velocity to the jump strength. No-op once the game is over.
    pub fn jump(&mut self) {
        if !self.game_over {
            self.bird.velocity = self.jump_strength;
        }
    }

    /// Start a new episode in place. Tunables are kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.bird = Bird::new();
        self.pipes.clear();
        self.game_over = false;
    }
}

/// Strict axis-aligned overlap; touching edges do not collide.
fn overlaps(bird: &Bird, pipe: &Pipe) -> bool {
    bird.x < pipe.x + pipe.width
        && bird.x + bird.width > pipe.x
        && bird.y < pipe.y + pipe.height
        && bird.y + bird.height > pipe.y
}
