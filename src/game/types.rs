//! Simulation data structures.

use crate::config::Tunables;
use crate::constants::{BIRD_HEIGHT, BIRD_START_X, BIRD_START_Y, BIRD_WIDTH};

/// The player-controlled bird. Its x never changes; the world scrolls instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Top edge. Row 0 = ceiling, positive = downward.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// Bird at its starting pose.
    pub fn new() -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            velocity: 0.0,
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Which half of a pipe pair a pipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    /// Anchored to the ceiling.
    Top,
    /// Anchored below the gap.
    Bottom,
}

/// A single rectangular obstacle. Pipes always spawn in top/bottom pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top edge, fixed at creation.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Set once when the bird has fully passed this pipe.
    pub passed: bool,
}

impl Pipe {
    pub fn kind(&self) -> PipeKind {
        if self.y == 0.0 {
            PipeKind::Top
        } else {
            PipeKind::Bottom
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Whole-episode simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub score: u32,
    pub bird: Bird,
    /// Insertion order = spawn order.
    pub pipes: Vec<Pipe>,
    /// Once true, stays true until `reset()`.
    pub game_over: bool,

    // Cached difficulty parameters
    pub gravity: f64,
    pub jump_strength: f64,
    pub pipe_speed: f64,
    pub pipe_interval: f64,
}

impl SimulationState {
    /// Fresh state with the standard tunables.
    pub fn new() -> Self {
        Self::with_tunables(Tunables::default())
    }

    pub fn with_tunables(tunables: Tunables) -> Self {
        Self {
            score: 0,
            bird: Bird::new(),
            pipes: Vec::new(),
            game_over: false,
            gravity: tunables.gravity,
            jump_strength: tunables.jump_strength,
            pipe_speed: tunables.pipe_speed,
            pipe_interval: tunables.pipe_interval,
        }
    }

    /// Overwrite the tunables in place (one-time host override).
    pub fn apply_tunables(&mut self, tunables: Tunables) {
        self.gravity = tunables.gravity;
        self.jump_strength = tunables.jump_strength;
        self.pipe_speed = tunables.pipe_speed;
        self.pipe_interval = tunables.pipe_interval;
    }

    pub fn tunables(&self) -> Tunables {
        Tunables {
            gravity: self.gravity,
            jump_strength: self.jump_strength,
            pipe_speed: self.pipe_speed,
            pipe_interval: self.pipe_interval,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
