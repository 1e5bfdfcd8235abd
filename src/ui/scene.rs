//! Immediate-mode frame snapshot built from the simulation.
//!
//! A `Scene` is rebuilt from scratch every frame, so nothing drawn in frame N
//! survives into frame N+1.

use crate::constants::ROTATION_DEGREES_PER_VELOCITY;
use crate::game::{PipeKind, SimulationState};

/// Bird as drawn: logical rectangle plus a cosmetic tilt.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdSprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise tilt in degrees (positive = nose down).
    pub rotation_deg: f64,
}

impl BirdSprite {
    /// Terminal glyph approximating the tilt.
    pub fn glyph(&self) -> &'static str {
        if self.rotation_deg <= -10.0 {
            "▲"
        } else if self.rotation_deg >= 10.0 {
            "▼"
        } else {
            "►"
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One pipe rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: PipeKind,
}

impl PipeRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub bird: BirdSprite,
    pub pipes: Vec<PipeRect>,
    pub score: u32,
}

impl Scene {
    pub fn from_state(state: &SimulationState) -> Self {
        let bird = &state.bird;
        Self {
            bird: BirdSprite {
                x: bird.x,
                y: bird.y,
                width: bird.width,
                height: bird.height,
                rotation_deg: bird.velocity * ROTATION_DEGREES_PER_VELOCITY,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeRect {
                    x: p.x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                    kind: p.kind(),
                })
                .collect(),
            score: state.score,
        }
    }
}
