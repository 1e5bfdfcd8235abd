//! Scripted pilot used by the simulator.

use crate::constants::{FIELD_HEIGHT, PIPE_GAP};
use crate::game::{PipeKind, SimulationState};

/// How far below the gap centre the bird's bottom may sink before flapping.
const SINK_MARGIN: f64 = 20.0;

/// Vertical centre of the next gap ahead of (or under) the bird, or the middle
/// of the field when no pipe is ahead.
pub fn target_y(state: &SimulationState) -> f64 {
    state
        .pipes
        .iter()
        .filter(|p| p.kind() == PipeKind::Top)
        .find(|p| p.right() >= state.bird.x)
        .map(|top| top.height + PIPE_GAP / 2.0)
        .unwrap_or(FIELD_HEIGHT / 2.0)
}

/// Flap when falling and the bird's bottom has sunk past the target.
pub fn should_jump(state: &SimulationState) -> bool {
    let bird = &state.bird;
    bird.velocity >= 0.0 && bird.y + bird.height > target_y(state) + SINK_MARGIN
}
