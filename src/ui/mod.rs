//! Presentation layer.

pub mod flappy_scene;
pub mod layout;
pub mod scene;

pub use flappy_scene::TerminalView;
pub use scene::{BirdSprite, PipeRect, Scene};

use crate::game::SimulationState;

/// View side of the game. Reads simulation state, never mutates it.
pub trait Renderer {
    /// Produce a frame that fully replaces the previous one.
    fn draw(&mut self, state: &SimulationState);

    fn show_start_screen(&mut self);

    fn hide_start_screen(&mut self);

    /// Show the game-over overlay with the score frozen at the crash.
    fn show_game_over_screen(&mut self, score: u32);

    fn hide_game_over_screen(&mut self);
}
