//! Flappy simulation model.
//!
//! The bird falls under gravity, the world scrolls pipe pairs past it from the
//! right, and any contact with a pipe or the field bounds ends the episode.

pub mod logic;
pub mod types;

pub use types::*;
