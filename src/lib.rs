//! Flappy - terminal Flappy Bird library.
//!
//! Model (`game`), view (`ui`) and controller (`driver`) are plain owned
//! values wired together by the host, so several games can coexist and tests
//! can drive them deterministically.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use config::{Difficulty, Tunables};
pub use constants::*;
pub use driver::{Command, FrameOutcome, LoopDriver, Phase};
pub use error::AppError;
pub use game::{Bird, Pipe, PipeKind, SimulationState};
pub use ui::{Renderer, TerminalView};
