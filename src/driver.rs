//! Loop driver: lifecycle, input commands, and per-frame scheduling.
//!
//! The host calls `run_frame` only while `frame_requested()` is true. Each
//! frame must re-request the next one; nothing repeats implicitly.

use crate::game::SimulationState;
use crate::ui::Renderer;
use rand::Rng;
use std::collections::VecDeque;

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start overlay shown, waiting for the first command.
    Idle,
    /// Frames are being scheduled.
    Running,
    /// Game-over overlay shown, waiting for a restart.
    Over,
}

/// Logical input commands exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Key press or touch/press gesture.
    Jump,
    /// Start control.
    Start,
    /// Restart control.
    Restart,
}

/// What a frame invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame ran and the next one is requested.
    Continue,
    /// Frame ran and ended the episode.
    GameOver,
    /// Stale invocation after scheduling stopped; nothing happened.
    Skipped,
}

/// Owns the model and the view and wires input to them.
pub struct LoopDriver<V: Renderer> {
    sim: SimulationState,
    view: V,
    phase: Phase,
    running: bool,
    frame_requested: bool,
    commands: VecDeque<Command>,
}

impl<V: Renderer> LoopDriver<V> {
    /// Wire up model and view and show the start overlay.
    pub fn new(sim: SimulationState, mut view: V) -> Self {
        view.show_start_screen();
        Self {
            sim,
            view,
            phase: Phase::Idle,
            running: false,
            frame_requested: false,
            commands: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Record an input that arrived between frames.
    pub fn enqueue(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Apply every queued command in arrival order.
    pub fn drain_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            self.handle(command);
        }
    }

    /// Apply one command immediately.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Jump => self.on_jump(),
            Command::Start => self.start(),
            Command::Restart => self.restart(),
        }
    }

    /// Idle -> Running.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return;
        }
        log::info!("game started");
        self.view.hide_start_screen();
        self.begin_running();
    }

    /// Over -> Running with a fresh episode.
    pub fn restart(&mut self) {
        if self.phase != Phase::Over {
            log::debug!("restart ignored in {:?}", self.phase);
            return;
        }
        log::info!("game restarted");
        self.sim.reset();
        self.view.hide_game_over_screen();
        self.begin_running();
    }

    /// Jump while running; an implicit start while idle; resumes scheduling
    /// after `stop()`; ignored when over.
    pub fn on_jump(&mut self) {
        match self.phase {
            Phase::Running if self.running => self.sim.jump(),
            Phase::Running => {
                log::info!("game resumed");
                self.begin_running();
            }
            Phase::Idle => self.start(),
            _ => log::debug!("jump ignored in {:?}", self.phase),
        }
    }

    /// Cancel scheduling from outside. An already-requested frame becomes a
    /// no-op when it fires. The episode is kept; the next `Jump` resumes it.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// One scheduled frame: update, draw, then re-request or finish.
    pub fn run_frame<R: Rng>(&mut self, rng: &mut R) -> FrameOutcome {
        self.frame_requested = false;
        if !self.running {
            return FrameOutcome::Skipped;
        }

        self.sim.update(rng);
        self.view.draw(&self.sim);

        if self.sim.game_over {
            self.running = false;
            self.phase = Phase::Over;
            self.view.show_game_over_screen(self.sim.score);
            log::info!("final score {}", self.sim.score);
            FrameOutcome::GameOver
        } else {
            self.frame_requested = true;
            FrameOutcome::Continue
        }
    }

    fn begin_running(&mut self) {
        self.phase = Phase::Running;
        self.running = true;
        self.frame_requested = true;
    }
}
