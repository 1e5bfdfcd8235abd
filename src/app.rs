//! Terminal host: owns the terminal, the frame clock and the input pump.

use crate::config::Difficulty;
use crate::constants::FRAME_INTERVAL_MS;
use crate::driver::LoopDriver;
use crate::error::AppError;
use crate::game::SimulationState;
use crate::input::{map_event, InputAction};
use crate::ui::TerminalView;
use crossterm::cursor::Show;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

/// Build a driver for the given difficulty, with the tunables applied once.
pub fn build_driver(difficulty: Difficulty) -> LoopDriver<TerminalView> {
    let tunables = difficulty.tunables();
    let mut sim = SimulationState::new();
    sim.apply_tunables(tunables);
    LoopDriver::new(sim, TerminalView::new(difficulty.name(), tunables))
}

/// Run the game until the player quits. The terminal is restored on every
/// exit path, and a failure inside the loop wins over a failed teardown.
pub fn run(difficulty: Difficulty) -> Result<(), AppError> {
    let session = TerminalSession::enter()?;

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(AppError::from)
        .and_then(|mut terminal| {
            terminal.hide_cursor()?;
            run_loop(&mut terminal, build_driver(difficulty))
        });

    settle(result, session.restore())
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// game. Dropping without `restore` still tears everything down.
struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self, AppError> {
        enable_raw_mode()?;
        // From here on, a failed step is undone by Drop
        let session = Self { restored: false };
        io::stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        Ok(session)
    }

    fn restore(mut self) -> Result<(), AppError> {
        self.restored = true;
        restore_terminal().map_err(AppError::from)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = restore_terminal() {
                log::warn!("terminal restore failed: {}", e);
            }
        }
    }
}

/// Run every teardown step, then report the first failure.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_failure([
        disable_raw_mode(),
        stdout.execute(DisableMouseCapture).map(drop),
        stdout.execute(LeaveAlternateScreen).map(drop),
        stdout.execute(Show).map(drop),
    ])
}

fn first_failure<I>(steps: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// Outcome of a session: the loop's error if any, else the teardown's.
fn settle(result: Result<(), AppError>, restored: Result<(), AppError>) -> Result<(), AppError> {
    if let Err(e) = &restored {
        if result.is_err() {
            log::warn!("terminal restore failed: {}", e);
        }
    }
    result.and(restored)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut driver: LoopDriver<TerminalView>,
) -> Result<(), AppError> {
    let mut rng = rand::thread_rng();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut next_frame = Instant::now() + frame_interval;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            driver.view().render(frame, area);
        })?;

        // Input may arrive anywhere between frames; it is only queued here.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            loop {
                match map_event(&event::read()?, driver.phase()) {
                    InputAction::Quit => {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    InputAction::Command(command) => driver.enqueue(command),
                    InputAction::Ignore => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        driver.drain_commands();

        let now = Instant::now();
        if now >= next_frame {
            if driver.frame_requested() {
                driver.run_frame(&mut rng);
            }
            next_frame = now + frame_interval;
        }
    }
}
