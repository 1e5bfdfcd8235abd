//! Terminal rendering of the flappy play field.

use super::layout::{render_frame_border, render_modal, render_status_lines, ScreenLayout};
use super::scene::Scene;
use super::Renderer;
use crate::config::Tunables;
use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::{PipeKind, SimulationState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renderer that keeps the latest scene and overlay flags, and paints them
/// with ratatui on demand.
#[derive(Debug, Clone)]
pub struct TerminalView {
    scene: Option<Scene>,
    score_readout: u32,
    start_visible: bool,
    game_over_visible: bool,
    final_score: u32,
    difficulty_name: &'static str,
    tunables: Tunables,
}

impl TerminalView {
    pub fn new(difficulty_name: &'static str, tunables: Tunables) -> Self {
        Self {
            scene: None,
            score_readout: 0,
            start_visible: false,
            game_over_visible: false,
            final_score: 0,
            difficulty_name,
            tunables,
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn score_readout(&self) -> u32 {
        self.score_readout
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    /// Paint the whole UI into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner = render_frame_border(frame, area, " Flappy ", Color::Cyan);
        let layout = ScreenLayout::compute(inner);

        render_play_area(frame, layout.field, self.scene.as_ref());
        self.render_status(frame, layout.status);
        self.render_info_panel(frame, layout.side);

        if self.start_visible {
            render_modal(
                frame,
                layout.field,
                Color::Yellow,
                "FLAPPY",
                &[
                    "Fly through the gaps.".to_string(),
                    "[Enter] Start  [Space] Jump".to_string(),
                ],
            );
        }
        if self.game_over_visible {
            render_modal(
                frame,
                layout.field,
                Color::Red,
                "GAME OVER",
                &[
                    format!("Final score: {}", self.final_score),
                    "[Enter] Restart  [Q] Quit".to_string(),
                ],
            );
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = [("[Space/Click]", "Jump"), ("[Enter]", "Start"), ("[Q]", "Quit")];
        let (message, color) = if self.start_visible {
            ("Press Enter to start!".to_string(), Color::Yellow)
        } else if self.game_over_visible {
            (format!("Crashed! Score: {}", self.final_score), Color::Red)
        } else {
            (format!("Score: {}", self.score_readout), Color::Green)
        };
        render_status_lines(frame, area, &message, color, &hints);
    }

    fn render_info_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 || inner.width < 4 {
            return;
        }

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", self.difficulty_name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Score: ", label),
                Span::styled(
                    format!("{}", self.score_readout),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Gravity: ", label),
                Span::raw(format!("{}", self.tunables.gravity)),
            ]),
            Line::from(vec![
                Span::styled(" Jump: ", label),
                Span::raw(format!("{}", self.tunables.jump_strength)),
            ]),
            Line::from(vec![
                Span::styled(" Speed: ", label),
                Span::raw(format!("{}", self.tunables.pipe_speed)),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Renderer for TerminalView {
    fn draw(&mut self, state: &SimulationState) {
        self.scene = Some(Scene::from_state(state));
        self.score_readout = state.score;
    }

    fn show_start_screen(&mut self) {
        self.start_visible = true;
        self.game_over_visible = false;
    }

    fn hide_start_screen(&mut self) {
        self.start_visible = false;
    }

    fn show_game_over_screen(&mut self, score: u32) {
        self.game_over_visible = true;
        self.final_score = score;
    }

    fn hide_game_over_screen(&mut self) {
        self.game_over_visible = false;
    }
}

/// Map a logical coordinate onto a cell index along one axis.
fn to_cell(value: f64, field: f64, cells: usize) -> Option<usize> {
    let cell = (value / field * cells as f64).floor();
    if cell < 0.0 || cell >= cells as f64 {
        None
    } else {
        Some(cell as usize)
    }
}

/// Render pipes and bird, sampling each cell at its centre.
fn render_play_area(frame: &mut Frame, area: Rect, scene: Option<&Scene>) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }
    let Some(scene) = scene else {
        return;
    };

    let (bird_cx, bird_cy) = scene.bird.center();
    let bird_cell = to_cell(bird_cx, FIELD_WIDTH, width)
        .zip(to_cell(bird_cy, FIELD_HEIGHT, height));

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let ly = (row as f64 + 0.5) / height as f64 * FIELD_HEIGHT;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if bird_cell == Some((col, row)) {
                spans.push(Span::styled(
                    scene.bird.glyph(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let lx = (col as f64 + 0.5) / width as f64 * FIELD_WIDTH;
            match scene.pipes.iter().find(|p| p.contains(lx, ly)) {
                Some(pipe) => {
                    let color = match pipe.kind {
                        PipeKind::Top => Color::Green,
                        PipeKind::Bottom => Color::LightGreen,
                    };
                    spans.push(Span::styled("█", Style::default().fg(color)));
                }
                None => spans.push(Span::raw(" ")),
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
