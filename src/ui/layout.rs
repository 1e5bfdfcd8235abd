//! Screen layout: a play field with the 2:3 shape of the logical field, two
//! status lines under it and a side panel.

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const SIDE_PANEL_WIDTH: u16 = 22;
const STATUS_HEIGHT: u16 = 2;

/// Terminal cells are about twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Regions of the screen inside the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub field: Rect,
    pub status: Rect,
    pub side: Rect,
}

impl ScreenLayout {
    /// Split the area inside the outer border.
    pub fn compute(inner: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(SIDE_PANEL_WIDTH.min(inner.width)),
            ])
            .split(inner);
        let (left, side) = (columns[0], columns[1]);

        let status_height = STATUS_HEIGHT.min(left.height);
        let status = Rect {
            y: left.y + left.height - status_height,
            height: status_height,
            ..left
        };
        let above = Rect {
            height: left.height - status_height,
            ..left
        };

        Self {
            field: fit_field(above),
            status,
            side,
        }
    }
}

/// Largest centred rect inside `area` that keeps the field's proportions.
pub fn fit_field(area: Rect) -> Rect {
    let cols_per_row = FIELD_WIDTH / FIELD_HEIGHT * CELL_ASPECT;

    let mut rows = area.height;
    let mut cols = (rows as f64 * cols_per_row).round() as u16;
    if cols > area.width {
        cols = area.width;
        rows = ((cols as f64 / cols_per_row).round() as u16).min(area.height);
    }

    Rect {
        x: area.x + (area.width - cols) / 2,
        y: area.y + (area.height - rows) / 2,
        width: cols,
        height: rows,
    }
}

/// Clear `area`, draw the titled outer border and return what is inside it.
pub fn render_frame_border(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A message line and a key-hint line, both centred.
pub fn render_status_lines(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    let hint_spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(color)),
        Line::from(hint_spans),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render a centered modal box over `area`.
///
/// The title line is bold in `color`; the remaining lines are white, except
/// the last which is dimmed as a key hint.
pub fn render_modal(frame: &mut Frame, area: Rect, color: Color, title: &str, body: &[String]) {
    let content_height = body.len() as u16 + 2;
    let modal_width = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16
        + 6;
    let modal_height = content_height + 2;

    let modal_width = modal_width.min(area.width);
    let modal_height = modal_height.min(area.height);
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let last = body.len().saturating_sub(1);
    for (i, text) in body.iter().enumerate() {
        let style = if i == last {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text.clone(), style)));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
