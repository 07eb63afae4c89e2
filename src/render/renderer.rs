use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::board::{self, BORDER, FOOD, SNAKE_BODY, SNAKE_HEAD};
use crate::game::Snapshot;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let mut lines = self.render_grid(snapshot);
        lines.extend(self.render_status(snapshot));

        frame.render_widget(Paragraph::new(lines), frame.area());
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Vec<Line<'static>> {
        board::draw_board(snapshot)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|glyph| Span::styled(glyph.to_string(), glyph_style(glyph)))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_status(&self, snapshot: &Snapshot) -> Vec<Line<'static>> {
        let mut status = board::status_lines(snapshot).into_iter();
        let mut lines = Vec::new();

        if let Some(score) = status.next() {
            lines.push(Line::from(Span::styled(
                score,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(controls) = status.next() {
            lines.push(Line::from(Span::styled(
                controls,
                Style::default().fg(Color::Gray),
            )));
        }
        // Whatever is left is the game over notice
        for line in status {
            lines.push(Line::from(Span::styled(
                line,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        lines
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        BORDER => Style::default().fg(Color::White),
        SNAKE_HEAD => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        SNAKE_BODY => Style::default().fg(Color::Green),
        FOOD => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}
