//! Submit button widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::ButtonState;

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Renders the submit control in its idle or busy look.
pub struct SubmitButtonWidget<'a> {
    state: ButtonState,
    label: &'a str,
    spinner_frame: usize,
}

impl<'a> SubmitButtonWidget<'a> {
    /// Creates widget for a state and its label.
    #[must_use]
    pub const fn new(state: ButtonState, label: &'a str) -> Self {
        Self {
            state,
            label,
            spinner_frame: 0,
        }
    }

    /// Sets the busy indicator frame.
    #[must_use]
    pub const fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn line(&self) -> Line<'a> {
        match self.state {
            ButtonState::Idle => Line::from(Span::styled(
                self.label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            ButtonState::Busy => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(self.label, Style::default().fg(Color::DarkGray)),
                ])
            }
        }
    }
}

impl Widget for SubmitButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.state {
            ButtonState::Idle => Style::default().fg(Color::Yellow),
            ButtonState::Busy => Style::default().fg(Color::DarkGray),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
