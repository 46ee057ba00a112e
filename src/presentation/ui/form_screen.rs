//! Reminder form screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::services::SubmitButton;
use crate::domain::ports::FormSurface;
use crate::domain::{FormElement, FormField};
use crate::presentation::widgets::{SubmitButtonWidget, TextInput};

/// Result of a key press on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key consumed by the form.
    None,
    /// Submit was requested.
    Submit,
}

/// The form: beer count, email and the submit control.
pub struct FormScreen {
    beer_count: TextInput,
    email: TextInput,
    focus: FormField,
    spinner_frame: usize,
}

impl FormScreen {
    /// Creates empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            beer_count: TextInput::new(" Wie viele Biere? ")
                .numeric()
                .placeholder("z.B. 5"),
            email: TextInput::new(" Email ").placeholder("du@example.com"),
            focus: FormField::BeerCount,
            spinner_frame: 0,
        }
    }

    /// Returns focused field.
    #[must_use]
    pub const fn focused(&self) -> FormField {
        self.focus
    }

    /// Advances the busy indicator.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus(self.focus.next());
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.active_input().input_char(c);
            }
            KeyCode::Backspace => self.active_input().backspace(),
            KeyCode::Delete => self.active_input().delete(),
            KeyCode::Left => self.active_input().move_left(),
            KeyCode::Right => self.active_input().move_right(),
            KeyCode::Home => self.active_input().move_start(),
            KeyCode::End => self.active_input().move_end(),
            _ => {}
        }

        FormAction::None
    }

    /// Renders the form with the current button state.
    pub fn render(&self, area: Rect, buf: &mut Buffer, button: &SubmitButton) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(46),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" 🍺 Bier Reminder ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [intro, _, beer_area, email_area, _, button_area, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Wir erinnern dich per Email ans Trinken.")
            .style(Style::default().fg(Color::White))
            .render(intro, buf);

        (&self.beer_count).render(beer_area, buf);
        (&self.email).render(email_area, buf);

        SubmitButtonWidget::new(button.state(), button.label())
            .spinner_frame(self.spinner_frame)
            .render(button_area, buf);

        let hints = Line::from(vec![
            Span::styled("Enter: Start", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Tab: Feld wechseln", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Beenden", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(help, buf);
    }

    fn active_input(&mut self) -> &mut TextInput {
        self.input_mut(self.focus)
    }

    fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::BeerCount => &self.beer_count,
            FormField::Email => &self.email,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::BeerCount => &mut self.beer_count,
            FormField::Email => &mut self.email,
        }
    }
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for FormScreen {
    fn has_element(&self, _element: FormElement) -> bool {
        true
    }

    fn read_field(&self, field: FormField) -> String {
        self.input(field).value().to_string()
    }

    fn focus(&mut self, field: FormField) {
        self.focus = field;
        self.beer_count.set_focused(field == FormField::BeerCount);
        self.email.set_focused(field == FormField::Email);
    }

    fn clear_fields(&mut self) {
        self.beer_count.clear();
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut FormScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = FormScreen::new();
        assert_eq!(screen.focused(), FormField::BeerCount);
        assert!(screen.missing_elements().is_empty());
        assert!(screen.read_field(FormField::BeerCount).is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = FormScreen::new();
        type_text(&mut screen, "5x");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "a@b.com");

        assert_eq!(screen.read_field(FormField::BeerCount), "5");
        assert_eq!(screen.read_field(FormField::Email), "a@b.com");
        assert_eq!(screen.focused(), FormField::Email);
    }

    #[test]
    fn test_enter_submits_from_either_field() {
        let mut screen = FormScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), FormAction::Submit);

        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut screen = FormScreen::new();
        screen.focus(FormField::Email);
        screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(screen.read_field(FormField::Email).is_empty());
    }

    #[test]
    fn test_clear_fields() {
        let mut screen = FormScreen::new();
        type_text(&mut screen, "3");
        screen.focus(FormField::Email);
        type_text(&mut screen, "x@y.de");

        screen.clear_fields();

        assert!(screen.read_field(FormField::BeerCount).is_empty());
        assert!(screen.read_field(FormField::Email).is_empty());
    }

    #[test]
    fn test_render_shows_button_label() {
        let screen = FormScreen::new();
        let button = SubmitButton::new();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        screen.render(area, &mut buf, &button);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("START"));
    }
}
