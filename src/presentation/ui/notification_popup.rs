//! Toast overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::application::services::Toast;
use crate::domain::{NotificationKind, ToastPhase};

/// Toast overlay in the top-right corner.
pub struct NotificationPopup<'a> {
    toast: &'a Toast,
}

impl<'a> NotificationPopup<'a> {
    /// Creates popup for a toast.
    #[must_use]
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn style(&self) -> Style {
        let color = match self.toast.kind() {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };

        match self.toast.phase() {
            ToastPhase::Visible => Style::default().fg(color).add_modifier(Modifier::BOLD),
            ToastPhase::Appearing | ToastPhase::Disappearing => {
                Style::default().fg(color).add_modifier(Modifier::DIM)
            }
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icon = self.toast.kind().icon();
        let message = self.toast.text();

        let content_width = icon.width() + 1 + message.width();

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);

        let lines = content_width.div_ceil(inner_width);

        let height = lines.saturating_add(2).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 1;

        let popup_area = Rect::new(x, y, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let style = self.style();
        let block = Block::default().borders(Borders::ALL).style(style);

        let line = Line::from(vec![Span::raw(icon), Span::raw(" "), Span::raw(message)]);
        let para = Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(style);

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}
