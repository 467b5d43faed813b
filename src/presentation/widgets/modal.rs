//! Centered dialog drawn over the current screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::theme::Theme;

/// Returns a `width` x `height` rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    rect
}

/// A bordered box with a title, body text and a row of buttons.
pub struct Modal<'a> {
    title: &'a str,
    body: Vec<Line<'a>>,
    buttons: &'a [&'a str],
    selected: usize,
    destructive: Option<usize>,
    theme: &'a Theme,
}

impl<'a> Modal<'a> {
    #[must_use]
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            body: Vec::new(),
            buttons: &[],
            selected: 0,
            destructive: None,
            theme,
        }
    }

    #[must_use]
    pub fn body(mut self, body: Vec<Line<'a>>) -> Self {
        self.body = body;
        self
    }

    /// Sets the buttons and which one is highlighted.
    #[must_use]
    pub const fn buttons(mut self, buttons: &'a [&'a str], selected: usize) -> Self {
        self.buttons = buttons;
        self.selected = selected;
        self
    }

    /// Marks one button as destructive.
    #[must_use]
    pub const fn destructive(mut self, index: usize) -> Self {
        self.destructive = Some(index);
        self
    }

    /// Outer height the modal needs for its content.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        let buttons = u16::from(!self.buttons.is_empty()) * 2;
        self.body.len() as u16 + buttons + 2
    }

    fn button_style(&self, index: usize) -> Style {
        if index == self.selected {
            if self.destructive == Some(index) {
                Style::default()
                    .bg(self.theme.destructive_style.fg.unwrap_or_default())
                    .fg(ratatui::style::Color::White)
            } else {
                self.theme.active_style()
            }
        } else {
            self.theme.dimmed_style
        }
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(format!(" {} ", self.title), self.theme.accent_style))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let button_rows = if self.buttons.is_empty() { 0 } else { 1 };
        let [body_area, _, buttons_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(button_rows),
            Constraint::Length(button_rows),
        ])
        .areas(inner);

        Paragraph::new(self.body.clone())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(body_area, buf);

        if !self.buttons.is_empty() {
            let mut spans = Vec::new();
            for (i, label) in self.buttons.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                spans.push(Span::styled(format!(" {label} "), self.button_style(i)));
            }
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .render(buttons_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(40, 10, area);

        assert_eq!(rect, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, area);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn test_modal_renders_title_body_and_buttons() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);

        Modal::new("Confirm Logout", &theme)
            .body(vec![Line::from("Are you sure?")])
            .buttons(&["Cancel", "Log Out"], 1)
            .destructive(1)
            .render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Confirm Logout"));
        assert!(text.contains("Are you sure?"));
        assert!(text.contains("Log Out"));
    }
}
