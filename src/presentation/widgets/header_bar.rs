use crate::presentation::navigation::Tab;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderBarStyle {
    pub brand: Style,
    pub tab: Style,
    pub active_tab: Style,
    pub logout: Style,
    pub key: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            brand: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tab: theme.dimmed_style,
            active_tab: theme.accent_style.add_modifier(Modifier::UNDERLINED),
            logout: theme.destructive_style,
            key: theme.key_style,
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Brand, tab strip and logout hint across the top of the main area.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    active: Tab,
    logout_key: Option<String>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, active: Tab) -> Self {
        Self {
            app_name,
            active,
            logout_key: None,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub fn logout_key(mut self, key: Option<String>) -> Self {
        self.logout_key = key;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.style.tab));
            }
            let style = if *tab == self.active {
                self.style.active_tab
            } else {
                self.style.tab
            };
            spans.push(Span::styled(format!("F{} {}", i + 1, tab.title()), style));
        }
        spans
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let brand = Span::styled(format!(" {} ", self.app_name), self.style.brand);
        let brand_width = brand.width() as u16;
        Paragraph::new(Line::from(brand)).render(area, buf);

        let mut right = vec![Span::styled("Log Out ", self.style.logout)];
        if let Some(key) = &self.logout_key {
            right.push(Span::styled(format!(" {key} "), self.style.key));
        }
        let right_line = Line::from(right);
        let right_width = right_line.width() as u16;
        if brand_width + right_width < area.width {
            let right_area = Rect::new(area.right() - right_width, area.y, right_width, 1);
            Paragraph::new(right_line).render(right_area, buf);
        }

        let tabs = Line::from(self.tab_spans());
        let tabs_width = tabs.width() as u16;
        let free = area.width.saturating_sub(brand_width + right_width);
        if tabs_width + 2 <= free {
            let x = area.x + brand_width + (free - tabs_width) / 2;
            Paragraph::new(tabs).render(Rect::new(x, area.y, tabs_width, 1), buf);
        }
    }
}
