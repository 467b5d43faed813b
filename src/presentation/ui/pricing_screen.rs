//! Pricing tab.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, BorderType, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::CatalogPort;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;

/// Plan table with a highlighted row.
pub struct PricingScreen {
    catalog: Arc<dyn CatalogPort>,
    selected: usize,
    theme: Theme,
}

impl PricingScreen {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>, theme: Theme) -> Self {
        Self {
            catalog,
            selected: 0,
            theme,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_action(&mut self, action: Action) {
        let last = self.catalog.pricing_plans().len().saturating_sub(1);
        match action {
            Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
            Action::NavigateDown => self.selected = (self.selected + 1).min(last),
            _ => {}
        }
    }
}

impl Widget for &PricingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(Margin::new(2, 1));
        let [title, subtitle, _, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled("Pricing", self.theme.accent_style)).render(title, buf);
        Paragraph::new(Line::styled(
            "Simple plans for every team size.",
            self.theme.dimmed_style,
        ))
        .render(subtitle, buf);

        let header = Row::new(["Plan", "Price", ""])
            .style(self.theme.dimmed_style.add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows = self.catalog.pricing_plans().iter().map(|plan| {
            Row::new([
                Cell::from(plan.name.as_str()).style(self.theme.base_style.add_modifier(Modifier::BOLD)),
                Cell::from(plan.price.as_str()).style(self.theme.accent_style),
                Cell::from(plan.details.as_str()).style(self.theme.dimmed_style),
            ])
            .height(2)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border_style(true)),
        )
        .row_highlight_style(self.theme.selection_style)
        .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, table_area, buf, &mut state);
    }
}

impl HasCommands for PricingScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        registry.keybinds(&[Action::NavigateUp, Action::NavigateDown])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticCatalog;

    #[test]
    fn test_selection_is_clamped() {
        let mut pricing = PricingScreen::new(Arc::new(StaticCatalog::new()), Theme::default());

        pricing.handle_action(Action::NavigateUp);
        assert_eq!(pricing.selected(), 0);

        for _ in 0..5 {
            pricing.handle_action(Action::NavigateDown);
        }
        assert_eq!(pricing.selected(), 2);
    }

    #[test]
    fn test_render_lists_plans() {
        let pricing = PricingScreen::new(Arc::new(StaticCatalog::new()), Theme::default());
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        (&pricing).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        for needle in ["Free", "$0", "Pro", "$15", "Enterprise", "$29", "per user"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }
}
