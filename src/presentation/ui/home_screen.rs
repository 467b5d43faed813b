//! Landing tab.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::CatalogPort;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    BookNow,
    ContactUs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    /// Jump to the booking tab.
    BookNow,
}

pub struct HomeScreen {
    catalog: Arc<dyn CatalogPort>,
    focus: HomeFocus,
    theme: Theme,
}

impl HomeScreen {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>, theme: Theme) -> Self {
        Self {
            catalog,
            focus: HomeFocus::BookNow,
            theme,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    pub fn handle_action(&mut self, action: Action) -> HomeAction {
        match action {
            Action::NavigateLeft
            | Action::NavigateRight
            | Action::FocusNext
            | Action::FocusPrevious => {
                self.focus = match self.focus {
                    HomeFocus::BookNow => HomeFocus::ContactUs,
                    HomeFocus::ContactUs => HomeFocus::BookNow,
                };
                HomeAction::None
            }
            Action::Select => match self.focus {
                HomeFocus::BookNow => HomeAction::BookNow,
                HomeFocus::ContactUs => {
                    debug!("Contact Us has no destination");
                    HomeAction::None
                }
            },
            _ => HomeAction::None,
        }
    }

    fn button(&self, label: &'static str, focus: HomeFocus) -> Span<'static> {
        let style = if self.focus == focus {
            self.theme.active_style()
        } else {
            self.theme.accent_style.add_modifier(Modifier::REVERSED)
        };
        Span::styled(format!("  {label}  "), style)
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled("Welcome to Your", self.theme.dimmed_style),
            Line::from(vec![
                Span::styled("Perfect ", self.theme.base_style.add_modifier(Modifier::BOLD)),
                Span::styled("Workspace.", self.theme.accent_style),
            ]),
            Line::from(""),
            Line::from(
                "A place where productivity meets community. Flexible workspaces with \
                 high-speed internet, private meeting rooms, and a vibrant community.",
            ),
            Line::from(""),
            Line::from(vec![
                self.button("Book Now", HomeFocus::BookNow),
                Span::raw("   "),
                self.button("Contact Us", HomeFocus::ContactUs),
            ]),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_featured(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(false))
            .title(Span::styled(" Featured Spaces ", self.theme.accent_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line<'_>> = self
            .catalog
            .featured_spaces()
            .iter()
            .flat_map(|space| {
                [
                    Line::styled(space.name.clone(), self.theme.base_style.add_modifier(Modifier::BOLD)),
                    Line::styled(space.price_label(), self.theme.dimmed_style),
                ]
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(false))
            .title(Span::styled(" Why WorkNest ", self.theme.accent_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line<'_>> = self
            .catalog
            .features()
            .iter()
            .flat_map(|feature| {
                [
                    Line::from(vec![
                        Span::styled("• ", self.theme.accent_style),
                        Span::styled(
                            feature.title.as_str(),
                            self.theme.base_style.add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::styled(format!("  {}", feature.text), self.theme.dimmed_style),
                ]
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(Margin::new(2, 1));
        let [hero, _, cards] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [featured, features] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(2)
                .areas(cards);

        self.render_hero(hero, buf);
        self.render_featured(featured, buf);
        self.render_features(features, buf);
    }
}

impl HasCommands for HomeScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut binds = registry.keybinds(&[Action::NavigateRight]);
        binds.extend(registry.keybind(Action::Select).map(|k| Keybind {
            label: match self.focus {
                HomeFocus::BookNow => "Book Now".into(),
                HomeFocus::ContactUs => "Contact".into(),
            },
            ..k
        }));
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticCatalog;

    fn screen() -> HomeScreen {
        HomeScreen::new(Arc::new(StaticCatalog::new()), Theme::default())
    }

    #[test]
    fn test_book_now_is_default() {
        let mut home = screen();
        assert_eq!(home.handle_action(Action::Select), HomeAction::BookNow);
    }

    #[test]
    fn test_contact_us_is_inert() {
        let mut home = screen();
        home.handle_action(Action::NavigateRight);

        assert_eq!(home.focus(), HomeFocus::ContactUs);
        assert_eq!(home.handle_action(Action::Select), HomeAction::None);
    }

    #[test]
    fn test_render_lists_featured_spaces() {
        let home = screen();
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);

        (&home).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Downtown Hub"));
        assert!(text.contains("From $32 / day"));
        assert!(text.contains("Instant booking"));
    }
}
