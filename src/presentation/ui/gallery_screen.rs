//! Gallery tab. Images are shown as captioned tiles with their source URL.

use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::CatalogPort;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;

const COLUMNS: usize = 2;
const TILE_HEIGHT: u16 = 6;

pub struct GalleryScreen {
    catalog: Arc<dyn CatalogPort>,
    selected: usize,
    theme: Theme,
}

impl GalleryScreen {
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

    /// Moves the highlighted tile; arrows walk the grid row-major.
    pub fn handle_action(&mut self, action: Action) {
        let count = self.catalog.gallery_images().len();
        if count == 0 {
            return;
        }
        let target = match action {
            Action::NavigateLeft | Action::FocusPrevious => self.selected.checked_sub(1),
            Action::NavigateRight | Action::FocusNext => Some(self.selected + 1),
            Action::NavigateUp => self.selected.checked_sub(COLUMNS),
            Action::NavigateDown => Some(self.selected + COLUMNS),
            _ => None,
        };
        if let Some(index) = target.filter(|i| *i < count) {
            self.selected = index;
        }
    }

    fn render_tile(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let Some(image) = self.catalog.gallery_images().get(index) else {
            return;
        };
        let focused = index == self.selected;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let caption_style = if focused {
            self.theme.accent_style
        } else {
            self.theme.base_style.add_modifier(Modifier::BOLD)
        };
        Paragraph::new(vec![
            Line::from(Span::styled(format!("▣ {}", image.alt), caption_style)),
            Line::styled(image.url.as_str(), self.theme.dimmed_style),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

impl Widget for &GalleryScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(Margin::new(2, 1));
        let [title, subtitle, _, grid] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled("Gallery", self.theme.accent_style)).render(title, buf);
        Paragraph::new(Line::styled(
            "A peek at our spaces and amenities.",
            self.theme.dimmed_style,
        ))
        .render(subtitle, buf);

        let count = self.catalog.gallery_images().len();
        let visible_rows = usize::from(grid.height / TILE_HEIGHT).max(1);
        let selected_row = self.selected / COLUMNS;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); visible_rows]).split(grid);
        for (slot, row_area) in rows.iter().enumerate() {
            let [left, right] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                    .spacing(1)
                    .areas(*row_area);
            let first = (first_row + slot) * COLUMNS;
            for (offset, tile) in [left, right].into_iter().enumerate() {
                if first + offset < count {
                    self.render_tile(first + offset, tile, buf);
                }
            }
        }
    }
}

impl HasCommands for GalleryScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        registry.keybinds(&[
            Action::NavigateUp,
            Action::NavigateDown,
            Action::NavigateLeft,
            Action::NavigateRight,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticCatalog;

    fn screen() -> GalleryScreen {
        GalleryScreen::new(Arc::new(StaticCatalog::new()), Theme::default())
    }

    #[test]
    fn test_grid_navigation() {
        let mut gallery = screen();

        gallery.handle_action(Action::NavigateDown);
        assert_eq!(gallery.selected(), 2);
        gallery.handle_action(Action::NavigateRight);
        assert_eq!(gallery.selected(), 3);
        gallery.handle_action(Action::NavigateRight);
        assert_eq!(gallery.selected(), 3);
        gallery.handle_action(Action::NavigateDown);
        assert_eq!(gallery.selected(), 3);
        gallery.handle_action(Action::NavigateUp);
        assert_eq!(gallery.selected(), 1);
    }

    #[test]
    fn test_empty_gallery_ignores_keys() {
        let mut gallery = GalleryScreen::new(
            Arc::new(StaticCatalog::with_workspaces(Vec::new())),
            Theme::default(),
        );
        gallery.handle_action(Action::NavigateDown);
        assert_eq!(gallery.selected(), 0);
    }

    #[test]
    fn test_render_shows_captions() {
        let gallery = screen();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        (&gallery).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Workspace 1"));
        assert!(text.contains("Workspace 4"));
    }
}
