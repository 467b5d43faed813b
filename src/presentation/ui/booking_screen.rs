//! Booking tab: filter card, workspace list and the two modals.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};
use tracing::{debug, info};

use crate::application::BookingSearch;
use crate::domain::entities::{BookingFlow, CategoryFilter, Workspace};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::CatalogPort;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::typed_char;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    CALENDAR_WIDTH, CalendarView, DatePicker, Modal, centered_rect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFocus {
    #[default]
    Query,
    Category,
    Dates,
    Search,
    Results,
}

impl BookingFocus {
    const ORDER: [Self; 5] = [
        Self::Query,
        Self::Category,
        Self::Dates,
        Self::Search,
        Self::Results,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        }]
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Category => "type",
            Self::Dates => "dates",
            Self::Search => "search",
            Self::Results => "workspaces",
        }
    }
}

const REVIEW_BUTTONS: [&str; 2] = ["Cancel", "Confirm Booking"];
const DONE_BUTTON: [&str; 1] = ["Done"];

pub struct BookingScreen {
    catalog: Arc<dyn CatalogPort>,
    search: BookingSearch,
    focus: BookingFocus,
    picker: DatePicker,
    calendar_open: bool,
    flow: BookingFlow,
    /// Highlighted button in the review modal.
    review_choice: usize,
    selected: usize,
    notice: Option<String>,
    amenity_preview: usize,
    theme: Theme,
}

impl BookingScreen {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>, theme: Theme, amenity_preview: usize) -> Self {
        Self {
            catalog,
            search: BookingSearch::new(),
            focus: BookingFocus::Query,
            picker: DatePicker::default(),
            calendar_open: false,
            flow: BookingFlow::Idle,
            review_choice: 1,
            selected: 0,
            notice: None,
            amenity_preview,
            theme,
        }
    }

    #[must_use]
    pub const fn search(&self) -> &BookingSearch {
        &self.search
    }

    #[must_use]
    pub const fn flow(&self) -> &BookingFlow {
        &self.flow
    }

    #[must_use]
    pub const fn focus(&self) -> BookingFocus {
        self.focus
    }

    #[must_use]
    pub const fn is_calendar_open(&self) -> bool {
        self.calendar_open
    }

    /// True while the calendar or the booking flow owns the keyboard.
    #[must_use]
    pub const fn has_modal(&self) -> bool {
        !self.flow.is_idle() || self.calendar_open
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns the workspaces for the last committed search.
    #[must_use]
    pub fn results(&self) -> Vec<&Workspace> {
        self.search.results(self.catalog.workspaces())
    }

    /// Footer badge naming what has the keyboard.
    #[must_use]
    pub fn context(&self) -> &'static str {
        if !self.flow.is_idle() {
            "booking"
        } else if self.calendar_open {
            "calendar"
        } else {
            self.focus.label()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) {
        let action = registry.find_action(key);
        self.notice = None;

        if !self.flow.is_idle() {
            self.handle_flow_key(key, action);
        } else if self.calendar_open {
            self.handle_calendar_key(key, action);
        } else {
            self.handle_filter_key(key, action);
        }
    }

    fn handle_flow_key(&mut self, key: KeyEvent, action: Option<Action>) {
        if self.flow.is_confirmed() {
            if matches!(action, Some(Action::Select | Action::Cancel)) {
                self.flow.close();
            }
            return;
        }

        match (action, key.code) {
            (Some(Action::NavigateLeft | Action::NavigateRight | Action::FocusNext), _) => {
                self.review_choice = 1 - self.review_choice;
            }
            (Some(Action::Select), _) if self.review_choice == 0 => self.flow.close(),
            (Some(Action::Select), _) | (None, KeyCode::Char('y')) => {
                if self.flow.confirm()
                    && let Some(workspace) = self.flow.selected()
                {
                    info!(workspace = %workspace.name(), "Booking confirmed");
                }
            }
            (Some(Action::Cancel), _) | (None, KeyCode::Char('n')) => {
                debug!("Booking cancelled");
                self.flow.close();
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent, action: Option<Action>) {
        match (action, key.code) {
            (Some(Action::NavigateLeft), _) => self.picker.move_cursor(-1),
            (Some(Action::NavigateRight), _) => self.picker.move_cursor(1),
            (Some(Action::NavigateUp), _) => self.picker.move_cursor(-7),
            (Some(Action::NavigateDown), _) => self.picker.move_cursor(7),
            (Some(Action::PreviousMonth), _) | (None, KeyCode::Char('<')) => {
                self.picker.previous_month();
            }
            (Some(Action::NextMonth), _) | (None, KeyCode::Char('>')) => {
                self.picker.next_month();
            }
            (Some(Action::Select), _) | (None, KeyCode::Char(' ')) => {
                self.search.select_date(self.picker.cursor());
            }
            (Some(Action::ClearDates), _) | (None, KeyCode::Char('c')) => {
                self.search.clear_dates();
            }
            (Some(Action::Cancel), _) | (None, KeyCode::Char('d')) => {
                self.calendar_open = false;
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, action: Option<Action>) {
        match action {
            Some(Action::Search) => return self.commit(),
            Some(Action::ClearDates) => return self.search.clear_dates(),
            Some(Action::FocusNext) => {
                self.focus = self.focus.step(true);
                return;
            }
            Some(Action::FocusPrevious) => {
                self.focus = self.focus.step(false);
                return;
            }
            _ => {}
        }

        match self.focus {
            BookingFocus::Query => {
                if action == Some(Action::Select) {
                    self.commit();
                } else if let Some(c) = typed_char(&key) {
                    self.search.push_query_char(c);
                } else if key.code == KeyCode::Backspace {
                    self.search.pop_query_char();
                }
            }
            BookingFocus::Category => match action {
                Some(Action::NavigateLeft) => self.step_category(false),
                Some(Action::NavigateRight) => self.step_category(true),
                Some(Action::Select) => self.commit(),
                _ => {}
            },
            BookingFocus::Dates => match action {
                Some(Action::Select) => self.open_calendar(),
                Some(Action::Cancel) => self.search.clear_dates(),
                _ => {}
            },
            BookingFocus::Search => {
                if action == Some(Action::Select) {
                    self.commit();
                }
            }
            BookingFocus::Results => match action {
                Some(Action::NavigateUp) => self.selected = self.selected.saturating_sub(1),
                Some(Action::NavigateDown) => {
                    let last = self.results().len().saturating_sub(1);
                    self.selected = (self.selected + 1).min(last);
                }
                Some(Action::Select) => self.book_selected(),
                _ => {}
            },
        }
    }

    fn commit(&mut self) {
        self.search.commit();
        self.selected = 0;
    }

    fn step_category(&mut self, forward: bool) {
        let options = CategoryFilter::OPTIONS;
        let current = self.search.staged().category().key();
        let index = options
            .iter()
            .position(|(_, key)| *key == current)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % options.len()
        } else {
            (index + options.len() - 1) % options.len()
        };
        self.search.set_category(options[next].1);
    }

    fn open_calendar(&mut self) {
        self.picker.open(self.search.staged().dates());
        self.calendar_open = true;
    }

    fn book_selected(&mut self) {
        let Some(workspace) = self.results().get(self.selected).map(|ws| (*ws).clone()) else {
            return;
        };
        if self.flow.book(&workspace) {
            debug!(workspace = %workspace.name(), "Reviewing booking");
            self.review_choice = 1;
        } else {
            self.notice = Some(format!("{} is unavailable.", workspace.name()));
        }
    }

    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(self.focus != BookingFocus::Results))
            .title(Span::styled(
                " Search & Filter Workspaces ",
                self.theme.accent_style,
            ));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let [query, chips, dates, duration, search] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_query(query, buf);
        self.render_chips(chips, buf);
        self.render_dates(dates, duration, buf);

        let button_style = if self.focus == BookingFocus::Search {
            self.theme.active_style()
        } else {
            self.theme.accent_style.add_modifier(Modifier::REVERSED)
        };
        Paragraph::new(Line::styled("  Search  ", button_style)).render(search, buf);
    }

    fn render_query(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == BookingFocus::Query;
        let query = self.search.staged().query();
        let text = if query.is_empty() {
            Span::styled("Search by name or location", self.theme.dimmed_style)
        } else {
            Span::raw(query)
        };
        let mut spans = vec![Span::styled("⌕ ", self.theme.accent_style), text];
        if focused {
            spans.push(Span::styled(" ", self.theme.base_style.add_modifier(Modifier::REVERSED)));
        }
        Paragraph::new(Line::from(spans))
            .block(Block::bordered().border_style(self.theme.border_style(focused)))
            .render(area, buf);
    }

    fn render_chips(&self, area: Rect, buf: &mut Buffer) {
        let current = self.search.staged().category().key();
        let focused = self.focus == BookingFocus::Category;
        let mut spans = vec![Span::styled("Workspace Type  ", self.theme.dimmed_style)];
        for (label, key) in CategoryFilter::OPTIONS {
            let style = if key == current {
                if focused {
                    self.theme.active_style()
                } else {
                    self.theme.selection_style
                }
            } else {
                self.theme.dimmed_style
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_dates(&self, trigger: Rect, meta: Rect, buf: &mut Buffer) {
        let dates = self.search.staged().dates();
        let focused = self.focus == BookingFocus::Dates;
        let trigger_style = if focused {
            self.theme.active_style()
        } else {
            self.theme.base_style
        };
        Paragraph::new(Line::from(vec![
            Span::styled("Date Range      ", self.theme.dimmed_style),
            Span::styled(format!(" 📅 {} ", dates.label()), trigger_style),
        ]))
        .render(trigger, buf);

        let mut spans = vec![Span::raw("                ")];
        match dates.duration() {
            Some(duration) => spans.push(Span::styled(
                format!("Duration: {}", duration.label()),
                self.theme.accent_style,
            )),
            None => spans.push(Span::styled(
                "Select start and end dates to calculate duration",
                self.theme.dimmed_style,
            )),
        }
        if dates.from().is_some() {
            spans.push(Span::styled("   Clear ✕", self.theme.destructive_style));
        }
        Paragraph::new(Line::from(spans)).render(meta, buf);
    }

    fn workspace_item(&self, workspace: &Workspace) -> ListItem<'static> {
        let action = if workspace.is_available() {
            Span::styled(" Book Now ", self.theme.accent_style.add_modifier(Modifier::REVERSED))
        } else {
            Span::styled(" Unavailable ", self.theme.dimmed_style.add_modifier(Modifier::CROSSED_OUT))
        };
        let text = Text::from(vec![
            Line::from(vec![
                Span::styled(
                    workspace.name().to_string(),
                    self.theme.base_style.add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", workspace.category().label()),
                    self.theme.accent_style,
                ),
            ]),
            Line::styled(
                format!(
                    "  {}  ·  Capacity: {}",
                    workspace.location(),
                    workspace.capacity()
                ),
                self.theme.dimmed_style,
            ),
            Line::styled(
                format!("  {}", workspace.amenity_summary(self.amenity_preview)),
                self.theme.dimmed_style,
            ),
            Line::from(vec![
                Span::styled(format!("  {}  ", workspace.price_label()), self.theme.accent_style),
                action,
            ]),
            Line::from(""),
        ]);
        ListItem::new(text)
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let results = self.results();
        let focused = self.focus == BookingFocus::Results;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(focused))
            .title(Span::styled(
                format!(" Workspace Gallery ({}) ", results.len()),
                self.theme.accent_style,
            ));

        if results.is_empty() {
            Paragraph::new(Line::styled(
                "No workspaces match your search.",
                self.theme.dimmed_style,
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem<'static>> =
            results.iter().map(|ws| self.workspace_item(ws)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_symbol("▌ ")
            .highlight_style(if focused {
                self.theme.selection_style
            } else {
                self.theme.base_style
            });
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn render_calendar(&self, area: Rect, buf: &mut Buffer) {
        let dates = self.search.staged().dates();
        let modal_area = centered_rect(CALENDAR_WIDTH + 4, 15, area);
        Clear.render(modal_area, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(" Select Date Range ", self.theme.accent_style));
        let inner = block.inner(modal_area).inner(Margin::new(1, 0));
        block.render(modal_area, buf);

        let [grid, summary, hints] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .areas(inner);

        CalendarView::new(&self.picker, dates, &self.theme).render(grid, buf);
        let duration = dates
            .duration()
            .map_or_else(String::new, |d| d.label());
        Paragraph::new(vec![
            Line::styled(dates.label(), self.theme.base_style.add_modifier(Modifier::BOLD)),
            Line::styled(duration, self.theme.accent_style),
        ])
        .render(summary, buf);
        Paragraph::new(vec![
            Line::styled("Enter pick · c clear", self.theme.dimmed_style),
            Line::styled("PgUp/PgDn month · d done", self.theme.dimmed_style),
        ])
        .render(hints, buf);
    }

    fn render_flow(&self, area: Rect, buf: &mut Buffer) {
        let modal = match &self.flow {
            BookingFlow::Idle => return,
            BookingFlow::Reviewing(workspace) => Modal::new("Confirm Booking", &self.theme)
                .body(vec![
                    Line::styled(
                        "You are about to book the following workspace:",
                        self.theme.dimmed_style,
                    ),
                    Line::from(""),
                    Line::styled(
                        workspace.name().to_string(),
                        self.theme.base_style.add_modifier(Modifier::BOLD),
                    ),
                    Line::from(workspace.location().to_string()),
                    Line::styled(workspace.price_label(), self.theme.accent_style),
                    Line::from(""),
                ])
                .buttons(&REVIEW_BUTTONS, self.review_choice),
            BookingFlow::Confirmed(_) => Modal::new("Booking Confirmed!", &self.theme)
                .body(vec![
                    Line::styled("✔", self.theme.success_style),
                    Line::from("Your workspace has been successfully booked."),
                    Line::from(""),
                ])
                .buttons(&DONE_BUTTON, 0),
        };
        let rect = centered_rect(52, modal.height(), area);
        modal.render(rect, buf);
    }
}

impl Widget for &BookingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.inner(Margin::new(1, 0));
        let [title, filters, notice, results] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled("Book Your Workspace", self.theme.accent_style))
            .render(title, buf);
        self.render_filters(filters, buf);
        if let Some(text) = &self.notice {
            Paragraph::new(Line::styled(text.as_str(), self.theme.destructive_style))
                .render(notice, buf);
        }
        self.render_results(results, buf);

        if self.calendar_open {
            self.render_calendar(area, buf);
        }
        self.render_flow(area, buf);
    }
}

impl HasCommands for BookingScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let relabel = |action: Action, label: &'static str| {
            registry.keybind(action).map(|k| Keybind {
                label: label.into(),
                ..k
            })
        };

        if self.flow.is_confirmed() {
            return relabel(Action::Select, "Done").into_iter().collect();
        }
        if !self.flow.is_idle() {
            return [relabel(Action::Select, "Choose"), relabel(Action::Cancel, "Cancel")]
                .into_iter()
                .flatten()
                .collect();
        }
        if self.calendar_open {
            return [
                relabel(Action::Select, "Pick Day"),
                registry.keybind(Action::PreviousMonth),
                registry.keybind(Action::NextMonth),
                registry.keybind(Action::ClearDates),
                relabel(Action::Cancel, "Done"),
            ]
            .into_iter()
            .flatten()
            .collect();
        }

        let mut binds = registry.keybinds(&[Action::FocusNext, Action::Search]);
        match self.focus {
            BookingFocus::Dates => binds.extend(relabel(Action::Select, "Calendar")),
            BookingFocus::Results => binds.extend(relabel(Action::Select, "Book Now")),
            BookingFocus::Category => binds.extend(relabel(Action::NavigateRight, "Type")),
            BookingFocus::Query | BookingFocus::Search => {}
        }
        if self.search.staged().dates().from().is_some() {
            binds.extend(registry.keybind(Action::ClearDates));
        }
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DateRange, WorkspaceCategory};
    use crate::infrastructure::StaticCatalog;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn screen() -> (BookingScreen, CommandRegistry) {
        (
            BookingScreen::new(Arc::new(StaticCatalog::new()), Theme::default(), 2),
            CommandRegistry::new(),
        )
    }

    fn focus(screen: &mut BookingScreen, registry: &CommandRegistry, target: BookingFocus) {
        while screen.focus() != target {
            screen.handle_key(key(KeyCode::Tab), registry);
        }
    }

    #[test]
    fn test_typing_only_stages_query() {
        let (mut booking, registry) = screen();
        for c in "loft".chars() {
            booking.handle_key(key(KeyCode::Char(c)), &registry);
        }

        assert_eq!(booking.search().staged().query(), "loft");
        assert_eq!(booking.results().len(), 6);

        booking.handle_key(key(KeyCode::Enter), &registry);
        assert!(booking.results().iter().all(|ws| {
            ws.name().to_lowercase().contains("loft") || ws.location().to_lowercase().contains("loft")
        }));
    }

    #[test]
    fn test_category_chip_cycles_and_commits() {
        let (mut booking, registry) = screen();
        focus(&mut booking, &registry, BookingFocus::Category);

        booking.handle_key(key(KeyCode::Right), &registry);
        assert_eq!(booking.search().staged().category().key(), "private");
        booking.handle_key(key(KeyCode::Left), &registry);
        booking.handle_key(key(KeyCode::Left), &registry);
        assert_eq!(booking.search().staged().category().key(), "event");

        booking.handle_key(ctrl('s'), &registry);
        assert!(
            booking
                .results()
                .iter()
                .all(|ws| ws.category() == WorkspaceCategory::EventSpace)
        );
    }

    #[test]
    fn test_calendar_picks_a_range() {
        let (mut booking, registry) = screen();
        focus(&mut booking, &registry, BookingFocus::Dates);

        booking.handle_key(key(KeyCode::Enter), &registry);
        assert!(booking.is_calendar_open());

        let start = booking.picker.cursor();
        booking.handle_key(key(KeyCode::Enter), &registry);
        booking.handle_key(key(KeyCode::Right), &registry);
        booking.handle_key(key(KeyCode::Right), &registry);
        booking.handle_key(key(KeyCode::Enter), &registry);

        let dates = booking.search().staged().dates();
        assert_eq!(dates.from(), Some(start));
        assert_eq!(dates.duration().map(|d| d.days), Some(3));
        assert_eq!(booking.search().applied().dates(), DateRange::Empty);

        booking.handle_key(key(KeyCode::Char('c')), &registry);
        assert!(booking.search().staged().dates().is_empty());

        booking.handle_key(key(KeyCode::Esc), &registry);
        assert!(!booking.is_calendar_open());
    }

    #[test]
    fn test_reopening_calendar_jumps_to_range_start() {
        let (mut booking, registry) = screen();
        let day = NaiveDate::from_ymd_opt(2030, 6, 12).unwrap();
        booking.search.select_date(day);
        focus(&mut booking, &registry, BookingFocus::Dates);

        booking.handle_key(key(KeyCode::Enter), &registry);

        assert_eq!(booking.picker.cursor(), day);
        assert_eq!(booking.picker.month().month(), 6);
    }

    #[test]
    fn test_book_confirm_done() {
        let (mut booking, registry) = screen();
        focus(&mut booking, &registry, BookingFocus::Results);

        booking.handle_key(key(KeyCode::Enter), &registry);
        assert!(matches!(booking.flow(), BookingFlow::Reviewing(_)));

        booking.handle_key(key(KeyCode::Enter), &registry);
        assert!(booking.flow().is_confirmed());

        booking.handle_key(key(KeyCode::Enter), &registry);
        assert!(booking.flow().is_idle());
    }

    #[test]
    fn test_cancel_button_closes_review() {
        let (mut booking, registry) = screen();
        focus(&mut booking, &registry, BookingFocus::Results);

        booking.handle_key(key(KeyCode::Enter), &registry);
        booking.handle_key(key(KeyCode::Left), &registry);
        booking.handle_key(key(KeyCode::Enter), &registry);

        assert!(booking.flow().is_idle());
    }

    #[test]
    fn test_unavailable_workspace_cannot_be_booked() {
        let (mut booking, registry) = screen();
        focus(&mut booking, &registry, BookingFocus::Results);
        let unavailable = booking
            .results()
            .iter()
            .position(|ws| !ws.is_available())
            .unwrap();
        for _ in 0..unavailable {
            booking.handle_key(key(KeyCode::Down), &registry);
        }

        booking.handle_key(key(KeyCode::Enter), &registry);

        assert!(booking.flow().is_idle());
        assert!(booking.notice().is_some_and(|n| n.ends_with("is unavailable.")));
    }

    #[test]
    fn test_render_shows_filter_and_cards() {
        let (booking, _) = screen();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);

        (&booking).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Select date range"));
        assert!(text.contains("Co-Working"));
        assert!(text.contains("Book Now"));
    }
}
