//! Tabbed area shown after login.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Widget},
};
use tracing::{debug, info};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::CatalogPort;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::navigation::Tab;
use crate::presentation::theme::Theme;
use crate::presentation::ui::booking_screen::BookingScreen;
use crate::presentation::ui::gallery_screen::GalleryScreen;
use crate::presentation::ui::home_screen::{HomeAction, HomeScreen};
use crate::presentation::ui::pricing_screen::PricingScreen;
use crate::presentation::widgets::{FooterBar, HeaderBar, HeaderBarStyle, Modal, centered_rect};

const LOGOUT_BUTTONS: [&str; 2] = ["Cancel", "Log Out"];
const LOGOUT_CONFIRM: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    None,
    /// Logout confirmed in the prompt.
    Logout,
}

pub struct MainScreen {
    tab: Tab,
    home: HomeScreen,
    booking: BookingScreen,
    pricing: PricingScreen,
    gallery: GalleryScreen,
    /// Highlighted button while the logout prompt is open.
    logout_prompt: Option<usize>,
    app_name: &'static str,
    logout_hint: Option<String>,
    theme: Theme,
}

impl MainScreen {
    #[must_use]
    pub fn new(
        catalog: &Arc<dyn CatalogPort>,
        registry: &CommandRegistry,
        theme: Theme,
        amenity_preview: usize,
    ) -> Self {
        Self {
            tab: Tab::Home,
            home: HomeScreen::new(Arc::clone(catalog), theme),
            booking: BookingScreen::new(Arc::clone(catalog), theme, amenity_preview),
            pricing: PricingScreen::new(Arc::clone(catalog), theme),
            gallery: GalleryScreen::new(Arc::clone(catalog), theme),
            logout_prompt: None,
            app_name: crate::NAME,
            logout_hint: registry
                .get(Action::Logout)
                .map(|key| FooterBar::format_key(&key)),
            theme,
        }
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn booking(&self) -> &BookingScreen {
        &self.booking
    }

    #[must_use]
    pub const fn is_logout_prompt_open(&self) -> bool {
        self.logout_prompt.is_some()
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            info!(from = ?self.tab, to = ?tab, "Switching tab");
            self.tab = tab;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> MainAction {
        let action = registry.find_action(key);

        if let Some(choice) = self.logout_prompt {
            return self.handle_prompt_key(choice, key, action);
        }
        if self.tab == Tab::Booking && self.booking.has_modal() {
            self.booking.handle_key(key, registry);
            return MainAction::None;
        }

        match action {
            Some(Action::Logout) => {
                debug!("Opening logout prompt");
                self.logout_prompt = Some(0);
                return MainAction::None;
            }
            Some(Action::GoHome) => return self.tab_switched(Tab::Home),
            Some(Action::GoBooking) => return self.tab_switched(Tab::Booking),
            Some(Action::GoPricing) => return self.tab_switched(Tab::Pricing),
            Some(Action::GoGallery) => return self.tab_switched(Tab::Gallery),
            Some(Action::NextTab) => return self.tab_switched(self.tab.next()),
            Some(Action::PreviousTab) => return self.tab_switched(self.tab.previous()),
            _ => {}
        }

        match self.tab {
            Tab::Home => {
                if let Some(action) = action
                    && self.home.handle_action(action) == HomeAction::BookNow
                {
                    self.switch_tab(Tab::Booking);
                }
            }
            Tab::Booking => self.booking.handle_key(key, registry),
            Tab::Pricing => {
                if let Some(action) = action {
                    self.pricing.handle_action(action);
                }
            }
            Tab::Gallery => {
                if let Some(action) = action {
                    self.gallery.handle_action(action);
                }
            }
        }
        MainAction::None
    }

    fn tab_switched(&mut self, tab: Tab) -> MainAction {
        self.switch_tab(tab);
        MainAction::None
    }

    fn handle_prompt_key(
        &mut self,
        choice: usize,
        key: KeyEvent,
        action: Option<Action>,
    ) -> MainAction {
        match (action, key.code) {
            (
                Some(
                    Action::NavigateLeft
                    | Action::NavigateRight
                    | Action::FocusNext
                    | Action::FocusPrevious,
                ),
                _,
            ) => {
                self.logout_prompt = Some(1 - choice);
            }
            (Some(Action::Select), _) if choice == LOGOUT_CONFIRM => {
                self.logout_prompt = None;
                return MainAction::Logout;
            }
            (None, KeyCode::Char('y')) => {
                self.logout_prompt = None;
                return MainAction::Logout;
            }
            (Some(Action::Select | Action::Cancel | Action::Logout), _)
            | (None, KeyCode::Char('n')) => {
                debug!("Logout cancelled");
                self.logout_prompt = None;
            }
            _ => {}
        }
        MainAction::None
    }

    /// Footer badge naming what has the keyboard.
    #[must_use]
    pub fn context(&self) -> &'static str {
        if self.logout_prompt.is_some() {
            "log out"
        } else if self.tab == Tab::Booking {
            self.booking.context()
        } else {
            self.tab.title()
        }
    }

    fn render_logout_prompt(&self, choice: usize, area: Rect, buf: &mut Buffer) {
        let modal = Modal::new("Confirm Logout", &self.theme)
            .body(vec![
                Line::from(""),
                Line::from("Are you sure you want to log out?"),
                Line::from(""),
            ])
            .buttons(&LOGOUT_BUTTONS, choice)
            .destructive(LOGOUT_CONFIRM);
        let rect = centered_rect(44, modal.height(), area);
        modal.render(rect, buf);
    }
}

impl Widget for &MainScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.dimmed_style)
            .render(header, buf);
        HeaderBar::new(self.app_name, self.tab)
            .logout_key(self.logout_hint.clone())
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header, buf);

        match self.tab {
            Tab::Home => (&self.home).render(body, buf),
            Tab::Booking => (&self.booking).render(body, buf),
            Tab::Pricing => (&self.pricing).render(body, buf),
            Tab::Gallery => (&self.gallery).render(body, buf),
        }

        if let Some(choice) = self.logout_prompt {
            self.render_logout_prompt(choice, area, buf);
        }
    }
}

impl HasCommands for MainScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        if self.logout_prompt.is_some() {
            return [
                registry.keybind(Action::Select).map(|k| Keybind {
                    label: "Choose".into(),
                    ..k
                }),
                registry.keybind(Action::Cancel),
            ]
            .into_iter()
            .flatten()
            .collect();
        }

        let mut binds = match self.tab {
            Tab::Home => self.home.get_commands(registry),
            Tab::Booking => self.booking.get_commands(registry),
            Tab::Pricing => self.pricing.get_commands(registry),
            Tab::Gallery => self.gallery.get_commands(registry),
        };
        if self.tab == Tab::Booking && self.booking.has_modal() {
            binds.extend(registry.keybind(Action::Quit));
            return binds;
        }
        binds.extend(registry.keybind(Action::NextTab));
        binds.extend(registry.keybind(Action::Quit));
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticCatalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> (MainScreen, CommandRegistry) {
        let catalog: Arc<dyn CatalogPort> = Arc::new(StaticCatalog::new());
        let registry = CommandRegistry::new();
        (
            MainScreen::new(&catalog, &registry, Theme::default(), 2),
            registry,
        )
    }

    #[test]
    fn test_function_keys_switch_tabs() {
        let (mut main, registry) = screen();

        main.handle_key(key(KeyCode::F(3)), &registry);
        assert_eq!(main.tab(), Tab::Pricing);

        main.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL), &registry);
        assert_eq!(main.tab(), Tab::Gallery);
    }

    #[test]
    fn test_home_book_now_opens_booking_tab() {
        let (mut main, registry) = screen();

        main.handle_key(key(KeyCode::Enter), &registry);

        assert_eq!(main.tab(), Tab::Booking);
    }

    #[test]
    fn test_booking_state_survives_tab_switch() {
        let (mut main, registry) = screen();
        main.switch_tab(Tab::Booking);
        main.handle_key(key(KeyCode::Char('h')), &registry);

        main.handle_key(key(KeyCode::F(1)), &registry);
        main.handle_key(key(KeyCode::F(2)), &registry);

        assert_eq!(main.booking().search().staged().query(), "h");
    }

    #[test]
    fn test_logout_requires_confirmation() {
        let (mut main, registry) = screen();
        let logout = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);

        assert_eq!(main.handle_key(logout, &registry), MainAction::None);
        assert!(main.is_logout_prompt_open());

        // Cancel is highlighted first.
        assert_eq!(main.handle_key(key(KeyCode::Enter), &registry), MainAction::None);
        assert!(!main.is_logout_prompt_open());

        main.handle_key(logout, &registry);
        main.handle_key(key(KeyCode::Right), &registry);
        assert_eq!(main.handle_key(key(KeyCode::Enter), &registry), MainAction::Logout);
    }

    #[test]
    fn test_prompt_swallows_tab_keys() {
        let (mut main, registry) = screen();
        main.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL), &registry);

        main.handle_key(key(KeyCode::F(4)), &registry);

        assert_eq!(main.tab(), Tab::Home);
        assert!(main.is_logout_prompt_open());
    }

    #[test]
    fn test_booking_modal_keeps_tab_and_logout_keys() {
        let (mut main, registry) = screen();
        main.switch_tab(Tab::Booking);
        // Query -> Category -> Dates -> Search -> Results, then book the first workspace.
        for _ in 0..4 {
            main.handle_key(key(KeyCode::Tab), &registry);
        }
        main.handle_key(key(KeyCode::Enter), &registry);
        assert!(main.booking().has_modal());

        main.handle_key(key(KeyCode::F(3)), &registry);
        main.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL), &registry);

        assert_eq!(main.tab(), Tab::Booking);
        assert!(!main.booking().flow().is_idle());
        assert!(!main.is_logout_prompt_open());

        main.handle_key(key(KeyCode::Esc), &registry);
        assert!(!main.booking().has_modal());
        main.handle_key(key(KeyCode::F(3)), &registry);
        assert_eq!(main.tab(), Tab::Pricing);
    }

    #[test]
    fn test_calendar_keeps_tab_keys() {
        let (mut main, registry) = screen();
        main.switch_tab(Tab::Booking);
        main.handle_key(key(KeyCode::Tab), &registry);
        main.handle_key(key(KeyCode::Tab), &registry);
        main.handle_key(key(KeyCode::Enter), &registry);
        assert!(main.booking().is_calendar_open());

        main.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL), &registry);

        assert_eq!(main.tab(), Tab::Booking);
        assert!(main.booking().is_calendar_open());
    }

    #[test]
    fn test_render_header() {
        let (main, _) = screen();
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);

        (&main).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("WorkNest"));
        assert!(row.contains("Log Out"));
        assert!(row.contains("C-o"));
        assert_eq!(main.context(), "Home");
    }
}
