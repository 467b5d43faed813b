use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// User intent a key can be bound to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Logout,

    // Tabs
    NextTab,
    PreviousTab,
    GoHome,
    GoBooking,
    GoPricing,
    GoGallery,

    // Navigation / Focus
    FocusNext,
    FocusPrevious,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    Cancel,

    // Booking
    Search,
    ClearDates,
    PreviousMonth,
    NextMonth,

    // Forms
    TogglePasswordVisibility,
}

impl Action {
    /// Returns the short label shown in the footer bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Logout => "Log Out",
            Self::NextTab => "Next Tab",
            Self::PreviousTab => "Prev Tab",
            Self::GoHome => "Home",
            Self::GoBooking => "Booking",
            Self::GoPricing => "Pricing",
            Self::GoGallery => "Gallery",
            Self::FocusNext => "Next",
            Self::FocusPrevious => "Prev",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::NavigateLeft => "Left",
            Self::NavigateRight => "Right",
            Self::Select => "Select",
            Self::Cancel => "Close",
            Self::Search => "Search",
            Self::ClearDates => "Clear Dates",
            Self::PreviousMonth => "Prev Month",
            Self::NextMonth => "Next Month",
            Self::TogglePasswordVisibility => "Show/Hide",
        }
    }
}

/// Key shown in the footer with its action and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Bound key.
    pub key: KeyEvent,
    /// Action it triggers.
    pub action: Action,
    /// Footer label.
    pub label: Cow<'static, str>,
    /// Whether the footer shows it.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a visible keybind.
    #[must_use]
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Hides the keybind from the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
