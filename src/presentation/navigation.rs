//! Screen routes, the root navigation stack and the main tab set.

use tracing::debug;

use crate::application::SessionStatus;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    Signup,
    /// Tabbed area shown to signed-in users.
    Main,
}

impl Route {
    /// Where the splash screen hands over once the session check is done.
    #[must_use]
    pub const fn after_splash(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Authenticated => Self::Main,
            SessionStatus::Anonymous => Self::Login,
        }
    }
}

/// Root stack. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Splash)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes `route`, keeping the current one underneath.
    pub fn push(&mut self, route: Route) {
        debug!(?route, depth = self.stack.len() + 1, "Navigate");
        self.stack.push(route);
    }

    /// Swaps the current route for `route`.
    pub fn replace(&mut self, route: Route) {
        debug!(?route, "Replace route");
        self.stack.pop();
        self.stack.push(route);
    }

    /// Drops all history and makes `route` the only entry.
    pub fn reset(&mut self, route: Route) {
        debug!(?route, "Reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Returns to the previous route. Returns `false` at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

/// Tabs of the main area, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Booking,
    Pricing,
    Gallery,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Home, Self::Booking, Self::Pricing, Self::Gallery];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Booking => "Booking",
            Self::Pricing => "Pricing",
            Self::Gallery => "Gallery",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_splash() {
        assert_eq!(
            Route::after_splash(SessionStatus::Authenticated),
            Route::Main
        );
        assert_eq!(Route::after_splash(SessionStatus::Anonymous), Route::Login);
    }

    #[test]
    fn test_login_signup_round_trip() {
        let mut nav = Navigator::new(Route::Splash);
        nav.replace(Route::Login);
        nav.push(Route::Signup);
        assert_eq!(nav.current(), Route::Signup);
        assert_eq!(nav.depth(), 2);

        assert!(nav.pop());
        assert_eq!(nav.current(), Route::Login);
        assert!(!nav.pop());
    }

    #[test]
    fn test_reset_clears_history() {
        let mut nav = Navigator::new(Route::Login);
        nav.push(Route::Signup);
        nav.replace(Route::Main);
        nav.reset(Route::Login);

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), Route::Login);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Gallery.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Gallery);
        assert_eq!(Tab::Booking.next(), Tab::Pricing);
    }
}
