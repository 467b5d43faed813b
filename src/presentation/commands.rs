use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::Logout,
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL),
            true,
        );

        register(
            Action::GoHome,
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoBooking,
            KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoPricing,
            KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE),
            true,
        );
        register(
            Action::GoGallery,
            KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextTab,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::PreviousTab,
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            true,
        );

        register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Action::FocusPrevious,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            false,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateLeft,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateRight,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );

        register(
            Action::Select,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        register(
            Action::Search,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::ClearDates,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::PreviousMonth,
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextMonth,
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            true,
        );

        register(
            Action::TogglePasswordVisibility,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry and layers user overrides on top.
    ///
    /// Override keys use the `Ctrl+q` / `F5` / `Shift+Tab` notation. Entries
    /// that fail to parse are skipped with a warning.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (binding, action) in overrides {
            match parse_key(binding) {
                Some(key) => registry.bind(key, *action),
                None => warn!(key = %binding, ?action, "Ignoring unparseable keybinding"),
            }
        }
        registry
    }

    /// Binds `key` to `action`, taking precedence over existing bindings.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.input_bindings.insert(0, (key, action));
        self.display_bindings.insert(action, key);
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Returns a footer entry for `action` if it has a display key.
    pub fn keybind(&self, action: Action) -> Option<Keybind> {
        self.get(action)
            .map(|key| Keybind::new(key, action, action.label()))
    }

    /// Returns footer entries for each action that has a display key.
    pub fn keybinds(&self, actions: &[Action]) -> Vec<Keybind> {
        actions.iter().filter_map(|a| self.keybind(*a)).collect()
    }
}

/// Parses `Ctrl+q`, `Alt+Enter`, `F2`, `Esc` style key descriptions.
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts = binding.split('+').map(str::trim).peekable();
    let mut code = None;

    while let Some(part) = parts.next() {
        if parts.peek().is_some() {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
                "alt" | "a" | "meta" => KeyModifiers::ALT,
                "shift" | "s" => KeyModifiers::SHIFT,
                _ => return None,
            };
        } else {
            code = Some(parse_key_code(part)?);
        }
    }

    let code = code?;
    if code == KeyCode::BackTab {
        modifiers |= KeyModifiers::SHIFT;
    }
    Some(KeyEvent::new(code, modifiers))
}

fn parse_key_code(part: &str) -> Option<KeyCode> {
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = part.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => return None,
    };
    Some(code)
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl char")]
    #[test_case("ctrl+alt+x", KeyCode::Char('x'), KeyModifiers::CONTROL.union(KeyModifiers::ALT) ; "two modifiers")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function key")]
    #[test_case("Esc", KeyCode::Esc, KeyModifiers::NONE ; "named key")]
    #[test_case("Shift+Tab", KeyCode::Tab, KeyModifiers::SHIFT ; "shift tab")]
    fn test_parse_key(binding: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(binding), Some(KeyEvent::new(code, modifiers)));
    }

    #[test_case("Hyper+q" ; "unknown modifier")]
    #[test_case("Ctrl+" ; "missing key")]
    #[test_case("Fx" ; "bad function key")]
    #[test_case("" ; "empty")]
    fn test_parse_key_rejects(binding: &str) {
        assert_eq!(parse_key(binding), None);
    }

    #[test]
    fn test_default_bindings() {
        let registry = CommandRegistry::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.find_action(ctrl_c), Some(Action::Quit));

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(registry.find_action(back_tab), Some(Action::FocusPrevious));

        let plain_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(registry.find_action(plain_q), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("Ctrl+s".to_string(), Action::Logout);
        overrides.insert("nonsense+key".to_string(), Action::Quit);

        let registry = CommandRegistry::with_overrides(&overrides);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(registry.find_action(ctrl_s), Some(Action::Logout));
        assert_eq!(registry.get(Action::Logout), Some(ctrl_s));
    }

    #[test]
    fn test_keybinds_skip_unbound() {
        let registry = CommandRegistry::new();
        let binds = registry.keybinds(&[Action::Quit, Action::Search]);

        assert_eq!(binds.len(), 2);
        assert_eq!(binds[0].label, "Quit");
    }
}
