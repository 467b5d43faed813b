//! Account creation screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::application::SignupRequest;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::typed_char;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{TextInput, centered_rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    #[default]
    Name,
    Email,
    Password,
    ConfirmPassword,
    SignUp,
    LogIn,
}

impl SignupFocus {
    const ORDER: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::SignUp,
        Self::LogIn,
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

    const fn is_password(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAction {
    None,
    Submit(SignupRequest),
    /// "Already have an account?" link.
    LogIn,
    Back,
}

pub struct SignupScreen {
    name: TextInput,
    email: TextInput,
    password: TextInput,
    confirm_password: TextInput,
    focus: SignupFocus,
    theme: Theme,
}

impl SignupScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut screen = Self {
            name: TextInput::new("Full Name")
                .placeholder("Jane Doe")
                .themed(&theme),
            email: TextInput::new("Email")
                .placeholder("you@example.com")
                .themed(&theme),
            password: TextInput::new("Password")
                .password()
                .placeholder("Create a password")
                .themed(&theme),
            confirm_password: TextInput::new("Confirm Password")
                .password()
                .placeholder("Repeat your password")
                .themed(&theme),
            focus: SignupFocus::Name,
            theme,
        };
        screen.sync_focus();
        screen
    }

    #[must_use]
    pub const fn focus(&self) -> SignupFocus {
        self.focus
    }

    #[must_use]
    pub fn is_password_revealed(&self) -> bool {
        self.password.is_revealed()
    }

    fn request(&self) -> SignupRequest {
        SignupRequest::new(
            self.name.value(),
            self.email.value(),
            self.password.value(),
            self.confirm_password.value(),
        )
    }

    fn sync_focus(&mut self) {
        self.name.set_focused(self.focus == SignupFocus::Name);
        self.email.set_focused(self.focus == SignupFocus::Email);
        self.password.set_focused(self.focus == SignupFocus::Password);
        self.confirm_password
            .set_focused(self.focus == SignupFocus::ConfirmPassword);
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            SignupFocus::Name => Some(&mut self.name),
            SignupFocus::Email => Some(&mut self.email),
            SignupFocus::Password => Some(&mut self.password),
            SignupFocus::ConfirmPassword => Some(&mut self.confirm_password),
            SignupFocus::SignUp | SignupFocus::LogIn => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> SignupAction {
        if let Some(action) = registry.find_action(key) {
            match action {
                Action::FocusNext | Action::NavigateDown => {
                    self.focus = self.focus.step(true);
                    self.sync_focus();
                    return SignupAction::None;
                }
                Action::FocusPrevious | Action::NavigateUp => {
                    self.focus = self.focus.step(false);
                    self.sync_focus();
                    return SignupAction::None;
                }
                Action::TogglePasswordVisibility => {
                    self.password.toggle_reveal();
                    self.confirm_password.toggle_reveal();
                    return SignupAction::None;
                }
                Action::Select => {
                    return if self.focus == SignupFocus::LogIn {
                        SignupAction::LogIn
                    } else {
                        SignupAction::Submit(self.request())
                    };
                }
                Action::Cancel => return SignupAction::Back,
                Action::NavigateLeft => {
                    if let Some(input) = self.focused_input() {
                        input.move_left();
                    }
                    return SignupAction::None;
                }
                Action::NavigateRight => {
                    if let Some(input) = self.focused_input() {
                        input.move_right();
                    }
                    return SignupAction::None;
                }
                _ => {}
            }
        }

        let Some(input) = self.focused_input() else {
            return SignupAction::None;
        };
        if let Some(c) = typed_char(&key) {
            input.input_char(c);
        } else {
            match key.code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
        SignupAction::None
    }
}

impl Widget for &SignupScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(56, 23, area);
        Clear.render(card, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(" WorkNest ", self.theme.accent_style))
            .title_alignment(Alignment::Center);
        let inner = block.inner(card).inner(Margin::new(2, 1));
        block.render(card, buf);

        let [heading, subheading, _, name, email, password, confirm, _, button, login] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new(Line::styled("Create Account", self.theme.accent_style).centered())
            .render(heading, buf);
        Paragraph::new(
            Line::styled("Sign up to start booking workspaces", self.theme.dimmed_style)
                .centered(),
        )
        .render(subheading, buf);

        (&self.name).render(name, buf);
        (&self.email).render(email, buf);
        (&self.password).render(password, buf);
        (&self.confirm_password).render(confirm, buf);

        let button_style = if self.focus == SignupFocus::SignUp {
            self.theme.active_style()
        } else {
            self.theme.accent_style.add_modifier(Modifier::REVERSED)
        };
        Paragraph::new(Line::styled("  Sign Up  ", button_style).centered()).render(button, buf);

        let link_style = if self.focus == SignupFocus::LogIn {
            self.theme.active_style()
        } else {
            self.theme.accent_style.add_modifier(Modifier::UNDERLINED)
        };
        Paragraph::new(
            Line::from(vec![
                Span::styled("Already have an account? ", self.theme.dimmed_style),
                Span::styled(" Log In ", link_style),
            ])
            .centered(),
        )
        .render(login, buf);
    }
}

impl HasCommands for SignupScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut binds = registry.keybinds(&[Action::FocusNext, Action::Select]);
        if self.focus.is_password() {
            binds.extend(registry.keybind(Action::TogglePasswordVisibility));
        }
        binds.extend(registry.keybind(Action::Cancel).map(|k| Keybind {
            label: "Back".into(),
            ..k
        }));
        binds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_fill_and_submit() {
        let registry = CommandRegistry::new();
        let mut screen = SignupScreen::new(Theme::default());

        for field in ["Ann", "ann@example.com", "pw", "pw"] {
            for c in field.chars() {
                screen.handle_key(key(KeyCode::Char(c)), &registry);
            }
            screen.handle_key(key(KeyCode::Tab), &registry);
        }
        assert_eq!(screen.focus(), SignupFocus::SignUp);

        let action = screen.handle_key(key(KeyCode::Enter), &registry);
        assert_eq!(
            action,
            SignupAction::Submit(SignupRequest::new("Ann", "ann@example.com", "pw", "pw"))
        );
    }

    #[test]
    fn test_log_in_link() {
        let registry = CommandRegistry::new();
        let mut screen = SignupScreen::new(Theme::default());

        screen.handle_key(key(KeyCode::Up), &registry);
        assert_eq!(screen.focus(), SignupFocus::LogIn);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &registry),
            SignupAction::LogIn
        );
    }

    #[test]
    fn test_toggle_reveals_both_password_fields() {
        let registry = CommandRegistry::new();
        let mut screen = SignupScreen::new(Theme::default());

        screen.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL), &registry);

        assert!(screen.password.is_revealed());
        assert!(screen.confirm_password.is_revealed());
    }

    #[test]
    fn test_escape_goes_back() {
        let registry = CommandRegistry::new();
        let mut screen = SignupScreen::new(Theme::default());

        assert_eq!(screen.handle_key(key(KeyCode::Esc), &registry), SignupAction::Back);
    }
}
