//! Login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::application::LoginRequest;
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::typed_char;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{TextInput, centered_rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Submitting,
    Notice(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    LogIn,
    ForgotPassword,
    CreateAccount,
}

impl LoginFocus {
    const ORDER: [Self; 5] = [
        Self::Email,
        Self::Password,
        Self::LogIn,
        Self::ForgotPassword,
        Self::CreateAccount,
    ];

    fn step(self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit(LoginRequest),
    CreateAccount,
    Quit,
}

/// Email/password form. Fields are not validated.
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: LoginFocus,
    state: LoginState,
    theme: Theme,
}

impl LoginScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut screen = Self {
            email: TextInput::new("Email")
                .placeholder("you@example.com")
                .themed(&theme),
            password: TextInput::new("Password")
                .password()
                .placeholder("Enter your password")
                .themed(&theme),
            focus: LoginFocus::Email,
            state: LoginState::Input,
            theme,
        };
        screen.sync_focus();
        screen
    }

    #[must_use]
    pub const fn state(&self) -> &LoginState {
        &self.state
    }

    #[must_use]
    pub const fn focus(&self) -> LoginFocus {
        self.focus
    }

    #[must_use]
    pub fn is_password_revealed(&self) -> bool {
        self.password.is_revealed()
    }

    pub fn set_submitting(&mut self) {
        self.state = LoginState::Submitting;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error(message.into());
    }

    pub fn reset(&mut self) {
        self.state = LoginState::Input;
    }

    fn request(&self) -> LoginRequest {
        LoginRequest::new(self.email.value(), self.password.value())
    }

    fn sync_focus(&mut self) {
        self.email.set_focused(self.focus == LoginFocus::Email);
        self.password.set_focused(self.focus == LoginFocus::Password);
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = self.focus.step(forward);
        self.sync_focus();
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginFocus::Email => Some(&mut self.email),
            LoginFocus::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn activate(&mut self) -> LoginAction {
        match self.focus {
            LoginFocus::Email | LoginFocus::Password | LoginFocus::LogIn => {
                LoginAction::Submit(self.request())
            }
            LoginFocus::ForgotPassword => {
                self.state = LoginState::Notice("Password reset is not available yet.".into());
                LoginAction::None
            }
            LoginFocus::CreateAccount => LoginAction::CreateAccount,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> LoginAction {
        if self.state == LoginState::Submitting {
            return LoginAction::None;
        }
        if matches!(self.state, LoginState::Error(_) | LoginState::Notice(_)) {
            self.reset();
        }

        if let Some(action) = registry.find_action(key) {
            match action {
                Action::FocusNext | Action::NavigateDown => {
                    self.move_focus(true);
                    return LoginAction::None;
                }
                Action::FocusPrevious | Action::NavigateUp => {
                    self.move_focus(false);
                    return LoginAction::None;
                }
                Action::TogglePasswordVisibility => {
                    self.password.toggle_reveal();
                    return LoginAction::None;
                }
                Action::Select => return self.activate(),
                Action::Cancel | Action::Quit => return LoginAction::Quit,
                Action::NavigateLeft => {
                    if let Some(input) = self.focused_input() {
                        input.move_left();
                    }
                    return LoginAction::None;
                }
                Action::NavigateRight => {
                    if let Some(input) = self.focused_input() {
                        input.move_right();
                    }
                    return LoginAction::None;
                }
                _ => {}
            }
        }

        let Some(input) = self.focused_input() else {
            return LoginAction::None;
        };
        if let Some(c) = typed_char(&key) {
            input.input_char(c);
            return LoginAction::None;
        }
        match key.code {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
        LoginAction::None
    }

    fn link(&self, label: &'static str, focus: LoginFocus) -> Span<'static> {
        if self.focus == focus {
            Span::styled(format!(" {label} "), self.theme.active_style())
        } else {
            Span::styled(
                format!(" {label} "),
                self.theme.accent_style.add_modifier(Modifier::UNDERLINED),
            )
        }
    }

    fn status_line(&self) -> Line<'_> {
        match &self.state {
            LoginState::Input => Line::from(""),
            LoginState::Submitting => Line::from(Span::styled(
                "Signing in...",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            LoginState::Notice(msg) => Line::from(Span::styled(msg.as_str(), self.theme.dimmed_style)),
            LoginState::Error(msg) => Line::from(Span::styled(
                format!("Error: {msg}"),
                self.theme.destructive_style,
            )),
        }
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(56, 20, area);
        Clear.render(card, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(" WorkNest ", self.theme.accent_style))
            .title_alignment(Alignment::Center);
        let inner = block.inner(card).inner(ratatui::layout::Margin::new(2, 1));
        block.render(card, buf);

        let [
            heading,
            subheading,
            _,
            email,
            password,
            _,
            button,
            forgot,
            _,
            signup,
            status,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::styled("Welcome Back", self.theme.accent_style).centered())
            .render(heading, buf);
        Paragraph::new(Line::styled("Log in to your account", self.theme.dimmed_style).centered())
            .render(subheading, buf);

        (&self.email).render(email, buf);
        (&self.password).render(password, buf);

        let button_style = if self.focus == LoginFocus::LogIn {
            self.theme.active_style()
        } else {
            self.theme.accent_style.add_modifier(Modifier::REVERSED)
        };
        Paragraph::new(Line::styled("  Log In  ", button_style).centered()).render(button, buf);

        Paragraph::new(Line::from(self.link("Forgot Password?", LoginFocus::ForgotPassword)).centered())
            .render(forgot, buf);
        Paragraph::new(
            Line::from(vec![
                Span::styled("Don't have an account?", self.theme.dimmed_style),
                self.link("Create an account", LoginFocus::CreateAccount),
            ])
            .centered(),
        )
        .render(signup, buf);

        Paragraph::new(self.status_line().centered()).render(status, buf);
    }
}

impl HasCommands for LoginScreen {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut binds = registry.keybinds(&[Action::FocusNext, Action::Select]);
        if self.focus == LoginFocus::Password {
            binds.extend(registry.keybind(Action::TogglePasswordVisibility));
        }
        binds.extend(registry.keybind(Action::Cancel).map(|k| Keybind {
            label: "Quit".into(),
            ..k
        }));
        binds
    }
}
