//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::{
    CheckSessionUseCase, LoginRequest, LoginUseCase, LogoutUseCase, Session, SessionSource,
    SignupRequest, SignupUseCase,
};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::{CatalogPort, KeyValueStore};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventResult, is_force_quit, key_press};
use crate::presentation::navigation::{Navigator, Route};
use crate::presentation::theme::Theme;
use crate::presentation::ui::login_screen::{LoginAction, LoginScreen};
use crate::presentation::ui::main_screen::{MainAction, MainScreen};
use crate::presentation::ui::signup_screen::{SignupAction, SignupScreen};
use crate::presentation::ui::splash_screen::SplashScreen;
use crate::presentation::widgets::{FooterBar, FooterBarStyle};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Messages from background tasks to the event loop.
#[derive(Debug)]
enum AppEvent {
    /// Session check and splash delay both finished.
    SplashFinished(Session),
}

enum CurrentScreen {
    Splash(SplashScreen),
    Login(LoginScreen),
    Signup(SignupScreen),
    Main(Box<MainScreen>),
}

/// Display options taken from the configuration.
#[derive(Debug, Clone, Copy)]
struct UiOptions {
    splash_delay: Duration,
    animations: bool,
    amenity_preview: usize,
}

pub struct App {
    running: bool,
    navigator: Navigator,
    screen: CurrentScreen,
    session: Session,
    catalog: Arc<dyn CatalogPort>,
    check_session: Arc<CheckSessionUseCase>,
    login_use_case: LoginUseCase,
    signup_use_case: SignupUseCase,
    logout_use_case: LogoutUseCase,
    registry: CommandRegistry,
    theme: Theme,
    options: UiOptions,
    splash_task: Option<JoinHandle<()>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogPort>,
        config: &AppConfig,
    ) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        let options = UiOptions {
            splash_delay: config.splash_delay(),
            animations: config.ui.enable_animations,
            amenity_preview: config.ui.amenity_preview,
        };
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            navigator: Navigator::new(Route::Splash),
            screen: CurrentScreen::Splash(SplashScreen::new(theme, options.animations)),
            session: Session::default(),
            catalog,
            check_session: Arc::new(CheckSessionUseCase::new(Arc::clone(&store))),
            login_use_case: LoginUseCase::new(Arc::clone(&store)),
            signup_use_case: SignupUseCase::new(),
            logout_use_case: LogoutUseCase::new(store),
            registry: CommandRegistry::with_overrides(&config.keybindings),
            theme,
            options,
            splash_task: None,
            event_tx,
            event_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_splash();
        let result = self.run_event_loop(terminal).await;
        self.cancel_splash();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }
                _ = animation_interval.tick() => {
                    if let CurrentScreen::Splash(splash) = &mut self.screen {
                        splash.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(&event).await == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    /// Checks the stored session in the background and reports back after
    /// the splash delay, whatever the outcome.
    fn start_splash(&mut self) {
        let check_session = Arc::clone(&self.check_session);
        let tx = self.event_tx.clone();
        let delay = self.options.splash_delay;

        debug!(?delay, "Starting splash gate");
        self.splash_task = Some(tokio::spawn(async move {
            let session = check_session.execute().await;
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::SplashFinished(session)).is_err() {
                debug!("Splash result dropped, event loop is gone");
            }
        }));
    }

    fn cancel_splash(&mut self) {
        if let Some(task) = self.splash_task.take()
            && !task.is_finished()
        {
            debug!("Cancelling pending splash gate");
            task.abort();
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SplashFinished(session) => {
                self.splash_task = None;
                if self.navigator.current() != Route::Splash {
                    return;
                }
                let route = Route::after_splash(session.status());
                info!(status = ?session.status(), ?route, "Session check finished");
                self.session = session;
                self.navigator.replace(route);
                self.show_current();
            }
        }
    }

    async fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match key_press(event) {
            Some(key) => self.handle_key(key).await,
            None => EventResult::Continue,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if is_force_quit(&key) || self.registry.find_action(key) == Some(Action::Quit) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Splash(_) => {}
            CurrentScreen::Login(screen) => match screen.handle_key(key, &self.registry) {
                LoginAction::None => {}
                LoginAction::Submit(request) => self.login(request).await,
                LoginAction::CreateAccount => self.navigate(Route::Signup),
                LoginAction::Quit => return EventResult::Exit,
            },
            CurrentScreen::Signup(screen) => match screen.handle_key(key, &self.registry) {
                SignupAction::None => {}
                SignupAction::Submit(request) => self.signup(&request),
                SignupAction::LogIn => self.replace(Route::Login),
                SignupAction::Back => {
                    if self.navigator.pop() {
                        self.show_current();
                    }
                }
            },
            CurrentScreen::Main(screen) => {
                if screen.handle_key(key, &self.registry) == MainAction::Logout {
                    self.logout().await;
                }
            }
        }

        EventResult::Continue
    }

    async fn login(&mut self, request: LoginRequest) {
        if let CurrentScreen::Login(screen) = &mut self.screen {
            screen.set_submitting();
        }

        match self.login_use_case.execute(request).await {
            Ok(session) => {
                self.session = session;
                self.replace(Route::Main);
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                if let CurrentScreen::Login(screen) = &mut self.screen {
                    screen.set_error(e.to_string());
                }
            }
        }
    }

    fn signup(&mut self, request: &SignupRequest) {
        self.session = self.signup_use_case.execute(request);
        self.replace(Route::Main);
    }

    async fn logout(&mut self) {
        let failure = match self.logout_use_case.execute().await {
            Ok(session) => {
                self.session = session;
                None
            }
            Err(e) => {
                warn!(error = %e, "Could not remove stored session");
                self.session = Session::anonymous(SessionSource::Logout);
                Some(e)
            }
        };

        self.navigator.reset(Route::Login);
        self.show_current();

        if let (Some(e), CurrentScreen::Login(screen)) = (failure, &mut self.screen) {
            screen.set_error(format!("signed out, but the saved session remains: {e}"));
        }
    }

    fn navigate(&mut self, route: Route) {
        self.navigator.push(route);
        self.show_current();
    }

    fn replace(&mut self, route: Route) {
        self.navigator.replace(route);
        self.show_current();
    }

    /// Builds the screen for the navigator's current route.
    fn show_current(&mut self) {
        let route = self.navigator.current();
        info!(?route, source = %self.session.source(), "Showing screen");
        self.screen = match route {
            Route::Splash => {
                CurrentScreen::Splash(SplashScreen::new(self.theme, self.options.animations))
            }
            Route::Login => CurrentScreen::Login(LoginScreen::new(self.theme)),
            Route::Signup => CurrentScreen::Signup(SignupScreen::new(self.theme)),
            Route::Main => CurrentScreen::Main(Box::new(MainScreen::new(
                &self.catalog,
                &self.registry,
                self.theme,
                self.options.amenity_preview,
            ))),
        };
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        match &mut self.screen {
            CurrentScreen::Splash(splash) => frame.render_widget(splash, area),
            CurrentScreen::Login(screen) => {
                frame.render_widget(&*screen, body);
                let binds = screen.get_commands(&self.registry);
                render_footer(frame, footer, &binds, "login", &self.theme);
            }
            CurrentScreen::Signup(screen) => {
                frame.render_widget(&*screen, body);
                let binds = screen.get_commands(&self.registry);
                render_footer(frame, footer, &binds, "sign up", &self.theme);
            }
            CurrentScreen::Main(screen) => {
                frame.render_widget(&**screen, body);
                let binds = screen.get_commands(&self.registry);
                render_footer(frame, footer, &binds, screen.context(), &self.theme);
            }
        }
    }
}

fn render_footer(frame: &mut Frame, area: Rect, binds: &[Keybind], context: &str, theme: &Theme) {
    frame.render_widget(
        FooterBar::new(binds)
            .context(Some(context))
            .right_info(Some(crate::VERSION))
            .style(FooterBarStyle::from_theme(theme)),
        area,
    );
}
