use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::theme::Theme;

const LOGO_TEXT: &str = "
██     ██  ██████  ██████  ██   ██ ███    ██ ███████ ███████ ████████
██     ██ ██    ██ ██   ██ ██  ██  ████   ██ ██      ██         ██
██  █  ██ ██    ██ ██████  █████   ██ ██  ██ █████   ███████    ██
██ ███ ██ ██    ██ ██   ██ ██  ██  ██  ██ ██ ██           ██    ██
 ███ ███   ██████  ██   ██ ██   ██ ██   ████ ███████ ███████    ██";

const TAGLINE: &str = "Workspace Booking Platform";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME: Duration = Duration::from_millis(80);

/// Brand screen shown while the stored session is checked. The handover is
/// driven from outside; this only animates.
pub struct SplashScreen {
    intro_effect: Option<Effect>,
    intro_finished: bool,
    pending_duration: Duration,
    elapsed: Duration,
    theme: Theme,
}

impl SplashScreen {
    #[must_use]
    pub fn new(theme: Theme, animate: bool) -> Self {
        Self {
            intro_effect: animate.then(|| fx::coalesce((800, Interpolation::CircOut))),
            intro_finished: !animate,
            pending_duration: Duration::ZERO,
            elapsed: Duration::ZERO,
            theme,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
        self.elapsed = self.elapsed.saturating_add(duration);
    }

    #[must_use]
    pub const fn intro_finished(&self) -> bool {
        self.intro_finished
    }

    fn spinner_frame(&self) -> &'static str {
        let frame = self.elapsed.as_millis() / SPINNER_FRAME.as_millis();
        #[allow(clippy::cast_possible_truncation)]
        SPINNER[(frame as usize) % SPINNER.len()]
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = Text::from(LOGO_TEXT.trim_matches('\n'))
            .style(self.theme.accent_style)
            .centered();
        let logo_height = u16::try_from(logo.lines.len()).unwrap_or(0);

        let [_, logo_area, _, tagline_area, _, spinner_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(logo_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(logo).render(logo_area, buf);
        Paragraph::new(Line::styled(TAGLINE, self.theme.dimmed_style).centered())
            .render(tagline_area, buf);
        Paragraph::new(Line::styled(self.spinner_frame(), self.theme.accent_style).centered())
            .render(spinner_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = self.intro_effect.as_mut()
            && !self.intro_finished
        {
            let overflow = effect.process(duration.into(), buf, logo_area);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_with_ticks() {
        let mut splash = SplashScreen::new(Theme::default(), false);
        let first = splash.spinner_frame();

        splash.tick(SPINNER_FRAME);
        assert_ne!(splash.spinner_frame(), first);
    }

    #[test]
    fn test_without_animation_intro_is_done() {
        let splash = SplashScreen::new(Theme::default(), false);
        assert!(splash.intro_finished());
    }

    #[test]
    fn test_render_shows_tagline() {
        let mut splash = SplashScreen::new(Theme::default(), false);
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);

        (&mut splash).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains(TAGLINE));
    }
}
