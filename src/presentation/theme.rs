//! Color palette derived from the configured accent.

use std::str::FromStr;

use coolor::Rgb;
use ratatui::style::{Color, Modifier, Style};

/// Brand teal.
pub const DEFAULT_ACCENT: Color = Color::Rgb(0x29, 0xa7, 0xa4);
/// Warm highlight used for the selected range.
const RANGE_HIGHLIGHT: Color = Color::Rgb(0xf9, 0xd1, 0x88);
const DESTRUCTIVE: Color = Color::Rgb(0xdc, 0x26, 0x26);
const MUTED: Color = Color::Rgb(0x5a, 0x6a, 0x7a);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub accent_style: Style,
    pub selection_style: Style,
    pub key_style: Style,
    pub range_style: Style,
    pub endpoint_style: Style,
    pub dimmed_style: Style,
    pub destructive_style: Style,
    pub success_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code. Unknown values fall back
    /// to the brand teal.
    #[must_use]
    pub fn new(accent: &str) -> Self {
        Self::from_color(parse_color(accent))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = shade(accent, 0.2, 0.35);
        let key_bg = shade(accent, 0.08, 0.5);

        Self {
            accent,
            accent_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            range_style: Style::default().bg(RANGE_HIGHLIGHT).fg(Color::Black),
            endpoint_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(MUTED),
            destructive_style: Style::default()
                .fg(DESTRUCTIVE)
                .add_modifier(Modifier::BOLD),
            success_style: Style::default().fg(Color::Green),
            base_style: Style::default().fg(Color::Reset),
        }
    }

    /// Style for a focused or active control.
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a control, depending on focus.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn parse_color(s: &str) -> Color {
    Color::from_str(s.trim()).unwrap_or(DEFAULT_ACCENT)
}

/// Re-lights `color` in HSL space. Non-RGB colors are approximated through
/// their usual 16-color values.
fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Red | Color::LightRed => (170, 0, 0),
        Color::Green | Color::LightGreen => (0, 170, 0),
        Color::Yellow | Color::LightYellow => (170, 85, 0),
        Color::Blue | Color::LightBlue => (0, 0, 170),
        Color::Magenta | Color::LightMagenta => (170, 0, 170),
        Color::Cyan | Color::LightCyan => (0, 170, 170),
        _ => (85, 85, 85),
    };

    let mut hsl = Rgb::new(r, g, b).to_hsl();
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#29a7a4"), DEFAULT_ACCENT);
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("not-a-color"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_shade_darkens() {
        let Color::Rgb(r, g, b) = shade(Color::Rgb(200, 200, 255), 0.1, 0.5) else {
            panic!("expected rgb");
        };
        assert!(u16::from(r) + u16::from(g) + u16::from(b) < 200);
    }

    #[test]
    fn test_theme_uses_accent() {
        let theme = Theme::new("#ff0000");
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.endpoint_style.bg, Some(Color::Rgb(255, 0, 0)));
    }
}
