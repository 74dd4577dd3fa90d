//! Theme mapping and the few custom widget styles the reader uses.

use al_bayan_core::config::{HighlightColor, ThemeMode};
use iced::widget::container;
use iced::{Background, Border, Color, Theme as IcedTheme};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

pub fn highlight_color(color: HighlightColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Verse card background; the active verse gets the highlight colour.
pub fn verse_card(highlight: Option<Color>) -> impl Fn(&IcedTheme) -> container::Style {
    move |theme: &IcedTheme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(
                highlight.unwrap_or(palette.background.base.color),
            )),
            border: Border {
                color: palette.background.strong.color,
                width: if highlight.is_some() { 1.0 } else { 0.0 },
                radius: 8.0.into(),
            },
            ..container::Style::default()
        }
    }
}

pub fn panel(theme: &IcedTheme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_mode_maps_to_dark_theme() {
        assert_eq!(Theme::from(ThemeMode::Night), Theme::Dark);
        assert_eq!(IcedTheme::from(Theme::from(ThemeMode::Day)), IcedTheme::Light);
    }

    #[test]
    fn highlight_keeps_alpha() {
        let color = highlight_color(HighlightColor {
            r: 0.1,
            g: 0.2,
            b: 0.3,
            a: 0.4,
        });
        assert_eq!(color.a, 0.4);
    }
}
