//! Dark/light palettes and the theme toggle.
//!
//! Palettes are static data. The viewer holds a [`ThemeController`] and
//! asks it for the active [`Palette`] on every render.
//!
//! Color roles:
//! - Primary: headings, active tab, entry names
//! - Accent: titles, borders, key legend
//! - Text: body copy
//! - Dim: periods, hints, inactive tabs
//! - Background: fill behind everything

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// FIXED STYLES
// ============================================================================

/// Awards keep their color in both themes.
pub const STYLE_AWARD: Style = Style::new().fg(Color::Green);

/// Teaching/research roles keep their color in both themes.
pub const STYLE_ROLE: Style = Style::new().fg(Color::Blue);

// ============================================================================
// PALETTES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub background: Color,
}

pub const DARK: Palette = Palette {
    primary: Color::Rgb(0xFF, 0x5A, 0x5F),
    accent: Color::Rgb(0x00, 0xD9, 0xFF),
    text: Color::Rgb(0xEE, 0xEE, 0xEE),
    dim: Color::Rgb(0x88, 0x88, 0x88),
    background: Color::Rgb(0x1A, 0x1A, 0x1A),
};

pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(0x00, 0x7A, 0x87),
    accent: Color::Rgb(0xC7, 0x78, 0xFF),
    text: Color::Rgb(0x11, 0x11, 0x11),
    dim: Color::Rgb(0x66, 0x66, 0x66),
    background: Color::Rgb(0xF5, 0xF5, 0xF5),
};

impl Palette {
    /// Base fill for the whole frame.
    pub fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::new().fg(self.text)
    }

    pub fn dim(&self) -> Style {
        Style::new().fg(self.dim)
    }
}

// ============================================================================
// TOGGLE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }
}

/// Two-valued theme selection, dark at start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeController {
    name: ThemeName,
}

impl ThemeController {
    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn toggle(&mut self) {
        self.name = match self.name {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        };
    }

    pub fn palette(&self) -> &'static Palette {
        match self.name {
            ThemeName::Dark => &DARK,
            ThemeName::Light => &LIGHT,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
