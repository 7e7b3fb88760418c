//! Color palettes for the selection screen.
//!
//! This module maps every visual element of the branch picker to a [`Style`] so the
//! renderer never hard-codes colors. Palettes are picked by name (see
//! [`Theme::by_name`]); `catppuccin` is the default.
//!
//! # Public API
//! - [`Theme`]: Styles for every element of the picker
//! - [`Style`]: Foreground, background and weight applied through `colored`
//! - [`THEME_NAMES`]: Canonical names of the bundled palettes
//!
//! # Palettes
//! - **catppuccin**: Catppuccin Mocha (default)
//! - **nord**: Nord
//! - **classic**: Plain 16-color ANSI for maximum terminal support
//! - **solarized**: Solarized Dark
//! - **gruvbox**: Gruvbox warm tones
//! - **onedark**: One Dark

use colored::{Color, ColoredString, Colorize};

pub const THEME_NAMES: [&str; 6] = [
    "catppuccin",
    "nord",
    "classic",
    "solarized",
    "gruvbox",
    "onedark",
];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    const fn bold(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: true,
        }
    }

    const fn bold_on(color: Color, background: Color) -> Self {
        Self {
            fg: Some(color),
            bg: Some(background),
            bold: true,
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(fg) = self.fg {
            painted = painted.color(fg);
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg);
        }
        if self.bold {
            painted = painted.bold();
        }
        painted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub action_label: Style,
    pub action_description: Style,
    pub branch: Style,
    pub selected: Style,
    pub selected_badge: Style,
    pub badge: Style,
    pub help: Style,
}

pub const CATPPUCCIN: Theme = Theme {
    action_label: Style::bold(rgb(135, 175, 255)),
    action_description: Style::fg(rgb(215, 215, 255)),
    branch: Style::fg(rgb(215, 215, 215)),
    selected: Style::bold_on(rgb(28, 28, 28), rgb(135, 175, 255)),
    selected_badge: Style::bold_on(rgb(175, 215, 175), rgb(135, 175, 255)),
    badge: Style::bold(rgb(175, 215, 175)),
    help: Style::fg(rgb(148, 148, 148)),
};

pub const NORD: Theme = Theme {
    action_label: Style::bold(rgb(135, 215, 215)),
    action_description: Style::fg(rgb(238, 238, 238)),
    branch: Style::fg(rgb(178, 178, 178)),
    selected: Style::bold_on(rgb(238, 238, 238), rgb(95, 135, 175)),
    selected_badge: Style::bold_on(rgb(135, 175, 135), rgb(95, 135, 175)),
    badge: Style::bold(rgb(135, 175, 135)),
    help: Style::fg(rgb(128, 128, 128)),
};

pub const CLASSIC: Theme = Theme {
    action_label: Style::bold(Color::Cyan),
    action_description: Style::fg(Color::White),
    branch: Style::fg(Color::White),
    selected: Style::bold_on(Color::BrightWhite, Color::Blue),
    selected_badge: Style::bold_on(Color::Green, Color::Blue),
    badge: Style::bold(Color::Green),
    help: Style::fg(Color::BrightBlack),
};

pub const SOLARIZED: Theme = Theme {
    action_label: Style::bold(rgb(0, 135, 255)),
    action_description: Style::fg(rgb(255, 255, 215)),
    branch: Style::fg(rgb(128, 128, 128)),
    selected: Style::bold_on(rgb(255, 255, 215), rgb(0, 95, 95)),
    selected_badge: Style::bold_on(rgb(135, 175, 175), rgb(0, 95, 95)),
    badge: Style::bold(rgb(135, 175, 175)),
    help: Style::fg(rgb(118, 118, 118)),
};

pub const GRUVBOX: Theme = Theme {
    action_label: Style::bold(rgb(255, 135, 0)),
    action_description: Style::fg(rgb(255, 215, 175)),
    branch: Style::fg(rgb(188, 188, 188)),
    selected: Style::bold_on(rgb(38, 38, 38), rgb(215, 135, 0)),
    selected_badge: Style::bold_on(rgb(135, 215, 135), rgb(215, 135, 0)),
    badge: Style::bold(rgb(135, 215, 135)),
    help: Style::fg(rgb(128, 128, 128)),
};

pub const ONE_DARK: Theme = Theme {
    action_label: Style::bold(rgb(95, 175, 255)),
    action_description: Style::fg(rgb(218, 218, 218)),
    branch: Style::fg(rgb(188, 188, 188)),
    selected: Style::bold_on(rgb(18, 18, 18), rgb(95, 135, 215)),
    selected_badge: Style::bold_on(rgb(135, 215, 135), rgb(95, 135, 215)),
    badge: Style::bold(rgb(135, 215, 135)),
    help: Style::fg(rgb(148, 148, 148)),
};

impl Default for Theme {
    fn default() -> Self {
        CATPPUCCIN
    }
}

impl Theme {
    /// Resolve a palette by name, case-insensitively. An empty name is the default.
    pub fn by_name(name: &str) -> Option<Theme> {
        match name.trim().to_lowercase().as_str() {
            "" => Some(Theme::default()),
            "catppuccin" | "catppuccin-mocha" | "mocha" => Some(CATPPUCCIN),
            "nord" => Some(NORD),
            "classic" | "ansi" => Some(CLASSIC),
            "solarized" | "solarized-dark" => Some(SOLARIZED),
            "gruvbox" => Some(GRUVBOX),
            "onedark" | "one-dark" => Some(ONE_DARK),
            _ => None,
        }
    }
}
