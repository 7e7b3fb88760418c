//! Environment based configuration.
//!
//! The only setting read from the environment is the color theme, taken from
//! `BRANCH_NAVIGATOR_THEME`. An unknown name is not fatal: it is logged and the
//! default palette is used.

use crate::core::theme::{Theme, THEME_NAMES};

pub const THEME_ENV_VAR: &str = "BRANCH_NAVIGATOR_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiConfig {
    pub theme: Theme,
}

impl UiConfig {
    pub fn from_env() -> Self {
        Self::from_theme_name(std::env::var(THEME_ENV_VAR).ok().as_deref())
    }

    pub fn from_theme_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::default();
        };

        match Theme::by_name(name) {
            Some(theme) => Self { theme },
            None => {
                log::warn!(
                    "Unknown theme '{}' in {THEME_ENV_VAR}; available themes: {}",
                    name.trim(),
                    THEME_NAMES.join(", ")
                );
                Self::default()
            }
        }
    }
}
