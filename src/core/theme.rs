//! Theme persistence.
//!
//! The chosen theme is stored in localStorage and applied as a class on
//! `<body>`. Without a stored choice the OS color-scheme preference wins.

use crate::config::LIGHT_MODE_CLASS;
use crate::config::storage::THEME_KEY;
use crate::models::Theme;
use crate::utils::dom;

/// Pick the theme from a stored value, falling back to the OS preference.
pub fn resolve(stored: Option<&str>, prefers_light: bool) -> Theme {
    stored.and_then(Theme::parse).unwrap_or(if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    })
}

/// Theme to start with on page load.
pub fn initial(prefers_light: bool) -> Theme {
    resolve(dom::storage_get(THEME_KEY).as_deref(), prefers_light)
}

/// Apply `theme` to the page and persist it.
pub fn apply(theme: Theme) {
    dom::set_body_class(LIGHT_MODE_CLASS, theme.is_light());
    dom::storage_set(THEME_KEY, theme.as_str());
}
