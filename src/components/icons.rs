//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuLogOut as Logout, LuMoon as Moon, LuMusic as Music, LuSun as Sun, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsMoonFill as Moon, BsMusicNoteBeamed as Music,
        BsPerson as User, BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOGOUT, Logout);
themed_icon!(MOON, Moon);
themed_icon!(MUSIC, Music);
themed_icon!(SUN, Sun);
themed_icon!(USER, User);
