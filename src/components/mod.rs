//! UI components built with Leptos.
//!
//! - [`dashboard`] - Top tracks/artists dashboard for a logged-in user
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`login`] - Landing page with the login button
//! - [`theme_toggle`] - Light/dark switch

pub mod dashboard;
pub mod icons;
pub mod login;
pub mod theme_toggle;

pub use dashboard::Dashboard;
pub use login::Login;
pub use theme_toggle::ThemeToggle;
