//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown on the login screen.
pub const APP_NAME: &str = "Spotify Stats";

/// Tagline shown under the application name.
pub const APP_TAGLINE: &str = "View your top artists and tracks.";

// =============================================================================
// Web API Configuration
// =============================================================================

/// Base URL of the Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Number of items requested per top-items page.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;


// =============================================================================
// OAuth Configuration
// =============================================================================

/// Application client id, overridable at build time with `SPOTIFY_CLIENT_ID`.
pub const CLIENT_ID: &str = match option_env!("SPOTIFY_CLIENT_ID") {
    Some(id) => id,
    None => "YOUR_CLIENT_ID_HERE",
};

/// Redirect URI registered for the application.
pub const REDIRECT_URI: &str = match option_env!("SPOTIFY_REDIRECT_URI") {
    Some(uri) => uri,
    None => "http://127.0.0.1:5173/callback",
};

/// Authorization page the user is redirected to.
pub const AUTH_ENDPOINT: &str = "https://accounts.spotify.com/authorize";

/// Token endpoint for the authorization-code exchange.
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";

/// Scopes requested at login.
pub const SCOPES: &[&str] = &["user-top-read", "user-read-private", "user-read-email"];

/// Timeout of the authorization-code exchange, in milliseconds.
pub const TOKEN_TIMEOUT_MS: u32 = 10_000;

/// Length of the generated PKCE code verifier (RFC 7636 allows 43..=128).
pub const PKCE_VERIFIER_LEN: usize = 64;

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage keys.
pub mod storage {
    /// Access token of the current session.
    pub const TOKEN_KEY: &str = "spotify_token";
    /// PKCE code verifier kept across the authorize redirect.
    pub const VERIFIER_KEY: &str = "verifier";
    /// Persisted color scheme.
    pub const THEME_KEY: &str = "theme";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Body class enabling the light color scheme.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Media query used when no theme has been stored yet.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Stagger between card fade-in animations, in seconds.
pub const CARD_ANIMATION_STEP_SECS: f64 = 0.05;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
