//! Spotify listening statistics dashboard.
//!
//! Client-side Leptos app: PKCE login, a per-session query cache warmed by
//! background prefetch, and a dashboard over the user's top tracks and
//! artists for three time windows.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
