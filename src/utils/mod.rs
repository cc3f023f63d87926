//! Utility modules for browser, network and executor glue.
//!
//! Provides:
//! - [`fetch_json_authorized`], [`post_form`] - Network fetching; token exchange is time-limited
//! - [`BrowserSpawner`] - `LocalSpawn` over the page's event loop
//! - [`logging`] - `tracing` subscriber writing to the console
//! - [`dom`] - Storage, body class and URL helpers

pub mod dom;
mod fetch;
pub mod logging;
mod spawn;

pub use fetch::{fetch_json_authorized, post_form, race_with_timeout};
pub use spawn::BrowserSpawner;
