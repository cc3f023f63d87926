//! Core logic of the dashboard.
//!
//! This module provides:
//! - [`QueryCache`] - session-scoped single-flight result cache
//! - [`Session`] - credential plus cache, torn down on logout
//! - [`prefetch`] - background warming of every query
//! - [`ViewConsumer`] - selection-driven, staleness-guarded consumption
//! - [`ErrorClassifier`] - transient vs. credential-expired failures
//! - [`SpotifyClient`] - Web API fetcher, and [`auth`] for the PKCE login

pub mod auth;
pub mod cache;
mod classify;
pub mod error;
pub mod prefetch;
mod session;
pub mod spotify;
pub mod theme;
mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{QueryCache, QueryFuture, QueryResult};
pub use classify::{Classification, ErrorClassifier};
pub use session::Session;
pub use spotify::{Fetcher, SpotifyClient};
pub use view::{ViewConsumer, ViewSink};
