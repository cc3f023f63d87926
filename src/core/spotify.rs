//! Web API client.
//!
//! [`Fetcher`] is the seam the cache fetches through; [`SpotifyClient`] is
//! the browser implementation. Response bodies are validated against the
//! schema in [`crate::models`] before they reach the cache, so a payload
//! missing a required field surfaces as [`FetchError::Malformed`].

use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;
use crate::core::cache::QueryResult;
use crate::core::error::FetchError;
use crate::models::{Artist, Category, Paging, QueryKey, TopItem, Track, UserProfile};
use crate::utils::fetch_json_authorized;

/// Performs one top-items request for a query.
pub trait Fetcher {
    /// Fetch the top `limit` items for `key` on behalf of `credential`.
    fn fetch(&self, key: QueryKey, credential: &str, limit: u32)
    -> LocalBoxFuture<'static, QueryResult>;
}

/// Client for the `/me` endpoints of the Web API.
#[derive(Clone, Debug)]
pub struct SpotifyClient {
    base_url: String,
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// URL of the top-items endpoint for `key`.
    pub fn top_items_url(&self, key: QueryKey, limit: u32) -> String {
        format!(
            "{}/me/top/{}?time_range={}&limit={}",
            self.base_url, key.category, key.window, limit
        )
    }

    /// Fetch the current user's profile.
    pub async fn profile(&self, credential: &str) -> Result<UserProfile, FetchError> {
        let url = format!("{}/me", self.base_url);
        fetch_json_authorized(&url, credential).await
    }
}

impl Fetcher for SpotifyClient {
    fn fetch(
        &self,
        key: QueryKey,
        credential: &str,
        limit: u32,
    ) -> LocalBoxFuture<'static, QueryResult> {
        let url = self.top_items_url(key, limit);
        let credential = credential.to_string();
        async move {
            let body: serde_json::Value = fetch_json_authorized(&url, &credential).await?;
            parse_top_items(key.category, body)
        }
        .boxed_local()
    }
}

/// Validate a top-items page and project it into a [`crate::models::ResultList`].
pub fn parse_top_items(category: Category, body: serde_json::Value) -> QueryResult {
    let items: Vec<TopItem> = match category {
        Category::Tracks => page::<Track>(body)?.map(TopItem::Track).collect(),
        Category::Artists => page::<Artist>(body)?.map(TopItem::Artist).collect(),
    };
    Ok(items.into())
}

fn page<T: DeserializeOwned>(body: serde_json::Value) -> Result<impl Iterator<Item = T>, FetchError> {
    let paging: Paging<T> = serde_json::from_value(body)?;
    Ok(paging.items.into_iter())
}
