//! Network fetching utilities.
//!
//! Thin wrappers over `gloo-net` that map failures into [`FetchError`].
//!
//! Authorized API reads carry no timeout of their own; a slow response is
//! left to the transport. Only the one-shot token exchange is raced
//! against [`TOKEN_TIMEOUT_MS`].

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::TOKEN_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Timeout Racing
// =============================================================================

/// Race a request against a timeout.
///
/// # Returns
/// * the request's own outcome if it settles first
/// * `FetchError::Timeout` if `timeout_ms` elapses first
pub async fn race_with_timeout<T, F>(request: F, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let request = pin!(request);
    let timeout = pin!(TimeoutFuture::new(timeout_ms));
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// GET a JSON resource with a bearer token.
///
/// A 401 response maps to [`FetchError::Unauthorized`].
pub async fn fetch_json_authorized<T: DeserializeOwned>(
    url: &str,
    token: &str,
) -> Result<T, FetchError> {
    let resp = Request::get(url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let text = read_body(resp).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a url-encoded form and parse the JSON reply.
///
/// Fails with [`FetchError::Timeout`] after [`TOKEN_TIMEOUT_MS`].
pub async fn post_form<T: DeserializeOwned>(url: &str, body: String) -> Result<T, FetchError> {
    let request = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let text = race_with_timeout(
        async move {
            let resp = request
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            read_body(resp).await
        },
        TOKEN_TIMEOUT_MS,
    )
    .await?;
    Ok(serde_json::from_str(&text)?)
}

async fn read_body(resp: Response) -> Result<String, FetchError> {
    if !resp.ok() {
        return Err(FetchError::from_status(resp.status()));
    }
    resp.text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)
}
