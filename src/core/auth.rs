//! OAuth 2.0 authorization-code login with PKCE (RFC 7636).
//!
//! The flow spans a full page redirect:
//! 1. [`begin_login`] stores a fresh code verifier and sends the browser to
//!    the authorize page with its S256 challenge.
//! 2. The provider redirects back with `?code=...`; [`complete_login`]
//!    trades the code and the stored verifier for an access token.
//!
//! The access token is kept in localStorage until logout.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use url::{Url, form_urlencoded};

use crate::config::storage::{TOKEN_KEY, VERIFIER_KEY};
use crate::config::{
    AUTH_ENDPOINT, CLIENT_ID, PKCE_VERIFIER_LEN, REDIRECT_URI, SCOPES, TOKEN_ENDPOINT,
};
use crate::core::error::AuthError;
use crate::utils::{dom, post_form};

/// Characters allowed in a code verifier.
const UNRESERVED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Reply of the token endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

// =============================================================================
// PKCE Primitives
// =============================================================================

/// Random bytes at or above this bound are discarded; below it each
/// character is hit by exactly three byte values.
const ACCEPT_BELOW: u8 = (256 - 256 % UNRESERVED.len()) as u8;

/// Random code verifier of [`PKCE_VERIFIER_LEN`] unreserved characters.
pub fn generate_verifier() -> Result<String, AuthError> {
    let mut verifier = String::with_capacity(PKCE_VERIFIER_LEN);
    let mut bytes = [0u8; PKCE_VERIFIER_LEN];
    while verifier.len() < PKCE_VERIFIER_LEN {
        getrandom::getrandom(&mut bytes).map_err(|e| AuthError::Random(e.to_string()))?;
        let missing = PKCE_VERIFIER_LEN - verifier.len();
        verifier.extend(unreserved_chars(&bytes).take(missing));
    }
    Ok(verifier)
}

/// Map random bytes onto the unreserved alphabet by rejection sampling.
fn unreserved_chars(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    bytes
        .iter()
        .filter(|b| **b < ACCEPT_BELOW)
        .map(|b| UNRESERVED[*b as usize % UNRESERVED.len()] as char)
}

/// S256 challenge: base64url (unpadded) of the verifier's SHA-256.
pub fn code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

/// URL of the authorize page for this login attempt.
pub fn authorize_url(
    client_id: &str,
    redirect_uri: &str,
    scopes: &[&str],
    challenge: &str,
) -> Result<String, AuthError> {
    let mut url = Url::parse(AUTH_ENDPOINT).map_err(|e| AuthError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", client_id)
        .append_pair("scope", &scopes.join(" "))
        .append_pair("code_challenge_method", "S256")
        .append_pair("code_challenge", challenge)
        .append_pair("redirect_uri", redirect_uri);
    Ok(url.to_string())
}

/// Form body for the authorization-code exchange.
pub fn token_request_body(client_id: &str, code: &str, redirect_uri: &str, verifier: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("grant_type", "authorization_code")
        .append_pair("code", code)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("code_verifier", verifier)
        .finish()
}

// =============================================================================
// Browser Flow
// =============================================================================

/// Store a new verifier and redirect to the authorize page.
pub fn begin_login() -> Result<(), AuthError> {
    let verifier = generate_verifier()?;
    if !dom::storage_set(VERIFIER_KEY, &verifier) {
        return Err(AuthError::StorageUnavailable);
    }
    let url = authorize_url(CLIENT_ID, REDIRECT_URI, SCOPES, &code_challenge(&verifier))?;
    info!("redirecting to authorization page");
    if dom::navigate(&url) {
        Ok(())
    } else {
        Err(AuthError::Navigation)
    }
}

/// Exchange the callback `code` for an access token and persist it.
pub async fn complete_login(code: &str) -> Result<String, AuthError> {
    let verifier = dom::storage_get(VERIFIER_KEY).ok_or(AuthError::MissingVerifier)?;
    let body = token_request_body(CLIENT_ID, code, REDIRECT_URI, &verifier);
    let token: TokenResponse = post_form(TOKEN_ENDPOINT, body).await?;

    if !dom::storage_set(TOKEN_KEY, &token.access_token) {
        warn!("could not persist access token; login lasts for this page only");
    }
    dom::storage_remove(&[VERIFIER_KEY]);
    dom::replace_url("/");
    info!(expires_in = ?token.expires_in, "login complete");
    Ok(token.access_token)
}

/// Token persisted by a previous login.
pub fn stored_token() -> Option<String> {
    dom::storage_get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Forget the stored token and any pending verifier.
pub fn clear_session() {
    dom::storage_remove(&[TOKEN_KEY, VERIFIER_KEY]);
}
