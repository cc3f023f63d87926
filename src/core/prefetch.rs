//! Eager cache warming.
//!
//! When a session starts, every (category, time window) combination is
//! requested in the background so that later selection changes are
//! served from the cache. Warming is best-effort: a failed prefetch is
//! logged by the cache at debug level and otherwise ignored. It never
//! touches the visible state and never ends the session; only a failure
//! on the selection being viewed does that.

use tracing::debug;

use crate::core::session::Session;
use crate::models::QueryKey;

/// Request the full cross-product of query keys, category-major.
///
/// Runs once per session; later calls return 0 without touching the
/// cache. Returns the number of keys requested. Keys already in the
/// cache are cache hits and issue no new fetch.
pub fn schedule(session: &Session) -> usize {
    if !session.begin_prefetch() {
        return 0;
    }

    let mut requested = 0;
    for key in QueryKey::all() {
        // The cache drives the fetch; the handle is not needed here.
        drop(session.load(key));
        requested += 1;
    }
    debug!(requested, "prefetch scheduled");
    requested
}
