//! Keyed single-flight cache for top-items queries.
//!
//! Every [`QueryKey`] maps to at most one entry. The entry holds a shared
//! future for the fetch and, once that future resolves successfully, the
//! resolved list. Concurrent callers with the same key all await the same
//! shared future, so the underlying fetch runs exactly once.
//!
//! The store lives exactly as long as the session that owns it. There is
//! no eviction, no expiry and no removal: the key space is the small fixed
//! cross-product of categories and time windows.
//!
//! All bookkeeping happens synchronously on the calling task. An entry is
//! inserted before the fetch future is first polled, so a second caller
//! arriving before any suspension point always observes it.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use futures::task::{LocalSpawn, LocalSpawnExt};
use tracing::{debug, warn};

use crate::core::error::FetchError;
use crate::models::{QueryKey, ResultList};

/// Outcome of one top-items fetch.
pub type QueryResult = Result<ResultList, FetchError>;

/// Shared handle to an in-flight or settled fetch.
///
/// Cloning is cheap; every clone resolves to the same outcome.
pub type QueryFuture = Shared<LocalBoxFuture<'static, QueryResult>>;

struct CacheEntry {
    promise: QueryFuture,
    /// Set once, when `promise` resolves successfully.
    data: Rc<OnceCell<ResultList>>,
}

/// Session-scoped store of query results.
pub struct QueryCache {
    entries: RefCell<HashMap<String, CacheEntry>>,
    spawner: Rc<dyn LocalSpawn>,
}

impl QueryCache {
    /// Create an empty store whose fetches are driven on `spawner`.
    pub fn new(spawner: Rc<dyn LocalSpawn>) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            spawner,
        }
    }

    /// Return the shared fetch for `key`, starting it with `fetch` if absent.
    ///
    /// An existing entry is returned unconditionally, whether it is still
    /// pending, resolved, or failed; `fetch` is then never called. A failed
    /// entry keeps rejecting with the same error for the rest of the session.
    ///
    /// Errors from `fetch` reach every waiter untouched.
    pub fn get_or_fetch<F, Fut>(&self, key: QueryKey, fetch: F) -> QueryFuture
    where
        F: FnOnce(QueryKey) -> Fut,
        Fut: Future<Output = QueryResult> + 'static,
    {
        let cache_key = key.cache_key();
        if let Some(entry) = self.entries.borrow().get(&cache_key) {
            return entry.promise.clone();
        }

        let data = Rc::new(OnceCell::new());
        let slot = Rc::clone(&data);
        let request = fetch(key);
        let promise = async move {
            let result = request.await;
            if let Ok(items) = &result {
                let _ = slot.set(items.clone());
            }
            result
        }
        .boxed_local()
        .shared();

        self.entries.borrow_mut().insert(
            cache_key,
            CacheEntry {
                promise: promise.clone(),
                data,
            },
        );
        self.drive(key, promise.clone());
        promise
    }

    /// Resolved list for `key`, if its fetch has already succeeded.
    pub fn data(&self, key: QueryKey) -> Option<ResultList> {
        self.entries
            .borrow()
            .get(&key.cache_key())
            .and_then(|entry| entry.data.get().cloned())
    }

    /// Whether an entry (pending, resolved or failed) exists for `key`.
    pub fn contains(&self, key: QueryKey) -> bool {
        self.entries.borrow().contains_key(&key.cache_key())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Poll the entry to completion in the background.
    ///
    /// Futures are lazy; without this, a prefetched entry nobody awaits
    /// would never issue its request.
    fn drive(&self, key: QueryKey, promise: QueryFuture) {
        let task = async move {
            if let Err(err) = promise.await {
                debug!(%key, error = %err, "background fetch failed");
            }
        };
        if let Err(err) = self.spawner.spawn_local(task) {
            warn!(%key, error = %err, "failed to spawn fetch task");
        }
    }
}
