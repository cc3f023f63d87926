//! Logged-in session: one credential plus the cache built for it.
//!
//! A [`Session`] is created when a credential becomes available and
//! dropped wholesale on logout. A later login builds a fresh one, so no
//! cached result ever outlives the credential it was fetched with.

use std::cell::Cell;
use std::rc::Rc;

use futures::task::LocalSpawn;

use crate::config::DEFAULT_PAGE_LIMIT;
use crate::core::cache::{QueryCache, QueryFuture};
use crate::core::spotify::Fetcher;
use crate::models::{QueryKey, ResultList};

pub struct Session {
    credential: String,
    fetcher: Rc<dyn Fetcher>,
    spawner: Rc<dyn LocalSpawn>,
    cache: QueryCache,
    limit: u32,
    prefetched: Cell<bool>,
}

impl Session {
    pub fn new(
        credential: impl Into<String>,
        fetcher: Rc<dyn Fetcher>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        Self {
            credential: credential.into(),
            fetcher,
            cache: QueryCache::new(Rc::clone(&spawner)),
            spawner,
            limit: DEFAULT_PAGE_LIMIT,
            prefetched: Cell::new(false),
        }
    }

    /// Override the page size requested per query.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn spawner(&self) -> &Rc<dyn LocalSpawn> {
        &self.spawner
    }

    /// Shared fetch for `key`, issuing the request only on a cache miss.
    pub fn load(&self, key: QueryKey) -> QueryFuture {
        self.cache.get_or_fetch(key, |key| {
            self.fetcher.fetch(key, &self.credential, self.limit)
        })
    }

    /// Already-resolved list for `key`.
    pub fn cached(&self, key: QueryKey) -> Option<ResultList> {
        self.cache.data(key)
    }

    /// Mark prefetch as started; `false` if it already ran for this session.
    pub(crate) fn begin_prefetch(&self) -> bool {
        !self.prefetched.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeFetcher, tracks};
    use crate::models::{Category, TimeWindow};
    use futures::executor::LocalPool;

    #[test]
    fn test_load_passes_credential() {
        let mut pool = LocalPool::new();
        let fetcher = Rc::new(FakeFetcher::new());
        let session = Session::new("T1", fetcher.clone(), Rc::new(pool.spawner()));
        let key = QueryKey::new(Category::Tracks, TimeWindow::Long);

        let _ = session.load(key);
        let _ = session.load(key);
        fetcher.resolve(key, Ok(tracks(2)));
        pool.run_until_stalled();

        assert_eq!(fetcher.credentials(), vec!["T1".to_string()]);
        assert_eq!(session.cached(key).map(|d| d.len()), Some(2));
        assert_eq!(session.credential(), "T1");
    }

    #[test]
    fn test_new_session_starts_empty() {
        let pool = LocalPool::new();
        let fetcher = Rc::new(FakeFetcher::new());
        let key = QueryKey::default();

        let first = Session::new("T1", fetcher.clone(), Rc::new(pool.spawner()));
        let _ = first.load(key);
        drop(first);

        let second = Session::new("T2", fetcher.clone(), Rc::new(pool.spawner()));
        assert!(second.cache().is_empty());
        let _ = second.load(key);
        assert_eq!(fetcher.calls(key), 2);
    }

    #[test]
    fn test_page_limit_reaches_fetcher() {
        let pool = LocalPool::new();
        let fetcher = Rc::new(FakeFetcher::new());
        let default = Session::new("T1", fetcher.clone(), Rc::new(pool.spawner()));
        let small = Session::new("T1", fetcher.clone(), Rc::new(pool.spawner())).with_limit(5);
        let key = QueryKey::default();

        let _ = default.load(key);
        let _ = small.load(key);
        assert_eq!(fetcher.limits(), vec![DEFAULT_PAGE_LIMIT, 5]);
    }

    #[test]
    fn test_begin_prefetch_once() {
        let pool = LocalPool::new();
        let session = Session::new("T1", Rc::new(FakeFetcher::new()), Rc::new(pool.spawner()));
        assert!(session.begin_prefetch());
        assert!(!session.begin_prefetch());
    }
}
