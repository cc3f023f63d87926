//! Test doubles shared by the cache, prefetch and view tests.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::core::cache::QueryResult;
use crate::core::error::FetchError;
use crate::core::spotify::Fetcher;
use crate::models::{Album, Artist, QueryKey, ResultList, TopItem, Track};

/// Fetcher whose requests stay pending until the test resolves them.
#[derive(Default)]
pub struct FakeFetcher {
    calls: RefCell<Vec<(QueryKey, String)>>,
    pending: RefCell<HashMap<QueryKey, Vec<oneshot::Sender<QueryResult>>>>,
    limits: RefCell<Vec<u32>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call and hand back a future completed by [`FakeFetcher::resolve`].
    pub fn request(&self, key: QueryKey) -> LocalBoxFuture<'static, QueryResult> {
        self.start(key, "")
    }

    fn start(&self, key: QueryKey, credential: &str) -> LocalBoxFuture<'static, QueryResult> {
        self.calls.borrow_mut().push((key, credential.to_string()));
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().entry(key).or_default().push(tx);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(FetchError::Network("request dropped".to_string())))
        }
        .boxed_local()
    }

    /// Complete every pending request for `key`.
    pub fn resolve(&self, key: QueryKey, result: QueryResult) {
        let senders = self.pending.borrow_mut().remove(&key).unwrap_or_default();
        for tx in senders {
            let _ = tx.send(result.clone());
        }
    }

    pub fn calls(&self, key: QueryKey) -> usize {
        self.calls.borrow().iter().filter(|(k, _)| *k == key).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Keys in the order they were requested.
    pub fn call_order(&self) -> Vec<QueryKey> {
        self.calls.borrow().iter().map(|(k, _)| *k).collect()
    }

    /// Page sizes passed through [`Fetcher::fetch`], in call order.
    pub fn limits(&self) -> Vec<u32> {
        self.limits.borrow().clone()
    }

    pub fn credentials(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, c)| c.clone()).collect()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(
        &self,
        key: QueryKey,
        credential: &str,
        limit: u32,
    ) -> LocalBoxFuture<'static, QueryResult> {
        self.limits.borrow_mut().push(limit);
        self.start(key, credential)
    }
}

/// `n` distinct tracks with ids `t1..=tn`.
pub fn tracks(n: usize) -> ResultList {
    (1..=n)
        .map(|i| {
            TopItem::Track(Track {
                id: format!("t{i}"),
                name: format!("Track {i}"),
                artists: vec![],
                album: Album {
                    id: format!("al{i}"),
                    name: format!("Album {i}"),
                    images: vec![],
                },
                popularity: None,
                duration_ms: None,
            })
        })
        .collect::<Vec<_>>()
        .into()
}

/// `n` distinct artists with ids `a1..=an`.
pub fn artists(n: usize) -> ResultList {
    (1..=n)
        .map(|i| {
            TopItem::Artist(Artist {
                id: format!("a{i}"),
                name: format!("Artist {i}"),
                images: vec![],
                genres: vec![],
                popularity: None,
            })
        })
        .collect::<Vec<_>>()
        .into()
}
