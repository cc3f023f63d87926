//! End-to-end session scenarios on a tokio `LocalSet`.
//!
//! These drive the public API the way the dashboard does: build a
//! session, schedule prefetch, then feed selections to a view consumer
//! while fetches resolve in an order the test controls.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{LocalBoxFuture, LocalFutureObj};
use futures::task::{LocalSpawn, SpawnError};

use spotify_stats::core::error::FetchError;
use spotify_stats::core::{Fetcher, QueryResult, Session, ViewConsumer, ViewSink, prefetch};
use spotify_stats::models::{
    Album, Artist, ArtistRef, Category, QueryKey, ResultList, TimeWindow, TopItem, Track,
};

struct TokioSpawner;

impl LocalSpawn for TokioSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        tokio::task::spawn_local(future);
        Ok(())
    }
}

/// Fetcher whose responses are released by the test.
#[derive(Default)]
struct ScriptedFetcher {
    pending: RefCell<HashMap<QueryKey, Vec<oneshot::Sender<QueryResult>>>>,
    calls: RefCell<Vec<(QueryKey, String)>>,
}

impl ScriptedFetcher {
    fn resolve(&self, key: QueryKey, result: QueryResult) {
        let senders = self.pending.borrow_mut().remove(&key).unwrap_or_default();
        assert!(!senders.is_empty(), "no pending fetch for {key}");
        for tx in senders {
            let _ = tx.send(result.clone());
        }
    }

    fn calls_for(&self, key: QueryKey) -> usize {
        self.calls.borrow().iter().filter(|(k, _)| *k == key).count()
    }

    fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(
        &self,
        key: QueryKey,
        credential: &str,
        _limit: u32,
    ) -> LocalBoxFuture<'static, QueryResult> {
        self.calls.borrow_mut().push((key, credential.to_string()));
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().entry(key).or_default().push(tx);
        async move { rx.await.unwrap_or(Err(FetchError::ResponseReadFailed)) }.boxed_local()
    }
}

#[derive(Clone, Default)]
struct Recorder {
    loading: Rc<Cell<bool>>,
    loading_history: Rc<RefCell<Vec<bool>>>,
    shown: Rc<RefCell<Vec<(QueryKey, ResultList)>>>,
}

impl Recorder {
    fn last_shown(&self) -> Option<(QueryKey, ResultList)> {
        self.shown.borrow().last().cloned()
    }
}

impl ViewSink for Recorder {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
        self.loading_history.borrow_mut().push(loading);
    }

    fn set_items(&self, key: QueryKey, items: ResultList) {
        self.shown.borrow_mut().push((key, items));
    }
}

fn tracks(n: usize) -> ResultList {
    (1..=n)
        .map(|i| {
            TopItem::Track(Track {
                id: format!("t{i}"),
                name: format!("Track {i}"),
                artists: vec![ArtistRef {
                    id: format!("ar{i}"),
                    name: format!("Artist {i}"),
                }],
                album: Album {
                    id: format!("al{i}"),
                    name: format!("Album {i}"),
                    images: Vec::new(),
                },
                popularity: None,
                duration_ms: None,
            })
        })
        .collect()
}

fn artists(n: usize) -> ResultList {
    (1..=n)
        .map(|i| {
            TopItem::Artist(Artist {
                id: format!("a{i}"),
                name: format!("Artist {i}"),
                images: Vec::new(),
                genres: vec!["indie".to_string()],
                popularity: None,
            })
        })
        .collect()
}

/// Let every spawned task run until it blocks again.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

struct Harness {
    fetcher: Rc<ScriptedFetcher>,
    session: Rc<Session>,
    sink: Recorder,
    consumer: ViewConsumer<Recorder>,
    expired: Rc<Cell<usize>>,
}

fn start_session(credential: &str) -> Harness {
    let fetcher = Rc::new(ScriptedFetcher::default());
    let session = Rc::new(Session::new(
        credential,
        Rc::clone(&fetcher) as Rc<dyn Fetcher>,
        Rc::new(TokioSpawner),
    ));
    let sink = Recorder::default();
    let expired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&expired);
    let consumer = ViewConsumer::new(Rc::clone(&session), sink.clone(), move || {
        counter.set(counter.get() + 1)
    });
    Harness {
        fetcher,
        session,
        sink,
        consumer,
        expired,
    }
}

const TRACKS_MEDIUM: QueryKey = QueryKey::new(Category::Tracks, TimeWindow::Medium);
const ARTISTS_SHORT: QueryKey = QueryKey::new(Category::Artists, TimeWindow::Short);

#[tokio::test(flavor = "current_thread")]
async fn test_dashboard_scenario() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let h = start_session("T1");

            assert_eq!(prefetch::schedule(&h.session), 6);
            h.consumer.select(TRACKS_MEDIUM);
            assert!(h.sink.loading.get());
            // Visible selection joined the prefetch request.
            assert_eq!(h.fetcher.total_calls(), 6);
            assert!(h.fetcher.calls.borrow().iter().all(|(_, c)| c == "T1"));

            h.fetcher.resolve(ARTISTS_SHORT, Ok(artists(20)));
            settle().await;
            assert!(h.sink.loading.get(), "still waiting on tracks");

            let history_len = h.sink.loading_history.borrow().len();
            h.consumer.select(ARTISTS_SHORT);
            let (key, items) = h.sink.last_shown().expect("artists shown");
            assert_eq!(key, ARTISTS_SHORT);
            assert_eq!(items.len(), 20);
            assert!(!h.sink.loading.get());
            assert!(
                h.sink.loading_history.borrow()[history_len..]
                    .iter()
                    .all(|l| !l),
                "loading never observed for a prefetched key"
            );
            for (rank, item) in (1..).zip(items.iter()) {
                assert_eq!(item.id(), format!("a{rank}"));
            }

            h.fetcher.resolve(TRACKS_MEDIUM, Ok(tracks(20)));
            settle().await;
            let (key, _) = h.sink.last_shown().expect("still artists");
            assert_eq!(key, ARTISTS_SHORT);
            assert!(!h.sink.loading.get());

            // The discarded result still landed in the cache.
            assert_eq!(h.session.cached(TRACKS_MEDIUM).map(|l| l.len()), Some(20));
            h.consumer.select(TRACKS_MEDIUM);
            let (key, items) = h.sink.last_shown().expect("tracks shown");
            assert_eq!(key, TRACKS_MEDIUM);
            assert_eq!(items[0].id(), "t1");
            assert_eq!(items[19].id(), "t20");
            assert_eq!(h.fetcher.calls_for(TRACKS_MEDIUM), 1);
            assert_eq!(h.expired.get(), 0);
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_last_selection_wins_out_of_order() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let h = start_session("T1");
            let first = QueryKey::new(Category::Tracks, TimeWindow::Short);
            let second = QueryKey::new(Category::Tracks, TimeWindow::Long);

            h.consumer.select(first);
            h.consumer.select(second);
            h.fetcher.resolve(second, Ok(tracks(3)));
            settle().await;
            h.fetcher.resolve(first, Ok(tracks(7)));
            settle().await;

            let (key, items) = h.sink.last_shown().expect("second shown");
            assert_eq!(key, second);
            assert_eq!(items.len(), 3);
            assert!(h.sink.shown.borrow().iter().all(|(k, _)| *k != first));
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_expired_credential_terminates_once() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let h = start_session("T1");
            prefetch::schedule(&h.session);

            // Prefetch failure for a key nobody is looking at stays silent.
            h.fetcher.resolve(ARTISTS_SHORT, Err(FetchError::Unauthorized));
            settle().await;
            assert_eq!(h.expired.get(), 0);

            h.consumer.select(TRACKS_MEDIUM);
            h.fetcher.resolve(TRACKS_MEDIUM, Err(FetchError::Unauthorized));
            settle().await;
            assert_eq!(h.expired.get(), 1);
            assert!(h.consumer.is_terminated());
            assert!(!h.sink.loading.get());

            h.consumer.select(ARTISTS_SHORT);
            settle().await;
            assert_eq!(h.expired.get(), 1);
        })
        .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_generic_failure_shows_empty_without_terminating() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let h = start_session("T1");

            h.consumer.select(TRACKS_MEDIUM);
            h.fetcher.resolve(TRACKS_MEDIUM, Err(FetchError::Http(500)));
            settle().await;

            let (key, items) = h.sink.last_shown().expect("empty list shown");
            assert_eq!(key, TRACKS_MEDIUM);
            assert!(items.is_empty());
            assert!(!h.sink.loading.get());
            assert_eq!(h.expired.get(), 0);

            // Re-selecting replays the settled failure without a new request.
            h.consumer.select(TRACKS_MEDIUM);
            settle().await;
            assert_eq!(h.fetcher.calls_for(TRACKS_MEDIUM), 1);
            assert!(!h.sink.loading.get());
        })
        .await;
}
