//! Selection-driven consumption of the query cache.
//!
//! [`ViewConsumer`] turns selection changes into visible state. Each call
//! to [`ViewConsumer::select`] starts a new generation; an asynchronous
//! result is applied only if its generation is still current when it
//! arrives. A newer selection or [`ViewConsumer::teardown`] therefore
//! discards every outstanding result, so the visible state always
//! converges to the most recent selection regardless of completion order.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use futures::task::LocalSpawnExt;
use tracing::{trace, warn};

use crate::core::classify::ErrorClassifier;
use crate::core::session::Session;
use crate::models::{QueryKey, ResultList};

/// Receiver of visible-state updates.
pub trait ViewSink {
    fn set_loading(&self, loading: bool);
    fn set_items(&self, key: QueryKey, items: ResultList);
}

struct Inner<S> {
    session: Rc<Session>,
    sink: S,
    classifier: ErrorClassifier,
    generation: Cell<u64>,
    torn_down: Cell<bool>,
}

impl<S: ViewSink> Inner<S> {
    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_current(&self, token: u64) -> bool {
        !self.torn_down.get() && self.generation.get() == token
    }

    fn show(&self, key: QueryKey, items: ResultList) {
        self.sink.set_items(key, items);
        self.sink.set_loading(false);
    }
}

/// Projects the cache entry of the current selection into a [`ViewSink`].
pub struct ViewConsumer<S: ViewSink + 'static> {
    inner: Rc<Inner<S>>,
}

impl<S: ViewSink + 'static> ViewConsumer<S> {
    /// `on_expired` is the session-termination callback, run at most once.
    pub fn new(session: Rc<Session>, sink: S, on_expired: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                session,
                sink,
                classifier: ErrorClassifier::new(on_expired),
                generation: Cell::new(0),
                torn_down: Cell::new(false),
            }),
        }
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.inner.session
    }

    /// React to a new selection.
    ///
    /// A resolved cache entry is shown immediately without a fetch and
    /// without entering the loading state. Otherwise loading is set and the
    /// (possibly shared) fetch is awaited in the background.
    pub fn select(&self, key: QueryKey) {
        if self.inner.torn_down.get() {
            return;
        }
        let token = self.inner.next_generation();

        if let Some(items) = self.inner.session.cached(key) {
            self.inner.show(key, items);
            return;
        }

        self.inner.sink.set_loading(true);
        let promise = self.inner.session.load(key);
        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        let task = async move {
            let result = promise.await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.is_current(token) {
                trace!(%key, "discarding stale result");
                return;
            }
            match result {
                Ok(items) => inner.show(key, items),
                Err(err) => {
                    inner.sink.set_loading(false);
                    inner.sink.set_items(key, ResultList::default());
                    inner.classifier.handle(key, &err);
                }
            }
        };
        if let Err(err) = self.inner.session.spawner().spawn_local(task) {
            warn!(%key, error = %err, "failed to spawn view task");
        }
    }

    /// Invalidate every outstanding result; later selections are ignored.
    pub fn teardown(&self) {
        self.inner.torn_down.set(true);
        self.inner.next_generation();
    }

    /// Whether the session-termination callback has fired.
    pub fn is_terminated(&self) -> bool {
        self.inner.classifier.is_terminated()
    }
}
