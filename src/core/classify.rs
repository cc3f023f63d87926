//! Failure classification for the visible selection.
//!
//! A failed fetch is either transient (reported, the dashboard stays
//! usable) or means the credential is no longer accepted, in which case
//! the session is terminated through the registered callback.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{error, warn};

use crate::core::error::FetchError;
use crate::models::QueryKey;

/// How a fetch failure affects the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Per-request failure; reported and otherwise ignored
    Transient,
    /// Credential rejected; the session must end
    CredentialExpired,
}

impl Classification {
    pub fn of(err: &FetchError) -> Self {
        if err.is_credential_expired() {
            Self::CredentialExpired
        } else {
            Self::Transient
        }
    }
}

/// Routes failures to reporting or to session termination.
pub struct ErrorClassifier {
    on_expired: Rc<dyn Fn()>,
    terminated: Cell<bool>,
}

impl ErrorClassifier {
    /// `on_expired` runs at most once, on the first expired-credential failure.
    pub fn new(on_expired: impl Fn() + 'static) -> Self {
        Self {
            on_expired: Rc::new(on_expired),
            terminated: Cell::new(false),
        }
    }

    pub fn handle(&self, key: QueryKey, err: &FetchError) -> Classification {
        let class = Classification::of(err);
        match class {
            Classification::Transient => {
                error!(%key, error = %err, "error fetching data");
            }
            Classification::CredentialExpired => {
                if !self.terminated.replace(true) {
                    warn!(%key, "credential rejected, ending session");
                    (self.on_expired)();
                }
            }
        }
        class
    }

    /// Whether the termination callback has fired.
    pub fn is_terminated(&self) -> bool {
        self.terminated.get()
    }
}
