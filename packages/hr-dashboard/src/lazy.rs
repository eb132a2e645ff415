//! Load-once secondary data, keyed by a parent resource.
//!
//! Used for tabs whose content is only fetched the first time they are shown.
//!
//! ```text
//! NotLoaded ──begin──▶ Loading ──resolve──▶ Loaded | Failed
//!     ▲                                          │
//!     └────────────── parent key changes ────────┘
//! ```
//!
//! `Loaded` and `Failed` are terminal for a given parent key. There is no
//! automatic retry.

use std::future::Future;

use hr_client::{ApiError, Session};
use tracing::{debug, info, warn};

use crate::controller::Ticket;
use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum LazyState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(LoadError),
}

/// What the caller should do after [`LazyLoader::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// Already loading, loaded or failed for this parent.
    Skip,
    /// No session token; the state is now `Failed(Unauthorized)`.
    Denied,
    /// Issue exactly one fetch and hand the ticket back to `resolve`.
    Fetch(Ticket),
}

pub struct LazyLoader<T> {
    label: &'static str,
    parent: Option<String>,
    state: LazyState<T>,
    generation: u64,
}

impl<T> LazyLoader<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            parent: None,
            state: LazyState::NotLoaded,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LazyState<T> {
        &self.state
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, LazyState::Loaded(_) | LazyState::Failed(_))
    }

    /// Point the loader at `key`. A different key resets everything.
    ///
    /// Returns `true` if the key changed.
    pub fn set_parent(&mut self, key: &str) -> bool {
        if self.parent.as_deref() == Some(key) {
            return false;
        }
        debug!(resource = self.label, parent = key, "Parent changed, resetting");
        self.parent = Some(key.to_string());
        self.reset();
        true
    }

    /// Forget loaded data for the current parent and drop in-flight responses.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LazyState::NotLoaded;
    }

    /// Decide whether a fetch is needed for `parent_key`.
    pub fn begin(&mut self, session: &Session, parent_key: &str) -> Begin {
        self.set_parent(parent_key);

        if !matches!(self.state, LazyState::NotLoaded) {
            return Begin::Skip;
        }

        if !session.has_token() {
            warn!(resource = self.label, parent = parent_key, "No session token");
            self.state = LazyState::Failed(LoadError::Unauthorized(self.label));
            return Begin::Denied;
        }

        self.state = LazyState::Loading;
        Begin::Fetch(Ticket::new(self.generation, parent_key))
    }

    /// Apply a response. Returns `false` if the ticket was stale.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<T, ApiError>) -> bool {
        if ticket.generation() != self.generation
            || self.parent.as_deref() != Some(ticket.key())
        {
            debug!(
                resource = self.label,
                parent = ticket.key(),
                "Discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => {
                info!(resource = self.label, parent = ticket.key(), "Loaded");
                LazyState::Loaded(value)
            }
            Err(e) => {
                warn!(resource = self.label, parent = ticket.key(), error = %e, "Load failed");
                LazyState::Failed(LoadError::from_api(self.label, &e))
            }
        };
        true
    }

    /// Load once per parent key. `fetch` is only called when a request is due.
    pub async fn ensure_loaded<F, Fut>(
        &mut self,
        session: &Session,
        parent_key: &str,
        fetch: F,
    ) -> &LazyState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Begin::Fetch(ticket) = self.begin(session, parent_key) {
            let result = fetch().await;
            self.resolve(&ticket, result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::label;

    fn loader() -> LazyLoader<Vec<u32>> {
        LazyLoader::new(label::HISTORY)
    }

    fn session() -> Session {
        Session::with_token("token")
    }

    #[test]
    fn test_begin_once_per_parent() {
        let mut l = loader();
        let ticket = match l.begin(&session(), "42") {
            Begin::Fetch(t) => t,
            other => panic!("expected fetch, got {other:?}"),
        };
        assert_eq!(l.begin(&session(), "42"), Begin::Skip);
        assert!(l.resolve(&ticket, Ok(vec![1])));
        assert_eq!(l.begin(&session(), "42"), Begin::Skip);
        assert_eq!(l.state(), &LazyState::Loaded(vec![1]));
    }

    #[test]
    fn test_missing_token_denies_without_fetch() {
        let mut l = loader();
        assert_eq!(l.begin(&Session::default(), "42"), Begin::Denied);
        assert_eq!(
            l.state(),
            &LazyState::Failed(LoadError::Unauthorized(label::HISTORY))
        );
        // failed is terminal, even once a token shows up
        assert_eq!(l.begin(&session(), "42"), Begin::Skip);
    }

    #[test]
    fn test_parent_change_resets() {
        let mut l = loader();
        if let Begin::Fetch(t) = l.begin(&session(), "1") {
            l.resolve(&t, Err(ApiError::Forbidden));
        }
        assert!(l.is_settled());

        assert!(l.set_parent("2"));
        assert_eq!(l.state(), &LazyState::NotLoaded);
        assert!(!l.set_parent("2"));
        assert!(matches!(l.begin(&session(), "2"), Begin::Fetch(_)));
    }

    #[test]
    fn test_stale_ticket_after_parent_change() {
        let mut l = loader();
        let Begin::Fetch(old) = l.begin(&session(), "1") else {
            panic!("expected fetch");
        };
        let Begin::Fetch(new) = l.begin(&session(), "2") else {
            panic!("expected fetch");
        };

        assert!(!l.resolve(&old, Ok(vec![1])));
        assert_eq!(l.state(), &LazyState::Loading);
        assert!(l.resolve(&new, Ok(vec![2])));
        assert_eq!(l.state(), &LazyState::Loaded(vec![2]));
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut l = loader();
        let Begin::Fetch(t) = l.begin(&session(), "1") else {
            panic!("expected fetch");
        };
        l.reset();
        assert!(!l.resolve(&t, Ok(vec![1])));
        assert_eq!(l.state(), &LazyState::NotLoaded);
    }

    #[tokio::test]
    async fn test_ensure_loaded_fetches_at_most_once() {
        let mut l = loader();
        let mut calls = 0;

        for _ in 0..3 {
            l.ensure_loaded(&session(), "42", || {
                calls += 1;
                async { Ok(vec![7]) }
            })
            .await;
        }

        assert_eq!(calls, 1);
        assert_eq!(l.state(), &LazyState::Loaded(vec![7]));
    }
}
