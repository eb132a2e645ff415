//! Loading/error/data state for one primary resource.
//!
//! A controller owns exactly one [`Resource`]. Every fetch is stamped with a
//! generation; a response whose generation is no longer current is dropped,
//! so a slow answer for a superseded key never overwrites newer state.

use std::future::Future;

use hr_client::ApiError;
use tracing::{debug, info, warn};

use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Fetched server state for one identity key.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    pub key: Option<String>,
    pub status: LoadStatus,
    pub payload: Option<T>,
    pub error: Option<LoadError>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            key: None,
            status: LoadStatus::Idle,
            payload: None,
            error: None,
        }
    }
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(LoadError::message)
    }
}

/// Proof that a fetch was started. Handed back when the response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: String,
}

impl Ticket {
    pub(crate) fn new(generation: u64, key: impl Into<String>) -> Self {
        Self {
            generation,
            key: key.into(),
        }
    }

    /// Mark the resource as loading for `key`.
    ///
    /// Switching to a different key drops the old payload.
    pub fn begin(&mut self, key: &str) -> Ticket {
        self.generation += 1;
        if self.resource.key.as_deref() != Some(key) {
            self.resource.key = Some(key.to_string());
            self.resource.payload = None;
            self.resource.error = None;
        }
        self.resource.status = LoadStatus::Loading;
        Ticket::new(self.generation, key)
    }

    /// Apply a response. Returns `false` if the ticket was stale and nothing changed.
    ///
    /// `Ok(None)` means the backend answered with no data: the resource is
    /// `Loaded` with an empty payload.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<Option<T>, ApiError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                resource = self.label,
                key = ticket.key(),
                stale = ticket.generation,
                current = self.generation,
                "Discarding stale response"
            );
            return false;
        }

        match result {
            Ok(payload) => {
                if payload.is_none() {
                    info!(resource = self.label, key = ticket.key(), "No data returned");
                }
                self.resource.status = LoadStatus::Loaded;
                self.resource.payload = payload;
                self.resource.error = None;
            }
            Err(e) => {
                warn!(resource = self.label, key = ticket.key(), error = %e, "Load failed");
                // previous payload stays visible
                self.resource.status = LoadStatus::Error;
                self.resource.error = Some(LoadError::from_api(self.label, &e));
            }
        }
        true
    }

    /// Fail without a network call (e.g. no key to load).
    pub fn reject(&mut self, error: LoadError) {
        self.generation += 1;
        self.resource.status = LoadStatus::Error;
        self.resource.error = Some(error);
    }

    /// Drop any in-flight response (unmount, navigation away).
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if self.resource.status == LoadStatus::Loading {
            self.resource.status = LoadStatus::Idle;
        }
    }

    /// Begin, await one fetch, resolve.
    pub async fn load<F>(&mut self, key: &str, fetch: F) -> &Resource<T>
    where
        F: Future<Output = Result<Option<T>, ApiError>>,
    {
        let ticket = self.begin(key);
        let result = fetch.await;
        self.resolve(&ticket, result);
        &self.resource
    }
}
