//! Cached, refreshable collection state.
//!
//! A [`Collection`] mirrors one server collection into client-side state:
//! the cached items, a loading flag that is set from construction until the
//! first settle, and the last error message. Each [`Collection::refresh`]
//! supersedes the previous fetch: the in-flight task is aborted, and a
//! generation counter guarantees a stale response can never overwrite
//! fresher state even if the abort loses the race.
//!
//! State machine per collection: Idle → Loading → {Success, Error},
//! re-entering Loading only on an explicit refresh. No automatic retry.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::{ApiClient, ClientError};
use crate::types::{ReservationSummary, User, Workshop};

/// Source of a collection's items, usually backed by [`ApiClient`].
///
/// Tests substitute deterministic implementations to drive the state
/// machine without a network.
#[async_trait]
pub trait Fetch<T>: Send + Sync {
    /// Fetch the whole collection.
    async fn fetch(&self) -> Result<Vec<T>, ClientError>;
}

struct Shared<T> {
    items: Vec<T>,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
}

/// Client-side cache of one server collection.
///
/// Must be created inside a Tokio runtime; construction issues the first
/// fetch immediately.
pub struct Collection<T> {
    shared: Arc<Mutex<Shared<T>>>,
    fetcher: Arc<dyn Fetch<T>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Collection<T>
where
    T: Send + 'static,
{
    /// Create the collection and issue the initial fetch.
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetch<T>>) -> Self {
        let collection = Self {
            shared: Arc::new(Mutex::new(Shared {
                items: Vec::new(),
                is_loading: true,
                error: None,
                generation: 0,
            })),
            fetcher,
            task: Mutex::new(None),
        };
        collection.refresh();
        collection
    }

    /// Re-issue the fetch, superseding any in-flight request.
    pub fn refresh(&self) {
        let generation = {
            let mut shared = self.shared.lock().expect("collection state poisoned");
            shared.generation += 1;
            shared.is_loading = true;
            shared.error = None;
            shared.generation
        };

        // Abort the superseded fetch; the generation guard below covers the
        // window where the abort loses the race.
        if let Some(previous) = self.task.lock().expect("task slot poisoned").take() {
            previous.abort();
        }

        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch().await;
            let mut state = shared.lock().expect("collection state poisoned");
            if state.generation != generation {
                debug!(generation, "discarding stale fetch result");
                return;
            }
            match result {
                Ok(items) => {
                    state.items = items;
                    state.error = None;
                }
                Err(err) => {
                    state.items.clear();
                    state.error = Some(err.to_string());
                }
            }
            state.is_loading = false;
        });

        *self.task.lock().expect("task slot poisoned") = Some(handle);
    }

    /// Snapshot of the cached items.
    #[must_use]
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.shared
            .lock()
            .expect("collection state poisoned")
            .items
            .clone()
    }

    /// True from construction or refresh until the fetch settles.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.shared
            .lock()
            .expect("collection state poisoned")
            .is_loading
    }

    /// The last fetch error, cleared on the next refresh.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.shared
            .lock()
            .expect("collection state poisoned")
            .error
            .clone()
    }
}

impl<T> Drop for Collection<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().expect("task slot poisoned").take() {
            task.abort();
        }
    }
}

struct UsersFetcher(ApiClient);

#[async_trait]
impl Fetch<User> for UsersFetcher {
    async fn fetch(&self) -> Result<Vec<User>, ClientError> {
        self.0.list_users().await
    }
}

struct WorkshopsFetcher(ApiClient);

#[async_trait]
impl Fetch<Workshop> for WorkshopsFetcher {
    async fn fetch(&self) -> Result<Vec<Workshop>, ClientError> {
        self.0.list_workshops().await
    }
}

struct ReservationsFetcher(ApiClient);

#[async_trait]
impl Fetch<ReservationSummary> for ReservationsFetcher {
    async fn fetch(&self) -> Result<Vec<ReservationSummary>, ClientError> {
        self.0.list_reservation_summaries().await
    }
}

/// Cached view of the users collection.
#[must_use]
pub fn users(client: ApiClient) -> Collection<User> {
    Collection::new(Arc::new(UsersFetcher(client)))
}

/// Cached view of the workshops collection.
#[must_use]
pub fn workshops(client: ApiClient) -> Collection<Workshop> {
    Collection::new(Arc::new(WorkshopsFetcher(client)))
}

/// Cached view of the reservation summary collection.
#[must_use]
pub fn reservations(client: ApiClient) -> Collection<ReservationSummary> {
    Collection::new(Arc::new(ReservationsFetcher(client)))
}
