use crate::domain::{Listing, SearchFilters};
use crate::search::{SearchBackend, SearchError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use tracing::{debug, error, info};

/// What the page shows: the result list plus the request lifecycle flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    pub loading: bool,
    pub error: Option<String>,
    pub cars: Vec<Listing>,
}

struct Tracked {
    view: ShellState,
    // Ticket of the most recently started search.
    latest: u64,
}

struct ShellInner<B> {
    backend: B,
    tracked: Mutex<Tracked>,
}

/// Owns the search lifecycle and the listings currently on screen.
///
/// There is exactly one result list and one ticket counter, shared by every
/// request the server handles: this models a single user's page. Anyone
/// reaching the server sees, and replaces, the same results, so keep it on a
/// loopback or otherwise private address.
///
/// Searches may overlap (the server runs several workers). Each one takes a
/// ticket when it starts and its outcome is applied only if no newer search has
/// started since, so a slow early response can never overwrite a later one.
///
/// Cloning is cheap and every clone drives the same state.
pub struct Shell<B> {
    inner: Arc<ShellInner<B>>,
}

impl<B> Clone for Shell<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: SearchBackend> Shell<B> {
    pub fn new(backend: B) -> Self {
        Self {
            inner: Arc::new(ShellInner {
                backend,
                tracked: Mutex::new(Tracked {
                    view: ShellState::default(),
                    latest: 0,
                }),
            }),
        }
    }

    /// A fresh page load: starts the unfiltered search in the background and
    /// returns the state to render right away, which is always Loading.
    ///
    /// The page polls for the outcome, so a backend that never answers leaves
    /// it in Loading instead of holding the request open.
    pub fn mount(&self) -> ShellState {
        let filters = SearchFilters::default();
        let (ticket, loading) = self.begin(&filters);
        info!(ticket, "initial search");

        let shell = self.clone();
        let spawned = thread::Builder::new()
            .name("initial-search".into())
            .spawn(move || {
                let outcome = shell.inner.backend.search(&filters);
                shell.finish(ticket, outcome);
            });

        match spawned {
            Ok(_) => loading,
            Err(e) => self.finish(ticket, Err(SearchError::Transport(e.to_string()))),
        }
    }

    /// Performs one search and returns the state once it has been applied
    /// (or discarded as stale).
    pub fn search(&self, filters: &SearchFilters) -> ShellState {
        let (ticket, _) = self.begin(filters);

        let outcome = self.inner.backend.search(filters);
        self.finish(ticket, outcome)
    }

    pub fn snapshot(&self) -> ShellState {
        self.lock().view.clone()
    }

    fn begin(&self, filters: &SearchFilters) -> (u64, ShellState) {
        let mut tracked = self.lock();
        tracked.latest += 1;
        tracked.view.loading = true;
        tracked.view.error = None;
        debug!(ticket = tracked.latest, unfiltered = filters.is_empty(), "search started");

        (tracked.latest, tracked.view.clone())
    }

    fn finish(&self, ticket: u64, outcome: Result<Vec<Listing>, SearchError>) -> ShellState {
        let mut tracked = self.lock();

        if ticket != tracked.latest {
            debug!(ticket, latest = tracked.latest, "discarding stale search response");
            return tracked.view.clone();
        }

        match outcome {
            Ok(cars) => {
                info!(count = cars.len(), "search complete");
                tracked.view.cars = cars;
            }
            Err(err) => {
                error!(error = ?err, "Error searching cars: {err}");
                tracked.view.error = Some(err.to_string());
            }
        }
        tracked.view.loading = false;

        tracked.view.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Tracked> {
        self.inner
            .tracked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
