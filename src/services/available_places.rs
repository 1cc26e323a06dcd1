// src/services/available_places.rs
// DOCUMENTATION: The available-places component
// PURPOSE: Fetch the places once on init, expose loading/error/data state,
// cancel the fetch on teardown

use crate::errors::PlacesError;
use crate::models::{FetchPhase, Place, PlacesSnapshot};
use crate::services::{CancelToken, ListenerId, PlacesSource, StateCell};
use parking_lot::{Mutex, ReentrantMutex};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// The three observable state cells owned by one component instance
#[derive(Clone)]
pub struct PlacesCells {
    /// `None` until the first successful fetch
    pub places: StateCell<Option<Vec<Place>>>,
    /// True strictly between request start and settlement
    pub is_fetching: StateCell<bool>,
    /// Empty until a failure
    pub error: StateCell<String>,
}

impl PlacesCells {
    fn new() -> Self {
        Self {
            places: StateCell::new(None),
            is_fetching: StateCell::new(false),
            error: StateCell::new(String::new()),
        }
    }

    pub fn snapshot(&self) -> PlacesSnapshot {
        PlacesSnapshot::new(self.places.get(), self.is_fetching.get(), self.error.get())
    }

    pub fn phase(&self) -> FetchPhase {
        let places = self.places.get();
        let error = self.error.get();
        FetchPhase::from_cells(&places, self.is_fetching.get(), &error)
    }
}

/// Liveness flag. Cell writes happen while it is held, and destroy flips it
/// under the same lock, so nothing is written once destroy has returned.
/// Reentrant so a listener may call `destroy` mid-write.
type Liveness = Arc<ReentrantMutex<Cell<bool>>>;

/// Available-places component
/// DOCUMENTATION: `init` issues exactly one fetch through the injected
/// `PlacesSource`; `destroy` (or drop) cancels it. Must be used inside a tokio
/// runtime.
pub struct AvailablePlaces<S: PlacesSource> {
    id: Uuid,
    source: Arc<S>,
    cells: PlacesCells,
    cancel: CancelToken,
    alive: Liveness,
    started: AtomicBool,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: PlacesSource> AvailablePlaces<S> {
    pub fn new(source: S) -> Self {
        Self::with_shared_source(Arc::new(source))
    }

    pub fn with_shared_source(source: Arc<S>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            cells: PlacesCells::new(),
            cancel: CancelToken::new(),
            alive: Arc::new(ReentrantMutex::new(Cell::new(true))),
            started: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn places(&self) -> &StateCell<Option<Vec<Place>>> {
        &self.cells.places
    }

    pub fn is_fetching(&self) -> &StateCell<bool> {
        &self.cells.is_fetching
    }

    pub fn error(&self) -> &StateCell<String> {
        &self.cells.error
    }

    pub fn snapshot(&self) -> PlacesSnapshot {
        self.cells.snapshot()
    }

    pub fn phase(&self) -> FetchPhase {
        self.cells.phase()
    }

    pub fn is_destroyed(&self) -> bool {
        !self.alive.lock().get()
    }

    /// Call `listener` with a fresh snapshot after every write to any cell
    pub fn subscribe<F>(&self, listener: F) -> [ListenerId; 3]
    where
        F: Fn(PlacesSnapshot) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);

        let (l, cells) = (Arc::clone(&listener), self.cells.clone());
        let places = self.cells.places.subscribe(move |_| l(cells.snapshot()));

        let (l, cells) = (Arc::clone(&listener), self.cells.clone());
        let fetching = self.cells.is_fetching.subscribe(move |_| l(cells.snapshot()));

        let (l, cells) = (listener, self.cells.clone());
        let error = self.cells.error.subscribe(move |_| l(cells.snapshot()));

        [places, fetching, error]
    }

    /// Start the fetch
    /// DOCUMENTATION: Sets `is_fetching`, then spawns the request. Returns
    /// false if the component was already started or destroyed.
    pub fn init(&self) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            log::warn!("[{}] init called twice, ignoring", self.id);
            return false;
        }

        let started = {
            let alive = self.alive.lock();
            if alive.get() {
                self.cells.is_fetching.set(true);
            }
            alive.get()
        };
        if !started {
            log::warn!("[{}] init called on a destroyed component", self.id);
            return false;
        }

        log::info!("[{}] Fetching available places", self.id);

        let source = Arc::clone(&self.source);
        let cancel = self.cancel.clone();
        let cells = self.cells.clone();
        let alive = Arc::clone(&self.alive);
        let id = self.id;

        let handle = tokio::spawn(async move {
            let result = source.fetch_places(&cancel).await;
            settle(id, &cells, &alive, result);
        });

        *self.task.lock() = Some(handle);

        // destroy may have run on another thread before the handle was stored
        if self.is_destroyed() {
            if let Some(handle) = self.task.lock().take() {
                handle.abort();
            }
        }

        true
    }

    /// Resolves once the fetch has settled or the component was destroyed.
    /// Returns immediately with `Idle` if `init` was never called.
    pub async fn settled(&self) -> FetchPhase {
        let mut rx = self.cells.is_fetching.watch();
        tokio::select! {
            _ = rx.wait_for(|fetching| !*fetching) => {}
            _ = self.cancel.cancelled() => {}
        }
        self.phase()
    }

    /// Tear the component down
    /// DOCUMENTATION: Cancels the in-flight request, if any. No cell is written
    /// after this returns. Calling it again, or after settlement, is a no-op.
    pub fn destroy(&self) {
        {
            let alive = self.alive.lock();
            if !alive.get() {
                return;
            }
            alive.set(false);
        }

        if self.cancel.cancel() {
            log::debug!("[{}] Component destroyed, cancelling fetch", self.id);
        }

        if let Some(handle) = self.task.lock().take() {
            handle.abort();
        }
    }
}

impl<S: PlacesSource> Drop for AvailablePlaces<S> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Write the outcome into the cells: data then loading-false on success,
/// error then loading-false on failure
fn settle(
    id: Uuid,
    cells: &PlacesCells,
    alive: &Liveness,
    result: Result<Vec<Place>, PlacesError>,
) {
    let alive = alive.lock();
    if !alive.get() {
        log::debug!("[{}] Fetch settled after destroy, discarding", id);
        return;
    }

    match result {
        Ok(places) => {
            log::info!("[{}] Loaded {} places", id, places.len());
            cells.places.set(Some(places));
        }
        // destroy is handled above, so a cancellation seen here is a failure
        Err(e) => {
            log::error!("[{}] Failed to fetch places: {}", id, e);
            cells.error.set(e.user_message().to_string());
        }
    }

    // a listener may have destroyed us during the previous write
    if alive.get() {
        cells.is_fetching.set(false);
        log::debug!("[{}] Fetch complete", id);
    }
}
