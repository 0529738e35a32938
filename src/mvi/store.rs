//! Holders for the current state snapshot.
//!
//! A reducer is pure; something still has to own "the current state" and
//! feed intents through it one at a time. [`Store`] is that single writer.
//! [`SharedStore`] wraps it for hosts that hand the writer to more than one
//! owner (event loop plus background task completions, for example).

use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;

/// Owns the current snapshot for reducer `R`.
pub struct Store<R: Reducer> {
    state: R::State,
    dispatched: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the default (initial) snapshot.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store from an existing snapshot.
    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of intents applied since the store was created.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Run `intent` through the reducer and store the result.
    ///
    /// Intents are applied strictly in call order; no coalescing. With TRACE
    /// enabled, identity transitions are reported.
    pub fn dispatch(&mut self, intent: R::Intent) -> &R::State {
        tracing::trace!(seq = self.dispatched, intent = ?intent, "Dispatching intent");
        let before = tracing::enabled!(tracing::Level::TRACE).then(|| self.state.clone());
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        if before.as_ref() == Some(&self.state) {
            tracing::trace!(seq = self.dispatched, "Intent left state unchanged");
        }
        self.dispatched += 1;
        &self.state
    }

    /// Consume the store, returning the final snapshot.
    pub fn into_state(self) -> R::State {
        self.state
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe handle to a [`Store`].
///
/// Every dispatch takes the lock for the duration of one reduction, so the
/// single-writer discipline holds even with several handles.
pub struct SharedStore<R: Reducer> {
    inner: Arc<Mutex<Store<R>>>,
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Apply an intent and return a clone of the resulting snapshot.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let mut store = self.inner.lock();
        store.dispatch(intent).clone()
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> R::State {
        self.inner.lock().state().clone()
    }

    /// Read the current snapshot without cloning it.
    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(self.inner.lock().state())
    }
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for SharedStore<R> {
    fn default() -> Self {
        Self::new(Store::new())
    }
}
