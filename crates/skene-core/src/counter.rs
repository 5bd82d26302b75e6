//! Counter service: a single shared integer plus synchronous change fan-out.
//!
//! State and observer registrations live behind one `RwLock`. Every mutator
//! updates the value, snapshots the new `CounterState` and clones the observer
//! list inside the same write section, then releases the lock before calling
//! any observer. Observers may therefore re-enter the service (even call
//! another mutator) without deadlocking.
//!
//! Notifications for concurrent mutations from different threads are not
//! globally ordered: each notification carries the state exactly as of its
//! own mutation, but a later mutation's fan-out may finish first.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::error::Result;

/// Immutable snapshot of the counter. Copied, never aliased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CounterState {
    pub value: i64,
}

/// Receives counter changes.
///
/// Called synchronously on the thread that performed the mutation, after the
/// service lock has been released. Keep it short: it blocks the caller.
/// An `Err` is logged by the service and does not stop delivery to the
/// remaining observers.
pub trait CounterObserver: Send + Sync {
    fn on_counter_changed(&self, state: CounterState) -> Result<()>;
}

impl<F> CounterObserver for F
where
    F: Fn(CounterState) -> Result<()> + Send + Sync,
{
    fn on_counter_changed(&self, state: CounterState) -> Result<()> {
        self(state)
    }
}

/// Wrap a closure as a shareable observer.
pub fn observer_fn<F>(f: F) -> Arc<dyn CounterObserver>
where
    F: Fn(CounterState) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Subscription token returned by [`CounterService::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl ObserverId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obs#{}", self.0)
    }
}

#[derive(Clone)]
struct Registration {
    id: ObserverId,
    observer: Arc<dyn CounterObserver>,
}

struct Inner {
    state: CounterState,
    observers: Vec<Registration>,
    next_id: u64,
}

/// Owns the counter and its observer registry.
pub struct CounterService {
    inner: RwLock<Inner>,
}

impl Default for CounterService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("CounterService")
            .field("state", &inner.state)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl CounterService {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: CounterState::default(),
                observers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // --------------------
    // Mutators (exclusive lock, then notify outside it)
    // --------------------

    pub fn increment(&self) {
        self.mutate(|v| v.wrapping_add(1));
    }

    /// May go negative; there is no floor.
    pub fn decrement(&self) {
        self.mutate(|v| v.wrapping_sub(1));
    }

    pub fn reset(&self) {
        self.mutate(|_| 0);
    }

    /// No range validation.
    pub fn set_value(&self, value: i64) {
        self.mutate(|_| value);
    }

    // --------------------
    // Readers (shared lock, no notification)
    // --------------------

    pub fn get_value(&self) -> i64 {
        self.inner.read().state.value
    }

    /// Independent copy of the full state.
    pub fn get_state(&self) -> CounterState {
        self.inner.read().state
    }

    pub fn observer_count(&self) -> usize {
        self.inner.read().observers.len()
    }

    // --------------------
    // Registry
    // --------------------

    /// Append an observer. Not idempotent: registering the same observer twice
    /// yields two tokens and two notifications per mutation.
    pub fn add_observer(&self, observer: Arc<dyn CounterObserver>) -> ObserverId {
        let mut inner = self.inner.write();
        let id = ObserverId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push(Registration { id, observer });
        tracing::debug!(observer = %id, total = inner.observers.len(), "counter observer added");
        id
    }

    /// Remove exactly the registration named by `id`. Returns false if absent.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.write();
        let Some(pos) = inner.observers.iter().position(|r| r.id == id) else {
            return false;
        };
        inner.observers.remove(pos);
        tracing::debug!(observer = %id, total = inner.observers.len(), "counter observer removed");
        true
    }

    /// Remove the first registration of this same observer allocation.
    /// Returns false if it is not registered.
    pub fn remove_observer_instance(&self, observer: &Arc<dyn CounterObserver>) -> bool {
        let target = Arc::as_ptr(observer) as *const ();
        let mut inner = self.inner.write();
        let Some(pos) = inner
            .observers
            .iter()
            .position(|r| Arc::as_ptr(&r.observer) as *const () == target)
        else {
            return false;
        };
        let removed = inner.observers.remove(pos);
        tracing::debug!(observer = %removed.id, total = inner.observers.len(), "counter observer removed");
        true
    }

    // --------------------
    // Internals
    // --------------------

    fn mutate(&self, f: impl FnOnce(i64) -> i64) {
        let (state, observers) = {
            let mut inner = self.inner.write();
            inner.state.value = f(inner.state.value);
            (inner.state, inner.observers.clone())
        };
        notify(state, &observers);
    }
}

fn notify(state: CounterState, observers: &[Registration]) {
    for reg in observers {
        if let Err(e) = reg.observer.on_counter_changed(state) {
            tracing::warn!(
                observer = %reg.id,
                value = state.value,
                error = %e,
                kind = e.kind().as_str(),
                "counter observer failed"
            );
        }
    }
}
