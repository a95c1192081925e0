//! Change subscriptions for the Store.
//!
//! Listeners are synchronous callbacks that receive a reference to the state
//! after every reduced action. Registration returns a [`Subscription`] guard;
//! dropping the guard (or calling [`Subscription::cancel`]) removes the
//! listener before the next notification cycle.
//!
//! # Invariants
//!
//! 1. Listeners are notified in registration order.
//! 2. A cancelled listener is never called by a later notification cycle.
//! 3. Cancelling from inside a listener callback does not deadlock.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Callback invoked with the state after each reduced action
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Identifier of a registered listener, unique per store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw numeric value of the identifier
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Type-erased view of a registry, so guards need not know the state type
trait Detach: Send + Sync {
    fn detach(&self, id: SubscriptionId) -> bool;
    fn contains(&self, id: SubscriptionId) -> bool;
}

struct Entries<S> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
}

/// Ordered set of listeners shared between a store and its clones
pub(crate) struct Registry<S> {
    inner: Arc<Mutex<Entries<S>>>,
}

impl<S: 'static> Registry<S> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Entries {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub(crate) fn register(&self, listener: Listener<S>) -> Subscription {
        let id = {
            let mut entries = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = SubscriptionId(entries.next_id);
            entries.next_id += 1;
            entries.listeners.push((id, listener));

            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!("store.subscribers").set(entries.listeners.len() as f64);
            id
        };

        tracing::debug!(subscription = %id, "Listener registered");

        let weak: Weak<dyn Detach> = Arc::downgrade(&self.inner) as Weak<dyn Detach>;
        Subscription {
            id,
            registry: Some(weak),
        }
    }

    /// Listeners in registration order.
    ///
    /// The registry lock is released before the snapshot is returned so that
    /// callbacks may subscribe or cancel freely.
    pub(crate) fn snapshot(&self) -> Vec<Listener<S>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl<S> Clone for Registry<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Detach for Mutex<Entries<S>> {
    fn detach(&self, id: SubscriptionId) -> bool {
        let mut entries = self.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.listeners.len();
        entries.listeners.retain(|(entry_id, _)| *entry_id != id);

        #[allow(clippy::cast_precision_loss)]
        metrics::gauge!("store.subscribers").set(entries.listeners.len() as f64);
        entries.listeners.len() != before
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .any(|(entry_id, _)| *entry_id == id)
    }
}

/// Cancellation handle for a registered listener
///
/// The listener stays registered for as long as this guard lives. The guard
/// holds only a weak reference, so it never keeps a discarded store alive.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Option<Weak<dyn Detach>>,
}

impl Subscription {
    /// Identifier of the underlying listener
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the listener is still registered with a live store
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|registry| registry.contains(self.id))
    }

    /// Unsubscribe now rather than at drop
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let detached = self
            .registry
            .take()
            .and_then(|weak| weak.upgrade())
            .is_some_and(|registry| registry.detach(self.id));

        if detached {
            tracing::debug!(subscription = %self.id, "Listener removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
