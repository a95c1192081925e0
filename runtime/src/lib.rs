//! # Menu Order Runtime
//!
//! Runtime implementation for the menu order architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution,
//! follow-up effects, and change notification.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, runs the reducer, interprets effects
//! - **Subscription**: Cancellation handle for a change listener
//!
//! ## Example
//!
//! ```ignore
//! use menu_order_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! let _subscription = store.subscribe(|state| render(state));
//!
//! // Send an action; listeners have run by the time this returns
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use menu_order_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Change subscriptions and their cancellation handles
pub mod subscription;

pub use subscription::{Listener, Subscription, SubscriptionId};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// The reducer kept producing follow-up actions past the configured limit
        ///
        /// Actions reduced before the limit was hit remain applied, and
        /// listeners have already observed them.
        #[error("Reducer dispatched more than {limit} follow-up actions in one send")]
        DispatchLimitExceeded {
            /// The configured `max_dispatch_depth`
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use menu_order_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_dispatch_depth(8);
/// assert_eq!(config.max_dispatch_depth, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of follow-up actions a single `send` may reduce
    pub max_dispatch_depth: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_dispatch_depth: usize) -> Self {
        Self { max_dispatch_depth }
    }

    /// Set the follow-up action limit
    #[must_use]
    pub const fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_dispatch_depth: 64,
        }
    }
}

/// Store runtime for coordinating reducer execution and change notification.
pub mod store {
    use super::subscription::Registry;
    use super::{Arc, Effect, Reducer, RwLock, StoreConfig, StoreError, Subscription};
    use std::collections::VecDeque;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Listeners notified after every reduced action
    ///
    /// Clones share state and listeners.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        listeners: Registry<S>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                config,
                listeners: Registry::new(),
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Notifies every listener, in registration order
        /// 4. Reduces any follow-up actions the effects dispatched, notifying
        ///    after each one
        ///
        /// Listeners run while the write lock is held, so no reader can observe
        /// a state whose notification is still pending. Listeners must not
        /// block on this store.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::DispatchLimitExceeded`] if the reducer keeps
        /// dispatching follow-up actions beyond `max_dispatch_depth`.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let mut pending = VecDeque::from([action]);
            let mut follow_ups = 0_usize;

            while let Some(action) = pending.pop_front() {
                let span = tracing::debug_span!("reducer_execution", follow_ups);
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                self.notify(&state);

                for action in effects.into_iter().flat_map(Effect::into_actions) {
                    follow_ups += 1;
                    if follow_ups > self.config.max_dispatch_depth {
                        tracing::error!(
                            limit = self.config.max_dispatch_depth,
                            "Follow-up dispatch limit exceeded"
                        );
                        metrics::counter!("store.dispatch.limit_exceeded").increment(1);
                        return Err(StoreError::DispatchLimitExceeded {
                            limit: self.config.max_dispatch_depth,
                        });
                    }
                    pending.push_back(action);
                }
            }

            tracing::debug!(follow_ups, "Action processing completed");
            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let total = store.state(|s| s.items().len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Register a listener called with the state after every reduced action
        ///
        /// The listener is not called for the current state; read it with
        /// [`Store::state`] if an initial render is needed. The returned
        /// [`Subscription`] unsubscribes on drop.
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn(&S) + Send + Sync + 'static,
        {
            self.listeners.register(Arc::new(listener))
        }

        /// Number of currently registered listeners
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.listeners.len()
        }

        fn notify(&self, state: &S) {
            let listeners = self.listeners.snapshot();
            tracing::trace!(listeners = listeners.len(), "Notifying listeners");

            for listener in &listeners {
                listener(state);
            }

            metrics::counter!("store.notifications.total").increment(listeners.len() as u64);
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                config: self.config.clone(),
                listeners: self.listeners.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
