//! # Menu Order Testing
//!
//! Testing utilities and helpers for the menu order architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - Effect assertion helpers
//! - [`Recorder`], a thread-safe log for capturing notifications
//!
//! ## Example
//!
//! ```ignore
//! use menu_order_testing::Recorder;
//!
//! #[tokio::test]
//! async fn test_notifications() {
//!     let store = Store::new(MenuState::default(), MenuReducer::new(), MenuEnvironment);
//!     let recorder = Recorder::new();
//!     let _sub = store.subscribe(recorder.listener(|s: &MenuState| s.summary()));
//!
//!     store.send(MenuAction::ClearAll).await?;
//!     assert_eq!(recorder.len(), 1);
//! }
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations used across test suites.
pub mod mocks {
    use std::sync::{Arc, Mutex, PoisonError};

    /// Thread-safe, cloneable log of recorded values
    ///
    /// Clones share the same log, so one handle can be moved into a listener
    /// or view while the test keeps another for assertions.
    ///
    /// # Example
    ///
    /// ```
    /// use menu_order_testing::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let handle = recorder.clone();
    /// handle.record(7);
    /// assert_eq!(recorder.entries(), vec![7]);
    /// ```
    #[derive(Debug)]
    pub struct Recorder<T> {
        entries: Arc<Mutex<Vec<T>>>,
    }

    impl<T> Recorder<T> {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Append a value to the log
        pub fn record(&self, value: T) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value);
        }

        /// Number of recorded values
        #[must_use]
        pub fn len(&self) -> usize {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether nothing has been recorded
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Forget everything recorded so far
        pub fn clear(&self) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }

        /// Build a store listener that records `project(state)` on every call
        pub fn listener<S, F>(&self, project: F) -> impl Fn(&S) + Send + Sync + 'static + use<T, S, F>
        where
            S: 'static,
            T: Send + 'static,
            F: Fn(&S) -> T + Send + Sync + 'static,
        {
            let recorder = self.clone();
            move |state: &S| recorder.record(project(state))
        }
    }

    impl<T: Clone> Recorder<T> {
        /// Snapshot of all recorded values, oldest first
        #[must_use]
        pub fn entries(&self) -> Vec<T> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Most recently recorded value
        #[must_use]
        pub fn last(&self) -> Option<T> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }
    }

    impl<T> Clone for Recorder<T> {
        fn clone(&self) -> Self {
            Self {
                entries: Arc::clone(&self.entries),
            }
        }
    }

    impl<T> Default for Recorder<T> {
        fn default() -> Self {
            Self::new()
        }
    }
}

// Re-export commonly used items
pub use mocks::Recorder;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_clones_share_log() {
        let recorder = Recorder::new();
        let other = recorder.clone();

        other.record("a");
        recorder.record("b");

        assert_eq!(recorder.entries(), vec!["a", "b"]);
        assert_eq!(other.last(), Some("b"));
    }

    #[test]
    fn test_recorder_clear() {
        let recorder = Recorder::new();
        recorder.record(1);
        recorder.clear();

        assert!(recorder.is_empty());
        assert_eq!(recorder.last(), None);
    }

    #[test]
    fn test_listener_projects_state() {
        let recorder = Recorder::new();
        let listener = recorder.listener(|s: &(u8, u8)| s.0 + s.1);

        listener(&(1, 2));
        listener(&(3, 4));

        assert_eq!(recorder.entries(), vec![3, 7]);
    }
}
