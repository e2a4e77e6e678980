//! App Lifecycle Provider
//!
//! Publishes foreground/background transitions. Observers hold a
//! [`LifecycleObserver`] and poll it from the event loop; dropping the
//! observer deregisters it.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Whether the app is in front of the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Visible and interactive
    #[default]
    Active,
    /// Hidden behind another app (or the terminal lost focus)
    Background,
}

/// Source of lifecycle transitions
pub struct AppLifecycle {
    tx: watch::Sender<LifecycleState>,
}

impl AppLifecycle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LifecycleState::Active);
        Self { tx }
    }

    /// Publish a new state. Repeating the current state is not a transition.
    pub fn set_state(&self, state: LifecycleState) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });

        if changed {
            tracing::debug!(?state, "App lifecycle changed");
        }
    }

    pub fn state(&self) -> LifecycleState {
        *self.tx.borrow()
    }

    /// Register a new observer
    pub fn subscribe(&self) -> LifecycleObserver {
        LifecycleObserver {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AppLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered lifecycle observer
pub struct LifecycleObserver {
    rx: watch::Receiver<LifecycleState>,
}

impl LifecycleObserver {
    /// The latest state, if it changed since the previous poll
    pub fn poll(&mut self) -> Option<LifecycleState> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_active() {
        let lifecycle = AppLifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Active);
        assert_eq!(lifecycle.observer_count(), 0);
    }

    #[test]
    fn test_observer_sees_changes_once() {
        let lifecycle = AppLifecycle::new();
        let mut observer = lifecycle.subscribe();
        assert_eq!(observer.poll(), None);

        lifecycle.set_state(LifecycleState::Background);
        assert_eq!(observer.poll(), Some(LifecycleState::Background));
        assert_eq!(observer.poll(), None);
    }

    #[test]
    fn test_repeated_state_is_not_a_change() {
        let lifecycle = AppLifecycle::new();
        let mut observer = lifecycle.subscribe();
        lifecycle.set_state(LifecycleState::Active);
        assert_eq!(observer.poll(), None);
    }

    #[test]
    fn test_drop_deregisters() {
        let lifecycle = AppLifecycle::new();
        let observer = lifecycle.subscribe();
        assert_eq!(lifecycle.observer_count(), 1);
        drop(observer);
        assert_eq!(lifecycle.observer_count(), 0);
    }
}
