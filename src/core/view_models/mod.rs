//! View-models: state containers driven by action dispatch.
//!
//! Implements a unidirectional data flow:
//! View → `trigger(action)` → view-model mutates state / calls service → state published → View re-renders
//!
//! Every mutation goes through [`StateStore::update`], which publishes a full
//! snapshot of the new state to all subscribers. Observers therefore only ever
//! see states between mutations, never a half-applied one.

pub mod cities;
pub mod city_details;

#[cfg(test)]
pub(crate) mod test_support;

pub use cities::{CitiesViewAction, CitiesViewModel, CitiesViewState};
pub use city_details::{CityDetailsAction, CityDetailsState, CityDetailsViewModel};

use async_trait::async_trait;
use tokio::sync::watch;

/// A screen's state container plus its action dispatcher.
///
/// `trigger` takes `&mut self`, so a view-model processes one action at a time
/// and two reloads can never interleave on the same state.
#[async_trait]
pub trait ViewModel: Send {
    type State: Clone + Send + Sync + 'static;
    type Action: Send + 'static;

    /// Current state snapshot
    fn state(&self) -> &Self::State;

    /// Receive every published state, starting with the current one
    fn subscribe(&self) -> watch::Receiver<Self::State>;

    /// Handle one action to completion
    async fn trigger(&mut self, action: Self::Action);
}

/// Owns a view-model's state and publishes it after each mutation
#[derive(Debug)]
pub struct StateStore<S> {
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: Clone> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            state: initial,
            publisher,
        }
    }

    pub fn get(&self) -> &S {
        &self.state
    }

    /// Apply a mutation and publish the resulting state as one snapshot
    pub fn update(&mut self, mutate: impl FnOnce(&mut S)) {
        mutate(&mut self.state);
        self.publisher.send_replace(self.state.clone());
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.publisher.subscribe()
    }
}

impl<S: Clone + Default> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: u32,
        label: Option<String>,
    }

    #[test]
    fn test_update_mutates_state() {
        let mut store = StateStore::<Counter>::default();
        store.update(|s| s.value = 3);
        assert_eq!(store.get().value, 3);
    }

    #[test]
    fn test_subscriber_sees_latest_snapshot() {
        let mut store = StateStore::<Counter>::default();
        let receiver = store.subscribe();
        assert_eq!(receiver.borrow().value, 0);

        store.update(|s| {
            s.value = 1;
            s.label = Some("one".to_string());
        });

        let seen = receiver.borrow().clone();
        assert_eq!(
            seen,
            Counter {
                value: 1,
                label: Some("one".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_subscriber_is_notified_on_update() {
        let mut store = StateStore::<Counter>::default();
        let mut receiver = store.subscribe();

        store.update(|s| s.value = 7);

        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().value, 7);
    }
}
