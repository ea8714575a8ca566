//! Per-widget state store for loading and offset state.
//!
//! Two independent slices live here: [`LoadingState`] and the offset counter.
//! Every [`Action`] runs through both reducers; observers of a slice hear
//! about every action that slice's reducer recognizes, synchronously and in
//! subscription order, before [`StateStore::dispatch`] returns.

use std::fmt;

use slideshow_model::{Action, LoadingState, Offset};
use tracing::trace;

/// Loading reducer: loading actions set the state they name, anything else
/// leaves it untouched.
pub fn loading_reducer(state: LoadingState, action: Action) -> LoadingState {
    action.loading_target().unwrap_or(state)
}

/// Offset reducer: unit steps and reset.
pub fn offset_reducer(state: Offset, action: Action) -> Offset {
    match action {
        Action::Increment => state.saturating_add(1),
        Action::Decrement => state.saturating_sub(1),
        Action::Reset => 0,
        _ => state,
    }
}

/// A new value delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Loading(LoadingState),
    Offset(Offset),
}

/// Which slice an observer listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Loading,
    Offset,
    All,
}

impl Slice {
    fn accepts(&self, change: &StateChange) -> bool {
        match (self, change) {
            (Slice::All, _) => true,
            (Slice::Loading, StateChange::Loading(_)) => true,
            (Slice::Offset, StateChange::Offset(_)) => true,
            _ => false,
        }
    }
}

/// Handle returned by the subscribe methods, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StateChange)>;

struct Subscription {
    id: SubscriptionId,
    slice: Slice,
    observer: Observer,
}

#[derive(Default)]
pub struct StateStore {
    loading: LoadingState,
    offset: Offset,
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("loading", &self.loading)
            .field("offset", &self.offset)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Run `action` through both reducers and notify observers.
    pub fn dispatch(&mut self, action: Action) {
        let change = if action.loading_target().is_some() {
            self.loading = loading_reducer(self.loading, action);
            Some(StateChange::Loading(self.loading))
        } else if action.is_offset_action() {
            self.offset = offset_reducer(self.offset, action);
            Some(StateChange::Offset(self.offset))
        } else {
            None
        };

        trace!(%action, loading = %self.loading, offset = self.offset, "dispatch");

        if let Some(change) = change {
            self.notify(&change);
        }
    }

    /// Dispatch the same action `times` times, one unit step at a time.
    pub fn dispatch_repeated(&mut self, action: Action, times: usize) {
        for _ in 0..times {
            self.dispatch(action);
        }
    }

    /// Observe both slices. The current loading state and offset are
    /// delivered immediately, in that order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        self.insert(Slice::All, Box::new(observer))
    }

    /// Observe the loading slice, starting with its current value.
    pub fn select_loading<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(LoadingState) + 'static,
    {
        self.insert(
            Slice::Loading,
            Box::new(move |change| {
                if let StateChange::Loading(state) = change {
                    observer(*state);
                }
            }),
        )
    }

    /// Observe the offset slice, starting with its current value.
    pub fn select_offset<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(Offset) + 'static,
    {
        self.insert(
            Slice::Offset,
            Box::new(move |change| {
                if let StateChange::Offset(offset) = change {
                    observer(*offset);
                }
            }),
        )
    }

    /// Returns false when `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        before != self.subscriptions.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn insert(&mut self, slice: Slice, mut observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        for current in [
            StateChange::Loading(self.loading),
            StateChange::Offset(self.offset),
        ] {
            if slice.accepts(&current) {
                observer(&current);
            }
        }

        self.subscriptions.push(Subscription {
            id,
            slice,
            observer,
        });
        id
    }

    fn notify(&mut self, change: &StateChange) {
        for sub in self
            .subscriptions
            .iter_mut()
            .filter(|sub| sub.slice.accepts(change))
        {
            (sub.observer)(change);
        }
    }
}
