//! Synchronous snapshot subscribers.

use std::fmt;

use serde::Serialize;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Callbacks notified with a store's snapshot after each mutation.
pub(crate) struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    /// Register `callback` and call it once with `current`.
    pub(crate) fn subscribe<F>(&mut self, current: &T, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut callback: Callback<T> = Box::new(callback);
        callback(current);
        self.entries.push((id, callback));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every callback in subscription order.
    pub(crate) fn notify(&mut self, snapshot: &T) {
        for (_, callback) in &mut self.entries {
            callback(snapshot);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish()
    }
}
