use std::collections::VecDeque;

use super::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::HISTORY_LIMIT;

/// Últimos resultados de un store, el más reciente primero. Solo crece por
/// delante y descarta lo que pase del límite.
pub struct SearchHistory<T> {
    entries: ReactiveState<VecDeque<T>>,
    limit: usize,
}

impl<T> Clone for SearchHistory<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            limit: self.limit,
        }
    }
}

impl<T: Clone> SearchHistory<T> {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: ReactiveState::new(VecDeque::with_capacity(limit)),
            limit,
        }
    }

    pub fn push(&self, entry: T) {
        let limit = self.limit;
        self.entries.update(|entries| {
            entries.push_front(entry);
            entries.truncate(limit);
        });
    }

    pub fn entries(&self) -> Vec<T> {
        self.entries.with(|entries| entries.iter().cloned().collect())
    }

    pub fn latest(&self) -> Option<T> {
        self.entries.with(|entries| entries.front().cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.with(VecDeque::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.entries.subscribe(callback)
    }
}

impl<T: Clone> Default for SearchHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
