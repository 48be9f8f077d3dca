//! Per-character mission queue (FIFO with set membership).
//!
//! A character's accepted missions are completed strictly in the order they
//! were accepted. A mission appears in a given queue at most once, so
//! accepting it again while it is still queued changes nothing.
//!
//! The queue is rebuilt from persisted rows that are already sorted by their
//! acceptance sequence, mutated in memory to decide what to write, and
//! discarded at the end of the transaction.

use std::collections::VecDeque;

use crate::types::DbId;

/// An element that can be held in a [`MissionQueue`].
///
/// Membership is decided by `key()` alone, never by comparing whole values.
pub trait QueueItem {
    fn key(&self) -> DbId;
}

impl QueueItem for DbId {
    fn key(&self) -> DbId {
        *self
    }
}

/// Insertion-ordered queue with unique keys. Oldest element first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for MissionQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T: QueueItem> MissionQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the tail unless its key is already queued.
    ///
    /// Returns `true` if the queue changed.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// The oldest element, without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Remove and return the oldest element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Remove every element with the given key. Remaining elements keep
    /// their relative order.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, key: DbId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        self.items.len() != before
    }

    pub fn contains(&self, key: DbId) -> bool {
        self.items.iter().any(|item| item.key() == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consume the queue, yielding its elements in acceptance order.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

/// Builds a queue from rows already sorted oldest first. Later duplicates of
/// a key are dropped.
impl<T: QueueItem> FromIterator<T> for MissionQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}

impl<T> IntoIterator for MissionQueue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
