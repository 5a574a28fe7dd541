//! Fixed-capacity ordered buffer with configurable duplicate handling

use crate::error::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use tracing::trace;

/// Strategy applied when an item already in the buffer is added again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateHandling {
    /// Ignore the new item
    #[default]
    Reject,
    /// Store the new item as a separate entry
    Allow,
    /// Remove the existing entry and append the new item at the tail
    Delete,
}

/// A bounded, insertion-ordered buffer.
///
/// Once the buffer is full, adding a new item ejects the oldest entry.
/// Typically used to remember recently processed keys for deduplication.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    entries: VecDeque<T>,
    /// Number of occurrences of each entry
    counts: HashMap<T, usize>,
    capacity: usize,
    duplicates: DuplicateHandling,
}

impl<T: Clone + Eq + Hash> RingBuffer<T> {
    /// Create a buffer that rejects duplicate entries
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_duplicate_handling(capacity, DuplicateHandling::default())
    }

    /// Create a buffer with the given duplicate handling
    pub fn with_duplicate_handling(capacity: usize, duplicates: DuplicateHandling) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument(
                "ring buffer capacity must be at least 1",
            ));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
            capacity,
            duplicates,
        })
    }

    /// Add an item to the tail of the buffer.
    ///
    /// Returns the entry ejected from the head, if any.
    pub fn add(&mut self, item: T) -> Option<T> {
        if self.contains(&item) {
            match self.duplicates {
                DuplicateHandling::Reject => return None,
                DuplicateHandling::Delete => {
                    self.remove_first(&item);
                    self.push(item);
                    return None;
                }
                DuplicateHandling::Allow => {}
            }
        }

        let ejected = if self.is_full() {
            self.pop_head()
        } else {
            None
        };
        self.push(item);
        if ejected.is_some() {
            trace!(capacity = self.capacity, "Ring buffer ejected head entry");
        }
        ejected
    }

    /// The entry that will be ejected by the next insertion of a new item.
    /// `None` until the buffer is full.
    pub fn next_ejected(&self) -> Option<&T> {
        if self.is_full() {
            self.entries.front()
        } else {
            None
        }
    }

    /// The oldest entry
    pub fn head(&self) -> Option<&T> {
        self.entries.front()
    }

    /// The newest entry
    pub fn tail(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Check whether the item is in the buffer
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Remove every occurrence of the item. Returns `true` if anything was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        if self.counts.remove(item).is_none() {
            return false;
        }
        self.entries.retain(|entry| entry != item);
        true
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the buffer holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Duplicate handling for this buffer
    pub fn duplicate_handling(&self) -> DuplicateHandling {
        self.duplicates
    }

    /// Iterate from head (oldest) to tail (newest)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts.clear();
    }

    fn push(&mut self, item: T) {
        *self.counts.entry(item.clone()).or_insert(0) += 1;
        self.entries.push_back(item);
    }

    fn pop_head(&mut self) -> Option<T> {
        let head = self.entries.pop_front()?;
        self.decrement(&head);
        Some(head)
    }

    fn remove_first(&mut self, item: &T) {
        if let Some(pos) = self.entries.iter().position(|entry| entry == item) {
            self.entries.remove(pos);
            self.decrement(item);
        }
    }

    fn decrement(&mut self, item: &T) {
        if let Some(count) = self.counts.get_mut(item) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(item);
            }
        }
    }
}
