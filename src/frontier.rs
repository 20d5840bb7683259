use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A min-priority queue whose order comes from a key function
/// supplied at construction rather than from `T` itself.
///
/// Entries with equal keys come out in no particular order.
pub struct Frontier<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heap: BinaryHeap<Reverse<Entry<T, K>>>,
    key: F,
}

struct Entry<T, K> {
    key: K,
    item: T,
}

impl<T, K: Ord> PartialEq for Entry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T, K: Ord> Eq for Entry<T, K> {}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for Entry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, K, F> Frontier<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pub fn new(key: F) -> Frontier<T, K, F> {
        Frontier {
            heap: BinaryHeap::new(),
            key,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        self.heap.push(Reverse(Entry { key, item }));
    }

    /// Removes the entry with the least key.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }
}
