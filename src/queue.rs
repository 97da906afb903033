//! The indexed priority queue.
//!
//! [`IndexedPriorityQueue`] is a binary heap whose entries are addressed by
//! a stable external index in `[0, capacity)` instead of being anonymous.
//! An index-to-position map is maintained alongside the heap array, so the
//! key of any stored entry can be raised or lowered in place without a
//! linear search for where the entry currently sits, which is the operation
//! plain binary heaps lack and algorithms like Dijkstra's rely on.
//!
//! # Time Complexity
//!
//! | Operation                       | Complexity |
//! |---------------------------------|------------|
//! | [`insert`]                      | O(log n)   |
//! | [`pop`]                         | O(log n)   |
//! | [`increase_key`]                | O(log n)   |
//! | [`decrease_key`]                | O(log n)   |
//! | [`update_key`]                  | O(log n)   |
//! | [`peek`] / [`get`]              | O(1)       |
//!
//! [`insert`]: IndexedPriorityQueue::insert
//! [`pop`]: IndexedPriorityQueue::pop
//! [`increase_key`]: IndexedPriorityQueue::increase_key
//! [`decrease_key`]: IndexedPriorityQueue::decrease_key
//! [`update_key`]: IndexedPriorityQueue::update_key
//! [`peek`]: IndexedPriorityQueue::peek
//! [`get`]: IndexedPriorityQueue::get

use std::cmp::Ordering;

use crate::error::Error;
use crate::order::OrderMode;

/// A fixed-capacity priority queue addressed by external index.
///
/// Three parallel stores sized at construction back the structure:
///
/// - `keys[i]` holds the key stored under external index `i`, or nothing
///   when slot `i` is vacant;
/// - `heap` is the binary-heap array: `heap[h]` names the external index
///   occupying heap position `h`, and its length is the live entry count;
/// - `pos[i]` is the heap position currently occupied by index `i`, kept in
///   lockstep with `heap` so that `heap[pos[i]] == i` at all times.
///
/// Heap positions are 0-based: the parent of position `h` is `(h - 1) / 2`
/// and its children sit at `2h + 1` and `2h + 2`. The textbook presentation
/// leaves slot 0 unused so that parent arithmetic is exact halving; the
/// 0-based form used here is the same shape shifted down by one.
///
/// Because every live entry owns a distinct index below the capacity, the
/// stores never grow after construction and no operation can run out of
/// room. All operations are plain sequential computation; callers that
/// share a queue across threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use indexed_priority_queue::{IndexedPriorityQueue, OrderMode};
///
/// let mut queue = IndexedPriorityQueue::new(5, OrderMode::Max);
/// queue.insert(0, 4)?;
/// queue.insert(2, 7)?;
/// queue.insert(1, 6)?;
///
/// assert_eq!(queue.peek(), Some((2, &7)));
///
/// // Raise index 0's key in place; it takes over the root.
/// queue.increase_key(0, 9)?;
/// assert_eq!(queue.pop()?, (0, 9));
/// assert_eq!(queue.pop()?, (2, 7));
/// assert_eq!(queue.pop()?, (1, 6));
/// assert!(queue.is_empty());
/// # Ok::<(), indexed_priority_queue::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P: Ord> {
    mode: OrderMode,
    keys: Box<[Option<P>]>,
    heap: Vec<usize>,
    pos: Box<[Option<usize>]>,
}

impl<P: Ord> IndexedPriorityQueue<P> {
    /// Creates an empty queue accepting indices in `[0, capacity)`.
    ///
    /// A zero-capacity queue is legal; it rejects every index.
    pub fn new(capacity: usize, mode: OrderMode) -> Self {
        Self {
            mode,
            keys: (0..capacity).map(|_| None).collect(),
            heap: Vec::with_capacity(capacity),
            pos: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// The number of indices this queue accepts.
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// The number of entries currently stored.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The ordering this queue was built with.
    pub fn mode(&self) -> OrderMode {
        self.mode
    }

    /// True when `index` currently holds a key. Out-of-range indices are
    /// simply not present.
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// The key stored under `index`, if any.
    pub fn get(&self, index: usize) -> Option<&P> {
        self.keys.get(index)?.as_ref()
    }

    /// The index and key that [`pop`](Self::pop) would remove next, without
    /// removing them.
    pub fn peek(&self) -> Option<(usize, &P)> {
        let &index = self.heap.first()?;
        Some((index, self.keys[index].as_ref()?))
    }

    /// Visits every stored entry in heap-array order: the root comes first,
    /// and the remainder follows the level-by-level layout rather than
    /// sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.heap
            .iter()
            .filter_map(|&index| self.keys[index].as_ref().map(|key| (index, key)))
    }

    /// Stores `key` under `index` and sifts it to its place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity,
    /// and [`Error::AlreadyPresent`] if the slot already holds a key; use
    /// [`update_key`](Self::update_key) to change a stored key.
    pub fn insert(&mut self, index: usize, key: P) -> Result<(), Error> {
        self.check_bounds(index)?;
        if self.keys[index].is_some() {
            return Err(Error::AlreadyPresent { index });
        }
        let position = self.heap.len();
        self.heap.push(index);
        self.keys[index] = Some(key);
        self.pos[index] = Some(position);
        self.sift_up(position);
        Ok(())
    }

    /// Removes and returns the root entry: the largest key in a max queue,
    /// the smallest in a min queue.
    ///
    /// The last heap entry moves into the vacated root and sinks to its
    /// place; popping the only entry skips the re-sift.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] when nothing is stored.
    pub fn pop(&mut self) -> Result<(usize, P), Error> {
        let &index = self.heap.first().ok_or(Error::EmptyQueue)?;
        let key = self.keys[index].take().ok_or(Error::NotPresent { index })?;
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        self.heap.pop();
        self.pos[index] = None;
        if let Some(&moved) = self.heap.first() {
            self.pos[moved] = Some(0);
            self.sift_down(0);
        }
        Ok((index, key))
    }

    /// Replaces the key under `index` with a strictly larger one and
    /// restores heap order.
    ///
    /// In a max queue the entry can only rise, so it swims toward the root;
    /// in a min queue it can only worsen, so it sinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity,
    /// [`Error::NotPresent`] if the slot holds no key, and
    /// [`Error::InvalidUpdate`] if `key` is not strictly larger than the
    /// stored key. The stored key is untouched on every error.
    pub fn increase_key(&mut self, index: usize, key: P) -> Result<(), Error> {
        let (position, current) = self.occupied_entry(index)?;
        if key <= *current {
            return Err(Error::InvalidUpdate { index });
        }
        self.keys[index] = Some(key);
        match self.mode {
            OrderMode::Max => self.sift_up(position),
            OrderMode::Min => self.sift_down(position),
        }
        Ok(())
    }

    /// Replaces the key under `index` with a strictly smaller one and
    /// restores heap order.
    ///
    /// The mirror image of [`increase_key`](Self::increase_key): in a max
    /// queue the entry sinks, in a min queue it swims.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity,
    /// [`Error::NotPresent`] if the slot holds no key, and
    /// [`Error::InvalidUpdate`] if `key` is not strictly smaller than the
    /// stored key. The stored key is untouched on every error.
    pub fn decrease_key(&mut self, index: usize, key: P) -> Result<(), Error> {
        let (position, current) = self.occupied_entry(index)?;
        if key >= *current {
            return Err(Error::InvalidUpdate { index });
        }
        self.keys[index] = Some(key);
        match self.mode {
            OrderMode::Max => self.sift_down(position),
            OrderMode::Min => self.sift_up(position),
        }
        Ok(())
    }

    /// Sets the key under `index` to `key`, whichever direction that moves
    /// it. Routes to [`increase_key`](Self::increase_key) or
    /// [`decrease_key`](Self::decrease_key); a key equal to the stored one
    /// is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not below the capacity
    /// and [`Error::NotPresent`] if the slot holds no key.
    pub fn update_key(&mut self, index: usize, key: P) -> Result<(), Error> {
        let (_, current) = self.occupied_entry(index)?;
        match key.cmp(current) {
            Ordering::Greater => self.increase_key(index, key),
            Ordering::Less => self.decrease_key(index, key),
            Ordering::Equal => Ok(()),
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), Error> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }

    /// Validates the shared preconditions of the keyed operations: `index`
    /// must be in range and slot `index` must hold a key. Returns the
    /// entry's heap position and a borrow of its current key.
    fn occupied_entry(&self, index: usize) -> Result<(usize, &P), Error> {
        self.check_bounds(index)?;
        match (self.pos[index], self.keys[index].as_ref()) {
            (Some(position), Some(key)) => Ok((position, key)),
            _ => Err(Error::NotPresent { index }),
        }
    }

    /// Whether the key stored under index `a` outranks the key stored under
    /// index `b`. Vacant slots outrank nothing.
    fn entry_outranks(&self, a: usize, b: usize) -> bool {
        match (&self.keys[a], &self.keys[b]) {
            (Some(key_a), Some(key_b)) => self.mode.outranks(key_a, key_b),
            _ => false,
        }
    }

    /// Swaps two occupied heap positions and rewrites both position
    /// entries.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = Some(a);
        self.pos[self.heap[b]] = Some(b);
    }

    /// Moves the entry at `position` toward the root until its parent
    /// outranks it or it becomes the root. Ties stop the climb.
    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.entry_outranks(self.heap[position], self.heap[parent]) {
                break;
            }
            self.swap_entries(position, parent);
            position = parent;
        }
    }

    /// Moves the entry at `position` away from the root, following the
    /// higher-ranked child, until neither child outranks it.
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.heap.len() && self.entry_outranks(self.heap[right], self.heap[left]) {
                child = right;
            }
            if !self.entry_outranks(self.heap[child], self.heap[position]) {
                break;
            }
            self.swap_entries(position, child);
            position = child;
        }
    }
}
