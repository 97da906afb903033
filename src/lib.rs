//! Indexed Priority Queue
//!
//! This crate provides a binary-heap priority queue whose entries are
//! addressed by a stable external index in `[0, capacity)`, with efficient
//! in-place `increase_key` and `decrease_key` support.
//!
//! # Features
//!
//! - **Max-first or min-first** ordering, fixed per queue at construction
//! - **O(log n)** insert, pop, increase-key, and decrease-key; **O(1)** peek
//!   and lookup by index
//! - **Fixed-capacity arenas** addressed directly by the external index, so
//!   no hashing and no reallocation after construction
//! - **Dijkstra's algorithm** over dense node ids in the
//!   [`pathfinding`] module, driven by the queue's `decrease_key`
//!
//! # Example
//!
//! ```rust
//! use indexed_priority_queue::{IndexedPriorityQueue, OrderMode};
//!
//! let mut queue = IndexedPriorityQueue::new(5, OrderMode::Max);
//! queue.insert(0, 4)?;
//! queue.insert(2, 7)?;
//! queue.insert(1, 6)?;
//!
//! assert_eq!(queue.peek(), Some((2, &7)));
//!
//! queue.increase_key(1, 9)?;
//! assert_eq!(queue.pop()?, (1, 9));
//! assert_eq!(queue.pop()?, (2, 7));
//! # Ok::<(), indexed_priority_queue::Error>(())
//! ```

pub mod error;
pub mod order;
pub mod pathfinding;
pub mod queue;

// Re-export the main types for convenience
pub use error::Error;
pub use order::OrderMode;
pub use queue::IndexedPriorityQueue;
