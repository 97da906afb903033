//! Error type for queue operations.
//!
//! Every failure the queue can report is a caller contract violation or a
//! legitimate empty/absent state, never a transient fault, and the queue is
//! left unchanged whenever an error comes back. Hosting layers map each kind
//! to their own response codes, which is why the offending index or mode
//! string rides along in the variant.

use std::fmt;

/// Error type for indexed priority queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An order-mode string was not one of the recognized values.
    InvalidConfiguration { mode: String },
    /// An index fell outside the queue's `[0, capacity)` domain.
    OutOfRange { index: usize, capacity: usize },
    /// An insert targeted an index that already holds a key.
    AlreadyPresent { index: usize },
    /// A keyed operation targeted an index with no stored key.
    NotPresent { index: usize },
    /// A pop was attempted on an empty queue.
    EmptyQueue,
    /// An increase or decrease supplied a key that does not move strictly
    /// in the required direction.
    InvalidUpdate { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration { mode } => {
                write!(f, "unrecognized order mode {:?} (expected \"max\" or \"min\")", mode)
            }
            Error::OutOfRange { index, capacity } => {
                write!(f, "index {} is out of range for capacity {}", index, capacity)
            }
            Error::AlreadyPresent { index } => {
                write!(f, "index {} already holds a key", index)
            }
            Error::NotPresent { index } => {
                write!(f, "index {} does not hold a key", index)
            }
            Error::EmptyQueue => write!(f, "queue is empty"),
            Error::InvalidUpdate { index } => {
                write!(
                    f,
                    "new key for index {} does not move strictly in the required direction",
                    index
                )
            }
        }
    }
}

impl std::error::Error for Error {}
