//! Error types for heap page operations.

use std::fmt;

use crate::SlotId;

/// Errors from heap page operations.
///
/// Every failing operation leaves the page bytes unchanged, so a caller can
/// always retry or route the record elsewhere after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// A zero-length record was passed to insert or update.
    EmptyData,
    /// The page cannot hold the record.
    InsufficientSpace {
        /// Bytes the record requires.
        required: usize,
        /// Bytes the page can accept.
        available: usize,
    },
    /// Slot id out of range or referencing a free slot.
    InvalidSlotId(SlotId),
    /// Output buffer smaller than the stored record.
    InsufficientBuffer {
        /// Bytes the record occupies.
        required: usize,
        /// Capacity of the buffer provided.
        capacity: usize,
    },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::EmptyData => {
                write!(f, "record data is empty")
            }
            PageError::InsufficientSpace {
                required,
                available,
            } => {
                write!(
                    f,
                    "insufficient space: need {} bytes, have {} available",
                    required, available
                )
            }
            PageError::InvalidSlotId(slot_id) => {
                write!(f, "slot {} out of range or free", slot_id)
            }
            PageError::InsufficientBuffer { required, capacity } => {
                write!(
                    f,
                    "output buffer too small: record is {} bytes, buffer holds {}",
                    required, capacity
                )
            }
        }
    }
}

impl std::error::Error for PageError {}
