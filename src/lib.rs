//! Slotted heap page storage for variable-length records.
//!
//! A heap page manages variable-length records within a fixed 4KB buffer.
//! The page layout consists of:
//!
//! ```text
//! +----------------------+ offset 0
//! | HeapPageHeader (24B) |
//! +----------------------+ offset 24
//! | Slot Directory       | (grows downward, 8 bytes per slot)
//! +----------------------+ <- free_space_begin
//! | Free Space           |
//! +----------------------+ <- free_space_end
//! | Records              | (grows upward from the page tail)
//! +----------------------+ offset 4096
//! ```
//!
//! Records are stored from the bottom of the page upward, while the slot
//! directory grows downward from the header. Records stay compacted against
//! the page tail at all times: a delete shifts the records below the hole so
//! that free space remains a single contiguous range. Slot ids are stable
//! across this relocation, which is what makes them usable as persistent
//! record identifiers by a heap file layer.
//!
//! - [`HeapPage`]: record insert/get/update/delete over a caller-owned buffer
//! - [`HeapPageScanner`]: forward iterator over the live slot ids of a page
//! - [`HeapPageHeader`]: the fixed 24-byte page header codec
//! - [`PageBuf`]: page-aligned zeroed buffer allocation
//!
//! The crate owns no I/O and takes no locks. A buffer pool above it is
//! expected to own the raw page bytes and to latch pages across operation
//! sequences; the page itself is a single-threaded data structure.

pub mod buf;
pub mod error;
pub mod header;
pub mod page;
pub mod scanner;

pub use buf::PageBuf;
pub use error::PageError;
pub use header::{HeapPageHeader, HEAP_PAGE_HEADER_SIZE};
pub use page::{HeapPage, SlotInfo, MAX_RECORD_SIZE, SLOT_INFO_SIZE};
pub use scanner::HeapPageScanner;

use static_assertions::const_assert;

/// Size of a page in bytes.
pub const PAGE_SIZE: usize = 4096;

/// Page number within a heap file.
///
/// The page itself stores prev/next page numbers in its header but never
/// interprets them; chaining pages into a file is the consumer's concern.
pub type PageNum = u32;

/// Zero-based index into a page's slot directory.
pub type SlotId = u32;

/// Page number of an unlinked page.
pub const INVALID_PAGE_NUM: PageNum = PageNum::MAX;

/// Slot id returned by a scanner once the directory is exhausted.
pub const INVALID_SLOT_ID: SlotId = SlotId::MAX;

/// Offset value marking a free slot directory entry.
///
/// This bit pattern is part of the persisted page format.
pub const INVALID_SLOT_OFFSET: u32 = u32::MAX;

const_assert!(PAGE_SIZE >= 512);
const_assert!(PAGE_SIZE.is_power_of_two());
const_assert!(PAGE_SIZE <= u32::MAX as usize);
const_assert!(HEAP_PAGE_HEADER_SIZE % 8 == 0);
const_assert!(HEAP_PAGE_HEADER_SIZE + SLOT_INFO_SIZE < PAGE_SIZE);
