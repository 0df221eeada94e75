//! Live-slot scanner for a single heap page.

use crate::page::HeapPage;
use crate::{SlotId, INVALID_SLOT_ID};

/// Forward scanner producing the live slot ids of a heap page in ascending
/// order, silently skipping free directory entries.
///
/// The scanner borrows the page and never mutates it. Iteration order is
/// only deterministic while the page is left alone; callers that mutate the
/// page between [`get_next`](Self::get_next) calls get whatever the
/// directory looks like at that point.
///
/// # Example
///
/// ```
/// use heappage::{HeapPage, HeapPageScanner, PageBuf, INVALID_SLOT_ID};
///
/// let mut page = HeapPage::new(PageBuf::new());
/// page.initialize_header();
/// page.insert_record(b"a").unwrap();
/// page.insert_record(b"b").unwrap();
///
/// let mut scanner = HeapPageScanner::new(&page);
/// assert_eq!(scanner.get_next(), 0);
/// assert_eq!(scanner.get_next(), 1);
/// assert_eq!(scanner.get_next(), INVALID_SLOT_ID);
/// ```
pub struct HeapPageScanner<'a, T> {
    page: &'a HeapPage<T>,
    cur_slot: SlotId,
}

impl<'a, T: AsRef<[u8]>> HeapPageScanner<'a, T> {
    /// Creates a scanner positioned at the first slot of `page`.
    pub fn new(page: &'a HeapPage<T>) -> Self {
        Self { page, cur_slot: 0 }
    }

    /// Returns the next live slot id, or [`INVALID_SLOT_ID`] once the
    /// directory is exhausted.
    ///
    /// Calls after exhaustion keep returning [`INVALID_SLOT_ID`].
    pub fn get_next(&mut self) -> SlotId {
        let capacity = self.page.header().capacity;
        while self.cur_slot < capacity {
            let slot_id = self.cur_slot;
            self.cur_slot += 1;
            if !self.page.slot(slot_id).is_free() {
                return slot_id;
            }
        }
        INVALID_SLOT_ID
    }

    /// Rebinds the scanner to `page` and rewinds it to the first slot.
    pub fn reset(&mut self, page: &'a HeapPage<T>) {
        self.page = page;
        self.cur_slot = 0;
    }
}

impl<'a, T: AsRef<[u8]>> Iterator for HeapPageScanner<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<SlotId> {
        match self.get_next() {
            INVALID_SLOT_ID => None,
            slot_id => Some(slot_id),
        }
    }
}
