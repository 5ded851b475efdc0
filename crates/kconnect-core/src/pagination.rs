//! Incremental Pagination
//!
//! Window over an in-memory collection that grows one page at a time as the
//! sentinel at the end of the rendered list becomes visible.
//!
//! The visible length is always `min(current_page * page_size, total)` and
//! `has_more` holds iff that length is below `total`.

/// Number of cards revealed per page
pub const PAGE_SIZE: usize = 10;

/// Cosmetic pause before a new page is revealed
pub const LOAD_MORE_DELAY_MS: u32 = 300;

/// Snapshot of the window for a given collection size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page_size: usize,
    pub current_page: usize,
    pub has_more: bool,
}

impl PageCursor {
    pub fn visible_len(&self, total: usize) -> usize {
        self.current_page.saturating_mul(self.page_size).min(total)
    }
}

/// Handle for a scheduled page load.
///
/// Only the ticket issued by the latest `begin_load` since the last reset
/// can advance the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    current_page: usize,
    loading: bool,
    /// Identity of the collection the window was built for
    source_key: u64,
    /// Bumped on every reset and every completed load
    epoch: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageWindow {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            loading: false,
            source_key: 0,
            epoch: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn visible_len(&self, total: usize) -> usize {
        self.current_page.saturating_mul(self.page_size).min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible_len(total) < total
    }

    /// Snapshot for the collection identified by `source_key`.
    ///
    /// A key the window has not been synced to yet reads as page 1, so a
    /// replaced collection never renders through the previous window.
    pub fn cursor(&self, source_key: u64, total: usize) -> PageCursor {
        let current_page = if source_key == self.source_key { self.current_page } else { 1 };
        let cursor = PageCursor {
            page_size: self.page_size,
            current_page,
            has_more: false,
        };
        PageCursor {
            has_more: cursor.visible_len(total) < total,
            ..cursor
        }
    }

    /// Back to page 1; any pending load is abandoned.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.loading = false;
        self.epoch += 1;
    }

    /// Reset when the collection identity changed. Returns whether it did.
    pub fn sync_source(&mut self, source_key: u64) -> bool {
        if source_key == self.source_key {
            return false;
        }
        self.source_key = source_key;
        self.reset();
        true
    }

    /// Called when the sentinel becomes visible.
    ///
    /// Returns `None` while a load is in flight or when every page is shown.
    pub fn begin_load(&mut self, total: usize) -> Option<LoadTicket> {
        if self.loading || !self.has_more(total) {
            return None;
        }
        self.loading = true;
        Some(LoadTicket { epoch: self.epoch })
    }

    /// Reveal the next page. Stale tickets are ignored and return `false`.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if !self.loading || ticket.epoch != self.epoch {
            return false;
        }
        self.current_page += 1;
        self.loading = false;
        self.epoch += 1;
        true
    }
}

/// Pages needed to show every item: `ceil(total / page_size)`
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the window to the end, returning the page reached.
    fn exhaust(window: &mut PageWindow, total: usize) -> usize {
        while let Some(ticket) = window.begin_load(total) {
            assert!(window.complete(ticket));
        }
        window.current_page()
    }

    #[test]
    fn test_pages_to_exhaust_is_ceil() {
        for page_size in [1, 3, 10] {
            for total in 1..=35 {
                let mut window = PageWindow::new(page_size);
                let expected = page_count(total, page_size);
                // has_more stays true until the last page
                while window.current_page() < expected {
                    assert!(window.has_more(total), "total={} page={}", total, window.current_page());
                    let ticket = window.begin_load(total).unwrap();
                    window.complete(ticket);
                }
                assert!(!window.has_more(total));
                assert_eq!(exhaust(&mut window, total), expected);
                assert_eq!(window.visible_len(total), total);
            }
        }
    }

    #[test]
    fn test_empty_collection() {
        let mut window = PageWindow::new(10);
        assert_eq!(window.visible_len(0), 0);
        assert!(!window.has_more(0));
        assert_eq!(window.begin_load(0), None);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_visible_len_invariant() {
        let mut window = PageWindow::new(4);
        let total = 10;
        assert_eq!(window.visible_len(total), 4);
        let t = window.begin_load(total).unwrap();
        window.complete(t);
        assert_eq!(window.visible_len(total), 8);
        let t = window.begin_load(total).unwrap();
        window.complete(t);
        assert_eq!(window.visible_len(total), 10);
        assert_eq!(window.cursor(0, total), PageCursor { page_size: 4, current_page: 3, has_more: false });
        assert_eq!(window.cursor(0, total).visible_len(total), window.visible_len(total));
    }

    #[test]
    fn test_no_second_load_while_in_flight() {
        let mut window = PageWindow::new(5);
        let ticket = window.begin_load(20).unwrap();
        assert!(window.is_loading());
        assert_eq!(window.begin_load(20), None);
        assert!(window.complete(ticket));
        assert!(!window.complete(ticket));
        assert_eq!(window.current_page(), 2);
    }

    #[test]
    fn test_source_change_resets_to_first_page() {
        let mut window = PageWindow::new(5);
        window.sync_source(1);
        exhaust(&mut window, 23);
        assert_eq!(window.current_page(), 5);

        assert!(!window.sync_source(1));
        assert_eq!(window.current_page(), 5);

        assert!(window.sync_source(2));
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.visible_len(23), 5);
    }

    #[test]
    fn test_cursor_for_unsynced_source_reads_first_page() {
        let mut window = PageWindow::new(5);
        window.sync_source(1);
        exhaust(&mut window, 23);
        assert_eq!(window.cursor(1, 23).visible_len(23), 23);

        // Replacement observed before the window is synced
        let cursor = window.cursor(2, 40);
        assert_eq!(cursor, PageCursor { page_size: 5, current_page: 1, has_more: true });
        assert_eq!(cursor.visible_len(40), 5);
        assert_eq!(window.current_page(), 5);

        assert!(window.sync_source(2));
        assert_eq!(window.cursor(2, 40), cursor);
    }

    #[test]
    fn test_load_scheduled_before_reset_is_dropped() {
        let mut window = PageWindow::new(5);
        let stale = window.begin_load(30).unwrap();
        window.sync_source(7);

        let fresh = window.begin_load(30).unwrap();
        assert!(!window.complete(stale));
        assert_eq!(window.current_page(), 1);
        assert!(window.complete(fresh));
        assert_eq!(window.current_page(), 2);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let window = PageWindow::new(0);
        assert_eq!(window.page_size(), 1);
        assert_eq!(page_count(3, 0), 3);
    }
}
