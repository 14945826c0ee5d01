//! Termination logic for page-number pagination with an optional,
//! possibly intermittent `totalPages`.
//!
//! Searchspring reports `pagination.totalPages` on most pages, but some
//! responses (past-the-end pages in particular) omit it. Once a total has
//! been seen it is kept for the rest of the walk. When no total was ever
//! reported, the first page with no results ends the walk.

/// Remembers the last reported page total across a walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageTracker {
    total_pages: Option<u32>,
}

impl PageTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records what `page` reported and returns `true` when the walk is done.
    ///
    /// A reported total of `0` counts as "not reported".
    pub fn observe(&mut self, page: u32, reported_total: Option<u32>, results_empty: bool) -> bool {
        if let Some(total) = reported_total.filter(|t| *t > 0) {
            self.total_pages = Some(total);
        }

        match self.total_pages {
            None => results_empty,
            Some(total) => page >= total,
        }
    }

    /// Last known total, if any page reported one.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_when_page_reaches_reported_total() {
        let mut tracker = PageTracker::new();
        assert!(tracker.observe(1, Some(1), false));
    }

    #[test]
    fn known_total_ignores_empty_results() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, Some(3), true));
    }

    #[test]
    fn continues_below_total() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, Some(2), false));
        assert!(tracker.observe(2, Some(2), false));
    }

    #[test]
    fn unknown_total_stops_on_empty_results() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, None, false));
        assert!(!tracker.observe(2, None, false));
        assert!(tracker.observe(3, None, true));
    }

    #[test]
    fn total_is_remembered_when_later_page_omits_it() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, Some(3), false));
        // Page 2 omits totalPages and happens to be empty: still not done.
        assert!(!tracker.observe(2, None, true));
        assert_eq!(tracker.total_pages(), Some(3));
        assert!(tracker.observe(3, None, false));
    }

    #[test]
    fn zero_total_counts_as_unreported() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, Some(0), false));
        assert!(tracker.total_pages().is_none());
        assert!(tracker.observe(2, Some(0), true));
    }

    #[test]
    fn later_total_overrides_earlier_one() {
        let mut tracker = PageTracker::new();
        assert!(!tracker.observe(1, Some(2), false));
        assert!(!tracker.observe(2, Some(4), false));
        assert_eq!(tracker.total_pages(), Some(4));
    }
}
