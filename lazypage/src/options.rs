use alloc::sync::Arc;

use crate::pager::Pager;

/// A callback fired when the pager's state changes (loading registry
/// transitions, option updates).
pub type OnChangeCallback = Arc<dyn Fn(&Pager) + Send + Sync>;

/// Configuration for [`crate::Pager`].
///
/// `page_size` is constant for the lifetime of a pager instance; `count` and
/// `load_margin` may be updated between pipeline runs via the pager's
/// setters.
#[derive(Clone)]
pub struct PagerOptions {
    /// Total amount of items, on all pages.
    pub count: usize,
    /// Items per page. Must be positive; a page's data occupies exactly
    /// `page_size` consecutive indices starting at `page * page_size`.
    pub page_size: usize,
    /// Extra items to treat as "needs loading soon" beyond the strictly
    /// visible range, on both sides.
    pub load_margin: usize,
    /// Optional callback fired when the pager's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl PagerOptions {
    /// Creates options with the default `page_size` (25) and `load_margin` (5).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            page_size: 25,
            load_margin: 5,
            on_change: None,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page_size must be positive");
        self.page_size = page_size;
        self
    }

    pub fn with_load_margin(mut self, load_margin: usize) -> Self {
        self.load_margin = load_margin;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("count", &self.count)
            .field("page_size", &self.page_size)
            .field("load_margin", &self.load_margin)
            .finish_non_exhaustive()
    }
}
