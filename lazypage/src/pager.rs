use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::registry::PageSet;
use crate::{LoadWindow, PageId, PagerOptions, VisibleRange};

/// A headless lazy pagination window manager.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the item collection; the host owns it and passes a
///   borrowed view into each pipeline run.
/// - It does not issue requests; [`Pager::update_frame`] returns the pages
///   to request and the caller dispatches them.
/// - It owns exactly one piece of state: the loading registry, the set of
///   page identifiers with an outstanding, unresolved load request.
///
/// The host drives it with a borrowed items view and the current visible
/// range on every trigger (mount, update, scroll); completions re-enter via
/// [`Pager::complete_load`] in any order.
///
/// For scroll-listener management and loader plumbing, see the
/// `lazypage-adapter` crate.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    loading: PageSet,
}

impl Pager {
    pub fn new(options: PagerOptions) -> Self {
        debug_assert!(options.page_size > 0, "page_size must be positive");
        ldebug!(
            count = options.count,
            page_size = options.page_size,
            load_margin = options.load_margin,
            "Pager::new"
        );
        Self {
            options,
            loading: PageSet::new(),
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    pub fn load_margin(&self) -> usize {
        self.options.load_margin
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn set_load_margin(&mut self, load_margin: usize) {
        if self.options.load_margin == load_margin {
            return;
        }
        self.options.load_margin = load_margin;
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    /// The page identifier for an item index.
    pub fn page_of(&self, index: usize) -> PageId {
        index / self.options.page_size
    }

    /// The first item index covered by a page.
    pub fn page_start(&self, page: PageId) -> usize {
        page * self.options.page_size
    }

    /// Widens the visible range by `load_margin` on both sides and clamps it
    /// to `[0, count]`.
    pub fn load_window(&self, visible: VisibleRange) -> LoadWindow {
        let start_index = visible.start_index.saturating_sub(self.options.load_margin);
        let end_index = cmp::min(
            visible.end_index.saturating_add(self.options.load_margin),
            self.options.count,
        );
        LoadWindow {
            start_index,
            end_index,
        }
    }

    /// Scans `[window.start_index, window.end_index)` in ascending order and
    /// collects the unique page identifiers that still contain unloaded
    /// slots and are not already in the loading registry.
    ///
    /// Indices past the physical length of `items` read as unloaded, so a
    /// margin-expanded window near the end of a short collection still
    /// discovers its pages. Output order is ascending page index.
    pub fn missing_pages<T>(&self, items: &[Option<T>], window: LoadWindow) -> Vec<PageId> {
        let mut pages = Vec::new();
        for index in window.start_index..window.end_index {
            if matches!(items.get(index), Some(Some(_))) {
                continue;
            }
            let page = self.page_of(index);
            // Ascending scan keeps duplicates adjacent.
            if pages.last() == Some(&page) {
                continue;
            }
            if self.loading.contains(&page) {
                continue;
            }
            pages.push(page);
        }
        pages
    }

    /// Runs one pipeline cycle: expand the visible range, scan for gaps, and
    /// mark every discovered page as loading.
    ///
    /// Returns the pages to request, in ascending page order. Every returned
    /// page is already in the loading registry when this returns, so a
    /// re-entrant or immediately repeated cycle never yields it again. The
    /// caller must issue exactly one load per returned page and deliver its
    /// completion to [`Pager::complete_load`].
    ///
    /// `None` for the visible range means the surface has not measured yet;
    /// the cycle is skipped and the registry is untouched.
    pub fn update_frame<T>(
        &mut self,
        items: &[Option<T>],
        visible: Option<VisibleRange>,
    ) -> Vec<PageId> {
        let Some(visible) = visible else {
            ltrace!("update_frame: visible range unknown, skipping cycle");
            return Vec::new();
        };

        let window = self.load_window(visible);
        if window.is_empty() {
            return Vec::new();
        }

        let pages = self.missing_pages(items, window);
        if pages.is_empty() {
            return pages;
        }

        for &page in &pages {
            self.loading.insert(page);
        }
        ldebug!(
            window_start = window.start_index,
            window_end = window.end_index,
            requested = pages.len(),
            "update_frame"
        );
        self.notify();
        pages
    }

    /// Marks a page as having an outstanding request.
    ///
    /// Returns `false` when the page was already loading. [`Pager::update_frame`]
    /// does this for every page it returns; call this directly only when
    /// issuing loads outside the gap-scan pipeline.
    pub fn begin_load(&mut self, page: PageId) -> bool {
        let inserted = self.loading.insert(page);
        if inserted {
            ltrace!(page, "begin_load");
            self.notify();
        }
        inserted
    }

    /// Clears a page's loading flag. Called on success *and* failure.
    ///
    /// On failure the page simply becomes eligible for rediscovery on the
    /// next gap scan (passive retry). Returns whether the page was loading.
    pub fn complete_load(&mut self, page: PageId) -> bool {
        let removed = self.loading.remove(&page);
        if removed {
            ltrace!(page, "complete_load");
            self.notify();
        } else {
            lwarn!(page, "complete_load: page was not loading");
        }
        removed
    }

    pub fn is_loading(&self, page: PageId) -> bool {
        self.loading.contains(&page)
    }

    pub fn loading_count(&self) -> usize {
        self.loading.len()
    }

    /// Iterates over the pages currently marked loading, in no particular
    /// order, without allocations.
    pub fn for_each_loading_page(&self, mut f: impl FnMut(PageId)) {
        for &page in &self.loading {
            f(page);
        }
    }

    /// Collects the pages currently marked loading into `out`, ascending.
    ///
    /// This clears `out` first.
    pub fn collect_loading_pages(&self, out: &mut Vec<PageId>) {
        out.clear();
        self.for_each_loading_page(|page| out.push(page));
        out.sort_unstable();
    }
}
