use std::sync::Arc;

use lazypage::VisibleRange;

/// Callback attached to a scroll region; fired on every scroll event.
pub type ScrollListener = Arc<dyn Fn() + Send + Sync>;

/// A handle to a scrollable ancestor, comparable by identity.
///
/// The controller re-resolves the ancestor on every mount/update signal and
/// rebinds its listener when the identity changes (e.g. the host tree
/// re-layouts and the list ends up under a different scroll container).
pub trait ScrollRegion {
    /// Keeps the scroll listener attached. Dropping it detaches.
    type Binding;

    /// Attaches `listener` so it fires on every scroll event of this region.
    fn bind_scroll(&self, listener: ScrollListener) -> Self::Binding;

    /// Identity comparison: `true` when both handles refer to the same
    /// underlying region.
    fn same_region(&self, other: &Self) -> bool;
}

/// The rendering surface and host state the controller runs against.
///
/// The controller reads the visible range, the item count, and the sparse
/// collection from here on every pipeline run, and hands merged collections
/// back through [`ListSurface::publish_items`] — it never mutates the
/// collection in place.
pub trait ListSurface<T> {
    type Scroll: ScrollRegion;

    /// The currently visible `[start, end)` item range, or `None` before the
    /// surface has laid out content. `None` skips the cycle entirely.
    fn visible_range(&self) -> Option<VisibleRange>;

    /// Resolves the nearest scrollable ancestor.
    fn scroll_region(&self) -> Self::Scroll;

    /// Total logical item count (may change across renders).
    fn item_count(&self) -> usize;

    /// Borrowed read of the current sparse collection. `None` slots are
    /// unloaded. The slice may be physically shorter than
    /// [`ListSurface::item_count`]; missing tail indices read as unloaded.
    fn with_items<R>(&self, f: impl FnOnce(&[Option<T>]) -> R) -> R;

    /// Hands a merged collection back to the host's state-update mechanism.
    fn publish_items(&self, items: Vec<Option<T>>);
}
