/// A page identifier: the zero-based block number `index / page_size`.
pub type PageId = usize;

/// The currently visible item range, as reported by the rendering surface.
///
/// `end_index` is exclusive. "Not yet measurable" (before first layout) is
/// represented as `Option<VisibleRange>::None` at the call sites that accept
/// it; a `VisibleRange` value always has both bounds known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }
}

/// The visible range widened by the load margin and clamped to `[0, count]`.
///
/// Indices in `[start_index, end_index)` are "needs loading soon"; the gap
/// scan walks exactly this window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl LoadWindow {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }
}
