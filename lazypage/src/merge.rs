use alloc::vec::Vec;

/// Returns a copy of `items` with `page_data` written positionally at
/// `offset`.
///
/// Indices `[offset, offset + page_data.len())` are unconditionally
/// overwritten with loaded values; every other slot is unchanged. When the
/// page reaches past the physical end of `items`, the result is grown with
/// unloaded slots first so the full page lands — a page near the end of the
/// collection may therefore extend the result past the nominal item count,
/// and the rendering surface must ignore such out-of-domain entries.
///
/// This is the sole mutation path into the item collection: the pager never
/// touches the collection itself, it hands the merged result back to the
/// owning host state.
pub fn merge_page<T: Clone>(items: &[Option<T>], page_data: &[T], offset: usize) -> Vec<Option<T>> {
    let needed = offset.saturating_add(page_data.len());
    let mut merged = Vec::with_capacity(items.len().max(needed));
    merged.extend(items.iter().cloned());
    if merged.len() < needed {
        merged.resize(needed, None);
    }
    for (i, entry) in page_data.iter().enumerate() {
        merged[offset + i] = Some(entry.clone());
    }
    merged
}

/// In-place variant of [`merge_page`] that consumes the page data.
///
/// Same semantics: unconditional positional overwrite, growing `items` with
/// unloaded slots when the page extends past its current length.
pub fn merge_page_in_place<T>(
    items: &mut Vec<Option<T>>,
    page_data: impl IntoIterator<Item = T>,
    offset: usize,
) {
    let mut index = offset;
    for entry in page_data {
        if index >= items.len() {
            items.resize_with(index + 1, || None);
        }
        items[index] = Some(entry);
        index += 1;
    }
}
