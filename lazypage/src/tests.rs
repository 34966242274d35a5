use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn unloaded(len: usize) -> Vec<Option<String>> {
    vec![None; len]
}

fn visible(start_index: usize, end_index: usize) -> Option<VisibleRange> {
    Some(VisibleRange {
        start_index,
        end_index,
    })
}

fn scenario_pager() -> Pager {
    // count=1000, page_size=10, load_margin=5
    Pager::new(
        PagerOptions::new(1000)
            .with_page_size(10)
            .with_load_margin(5),
    )
}

#[test]
fn load_window_expands_and_clamps() {
    let p = scenario_pager();

    let w = p.load_window(VisibleRange {
        start_index: 20,
        end_index: 30,
    });
    assert_eq!(w.start_index, 15);
    assert_eq!(w.end_index, 35);

    // Clamped at zero on the low side.
    let w = p.load_window(VisibleRange {
        start_index: 2,
        end_index: 10,
    });
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 15);

    // Clamped at count on the high side.
    let w = p.load_window(VisibleRange {
        start_index: 990,
        end_index: 1000,
    });
    assert_eq!(w.start_index, 985);
    assert_eq!(w.end_index, 1000);
}

#[test]
fn load_window_past_count_is_empty() {
    let mut p = scenario_pager();
    p.set_count(10);
    let w = p.load_window(VisibleRange {
        start_index: 40,
        end_index: 50,
    });
    assert!(w.is_empty());
}

#[test]
fn unknown_visible_range_is_a_noop() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    let pages = p.update_frame(&items, None);
    assert!(pages.is_empty());
    assert_eq!(p.loading_count(), 0);
}

#[test]
fn gap_scan_requests_pages_in_ascending_order() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    // Visible (20, 30) expands to (15, 35), covering pages 1..=3
    // (indices 10..40).
    let pages = p.update_frame(&items, visible(20, 30));
    assert_eq!(pages, vec![1, 2, 3]);
    assert!(p.is_loading(1));
    assert!(p.is_loading(2));
    assert!(p.is_loading(3));
}

#[test]
fn pages_already_loading_are_excluded() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    assert!(p.begin_load(2));
    let pages = p.update_frame(&items, visible(20, 30));
    assert_eq!(pages, vec![1, 3]);
}

#[test]
fn repeated_frame_with_unchanged_inputs_requests_nothing() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    let first = p.update_frame(&items, visible(20, 30));
    assert_eq!(first.len(), 3);
    let second = p.update_frame(&items, visible(20, 30));
    assert!(second.is_empty());
    assert_eq!(p.loading_count(), 3);
}

#[test]
fn loaded_slots_produce_no_requests() {
    let mut p = scenario_pager();
    let mut items = unloaded(1000);
    for i in 10..40 {
        items[i] = Some(i.to_string());
    }
    let pages = p.update_frame(&items, visible(20, 30));
    assert!(pages.is_empty());
    assert_eq!(p.loading_count(), 0);
}

#[test]
fn partially_loaded_page_is_still_requested() {
    let mut p = scenario_pager();
    let mut items = unloaded(1000);
    // Page 2 half-filled: the remaining gaps keep it eligible.
    for i in 20..25 {
        items[i] = Some(i.to_string());
    }
    let pages = p.update_frame(&items, visible(20, 30));
    assert_eq!(pages, vec![1, 2, 3]);
}

#[test]
fn completion_removes_exactly_once() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    p.update_frame(&items, visible(20, 30));

    assert!(p.complete_load(2));
    assert!(!p.is_loading(2));
    // Second completion for the same page is a no-op.
    assert!(!p.complete_load(2));
    assert_eq!(p.loading_count(), 2);
}

#[test]
fn failed_page_is_rediscovered_on_the_next_scan() {
    let mut p = scenario_pager();
    let items = unloaded(1000);
    let first = p.update_frame(&items, visible(20, 30));
    assert_eq!(first, vec![1, 2, 3]);

    // Loader for page 1 fails: the flag is cleared, nothing is merged.
    assert!(p.complete_load(1));

    // Next trigger with an unchanged visible range re-requests page 1 only.
    let second = p.update_frame(&items, visible(20, 30));
    assert_eq!(second, vec![1]);
}

#[test]
fn scan_tolerates_physically_short_collections() {
    let mut p = Pager::new(
        PagerOptions::new(50)
            .with_page_size(10)
            .with_load_margin(0),
    );
    // The host has only materialized the first 10 slots.
    let items: Vec<Option<String>> = (0..10).map(|i| Some(i.to_string())).collect();
    let pages = p.update_frame(&items, visible(5, 15));
    assert_eq!(pages, vec![1]);
}

#[test]
fn page_math_round_trips() {
    let p = scenario_pager();
    assert_eq!(p.page_of(0), 0);
    assert_eq!(p.page_of(9), 0);
    assert_eq!(p.page_of(10), 1);
    assert_eq!(p.page_start(3), 30);
    assert_eq!(p.page_of(p.page_start(7)), 7);
}

#[test]
fn merge_is_positional() {
    let items: Vec<Option<&str>> = vec![None, None, None];
    let merged = merge_page(&items, &["a", "b"], 1);
    assert_eq!(merged, vec![None, Some("a"), Some("b")]);
}

#[test]
fn merge_overwrites_unconditionally() {
    let items = vec![Some("old"), Some("old"), None];
    let merged = merge_page(&items, &["new"], 0);
    assert_eq!(merged, vec![Some("new"), Some("old"), None]);
}

#[test]
fn merge_extends_past_the_physical_end() {
    let items: Vec<Option<&str>> = vec![None, None, None];
    let merged = merge_page(&items, &["x", "y"], 4);
    assert_eq!(merged, vec![None, None, None, None, Some("x"), Some("y")]);
}

#[test]
fn merge_leaves_other_slots_unchanged() {
    let items = vec![Some(0u32), None, Some(2), None, Some(4)];
    let merged = merge_page(&items, &[10, 11], 1);
    assert_eq!(merged, vec![Some(0), Some(10), Some(11), None, Some(4)]);
}

#[test]
fn merge_in_place_matches_functional_merge() {
    let items: Vec<Option<u32>> = vec![Some(1), None, None];
    let functional = merge_page(&items, &[7, 8, 9], 2);

    let mut in_place = items.clone();
    merge_page_in_place(&mut in_place, [7, 8, 9], 2);
    assert_eq!(in_place, functional);
}

#[test]
fn on_change_fires_on_registry_transitions() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let mut p = Pager::new(
        PagerOptions::new(1000)
            .with_page_size(10)
            .with_load_margin(5)
            .with_on_change(Some(move |_: &Pager| {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
    );
    let items = unloaded(1000);

    // One notification per frame that changed the registry.
    p.update_frame(&items, visible(20, 30));
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // A no-op frame stays silent.
    p.update_frame(&items, visible(20, 30));
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    p.complete_load(2);
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    // Completing an unknown page stays silent too.
    p.complete_load(99);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn collect_loading_pages_is_ascending() {
    let mut p = scenario_pager();
    p.begin_load(7);
    p.begin_load(1);
    p.begin_load(4);

    let mut out = Vec::new();
    p.collect_loading_pages(&mut out);
    assert_eq!(out, vec![1, 4, 7]);
}

#[test]
fn set_count_shrinks_the_load_window() {
    let mut p = scenario_pager();
    p.set_count(25);
    let w = p.load_window(VisibleRange {
        start_index: 20,
        end_index: 30,
    });
    assert_eq!(w.start_index, 15);
    assert_eq!(w.end_index, 25);

    let items = unloaded(25);
    let pages = p.update_frame(&items, visible(20, 30));
    assert_eq!(pages, vec![1, 2]);
}
