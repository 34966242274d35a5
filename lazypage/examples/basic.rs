//! Drives the pager by hand over a simulated scroll session.
//!
//! Run with: `cargo run -p lazypage --example basic`

use lazypage::{Pager, PagerOptions, VisibleRange, merge_page_in_place};

fn fetch_page(page: usize, page_size: usize) -> Vec<String> {
    (0..page_size)
        .map(|i| format!("item #{}", page * page_size + i))
        .collect()
}

fn main() {
    let count = 1000;
    let page_size = 10;
    let mut pager = Pager::new(
        PagerOptions::new(count)
            .with_page_size(page_size)
            .with_load_margin(5),
    );

    let mut items: Vec<Option<String>> = vec![None; count];

    // Before the surface has measured anything, the cycle is a no-op.
    let pages = pager.update_frame(&items, None);
    assert!(pages.is_empty());

    // Scroll a 10-item viewport down the list.
    for top in (0..200).step_by(25) {
        let visible = VisibleRange {
            start_index: top,
            end_index: top + 10,
        };
        let pages = pager.update_frame(&items, Some(visible));
        println!("viewport {:?} -> requesting pages {:?}", visible, pages);

        // A synchronous "transport": fetch, merge, clear the loading flag.
        for page in pages {
            let data = fetch_page(page, page_size);
            merge_page_in_place(&mut items, data, pager.page_start(page));
            pager.complete_load(page);
        }
    }

    let loaded = items.iter().filter(|slot| slot.is_some()).count();
    println!("loaded {loaded} of {count} items");
}
