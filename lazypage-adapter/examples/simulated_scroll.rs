//! Runs the controller against an in-memory surface with a deferred loader.
//!
//! Scroll events discover gap pages; completions are queued and resolved a
//! "frame" later, out of order, to show that merges land wherever the
//! viewport has moved in the meantime.
//!
//! Run with: `cargo run -p lazypage-adapter --example simulated_scroll`

use std::sync::{Arc, Mutex};

use lazypage::{PageId, PagerOptions, VisibleRange};
use lazypage_adapter::{
    Controller, ListSurface, PageCompletion, PageLoader, ScrollListener, ScrollRegion,
};

struct Region {
    id: usize,
    listeners: Arc<Mutex<Vec<ScrollListener>>>,
}

struct Binding {
    listeners: Arc<Mutex<Vec<ScrollListener>>>,
}

impl ScrollRegion for Region {
    type Binding = Binding;

    fn bind_scroll(&self, listener: ScrollListener) -> Binding {
        self.listeners.lock().unwrap().push(listener);
        Binding {
            listeners: Arc::clone(&self.listeners),
        }
    }

    fn same_region(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        self.listeners.lock().unwrap().clear();
    }
}

struct Surface {
    items: Mutex<Vec<Option<String>>>,
    count: usize,
    visible: Mutex<Option<VisibleRange>>,
    listeners: Arc<Mutex<Vec<ScrollListener>>>,
}

// Newtype around `Arc<Surface>` so the trait impl satisfies the orphan rule.
struct SurfaceHandle(Arc<Surface>);

impl ListSurface<String> for SurfaceHandle {
    type Scroll = Region;

    fn visible_range(&self) -> Option<VisibleRange> {
        *self.0.visible.lock().unwrap()
    }

    fn scroll_region(&self) -> Region {
        Region {
            id: 0,
            listeners: Arc::clone(&self.0.listeners),
        }
    }

    fn item_count(&self) -> usize {
        self.0.count
    }

    fn with_items<R>(&self, f: impl FnOnce(&[Option<String>]) -> R) -> R {
        f(&self.0.items.lock().unwrap())
    }

    fn publish_items(&self, items: Vec<Option<String>>) {
        *self.0.items.lock().unwrap() = items;
    }
}

fn main() {
    let count = 500;
    let page_size = 25;
    let surface = Arc::new(Surface {
        items: Mutex::new(vec![None; count]),
        count,
        visible: Mutex::new(None),
        listeners: Arc::default(),
    });

    // Loads are queued instead of answered inline.
    let pending: Arc<Mutex<Vec<PageCompletion<String>>>> = Arc::default();
    let queue = Arc::clone(&pending);
    let loader: PageLoader<String> = Arc::new(move |page, completion| {
        println!("  -> load requested for page {page}");
        queue.lock().unwrap().push(completion);
    });

    let mut controller = Controller::new(
        SurfaceHandle(Arc::clone(&surface)),
        loader,
        PagerOptions::new(count).with_page_size(page_size),
    );
    controller.on_mount();

    for frame in 0u32..8 {
        // Resolve everything queued on the previous frame, newest first.
        let queued: Vec<_> = pending.lock().unwrap().drain(..).rev().collect();
        for completion in queued {
            let page: PageId = completion.page();
            let data = (0..page_size)
                .map(|i| format!("item #{}", page * page_size + i))
                .collect();
            println!("  <- page {page} arrived");
            completion.resolve(data);
        }

        // The viewport drifts downward; each move fires a scroll event.
        let top = (frame as usize) * 30;
        *surface.visible.lock().unwrap() = Some(VisibleRange {
            start_index: top,
            end_index: top + 12,
        });
        println!("frame {frame}: viewport at {top}..{}", top + 12);
        let listeners: Vec<_> = surface.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener();
        }
    }

    let loaded = surface
        .items
        .lock()
        .unwrap()
        .iter()
        .filter(|slot| slot.is_some())
        .count();
    let in_flight = controller.loading_count();
    println!("loaded {loaded} of {count} items, {in_flight} still in flight");
}
