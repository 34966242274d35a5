use core::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use lazypage::{PageId, Pager, PagerOptions, merge_page};

use crate::host::{ListSurface, ScrollListener, ScrollRegion};
use crate::loader::{CompletionSink, LoadError, PageCompletion, PageLoader};

/// Drives a [`lazypage::Pager`] against a host surface.
///
/// The host forwards its lifecycle to [`Controller::on_mount`] and
/// [`Controller::on_update`]; on each signal the controller re-resolves the
/// scrollable ancestor, rebinds its scroll listener when the ancestor
/// changed identity, and runs one window/gap/load cycle. Scroll events on
/// the bound region run the same cycle. Page completions merge into the
/// host collection via [`ListSurface::publish_items`] in whatever order
/// they arrive.
///
/// Dropping the controller detaches the scroll listener and discards the
/// loading registry; in-flight completions that arrive afterwards are
/// ignored.
pub struct Controller<T, S: ListSurface<T>> {
    shared: Arc<Shared<T, S>>,
    bound: Option<Bound<S::Scroll>>,
}

struct Bound<R: ScrollRegion> {
    region: R,
    _binding: R::Binding,
}

struct Shared<T, S> {
    pager: Mutex<Pager>,
    surface: S,
    loader: PageLoader<T>,
}

impl<T, S> Controller<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSurface<T> + Send + Sync + 'static,
{
    pub fn new(surface: S, loader: PageLoader<T>, options: PagerOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                pager: Mutex::new(Pager::new(options)),
                surface,
                loader,
            }),
            bound: None,
        }
    }

    /// Host signal: the surface has just become visible/mounted.
    pub fn on_mount(&mut self) {
        self.update_scroll_region();
        Shared::run_pipeline(&self.shared);
    }

    /// Host signal: the surface's displayed data or configuration changed.
    pub fn on_update(&mut self) {
        self.update_scroll_region();
        Shared::run_pipeline(&self.shared);
    }

    /// Runs one pipeline cycle without touching the scroll binding.
    pub fn refresh(&self) {
        Shared::run_pipeline(&self.shared);
    }

    /// Detaches the scroll listener. The next mount/update signal
    /// re-attaches it.
    pub fn detach(&mut self) {
        self.bound = None;
    }

    pub fn is_loading_page(&self, page: PageId) -> bool {
        self.shared.pager().is_loading(page)
    }

    pub fn loading_count(&self) -> usize {
        self.shared.pager().loading_count()
    }

    /// Read access to the underlying pager state.
    pub fn with_pager<R>(&self, f: impl FnOnce(&Pager) -> R) -> R {
        f(&self.shared.pager())
    }

    fn update_scroll_region(&mut self) {
        let region = self.shared.surface.scroll_region();
        if let Some(bound) = &self.bound {
            if bound.region.same_region(&region) {
                return;
            }
        }
        ldebug!(rebind = self.bound.is_some(), "binding scroll listener");

        // Unhook the previous region before attaching to the new one.
        self.bound = None;

        let weak = Arc::downgrade(&self.shared);
        let listener: ScrollListener = Arc::new(move || {
            if let Some(shared) = weak.upgrade() {
                Shared::run_pipeline(&shared);
            }
        });
        let binding = region.bind_scroll(listener);
        self.bound = Some(Bound {
            region,
            _binding: binding,
        });
    }
}

impl<T, S> Shared<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSurface<T> + Send + Sync + 'static,
{
    fn pager(&self) -> MutexGuard<'_, Pager> {
        self.pager.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn run_pipeline(this: &Arc<Self>) {
        let visible = this.surface.visible_range();
        let pages = {
            let mut pager = this.pager();
            pager.set_count(this.surface.item_count());
            this.surface
                .with_items(|items| pager.update_frame(items, visible))
        };

        // Requests go out after the pager lock is released, so loaders may
        // complete synchronously without re-entering a held lock.
        for page in pages {
            ltrace!(page, "requesting page");
            let sink = Arc::downgrade(this);
            let sink: Weak<dyn CompletionSink<T>> = sink;
            (this.loader)(page, PageCompletion::new(sink, page));
        }
    }
}

impl<T, S> CompletionSink<T> for Shared<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: ListSurface<T> + Send + Sync + 'static,
{
    fn complete(&self, page: PageId, result: Result<Vec<T>, LoadError>) {
        let offset = {
            let mut pager = self.pager();
            pager.complete_load(page);
            pager.page_start(page)
        };

        match result {
            Ok(data) => {
                ltrace!(page, len = data.len(), "page resolved");
                let merged = self
                    .surface
                    .with_items(|items| merge_page(items, &data, offset));
                self.surface.publish_items(merged);
            }
            Err(error) => {
                lwarn!(page, %error, "page load failed; awaiting rediscovery");
                let _ = error;
            }
        }
    }
}

impl<T, S: ListSurface<T>> fmt::Debug for Controller<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("bound", &self.bound.is_some())
            .finish_non_exhaustive()
    }
}
