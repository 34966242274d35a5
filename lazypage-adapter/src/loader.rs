use core::fmt;
use std::sync::{Arc, Weak};

use lazypage::PageId;
use thiserror::Error;

/// Error reported by a failed page load.
///
/// Informational only: the controller clears the page's loading flag and
/// logs the error; the page stays visually unloaded and is rediscovered by
/// the next gap scan (passive retry). Nothing propagates to the surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page {page} failed to load: {reason}")]
pub struct LoadError {
    pub page: PageId,
    pub reason: String,
}

impl LoadError {
    pub fn new(page: PageId, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }
}

/// Caller-supplied page loader.
///
/// Called once per newly discovered gap page, in ascending page order. The
/// loader may complete the handle synchronously from inside the call, or
/// stash it and complete later from the host event loop — both are
/// equivalent. Once issued, a load is never cancelled; a handle that is
/// dropped without completing leaves its page marked loading forever, so
/// loaders must eventually resolve or reject.
pub type PageLoader<T> = Arc<dyn Fn(PageId, PageCompletion<T>) + Send + Sync>;

pub(crate) trait CompletionSink<T>: Send + Sync {
    fn complete(&self, page: PageId, result: Result<Vec<T>, LoadError>);
}

/// Single-use completion handle for one page load.
///
/// Consumed by [`PageCompletion::resolve`] or [`PageCompletion::reject`], so
/// a load completes at most once. Holds only a weak reference to the
/// controller: completions arriving after teardown are silently dropped.
pub struct PageCompletion<T> {
    sink: Weak<dyn CompletionSink<T>>,
    page: PageId,
}

impl<T> PageCompletion<T> {
    pub(crate) fn new(sink: Weak<dyn CompletionSink<T>>, page: PageId) -> Self {
        Self { sink, page }
    }

    /// The page this handle completes.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Completes the load with a full page of data. The controller merges it
    /// into the host collection at `page * page_size` and clears the loading
    /// flag.
    pub fn resolve(self, data: Vec<T>) {
        self.finish(Ok(data));
    }

    /// Completes the load with a failure. The loading flag is cleared and
    /// the page becomes eligible for rediscovery on the next trigger.
    pub fn reject(self, error: LoadError) {
        self.finish(Err(error));
    }

    fn finish(self, result: Result<Vec<T>, LoadError>) {
        if let Some(sink) = self.sink.upgrade() {
            sink.complete(self.page, result);
        }
    }
}

impl<T> fmt::Debug for PageCompletion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCompletion")
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}
