//! A headless lazy pagination window manager.
//!
//! Given a very large logical sequence of items, a fixed page size, and the
//! currently visible item range, [`Pager`] decides which pages of data are
//! missing, deduplicates them against in-flight requests, and lets the host
//! merge returned pages back into its sparse collection so a rendering
//! surface can show placeholders for unloaded items and real content for
//! loaded ones.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the visible item range (or "unknown" before first layout)
//! - the sparse item collection (`None` slots are unloaded)
//! - the transport that actually fetches a page
//!
//! For host-binding utilities (surface/scroll traits, loader completion
//! handles, mount/update/scroll triggers), see the `lazypage-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod merge;
mod options;
mod pager;
mod registry;
mod types;

#[cfg(test)]
mod tests;

pub use merge::{merge_page, merge_page_in_place};
pub use options::{OnChangeCallback, PagerOptions};
pub use pager::Pager;
pub use types::{LoadWindow, PageId, VisibleRange};
