//! Host-binding utilities for the `lazypage` crate.
//!
//! The `lazypage` crate is UI-agnostic and focuses on the core windowing,
//! gap-detection, and merge state. This crate provides the glue a host
//! needs to run it against a real rendering surface:
//!
//! - Narrow traits for the surface and its scrollable ancestor
//!   ([`ListSurface`], [`ScrollRegion`])
//! - An explicit completion-handle loader contract ([`PageLoader`],
//!   [`PageCompletion`])
//! - A [`Controller`] that re-runs the pipeline on mount/update/scroll and
//!   rebinds its scroll listener when the ancestor changes identity
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/DOM
//! bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod host;
mod loader;


pub use controller::Controller;
pub use host::{ListSurface, ScrollListener, ScrollRegion};
pub use loader::{LoadError, PageCompletion, PageLoader};
