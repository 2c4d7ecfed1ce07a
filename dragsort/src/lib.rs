//! A headless long-press drag-and-drop reordering controller for scrollable lists.
//!
//! For adapter-level utilities (tick scheduling, smooth scroll tweens), see the
//! `dragsort-adapter` crate.
//!
//! This crate owns the interaction state machine and the reorder math: long-press to pick an
//! item up, a floating snapshot that follows the pointer, edge auto-scroll, and a hit-tested
//! exchange on release.
//!
//! It is UI-agnostic. A GUI layer is expected to provide (see [`ListHost`] / [`OverlayHost`]):
//! - raw pointer events and long-press notifications
//! - child bounds, viewport height, smooth scrolling, deferred ticks
//! - item snapshots and a floating overlay surface
//!
//! The data layer implements [`ReorderableCollection`]; [`SortableList`] covers the common
//! `Vec`-backed case.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod collection;
mod controller;
mod exchange;
pub mod geometry;
mod host;
mod options;
mod types;


pub use collection::{ReorderableCollection, SortableList};
pub use controller::{DragController, DragSession};
pub use exchange::{ExchangeMode, exchange, exchange_in_place};
pub use host::{ListHost, OverlayError, OverlayHost, Snapshot};
pub use options::DragOptions;
pub use types::{
    DragState, EventResult, ItemBounds, Point, PointerEvent, PointerKind, Rect, ScreenPosition,
    ScrollDirection, Size, TickToken,
};
