//! Adapter utilities for the `dragsort` crate.
//!
//! The `dragsort` crate is UI-agnostic and asks its host for a deferred tick and an animated
//! scroll. Many immediate-mode and terminal UIs have neither, so this crate provides small,
//! framework-neutral stand-ins:
//!
//! - [`TickScheduler`]: a deterministic deferred-tick queue driven by `advance(now_ms)`
//! - [`ScrollAnimator`] / [`ScrollTween`]: linear tween-based smooth scrolling sampled per frame
#![forbid(unsafe_code)]

extern crate alloc;

mod animator;
mod scheduler;
mod tween;

#[cfg(test)]
mod tests;

pub use animator::ScrollAnimator;
pub use scheduler::TickScheduler;
pub use tween::ScrollTween;
