use alloc::string::String;
use alloc::vec::Vec;

use crate::{ItemBounds, Point, ScreenPosition, Size, TickToken};

/// Failure of a floating-visual operation.
///
/// The controller treats these as presentation-only: it logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The overlay surface (or the window hosting it) is gone.
    #[error("overlay surface is no longer attached")]
    Detached,
    #[error("overlay request rejected: {0}")]
    Rejected(String),
}

/// An immutable capture of an item's current appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<I> {
    pub image: I,
    pub size: Size,
}

impl<I> Snapshot<I> {
    pub fn new(image: I, size: Size) -> Self {
        Self { image, size }
    }
}

/// Services the controller consumes from the host list widget.
///
/// All coordinates are in the list's local space unless stated otherwise.
pub trait ListHost {
    type ItemId;

    /// Visible height of the list viewport.
    fn visible_height(&self) -> f32;

    /// The currently laid-out children in visual order, with their bounds.
    fn items(&self) -> Vec<ItemBounds<Self::ItemId>>;

    /// Absolute screen location of the list's origin, if known.
    fn screen_origin(&self) -> Option<Point>;

    /// Screen location of fixed window chrome above the content (e.g. a title bar).
    ///
    /// `None` means the host has none or cannot tell; the controller uses zero.
    fn chrome_offset(&self) -> Option<Point> {
        None
    }

    fn set_item_visible(&mut self, item: &Self::ItemId, visible: bool);

    /// Starts a smooth scroll by a signed pixel delta.
    fn smooth_scroll_by(&mut self, delta: f32, duration_ms: u64);

    /// Arranges for [`crate::DragController::on_scroll_tick`] to be called with `token` after
    /// `delay_ms`, on the same thread as pointer events.
    fn schedule_tick(&mut self, delay_ms: u64, token: TickToken);

    /// Drops any pending tick for `token`. Optional: stale ticks are ignored anyway.
    fn cancel_ticks(&mut self, token: TickToken) {
        let _ = token;
    }
}

/// Rendering services: snapshot capture and an input-transparent, always-on-top overlay.
pub trait OverlayHost {
    type ItemId;
    type Image;
    /// Handle to a live floating visual. Owned by the controller for one drag session.
    type Overlay;

    /// Captures the item's current appearance. `None` means nothing could be captured and the
    /// drag will not start.
    fn capture_item(&mut self, item: &Self::ItemId) -> Option<Snapshot<Self::Image>>;

    fn create_overlay(
        &mut self,
        image: Self::Image,
        size: Size,
        position: ScreenPosition,
    ) -> Result<Self::Overlay, OverlayError>;

    fn move_overlay(
        &mut self,
        overlay: &mut Self::Overlay,
        position: ScreenPosition,
    ) -> Result<(), OverlayError>;

    fn destroy_overlay(&mut self, overlay: Self::Overlay) -> Result<(), OverlayError>;
}
