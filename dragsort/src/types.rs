/// A coordinate in the list widget's local space (or in screen space, depending on context).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in list-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    ///
    /// Empty rectangles contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// An absolute, pixel-snapped screen position for the floating visual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPosition {
    pub x: i32,
    pub y: i32,
}

impl ScreenPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer/touch event; `position` is in the list widget's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, Point::new(x, y))
    }

    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, Point::new(x, y))
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, Point::new(x, y))
    }

    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Cancel, Point::new(x, y))
    }
}

/// Whether the controller consumed an event.
///
/// Hosts should fall through to their default press/click handling on `NotHandled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventResult {
    Handled,
    NotHandled,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    /// `-1.0` for backward, `1.0` for forward.
    pub fn sign(self) -> f32 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// One entry of the host's ordered child snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds<Id> {
    pub id: Id,
    pub rect: Rect,
}

impl<Id> ItemBounds<Id> {
    pub fn new(id: Id, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// The observable state of a [`crate::DragController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    Idle,
    /// Pointer is down, no long-press yet.
    Pressed,
    Dragging,
}

/// Identifies the drag session that scheduled an auto-scroll tick.
///
/// The controller ignores tokens that do not belong to the current session, so a host may
/// deliver ticks late (or not cancel them at all) without affecting a later drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickToken {
    pub session: u64,
}
