//! Pure placement math used by the controller.

use crate::{ItemBounds, Point, ScreenPosition, ScrollDirection, Size};

/// Computes the floating visual's top-left screen position for a pointer at `pointer`
/// (list-local).
///
/// `list_origin_y` is the list's absolute screen y; `chrome_y` is the screen y of fixed window
/// chrome (e.g. a title bar), which the overlay surface already accounts for. With `center`,
/// the visual is shifted up and left by half its whole-pixel size so it sits centered under
/// the pointer. The pointer is snapped to whole pixels first.
pub fn overlay_position(
    pointer: Point,
    list_origin_y: f32,
    chrome_y: f32,
    size: Size,
    center: bool,
) -> ScreenPosition {
    let mut x = pointer.x.round() as i32;
    let mut y = pointer.y.round() as i32 + (list_origin_y.round() - chrome_y.round()) as i32;
    if center {
        x -= size.width as i32 / 2;
        y -= size.height as i32 / 2;
    }
    ScreenPosition::new(x, y)
}

/// Classifies a pointer's vertical position into an auto-scroll zone.
///
/// The dragged item's top edge is inferred as `pointer_y - item_height / 2`. Returns
/// `Backward` when that edge is within `margin` of the top, `Forward` when the item's bottom
/// edge is within `margin` of `list_height`, and `None` otherwise.
pub fn scroll_zone(
    pointer_y: f32,
    item_height: f32,
    list_height: f32,
    margin: f32,
) -> Option<ScrollDirection> {
    let top = pointer_y - item_height / 2.0;
    if top < margin {
        Some(ScrollDirection::Backward)
    } else if top + item_height > list_height - margin {
        Some(ScrollDirection::Forward)
    } else {
        None
    }
}

/// Returns the first item (in visual order) other than `dragged` whose bounds contain `point`.
///
/// `point` is snapped to whole pixels before testing.
pub fn hit_test<'a, Id: PartialEq>(
    items: &'a [ItemBounds<Id>],
    dragged: &Id,
    point: Point,
) -> Option<&'a ItemBounds<Id>> {
    let p = Point::new(point.x.round(), point.y.round());
    items
        .iter()
        .filter(|it| it.id != *dragged)
        .find(|it| it.rect.contains(p))
}
