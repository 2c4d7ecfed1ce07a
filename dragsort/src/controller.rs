use crate::geometry::{hit_test, overlay_position, scroll_zone};
use crate::{
    DragOptions, DragState, EventResult, ListHost, OverlayHost, Point, PointerEvent, PointerKind,
    ReorderableCollection, ScreenPosition, ScrollDirection, Size, TickToken,
};

/// The single active drag.
///
/// Exists only between a successful long-press and the matching release/cancel.
#[derive(Debug)]
pub struct DragSession<Id, O> {
    dragged: Id,
    press_point: Option<Point>,
    current_point: Option<Point>,
    item_size: Size,
    chrome_y: f32,
    overlay: Option<O>,
    scroll_direction: Option<ScrollDirection>,
    tick_pending: bool,
    token: TickToken,
}

impl<Id, O> DragSession<Id, O> {
    pub fn dragged(&self) -> &Id {
        &self.dragged
    }

    pub fn press_point(&self) -> Option<Point> {
        self.press_point
    }

    /// The latest pointer position seen during the drag (list-local).
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// `false` when the overlay could not be created; the drag still works without it.
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.scroll_direction.is_some()
    }

    pub fn token(&self) -> TickToken {
        self.token
    }
}

/// Drives long-press drag-and-drop reordering for one list.
///
/// Like the rest of this crate, the controller holds no UI objects. The host forwards events
/// and passes itself (and its data collection) on every call:
/// - `on_pointer_event` for raw down/move/up/cancel
/// - `on_long_press` when its long-press detector fires for an item
/// - `on_scroll_tick` when a tick scheduled via [`ListHost::schedule_tick`] is due
///
/// A long-press that arrives while a drag is already active is ignored (reported as not
/// handled); the existing session continues untouched.
#[derive(Debug)]
pub struct DragController<Id, O> {
    options: DragOptions,
    press_point: Option<Point>,
    session: Option<DragSession<Id, O>>,
    next_session: u64,
}

impl<Id, O> Default for DragController<Id, O> {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}

impl<Id, O> DragController<Id, O> {
    pub fn new(options: DragOptions) -> Self {
        ddebug!(
            edge_margin = options.edge_margin,
            scroll_delay_ms = options.scroll_delay_ms,
            "DragController::new"
        );
        Self {
            options,
            press_point: None,
            session: None,
            next_session: 0,
        }
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Takes effect from the next event; an active session keeps its captured size and chrome
    /// offset.
    pub fn set_options(&mut self, options: DragOptions) {
        self.options = options;
    }

    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else if self.press_point.is_some() {
            DragState::Pressed
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(DragSession::is_auto_scrolling)
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.session.as_ref().and_then(|s| s.scroll_direction)
    }

    pub fn session(&self) -> Option<&DragSession<Id, O>> {
        self.session.as_ref()
    }

    /// The most recent pointer-down position, if the pointer has not been released since.
    pub fn press_point(&self) -> Option<Point> {
        self.press_point
    }
}

impl<Id: Clone + PartialEq, O> DragController<Id, O> {
    /// Handles a raw pointer event.
    ///
    /// Pointer-down is always recorded and always reported as not handled, so the host's own
    /// press/click handling still runs. Move/up/cancel are handled only while dragging.
    pub fn on_pointer_event<H, C>(
        &mut self,
        event: PointerEvent,
        host: &mut H,
        collection: &mut C,
    ) -> EventResult
    where
        H: ListHost<ItemId = Id> + OverlayHost<ItemId = Id, Overlay = O>,
        C: ReorderableCollection<Item = Id>,
    {
        match event.kind {
            PointerKind::Down => {
                dtrace!(x = event.position.x, y = event.position.y, "pointer down");
                self.press_point = Some(event.position);
                EventResult::NotHandled
            }
            PointerKind::Move => {
                if self.session.is_none() {
                    return EventResult::NotHandled;
                }
                self.drag_to(event.position, host);
                EventResult::Handled
            }
            PointerKind::Up | PointerKind::Cancel => {
                if self.session.is_none() {
                    self.press_point = None;
                    return EventResult::NotHandled;
                }
                self.finish(Some(event.position), host, collection);
                EventResult::Handled
            }
        }
    }

    /// Handles the host's long-press notification for `item`.
    ///
    /// Returns `Handled` when a drag session started. Nothing starts when a drag is already
    /// active or when the item cannot be captured.
    pub fn on_long_press<H, C>(
        &mut self,
        item: Id,
        host: &mut H,
        collection: &mut C,
    ) -> EventResult
    where
        H: ListHost<ItemId = Id> + OverlayHost<ItemId = Id, Overlay = O>,
        C: ReorderableCollection<Item = Id>,
    {
        if self.session.is_some() {
            ddebug!("long-press ignored: a drag is already active");
            return EventResult::NotHandled;
        }

        let Some(snapshot) = host.capture_item(&item) else {
            ddebug!("long-press ignored: item capture yielded no content");
            self.press_point = None;
            return EventResult::NotHandled;
        };

        let item_size = snapshot.size;
        let chrome_y = host.chrome_offset().map_or(0.0, |p| p.y);
        set_dragging(collection, true);

        let position = match self.press_point {
            Some(p) => self.position_for(p, item_size, chrome_y, host),
            None => ScreenPosition::default(),
        };
        let overlay = match host.create_overlay(snapshot.image, item_size, position) {
            Ok(overlay) => Some(overlay),
            Err(_err) => {
                dwarn!(error = %_err, "failed to create drag overlay, dragging without it");
                None
            }
        };

        host.set_item_visible(&item, false);

        self.next_session = self.next_session.wrapping_add(1);
        let token = TickToken {
            session: self.next_session,
        };
        ddebug!(session = token.session, "drag started");
        self.session = Some(DragSession {
            dragged: item,
            press_point: self.press_point,
            current_point: self.press_point,
            item_size,
            chrome_y,
            overlay,
            scroll_direction: None,
            tick_pending: false,
            token,
        });
        EventResult::Handled
    }

    /// Runs one auto-scroll tick.
    ///
    /// Scrolls by one step and schedules the next tick while the session that issued `token`
    /// is still active and the pointer is still in a scroll zone. Returns whether it scrolled.
    pub fn on_scroll_tick<H>(&mut self, token: TickToken, host: &mut H) -> bool
    where
        H: ListHost<ItemId = Id>,
    {
        let Some(session) = self.session.as_mut() else {
            dtrace!(session = token.session, "scroll tick after drag ended");
            return false;
        };
        if session.token != token {
            dtrace!(session = token.session, "stale scroll tick");
            return false;
        }

        session.tick_pending = false;
        let Some(direction) = session.scroll_direction else {
            dtrace!("auto-scroll stopped");
            return false;
        };

        let delta = self.options.scroll_step(host.visible_height()) * direction.sign();
        dtrace!(delta, "auto-scroll tick");
        host.smooth_scroll_by(delta, self.options.scroll_duration_ms);
        host.schedule_tick(self.options.scroll_delay_ms, token);
        session.tick_pending = true;
        true
    }

    /// Ends any active drag without hit-testing or exchanging, and forgets the press point.
    pub fn cancel<H, C>(&mut self, host: &mut H, collection: &mut C)
    where
        H: ListHost<ItemId = Id> + OverlayHost<ItemId = Id, Overlay = O>,
        C: ReorderableCollection<Item = Id>,
    {
        if self.session.is_some() {
            self.finish(None, host, collection);
        }
        self.press_point = None;
    }

    fn position_for<H>(
        &self,
        pointer: Point,
        size: Size,
        chrome_y: f32,
        host: &H,
    ) -> ScreenPosition
    where
        H: ListHost<ItemId = Id>,
    {
        let list_origin_y = host.screen_origin().map_or(0.0, |p| p.y);
        overlay_position(
            pointer,
            list_origin_y,
            chrome_y,
            size,
            self.options.center_overlay,
        )
    }

    fn drag_to<H>(&mut self, point: Point, host: &mut H)
    where
        H: ListHost<ItemId = Id> + OverlayHost<ItemId = Id, Overlay = O>,
    {
        let Some((size, chrome_y)) = self.session.as_ref().map(|s| (s.item_size, s.chrome_y))
        else {
            return;
        };
        let position = self.position_for(point, size, chrome_y, host);
        let zone = scroll_zone(
            point.y,
            size.height,
            host.visible_height(),
            self.options.edge_margin,
        );
        let delay_ms = self.options.scroll_delay_ms;

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current_point = Some(point);

        if let Some(overlay) = session.overlay.as_mut() {
            if let Err(_err) = host.move_overlay(overlay, position) {
                dwarn!(error = %_err, "failed to move drag overlay");
            }
        }

        if zone != session.scroll_direction {
            dtrace!(zone = ?zone, "auto-scroll zone changed");
        }
        session.scroll_direction = zone;
        if zone.is_some() && !session.tick_pending {
            host.schedule_tick(delay_ms, session.token);
            session.tick_pending = true;
        }
    }

    /// Tears down the session. With `drop_point`, hit-tests it and requests at most one
    /// exchange.
    fn finish<H, C>(&mut self, drop_point: Option<Point>, host: &mut H, collection: &mut C)
    where
        H: ListHost<ItemId = Id> + OverlayHost<ItemId = Id, Overlay = O>,
        C: ReorderableCollection<Item = Id>,
    {
        self.press_point = None;
        let Some(session) = self.session.take() else {
            return;
        };

        if let Some(overlay) = session.overlay {
            if let Err(_err) = host.destroy_overlay(overlay) {
                dwarn!(error = %_err, "failed to remove drag overlay");
            }
        }
        host.cancel_ticks(session.token);
        set_dragging(collection, false);

        let target = drop_point.and_then(|p| {
            let items = host.items();
            hit_test(&items, &session.dragged, p).map(|hit| hit.id.clone())
        });
        if let Some(target) = &target {
            host.set_item_visible(target, false);
            collection.exchange_item(&session.dragged, target);
        }

        host.set_item_visible(&session.dragged, true);
        if let Some(target) = &target {
            host.set_item_visible(target, true);
        }
        ddebug!(
            session = session.token.session,
            exchanged = target.is_some(),
            "drag finished"
        );
    }
}

fn set_dragging<C: ReorderableCollection>(collection: &mut C, dragging: bool) {
    if collection.is_dragging() != dragging {
        collection.set_dragging(dragging);
    }
}
