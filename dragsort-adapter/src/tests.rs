use crate::*;

use alloc::vec::Vec;

use dragsort::{
    DragController, DragOptions, EventResult, ItemBounds, ListHost, OverlayError, OverlayHost,
    Point, PointerEvent, Rect, ReorderableCollection, ScreenPosition, Size, Snapshot,
    SortableList, TickToken,
};

fn token(session: u64) -> TickToken {
    TickToken { session }
}

#[test]
fn scheduler_returns_due_ticks_in_order() {
    let mut s = TickScheduler::new(1_000);
    s.schedule(200, token(1));
    s.schedule(100, token(2));
    s.schedule(200, token(3));
    assert_eq!(s.len(), 3);
    assert_eq!(s.next_due_ms(), Some(1_100));

    assert!(s.advance(1_050).is_empty());
    assert_eq!(s.advance(1_100), [token(2)]);
    assert_eq!(s.advance(1_500), [token(1), token(3)]);
    assert!(s.is_empty());
    assert_eq!(s.next_due_ms(), None);
}

#[test]
fn scheduler_clock_never_runs_backwards() {
    let mut s = TickScheduler::new(500);
    assert!(s.advance(100).is_empty());
    assert_eq!(s.now_ms(), 500);

    s.schedule(0, token(9));
    assert_eq!(s.advance(0), [token(9)]);
}

#[test]
fn scheduler_cancel_drops_only_matching_token() {
    let mut s = TickScheduler::new(0);
    s.schedule(10, token(1));
    s.schedule(20, token(2));
    s.schedule(30, token(1));
    s.cancel(token(1));
    assert_eq!(s.advance(100), [token(2)]);
}

#[test]
fn tween_reaches_target_monotonically() {
    let t = ScrollTween::new(100.0, 0.0, 10, 400);
    let mut last = f32::MAX;
    for now_ms in [0u64, 10, 50, 110, 210, 300, 410, 500] {
        let v = t.sample(now_ms);
        assert!(v <= last, "went backwards at {now_ms}ms");
        last = v;
    }
    assert_eq!(t.sample(210), 50.0);
    assert_eq!(t.sample(410), 0.0);
    assert!(t.is_done(410));
    assert!(!t.is_done(409));
    assert_eq!(t.remaining_ms(110), 300);
    assert_eq!(t.remaining_ms(500), 0);
}

#[test]
fn tween_retarget_keeps_the_longer_of_remaining_and_requested_time() {
    let mut t = ScrollTween::new(0.0, 400.0, 0, 400);
    t.retarget(100, 200.0, 100);
    assert_eq!(t.from, 100.0);
    assert_eq!(t.start_ms, 100);
    assert_eq!(t.duration_ms, 300);

    t.retarget(200, 300.0, 400);
    assert_eq!(t.duration_ms, 400);
}

#[test]
fn animator_accumulates_and_clamps() {
    let mut a = ScrollAnimator::new(300.0, 1_000.0);
    assert_eq!(a.scroll_by(-100.0, 400, 0), 200.0);
    assert_eq!(a.tick(200), Some(250.0));

    // Extending mid-flight restarts from the current offset toward the summed target.
    assert_eq!(a.scroll_by(-100.0, 400, 200), 100.0);
    assert_eq!(a.tick(400), Some(175.0));
    assert_eq!(a.tick(600), Some(100.0));
    assert!(!a.is_animating());
    assert_eq!(a.tick(700), None);

    assert_eq!(a.scroll_by(-500.0, 100, 700), 0.0);
    assert_eq!(a.tick(800), Some(0.0));

    a.on_scroll(5_000.0);
    assert_eq!(a.offset(), 1_000.0);
    a.set_max_offset(400.0);
    assert_eq!(a.offset(), 400.0);
}

#[test]
fn animator_settles_when_requests_outpace_the_duration() {
    // Auto-scroll cadence: a 400ms scroll requested every 208ms, pinned at the top edge.
    for (start, settles_at) in [(100.0, 400u64), (300.0, 816)] {
        let mut a = ScrollAnimator::new(start, 1_000.0);
        let mut settled = None;
        for now in (0..=4_000u64).step_by(16) {
            if now % 208 == 0 {
                a.scroll_by(-100.0, 400, now);
            }
            a.tick(now);
            if settled.is_none() && a.offset() == 0.0 {
                settled = Some(now);
            }
        }
        assert_eq!(settled, Some(settles_at), "from {start}");
        assert_eq!(a.offset(), 0.0);
    }
}

#[test]
fn animator_leaves_a_pinned_tween_running() {
    let mut a = ScrollAnimator::new(100.0, 1_000.0);
    assert_eq!(a.scroll_by(-100.0, 400, 0), 0.0);
    assert_eq!(a.tick(200), Some(50.0));
    assert_eq!(a.scroll_by(-100.0, 400, 200), 0.0);
    assert_eq!(a.tick(300), Some(25.0));
    assert_eq!(a.tick(400), Some(0.0));
    assert!(!a.is_animating());
}

#[test]
fn animator_user_scroll_cancels_animation() {
    let mut a = ScrollAnimator::new(0.0, 1_000.0);
    a.scroll_by(300.0, 400, 0);
    assert!(a.is_animating());
    a.on_scroll(50.0);
    assert!(!a.is_animating());
    assert_eq!(a.target(), 50.0);
}

/// A frame-driven host: fixed 40px rows, a scroll container animated by `ScrollAnimator`,
/// and ticks delivered through `TickScheduler`.
#[derive(Debug)]
struct SimHost {
    rows: usize,
    viewport: f32,
    scroll: ScrollAnimator,
    ticks: TickScheduler,
    overlay_at: Option<ScreenPosition>,
    hidden: Vec<u32>,
}

const ROW: f32 = 40.0;

impl SimHost {
    fn new(rows: usize, viewport: f32, offset: f32) -> Self {
        let max = rows as f32 * ROW - viewport;
        Self {
            rows,
            viewport,
            scroll: ScrollAnimator::new(offset, max),
            ticks: TickScheduler::new(0),
            overlay_at: None,
            hidden: Vec::new(),
        }
    }

    /// One frame: deliver due ticks, then advance the scroll animation.
    fn frame(&mut self, controller: &mut DragController<u32, ()>, now_ms: u64) {
        for t in self.ticks.advance(now_ms) {
            controller.on_scroll_tick(t, self);
        }
        self.scroll.tick(now_ms);
    }
}

impl ListHost for SimHost {
    type ItemId = u32;

    fn visible_height(&self) -> f32 {
        self.viewport
    }

    fn items(&self) -> Vec<ItemBounds<u32>> {
        let off = self.scroll.offset();
        let first = (off / ROW) as usize;
        let last = (((off + self.viewport) / ROW).ceil() as usize).min(self.rows);
        (first..last)
            .map(|i| {
                ItemBounds::new(
                    i as u32,
                    Rect::new(0.0, i as f32 * ROW - off, 200.0, ROW),
                )
            })
            .collect()
    }

    fn screen_origin(&self) -> Option<Point> {
        Some(Point::new(0.0, 0.0))
    }

    fn set_item_visible(&mut self, item: &u32, visible: bool) {
        if visible {
            self.hidden.retain(|h| h != item);
        } else {
            self.hidden.push(*item);
        }
    }

    fn smooth_scroll_by(&mut self, delta: f32, duration_ms: u64) {
        let now = self.ticks.now_ms();
        self.scroll.scroll_by(delta, duration_ms, now);
    }

    fn schedule_tick(&mut self, delay_ms: u64, token: TickToken) {
        self.ticks.schedule(delay_ms, token);
    }

    fn cancel_ticks(&mut self, token: TickToken) {
        self.ticks.cancel(token);
    }
}

impl OverlayHost for SimHost {
    type ItemId = u32;
    type Image = ();
    type Overlay = ();

    fn capture_item(&mut self, _item: &u32) -> Option<Snapshot<()>> {
        Some(Snapshot::new((), Size::new(200.0, ROW)))
    }

    fn create_overlay(
        &mut self,
        _image: (),
        _size: Size,
        position: ScreenPosition,
    ) -> Result<(), OverlayError> {
        self.overlay_at = Some(position);
        Ok(())
    }

    fn move_overlay(
        &mut self,
        _overlay: &mut (),
        position: ScreenPosition,
    ) -> Result<(), OverlayError> {
        self.overlay_at = Some(position);
        Ok(())
    }

    fn destroy_overlay(&mut self, _overlay: ()) -> Result<(), OverlayError> {
        self.overlay_at = None;
        Ok(())
    }
}

#[test]
fn drag_to_top_edge_scrolls_back_and_drops_on_revealed_row() {
    // 50 rows, 280px viewport (7 rows, step 40px), scrolled to row 10.
    let mut host = SimHost::new(50, 280.0, 400.0);
    let mut list = SortableList::new((0..50u32).collect(), |v: &u32| *v);
    let mut c: DragController<u32, ()> = DragController::new(DragOptions::default());

    // Row 13 sits at local y 120..160.
    assert_eq!(
        c.on_pointer_event(PointerEvent::down(100.0, 140.0), &mut host, &mut list),
        EventResult::NotHandled
    );
    assert_eq!(c.on_long_press(13, &mut host, &mut list), EventResult::Handled);
    assert_eq!(host.hidden, [13]);
    assert!(list.is_dragging());

    c.on_pointer_event(PointerEvent::moved(100.0, 30.0), &mut host, &mut list);
    assert!(c.is_auto_scrolling());
    assert_eq!(host.overlay_at, Some(ScreenPosition::new(0, 10)));

    let mut now = 0;
    while now < 4_000 {
        now += 16;
        host.frame(&mut c, now);
    }
    // Scrolled all the way back; the loop keeps ticking at the clamp.
    assert_eq!(host.scroll.offset(), 0.0);
    assert!(!host.ticks.is_empty());

    // Drop at local y 30: row 0 after scrolling to the top.
    c.on_pointer_event(PointerEvent::up(100.0, 30.0), &mut host, &mut list);
    assert!(host.ticks.is_empty());
    assert!(host.overlay_at.is_none());
    assert!(host.hidden.is_empty());
    assert!(!list.is_dragging());

    let items = list.items();
    assert_eq!(items[0], 13);
    assert_eq!(items[13], 0);
    assert_eq!(list.revision(), 1);
}

#[test]
fn leaving_edge_band_stops_scrolling_after_one_idle_tick() {
    let mut host = SimHost::new(50, 280.0, 400.0);
    let mut list = SortableList::new((0..50u32).collect(), |v: &u32| *v);
    let mut c: DragController<u32, ()> = DragController::default();

    c.on_pointer_event(PointerEvent::down(100.0, 140.0), &mut host, &mut list);
    c.on_long_press(13, &mut host, &mut list);
    c.on_pointer_event(PointerEvent::moved(100.0, 270.0), &mut host, &mut list);
    assert!(c.is_auto_scrolling());

    host.frame(&mut c, 200);
    assert!(host.scroll.is_animating());
    c.on_pointer_event(PointerEvent::moved(100.0, 140.0), &mut host, &mut list);
    assert!(!c.is_auto_scrolling());

    // The tick queued at 200ms fires at 400ms and does not reschedule.
    host.frame(&mut c, 400);
    assert!(host.ticks.is_empty());
    for now in [600, 800, 1_000] {
        host.frame(&mut c, now);
    }
    assert_eq!(host.scroll.offset(), 440.0);

    c.on_pointer_event(PointerEvent::up(500.0, 140.0), &mut host, &mut list);
    assert_eq!(list.revision(), 0);
}
