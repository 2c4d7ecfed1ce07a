// Example: a console "host" driving one long-press drag from press to drop.
use dragsort::{
    DragController, DragOptions, ExchangeMode, ItemBounds, ListHost, OverlayError, OverlayHost,
    Point, PointerEvent, Rect, ScreenPosition, Size, Snapshot, SortableList, TickToken,
};

struct ConsoleHost {
    rows: Vec<&'static str>,
}

const ROW: f32 = 32.0;

impl ListHost for ConsoleHost {
    type ItemId = &'static str;

    fn visible_height(&self) -> f32 {
        self.rows.len() as f32 * ROW
    }

    fn items(&self) -> Vec<ItemBounds<&'static str>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, &id)| ItemBounds::new(id, Rect::new(0.0, i as f32 * ROW, 240.0, ROW)))
            .collect()
    }

    fn screen_origin(&self) -> Option<Point> {
        Some(Point::new(0.0, 48.0))
    }

    fn chrome_offset(&self) -> Option<Point> {
        Some(Point::new(0.0, 24.0))
    }

    fn set_item_visible(&mut self, item: &&'static str, visible: bool) {
        println!("  row {item:?} visible={visible}");
    }

    fn smooth_scroll_by(&mut self, delta: f32, duration_ms: u64) {
        println!("  scroll by {delta} over {duration_ms}ms");
    }

    fn schedule_tick(&mut self, delay_ms: u64, token: TickToken) {
        println!("  tick {token:?} in {delay_ms}ms");
    }
}

impl OverlayHost for ConsoleHost {
    type ItemId = &'static str;
    type Image = String;
    type Overlay = String;

    fn capture_item(&mut self, item: &&'static str) -> Option<Snapshot<String>> {
        Some(Snapshot::new(format!("[{item}]"), Size::new(240.0, ROW)))
    }

    fn create_overlay(
        &mut self,
        image: String,
        _size: Size,
        position: ScreenPosition,
    ) -> Result<String, OverlayError> {
        println!("  overlay {image} at {position:?}");
        Ok(image)
    }

    fn move_overlay(
        &mut self,
        overlay: &mut String,
        position: ScreenPosition,
    ) -> Result<(), OverlayError> {
        println!("  overlay {overlay} -> {position:?}");
        Ok(())
    }

    fn destroy_overlay(&mut self, overlay: String) -> Result<(), OverlayError> {
        println!("  overlay {overlay} removed");
        Ok(())
    }
}

fn main() {
    let rows = vec!["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    let mut host = ConsoleHost { rows: rows.clone() };
    let mut list = SortableList::new(rows, |s: &&'static str| *s).with_mode(ExchangeMode::Close);
    let mut controller = DragController::new(DragOptions::default().with_edge_margin(16.0));

    println!("press on bravo");
    controller.on_pointer_event(PointerEvent::down(120.0, 48.0), &mut host, &mut list);
    println!("long-press");
    controller.on_long_press("bravo", &mut host, &mut list);
    println!("drag");
    for y in [80.0, 112.0, 144.0] {
        controller.on_pointer_event(PointerEvent::moved(120.0, y), &mut host, &mut list);
    }
    println!("release over echo");
    controller.on_pointer_event(PointerEvent::up(120.0, 140.0), &mut host, &mut list);

    println!("order: {:?}", list.items());
}
