/// Configuration for [`crate::DragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragOptions {
    /// Width of the auto-scroll bands at the top and bottom of the list, in pixels.
    pub edge_margin: f32,

    /// Delay before each auto-scroll tick.
    pub scroll_delay_ms: u64,

    /// Duration of the smooth scroll started by each tick.
    pub scroll_duration_ms: u64,

    /// Each tick scrolls by `visible_height / scroll_step_divisor`.
    pub scroll_step_divisor: u32,

    /// Offsets the floating visual by minus half its size so it sits centered under the
    /// pointer. When disabled, its top-left corner follows the pointer.
    pub center_overlay: bool,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            edge_margin: 50.0,
            scroll_delay_ms: 200,
            scroll_duration_ms: 400,
            scroll_step_divisor: 7,
            center_overlay: true,
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_margin(mut self, edge_margin: f32) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    pub fn with_scroll_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    /// Sets the auto-scroll step divisor. Zero is treated as one.
    pub fn with_scroll_step_divisor(mut self, divisor: u32) -> Self {
        self.scroll_step_divisor = divisor;
        self
    }

    pub fn with_center_overlay(mut self, center_overlay: bool) -> Self {
        self.center_overlay = center_overlay;
        self
    }

    /// Unsigned auto-scroll increment for a list of the given visible height.
    pub fn scroll_step(&self, visible_height: f32) -> f32 {
        visible_height / self.scroll_step_divisor.max(1) as f32
    }
}
