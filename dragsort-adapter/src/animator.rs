use crate::ScrollTween;

/// Turns `smooth_scroll_by(delta, duration)` requests into per-frame scroll offsets.
///
/// For hosts whose scroll container has no animated scroll of its own. The adapter calls
/// `scroll_by` from its [`dragsort::ListHost::smooth_scroll_by`] implementation and `tick`
/// once per frame, writing the returned offset into the real scroll container.
///
/// Offsets are clamped to `0..=max_offset`. A `scroll_by` that arrives mid-animation is
/// added to the current target and the tween restarts from the current offset. When the
/// clamped target does not move (pinned at an edge), the running tween is left alone so it
/// still lands exactly on the edge.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    offset: f32,
    max_offset: f32,
    tween: Option<ScrollTween>,
}

impl ScrollAnimator {
    pub fn new(offset: f32, max_offset: f32) -> Self {
        let max_offset = max_offset.max(0.0);
        Self {
            offset: offset.clamp(0.0, max_offset),
            max_offset,
            tween: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Call this when content or viewport size changes.
    pub fn set_max_offset(&mut self, max_offset: f32) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.offset.min(self.max_offset);
        if let Some(t) = self.tween.as_mut() {
            t.to = t.to.min(self.max_offset);
        }
    }

    /// The offset the current animation is heading to.
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.offset, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the user scrolls directly. Cancels any active animation.
    pub fn on_scroll(&mut self, offset: f32) {
        self.cancel_animation();
        self.offset = offset.clamp(0.0, self.max_offset);
    }

    /// Starts (or extends) an animated scroll by a signed `delta`.
    ///
    /// Returns the clamped target offset.
    pub fn scroll_by(&mut self, delta: f32, duration_ms: u64, now_ms: u64) -> f32 {
        let to = (self.target() + delta).clamp(0.0, self.max_offset);
        match self.tween.as_mut() {
            Some(t) if t.to == to => {}
            Some(t) => t.retarget(now_ms, to, duration_ms),
            None => self.tween = Some(ScrollTween::new(self.offset, to, now_ms, duration_ms)),
        }
        to
    }

    /// Advances the animation. Returns the new offset while animating, `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms).clamp(0.0, self.max_offset);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.offset)
    }
}
