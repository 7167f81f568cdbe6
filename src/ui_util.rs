//ui_util.rs
use std::time::{Duration, Instant};

/// Trailing-edge rate limiter: `trigger` marks activity, `fire` returns
/// true exactly once after the activity has been quiet for `delay`.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Restarts the quiet-period timer. Repeated triggers within the
    /// delay window coalesce into one eventual fire.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Polled by the caller; consumes the deadline once it has passed.
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Scroll offset above which the scroll-to-top control appears.
pub const SCROLL_SHOW_THRESHOLD: f32 = 300.0;

/// Quiet period before the control's visibility is re-evaluated.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Presentation-only state for the fixed scroll-to-top button.
pub struct ScrollTopButton {
    pub visible: bool,
    debounce: Debouncer,
    last_offset: f32,
    /// Offset the smooth scroll-back animation is currently at.
    animating_from: Option<f32>,
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        ScrollTopButton {
            visible: false,
            debounce: Debouncer::new(SCROLL_DEBOUNCE),
            last_offset: 0.0,
            animating_from: None,
        }
    }
}

impl ScrollTopButton {
    /// Called once per frame with the current scroll offset. Visibility
    /// only changes after the offset has held still for the debounce
    /// window.
    pub fn observe(&mut self, offset: f32) {
        if offset != self.last_offset {
            self.last_offset = offset;
            self.debounce.trigger();
        }
        if self.debounce.fire() {
            self.visible = self.last_offset > SCROLL_SHOW_THRESHOLD;
        }
    }

    pub fn start_scroll_to_top(&mut self) {
        self.animating_from = Some(self.last_offset);
    }

    /// Advances the ease-out animation and returns the offset to apply
    /// this frame, or `None` once the top has been reached.
    pub fn animated_offset(&mut self) -> Option<f32> {
        let current = self.animating_from?;
        let next = current * 0.82 - 1.0;
        if next <= 0.5 {
            self.animating_from = None;
            self.visible = false;
            Some(0.0)
        } else {
            self.animating_from = Some(next);
            Some(next)
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating_from.is_some()
    }
}
