//! Rubber-band drag gesture and the debounce that coalesces its updates.
//!
//! Time is passed in explicitly (milliseconds, any monotonic origin) so the
//! coalescing is deterministic; the wasm host feeds `performance.now()` and
//! drives the timer.

use crate::types::PixelRect;

/// Quiet period before a drag rectangle is applied.
pub const DRAG_DEBOUNCE_MS: f64 = 50.0;

/// `MouseEvent.button` value of the secondary (right) button.
pub const SECONDARY_BUTTON: i16 = 2;

/// Pointer travel (px, either axis) before a press turns into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// In-progress drag from pointer-down to pointer-up/leave
#[derive(Debug, Clone, Copy, Default)]
pub struct DragGesture {
    origin: Option<(f64, f64)>,
    dragged: bool,
}

impl DragGesture {
    /// Start a gesture at `(x, y)` unless the secondary button is pressed.
    pub fn begin(&mut self, x: f64, y: f64, button: i16) {
        if button == SECONDARY_BUTTON {
            return;
        }
        self.origin = Some((x, y));
        self.dragged = false;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Rectangle from the origin to `(x, y)`, or `None` when no gesture is
    /// in progress or the pointer has not yet moved past
    /// [`DRAG_THRESHOLD_PX`].
    pub fn update(&mut self, x: f64, y: f64) -> Option<PixelRect> {
        let origin = self.origin?;
        if !self.dragged {
            let dx = (x - origin.0).abs();
            let dy = (y - origin.1).abs();
            if dx <= DRAG_THRESHOLD_PX && dy <= DRAG_THRESHOLD_PX {
                return None;
            }
            self.dragged = true;
        }
        Some(PixelRect::from_corners(origin, (x, y)))
    }

    /// End the gesture. Returns whether the pointer ever moved past the
    /// drag threshold.
    pub fn end(&mut self) -> bool {
        let dragged = self.origin.is_some() && self.dragged;
        *self = Self::default();
        dragged
    }
}

/// Trailing-edge coalescing of drag rectangles: only the most recent
/// rectangle of a burst is released, once no new one arrived for `wait_ms`.
#[derive(Debug, Clone)]
pub struct DragDebouncer {
    wait_ms: f64,
    pending: Option<PixelRect>,
    deadline_ms: Option<f64>,
}

impl Default for DragDebouncer {
    fn default() -> Self {
        Self::new(DRAG_DEBOUNCE_MS)
    }
}

impl DragDebouncer {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending: None,
            deadline_ms: None,
        }
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Replace the pending rectangle and restart the quiet period.
    /// Returns the new deadline.
    pub fn push(&mut self, rect: PixelRect, now_ms: f64) -> f64 {
        let deadline = now_ms + self.wait_ms;
        self.pending = Some(rect);
        self.deadline_ms = Some(deadline);
        deadline
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending rectangle if its quiet period has elapsed at `now_ms`.
    pub fn take_due(&mut self, now_ms: f64) -> Option<PixelRect> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.flush(),
            _ => None,
        }
    }

    /// The pending rectangle regardless of time.
    pub fn flush(&mut self) -> Option<PixelRect> {
        self.deadline_ms = None;
        self.pending.take()
    }
}
