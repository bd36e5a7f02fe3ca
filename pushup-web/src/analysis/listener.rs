//! Observer interface for per-frame events
//!
//! Called synchronously from the thread that drove the update. Every
//! callback defaults to a no-op so listeners implement only what they need.

pub trait MotionListener {
    fn on_push_up_start(&mut self) {}

    fn on_push_up_count(&mut self, _count: u32) {}

    /// `count` is the repetition count when the motion ended
    fn on_push_up_end(&mut self, _count: u32) {}

    /// `true` when a touch begins, `false` when it ends
    fn on_head_touch(&mut self, _touching: bool) {}
}

/// Collects events in arrival order
impl MotionListener for Vec<super::MotionEvent> {
    fn on_push_up_start(&mut self) {
        self.push(super::MotionEvent::MotionStarted);
    }

    fn on_push_up_count(&mut self, count: u32) {
        self.push(super::MotionEvent::CountChanged(count));
    }

    fn on_push_up_end(&mut self, count: u32) {
        self.push(super::MotionEvent::MotionEnded(count));
    }

    fn on_head_touch(&mut self, touching: bool) {
        self.push(super::MotionEvent::HeadTouchChanged(touching));
    }
}
