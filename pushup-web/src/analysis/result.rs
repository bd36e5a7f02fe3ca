//! Frame analysis result and discrete events

use std::fmt;

use super::listener::MotionListener;

/// Discrete event fired by a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    MotionStarted,
    CountChanged(u32),
    /// Carries the count at the moment the motion ended
    MotionEnded(u32),
    HeadTouchChanged(bool),
}

impl MotionEvent {
    /// Deliver this event to the matching listener callback
    pub fn dispatch<L: MotionListener + ?Sized>(&self, listener: &mut L) {
        match *self {
            MotionEvent::MotionStarted => listener.on_push_up_start(),
            MotionEvent::CountChanged(count) => listener.on_push_up_count(count),
            MotionEvent::MotionEnded(count) => listener.on_push_up_end(count),
            MotionEvent::HeadTouchChanged(touching) => listener.on_head_touch(touching),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MotionEvent::MotionStarted => "motion_started",
            MotionEvent::CountChanged(_) => "count_changed",
            MotionEvent::MotionEnded(_) => "motion_ended",
            MotionEvent::HeadTouchChanged(_) => "head_touch_changed",
        }
    }
}

/// Snapshot of one analysed frame. Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAnalysis {
    /// Body-ground angle in degrees, [0, 90]
    pub body_ground_angle: f32,
    /// Shoulder-hip-ankle deviation in degrees
    pub deviation: f32,
    /// Deviation under the line threshold
    pub aligned: bool,
    pub motion_started: bool,
    pub motion_ended: bool,
    pub count: u32,
    pub count_changed: bool,
    pub touching: bool,
    pub touch_changed: bool,
}

impl FrameAnalysis {
    /// Events this frame fired, in delivery order:
    /// start, count, end, head touch
    pub fn events(&self) -> Vec<MotionEvent> {
        let mut events = Vec::with_capacity(4);
        if self.motion_started {
            events.push(MotionEvent::MotionStarted);
        }
        if self.count_changed {
            events.push(MotionEvent::CountChanged(self.count));
        }
        if self.motion_ended {
            events.push(MotionEvent::MotionEnded(self.count));
        }
        if self.touch_changed {
            events.push(MotionEvent::HeadTouchChanged(self.touching));
        }
        events
    }

    /// Text lines for the overlay renderer
    pub fn overlay_lines(&self) -> [String; 4] {
        [
            format!(
                "Shoulder-hip-ankle deviation: {:.1}° {}",
                self.deviation,
                if self.aligned { "OK" } else { "NG" }
            ),
            format!("Body-ground angle: {:.1}°", self.body_ground_angle),
            format!("Push-ups: {}", self.count),
            format!(
                "Head touch: {}",
                if self.touching { "touching" } else { "not touching" }
            ),
        ]
    }
}

impl fmt::Display for FrameAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "angle {:.1}° deviation {:.1}° count {} touching {}",
            self.body_ground_angle, self.deviation, self.count, self.touching
        )
    }
}
