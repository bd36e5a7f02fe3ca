//! Head touch detection
//!
//! A wrist closer to the nose than the threshold is a touch. Changes only
//! commit while the gate is open; in the push-up pipeline that means the
//! subject is standing at or above the finish angle.

/// Tracks whether a hand is touching the head
#[derive(Clone, Debug)]
pub struct ProximityDetector {
    /// Maximum nose-to-wrist distance (pixels) for a touch
    threshold: f32,
    touching: bool,
}

impl ProximityDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            touching: false,
        }
    }

    /// Feed both nose-to-wrist distances. Returns the new touch state when
    /// it changed this frame.
    pub fn update(&mut self, left_distance: f32, right_distance: f32, gate_open: bool) -> Option<bool> {
        let touching_now = left_distance.min(right_distance) < self.threshold;

        if touching_now != self.touching && gate_open {
            self.touching = touching_now;
            log::debug!(
                "head touch {} (left {left_distance:.0}px, right {right_distance:.0}px)",
                if touching_now { "started" } else { "ended" }
            );
            Some(touching_now)
        } else {
            None
        }
    }

    pub fn touching(&self) -> bool {
        self.touching
    }

    pub fn reset(&mut self) {
        self.touching = false;
    }
}
