//! Repetition counting
//!
//! Independent of `MotionPhaseDetector` even though both read the same
//! angle: the counter arms above `down_angle` and closes a repetition
//! below `up_angle`.

/// Counts completed push-ups from the body-ground angle
#[derive(Clone, Debug)]
pub struct RepetitionCounter {
    /// Below this a rising counter completes a repetition
    up_angle: f32,
    /// Above this the counter arms
    down_angle: f32,
    /// Armed: body has left the low extreme
    rising: bool,
    count: u32,
}

impl RepetitionCounter {
    pub fn new(up_angle: f32, down_angle: f32) -> Self {
        Self {
            up_angle,
            down_angle,
            rising: false,
            count: 0,
        }
    }

    /// Feed one frame's angle. Returns the count after this frame.
    pub fn update(&mut self, angle: f32) -> u32 {
        if !self.rising && angle > self.down_angle {
            self.rising = true;
        } else if self.rising && angle < self.up_angle {
            self.rising = false;
            self.count += 1;
            log::debug!("repetition {} completed at {angle:.1}°", self.count);
        }
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    /// Start a new session from zero
    pub fn reset(&mut self) {
        self.rising = false;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_one_cycle() {
        let mut counter = RepetitionCounter::new(4.0, 14.0);
        assert_eq!(counter.update(10.0), 0);
        assert!(!counter.is_rising());
        assert_eq!(counter.update(50.0), 0);
        assert!(counter.is_rising());
        assert_eq!(counter.update(3.0), 1);
        assert!(!counter.is_rising());
    }

    #[test]
    fn test_up_threshold_is_exclusive() {
        let mut counter = RepetitionCounter::new(4.0, 14.0);
        for angle in [90.0, 50.0, 10.0, 5.0, 4.0] {
            assert_eq!(counter.update(angle), 0, "counted at {angle}");
        }
        assert_eq!(counter.update(3.9), 1);
    }

    #[test]
    fn test_down_threshold_is_exclusive() {
        let mut counter = RepetitionCounter::new(4.0, 14.0);
        counter.update(14.0);
        assert!(!counter.is_rising());
        counter.update(14.1);
        assert!(counter.is_rising());
    }

    #[test]
    fn test_count_is_monotonic() {
        let mut counter = RepetitionCounter::new(4.0, 14.0);
        let angles = [
            20.0, 2.0, 2.0, 1.0, 30.0, 60.0, 3.0, 13.0, 15.0, 8.0, 3.5, 90.0, 0.0, 0.0, 45.0,
        ];
        let mut last = 0;
        for angle in angles {
            let count = counter.update(angle);
            assert!(count == last || count == last + 1);
            last = count;
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn test_reset() {
        let mut counter = RepetitionCounter::new(4.0, 14.0);
        counter.update(20.0);
        counter.update(0.0);
        assert_eq!(counter.count(), 1);
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert!(!counter.is_rising());
    }
}
