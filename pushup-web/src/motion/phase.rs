//! Motion phase detection
//!
//! Two states, two one-way triggers. Between `down_angle` and
//! `finish_angle` nothing happens, so noise around either edge cannot
//! flip the phase back and forth.

/// Current phase of the tracked subject
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPhase {
    #[default]
    Idle,
    InMotion,
}

/// Phase change fired by one update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseTransition {
    Started,
    Ended,
}

/// Turns the body-ground angle into motion started / ended events
#[derive(Clone, Debug)]
pub struct MotionPhaseDetector {
    /// At or below this angle an idle subject starts moving
    down_angle: f32,
    /// At or above this angle a moving subject finishes
    finish_angle: f32,
    phase: MotionPhase,
}

impl MotionPhaseDetector {
    pub fn new(down_angle: f32, finish_angle: f32) -> Self {
        Self {
            down_angle,
            finish_angle,
            phase: MotionPhase::Idle,
        }
    }

    /// Feed one frame's angle. Returns the transition it caused, if any.
    pub fn update(&mut self, angle: f32) -> Option<PhaseTransition> {
        match self.phase {
            MotionPhase::Idle if angle <= self.down_angle => {
                self.phase = MotionPhase::InMotion;
                log::debug!("motion started at {angle:.1}°");
                Some(PhaseTransition::Started)
            }
            MotionPhase::InMotion if angle >= self.finish_angle => {
                self.phase = MotionPhase::Idle;
                log::debug!("motion ended at {angle:.1}°");
                Some(PhaseTransition::Ended)
            }
            _ => None,
        }
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn in_motion(&self) -> bool {
        self.phase == MotionPhase::InMotion
    }

    pub fn reset(&mut self) {
        self.phase = MotionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(detector: &mut MotionPhaseDetector, angles: &[f32]) -> Vec<(f32, PhaseTransition)> {
        angles
            .iter()
            .filter_map(|&a| detector.update(a).map(|t| (a, t)))
            .collect()
    }

    #[test]
    fn test_start_and_end() {
        let mut detector = MotionPhaseDetector::new(14.0, 80.0);
        let events = run(&mut detector, &[90.0, 50.0, 10.0, 5.0, 15.0, 60.0, 85.0]);

        assert_eq!(
            events,
            vec![(10.0, PhaseTransition::Started), (85.0, PhaseTransition::Ended)]
        );
        assert_eq!(detector.phase(), MotionPhase::Idle);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut detector = MotionPhaseDetector::new(14.0, 80.0);
        assert_eq!(detector.update(14.0), Some(PhaseTransition::Started));
        assert_eq!(detector.update(79.9), None);
        assert_eq!(detector.update(80.0), Some(PhaseTransition::Ended));
    }

    #[test]
    fn test_dead_zone_holds_state() {
        let mut detector = MotionPhaseDetector::new(14.0, 80.0);
        assert!(run(&mut detector, &[30.0, 50.0, 79.0, 15.0]).is_empty());
        assert!(!detector.in_motion());

        detector.update(2.0);
        assert!(run(&mut detector, &[15.0, 50.0, 79.0, 3.0]).is_empty());
        assert!(detector.in_motion());
    }

    #[test]
    fn test_events_alternate() {
        let mut detector = MotionPhaseDetector::new(14.0, 80.0);
        let angles = [
            85.0, 12.0, 3.0, 13.0, 81.0, 88.0, 90.0, 1.0, 0.0, 10.0, 20.0, 85.0, 80.0, 5.0,
        ];
        let events = run(&mut detector, &angles);

        assert_eq!(events.first().map(|e| e.1), Some(PhaseTransition::Started));
        for pair in events.windows(2) {
            assert_ne!(pair[0].1, pair[1].1, "transition fired twice in a row");
        }
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_reset() {
        let mut detector = MotionPhaseDetector::new(14.0, 80.0);
        detector.update(0.0);
        detector.reset();
        assert_eq!(detector.update(85.0), None);
    }
}
