//! Per-frame orchestration
//!
//! Owns the three detectors for one tracking session. Frames must be fed
//! in arrival order: every detector is order-sensitive.

use crate::config::MotionConfig;
use crate::error::{EngineError, Result};
use crate::geometry::{BodyFeatures, FrameGeometry, Pose};
use crate::motion::{MotionPhaseDetector, PhaseTransition, ProximityDetector, RepetitionCounter};
use super::listener::MotionListener;
use super::result::FrameAnalysis;

/// Frame analysis pipeline for a single tracked subject
#[derive(Clone, Debug)]
pub struct FrameAnalyzer {
    config: MotionConfig,
    phase: MotionPhaseDetector,
    counter: RepetitionCounter,
    proximity: ProximityDetector,
}

impl FrameAnalyzer {
    /// Build an analyzer, rejecting thresholds that would leave a detector
    /// state unreachable
    pub fn new(config: MotionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: MotionConfig) -> Self {
        Self {
            phase: MotionPhaseDetector::new(config.down_angle, config.finish_angle),
            counter: RepetitionCounter::new(config.up_angle, config.down_angle),
            proximity: ProximityDetector::new(config.head_touch_distance),
            config,
        }
    }

    /// Analyze the first detected person. Only one subject is tracked.
    pub fn analyze(&mut self, poses: &[Pose], frame: &FrameGeometry) -> Result<FrameAnalysis> {
        let pose = poses.first().ok_or(EngineError::NoPose)?;
        self.analyze_pose(pose, frame)
    }

    /// Analyze one pose.
    ///
    /// On `Err` no detector has been touched and no event fired; the caller
    /// should skip the frame.
    pub fn analyze_pose(&mut self, pose: &Pose, frame: &FrameGeometry) -> Result<FrameAnalysis> {
        let features = BodyFeatures::extract(pose, frame)?;
        let angle = features.body_ground_angle;

        let transition = self.phase.update(angle);

        let previous = self.counter.count();
        let count = self.counter.update(angle);

        // Head touches only commit while standing at the finish posture
        let gate_open = angle >= self.config.finish_angle;
        let (left, right) = features.head_distances();
        let touch = self.proximity.update(left, right, gate_open);

        Ok(FrameAnalysis {
            body_ground_angle: angle,
            deviation: features.deviation,
            aligned: features.is_aligned(self.config.line_angle),
            motion_started: transition == Some(PhaseTransition::Started),
            motion_ended: transition == Some(PhaseTransition::Ended),
            count,
            count_changed: count != previous,
            touching: self.proximity.touching(),
            touch_changed: touch.is_some(),
        })
    }

    /// Analyze and deliver this frame's events to `listener`
    pub fn analyze_and_notify<L: MotionListener + ?Sized>(
        &mut self,
        poses: &[Pose],
        frame: &FrameGeometry,
        listener: &mut L,
    ) -> Result<FrameAnalysis> {
        let analysis = self.analyze(poses, frame)?;
        for event in analysis.events() {
            event.dispatch(listener);
        }
        Ok(analysis)
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn count(&self) -> u32 {
        self.counter.count()
    }

    pub fn in_motion(&self) -> bool {
        self.phase.in_motion()
    }

    pub fn touching(&self) -> bool {
        self.proximity.touching()
    }

    /// Clear all detectors for a new session
    pub fn reset(&mut self) {
        self.phase.reset();
        self.counter.reset();
        self.proximity.reset();
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::from_valid(MotionConfig::default())
    }
}
