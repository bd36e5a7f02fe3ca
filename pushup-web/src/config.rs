//! Threshold configuration
//!
//! All thresholds are fixed numbers chosen up front. Angles are in degrees
//! against the folded body-ground angle, the head-touch distance is in
//! display pixels.

use crate::error::{EngineError, Result};

/// Below this the counter closes a repetition (body flat on the way up)
pub const DEFAULT_UP_ANGLE: f32 = 4.0;
/// Above this the counter arms; at or below it a motion starts
pub const DEFAULT_DOWN_ANGLE: f32 = 14.0;
/// At or above this the motion ends and head-touch events are accepted
pub const DEFAULT_FINISH_ANGLE: f32 = 80.0;
/// Shoulder-hip-ankle deviation under this counts as a straight body
pub const DEFAULT_LINE_ANGLE: f32 = 30.0;
/// Maximum nose-to-wrist distance for a head touch
pub const DEFAULT_HEAD_TOUCH_DISTANCE: f32 = 100.0;

/// Thresholds driving the three detectors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub up_angle: f32,
    pub down_angle: f32,
    pub finish_angle: f32,
    pub line_angle: f32,
    pub head_touch_distance: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            up_angle: DEFAULT_UP_ANGLE,
            down_angle: DEFAULT_DOWN_ANGLE,
            finish_angle: DEFAULT_FINISH_ANGLE,
            line_angle: DEFAULT_LINE_ANGLE,
            head_touch_distance: DEFAULT_HEAD_TOUCH_DISTANCE,
        }
    }
}

impl MotionConfig {
    pub fn with_up_angle(mut self, degrees: f32) -> Self {
        self.up_angle = degrees;
        self
    }

    pub fn with_down_angle(mut self, degrees: f32) -> Self {
        self.down_angle = degrees;
        self
    }

    pub fn with_finish_angle(mut self, degrees: f32) -> Self {
        self.finish_angle = degrees;
        self
    }

    pub fn with_line_angle(mut self, degrees: f32) -> Self {
        self.line_angle = degrees;
        self
    }

    pub fn with_head_touch_distance(mut self, pixels: f32) -> Self {
        self.head_touch_distance = pixels;
        self
    }

    /// Reject orderings that would leave a detector state unreachable.
    ///
    /// Requires `0 <= up < down < finish <= 90` and positive line and
    /// head-touch thresholds.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("up", self.up_angle),
            ("down", self.down_angle),
            ("finish", self.finish_angle),
        ] {
            if !(0.0..=90.0).contains(&value) {
                return Err(EngineError::ThresholdOutOfRange { name, value });
            }
        }

        if !(self.up_angle < self.down_angle && self.down_angle < self.finish_angle) {
            return Err(EngineError::InvalidThresholds {
                up: self.up_angle,
                down: self.down_angle,
                finish: self.finish_angle,
            });
        }

        for (name, value) in [
            ("line", self.line_angle),
            ("head touch", self.head_touch_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::NonPositiveThreshold { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_misordered_angles() {
        let config = MotionConfig::default().with_up_angle(20.0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidThresholds { .. })
        ));

        let config = MotionConfig::default().with_finish_angle(10.0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_rejects_equal_angles() {
        let config = MotionConfig::default().with_down_angle(80.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_and_nan() {
        let config = MotionConfig::default().with_finish_angle(95.0);
        assert_eq!(
            config.validate(),
            Err(EngineError::ThresholdOutOfRange { name: "finish", value: 95.0 })
        );

        // NaN fails the range check before ordering is looked at
        let config = MotionConfig::default().with_up_angle(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(EngineError::ThresholdOutOfRange { name: "up", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let config = MotionConfig::default().with_head_touch_distance(0.0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::NonPositiveThreshold { name: "head touch", .. })
        ));

        let config = MotionConfig::default().with_line_angle(f32::INFINITY);
        assert!(config.validate().is_err());
    }
}
