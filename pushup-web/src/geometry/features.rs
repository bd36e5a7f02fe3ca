//! Per-frame body features
//!
//! Pulls the nine analysed landmarks out of a pose, maps them into display
//! space and derives the scalar signals the detectors consume.

use crate::error::Result;
use super::angles::{alignment_deviation, body_ground_angle};
use super::landmarks::{
    FrameGeometry, Pose, LEFT_ANKLE, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ANKLE,
    RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};
use super::points::{distance, midpoint, ScaledPoint};

/// Geometry of one subject in one frame. Recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFeatures {
    pub shoulder_mid: ScaledPoint,
    pub hip_mid: ScaledPoint,
    pub ankle_mid: ScaledPoint,
    pub nose: ScaledPoint,
    pub left_wrist: ScaledPoint,
    pub right_wrist: ScaledPoint,
    /// Degrees away from a straight shoulder-hip-ankle line
    pub deviation: f32,
    /// Degrees between shoulder→ankle and the horizontal, in [0, 90]
    pub body_ground_angle: f32,
}

impl BodyFeatures {
    /// Extract features, failing with `MissingLandmark` if any of the nine
    /// required landmarks is absent. Nothing is computed on partial data.
    pub fn extract(pose: &Pose, frame: &FrameGeometry) -> Result<Self> {
        pose.check_required()?;

        let point = |name: &'static str, index: usize| -> Result<ScaledPoint> {
            Ok(frame.project(pose.require(name, index)?))
        };

        let shoulder_mid = midpoint(
            &point("left shoulder", LEFT_SHOULDER)?,
            &point("right shoulder", RIGHT_SHOULDER)?,
        );
        let hip_mid = midpoint(&point("left hip", LEFT_HIP)?, &point("right hip", RIGHT_HIP)?);
        let ankle_mid = midpoint(
            &point("left ankle", LEFT_ANKLE)?,
            &point("right ankle", RIGHT_ANKLE)?,
        );

        Ok(Self {
            shoulder_mid,
            hip_mid,
            ankle_mid,
            nose: point("nose", NOSE)?,
            left_wrist: point("left wrist", LEFT_WRIST)?,
            right_wrist: point("right wrist", RIGHT_WRIST)?,
            deviation: alignment_deviation(&shoulder_mid, &hip_mid, &ankle_mid),
            body_ground_angle: body_ground_angle(&shoulder_mid, &ankle_mid),
        })
    }

    /// Body counts as straight when the deviation is under `line_angle`
    pub fn is_aligned(&self, line_angle: f32) -> bool {
        self.deviation < line_angle
    }

    /// Nose-to-wrist distances in pixels (left, right)
    pub fn head_distances(&self) -> (f32, f32) {
        (
            distance(&self.nose, &self.left_wrist),
            distance(&self.nose, &self.right_wrist),
        )
    }
}
