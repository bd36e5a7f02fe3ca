//! Geometry module - landmarks to display-space features
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod features;
mod landmarks;
mod points;

pub use angles::{alignment_deviation, body_ground_angle, COS_EPSILON};
pub use features::BodyFeatures;
pub use landmarks::{
    FitMode, FrameGeometry, Landmark, Pose,
    // Constants
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_ANKLE, RIGHT_ANKLE,
    LANDMARK_COUNT, LANDMARK_STRIDE, REQUIRED_LANDMARKS,
};
pub use points::{distance, midpoint, ScaledPoint};
