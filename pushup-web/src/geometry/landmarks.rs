//! Pose landmarks and frame geometry
//!
//! Landmarks arrive from the MediaPipe pose estimator as normalized
//! coordinates. `FrameGeometry` maps them into display pixels.

use crate::error::{EngineError, Result};
use super::points::ScaledPoint;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Landmarks per person in a full pose skeleton
pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in a flat buffer (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

/// The nine landmarks a frame analysis reads, with display names for errors
pub const REQUIRED_LANDMARKS: [(&str, usize); 9] = [
    ("nose", NOSE),
    ("left shoulder", LEFT_SHOULDER),
    ("right shoulder", RIGHT_SHOULDER),
    ("left wrist", LEFT_WRIST),
    ("right wrist", RIGHT_WRIST),
    ("left hip", LEFT_HIP),
    ("right hip", RIGHT_HIP),
    ("left ankle", LEFT_ANKLE),
    ("right ankle", RIGHT_ANKLE),
];

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single landmark (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, unused by the analysis
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Landmarks of one detected person, indexed by MediaPipe landmark id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    landmarks: Vec<Landmark>,
}

impl Pose {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Landmark at `index`, or `None` when the estimator did not report it.
    /// Non-finite coordinates (NaN placeholders from JS) count as missing.
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.landmarks
            .get(index)
            .copied()
            .filter(Landmark::is_finite)
    }

    /// Set one landmark, growing the skeleton with NaN placeholders if needed
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if index >= self.landmarks.len() {
            let missing = Landmark { x: f32::NAN, y: f32::NAN, z: f32::NAN };
            self.landmarks.resize(index + 1, missing);
        }
        self.landmarks[index] = landmark;
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Fetch a landmark the analysis cannot do without
    pub fn require(&self, landmark: &'static str, index: usize) -> Result<Landmark> {
        self.get(index)
            .ok_or(EngineError::MissingLandmark { landmark, index })
    }

    /// Check that every landmark in `REQUIRED_LANDMARKS` is present
    pub fn check_required(&self) -> Result<()> {
        for (name, index) in REQUIRED_LANDMARKS {
            self.require(name, index)?;
        }
        Ok(())
    }

    /// Split a flat `[x, y, z, x, y, z, ...]` buffer into `people` poses
    /// of equal length.
    pub fn parse_flat(data: &[f32], people: usize) -> Result<Vec<Pose>> {
        if people == 0 {
            return Ok(Vec::new());
        }

        let per_person = people * LANDMARK_STRIDE;
        if data.is_empty() || data.len() % per_person != 0 {
            return Err(EngineError::MalformedLandmarkBuffer { len: data.len(), people });
        }

        let chunk = data.len() / people;
        let poses = data
            .chunks_exact(chunk)
            .map(|person| {
                let landmarks = person
                    .chunks_exact(LANDMARK_STRIDE)
                    .map(|v| Landmark { x: v[0], y: v[1], z: v[2] })
                    .collect();
                Pose::new(landmarks)
            })
            .collect();

        Ok(poses)
    }
}

// ============================================================================
// FRAME GEOMETRY
// ============================================================================

/// How the source image is fitted into the display view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitMode {
    /// Whole image visible (still image and video capture)
    Contain,
    /// View fully covered, image cropped (live camera stream)
    Cover,
}

/// Source image size plus the factor that maps it into display pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub image_width: f32,
    pub image_height: f32,
    pub scale: f32,
}

impl FrameGeometry {
    pub fn new(image_width: f32, image_height: f32, scale: f32) -> Result<Self> {
        check_size(image_width, image_height)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EngineError::InvalidScale(scale));
        }
        Ok(Self { image_width, image_height, scale })
    }

    /// Derive the scale factor from the view size
    pub fn fit(
        image_width: f32,
        image_height: f32,
        view_width: f32,
        view_height: f32,
        mode: FitMode,
    ) -> Result<Self> {
        check_size(image_width, image_height)?;
        check_size(view_width, view_height)?;

        let sx = view_width / image_width;
        let sy = view_height / image_height;
        let scale = match mode {
            FitMode::Contain => sx.min(sy),
            FitMode::Cover => sx.max(sy),
        };

        Ok(Self { image_width, image_height, scale })
    }

    /// Map a normalized landmark into display pixels
    pub fn project(&self, landmark: Landmark) -> ScaledPoint {
        ScaledPoint::new(
            landmark.x * self.image_width * self.scale,
            landmark.y * self.image_height * self.scale,
        )
    }
}

fn check_size(width: f32, height: f32) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidFrame { width, height })
    }
}
