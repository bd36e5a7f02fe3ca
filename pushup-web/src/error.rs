//! Engine errors
//!
//! Every failure here is local: the caller skips the frame or fixes its
//! configuration. Nothing in the engine is fatal.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors produced by configuration, input parsing and frame analysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A landmark the analysis needs is absent or not a finite coordinate.
    /// This is the "insufficient data" outcome: skip the frame.
    #[error("landmark {landmark} (index {index}) is missing")]
    MissingLandmark { landmark: &'static str, index: usize },

    /// The pose estimator reported no person in this frame
    #[error("no pose detected in frame")]
    NoPose,

    /// Thresholds must satisfy up < down < finish
    #[error("angle thresholds out of order: up {up}° < down {down}° < finish {finish}° is required")]
    InvalidThresholds { up: f32, down: f32, finish: f32 },

    /// An angle threshold fell outside the folded [0, 90] range
    #[error("{name} threshold {value}° is outside [0, 90]")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("{name} threshold must be a positive finite number, got {value}")]
    NonPositiveThreshold { name: &'static str, value: f32 },

    /// Source image or view with a zero or non-finite dimension
    #[error("invalid frame size {width}x{height}")]
    InvalidFrame { width: f32, height: f32 },

    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScale(f32),

    /// Flat landmark buffer that cannot be split into people × landmarks × (x, y, z)
    #[error("landmark buffer of length {len} does not hold {people} people")]
    MalformedLandmarkBuffer { len: usize, people: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
