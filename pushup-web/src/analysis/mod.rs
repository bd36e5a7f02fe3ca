//! Analysis module - per-frame pipeline, results and event delivery
//!
//! Re-exports only. All logic in submodules.

mod listener;
mod pipeline;
mod result;

pub use listener::MotionListener;
pub use pipeline::FrameAnalyzer;
pub use result::{FrameAnalysis, MotionEvent};
