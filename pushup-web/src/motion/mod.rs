//! Motion module - hysteresis state machines over the body-ground angle
//!
//! Re-exports only. All logic in submodules.

mod counter;
mod phase;
mod proximity;

pub use counter::RepetitionCounter;
pub use phase::{MotionPhase, MotionPhaseDetector, PhaseTransition};
pub use proximity::ProximityDetector;
