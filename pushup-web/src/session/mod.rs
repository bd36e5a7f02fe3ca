//! Session module - training session driven by engine events
//!
//! Re-exports only. All logic in submodules.

mod announcement;
mod manager;

pub use announcement::Announcement;
pub use manager::{Session, SessionStatus};
