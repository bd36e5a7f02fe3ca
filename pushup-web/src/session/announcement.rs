//! Spoken prompts handed to the speech collaborator

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Announcement {
    GetReady,
    Start,
    Stop,
    /// Running repetition count
    Count(u32),
    /// Session disarmed; carries the total before clearing
    Cleared(u32),
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Announcement::GetReady => f.write_str("Get ready"),
            Announcement::Start => f.write_str("Start"),
            Announcement::Stop => f.write_str("Stop"),
            Announcement::Count(n) => write!(f, "{n}"),
            Announcement::Cleared(total) => {
                write!(f, "Count cleared, {total} push-ups completed this time")
            }
        }
    }
}
