//! Training session lifecycle
//!
//! The session is armed and disarmed by touching the head while standing,
//! starts when the first push-up begins and counts repetitions only while
//! started. It reacts to engine events and never reads landmarks itself.

use crate::analysis::{MotionEvent, MotionListener};
use super::announcement::Announcement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Sleep,
    Prepare,
    Start,
    Stop,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Sleep => "sleep",
            SessionStatus::Prepare => "prepare",
            SessionStatus::Start => "start",
            SessionStatus::Stop => "stop",
        }
    }
}

/// One user's training session, owned by the caller
#[derive(Clone, Debug, Default)]
pub struct Session {
    status: SessionStatus,
    count: u32,
    /// Prompts not yet taken by the speech collaborator
    pending: Vec<Announcement>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Arm a sleeping session, or disarm a prepared or stopped one and
    /// clear its count. A running session ignores the toggle.
    pub fn toggle(&mut self) {
        match self.status {
            SessionStatus::Sleep => {
                self.set_status(SessionStatus::Prepare);
                self.announce(Announcement::GetReady);
            }
            SessionStatus::Prepare | SessionStatus::Stop => {
                self.set_status(SessionStatus::Sleep);
                self.reset_count();
            }
            SessionStatus::Start => {}
        }
    }

    pub fn start(&mut self) {
        if matches!(self.status, SessionStatus::Prepare | SessionStatus::Stop) {
            self.set_status(SessionStatus::Start);
            self.announce(Announcement::Start);
        }
    }

    pub fn stop(&mut self) {
        if self.status == SessionStatus::Start {
            self.set_status(SessionStatus::Stop);
            self.announce(Announcement::Stop);
        }
    }

    /// Count one repetition. Ignored unless the session is running.
    pub fn record_repetition(&mut self) {
        if self.status == SessionStatus::Start {
            self.count += 1;
            self.announce(Announcement::Count(self.count));
        }
    }

    pub fn reset_count(&mut self) {
        self.announce(Announcement::Cleared(self.count));
        self.count = 0;
    }

    /// Apply one engine event
    pub fn handle(&mut self, event: &MotionEvent) {
        event.dispatch(self);
    }

    /// Take every prompt queued since the last call
    pub fn drain_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.pending)
    }

    fn set_status(&mut self, status: SessionStatus) {
        log::info!("session {} -> {}", self.status.as_str(), status.as_str());
        self.status = status;
    }

    fn announce(&mut self, announcement: Announcement) {
        log::debug!("announce: {announcement}");
        self.pending.push(announcement);
    }
}

impl MotionListener for Session {
    fn on_push_up_start(&mut self) {
        self.start();
    }

    fn on_push_up_count(&mut self, _count: u32) {
        self.record_repetition();
    }

    fn on_push_up_end(&mut self, _count: u32) {
        self.stop();
    }

    fn on_head_touch(&mut self, touching: bool) {
        if touching {
            self.toggle();
        }
    }
}
