//! Push-up tracker JS bindings
//!
//! Receives MediaPipe pose landmarks from JavaScript once per frame, runs the
//! analysis and delivers events to registered JS callbacks.
//!
//! JS is single-threaded and every frame goes through one `RefCell`, so
//! frames for a tracker are analysed strictly in arrival order.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::analysis::{FrameAnalysis, FrameAnalyzer, MotionEvent, MotionListener};
use crate::config::MotionConfig;
use crate::error::{EngineError, Result};
use crate::geometry::{FitMode, FrameGeometry, Pose};
use crate::session::{Announcement, Session};

// ============================================================================
// FRAME REPORT
// ============================================================================

/// Per-frame result handed to JS for the overlay
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    #[wasm_bindgen(js_name = bodyGroundAngle)]
    pub body_ground_angle: f32,
    pub deviation: f32,
    pub aligned: bool,
    #[wasm_bindgen(js_name = motionStarted)]
    pub motion_started: bool,
    #[wasm_bindgen(js_name = motionEnded)]
    pub motion_ended: bool,
    pub count: u32,
    #[wasm_bindgen(js_name = countChanged)]
    pub count_changed: bool,
    pub touching: bool,
    #[wasm_bindgen(js_name = touchChanged)]
    pub touch_changed: bool,
}

impl From<FrameAnalysis> for FrameReport {
    fn from(a: FrameAnalysis) -> Self {
        Self {
            body_ground_angle: a.body_ground_angle,
            deviation: a.deviation,
            aligned: a.aligned,
            motion_started: a.motion_started,
            motion_ended: a.motion_ended,
            count: a.count,
            count_changed: a.count_changed,
            touching: a.touching,
            touch_changed: a.touch_changed,
        }
    }
}

// ============================================================================
// CALLBACKS
// ============================================================================

/// JS listeners, all optional
#[derive(Clone, Default)]
struct JsCallbacks {
    on_push_up_start: Option<js_sys::Function>,
    on_push_up_count: Option<js_sys::Function>,
    on_push_up_end: Option<js_sys::Function>,
    on_head_touch: Option<js_sys::Function>,
    on_announcement: Option<js_sys::Function>,
}

impl JsCallbacks {
    fn announce(&self, announcement: &Announcement) {
        call(&self.on_announcement, Some(JsValue::from_str(&announcement.to_string())));
    }
}

fn call(callback: &Option<js_sys::Function>, arg: Option<JsValue>) {
    let Some(callback) = callback else {
        return;
    };
    let this = JsValue::NULL;
    let result = match arg {
        Some(arg) => callback.call1(&this, &arg),
        None => callback.call0(&this),
    };
    if let Err(err) = result {
        web_sys::console::warn_2(&"pushup-web: listener threw".into(), &err);
    }
}

impl MotionListener for JsCallbacks {
    fn on_push_up_start(&mut self) {
        call(&self.on_push_up_start, None);
    }

    fn on_push_up_count(&mut self, count: u32) {
        call(&self.on_push_up_count, Some(count.into()));
    }

    fn on_push_up_end(&mut self, count: u32) {
        call(&self.on_push_up_end, Some(count.into()));
    }

    fn on_head_touch(&mut self, touching: bool) {
        call(&self.on_head_touch, Some(touching.into()));
    }
}

// ============================================================================
// TRACKER STATE
// ============================================================================

#[derive(Default)]
struct TrackerState {
    analyzer: FrameAnalyzer,
    session: Session,
    last: Option<FrameAnalysis>,
    callbacks: JsCallbacks,
}

/// Everything a frame produced, delivered after the state borrow is released
struct FrameOutput {
    analysis: FrameAnalysis,
    events: Vec<MotionEvent>,
    announcements: Vec<Announcement>,
    callbacks: JsCallbacks,
}

impl TrackerState {
    fn with_analyzer(analyzer: FrameAnalyzer) -> Self {
        Self {
            analyzer,
            ..Self::default()
        }
    }

    /// Analyze one frame and feed its events to the session.
    /// On error nothing but `last` changes.
    fn process(&mut self, data: &[f32], people: usize, frame: &FrameGeometry) -> Result<FrameOutput> {
        let analysis = Pose::parse_flat(data, people)
            .and_then(|poses| self.analyzer.analyze(&poses, frame));

        let analysis = match analysis {
            Ok(analysis) => analysis,
            Err(err) => {
                self.last = None;
                return Err(err);
            }
        };

        let events = analysis.events();
        for event in &events {
            self.session.handle(event);
        }
        self.last = Some(analysis);

        Ok(FrameOutput {
            analysis,
            events,
            announcements: self.session.drain_announcements(),
            callbacks: self.callbacks.clone(),
        })
    }
}

fn report_skipped(err: &EngineError) {
    match err {
        // Routine: subject out of view or partly occluded
        EngineError::NoPose | EngineError::MissingLandmark { .. } => {
            log::debug!("frame skipped: {err}");
        }
        _ => {
            web_sys::console::warn_1(&format!("pushup-web: frame rejected: {err}").into());
        }
    }
}

// ============================================================================
// WASM API
// ============================================================================

#[wasm_bindgen]
pub struct PushUpTracker {
    state: RefCell<TrackerState>,
}

#[wasm_bindgen]
impl PushUpTracker {
    /// Tracker with default thresholds
    #[wasm_bindgen(constructor)]
    pub fn new() -> PushUpTracker {
        PushUpTracker {
            state: RefCell::new(TrackerState::default()),
        }
    }

    /// Tracker with custom thresholds. Throws if they are out of order.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        up_angle: f32,
        down_angle: f32,
        finish_angle: f32,
        line_angle: f32,
        head_touch_distance: f32,
    ) -> std::result::Result<PushUpTracker, JsValue> {
        let config = MotionConfig {
            up_angle,
            down_angle,
            finish_angle,
            line_angle,
            head_touch_distance,
        };
        let analyzer = FrameAnalyzer::new(config)?;
        Ok(PushUpTracker {
            state: RefCell::new(TrackerState::with_analyzer(analyzer)),
        })
    }

    /// Analyze one frame.
    ///
    /// `data` holds `num_people` skeletons as flat (x, y, z) triples. Returns
    /// `undefined` when the frame has to be skipped.
    #[wasm_bindgen(js_name = processFrame)]
    #[allow(clippy::too_many_arguments)]
    pub fn process_frame(
        &self,
        data: &[f32],
        num_people: usize,
        image_width: f32,
        image_height: f32,
        view_width: f32,
        view_height: f32,
        live_stream: bool,
    ) -> Option<FrameReport> {
        let mode = if live_stream { FitMode::Cover } else { FitMode::Contain };

        let output = FrameGeometry::fit(image_width, image_height, view_width, view_height, mode)
            .and_then(|frame| self.state.borrow_mut().process(data, num_people, &frame));

        let FrameOutput { analysis, events, announcements, mut callbacks } = match output {
            Ok(output) => output,
            Err(err) => {
                report_skipped(&err);
                return None;
            }
        };

        // Borrow released: listeners may call back into the tracker
        for event in &events {
            event.dispatch(&mut callbacks);
        }
        for announcement in &announcements {
            callbacks.announce(announcement);
        }

        Some(analysis.into())
    }

    /// Arm or disarm the session by hand (same as touching the head)
    #[wasm_bindgen(js_name = toggleSession)]
    pub fn toggle_session(&self) {
        let (announcements, callbacks) = {
            let mut state = self.state.borrow_mut();
            state.session.toggle();
            (state.session.drain_announcements(), state.callbacks.clone())
        };
        for announcement in &announcements {
            callbacks.announce(announcement);
        }
    }

    #[wasm_bindgen(js_name = onPushUpStart)]
    pub fn on_push_up_start(&self, callback: js_sys::Function) {
        self.state.borrow_mut().callbacks.on_push_up_start = Some(callback);
    }

    #[wasm_bindgen(js_name = onPushUpCount)]
    pub fn on_push_up_count(&self, callback: js_sys::Function) {
        self.state.borrow_mut().callbacks.on_push_up_count = Some(callback);
    }

    #[wasm_bindgen(js_name = onPushUpEnd)]
    pub fn on_push_up_end(&self, callback: js_sys::Function) {
        self.state.borrow_mut().callbacks.on_push_up_end = Some(callback);
    }

    #[wasm_bindgen(js_name = onHeadTouch)]
    pub fn on_head_touch(&self, callback: js_sys::Function) {
        self.state.borrow_mut().callbacks.on_head_touch = Some(callback);
    }

    /// Receives prompt text for speech output
    #[wasm_bindgen(js_name = onAnnouncement)]
    pub fn on_announcement(&self, callback: js_sys::Function) {
        self.state.borrow_mut().callbacks.on_announcement = Some(callback);
    }

    /// Repetitions counted by the engine since the last reset
    pub fn count(&self) -> u32 {
        self.state.borrow().analyzer.count()
    }

    /// Repetitions counted while the session was running
    #[wasm_bindgen(js_name = sessionCount)]
    pub fn session_count(&self) -> u32 {
        self.state.borrow().session.count()
    }

    #[wasm_bindgen(js_name = sessionStatus)]
    pub fn session_status(&self) -> String {
        self.state.borrow().session.status().as_str().to_string()
    }

    /// Overlay text for the last analysed frame, empty after a skipped frame
    #[wasm_bindgen(js_name = overlayLines)]
    pub fn overlay_lines(&self) -> js_sys::Array {
        let lines = js_sys::Array::new();
        if let Some(last) = self.state.borrow().last {
            for line in last.overlay_lines() {
                lines.push(&JsValue::from_str(&line));
            }
        }
        lines
    }

    /// Clear detectors and session for a fresh start. Callbacks stay registered.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.analyzer.reset();
        state.session = Session::new();
        state.last = None;
    }
}

impl Default for PushUpTracker {
    fn default() -> Self {
        Self::new()
    }
}
