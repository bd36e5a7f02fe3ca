//! Push-up Web - pose-based push-up counter
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The analysis core (geometry, motion, analysis, session) is plain Rust and
//! runs natively as well; only `bridge` talks to JavaScript.

pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod session;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen types for JS access
pub use bridge::{FrameReport, PushUpTracker};

pub use analysis::{FrameAnalysis, FrameAnalyzer, MotionEvent, MotionListener};
pub use config::MotionConfig;
pub use error::EngineError;
pub use geometry::{FitMode, FrameGeometry, Landmark, Pose};
pub use session::{Announcement, Session, SessionStatus};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log_str(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (console_log_str(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// `level` is one of "trace", "debug", "info", "warn", "error"; anything
/// else means "info".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    console_log!("✅ pushup-web {} logging at {}", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
