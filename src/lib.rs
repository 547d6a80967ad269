//! Jumping Text Bounce core crate.
//!
//! A row of text nodes stacked down a canvas. Tapping makes one node's
//! characters jump in a sweep from left to right; the next tap hands the jump
//! to its neighbour, and at either end of the row the hand-off reverses.
//!
//! The sequencing engine (`state`, `chain`, `sequence`, `animator`, `bounce`)
//! and the layout math (`scale`, `draw`) are plain Rust and run on the host.
//! `stage` is the browser glue exposed through `start_jumping_text()`.

use wasm_bindgen::prelude::*;

pub mod animator;
pub mod bounce;
pub mod chain;
pub mod config;
pub mod draw;
pub mod scale;
pub mod sequence;
pub mod state;
mod stage;

pub use animator::{AnimationLoop, Scheduler};
pub use bounce::{JumpingText, Tick};
pub use chain::{Node, NodeChain, Propagation};
pub use config::{ConfigError, JumpingConfig};
pub use draw::Surface;
pub use sequence::SequenceController;
pub use state::State;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Start with the default configuration, sized to the browser window.
#[wasm_bindgen]
pub fn start_jumping_text() -> Result<(), JsValue> {
    let (w, h) = stage::window_size()?;
    stage::start_stage(JumpingConfig::sized(w, h))
}

/// Start from a JSON configuration, e.g. `{"nodes": 4, "text": "bounce"}`.
/// Fields left out keep their defaults; the size defaults to the window.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_jumping_text_with_config(json: &str) -> Result<(), JsValue> {
    let (w, h) = stage::window_size()?;
    let config = JumpingConfig::from_json_sized(json, w, h)?;
    stage::start_stage(config)
}

/// Id of the canvas element the stage draws into.
#[wasm_bindgen]
pub fn canvas_id() -> String {
    stage::CANVAS_ID.to_string()
}
