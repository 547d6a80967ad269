// Browser tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_creates_canvas_sized_to_window() {
    jumping_text_bounce::start_jumping_text().unwrap();
    let win = web_sys::window().unwrap();
    let doc = win.document().unwrap();
    let el = doc.get_element_by_id(&jumping_text_bounce::canvas_id());
    assert!(el.is_some(), "canvas should be attached to the document");
    // a second start is refused rather than stacking a second stage
    assert!(jumping_text_bounce::start_jumping_text().is_err());
}
