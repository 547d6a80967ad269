//! Browser stage: canvas lifecycle, interval timer and tap wiring.
//!
//! Everything that touches `web_sys` lives here so the rest of the crate stays
//! testable on the host. The running stage sits in a thread-local slot; both
//! the interval closure and the mouse-down closure reach it from there.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window, window};

use crate::animator::Scheduler;
use crate::bounce::{JumpingText, Tick};
use crate::config::JumpingConfig;
use crate::draw::{Surface, font_with_size};

/// Log to browser console
macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into());
    }
}

pub const CANVAS_ID: &str = "jtb-canvas";

impl Surface for CanvasRenderingContext2d {
    fn measure_text(&self, text: &str) -> f64 {
        CanvasRenderingContext2d::measure_text(self, text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        CanvasRenderingContext2d::fill_text(self, text, x, y).ok();
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }

    fn rotate(&mut self, angle: f64) {
        CanvasRenderingContext2d::rotate(self, angle).ok();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_font_size(&mut self, px: f64) {
        let font = font_with_size(&self.font(), px);
        self.set_font(&font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
}

/// `setInterval`-backed scheduler. Owns the single tick closure for the
/// lifetime of the page; timers are started and cleared, the closure is never
/// dropped while one could still fire.
pub struct IntervalScheduler {
    window: Window,
    tick: Closure<dyn FnMut()>,
}

impl IntervalScheduler {
    fn new(window: Window) -> Self {
        let tick = Closure::wrap(Box::new(|| {
            STAGE.with(|cell| {
                if let Some(stage) = cell.borrow_mut().as_mut() {
                    stage.on_tick();
                }
            });
        }) as Box<dyn FnMut()>);
        Self { window, tick }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Option<i32>;

    fn every(&mut self, interval_ms: u32) -> Option<i32> {
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(self.tick.as_ref().unchecked_ref(), timeout)
        {
            Ok(id) => Some(id),
            Err(err) => {
                console_log!("setInterval failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&mut self, handle: Option<i32>) {
        if let Some(id) = handle {
            self.window.clear_interval_with_handle(id);
        }
    }
}

struct Stage {
    ctx: CanvasRenderingContext2d,
    jumping: JumpingText<IntervalScheduler>,
}

impl Stage {
    fn on_tick(&mut self) {
        if let Tick::Settled { next, direction } = self.jumping.tick(&mut self.ctx) {
            console_log!("settled; next turn: node {} (direction {:+})", next, direction.sign());
        }
    }

    fn on_tap(&mut self) {
        if self.jumping.handle_tap() {
            console_log!("node {} jumping", self.jumping.sequence().current());
        }
    }
}

thread_local! {
    static STAGE: RefCell<Option<Stage>> = const { RefCell::new(None) };
}

/// Inner size of the browser window, used as the canvas size.
pub fn window_size() -> Result<(f64, f64), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let w = win
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let h = win
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((w, h))
}

/// Create (or reuse) the canvas, draw the first frame and start listening for taps.
pub fn start_stage(config: JumpingConfig) -> Result<(), JsValue> {
    if STAGE.with(|cell| cell.borrow().is_some()) {
        return Err(JsValue::from_str("jumping text already started"));
    }
    config.validate()?;

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(config.width as u32);
    canvas.set_height(config.height as u32);
    let mut ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let nodes = config.nodes;
    let jumping = JumpingText::new(config, IntervalScheduler::new(win))?;
    jumping.render(&mut ctx);
    STAGE.with(|cell| cell.replace(Some(Stage { ctx, jumping })));

    // Primary activation: mouse down anywhere on the canvas
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            STAGE.with(|cell| {
                if let Some(stage) = cell.borrow_mut().as_mut() {
                    stage.on_tap();
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    console_log!("jumping text ready: {} node(s), tap to start", nodes);
    Ok(())
}
