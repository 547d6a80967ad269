//! Drawing: per-character jump layout over an abstract 2D surface.
//!
//! Glyphs use a cursor-advancing layout. The string is centred as a block,
//! each glyph occupies its measured width, and it rotates about its own centre
//! while it lifts.

use std::f64::consts::PI;

use crate::config::JumpingConfig;
use crate::scale::{divide_scale, sinify};

/// The handful of canvas operations the renderer needs. Transforms stack via
/// `save`/`restore` like a 2D canvas context.
pub trait Surface {
    fn measure_text(&self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_fill_style(&mut self, color: &str);
    fn set_font_size(&mut self, px: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

/// Draw `text` centred on the origin with every character lifted and rotated
/// according to its share of the sweep at `scale`.
pub fn draw_jumping_characters<S: Surface + ?Sized>(surface: &mut S, scale: f64, text: &str, gap: f64) {
    let total_w = surface.measure_text(text);
    let sf = sinify(scale);
    let n = text.chars().count();
    let mut buf = [0u8; 4];
    let mut x = 0.0;
    surface.save();
    surface.translate(-total_w / 2.0, 0.0);
    for (j, ch) in text.chars().enumerate() {
        let glyph: &str = ch.encode_utf8(&mut buf);
        let chw = surface.measure_text(glyph);
        let sci = divide_scale(sf, j, n);
        surface.save();
        surface.translate(x + chw / 2.0, -gap * sci);
        surface.rotate(PI * sci);
        surface.fill_text(glyph, -chw / 2.0, 0.0);
        surface.restore();
        x += chw;
    }
    surface.restore();
}

/// Draw node `i` in its vertical slot.
pub fn draw_node<S: Surface + ?Sized>(surface: &mut S, config: &JumpingConfig, i: usize, scale: f64) {
    let gap = config.gap();
    surface.save();
    surface.set_font_size(config.font_size());
    surface.set_fill_style(&config.fore_color);
    surface.translate(config.width / 2.0, gap * (i as f64 + 1.0));
    draw_jumping_characters(surface, scale, &config.text, gap);
    surface.restore();
}

pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, config: &JumpingConfig) {
    surface.set_fill_style(&config.back_color);
    surface.fill_rect(0.0, 0.0, config.width, config.height);
}

/// Swap the size in a CSS font shorthand for `px`, keeping the family.
/// `"10px sans-serif"` becomes `"24px sans-serif"` for `px = 24.0`.
pub fn font_with_size(font: &str, px: f64) -> String {
    let Some(start) = font.find(|c: char| c.is_ascii_digit()) else {
        return format!("{}px sans-serif", px);
    };
    let end = font[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .map_or(font.len(), |off| start + off);
    format!("{}{}{}", &font[..start], px, &font[end..])
}
