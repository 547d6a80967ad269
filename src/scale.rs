//! Oscillator math: turns one node's scale into per-character progress.

use std::f64::consts::PI;

/// Ramp for character `i` of `n`; stays at zero until the sweep has passed `i / n`.
pub fn max_scale(scale: f64, i: usize, n: usize) -> f64 {
    (scale - i as f64 / n as f64).max(0.0)
}

/// Progress of character `i` of `n`, normalized into `[0, 1]`.
pub fn divide_scale(scale: f64, i: usize, n: usize) -> f64 {
    let n_f = n as f64;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// 0 -> 1 -> 0 bump over a linear `[0, 1]` input.
pub fn sinify(scale: f64) -> f64 {
    (scale * PI).sin()
}
