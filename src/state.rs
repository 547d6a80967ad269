//! Per-node oscillation state.

/// Scale of one node plus where it last came to rest.
///
/// `direction` is 0 while idle and +1/-1 while animating away from
/// `checkpoint`. Only `start` and `update` change it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct State {
    scale: f64,
    direction: i8,
    checkpoint: f64,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn checkpoint(&self) -> f64 {
        self.checkpoint
    }

    pub fn is_animating(&self) -> bool {
        self.direction != 0
    }

    /// Begin animating away from the checkpoint. Returns false (and skips
    /// `on_started`) when already animating.
    pub fn start<F: FnOnce()>(&mut self, on_started: F) -> bool {
        if self.is_animating() {
            return false;
        }
        // checkpoint 0 -> +1, checkpoint 1 -> -1
        self.direction = (1.0 - 2.0 * self.checkpoint) as i8;
        on_started();
        true
    }

    /// Advance by `step`. Once a full unit has been travelled the scale snaps to
    /// the next checkpoint, the state goes idle and `on_complete` runs.
    pub fn update<F: FnOnce()>(&mut self, step: f64, on_complete: F) -> bool {
        if !self.is_animating() {
            return false;
        }
        let dir = self.direction as f64;
        self.scale += step * dir;
        if (self.scale - self.checkpoint).abs() > 1.0 {
            self.scale = self.checkpoint + dir;
            self.direction = 0;
            self.checkpoint = self.scale;
            on_complete();
            return true;
        }
        false
    }
}
