//! The jumping text row: sequence + loop + drawing wired together.
//!
//! A tap starts the node whose turn it is and the timer. Every tick renders,
//! then advances that node; when it settles the timer stops and one more
//! frame is drawn so the resting pose is on screen.

use crate::animator::{AnimationLoop, Scheduler};
use crate::chain::Propagation;
use crate::config::{ConfigError, JumpingConfig};
use crate::draw::{Surface, draw_background};
use crate::sequence::SequenceController;

/// Outcome of one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing was animating (stale timer fire).
    Idle,
    Running,
    /// The active node came to rest; `next` is whose turn it is now.
    Settled { next: usize, direction: Propagation },
}

pub struct JumpingText<S: Scheduler> {
    config: JumpingConfig,
    sequence: SequenceController,
    animator: AnimationLoop<S>,
}

impl<S: Scheduler> JumpingText<S> {
    pub fn new(config: JumpingConfig, scheduler: S) -> Result<Self, ConfigError> {
        let sequence = SequenceController::new(&config)?;
        let animator = AnimationLoop::new(scheduler, config.delay_ms);
        Ok(Self { config, sequence, animator })
    }

    pub fn config(&self) -> &JumpingConfig {
        &self.config
    }

    pub fn sequence(&self) -> &SequenceController {
        &self.sequence
    }

    pub fn animator(&self) -> &AnimationLoop<S> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut AnimationLoop<S> {
        &mut self.animator
    }

    /// Primary activation. Returns true when a node started animating; taps
    /// during an animation are ignored.
    pub fn handle_tap(&mut self) -> bool {
        let mut started = false;
        self.sequence.start_updating(|| started = true);
        if started {
            self.animator.start();
        }
        started
    }

    pub fn tick<D: Surface + ?Sized>(&mut self, surface: &mut D) -> Tick {
        if !self.sequence.is_animating() {
            // the timer outlived the animation; make sure it is gone
            self.animator.stop();
            return Tick::Idle;
        }
        self.render(surface);
        let mut settled = false;
        self.sequence.update(|| settled = true);
        if !settled {
            return Tick::Running;
        }
        self.animator.stop();
        self.render(surface);
        Tick::Settled {
            next: self.sequence.current(),
            direction: self.sequence.direction(),
        }
    }

    pub fn render<D: Surface + ?Sized>(&self, surface: &mut D) {
        draw_background(surface, &self.config);
        self.sequence.draw(surface, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingScheduler {
        live: usize,
        started: usize,
    }

    impl Scheduler for CountingScheduler {
        type Handle = ();
        fn every(&mut self, _interval_ms: u32) {
            self.live += 1;
            self.started += 1;
        }
        fn cancel(&mut self, _handle: ()) {
            self.live -= 1;
        }
    }

    #[derive(Default)]
    struct NullSurface {
        frames: usize,
    }

    impl Surface for NullSurface {
        fn measure_text(&self, text: &str) -> f64 {
            text.len() as f64
        }
        fn fill_text(&mut self, _: &str, _: f64, _: f64) {}
        fn save(&mut self) {}
        fn restore(&mut self) {}
        fn translate(&mut self, _: f64, _: f64) {}
        fn rotate(&mut self, _: f64) {}
        fn set_fill_style(&mut self, _: &str) {}
        fn set_font_size(&mut self, _: f64) {}
        fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
            self.frames += 1;
        }
    }

    fn jumping(nodes: usize) -> JumpingText<CountingScheduler> {
        let cfg = JumpingConfig { nodes, step: 0.1, ..JumpingConfig::default() };
        JumpingText::new(cfg, CountingScheduler::default()).unwrap()
    }

    #[test]
    fn test_tap_starts_timer_once() {
        let mut jt = jumping(2);
        assert!(jt.handle_tap());
        assert!(!jt.handle_tap());
        assert_eq!(jt.animator().scheduler().started, 1);
        assert!(jt.animator().is_running());
    }

    #[test]
    fn test_settle_stops_timer_and_draws_final_frame() {
        let mut jt = jumping(2);
        let mut surface = NullSurface::default();
        jt.handle_tap();
        let mut ticks = 0;
        let outcome = loop {
            ticks += 1;
            match jt.tick(&mut surface) {
                Tick::Running => continue,
                other => break other,
            }
        };
        assert_eq!(outcome, Tick::Settled { next: 1, direction: Propagation::Forward });
        assert!(!jt.animator().is_running());
        assert_eq!(jt.animator().scheduler().live, 0);
        assert_eq!(surface.frames, ticks + 1);
    }

    #[test]
    fn test_stale_tick_is_idle() {
        let mut jt = jumping(1);
        let mut surface = NullSurface::default();
        assert_eq!(jt.tick(&mut surface), Tick::Idle);
        assert_eq!(surface.frames, 0);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let cfg = JumpingConfig { text: String::new(), ..JumpingConfig::default() };
        assert!(JumpingText::new(cfg, CountingScheduler::default()).is_err());
    }
}
