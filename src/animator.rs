//! Animation loop: a periodic timer that is either running or not.

/// Source of periodic ticks. The tick target is bound when the scheduler is
/// built; `every` only decides when it fires.
pub trait Scheduler {
    type Handle;

    /// Begin firing the bound tick every `interval_ms`.
    fn every(&mut self, interval_ms: u32) -> Self::Handle;

    /// Stop a timer returned by `every`.
    fn cancel(&mut self, handle: Self::Handle);
}

pub struct AnimationLoop<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    // Some(..) exactly while running.
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AnimationLoop<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self { scheduler, interval_ms, handle: None }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns false when already running; no second timer is created.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.handle = Some(self.scheduler.every(self.interval_ms));
        true
    }

    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}
