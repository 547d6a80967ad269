//! Sequence controller: decides which node animates and hands the turn on.

use crate::chain::{NodeChain, Propagation};
use crate::config::{ConfigError, JumpingConfig};
use crate::draw::Surface;

#[derive(Clone, Debug)]
pub struct SequenceController {
    chain: NodeChain,
    current: usize,
    direction: Propagation,
    step: f64,
}

impl SequenceController {
    pub fn new(config: &JumpingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            chain: NodeChain::new(config.nodes)?,
            current: 0,
            direction: Propagation::Forward,
            step: config.step,
        })
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Propagation {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        self.chain
            .node(self.current)
            .is_some_and(|node| node.state().is_animating())
    }

    /// Start the current node. Returns false while it is still animating.
    pub fn start_updating<F: FnOnce()>(&mut self, on_started: F) -> bool {
        self.chain.state_mut(self.current).start(on_started)
    }

    /// Tick the current node. When it settles the turn moves on before
    /// `on_complete` runs.
    pub fn update<F: FnOnce()>(&mut self, on_complete: F) -> bool {
        let mut settled = false;
        let step = self.step;
        self.chain.state_mut(self.current).update(step, || settled = true);
        if settled {
            self.advance();
            on_complete();
        }
        settled
    }

    /// Move the turn to the neighbour in the propagation direction. At either
    /// end the direction flips and `current` stays where it is.
    pub fn advance(&mut self) {
        let neighbor = self
            .chain
            .node(self.current)
            .and_then(|node| node.neighbor(self.direction));
        match neighbor {
            Some(next) => self.current = next,
            None => self.direction = self.direction.reversed(),
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &JumpingConfig) {
        self.chain.draw(surface, config);
    }
}
