//! Node chain: the row of text nodes, stored as an index arena.
//!
//! Each node links to its neighbours by index rather than by reference. The
//! links are written once in [`NodeChain::new`] and never change afterwards.

use crate::config::{ConfigError, JumpingConfig};
use crate::draw::{Surface, draw_node};
use crate::state::State;

/// Which way "whose turn is it" travels along the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Forward,
    Backward,
}

impl Propagation {
    pub fn reversed(self) -> Self {
        match self {
            Propagation::Forward => Propagation::Backward,
            Propagation::Backward => Propagation::Forward,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Propagation::Forward => 1,
            Propagation::Backward => -1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    state: State,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Neighbour in the given propagation direction, if any.
    pub fn neighbor(&self, dir: Propagation) -> Option<usize> {
        match dir {
            Propagation::Forward => self.next,
            Propagation::Backward => self.prev,
        }
    }

    /// Draw this node in its vertical slot.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &JumpingConfig) {
        draw_node(surface, config, self.index, self.state.scale());
    }
}

#[derive(Clone, Debug)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoNodes);
        }
        let nodes = (0..count)
            .map(|i| Node {
                index: i,
                state: State::new(),
                prev: i.checked_sub(1),
                next: (i + 1 < count).then_some(i + 1),
            })
            .collect();
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction refuses an empty chain.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, i: usize) -> Option<&Node> {
        self.nodes.get(i)
    }

    pub(crate) fn state_mut(&mut self, i: usize) -> &mut State {
        &mut self.nodes[i].state
    }

    /// Nodes in link order, starting from the head.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { chain: self, cursor: Some(0) }
    }

    /// Draw every node, head to tail.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, config: &JumpingConfig) {
        for node in self.iter() {
            node.draw(surface, config);
        }
    }

    /// Number of nodes currently animating. The sequence keeps this at 0 or 1.
    pub fn animating_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.state.is_animating()).count()
    }
}

pub struct ChainIter<'a> {
    chain: &'a NodeChain,
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node)
    }
}
