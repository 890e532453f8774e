//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The tree is
//! built fresh for each move selection and dropped with the search.

use crate::core::{GameError, GameState, Move};

use super::node::{NodeId, SearchNode};

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct SearchTree {
    /// All nodes in the tree.
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl SearchTree {
    /// Create a new tree with a root node for `state`.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_capacity(state, 64)
    }

    /// Create a tree with custom initial capacity.
    #[must_use]
    pub fn with_capacity(state: GameState, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expand one untried move of `parent`, returning the new child.
    ///
    /// The move is popped from the end of the parent's untried list. Returns
    /// `None` when the parent is fully expanded.
    pub fn expand(&mut self, parent: NodeId) -> Result<Option<NodeId>, GameError> {
        let node = self.get_mut(parent);
        let Some(mv) = node.untried.pop() else {
            return Ok(None);
        };

        let mut state = node.state;
        state.apply_move(mv)?;
        let depth = node.depth + 1;

        let child = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(state, parent, Some(mv), depth));
        self.get_mut(parent).children.push(child);
        Ok(Some(child))
    }

    /// Add `reward` at `leaf` and walk to the root, negating it each ply.
    ///
    /// `reward` is from the point of view of the player who moved into `leaf`.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64) {
        let mut current = leaf;
        let mut reward = reward;

        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.value += reward;
            reward = -reward;
            current = node.parent;
        }
    }

    /// Child of `id` with the most visits; the first one wins ties.
    #[must_use]
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child in &self.get(id).children {
            let visits = self.get(child).visits;
            if best.map_or(true, |(_, most)| visits > most) {
                best = Some((child, visits));
            }
        }
        best.map(|(child, _)| child)
    }

    /// `(move, visits)` for every root child, in expansion order.
    #[must_use]
    pub fn root_visits(&self) -> Vec<(Move, u32)> {
        self.root_node()
            .children
            .iter()
            .filter_map(|&child| {
                let node = self.get(child);
                node.mv.map(|mv| (mv, node.visits))
            })
            .collect()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let fully_expanded = self
            .nodes
            .iter()
            .filter(|n| n.is_fully_expanded() && !n.is_terminal())
            .count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            fully_expanded,
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Non-terminal nodes with every legal move expanded.
    pub fully_expanded: usize,
}
