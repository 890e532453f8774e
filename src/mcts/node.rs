//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (`NodeId`). A node's
//! parent link is a plain index, so the tree holds no reference cycles and is
//! freed in one go when the arena is dropped.

use smallvec::SmallVec;

use crate::core::{GameState, Marker, Move, MoveList, CELL_COUNT};

/// Index into the [`SearchTree`](super::SearchTree) node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Expansion progress of a node. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePhase {
    /// No rollout has passed through the node yet.
    Unvisited,
    /// Some legal moves still lack a child.
    PartiallyExpanded,
    /// Every legal move has a child (or the position is terminal).
    FullyExpanded,
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Position at this node.
    pub state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Move that led here from the parent (`None` for root).
    pub mv: Option<Move>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Expanded children, in expansion order.
    pub children: SmallVec<[NodeId; CELL_COUNT]>,

    /// Rollouts that passed through this node.
    pub visits: u32,

    /// Accumulated reward, from the point of view of the player who made
    /// `mv` (the player to move at the parent).
    pub value: f64,

    /// Legal moves not yet expanded. Empty for terminal positions.
    pub untried: MoveList,
}

impl SearchNode {
    /// Create a node for `state` reached from `parent` by `mv`.
    #[must_use]
    pub fn new(state: GameState, parent: NodeId, mv: Option<Move>, depth: u16) -> Self {
        let untried = if state.is_terminal() {
            MoveList::new()
        } else {
            state.legal_moves()
        };

        Self {
            state,
            parent,
            mv,
            depth,
            children: SmallVec::new(),
            visits: 0,
            value: 0.0,
            untried,
        }
    }

    /// Create a root node.
    #[must_use]
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE, None, 0)
    }

    /// Player whose move produced this node, `None` for the root.
    #[must_use]
    pub fn mover(&self) -> Option<Marker> {
        self.mv.map(|_| self.state.to_move().opponent())
    }

    /// Check if every legal move has been expanded.
    #[inline]
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Check if the position is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current expansion phase.
    #[must_use]
    pub fn phase(&self) -> NodePhase {
        if self.visits == 0 {
            NodePhase::Unvisited
        } else if self.is_fully_expanded() {
            NodePhase::FullyExpanded
        } else {
            NodePhase::PartiallyExpanded
        }
    }

    /// Average reward per visit (0 when unvisited).
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / f64::from(self.visits)
        }
    }
}
