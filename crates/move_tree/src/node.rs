use std::fmt;

use uuid::Uuid;

/// Opaque, globally unique node identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One move in the tree. Its children are the alternative replies to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveNode {
    pub id: NodeId,
    /// Move token, e.g. `7g7f` or `P*5e`.
    pub notation: String,
    /// True for the solver's moves; alternates with depth, roots are true.
    pub is_player_move: bool,
    pub children: Vec<MoveNode>,
}

impl MoveNode {
    pub fn new(notation: impl Into<String>, is_player_move: bool) -> Self {
        Self {
            id: NodeId::new(),
            notation: notation.into(),
            is_player_move,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(MoveNode::subtree_size).sum::<usize>()
    }
}

/// Index of the child of `list` with `notation`, appending a new node when
/// there is none.
pub(crate) fn find_or_append(list: &mut Vec<MoveNode>, notation: &str, is_player_move: bool) -> usize {
    match list.iter().position(|n| n.notation == notation) {
        Some(index) => index,
        None => {
            list.push(MoveNode::new(notation, is_player_move));
            list.len() - 1
        }
    }
}
