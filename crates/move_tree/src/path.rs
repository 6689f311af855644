use crate::node::{MoveNode, NodeId};

/// One selection in a path: the chosen node and its index among its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BranchStep {
    pub node_id: NodeId,
    pub index: usize,
}

/// Root-to-node walk through a tree, one step per depth.
///
/// The empty path addresses the top-level list itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BranchPath(Vec<BranchStep>);

impl BranchPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn steps(&self) -> &[BranchStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&BranchStep> {
        self.0.last()
    }

    /// This path extended by one step.
    pub fn child(&self, node_id: NodeId, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(BranchStep { node_id, index });
        Self(steps)
    }

    /// The first `depth` steps.
    pub fn prefix(&self, depth: usize) -> Self {
        Self(self.0[..depth.min(self.0.len())].to_vec())
    }
}

impl From<Vec<BranchStep>> for BranchPath {
    fn from(steps: Vec<BranchStep>) -> Self {
        Self(steps)
    }
}

/// The alternatives at one depth of a path and which of them it selects.
#[derive(Clone, Copy, Debug)]
pub struct Siblings<'a> {
    pub nodes: &'a [MoveNode],
    pub index: usize,
}

impl<'a> Siblings<'a> {
    pub fn selected(&self) -> &'a MoveNode {
        &self.nodes[self.index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_alternatives(&self) -> bool {
        self.nodes.len() > 1
    }
}
