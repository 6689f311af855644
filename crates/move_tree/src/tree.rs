use tracing::debug;

use crate::{
    error::{Result, TreeError},
    node::{find_or_append, MoveNode},
    path::{BranchPath, BranchStep, Siblings},
};

/// All authored lines for one starting position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTree {
    /// Board notation of the starting position.
    pub start: String,
    /// First-move alternatives.
    pub roots: Vec<MoveNode>,
}

/// Follows `steps` from `list`, checking each step's index and id.
fn children<'a>(mut list: &'a [MoveNode], steps: &[BranchStep]) -> Result<&'a [MoveNode]> {
    for (depth, step) in steps.iter().enumerate() {
        let node = list
            .get(step.index)
            .filter(|n| n.id == step.node_id)
            .ok_or(TreeError::StalePath { depth })?;
        list = &node.children;
    }
    Ok(list)
}

fn children_mut<'a>(
    mut list: &'a mut Vec<MoveNode>,
    steps: &[BranchStep],
) -> Result<&'a mut Vec<MoveNode>> {
    for (depth, step) in steps.iter().enumerate() {
        let node = list
            .get_mut(step.index)
            .filter(|n| n.id == step.node_id)
            .ok_or(TreeError::StalePath { depth })?;
        list = &mut node.children;
    }
    Ok(list)
}

fn collect_lines(nodes: &[MoveNode], prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for node in nodes {
        prefix.push(node.notation.clone());
        if node.is_leaf() {
            out.push(prefix.clone());
        } else {
            collect_lines(&node.children, prefix, out);
        }
        prefix.pop();
    }
}

impl MoveTree {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            roots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(MoveNode::subtree_size).sum()
    }

    /// Adds `notation` below the node addressed by `path`.
    ///
    /// A sibling with the same notation is reused instead of duplicated. The
    /// returned path ends at the existing or new node.
    pub fn insert_at(
        &self,
        path: &BranchPath,
        notation: &str,
        is_player_move: bool,
    ) -> Result<(MoveTree, BranchPath)> {
        let depth = path.len();
        let expected = depth % 2 == 0;
        if is_player_move != expected {
            return Err(TreeError::TurnMismatch { depth, expected });
        }

        let mut tree = self.clone();
        let list = children_mut(&mut tree.roots, path.steps())?;
        let before = list.len();
        let index = find_or_append(list, notation, is_player_move);
        let node_id = list[index].id;
        debug!(
            notation,
            depth,
            index,
            created = list.len() > before,
            "tree insert"
        );
        Ok((tree, path.child(node_id, index)))
    }

    /// Removes the node at `path` together with its subtree.
    pub fn remove_at(&self, path: &BranchPath) -> Result<MoveTree> {
        let Some(last) = path.last() else {
            return Err(TreeError::EmptyPath);
        };
        let depth = path.len() - 1;

        let mut tree = self.clone();
        let list = children_mut(&mut tree.roots, &path.steps()[..depth])?;
        if !list
            .get(last.index)
            .is_some_and(|n| n.id == last.node_id)
        {
            return Err(TreeError::StalePath { depth });
        }
        let removed = list.remove(last.index);
        debug!(
            notation = %removed.notation,
            depth,
            nodes = removed.subtree_size(),
            "tree remove"
        );
        Ok(tree)
    }

    /// One move sequence per leaf, depth first. An empty tree has none.
    pub fn to_sequences(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        collect_lines(&self.roots, &mut Vec::new(), &mut out);
        out
    }

    /// Rebuilds a tree from move sequences; shared prefixes share nodes.
    pub fn from_sequences<S: AsRef<str>>(start: impl Into<String>, sequences: &[Vec<S>]) -> Self {
        let mut tree = Self::new(start);
        for sequence in sequences {
            let mut list = &mut tree.roots;
            for (depth, notation) in sequence.iter().enumerate() {
                let index = find_or_append(list, notation.as_ref(), depth % 2 == 0);
                list = &mut list[index].children;
            }
        }
        tree
    }

    /// The alternatives at `depth` along `path`, with the one `path` selects.
    pub fn siblings_at(&self, path: &BranchPath, depth: usize) -> Option<Siblings<'_>> {
        let step = path.steps().get(depth)?;
        let nodes = children(&self.roots, &path.steps()[..depth]).ok()?;
        nodes
            .get(step.index)
            .filter(|n| n.id == step.node_id)
            .map(|_| Siblings {
                nodes,
                index: step.index,
            })
    }

    /// Selects alternative `index` at `depth`.
    ///
    /// Deeper selections are carried over while the new branch has a move with
    /// the same notation; the path stops where it does not.
    pub fn switch_branch(&self, path: &BranchPath, depth: usize, index: usize) -> Result<BranchPath> {
        if depth >= path.len() {
            return Err(TreeError::DepthOutOfRange {
                depth,
                len: path.len(),
            });
        }
        let old_line = self.line(path)?;
        let nodes = children(&self.roots, &path.steps()[..depth])?;
        let mut current = nodes
            .get(index)
            .ok_or(TreeError::NoSuchSibling { depth, index })?;

        let mut next = path.prefix(depth).child(current.id, index);
        for old in &old_line[depth + 1..] {
            let Some(i) = current
                .children
                .iter()
                .position(|c| c.notation == old.notation)
            else {
                break;
            };
            current = &current.children[i];
            next = next.child(current.id, i);
        }
        Ok(next)
    }

    pub fn node_at(&self, path: &BranchPath) -> Option<&MoveNode> {
        let last = path.last()?;
        children(&self.roots, &path.steps()[..path.len() - 1])
            .ok()?
            .get(last.index)
            .filter(|n| n.id == last.node_id)
    }

    /// The nodes along `path`, root first.
    pub fn line(&self, path: &BranchPath) -> Result<Vec<&MoveNode>> {
        let mut out = Vec::with_capacity(path.len());
        let mut list: &[MoveNode] = &self.roots;
        for (depth, step) in path.steps().iter().enumerate() {
            let node = list
                .get(step.index)
                .filter(|n| n.id == step.node_id)
                .ok_or(TreeError::StalePath { depth })?;
            out.push(node);
            list = &node.children;
        }
        Ok(out)
    }

    /// Path taking the first alternative at every depth down to a leaf.
    pub fn main_line(&self) -> BranchPath {
        let mut path = BranchPath::root();
        let mut list: &[MoveNode] = &self.roots;
        while let Some(first) = list.first() {
            path = path.child(first.id, 0);
            list = &first.children;
        }
        path
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
