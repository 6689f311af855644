//! Branching move trees for problem authoring.
//!
//! A [`MoveTree`] holds every line an author accepts for one starting
//! position. Nodes are owned by their parent's child list and addressed from
//! outside by a [`BranchPath`], never by back-references. Edits return a new
//! tree; a path is only meaningful for the tree that produced it.

pub mod error;
pub mod node;
pub mod path;
pub mod storage;
pub mod tree;

pub use error::{Result, TreeError};
pub use node::{MoveNode, NodeId};
pub use path::{BranchPath, BranchStep, Siblings};
pub use storage::ProblemLines;
pub use tree::MoveTree;
