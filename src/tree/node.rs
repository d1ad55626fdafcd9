//! Node storage for the weighted call tree.

/// Handle to a node stored in a `StackTree`
///
/// Nodes live in a flat arena owned by the tree; a `NodeId` is an index
/// into that arena and is only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot of this node
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single frame in the weighted call tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Frame name, unique among this node's siblings
    pub name: String,

    /// Distance from the root (root = 0)
    pub depth: usize,

    /// Total sample weight of every path passing through this frame
    pub weight: u64,

    /// Back-reference to the enclosing frame, `None` only for the root
    pub parent: Option<NodeId>,

    /// Child frames in first-observed order
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, depth: usize, weight: u64, parent: Option<NodeId>) -> Self {
        Self {
            name,
            depth,
            weight,
            parent,
            children: Vec::new(),
        }
    }
}
