//! Build the weighted call tree from collapsed stack lines.
//!
//! The tree builder:
//! 1. Parses each line as `<stack> <value>` (best effort)
//! 2. Splits the stack into frame names, root-adjacent first
//! 3. Merges each path into the tree, accumulating weights along it
//! 4. Skips malformed lines with a warning

use crate::parser::{parse_line, StackSample};
use crate::tree::node::{Node, NodeId};
use log::{debug, warn};
use std::fmt;

/// Weighted call tree built from collapsed stack samples
///
/// Nodes live in a flat arena; the root always occupies slot 0 and its
/// weight is the total of every accepted sample. Two samples sharing a
/// path prefix merge their shared frames and diverge where the frame
/// sequences differ.
#[derive(Debug, Clone)]
pub struct StackTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
}

impl StackTree {
    /// Create an empty tree holding only the root
    pub fn new() -> Self {
        let root = Node::new("root".to_string(), 0, 0, None);
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Build a tree from collapsed stack lines
    ///
    /// **Public** - main entry point for tree construction
    ///
    /// # Arguments
    /// * `lines` - Raw input lines, in observation order
    ///
    /// # Returns
    /// The built tree. Malformed lines are logged and skipped, so building
    /// never fails as a whole.
    ///
    /// # Algorithm
    /// 1. Parse each line as `<stack> <value>`
    /// 2. Add `value` to the root weight
    /// 3. Walk the frame names, adding `value` to each existing frame on
    ///    the path and creating the frames that are missing
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        let mut skipped = 0usize;

        for (number, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match parse_line(line) {
                Ok(sample) => tree.record(&sample),
                Err(e) => {
                    warn!("Skipping malformed line {}: {:?} ({})", number + 1, line, e);
                    skipped += 1;
                }
            }
        }

        debug!(
            "Built call tree: {} nodes, total weight {}, max depth {}, {} line(s) skipped",
            tree.node_count(),
            tree.total_weight(),
            tree.max_depth(),
            skipped
        );

        tree
    }

    /// Merge one sample into the tree, accumulating weights along its path
    ///
    /// **Public** - can be used to feed already-parsed samples
    pub fn record(&mut self, sample: &StackSample) {
        let root = self.root;
        self.add_weight(root, sample.value);

        let mut cursor = root;
        for frame in sample.frames() {
            cursor = match self.find_child(cursor, frame) {
                Some(child) => {
                    self.add_weight(child, sample.value);
                    child
                }
                None => self.push_child(cursor, frame, sample.value),
            };
        }
    }

    /// Root of the tree
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node by id
    ///
    /// Ids are only issued by the owning tree, so lookups cannot miss.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total weight of every accepted sample
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root.0].weight
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest frame (0 for a tree with no frames)
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Locate an existing child of `parent` by name
    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].name == name)
    }

    /// Append a new child under `parent`, preserving insertion order
    fn push_child(&mut self, parent: NodeId, name: &str, weight: u64) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes
            .push(Node::new(name.to_string(), depth, weight, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn add_weight(&mut self, id: NodeId, value: u64) {
        let node = &mut self.nodes[id.0];
        node.weight = node.weight.saturating_add(value);
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = &self.nodes[id.0];
        writeln!(
            f,
            "{:indent$}{} {}",
            "",
            node.name,
            node.weight,
            indent = node.depth * 2
        )?;
        for child in &node.children {
            self.fmt_subtree(f, *child)?;
        }
        Ok(())
    }
}

impl Default for StackTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StackTree {
    /// Indented dump of the tree, two spaces per depth level, children in
    /// first-observed order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, self.root)
    }
}
