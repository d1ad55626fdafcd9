//! Text canvas layout for the weighted call tree.
//!
//! The renderer walks the tree in level order and draws one row per
//! depth:
//! - A segment's width is its share of the root weight, floored onto a
//!   fixed-width canvas
//! - A segment never starts left of its parent's start column
//! - Rows are separated by a blank line
//!
//! Layout state lives in a side table keyed by node id, so the tree
//! itself is never mutated and can be rendered again.

use crate::flamegraph::label::segment_label;
use crate::tree::{NodeId, StackTree};
use crate::utils::config::CANVAS_WIDTH;
use crate::utils::error::RenderError;
use log::debug;
use std::collections::VecDeque;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in columns, representing 100% of the root weight
    pub canvas_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas_width(mut self, canvas_width: usize) -> Self {
        self.canvas_width = canvas_width;
        self
    }
}

/// Render the tree as a text flame graph
///
/// **Public** - main entry point for rendering
///
/// # Arguments
/// * `tree` - Built call tree
/// * `config` - Optional configuration (default: 200-column canvas)
///
/// # Returns
/// The rendered diagram, one row per depth level present, rows separated
/// by a blank line; the empty string for a tree with no frames
///
/// # Errors
/// * `RenderError::DepthOrder` - level-order traversal saw a depth that
///   was not the current row's or the next one's; the tree is corrupt
/// * `RenderError::LabelWidth` - a label did not fill its segment exactly
pub fn render_flamegraph(
    tree: &StackTree,
    config: Option<&RenderConfig>,
) -> Result<String, RenderError> {
    let config = config.cloned().unwrap_or_default();
    let total = tree.total_weight();

    let mut queue: VecDeque<NodeId> = tree.get(tree.root()).children.iter().copied().collect();
    let Some(&first) = queue.front() else {
        debug!("Tree has no frames, rendering empty diagram");
        return Ok(String::new());
    };

    debug!(
        "Rendering {} frame(s) onto a {}-column canvas, total weight {}",
        tree.node_count() - 1,
        config.canvas_width,
        total
    );

    // print_start per node, recorded as each segment is placed
    let mut print_starts: Vec<Option<usize>> = vec![None; tree.node_count()];

    let mut output = String::new();
    let mut rows = 1usize;
    let mut current_depth = tree.get(first).depth;
    // next free logical column vs. characters actually written: they differ
    // because zero-width segments advance the column without emitting text
    let mut line_cursor = 0usize;
    let mut written = 0usize;

    while let Some(id) = queue.pop_front() {
        let node = tree.get(id);
        queue.extend(node.children.iter().copied());

        let width = segment_width(node.weight, total, config.canvas_width);

        if node.depth != current_depth {
            // level order visits each row completely before the next
            if node.depth != current_depth + 1 {
                return Err(RenderError::DepthOrder(current_depth, node.depth));
            }
            output.push_str("\n\n");
            rows += 1;
            current_depth = node.depth;
            line_cursor = 0;
            written = 0;
        }

        // align with parent: never start left of where the parent began
        let parent_start = node
            .parent
            .and_then(|p| print_starts[p.index()])
            .unwrap_or(0);
        let start = parent_start.max(line_cursor);

        if width > 0 {
            let label = segment_label(&node.name, width);
            let label_width = label.chars().count();
            if label_width != width {
                return Err(RenderError::LabelWidth(label, label_width, width));
            }
            output.push_str(&" ".repeat(start - written));
            output.push_str(&label);
            written = start + width;
        }

        print_starts[id.index()] = Some(start);
        line_cursor = start + width;
    }

    output.push('\n');

    debug!("Rendered {} row(s), {} bytes", rows, output.len());

    Ok(output)
}

/// Column span for a weight as its share of the canvas, floored
///
/// **Private** - zero when the tree carries no weight at all
fn segment_width(weight: u64, total: u64, canvas: usize) -> usize {
    if total == 0 {
        return 0;
    }
    ((canvas as u128 * weight as u128) / total as u128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row_width(row: &str) -> usize {
        row.chars().count()
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = StackTree::new();
        assert_eq!(render_flamegraph(&tree, None).unwrap(), "");
    }

    #[test]
    fn test_render_single_path_full_width() {
        let tree = StackTree::build(["x;y 100"]);
        let out = render_flamegraph(&tree, None).unwrap();

        let rows: Vec<&str> = out.trim_end_matches('\n').split("\n\n").collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| row_width(r) <= 200));
        assert_eq!(row_width(rows[0]), 200);
        assert_eq!(row_width(rows[1]), 200);
        assert!(rows[0].starts_with("[x200#"));
        assert!(rows[1].starts_with("[y200#"));
    }

    #[test]
    fn test_render_small_canvas_exact() {
        let tree = StackTree::build(["a;b 10"]);
        let config = RenderConfig::new().with_canvas_width(20);
        let out = render_flamegraph(&tree, Some(&config)).unwrap();

        assert_eq!(out, "[a 20##############]\n\n[b 20##############]\n");
    }

    #[test]
    fn test_render_siblings_in_insertion_order() {
        let tree = StackTree::build(["a;b 10", "a;c 10"]);
        let config = RenderConfig::new().with_canvas_width(20);
        let out = render_flamegraph(&tree, Some(&config)).unwrap();

        assert_eq!(out, "[a 20##############]\n\n[b 10####][c 10####]\n");
    }

    #[test]
    fn test_child_aligns_under_parent_start() {
        // "b" occupies columns 100..200, so "c" must not start before 100
        let tree = StackTree::build(["a 100", "b;c 100"]);
        let out = render_flamegraph(&tree, None).unwrap();

        let rows: Vec<&str> = out.trim_end_matches('\n').split("\n\n").collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].chars().take(100).all(|c| c == ' '));
        assert_eq!(&rows[1][100..106], "[c100#");
    }

    #[test]
    fn test_zero_width_segment_keeps_alignment() {
        // "z" rounds to zero columns and is drawn first on its row; "c"
        // still lands under "b" untouched
        let tree = StackTree::build(["a 100", "a;z 0", "b 100", "b;c 100"]);
        let out = render_flamegraph(&tree, None).unwrap();

        let rows: Vec<&str> = out.trim_end_matches('\n').split("\n\n").collect();
        assert_eq!(rows.len(), 2);
        // a gets floor(200 * 100 / 300) = 66 columns, b gets 133
        assert_eq!(row_width(rows[0]), 199);
        assert!(rows[1].chars().take(66).all(|c| c == ' '));
        assert!(rows[1][66..].starts_with("[c"));
    }

    #[test]
    fn test_zero_total_renders_blank_rows() {
        let tree = StackTree::build(["a 0", "a;b 0"]);
        let out = render_flamegraph(&tree, None).unwrap();

        assert_eq!(out, "\n\n\n");
    }

    #[test]
    fn test_rows_have_no_trailing_spaces() {
        // "z" starts at column 133 (under "b") but paints nothing, so the
        // second row ends right after "c"
        let tree = StackTree::build(["a 100", "b 100", "b;z 0", "a;c 100"]);
        let out = render_flamegraph(&tree, None).unwrap();

        for row in out.split('\n') {
            assert!(!row.ends_with(' '));
        }
        let rows: Vec<&str> = out.trim_end_matches('\n').split("\n\n").collect();
        assert_eq!(row_width(rows[1]), 66);
        assert!(rows[1].starts_with("[c"));
    }

    #[test]
    fn test_depth_skip_is_fatal() {
        let mut tree = StackTree::build(["a;b 10"]);
        let a = tree.get(tree.root()).children[0];
        let b = tree.get(a).children[0];
        tree.nodes[b.index()].depth = 5;

        let err = render_flamegraph(&tree, None).unwrap_err();
        assert!(matches!(err, RenderError::DepthOrder(1, 5)));
    }

    #[test]
    fn test_depth_decrease_is_fatal() {
        let mut tree = StackTree::build(["a;b;c 10"]);
        let a = tree.get(tree.root()).children[0];
        let b = tree.get(a).children[0];
        let c = tree.get(b).children[0];
        tree.nodes[c.index()].depth = 0;

        let err = render_flamegraph(&tree, None).unwrap_err();
        assert!(matches!(err, RenderError::DepthOrder(2, 0)));
    }

    #[test]
    fn test_render_does_not_mutate_tree() {
        let tree = StackTree::build(["a;b 10", "a;c 5"]);
        let first = render_flamegraph(&tree, None).unwrap();
        let second = render_flamegraph(&tree, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_segment_width_floors() {
        assert_eq!(segment_width(1, 3, 200), 66);
        assert_eq!(segment_width(100, 100, 200), 200);
        assert_eq!(segment_width(0, 100, 200), 0);
        assert_eq!(segment_width(5, 0, 200), 0);
    }

    #[test]
    fn test_segment_width_no_overflow() {
        assert_eq!(segment_width(u64::MAX, u64::MAX, 200), 200);
        assert_eq!(segment_width(u64::MAX / 2, u64::MAX, 200), 99);
    }
}
