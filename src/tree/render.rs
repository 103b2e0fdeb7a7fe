//! Indented text dump of an unfolded tree
//!
//! One line per node: `_` repeated `depth` times, the symbol, and the role,
//! right subtrees listed before left ones.

use super::ExpressionNode;

/// Render the tree rooted at `root`, one node per line.
pub fn render_tree(root: &ExpressionNode) -> String {
    root.iter()
        .map(|node| format!("{}{} ({})", "_".repeat(node.depth), node.symbol, node.role))
        .collect::<Vec<_>>()
        .join("\n")
}
