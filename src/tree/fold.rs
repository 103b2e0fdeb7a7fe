//! Bottom-up folding into text
//!
//! Repeated stack-driven sweeps collapse every final node (both children
//! terminal) into its rendered sub-expression, until only the root's two
//! operands remain. The root is then composed without its own parentheses.

use tracing::debug;

use super::ExpressionNode;

/// Collapse `root` in place and return the rendered expression.
///
/// Afterwards `root` is childless and its symbol holds the full expression.
/// A childless root is returned as-is.
pub fn fold(root: &mut ExpressionNode) -> String {
    if root.is_terminal() {
        return root.symbol.clone();
    }

    let mut sweeps = 0usize;
    while !root.is_final() {
        let collapsed = sweep(root);
        sweeps += 1;
        debug!(sweep = sweeps, collapsed, "fold sweep");
    }

    // The outermost expression is never parenthesized.
    root.symbol = root.compose();
    root.left = None;
    root.right = None;
    root.symbol.clone()
}

/// One pass over the tree; returns the number of nodes collapsed.
fn sweep(root: &mut ExpressionNode) -> usize {
    let mut collapsed = 0;
    let mut pending: Vec<&mut ExpressionNode> = vec![root];

    while let Some(node) = pending.pop() {
        if node.is_final() {
            node.collapse();
            collapsed += 1;
        } else {
            let ExpressionNode { left, right, .. } = node;
            if let Some(left) = left.as_deref_mut() {
                pending.push(left);
            }
            if let Some(right) = right.as_deref_mut() {
                pending.push(right);
            }
        }
    }

    collapsed
}
