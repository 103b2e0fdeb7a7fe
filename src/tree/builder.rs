//! Random tree construction
//!
//! Work-list driven (LIFO) expansion from a single operator root. A one-time
//! latch records that some branch has hit `max_depth`; before it flips, the
//! last pending node is always expanded so the deepest branch keeps growing,
//! afterwards nodes expand or terminate freely until they reach the bound.

use tracing::{debug, trace};

use super::{ExpressionNode, Role};
use crate::alphabet::{OPERATORS, TERMINALS};
use crate::random::RandomSource;

/// What to do with a popped placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Become an operator with two new placeholder children
    Expand,
    /// Become a terminal literal
    Terminate,
}

/// Expansion policy for one popped node.
///
/// `depth_reached` is the latch value *after* this node's own depth check,
/// so the node that trips the latch is decided under the latched rules and
/// terminates at exactly `max_depth`.
pub fn decide<R: RandomSource>(
    depth: usize,
    max_depth: usize,
    depth_reached: bool,
    work_list_empty: bool,
    source: &mut R,
) -> Step {
    if !depth_reached {
        if work_list_empty {
            // Last live branch: must keep growing.
            Step::Expand
        } else if source.coin_flip() {
            Step::Terminate
        } else {
            Step::Expand
        }
    } else if depth < max_depth {
        if source.coin_flip() {
            Step::Expand
        } else {
            Step::Terminate
        }
    } else {
        Step::Terminate
    }
}

/// Build a random expression tree with at least one leaf at exactly
/// `max_depth` and none deeper.
///
/// `max_depth` must be at least 1; callers validate it through
/// [`GeneratorConfig`](crate::GeneratorConfig).
pub fn build<R: RandomSource>(max_depth: usize, source: &mut R) -> ExpressionNode {
    debug_assert!(max_depth >= 1, "max_depth must be positive");

    let mut root = ExpressionNode::placeholder(Role::Root, 0);
    root.symbol = source.pick(&OPERATORS).to_string();
    root.attach_placeholders();

    let mut expanded = 0usize;
    let mut terminated = 0usize;
    {
        let mut pending: Vec<&mut ExpressionNode> = Vec::new();
        push_children(&mut root, &mut pending);

        let mut depth_reached = false;
        while let Some(current) = pending.pop() {
            if !depth_reached && current.depth >= max_depth {
                depth_reached = true;
                debug!(depth = current.depth, role = %current.role, "maximum depth reached");
            }

            let step = decide(
                current.depth,
                max_depth,
                depth_reached,
                pending.is_empty(),
                source,
            );
            trace!(depth = current.depth, role = %current.role, ?step, pending = pending.len(), "work-list pop");

            match step {
                Step::Expand => {
                    expand(current, source, &mut pending);
                    expanded += 1;
                }
                Step::Terminate => {
                    terminate(current, source);
                    terminated += 1;
                }
            }
        }
    }

    debug!(max_depth, expanded, terminated, nodes = root.node_count(), "tree built");
    root
}

fn expand<'a, R: RandomSource>(
    node: &'a mut ExpressionNode,
    source: &mut R,
    pending: &mut Vec<&'a mut ExpressionNode>,
) {
    node.symbol = source.pick(&OPERATORS).to_string();
    node.wrap_in_parens = source.coin_flip();
    node.attach_placeholders();
    push_children(node, pending);
}

fn terminate<R: RandomSource>(node: &mut ExpressionNode, source: &mut R) {
    node.symbol = source.pick(&TERMINALS).to_string();
}

/// Left is pushed first, so the right child is popped first.
fn push_children<'a>(node: &'a mut ExpressionNode, pending: &mut Vec<&'a mut ExpressionNode>) {
    let ExpressionNode { left, right, .. } = node;
    if let (Some(left), Some(right)) = (left.as_deref_mut(), right.as_deref_mut()) {
        pending.push(left);
        pending.push(right);
    }
}
