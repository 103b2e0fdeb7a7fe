//! Random expression tree
//!
//! Built top-down by [`build`], folded bottom-up into text by [`fold`].
//! Both walk the tree with explicit work-lists, never the call stack, since
//! the depth is caller-controlled.

mod builder;
mod fold;
mod node;
mod render;

pub use builder::{build, decide, Step};
pub use fold::fold;
pub use node::{ExpressionNode, Preorder, Role};
pub use render::render_tree;

/// Smallest tree `build` can produce for `max_depth`: a single chain with
/// one terminal sibling per level.
pub fn min_node_count(max_depth: usize) -> usize {
    2 * max_depth + 1
}

/// Largest tree `build` can produce for `max_depth`: fully balanced.
pub fn max_node_count(max_depth: usize) -> usize {
    (1usize << (max_depth + 1)) - 1
}
