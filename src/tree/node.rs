//! Expression tree node
//!
//! Strict binary tree: a node owns either two children (operator) or none
//! (terminal). Children are boxed and owned by their parent; there is no
//! back-pointer, the slot a node occupies is recorded in [`Role`].

use std::fmt;

/// Which slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The single tree root
    Root,
    /// Left operand of the parent
    Left,
    /// Right operand of the parent
    Right,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Root => "ROOT",
            Role::Left => "LEFT",
            Role::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Node of a generated expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionNode {
    /// Operator glyph, terminal literal, or (after folding) rendered sub-expression
    pub symbol: String,

    /// Distance from the root (root = 0)
    pub depth: usize,

    /// Slot in the parent
    pub role: Role,

    /// Parenthesize this sub-expression when it is folded
    pub wrap_in_parens: bool,

    pub(crate) left: Option<Box<ExpressionNode>>,
    pub(crate) right: Option<Box<ExpressionNode>>,
}

impl ExpressionNode {
    /// Unlabelled node waiting to be expanded or terminated.
    pub fn placeholder(role: Role, depth: usize) -> Self {
        Self {
            symbol: String::new(),
            depth,
            role,
            wrap_in_parens: false,
            left: None,
            right: None,
        }
    }

    /// Terminal leaf with a literal symbol.
    pub fn leaf(symbol: impl Into<String>, role: Role, depth: usize) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::placeholder(role, depth)
        }
    }

    /// Operator node over two existing subtrees.
    ///
    /// Children keep whatever depth they were built with; callers assembling
    /// trees by hand are responsible for consistent depths.
    pub fn operator(
        symbol: impl Into<String>,
        wrap_in_parens: bool,
        role: Role,
        depth: usize,
        left: ExpressionNode,
        right: ExpressionNode,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            depth,
            role,
            wrap_in_parens,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Turn this node into an operator with two fresh placeholder children
    /// one level deeper.
    pub(crate) fn attach_placeholders(&mut self) {
        self.left = Some(Box::new(Self::placeholder(Role::Left, self.depth + 1)));
        self.right = Some(Box::new(Self::placeholder(Role::Right, self.depth + 1)));
    }

    /// Childless node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Both children present and both terminal: ready to collapse.
    #[inline]
    pub fn is_final(&self) -> bool {
        matches!(
            (&self.left, &self.right),
            (Some(left), Some(right)) if left.is_terminal() && right.is_terminal()
        )
    }

    /// Both children, if this is an operator node.
    pub fn children(&self) -> Option<(&ExpressionNode, &ExpressionNode)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Left child.
    pub fn left(&self) -> Option<&ExpressionNode> {
        self.left.as_deref()
    }

    /// Right child.
    pub fn right(&self) -> Option<&ExpressionNode> {
        self.right.as_deref()
    }

    /// `"{left} {op} {right}"` from the children's current symbols.
    ///
    /// Panics if either child is missing; callers only compose final nodes or
    /// the root of a fully folded-below tree.
    pub(crate) fn compose(&self) -> String {
        match self.children() {
            Some((left, right)) => format!("{} {} {}", left.symbol, self.symbol, right.symbol),
            None => unreachable!(
                "composing {} node at depth {} without two children",
                self.role, self.depth
            ),
        }
    }

    /// Replace this node's symbol with its rendered sub-expression and drop
    /// the children.
    pub(crate) fn collapse(&mut self) {
        debug_assert!(self.is_final(), "collapsing a node that is not final");
        let composed = self.compose();
        self.symbol = if self.wrap_in_parens {
            format!("({})", composed)
        } else {
            composed
        };
        self.left = None;
        self.right = None;
    }

    /// Every node visited once, parent before children.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { pending: vec![self] }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.iter()
            .map(|node| node.depth - self.depth)
            .max()
            .unwrap_or(0)
    }

    /// Depths of all terminal nodes, in pre-order.
    pub fn leaf_depths(&self) -> Vec<usize> {
        self.iter()
            .filter(|node| node.is_terminal())
            .map(|node| node.depth)
            .collect()
    }
}

/// Pre-order walk driven by an explicit stack. Right children are visited
/// before left ones.
#[derive(Debug)]
pub struct Preorder<'a> {
    pending: Vec<&'a ExpressionNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ExpressionNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        if let Some((left, right)) = node.children() {
            self.pending.push(left);
            self.pending.push(right);
        }
        Some(node)
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.role)
    }
}
