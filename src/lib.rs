//! # Random Arithmetic Expression Generator
//!
//! Synthesizes a random, syntactically valid infix expression whose
//! nesting depth is bounded by a caller-supplied maximum.
//!
//! ## Core Algorithm
//!
//! 1. **Build**: expand a single operator root into a random binary tree
//!    using a LIFO work-list; a one-time latch guarantees that at least one
//!    branch reaches exactly `max_depth` and none goes deeper.
//! 2. **Fold**: sweep the tree bottom-up, collapsing each node whose two
//!    children are terminals into `"l op r"` (parenthesized when the node's
//!    brace flag is set), until the root can be composed unwrapped.
//!
//! ## Usage Example
//!
//! ```
//! use mathgen::{ExpressionGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(3)?;
//! let mut generator = ExpressionGenerator::seeded(config, 10);
//! let generated = generator.generate();
//! assert!(!generated.expression.is_empty());
//! # Ok::<(), mathgen::GeneratorError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod alphabet; // Operator and terminal symbols
pub mod random;   // Injectable randomness
pub mod tree;     // Expression tree: build, fold, dump

pub use random::{RandomSource, ScriptedSource, UniformSource};
pub use tree::{build, fold, render_tree, ExpressionNode, Role};

use rand::rngs::{StdRng, ThreadRng};
use thiserror::Error;
use tracing::debug;

/// Configuration for expression generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum nesting depth (root = 0); always at least 1
    max_depth: usize,

    /// Capture a dump of each tree before it is folded
    pub show_tree: bool,
}

impl GeneratorConfig {
    /// Validate `max_depth` and build a configuration.
    pub fn new(max_depth: usize) -> Result<Self, GeneratorError> {
        if max_depth == 0 {
            return Err(GeneratorError::InvalidDepth(max_depth));
        }
        Ok(Self {
            max_depth,
            show_tree: false,
        })
    }

    /// Toggle the pre-fold tree dump.
    pub fn with_tree_dump(mut self, show_tree: bool) -> Self {
        self.show_tree = show_tree;
        self
    }

    /// Validated maximum depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Errors raised before generation starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Depth must be a positive integer
    #[error("<DEPTH> must be greater than zero (got {0})")]
    InvalidDepth(usize),
}

/// One generated expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Fully folded expression text
    pub expression: String,

    /// Tree dump taken before folding, if requested
    pub tree_dump: Option<String>,
}

/// Generation orchestrator
///
/// Owns the configuration and the random source; each [`generate`] call
/// builds a fresh tree and folds it.
///
/// [`generate`]: ExpressionGenerator::generate
#[derive(Debug)]
pub struct ExpressionGenerator<R: RandomSource> {
    config: GeneratorConfig,
    source: R,
}

impl<R: RandomSource> ExpressionGenerator<R> {
    /// Create a generator over an explicit random source.
    pub fn new(config: GeneratorConfig, source: R) -> Self {
        Self { config, source }
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build one tree and fold it into text.
    pub fn generate(&mut self) -> Generated {
        let mut root = build(self.config.max_depth, &mut self.source);
        let tree_dump = self.config.show_tree.then(|| render_tree(&root));
        let expression = fold(&mut root);
        debug!(max_depth = self.config.max_depth, len = expression.len(), "expression generated");

        Generated {
            expression,
            tree_dump,
        }
    }

    /// Release the random source.
    pub fn into_source(self) -> R {
        self.source
    }
}

impl ExpressionGenerator<UniformSource<StdRng>> {
    /// Reproducible generator.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(config, UniformSource::seeded(seed))
    }
}

impl ExpressionGenerator<UniformSource<ThreadRng>> {
    /// Generator over the thread-local OS-seeded generator.
    pub fn from_entropy(config: GeneratorConfig) -> Self {
        Self::new(config, UniformSource::thread())
    }
}

/// Build and fold a single expression.
///
/// `max_depth` must be at least 1.
pub fn generate_expression<R: RandomSource>(max_depth: usize, source: &mut R) -> String {
    let mut root = build(max_depth, source);
    fold(&mut root)
}
