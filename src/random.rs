//! Injectable randomness
//!
//! Every decision the builder makes (operator, terminal, expand-or-terminate,
//! parentheses) goes through [`RandomSource`], so tests can replay a fixed
//! script of answers instead of a real generator.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform choice capability used by the tree builder.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is always non-zero.
    fn pick_index(&mut self, upper: usize) -> usize;

    /// Fair coin: `true` when the drawn index out of two is zero.
    fn coin_flip(&mut self) -> bool {
        self.pick_index(2) == 0
    }

    /// Uniform element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.pick_index(items.len())]
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformSource<R> {
    rng: R,
}

impl<R: Rng> UniformSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSource<StdRng> {
    /// Reproducible source: same seed, same sequence of expressions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl UniformSource<ThreadRng> {
    /// Thread-local, OS-seeded source for normal use.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RandomSource for UniformSource<R> {
    fn pick_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "cannot pick from an empty range");
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of answers in order.
///
/// Panics when the script runs dry or an answer does not fit the requested
/// range, which makes a mis-scripted test fail loudly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    answers: VecDeque<usize>,
    consumed: usize,
}

impl ScriptedSource {
    /// Script from a sequence of raw index answers.
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Answers consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, upper: usize) -> usize {
        let answer = self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted after {} answers", self.consumed));
        assert!(
            answer < upper,
            "scripted answer {} out of range 0..{} (answer #{})",
            answer,
            upper,
            self.consumed
        );
        self.consumed += 1;
        answer
    }
}
