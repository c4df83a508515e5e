use std::{iter::FusedIterator, mem};

use num_bigint::BigUint;

use crate::TermCount;

/// Unbounded iterator over 1, 1, 2, 3, 5, 8, ...
///
/// Only the two most recent values are held, so each step costs one addition.
/// Terms are arbitrary precision and never wrap.
#[derive(Clone, Debug)]
pub struct FibonacciTerms {
    current: BigUint,
    next: BigUint,
}

impl FibonacciTerms {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(1u32),
            next: BigUint::from(1u32),
        }
    }
}

impl Default for FibonacciTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciTerms {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let upcoming = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, upcoming))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for FibonacciTerms {}

/// The first `count` terms of the sequence.
pub fn first_terms(count: TermCount) -> impl Iterator<Item = BigUint> {
    FibonacciTerms::new().take(count.get())
}
