//! # Sequences of rational numbers
//!
//! Values are stored in the order in which they were added, but traversing a sequence produces
//! them sorted: largest denominator first, and among equal denominators, largest numerator first.
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use thiserror::Error;

use crate::data::number_types::rational::Rational;

mod ops;

pub use ops::Operand;

/// A growing collection of rational numbers.
///
/// Elements can be added and replaced, but never removed.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RationalSequence {
    elements: Vec<Rational>,
}

/// Errors from positional access into a `RationalSequence`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// There is no element at this position.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of stored elements.
        len: usize,
    },
}

impl RationalSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a value at the end of the storage order.
    pub fn append(&mut self, value: Rational) {
        self.elements.push(value);
    }

    /// Element at a position in storage order.
    pub fn get(&self, index: usize) -> Option<&Rational> {
        self.elements.get(index)
    }

    /// Replace the element at a position in storage order.
    ///
    /// # Return value
    ///
    /// The value that was replaced.
    ///
    /// # Errors
    ///
    /// If `index` is not smaller than the length of the sequence.
    pub fn set(&mut self, index: usize, value: Rational) -> Result<Rational, SequenceError> {
        let len = self.len();
        self.elements.get_mut(index)
            .map(|element| std::mem::replace(element, value))
            .ok_or(SequenceError::IndexOutOfBounds { index, len })
    }

    /// Exact sum of all elements.
    ///
    /// Elements are added in storage order, starting from `0/1`.
    pub fn sum(&self) -> Rational {
        self.elements.iter().sum()
    }

    /// Elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rational> {
        self.elements.iter()
    }

    /// Elements sorted by denominator descending, then by numerator descending.
    ///
    /// The order is computed from the current contents at each call. Elements with equal fields
    /// keep their relative storage order.
    pub fn traverse(&self) -> std::vec::IntoIter<&Rational> {
        self.elements.iter()
            .sorted_by(|left, right| {
                right.denominator().cmp(left.denominator())
                    .then_with(|| right.numerator().cmp(left.numerator()))
            })
    }
}

impl Index<usize> for RationalSequence {
    type Output = Rational;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl IndexMut<usize> for RationalSequence {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<'a> IntoIterator for &'a RationalSequence {
    type Item = &'a Rational;
    type IntoIter = std::vec::IntoIter<&'a Rational>;

    /// Traversal order, see `RationalSequence::traverse`.
    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl FromIterator<Rational> for RationalSequence {
    fn from_iter<I: IntoIterator<Item=Rational>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl Extend<Rational> for RationalSequence {
    fn extend<I: IntoIterator<Item=Rational>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl From<Vec<Rational>> for RationalSequence {
    fn from(elements: Vec<Rational>) -> Self {
        Self { elements }
    }
}
