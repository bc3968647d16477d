//! # Combining sequences
//!
//! A sequence can be combined with another sequence (concatenation), with a single rational value
//! or with an integer (both appended as one element). Combining either creates a new sequence or
//! extends an existing one in place.
use std::ops::{Add, AddAssign};

use num_bigint::BigInt;

use crate::data::number_types::rational::Rational;
use crate::data::sequence::RationalSequence;

/// Right hand side of a combination with a `RationalSequence`.
#[derive(Clone, Debug)]
pub enum Operand<'a> {
    /// All elements of this sequence are appended, in storage order.
    Sequence(&'a RationalSequence),
    /// A single element is appended.
    Value(Rational),
}

impl<'a> From<&'a RationalSequence> for Operand<'a> {
    fn from(sequence: &'a RationalSequence) -> Self {
        Operand::Sequence(sequence)
    }
}

impl From<Rational> for Operand<'_> {
    fn from(value: Rational) -> Self {
        Operand::Value(value)
    }
}

impl From<i64> for Operand<'_> {
    fn from(integer: i64) -> Self {
        Operand::Value(Rational::from_integer(integer))
    }
}

impl From<BigInt> for Operand<'_> {
    fn from(integer: BigInt) -> Self {
        Operand::Value(Rational::from_integer(integer))
    }
}

impl RationalSequence {
    /// A new sequence holding the elements of `self` followed by those of `other`.
    ///
    /// Neither operand is modified.
    pub fn combine<'a>(&self, other: impl Into<Operand<'a>>) -> Self {
        let mut combined = self.clone();
        combined.combine_in_place(other);
        combined
    }

    /// Append the elements of `other` to `self`.
    ///
    /// # Return value
    ///
    /// `self`, such that calls can be chained.
    pub fn combine_in_place<'a>(&mut self, other: impl Into<Operand<'a>>) -> &mut Self {
        match other.into() {
            Operand::Sequence(sequence) => self.elements.extend_from_slice(&sequence.elements),
            Operand::Value(value) => self.elements.push(value),
        }

        self
    }
}

impl Add<&RationalSequence> for &RationalSequence {
    type Output = RationalSequence;

    fn add(self, rhs: &RationalSequence) -> Self::Output {
        self.combine(rhs)
    }
}

impl Add<&RationalSequence> for RationalSequence {
    type Output = Self;

    fn add(mut self, rhs: &RationalSequence) -> Self::Output {
        self.combine_in_place(rhs);
        self
    }
}

impl Add<Rational> for &RationalSequence {
    type Output = RationalSequence;

    fn add(self, rhs: Rational) -> Self::Output {
        self.combine(rhs)
    }
}

impl Add<Rational> for RationalSequence {
    type Output = Self;

    fn add(mut self, rhs: Rational) -> Self::Output {
        self.combine_in_place(rhs);
        self
    }
}

impl Add<i64> for &RationalSequence {
    type Output = RationalSequence;

    fn add(self, rhs: i64) -> Self::Output {
        self.combine(rhs)
    }
}

impl Add<i64> for RationalSequence {
    type Output = Self;

    fn add(mut self, rhs: i64) -> Self::Output {
        self.combine_in_place(rhs);
        self
    }
}

impl AddAssign<&RationalSequence> for RationalSequence {
    fn add_assign(&mut self, rhs: &RationalSequence) {
        self.combine_in_place(rhs);
    }
}

impl AddAssign<Rational> for RationalSequence {
    fn add_assign(&mut self, rhs: Rational) {
        self.combine_in_place(rhs);
    }
}

impl AddAssign<i64> for RationalSequence {
    fn add_assign(&mut self, rhs: i64) {
        self.combine_in_place(rhs);
    }
}
