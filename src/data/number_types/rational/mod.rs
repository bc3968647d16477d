//! # Rational numbers
//!
//! A fraction of two arbitrary precision integers that is always kept in lowest terms.
//!
//! ## Sign of the denominator
//!
//! Reduction divides both fields by their (non-negative) greatest common divisor and does nothing
//! else. A negative denominator therefore stays negative: `Rational::new(1, -2)` is stored, and
//! displayed, as `1/-2`. Equality compares the stored fields, so `1/-2` and `-1/2` are not equal.
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use thiserror::Error;

mod ops;
mod macros;

/// An exact fraction `numerator / denominator` in lowest terms.
///
/// The denominator is never zero. Values are immutable; arithmetic creates new values.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// Errors that can occur when a `Rational` is created.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RationalError {
    /// The denominator was zero.
    #[error("the denominator of a rational number can't be zero")]
    DivisionByZero,
    /// Text could not be read as a fraction of the form `<int>/<int>`.
    #[error("failed to parse \"{text}\" as a fraction: {reason}")]
    Parse {
        /// The text that was being parsed.
        text: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl Rational {
    /// Create a new value, reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, RationalError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Self::reduce(numerator.into(), denominator))
    }

    /// The value `integer / 1`.
    pub fn from_integer(integer: impl Into<BigInt>) -> Self {
        Self { numerator: integer.into(), denominator: BigInt::from(1) }
    }

    /// Read a fraction of the form `<int>/<int>`.
    ///
    /// The text is split at the first `/`; both parts need to be integers without surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// `RationalError::Parse` if the text is not a fraction, `RationalError::DivisionByZero` if
    /// the denominator is zero.
    pub fn parse(text: &str) -> Result<Self, RationalError> {
        text.parse()
    }

    /// Numerator, as stored after reduction.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator, as stored after reduction. Never zero, but possibly negative.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Floating point approximation of this value.
    ///
    /// Values too large in magnitude for an `f64` become infinite.
    pub fn to_f64(&self) -> f64 {
        let (numerator, denominator) = if self.denominator.is_negative() {
            (-&self.numerator, -&self.denominator)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        };

        BigRational::new_raw(numerator, denominator)
            .to_f64()
            .unwrap_or(f64::NAN)
    }

    /// Divide both fields by their greatest common divisor.
    ///
    /// Intermediate results of arithmetic are passed in directly.
    pub(crate) fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        // Non-negative, and at least one because the denominator is nonzero.
        let divisor = numerator.gcd(&denominator);

        Self {
            numerator: numerator / &divisor,
            denominator: denominator / divisor,
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: String| RationalError::Parse { text: text.to_string(), reason };

        let (numerator, denominator) = text.split_once('/')
            .ok_or_else(|| parse_error("no '/' separating numerator and denominator".to_string()))?;

        let numerator = numerator.parse::<BigInt>()
            .map_err(|error| parse_error(format!("numerator \"{}\": {}", numerator, error)))?;
        let denominator = denominator.parse::<BigInt>()
            .map_err(|error| parse_error(format!("denominator \"{}\": {}", denominator, error)))?;

        Self::new(numerator, denominator)
    }
}

impl From<i64> for Rational {
    fn from(integer: i64) -> Self {
        Self::from_integer(integer)
    }
}

impl From<BigInt> for Rational {
    fn from(integer: BigInt) -> Self {
        Self::from_integer(integer)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
