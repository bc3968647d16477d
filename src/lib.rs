//! # Exact sums of rational numbers
//!
//! Fractions and integers are read from text files, collected in a sequence of exact rational
//! values and summed without any loss of precision. Only when the result is reported, the sum is
//! approximated by a floating point number.
#![warn(missing_docs)]

pub mod data;
pub mod io;
