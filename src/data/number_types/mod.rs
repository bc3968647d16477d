//! # Number types
//!
//! Values read from files are kept as exact fractions, such that summing them doesn't accumulate
//! rounding errors. Conversion to floating point happens only at the very end.
pub mod rational;
