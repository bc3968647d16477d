//! # Storing of rational values in memory
//!
//! This module provides the number type and the collection that the reading and writing routines
//! in `io` operate on.

pub mod number_types;
pub mod sequence;
