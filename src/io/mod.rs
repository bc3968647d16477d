//! # Reading and writing of value files
//!
//! This module provides reading of values from text files into a `RationalSequence` and writing of
//! sequences as reports.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::data::sequence::RationalSequence;
use crate::io::error::ImportError;
use crate::io::tokens::read_tokens;

pub mod error;
pub mod export;
pub mod tokens;

pub use export::{export_report, export_traversal};

/// Import the values of several files into a single sequence.
///
/// Files are read one after the other, in the order given, and their values appended in the order
/// in which they appear. Tokens that can't be read as a value are skipped.
///
/// # Errors
///
/// When a file can't be found or read. Nothing is returned for the files that were read before.
pub fn import<P: AsRef<Path>>(
    file_paths: impl IntoIterator<Item = P>,
) -> Result<RationalSequence, ImportError> {
    let mut sequence = RationalSequence::new();
    for file_path in file_paths {
        import_into(file_path.as_ref(), &mut sequence)?;
    }

    Ok(sequence)
}

/// Append the values of a single file to a sequence.
///
/// # Return value
///
/// The number of tokens that were skipped.
///
/// # Errors
///
/// When the file can't be found or read. The sequence is not modified in that case.
pub fn import_into(file_path: &Path, sequence: &mut RationalSequence) -> Result<usize, ImportError> {
    let wrap = |source| ImportError::Io { path: file_path.to_path_buf(), source };

    // Open and read the file
    let mut text = String::new();
    File::open(file_path)
        .map_err(wrap)?
        .read_to_string(&mut text)
        .map_err(wrap)?;

    let before = sequence.len();
    let skipped = read_tokens(&text, sequence);
    info!(path = %file_path.display(), values = sequence.len() - before, skipped, "input file read");

    Ok(skipped)
}
