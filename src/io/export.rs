//! # Writing values to text
//!
//! A report consists of the sum of a sequence, approximated as a floating point number, followed
//! by the values of the sequence in traversal order. Further sequences can be appended to an
//! existing report, without a sum.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::data::sequence::RationalSequence;
use crate::io::error::ExportError;

/// Render a float such that it always reads as a float, e.g. `4.0` rather than `4`.
pub fn format_float(value: f64) -> String {
    // The debug representation is the shortest one that reads back to the same value, and always
    // has a decimal point or an exponent.
    format!("{:?}", value)
}

/// Write the sum of a sequence, followed by its values in traversal order.
///
/// # Errors
///
/// If writing fails.
pub fn write_report<W: Write>(out: &mut W, sequence: &RationalSequence) -> std::io::Result<()> {
    writeln!(out, "{}", format_float(sequence.sum().to_f64()))?;
    write_traversal(out, sequence)
}

/// Write the values of a sequence in traversal order, one per line.
///
/// # Errors
///
/// If writing fails.
pub fn write_traversal<W: Write>(out: &mut W, sequence: &RationalSequence) -> std::io::Result<()> {
    for value in sequence {
        writeln!(out, "{}", value)?;
    }

    Ok(())
}

/// Create or overwrite a file with a report of a sequence.
///
/// See `write_report` for the contents.
///
/// # Errors
///
/// When the file can't be created or written.
pub fn export_report(file_path: &Path, sequence: &RationalSequence) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Io { path: file_path.to_path_buf(), source };

    let mut out = BufWriter::new(File::create(file_path).map_err(wrap)?);
    write_report(&mut out, sequence).map_err(wrap)?;
    out.flush().map_err(wrap)?;

    info!(path = %file_path.display(), values = sequence.len(), "report written");
    Ok(())
}

/// Append the values of a sequence in traversal order to a file, creating it if needed.
///
/// # Errors
///
/// When the file can't be opened or written.
pub fn export_traversal(file_path: &Path, sequence: &RationalSequence) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Io { path: file_path.to_path_buf(), source };

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)
        .map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write_traversal(&mut out, sequence).map_err(wrap)?;
    out.flush().map_err(wrap)?;

    info!(path = %file_path.display(), values = sequence.len(), "values appended");
    Ok(())
}
