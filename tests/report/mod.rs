//! # Reports of small value files
//!
//! The input files are stored next to this module, outputs are written to the temporary directory.
use std::path::{Path, PathBuf};

/// # Reading, summing and writing
mod test;

/// Relative path of the folder where the input files are stored.
///
/// The path is relative to the project root folder.
fn input_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of an input file, based on its name.
///
/// # Arguments
///
/// * `name`: File name without extension.
fn get_input_file_path(name: &str) -> PathBuf {
    input_file_directory().join(name).with_extension("txt")
}

/// A path in the temporary directory, unique for this test process.
fn get_output_file_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("ratlist-{}-{}", name, std::process::id()))
        .with_extension("txt")
}
