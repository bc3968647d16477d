//! # Reading values from text
//!
//! Text consists of lines of whitespace-separated tokens. A token containing a `/` is read as a
//! fraction, any other token as an integer. Tokens that can't be read are skipped.
use num_bigint::BigInt;
use tracing::debug;

use crate::data::number_types::rational::{Rational, RationalError};
use crate::data::sequence::RationalSequence;

/// Indicates that a token is a fraction rather than an integer.
pub const FRACTION_SEPARATOR: char = '/';

/// Read a single token.
///
/// # Errors
///
/// `RationalError::Parse` when the token isn't an integer or a fraction of two integers,
/// `RationalError::DivisionByZero` for a fraction with a zero denominator.
pub fn parse_token(token: &str) -> Result<Rational, RationalError> {
    if token.contains(FRACTION_SEPARATOR) {
        Rational::parse(token)
    } else {
        token.parse::<BigInt>()
            .map(Rational::from_integer)
            .map_err(|error| RationalError::Parse {
                text: token.to_string(),
                reason: format!("not an integer: {}", error),
            })
    }
}

/// Append all values in a text to a sequence.
///
/// Values are appended in the order in which they appear, line by line and left to right.
///
/// # Arguments
///
/// * `text`: Entire contents of a file.
/// * `sequence`: Values are appended to this sequence.
///
/// # Return value
///
/// The number of tokens that were skipped because they couldn't be read.
pub fn read_tokens(text: &str, sequence: &mut RationalSequence) -> usize {
    let mut skipped = 0;

    for (line_number, line) in into_lines(text) {
        for token in line.split_whitespace() {
            match parse_token(token) {
                Ok(value) => sequence.append(value),
                Err(error) => {
                    debug!(line_number, token, %error, "skipping token");
                    skipped += 1;
                },
            }
        }
    }

    skipped
}

/// Split a text into numbered lines, skipping lines without any tokens.
fn into_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .filter(|(_, line)| !line.trim().is_empty())
}
