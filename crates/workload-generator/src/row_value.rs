//! Random row values for the `value` column.

use rand::Rng;

/// Shortest generated row value.
pub const MIN_VALUE_LEN: usize = 5;

/// Longest generated row value. Matches the `VARCHAR(20)` declaration.
pub const MAX_VALUE_LEN: usize = 20;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a row value: 5 to 20 distinct ASCII letters and digits.
///
/// The characters are a random sample of the alphabet, so no character
/// repeats within one value.
pub fn generate_row_value<R: Rng>(rng: &mut R) -> String {
    let length = rng.random_range(MIN_VALUE_LEN..=MAX_VALUE_LEN);
    rand::seq::index::sample(rng, ALPHABET.len(), length)
        .into_iter()
        .map(|i| ALPHABET[i] as char)
        .collect()
}

/// Whether `value` has the length and character set of a generated row value.
pub fn is_valid_row_value(value: &str) -> bool {
    (MIN_VALUE_LEN..=MAX_VALUE_LEN).contains(&value.len())
        && value.chars().all(|c| c.is_ascii_alphanumeric())
}
