//! Password generator - random passwords with guaranteed class coverage.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error(
        "length must be at least {minimum} to fit one character from every required class, got {requested}"
    )]
    LengthTooShort { requested: usize, minimum: usize },
}

/// Generates a random password of the requested length.
///
/// The output always contains at least one lowercase letter, one uppercase
/// letter and one digit, plus one symbol when `include_symbols` is set.
/// Randomness comes from the operating system CSPRNG; there is no fallback
/// source.
///
/// # Errors
///
/// Returns [`GenerateError::LengthTooShort`] when `length` is smaller than
/// the number of required classes (4 with symbols, 3 without).
pub fn generate_password(length: usize, include_symbols: bool) -> Result<String, GenerateError> {
    generate_password_with(&mut OsRng, length, include_symbols)
}

/// Like [`generate_password`], but drawing from a caller-supplied RNG.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out at compile
/// time; tests substitute a seeded ChaCha generator.
pub fn generate_password_with<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    include_symbols: bool,
) -> Result<String, GenerateError> {
    let classes: &[&[u8]] = if include_symbols {
        &[LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
    } else {
        &[LOWERCASE, UPPERCASE, DIGITS]
    };

    let minimum = classes.len();
    if length < minimum {
        return Err(GenerateError::LengthTooShort {
            requested: length,
            minimum,
        });
    }

    // One character from each required class, then uniform draws from the
    // combined alphabet for the rest
    let pool: Vec<u8> = classes.concat();
    let mut bytes: Vec<u8> = Vec::with_capacity(length);
    for class in classes {
        bytes.push(class[rng.gen_range(0..class.len())]);
    }
    while bytes.len() < length {
        bytes.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Shuffle so the class-coverage characters are not predictably placed
    bytes.shuffle(rng);

    Ok(bytes.into_iter().map(char::from).collect())
}
