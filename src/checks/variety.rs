//! Character variety check - which character classes the password uses.

use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use secrecy::{ExposeSecret, SecretString};

/// Which character classes appear in a password.
///
/// Doubles as the entropy pool descriptor: the pool size is the sum of
/// the alphabet sizes of the classes present. Any non-alphanumeric
/// character counts as the symbol class for the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPresence {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl ClassPresence {
    /// Inspects the password for each character class.
    pub fn classify(password: &SecretString) -> Self {
        let pwd = password.expose_secret();
        Self {
            uppercase: pwd.chars().any(|c| c.is_uppercase()),
            lowercase: pwd.chars().any(|c| c.is_lowercase()),
            digit: pwd.chars().any(|c| c.is_ascii_digit()),
            special: pwd.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    /// Size of the combined alphabet of the classes present.
    pub fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE.len();
        }
        if self.uppercase {
            size += UPPERCASE.len();
        }
        if self.digit {
            size += DIGITS.len();
        }
        if self.special {
            size += SYMBOLS.len();
        }
        size
    }
}
