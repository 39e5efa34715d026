//! Character class alphabets shared by the analyzer and the generator.
//!
//! The analyzer uses the class sizes for its entropy pool estimate; the
//! generator draws output characters from these alphabets.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_disjoint() {
        let all = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        let unique: std::collections::HashSet<u8> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_symbols_are_non_alphanumeric() {
        assert!(SYMBOLS.iter().all(|b| !(*b as char).is_alphanumeric()));
    }
}
