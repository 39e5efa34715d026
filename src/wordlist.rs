//! Common-password list management
//!
//! Handles loading and querying the bundled list of known weak passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PASSGUARD_WORDLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn default_wordlist_path() -> PathBuf {
    std::env::var("PASSGUARD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Read-only set of known weak/breached passwords.
///
/// Loaded once at startup and handed to the [`Analyzer`](crate::Analyzer)
/// as a constructor argument; membership checks are case-insensitive.
#[derive(Debug, Clone)]
pub struct CommonList {
    entries: HashSet<String>,
}

impl CommonList {
    /// Loads the list from a file, one password per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: Empty file {:?}", path);
            return Err(WordlistError::EmptyFile);
        }

        let list = Self::from_lines(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist loaded: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads the list from the path returned by [`default_wordlist_path`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Custom path via environment
    /// unsafe { std::env::set_var("PASSGUARD_WORDLIST_PATH", "/etc/myapp/wordlist.txt"); }
    /// let list = CommonList::load_default()?;
    /// ```
    pub fn load_default() -> Result<Self, WordlistError> {
        Self::load(default_wordlist_path())
    }

    /// Builds a list from in-memory entries, applying the same
    /// trim/lowercase normalization as [`CommonList::load`].
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }

    /// Checks if a password is in the list (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_default_wordlist_path() {
        remove_env("PASSGUARD_WORDLIST_PATH");

        let path = default_wordlist_path();
        assert_eq!(path, PathBuf::from("./assets/common-passwords.txt"));
    }

    #[test]
    #[serial]
    fn test_default_wordlist_path_from_env() {
        let custom_path = "/custom/path/wordlist.txt";
        set_env("PASSGUARD_WORDLIST_PATH", custom_path);

        let path = default_wordlist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PASSGUARD_WORDLIST_PATH");
    }

    #[test]
    fn test_load_file_not_found() {
        let result = CommonList::load("/nonexistent/path/wordlist.txt");
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = CommonList::load(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    fn test_load_success() {
        let temp_file = setup_with_tempfile(&["password123", "qwerty"]);

        let list = CommonList::load(temp_file.path()).expect("load should succeed");
        assert_eq!(list.len(), 2);
        assert!(list.contains("qwerty"));
    }

    #[test]
    #[serial]
    fn test_load_default_from_env() {
        let temp_file = setup_with_tempfile(&["letmein"]);
        set_env("PASSGUARD_WORDLIST_PATH", temp_file.path().to_str().unwrap());

        let list = CommonList::load_default().expect("load should succeed");
        assert!(list.contains("letmein"));

        remove_env("PASSGUARD_WORDLIST_PATH");
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = CommonList::from_lines(["testpassword"]);

        assert!(list.contains("testpassword"));
        assert!(list.contains("TESTPASSWORD"));
        assert!(list.contains("TestPassword"));
    }

    #[test]
    fn test_contains_false_for_unknown() {
        let list = CommonList::from_lines(["common123"]);

        assert!(!list.contains("veryuncommonpassword987"));
    }

    #[test]
    fn test_from_lines_normalizes_entries() {
        let list = CommonList::from_lines(["  Dragon  ", "", "dragon", "sunshine"]);

        // duplicate after normalization collapses, blank line dropped
        assert_eq!(list.len(), 2);
        assert!(list.contains("DRAGON"));
        assert!(list.contains("sunshine"));
    }
}
