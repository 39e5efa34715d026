//! Password analysis and generation library
//!
//! Two independent, stateless components: an [`Analyzer`] that scores a
//! password against eight security criteria and estimates its entropy, and
//! a generator that produces cryptographically random passwords with
//! guaranteed character-class coverage.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSGUARD_WORDLIST_PATH`: Custom path to the common-password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use passguard_core::{Analyzer, generate_password};
//! use secrecy::SecretString;
//!
//! // Load the bundled common-password list once at startup
//! let analyzer = Analyzer::with_default_list().expect("Failed to load wordlist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyzer.analyze(&password);
//! println!("Score: {}/10", result.score);
//! println!("Entropy: {:.1} bits", result.entropy_bits);
//! println!("Strength: {:?}", result.strength());
//!
//! let generated = generate_password(16, true).expect("length is valid");
//! println!("Generated: {}", generated);
//! ```

// Internal modules
mod analyzer;
mod charset;
mod checks;
mod generator;
mod types;
mod wordlist;

// Public API
pub use analyzer::Analyzer;
pub use generator::{GenerateError, generate_password, generate_password_with};
pub use types::{AnalysisResult, Criteria, Strength};
pub use wordlist::{CommonList, WordlistError, default_wordlist_path};
