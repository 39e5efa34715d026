//! Password analyzer - criteria breakdown, entropy estimate and score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{ClassPresence, has_repeated_run, has_sequential_run, meets_minimum_length};
use crate::types::{AnalysisResult, Criteria};
use crate::wordlist::{CommonList, WordlistError};

/// Stateless password analyzer.
///
/// Holds the common-password list as read-only data; every
/// [`analyze`](Analyzer::analyze) call is independent and may run
/// concurrently from any number of callers.
#[derive(Debug, Clone)]
pub struct Analyzer {
    common: CommonList,
}

impl Analyzer {
    /// Creates an analyzer backed by the given common-password list.
    pub fn new(common: CommonList) -> Self {
        Self { common }
    }

    /// Creates an analyzer backed by the bundled wordlist
    /// (see [`CommonList::load_default`]).
    pub fn with_default_list() -> Result<Self, WordlistError> {
        Ok(Self::new(CommonList::load_default()?))
    }

    /// Analyzes a password and returns its criteria breakdown, entropy
    /// estimate and composite score.
    ///
    /// Total over all inputs, including the empty string; never fails and
    /// never logs or stores the password.
    pub fn analyze(&self, password: &SecretString) -> AnalysisResult {
        let presence = ClassPresence::classify(password);
        let criteria = Criteria {
            length: meets_minimum_length(password),
            uppercase: presence.uppercase,
            lowercase: presence.lowercase,
            digit: presence.digit,
            special: presence.special,
            common: self.common.contains(password.expose_secret()),
            repeats: has_repeated_run(password),
            sequential: has_sequential_run(password),
        };

        let length = password.expose_secret().chars().count();

        AnalysisResult {
            score: score(&criteria, length),
            criteria,
            entropy_bits: entropy_bits(length, presence.pool_size()),
        }
    }

    /// Async version that sends the analysis result via channel.
    ///
    /// Checks the token before computing; a cancelled call sends nothing.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<AnalysisResult>,
    ) {
        use std::time::Duration;

        #[cfg(feature = "tracing")]
        tracing::info!("analysis is about to start...");

        tokio::time::sleep(Duration::from_millis(300)).await;

        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("analysis cancelled before it started");
            return;
        }

        let result = self.analyze(password);

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send analysis result: {}", _e);
        }
    }
}

/// Entropy estimate in bits: length times log2 of the combined pool of
/// the character classes present. Zero for an empty password.
fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if length == 0 || pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Composite score in `0..=10`.
///
/// Weights: +2 for length >= 8, +1 per character class present,
/// +2 for length >= 12, +2 for length >= 16; penalties -3 for a
/// common password, -1 for repeated runs, -1 for sequential runs.
/// Non-decreasing in length, strictly lower for common passwords.
fn score(criteria: &Criteria, length: usize) -> u8 {
    let mut score: i64 = 0;

    if criteria.length {
        score += 2;
    }

    let variety = [
        criteria.uppercase,
        criteria.lowercase,
        criteria.digit,
        criteria.special,
    ]
    .iter()
    .filter(|&&b| b)
    .count();
    score += variety as i64;

    // Extra length bonus for passwords well beyond the minimum
    if length >= 12 {
        score += 2;
    }
    if length >= 16 {
        score += 2;
    }

    if criteria.common {
        score -= 3;
    }
    if criteria.repeats {
        score -= 1;
    }
    if criteria.sequential {
        score -= 1;
    }

    score.clamp(0, 10) as u8
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(CommonList::from_lines([
            "password", "123456", "qwerty", "admin",
        ]))
    }

    #[tokio::test]
    async fn test_analyze_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyzer().analyze_tx(&secret("TestPass123!"), token, tx).await;

        let result = rx.recv().await.expect("Should receive analysis result");
        assert!(result.criteria.length);
        assert!(result.criteria.special);
    }

    #[tokio::test]
    async fn test_analyze_tx_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyzer().analyze_tx(&secret("TestPass123!"), token, tx).await;

        // channel closed without a result
        assert!(rx.recv().await.is_none());
    }
}
