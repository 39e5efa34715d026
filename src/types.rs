//! Result types produced by the analyzer.

/// The eight security criteria checked by the analyzer.
///
/// `length` through `special` are satisfied-when-true requirements;
/// `common`, `repeats` and `sequential` are weaknesses, true when the
/// problem is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    /// Password is at least 8 characters long.
    pub length: bool,
    /// At least one uppercase letter.
    pub uppercase: bool,
    /// At least one lowercase letter.
    pub lowercase: bool,
    /// At least one digit.
    pub digit: bool,
    /// At least one non-alphanumeric character.
    pub special: bool,
    /// Password appears in the common-password list (case-insensitive).
    pub common: bool,
    /// Password contains a run of 3+ identical consecutive characters.
    pub repeats: bool,
    /// Password contains a 3+ character alphabetic, numeric or
    /// keyboard-row sequence.
    pub sequential: bool,
}

/// Coarse strength bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Score 0-3: highly vulnerable.
    Weak,
    /// Score 4-6: usable but should be improved.
    Moderate,
    /// Score 7-10: meets high security standards.
    Strong,
}

/// Complete analysis of a single password.
///
/// Produced fresh by every [`Analyzer::analyze`](crate::Analyzer::analyze)
/// call; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    /// Composite strength rating in `0..=10`.
    pub score: u8,
    /// Per-criterion breakdown.
    pub criteria: Criteria,
    /// Shannon-style entropy estimate: length times log2 of the pool of
    /// character classes actually used.
    pub entropy_bits: f64,
}

impl AnalysisResult {
    /// Buckets the score into a [`Strength`] band.
    pub fn strength(&self) -> Strength {
        match self.score {
            0..=3 => Strength::Weak,
            4..=6 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }
}
