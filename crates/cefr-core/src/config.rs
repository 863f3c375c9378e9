//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Decimal digits kept in sentence and text scores unless configured.
pub const DEFAULT_ROUND_DIGITS: u32 = 1;

/// Options controlling scoring behavior.
///
/// The value is fixed when a scorer is built; scoring never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Log per-word lookups at info level instead of debug.
    pub verbose: bool,

    /// Fail with `LemmaNotFound` when a lemma has no lexicon entry.
    ///
    /// When false, such words are left out of the average.
    pub fail_on_missing_lemma: bool,

    /// Decimal digits kept in sentence and text scores.
    pub round_digits: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            fail_on_missing_lemma: false,
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict lookups: unknown lemmas are errors.
    pub fn strict() -> Self {
        Self {
            fail_on_missing_lemma: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    #[must_use]
    pub fn with_fail_on_missing_lemma(mut self, enable: bool) -> Self {
        self.fail_on_missing_lemma = enable;
        self
    }

    #[must_use]
    pub fn with_round_digits(mut self, digits: u32) -> Self {
        self.round_digits = digits;
        self
    }
}
