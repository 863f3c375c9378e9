//! CEFR complexity scoring for Swedish words, sentences and texts.
//!
//! Word levels come from the lexicon. A sentence scores the mean of its
//! scorable words and a text scores the mean of its sentences, both rounded
//! to [`ScoringConfig::round_digits`].

pub mod aggregate;
pub mod config;
pub mod error;
pub mod facade;
pub mod report;
pub mod rounding;
pub mod scorer;

pub use aggregate::{scorable_words, score_document, score_sentence};
pub use config::{DEFAULT_ROUND_DIGITS, ScoringConfig};
pub use error::{Result, ScoreError};
pub use facade::Complexity;
pub use report::{DocumentReport, SentenceReport, report_document, report_sentence};
pub use rounding::{MAX_ROUND_DIGITS, Mean, round_to};
pub use scorer::{Resolution, WordScore, WordScorer};
