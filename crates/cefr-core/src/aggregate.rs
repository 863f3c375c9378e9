//! Sentence and text aggregation.
//!
//! Both levels average only the scores that are present and round the mean to
//! `round_digits`. A sentence with no scorable word, or a text with no scorable
//! sentence, has no score at all rather than a score of zero.

use cefr_model::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord};

use crate::error::Result;
use crate::rounding::Mean;
use crate::scorer::WordScorer;

/// Words that take part in sentence scoring.
pub fn scorable_words(sentence: &AnalyzedSentence) -> impl Iterator<Item = &AnalyzedWord> {
    sentence
        .words
        .iter()
        .filter(|word| !word.upos.is_skipped_in_sentence())
}

/// Mean CEFR level of a sentence's scorable words, rounded.
///
/// Punctuation, numerals and proper names are skipped; words whose lemma is
/// unknown are left out (or fail, in strict mode).
pub fn score_sentence(scorer: &WordScorer, sentence: &AnalyzedSentence) -> Result<Option<f64>> {
    let mut mean = Mean::default();
    for word in scorable_words(sentence) {
        mean.push(scorer.score(word)?);
    }
    Ok(mean.rounded(scorer.config().round_digits))
}

/// Mean of the present sentence scores, rounded.
pub fn score_document(scorer: &WordScorer, document: &AnalyzedDocument) -> Result<Option<f64>> {
    let mut mean = Mean::default();
    for sentence in &document.sentences {
        mean.push(score_sentence(scorer, sentence)?);
    }
    Ok(mean.rounded(scorer.config().round_digits))
}
