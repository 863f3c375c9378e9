//! Per-sentence and per-word breakdown of a text score.

use serde::Serialize;

use cefr_model::{AnalyzedDocument, AnalyzedSentence, CefrLevel};

use crate::error::Result;
use crate::rounding::Mean;
use crate::scorer::{Resolution, WordScore, WordScorer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceReport {
    pub text: String,
    /// Rounded sentence score; equal to what `score_sentence` returns.
    pub score: Option<f64>,
    pub words: Vec<WordScore>,
}

impl SentenceReport {
    /// Words that contributed a score.
    pub fn scored_words(&self) -> usize {
        self.words.iter().filter(|w| w.score.is_some()).count()
    }

    pub fn missing_words(&self) -> impl Iterator<Item = &WordScore> {
        self.words
            .iter()
            .filter(|w| w.resolution == Resolution::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub score: Option<f64>,
    /// Nearest CEFR band of `score`.
    pub level: Option<CefrLevel>,
    pub sentences: Vec<SentenceReport>,
}

impl DocumentReport {
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.sentences.iter().map(|s| s.missing_words().count()).sum()
    }
}

pub fn report_sentence(scorer: &WordScorer, sentence: &AnalyzedSentence) -> Result<SentenceReport> {
    let mut words = Vec::with_capacity(sentence.words.len());
    let mut mean = Mean::default();
    for word in &sentence.words {
        if word.upos.is_skipped_in_sentence() {
            words.push(WordScore::unscored(word, Resolution::Skipped));
            continue;
        }
        let scored = scorer.explain(word)?;
        mean.push(scored.score);
        words.push(scored);
    }
    Ok(SentenceReport {
        text: sentence.display_text(),
        score: mean.rounded(scorer.config().round_digits),
        words,
    })
}

pub fn report_document(scorer: &WordScorer, document: &AnalyzedDocument) -> Result<DocumentReport> {
    let sentences = document
        .sentences
        .iter()
        .map(|sentence| report_sentence(scorer, sentence))
        .collect::<Result<Vec<_>>>()?;
    let score = sentences
        .iter()
        .map(|s| s.score)
        .collect::<Mean>()
        .rounded(scorer.config().round_digits);
    Ok(DocumentReport {
        score,
        level: score.and_then(CefrLevel::from_score),
        sentences,
    })
}
