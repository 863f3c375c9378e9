//! Word-level scoring.
//!
//! A word is looked up by lemma (or listed word form). When several senses
//! match, the first one whose part of speech agrees with the tagger wins;
//! otherwise the first sense in lexicon order is used, which approximates the
//! most frequent reading.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use cefr_lexicon::{Lexicon, map_pos};
use cefr_model::{AnalyzedWord, LexiconEntry, Upos};

use crate::config::ScoringConfig;
use crate::error::{Result, ScoreError};

/// How a word's score was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// A sense with the same part of speech was found.
    PosMatch,
    /// No sense agreed on part of speech; the first sense was used.
    Fallback,
    /// The lemma is not in the lexicon.
    NotFound,
    /// Excluded from sentence scoring by its tag (punctuation, numeral, name).
    Skipped,
}

/// Outcome of scoring one word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub text: String,
    pub lemma: String,
    pub upos: Upos,
    /// Number of lexicon senses that matched the lemma.
    pub candidates: usize,
    /// The sense that supplied the score.
    pub entry: Option<LexiconEntry>,
    pub resolution: Resolution,
    /// Raw lexicon level; never rounded.
    pub score: Option<f64>,
}

impl WordScore {
    fn resolved(
        word: &AnalyzedWord,
        candidates: usize,
        entry: &LexiconEntry,
        resolution: Resolution,
    ) -> Self {
        Self {
            text: word.text.clone(),
            lemma: word.lemma.clone(),
            upos: word.upos,
            candidates,
            entry: Some(entry.clone()),
            resolution,
            score: Some(entry.cefr),
        }
    }

    pub(crate) fn unscored(word: &AnalyzedWord, resolution: Resolution) -> Self {
        Self {
            text: word.text.clone(),
            lemma: word.lemma.clone(),
            upos: word.upos,
            candidates: 0,
            entry: None,
            resolution,
            score: None,
        }
    }
}

/// Scores words against a shared lexicon.
#[derive(Debug, Clone)]
pub struct WordScorer {
    lexicon: Arc<Lexicon>,
    config: ScoringConfig,
}

impl WordScorer {
    pub fn new(lexicon: Arc<Lexicon>, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// CEFR level of a single word, or `None` when the lemma is unknown and
    /// strict lookups are off.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::LemmaNotFound`] when the lemma is unknown and
    ///   `fail_on_missing_lemma` is set.
    /// - [`ScoreError::UnmappedPos`] when a candidate sense carries a label
    ///   with no universal tag mapping.
    pub fn score(&self, word: &AnalyzedWord) -> Result<Option<f64>> {
        Ok(self.explain(word)?.score)
    }

    /// Score a word and record how the score was chosen.
    pub fn explain(&self, word: &AnalyzedWord) -> Result<WordScore> {
        let candidates = self.lexicon.find(&word.lemma);

        let Some(first) = candidates.first() else {
            if self.config.fail_on_missing_lemma {
                return Err(ScoreError::LemmaNotFound {
                    text: word.text.clone(),
                    lemma: word.lemma.clone(),
                });
            }
            if self.config.verbose {
                info!(text = %word.text, lemma = %word.lemma, "lemma not in lexicon");
            } else {
                debug!(text = %word.text, lemma = %word.lemma, "lemma not in lexicon");
            }
            return Ok(WordScore::unscored(word, Resolution::NotFound));
        };

        for entry in &candidates {
            if map_pos(&entry.pos)? == word.upos {
                let scored =
                    WordScore::resolved(word, candidates.len(), entry, Resolution::PosMatch);
                self.log_resolved(&scored);
                return Ok(scored);
            }
        }

        let scored = WordScore::resolved(word, candidates.len(), first, Resolution::Fallback);
        self.log_resolved(&scored);
        Ok(scored)
    }

    fn log_resolved(&self, scored: &WordScore) {
        let pos = scored
            .entry
            .as_ref()
            .map(|e| e.pos.as_str())
            .unwrap_or_default();
        if self.config.verbose {
            info!(
                text = %scored.text,
                lemma = %scored.lemma,
                upos = %scored.upos,
                pos,
                candidates = scored.candidates,
                resolution = ?scored.resolution,
                score = ?scored.score,
                "scored word"
            );
        } else {
            debug!(
                text = %scored.text,
                lemma = %scored.lemma,
                upos = %scored.upos,
                pos,
                candidates = scored.candidates,
                resolution = ?scored.resolution,
                score = ?scored.score,
                "scored word"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(config: ScoringConfig) -> WordScorer {
        let lexicon = Lexicon::from_entries(vec![
            LexiconEntry::from_sense("en..1", "en", "numeral", 2.0),
            LexiconEntry::from_sense("en..2", "en", "det", 1.0),
            LexiconEntry::from_sense("vara..1", "vara", "verb", 1.0),
            LexiconEntry::from_sense("nolla..1", "nolla", "noun-en", 0.0),
            LexiconEntry::from_sense("konstig..1", "konstig", "phrase", 3.0),
        ]);
        WordScorer::new(Arc::new(lexicon), config)
    }

    #[test]
    fn pos_match_beats_lexicon_order() {
        let scored = scorer(ScoringConfig::default())
            .explain(&AnalyzedWord::new("En", "en", Upos::Det))
            .unwrap();
        assert_eq!(scored.score, Some(1.0));
        assert_eq!(scored.resolution, Resolution::PosMatch);
        assert_eq!(scored.candidates, 2);
    }

    #[test]
    fn falls_back_to_first_sense() {
        let scored = scorer(ScoringConfig::default())
            .explain(&AnalyzedWord::new("är", "vara", Upos::Aux))
            .unwrap();
        assert_eq!(scored.score, Some(1.0));
        assert_eq!(scored.resolution, Resolution::Fallback);

        let scored = scorer(ScoringConfig::default())
            .explain(&AnalyzedWord::new("en", "en", Upos::Pron))
            .unwrap();
        assert_eq!(scored.score, Some(2.0));
        assert_eq!(scored.entry.map(|e| e.pos), Some("numeral".to_string()));
    }

    #[test]
    fn unknown_lemma_is_absent_by_default() {
        let word = AnalyzedWord::new("bil", "boooooooooo", Upos::Noun);
        let scored = scorer(ScoringConfig::default()).explain(&word).unwrap();
        assert_eq!(scored.score, None);
        assert_eq!(scored.resolution, Resolution::NotFound);
    }

    #[test]
    fn unknown_lemma_fails_in_strict_mode() {
        let word = AnalyzedWord::new("bil", "boooooooooo", Upos::Noun);
        let err = scorer(ScoringConfig::strict()).score(&word).unwrap_err();
        match err {
            ScoreError::LemmaNotFound { text, lemma } => {
                assert_eq!(text, "bil");
                assert_eq!(lemma, "boooooooooo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_level_is_a_score() {
        let word = AnalyzedWord::new("nolla", "nolla", Upos::Noun);
        assert_eq!(scorer(ScoringConfig::strict()).score(&word).unwrap(), Some(0.0));
    }

    #[test]
    fn unmapped_label_fails_loudly() {
        let word = AnalyzedWord::new("konstig", "konstig", Upos::Adj);
        let err = scorer(ScoringConfig::default()).score(&word).unwrap_err();
        assert!(matches!(err, ScoreError::UnmappedPos(ref e) if e.label == "phrase"));
    }
}
