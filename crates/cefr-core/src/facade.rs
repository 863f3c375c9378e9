//! Entry points that take raw text.
//!
//! Every call runs the pipeline again; nothing is cached between calls.

use std::sync::Arc;

use tracing::{debug, debug_span};

use cefr_lexicon::Lexicon;
use cefr_model::{AnalyzedDocument, AnalyzedSentence};
use cefr_pipeline::Pipeline;

use crate::aggregate::{score_document, score_sentence};
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::report::{DocumentReport, SentenceReport, report_document, report_sentence};
use crate::scorer::{WordScore, WordScorer};

/// Scores Swedish text with a shared lexicon and an analysis pipeline.
#[derive(Debug, Clone)]
pub struct Complexity<P> {
    scorer: WordScorer,
    pipeline: P,
}

impl<P: Pipeline> Complexity<P> {
    pub fn new(lexicon: Arc<Lexicon>, pipeline: P, config: ScoringConfig) -> Self {
        Self {
            scorer: WordScorer::new(lexicon, config),
            pipeline,
        }
    }

    pub fn scorer(&self) -> &WordScorer {
        &self.scorer
    }

    pub fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Score of the first word of the first sentence.
    ///
    /// Any further words or sentences the pipeline returns are ignored. The
    /// word is scored even when its tag would skip it inside a sentence.
    pub fn word(&self, text: &str) -> Result<Option<f64>> {
        Ok(self.explain_word(text)?.and_then(|scored| scored.score))
    }

    /// Like [`Complexity::word`], keeping the lookup details.
    pub fn explain_word(&self, text: &str) -> Result<Option<WordScore>> {
        let _span = debug_span!("word").entered();
        let doc = self.analyze(text)?;
        let Some(word) = doc.first_word() else {
            debug!("pipeline returned no words");
            return Ok(None);
        };
        if doc.word_count() > 1 {
            debug!(
                kept = %word.text,
                dropped = doc.word_count() - 1,
                "scoring only the first word"
            );
        }
        self.scorer.explain(word).map(Some)
    }

    /// Score of the first sentence; later sentences are ignored.
    pub fn sentence(&self, text: &str) -> Result<Option<f64>> {
        let _span = debug_span!("sentence").entered();
        let doc = self.analyze(text)?;
        match first_sentence(&doc) {
            Some(sentence) => score_sentence(&self.scorer, sentence),
            None => Ok(None),
        }
    }

    /// Like [`Complexity::sentence`], with the per-word breakdown.
    pub fn sentence_report(&self, text: &str) -> Result<Option<SentenceReport>> {
        let _span = debug_span!("sentence").entered();
        let doc = self.analyze(text)?;
        first_sentence(&doc)
            .map(|sentence| report_sentence(&self.scorer, sentence))
            .transpose()
    }

    /// Score of the whole text.
    pub fn text(&self, text: &str) -> Result<Option<f64>> {
        let _span = debug_span!("text").entered();
        let doc = self.analyze(text)?;
        score_document(&self.scorer, &doc)
    }

    /// Score of the whole text with the per-word breakdown.
    pub fn report(&self, text: &str) -> Result<DocumentReport> {
        let _span = debug_span!("report").entered();
        let doc = self.analyze(text)?;
        report_document(&self.scorer, &doc)
    }

    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        let doc = self.pipeline.analyze(text)?;
        debug!(
            chars = text.chars().count(),
            sentences = doc.sentences.len(),
            words = doc.word_count(),
            "analyzed text"
        );
        Ok(doc)
    }
}

fn first_sentence(doc: &AnalyzedDocument) -> Option<&AnalyzedSentence> {
    let sentence = doc.first_sentence();
    if sentence.is_none() {
        debug!("pipeline returned no sentences");
    } else if doc.sentences.len() > 1 {
        debug!(
            dropped = doc.sentences.len() - 1,
            "scoring only the first sentence"
        );
    }
    sentence
}
