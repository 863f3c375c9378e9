//! Output of the external analysis pipeline.
//!
//! Words, sentences and documents are produced by a tokenizer/lemmatizer/tagger
//! that lives outside this workspace. They are consumed read-only.

use serde::{Deserialize, Serialize};

use crate::upos::Upos;

/// A single analyzed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedWord {
    /// Surface text as it appeared in the input.
    pub text: String,
    /// Dictionary base form.
    pub lemma: String,
    /// Universal part-of-speech tag.
    pub upos: Upos,
}

impl AnalyzedWord {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, upos: Upos) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            upos,
        }
    }
}

/// An ordered sequence of analyzed words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedSentence {
    /// Raw sentence text, when the pipeline reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub words: Vec<AnalyzedWord>,
}

impl AnalyzedSentence {
    pub fn new(words: Vec<AnalyzedWord>) -> Self {
        Self { text: None, words }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sentence text, falling back to the space-joined word forms.
    pub fn display_text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self
                .words
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// An ordered sequence of analyzed sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    pub sentences: Vec<AnalyzedSentence>,
}

impl AnalyzedDocument {
    pub fn new(sentences: Vec<AnalyzedSentence>) -> Self {
        Self { sentences }
    }

    /// First sentence, if the pipeline produced any.
    pub fn first_sentence(&self) -> Option<&AnalyzedSentence> {
        self.sentences.first()
    }

    /// First word of the first sentence.
    pub fn first_word(&self) -> Option<&AnalyzedWord> {
        self.first_sentence().and_then(|s| s.words.first())
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }
}
