//! Contract with the external analysis pipeline.
//!
//! Tokenization, lemmatization and part-of-speech tagging happen outside this
//! workspace. A [`Pipeline`] turns raw text into an [`AnalyzedDocument`];
//! the adapters here either read CoNLL-U directly or shell out to a tagger.

pub mod command;
pub mod conllu;
pub mod error;

use cefr_model::AnalyzedDocument;

pub use command::CommandPipeline;
pub use conllu::parse_document;
pub use error::{PipelineError, Result};

/// Raw text in, analyzed document out.
pub trait Pipeline {
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument>;
}

impl<F> Pipeline for F
where
    F: Fn(&str) -> Result<AnalyzedDocument>,
{
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        self(text)
    }
}

/// Treats the input as CoNLL-U that was tagged ahead of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PretaggedPipeline;

impl Pipeline for PretaggedPipeline {
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        parse_document(text)
    }
}
