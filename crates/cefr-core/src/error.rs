use thiserror::Error;

use cefr_lexicon::UnmappedPosError;
use cefr_pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Raised only when `fail_on_missing_lemma` is enabled.
    #[error("lemma {lemma:?} of word {text:?} not found in the CEFR lexicon")]
    LemmaNotFound { text: String, lemma: String },
    #[error(transparent)]
    UnmappedPos(#[from] UnmappedPosError),
    #[error("analysis pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
