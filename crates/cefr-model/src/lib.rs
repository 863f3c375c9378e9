//! Shared types for CEFR complexity scoring.

pub mod analysis;
pub mod entry;
pub mod level;
pub mod upos;

pub use analysis::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord};
pub use entry::{LexiconEntry, lemma_from_sense};
pub use level::CefrLevel;
pub use upos::Upos;
