use serde::{Deserialize, Serialize};

/// One sense of a word in the CEFR lexicon.
///
/// Several entries may share a lemma: homographs and polysemous words are
/// listed once per part of speech or sense, each with its own level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Base form, derived from the sense identifier.
    pub lemma: String,
    /// Word form as listed in the source data (`gf` column).
    pub surface_form: String,
    /// Part-of-speech label in the lexicon's own vocabulary.
    pub pos: String,
    /// Numeric CEFR level (1 = A1 ... 6 = C2).
    pub cefr: f64,
}

impl LexiconEntry {
    pub fn new(
        lemma: impl Into<String>,
        surface_form: impl Into<String>,
        pos: impl Into<String>,
        cefr: f64,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            surface_form: surface_form.into(),
            pos: pos.into(),
            cefr,
        }
    }

    /// Build an entry from a SALDO sense identifier such as `bil..1`.
    pub fn from_sense(
        sense: &str,
        surface_form: impl Into<String>,
        pos: impl Into<String>,
        cefr: f64,
    ) -> Self {
        Self::new(lemma_from_sense(sense), surface_form, pos, cefr)
    }
}

/// Lemma part of a sense identifier: everything before the first `.`.
pub fn lemma_from_sense(sense: &str) -> &str {
    match sense.split_once('.') {
        Some((lemma, _)) => lemma,
        None => sense,
    }
}
