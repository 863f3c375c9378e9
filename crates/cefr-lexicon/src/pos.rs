//! Lexicon part-of-speech labels mapped to universal tags.
//!
//! The Kelly list uses its own label set (`noun-en`, `aux verb`, `prep`, ...).
//! The table below is fixed; a label missing from it is reported as an error
//! instead of being coerced to some nearby tag.

use cefr_model::Upos;

use crate::error::UnmappedPosError;

/// Lexicon label to universal tag.
pub const KELLY_POS_MAP: &[(&str, Upos)] = &[
    ("adjective", Upos::Adj),
    ("adverb", Upos::Adv),
    ("aux verb", Upos::Aux),
    ("conj", Upos::Cconj),
    ("det", Upos::Det),
    ("interj", Upos::Intj),
    ("noun", Upos::Noun),
    ("noun-en", Upos::Noun),
    ("noun-en-ett", Upos::Noun),
    ("noun-en/-ett", Upos::Noun),
    ("noun-ett", Upos::Noun),
    ("numeral", Upos::Num),
    // The list has a single participle ("stängd"), tagged as a verb form.
    ("particip", Upos::Verb),
    ("particle", Upos::Part),
    // ADP covers prepositions and postpositions.
    ("prep", Upos::Adp),
    ("pronoun", Upos::Pron),
    ("proper name", Upos::Propn),
    ("subj", Upos::Sconj),
    ("verb", Upos::Verb),
];

/// Map a lexicon label to its universal tag.
///
/// # Errors
///
/// Returns [`UnmappedPosError`] when the label is not in [`KELLY_POS_MAP`].
pub fn map_pos(label: &str) -> Result<Upos, UnmappedPosError> {
    KELLY_POS_MAP
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, upos)| *upos)
        .ok_or_else(|| UnmappedPosError {
            label: label.to_string(),
        })
}

pub fn is_mapped(label: &str) -> bool {
    map_pos(label).is_ok()
}
