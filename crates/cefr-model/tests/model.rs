//! Tests for cefr-model types.

use cefr_model::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord, CefrLevel, Upos};

fn sentence(words: &[(&str, &str, Upos)]) -> AnalyzedSentence {
    AnalyzedSentence::new(
        words
            .iter()
            .map(|(text, lemma, upos)| AnalyzedWord::new(*text, *lemma, *upos))
            .collect(),
    )
}

#[test]
fn first_word_comes_from_first_sentence() {
    let doc = AnalyzedDocument::new(vec![
        sentence(&[("Bilar", "bil", Upos::Noun), ("kör", "köra", Upos::Verb)]),
        sentence(&[("Barn", "barn", Upos::Noun)]),
    ]);
    let first = doc.first_word().expect("first word");
    assert_eq!(first.text, "Bilar");
    assert_eq!(first.lemma, "bil");
    assert_eq!(doc.word_count(), 3);
}

#[test]
fn empty_document_has_no_first_word() {
    let doc = AnalyzedDocument::default();
    assert!(doc.first_sentence().is_none());
    assert!(doc.first_word().is_none());

    let doc = AnalyzedDocument::new(vec![AnalyzedSentence::default()]);
    assert!(doc.first_sentence().is_some());
    assert!(doc.first_word().is_none());
}

#[test]
fn display_text_prefers_reported_text() {
    let s = sentence(&[("Man", "man", Upos::Pron), ("kör", "köra", Upos::Verb)]);
    assert_eq!(s.display_text(), "Man kör");
    let s = s.with_text("Man kör.");
    assert_eq!(s.display_text(), "Man kör.");
}

#[test]
fn upos_serializes_as_conllu_tag() {
    let word = AnalyzedWord::new("bil", "bil", Upos::Noun);
    let json = serde_json::to_string(&word).expect("serialize word");
    assert_eq!(json, r#"{"text":"bil","lemma":"bil","upos":"NOUN"}"#);
    let back: AnalyzedWord = serde_json::from_str(&json).expect("deserialize word");
    assert_eq!(back, word);
}

#[test]
fn cefr_level_nearest_band() {
    assert_eq!(CefrLevel::from_score(1.0), Some(CefrLevel::A1));
    assert_eq!(CefrLevel::from_score(1.4), Some(CefrLevel::A1));
    assert_eq!(CefrLevel::from_score(1.9), Some(CefrLevel::A2));
    assert_eq!(CefrLevel::from_score(3.5), Some(CefrLevel::B2));
    assert_eq!(CefrLevel::from_score(0.0), Some(CefrLevel::A1));
    assert_eq!(CefrLevel::from_score(9.0), Some(CefrLevel::C2));
    assert_eq!(CefrLevel::from_score(f64::NAN), None);
}

#[test]
fn cefr_level_parses_and_displays() {
    for level in CefrLevel::ALL {
        assert_eq!(level.to_string().parse::<CefrLevel>().unwrap(), level);
        assert_eq!(CefrLevel::from_value(level.value()), Some(level));
    }
    assert!("D1".parse::<CefrLevel>().is_err());
}
