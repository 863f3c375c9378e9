use std::path::PathBuf;
use std::sync::Arc;

use cefr_cli::render::{
    ScoreKind, ScoreOutput, doctor_table, document_summary, entries_table, score_line,
    sentence_summary, words_table,
};
use cefr_core::{ScoringConfig, WordScorer, report_document};
use cefr_lexicon::{Lexicon, LexiconReport};
use cefr_model::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord, LexiconEntry, Upos};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

fn small_lexicon() -> Lexicon {
    Lexicon::from_entries(vec![
        LexiconEntry::from_sense("många..1", "många", "pronoun", 2.0),
        LexiconEntry::from_sense("många..2", "många", "adjective", 1.0),
        LexiconEntry::from_sense("tjoho..1", "tjoho", "exclamation", 3.0),
    ])
}

#[test]
fn score_lines() {
    insta::assert_snapshot!(score_line(Some(1.9)), @"1.9 (A2)");
    insta::assert_snapshot!(score_line(Some(1.0)), @"1 (A1)");
    insta::assert_snapshot!(score_line(Some(1.8888888888888888)), @"1.8888888888888888 (A2)");
    insta::assert_snapshot!(score_line(None), @"-");
}

#[test]
fn score_json_without_details() {
    let out: ScoreOutput<'_, ()> =
        ScoreOutput::new(ScoreKind::Sentence, "Kvinna kör bil.", Some(1.0));
    insta::assert_json_snapshot!(serde_json::to_value(out).unwrap(), @r#"
    {
      "input": "Kvinna kör bil.",
      "kind": "sentence",
      "level": "A1",
      "score": 1.0
    }
    "#);
}

#[test]
fn absent_score_json_has_nulls() {
    let out: ScoreOutput<'_, ()> = ScoreOutput::new(ScoreKind::Word, "Sverige", None);
    insta::assert_json_snapshot!(serde_json::to_value(out).unwrap(), @r#"
    {
      "input": "Sverige",
      "kind": "word",
      "level": null,
      "score": null
    }
    "#);
}

#[test]
fn word_details_json() {
    let scorer = WordScorer::new(Arc::new(small_lexicon()), ScoringConfig::default());
    let scored = scorer
        .explain(&AnalyzedWord::new("Många", "många", Upos::Adj))
        .unwrap();
    let out = ScoreOutput::new(ScoreKind::Word, "Många", scored.score).with_details(&scored);
    insta::assert_json_snapshot!(serde_json::to_value(out).unwrap(), @r#"
    {
      "details": {
        "candidates": 2,
        "entry": {
          "cefr": 1.0,
          "lemma": "många",
          "pos": "adjective",
          "surface_form": "många"
        },
        "lemma": "många",
        "resolution": "pos_match",
        "score": 1.0,
        "text": "Många",
        "upos": "ADJ"
      },
      "input": "Många",
      "kind": "word",
      "level": "A1",
      "score": 1.0
    }
    "#);
}

#[test]
fn summaries_count_scored_and_missing_words() {
    let scorer = WordScorer::new(Arc::new(small_lexicon()), ScoringConfig::default());
    let document = AnalyzedDocument::new(vec![
        AnalyzedSentence::new(vec![
            AnalyzedWord::new("Många", "många", Upos::Adj),
            AnalyzedWord::new("okänd", "okänd", Upos::Noun),
            AnalyzedWord::new(".", ".", Upos::Punct),
        ]),
        AnalyzedSentence::new(vec![AnalyzedWord::new("många", "många", Upos::Pron)]),
    ]);
    let report = report_document(&scorer, &document).unwrap();
    insta::assert_snapshot!(
        sentence_summary(&report.sentences[0]),
        @"1 of 3 words scored, 1 not in lexicon"
    );
    insta::assert_snapshot!(document_summary(&report), @"2 sentences, 4 words, 1 not in lexicon");
}

#[test]
fn words_table_lists_each_word() {
    let scorer = WordScorer::new(Arc::new(small_lexicon()), ScoringConfig::default());
    let words = [
        scorer
            .explain(&AnalyzedWord::new("många", "många", Upos::Adj))
            .unwrap(),
        scorer
            .explain(&AnalyzedWord::new("okänd", "okänd", Upos::Noun))
            .unwrap(),
    ];
    let rendered = words_table(&words).to_string();
    assert!(rendered.contains("Lexicon PoS"));
    assert!(rendered.contains("adjective"));
    assert!(rendered.contains("not found"));
}

#[test]
fn entries_table_flags_unmapped_labels() {
    let lexicon = small_lexicon();
    let rendered = entries_table(&lexicon.find("tjoho")).to_string();
    assert!(rendered.contains("exclamation"));
    assert!(rendered.contains("unmapped"));

    let rendered = entries_table(&lexicon.find("många")).to_string();
    assert!(rendered.contains("PRON"));
    assert!(rendered.contains("ADJ"));
}

#[test]
fn doctor_table_for_fixture_lexicon() {
    let lexicon = Lexicon::load(&fixture("kelly.csv")).expect("load lexicon");
    let report = LexiconReport::from_lexicon(&lexicon);
    let rendered = doctor_table(&report).to_string();
    assert!(rendered.contains("Ambiguous lemmas"));
    assert!(rendered.contains("27"));
    assert!(rendered.contains("none"));
}
