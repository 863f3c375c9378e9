use std::sync::Arc;

use cefr_core::{ScoringConfig, WordScorer, report_document};
use cefr_lexicon::Lexicon;
use cefr_model::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord, LexiconEntry, Upos};
use serde_json::{Value, json};

fn scorer() -> WordScorer {
    let lexicon = Lexicon::from_entries(vec![
        LexiconEntry::from_sense("bil..1", "bil", "noun-en", 1.0),
        LexiconEntry::from_sense("köra..1", "köra", "adjective", 3.0),
    ]);
    WordScorer::new(Arc::new(lexicon), ScoringConfig::default())
}

fn document() -> AnalyzedDocument {
    AnalyzedDocument::new(vec![
        AnalyzedSentence::new(vec![
            AnalyzedWord::new("Bilar", "bil", Upos::Noun),
            AnalyzedWord::new("körde", "köra", Upos::Verb),
            AnalyzedWord::new("okänt", "okänd", Upos::Adj),
            AnalyzedWord::new(".", ".", Upos::Punct),
        ])
        .with_text("Bilar körde okänt."),
    ])
}

#[test]
fn word_score_json_shape() {
    let scored = scorer()
        .explain(&AnalyzedWord::new("körde", "köra", Upos::Verb))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&scored).unwrap(),
        json!({
            "text": "körde",
            "lemma": "köra",
            "upos": "VERB",
            "candidates": 1,
            "entry": {
                "lemma": "köra",
                "surface_form": "köra",
                "pos": "adjective",
                "cefr": 3.0
            },
            "resolution": "fallback",
            "score": 3.0
        })
    );
}

#[test]
fn missing_word_serializes_nulls() {
    let scored = scorer()
        .explain(&AnalyzedWord::new("okänt", "okänd", Upos::Adj))
        .unwrap();
    let value = serde_json::to_value(&scored).unwrap();
    assert_eq!(value["resolution"], "not_found");
    assert_eq!(value["score"], Value::Null);
    assert_eq!(value["entry"], Value::Null);
    assert_eq!(value["candidates"], 0);
}

#[test]
fn document_report_json_shape() {
    let report = report_document(&scorer(), &document()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["score"], 2.0);
    assert_eq!(value["level"], "A2");

    let sentence = &value["sentences"][0];
    assert_eq!(sentence["text"], "Bilar körde okänt.");
    assert_eq!(sentence["score"], 2.0);

    let resolutions: Vec<&str> = sentence["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["resolution"].as_str().unwrap())
        .collect();
    assert_eq!(
        resolutions,
        ["pos_match", "fallback", "not_found", "skipped"]
    );
    assert_eq!(sentence["words"][3]["score"], Value::Null);
}
