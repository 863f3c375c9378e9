use std::path::PathBuf;

use cefr_model::Upos;
use cefr_pipeline::{Pipeline, PipelineError, PretaggedPipeline};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("read fixture")
}

#[test]
fn pretagged_pipeline_reads_fixture_document() {
    let doc = PretaggedPipeline
        .analyze(&fixture("two_sentences.conllu"))
        .expect("parse fixture");
    assert_eq!(doc.sentences.len(), 2);
    assert_eq!(
        doc.sentences[1].text.as_deref(),
        Some("Många barn kör bil.")
    );
    assert_eq!(doc.word_count(), 11);
}

#[test]
fn government_sentence_keeps_tags() {
    let doc = PretaggedPipeline
        .analyze(&fixture("government.conllu"))
        .expect("parse fixture");
    let tags: Vec<Upos> = doc.sentences[0].words.iter().map(|w| w.upos).collect();
    assert_eq!(tags.first(), Some(&Upos::Propn));
    assert_eq!(tags.last(), Some(&Upos::Punct));
    assert_eq!(tags.len(), 12);
}

#[test]
fn closures_are_pipelines() {
    let pipeline = |text: &str| -> cefr_pipeline::Result<_> {
        if text.is_empty() {
            return Err(PipelineError::Conllu {
                line: 0,
                message: "empty".to_string(),
            });
        }
        cefr_pipeline::parse_document(&format!("1\t{text}\t{text}\tNOUN\n"))
    };
    let doc = pipeline.analyze("bil").expect("analyze");
    assert_eq!(doc.first_word().map(|w| w.text.as_str()), Some("bil"));
    assert!(pipeline.analyze("").is_err());
}
