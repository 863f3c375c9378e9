//! CoNLL-U reader.
//!
//! Only the columns the scorer needs are read: FORM (2), LEMMA (3) and UPOS
//! (4). Sentences are separated by blank lines; `# text = ...` comments are
//! kept as the sentence text. Multi-word token ranges (`1-2`) and empty nodes
//! (`1.1`) are skipped so that only syntactic words reach the scorer.

use cefr_model::{AnalyzedDocument, AnalyzedSentence, AnalyzedWord, Upos};

use crate::error::{PipelineError, Result};

const MIN_COLUMNS: usize = 4;

/// Parse a CoNLL-U document.
///
/// # Errors
///
/// Fails on a token line with fewer than four columns or an unknown UPOS tag.
pub fn parse_document(input: &str) -> Result<AnalyzedDocument> {
    let mut sentences = Vec::new();
    let mut current = AnalyzedSentence::default();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() {
            flush(&mut current, &mut sentences);
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(value) = comment
                .trim_start()
                .strip_prefix("text")
                .and_then(|rest| rest.trim_start().strip_prefix('='))
            {
                current.text = Some(value.trim().to_string());
            }
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < MIN_COLUMNS {
            return Err(PipelineError::Conllu {
                line: line_no,
                message: format!(
                    "expected at least {MIN_COLUMNS} tab-separated columns, found {}",
                    columns.len()
                ),
            });
        }
        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }

        let upos = columns[3]
            .parse::<Upos>()
            .map_err(|message| PipelineError::Conllu {
                line: line_no,
                message,
            })?;
        let form = columns[1];
        // An underscore lemma means the tagger left it blank.
        let lemma = match columns[2] {
            "_" if form != "_" => form,
            lemma => lemma,
        };
        current.words.push(AnalyzedWord::new(form, lemma, upos));
    }
    flush(&mut current, &mut sentences);

    Ok(AnalyzedDocument::new(sentences))
}

fn flush(current: &mut AnalyzedSentence, sentences: &mut Vec<AnalyzedSentence>) {
    let sentence = std::mem::take(current);
    if !sentence.words.is_empty() {
        sentences.push(sentence);
    }
}
