//! Terminal and JSON rendering of scores, lookups and lexicon reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use cefr_core::{DocumentReport, Resolution, SentenceReport, WordScore};
use cefr_lexicon::{LexiconReport, map_pos};
use cefr_model::{CefrLevel, LexiconEntry};

/// What was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Word,
    Sentence,
    Text,
}

/// JSON shape of a single score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutput<'a, D: Serialize> {
    pub kind: ScoreKind,
    pub input: &'a str,
    pub score: Option<f64>,
    pub level: Option<CefrLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<D>,
}

impl<'a, D: Serialize> ScoreOutput<'a, D> {
    pub fn new(kind: ScoreKind, input: &'a str, score: Option<f64>) -> Self {
        Self {
            kind,
            input,
            score,
            level: score.and_then(CefrLevel::from_score),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: D) -> Self {
        self.details = Some(details);
        self
    }
}

/// `1.9 (A2)`, or `-` when there is no score.
pub fn score_line(score: Option<f64>) -> String {
    match score {
        Some(value) => match CefrLevel::from_score(value) {
            Some(level) => format!("{value} ({level})"),
            None => value.to_string(),
        },
        None => "-".to_string(),
    }
}

/// `3 of 4 words scored, 1 not in lexicon`.
pub fn sentence_summary(report: &SentenceReport) -> String {
    format!(
        "{} of {} words scored, {} not in lexicon",
        report.scored_words(),
        report.words.len(),
        report.missing_words().count()
    )
}

/// `2 sentences, 9 words, 1 not in lexicon`.
pub fn document_summary(report: &DocumentReport) -> String {
    format!(
        "{} sentences, {} words, {} not in lexicon",
        report.sentences.len(),
        report.word_count(),
        report.missing_count()
    )
}

pub fn words_table<'a>(words: impl IntoIterator<Item = &'a WordScore>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Word"),
        header_cell("Lemma"),
        header_cell("UPOS"),
        header_cell("Lexicon PoS"),
        header_cell("Senses"),
        header_cell("Match"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for word in words {
        let pos = word.entry.as_ref().map(|e| e.pos.as_str());
        table.add_row(vec![
            Cell::new(&word.text),
            Cell::new(&word.lemma),
            Cell::new(word.upos),
            pos.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(word.candidates),
            resolution_cell(word.resolution),
            level_cell(word.score),
        ]);
    }
    table
}

pub fn entries_table(entries: &[&LexiconEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lemma"),
        header_cell("Word form"),
        header_cell("Lexicon PoS"),
        header_cell("UPOS"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in entries {
        let upos = match map_pos(&entry.pos) {
            Ok(upos) => Cell::new(upos),
            Err(_) => Cell::new("unmapped").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&entry.lemma),
            Cell::new(&entry.surface_form),
            Cell::new(&entry.pos),
            upos,
            level_cell(Some(entry.cefr)),
        ]);
    }
    table
}

pub fn doctor_table(report: &LexiconReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let source = report
        .source
        .as_ref()
        .map_or_else(|| "-".to_string(), |path| path.display().to_string());
    table.add_row(vec![Cell::new("Source"), Cell::new(source)]);
    table.add_row(vec![Cell::new("Entries"), Cell::new(report.counts.entries)]);
    table.add_row(vec![Cell::new("Lemmas"), Cell::new(report.counts.lemmas)]);
    table.add_row(vec![
        Cell::new("Ambiguous lemmas"),
        Cell::new(report.counts.ambiguous_lemmas),
    ]);
    for (level, count) in &report.levels {
        table.add_row(vec![Cell::new(format!("Level {level}")), Cell::new(count)]);
    }
    let unmapped = if report.unmapped_pos.is_empty() {
        Cell::new("none").fg(Color::Green)
    } else {
        Cell::new(report.unmapped_pos.join(", "))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    };
    table.add_row(vec![Cell::new("Unmapped PoS labels"), unmapped]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count)
    }
}

fn level_cell(score: Option<f64>) -> Cell {
    match score {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn resolution_cell(resolution: Resolution) -> Cell {
    match resolution {
        Resolution::PosMatch => Cell::new("pos").fg(Color::Green),
        Resolution::Fallback => Cell::new("first sense").fg(Color::Yellow),
        Resolution::NotFound => Cell::new("not found").fg(Color::Red),
        Resolution::Skipped => dim_cell("skipped"),
    }
}
