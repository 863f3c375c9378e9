#![deny(unsafe_code)]

//! Lexicon source files.
//!
//! Both readers produce raw rows keyed by column name; [`entries_from_rows`]
//! turns them into [`LexiconEntry`] values, dropping the identifier column and
//! deriving the lemma from the `saldo` sense identifier.

pub mod csv;
pub mod xml;

use std::collections::BTreeMap;
use std::path::Path;

use cefr_model::LexiconEntry;

use crate::error::LexiconError;

pub type RawRow = BTreeMap<String, String>;

pub const ID_COLUMN: &str = "id";
pub const SENSE_COLUMN: &str = "saldo";
pub const FORM_COLUMN: &str = "gf";
pub const POS_COLUMN: &str = "pos";
pub const LEVEL_COLUMN: &str = "cefr";

pub const REQUIRED_COLUMNS: &[&str] = &[SENSE_COLUMN, FORM_COLUMN, POS_COLUMN, LEVEL_COLUMN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    Csv,
    Xml,
}

impl LexiconFormat {
    /// `.xml` files are Kelly XML; anything else is read as delimited text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => LexiconFormat::Xml,
            _ => LexiconFormat::Csv,
        }
    }
}

pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, LexiconError> {
    match LexiconFormat::from_path(path) {
        LexiconFormat::Csv => self::csv::read_lexicon_csv(path),
        LexiconFormat::Xml => self::xml::read_lexicon_xml(path),
    }
}

/// Convert raw rows to entries, preserving row order.
pub fn entries_from_rows(
    path: &Path,
    rows: Vec<RawRow>,
) -> Result<Vec<LexiconEntry>, LexiconError> {
    let mut entries = Vec::with_capacity(rows.len());
    for (idx, mut row) in rows.into_iter().enumerate() {
        row.remove(ID_COLUMN);
        // Header is line 1, so data rows start at 2.
        let line = idx + 2;

        let mut take = |column: &str| -> Result<String, LexiconError> {
            row.remove(column).ok_or_else(|| LexiconError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })
        };
        let sense = take(SENSE_COLUMN)?;
        let surface_form = take(FORM_COLUMN)?;
        let pos = take(POS_COLUMN)?;
        let level = take(LEVEL_COLUMN)?;

        let cefr = parse_level(&level).ok_or_else(|| LexiconError::InvalidLevel {
            path: path.to_path_buf(),
            row: line,
            value: level.clone(),
        })?;
        entries.push(LexiconEntry::from_sense(&sense, surface_form, pos, cefr));
    }
    Ok(entries)
}

fn parse_level(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|level| level.is_finite())
}
