#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::LexiconError;
use crate::source::{REQUIRED_COLUMNS, RawRow};

/// Read a delimited lexicon export into row maps.
///
/// Header names are trimmed and stripped of a UTF-8 BOM; values are trimmed.
/// Files ending in `.tsv` are read as tab-separated.
pub fn read_lexicon_csv(path: &Path) -> Result<Vec<RawRow>, LexiconError> {
    let bytes = std::fs::read(path).map_err(|e| LexiconError::io(path, e))?;
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LexiconError::csv(path, e))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LexiconError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LexiconError::csv(path, e))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(key) = headers.get(idx) {
                row.insert(key.clone(), value.trim().to_string());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
