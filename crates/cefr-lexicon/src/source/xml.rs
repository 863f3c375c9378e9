#![deny(unsafe_code)]

//! Kelly XML reader.
//!
//! The list is a flat document: a root element whose children are rows. A row
//! carries its fields either as child elements or as attributes:
//!
//! ```text
//! <kelly>
//!   <row><id>1</id><saldo>bil..1</saldo><gf>bil</gf><pos>noun-en</pos><cefr>1</cefr></row>
//!   <row id="2" saldo="köra..1" gf="köra" pos="verb" cefr="1"/>
//! </kelly>
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::LexiconError;
use crate::source::RawRow;

const ROW_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

pub fn read_lexicon_xml(path: &Path) -> Result<Vec<RawRow>, LexiconError> {
    let content = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
    parse_lexicon_xml(path, &content)
}

pub(crate) fn parse_lexicon_xml(path: &Path, content: &str) -> Result<Vec<RawRow>, LexiconError> {
    let mut reader = Reader::from_str(content);
    let mut rows = Vec::new();
    let mut depth = 0usize;
    let mut row: Option<RawRow> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            LexiconError::xml(
                path,
                format!("{e} (at byte {})", reader.error_position()),
            )
        })?;
        match event {
            Event::Start(start) => {
                depth += 1;
                if depth == ROW_DEPTH {
                    row = Some(attributes(path, &start)?);
                } else if depth == FIELD_DEPTH {
                    field = Some(element_name(&start));
                    text.clear();
                }
            }
            Event::Empty(start) => {
                if depth + 1 == ROW_DEPTH {
                    rows.push(attributes(path, &start)?);
                } else if depth + 1 == FIELD_DEPTH
                    && let Some(row) = row.as_mut()
                {
                    row.insert(element_name(&start), String::new());
                }
            }
            Event::Text(chunk) if field.is_some() => {
                let decoded = chunk.decode().map_err(|e| LexiconError::xml(path, e))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(reference) if field.is_some() => {
                if let Some(ch) = reference
                    .resolve_char_ref()
                    .map_err(|e| LexiconError::xml(path, e))?
                {
                    text.push(ch);
                } else {
                    let name = reference.decode().map_err(|e| LexiconError::xml(path, e))?;
                    let value = resolve_predefined_entity(&name).ok_or_else(|| {
                        LexiconError::xml(path, format!("unknown entity &{name};"))
                    })?;
                    text.push_str(value);
                }
            }
            Event::End(_) => {
                if depth == FIELD_DEPTH {
                    if let (Some(name), Some(row)) = (field.take(), row.as_mut()) {
                        row.insert(name, text.trim().to_string());
                    }
                } else if depth == ROW_DEPTH
                    && let Some(done) = row.take()
                {
                    rows.push(done);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rows)
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn attributes(path: &Path, start: &BytesStart<'_>) -> Result<RawRow, LexiconError> {
    let mut row = BTreeMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| LexiconError::xml(path, e))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| LexiconError::xml(path, e))?;
        row.insert(key, value.trim().to_string());
    }
    Ok(row)
}
