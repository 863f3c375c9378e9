#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::pos::is_mapped;
use crate::store::Lexicon;

/// Health summary of a loaded lexicon.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LexiconReport {
    pub schema: String,
    pub schema_version: u32,
    pub source: Option<PathBuf>,
    pub counts: LexiconCounts,
    /// Entries per CEFR level, keyed by the level as written.
    pub levels: BTreeMap<String, usize>,
    /// Entries per lexicon part-of-speech label.
    pub pos_labels: BTreeMap<String, usize>,
    /// Labels with no universal tag mapping.
    pub unmapped_pos: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LexiconCounts {
    pub entries: usize,
    pub lemmas: usize,
    pub ambiguous_lemmas: usize,
}

impl LexiconReport {
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut levels: BTreeMap<String, usize> = BTreeMap::new();
        let mut pos_labels: BTreeMap<String, usize> = BTreeMap::new();
        let mut senses: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in lexicon.entries() {
            *levels.entry(entry.cefr.to_string()).or_default() += 1;
            *pos_labels.entry(entry.pos.clone()).or_default() += 1;
            *senses.entry(entry.lemma.as_str()).or_default() += 1;
        }
        let unmapped_pos = pos_labels
            .keys()
            .filter(|label| !is_mapped(label))
            .cloned()
            .collect();

        Self {
            schema: "cefr.lexicon-doctor".to_string(),
            schema_version: 1,
            source: lexicon.source().map(PathBuf::from),
            counts: LexiconCounts {
                entries: lexicon.len(),
                lemmas: lexicon.lemma_count(),
                ambiguous_lemmas: senses.values().filter(|n| **n > 1).count(),
            },
            levels,
            pos_labels,
            unmapped_pos,
        }
    }

    /// True when every label maps and the lexicon is not empty.
    pub fn is_healthy(&self) -> bool {
        self.counts.entries > 0 && self.unmapped_pos.is_empty()
    }
}
