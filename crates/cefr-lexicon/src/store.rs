//! In-memory lexicon store.
//!
//! The lexicon is loaded once by the host application and then shared
//! read-only (typically behind an `Arc`). Lookups match either the derived
//! lemma or the listed word form and always return entries in load order,
//! which approximates frequency rank in the Kelly list.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cefr_model::LexiconEntry;

use crate::error::LexiconError;
use crate::source::{entries_from_rows, read_rows};

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    by_lemma: HashMap<String, Vec<usize>>,
    by_form: HashMap<String, Vec<usize>>,
    source: Option<PathBuf>,
}

impl Lexicon {
    /// Load a lexicon file (CSV/TSV or Kelly XML, chosen by extension).
    ///
    /// # Errors
    ///
    /// Fails when the file is absent, unreadable, lacks a required column, or
    /// holds a non-numeric CEFR level.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let rows = read_rows(path)?;
        let entries = entries_from_rows(path, rows)?;
        let mut lexicon = Self::from_entries(entries);
        lexicon.source = Some(path.to_path_buf());
        info!(
            path = %path.display(),
            entries = lexicon.len(),
            lemmas = lexicon.by_lemma.len(),
            "loaded CEFR lexicon"
        );
        Ok(lexicon)
    }

    /// Build a lexicon from entries already in memory, keeping their order.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_form: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_lemma.entry(entry.lemma.clone()).or_default().push(idx);
            by_form
                .entry(entry.surface_form.clone())
                .or_default()
                .push(idx);
        }
        Self {
            entries,
            by_lemma,
            by_form,
            source: None,
        }
    }

    /// Every entry whose lemma or word form equals `word`, in load order.
    ///
    /// An entry matching on both counts is returned once. No match yields an
    /// empty vector.
    pub fn find(&self, word: &str) -> Vec<&LexiconEntry> {
        let mut indices: Vec<usize> = self
            .by_lemma
            .get(word)
            .into_iter()
            .chain(self.by_form.get(word))
            .flatten()
            .copied()
            .collect();
        indices.sort_unstable();
        indices.dedup();
        debug!(word, matches = indices.len(), "lexicon lookup");
        indices.into_iter().map(|idx| &self.entries[idx]).collect()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lemma_count(&self) -> usize {
        self.by_lemma.len()
    }

    /// Path the lexicon was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct part-of-speech labels, sorted.
    pub fn pos_labels(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.pos.as_str()).collect()
    }
}
