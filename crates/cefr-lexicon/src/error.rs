#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to parse XML {path}: {message}")]
    Xml { path: PathBuf, message: String },

    #[error("lexicon {path} is missing required column: {column}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid CEFR level in {path} at row {row}: {value:?}")]
    InvalidLevel {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn xml(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Xml {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// A lexicon part-of-speech label with no universal tag counterpart.
///
/// This is a configuration defect: the label set of the lexicon and the
/// mapping table have drifted apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lexicon part-of-speech label has no universal tag mapping: {label:?}")]
pub struct UnmappedPosError {
    pub label: String,
}
