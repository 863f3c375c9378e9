//! Lexicon path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the lexicon file.
pub const LEXICON_ENV_VAR: &str = "CEFR_LEXICON";

/// File name used when nothing else is configured.
pub const DEFAULT_LEXICON_FILE: &str = "kelly.csv";

/// Get the lexicon path.
///
/// Resolution order:
/// 1. `CEFR_LEXICON` environment variable
/// 2. `kelly.csv` in the working directory
pub fn default_lexicon_path() -> PathBuf {
    lexicon_path_from_env(std::env::var(LEXICON_ENV_VAR).ok())
}

fn lexicon_path_from_env(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_LEXICON_FILE),
    }
}
