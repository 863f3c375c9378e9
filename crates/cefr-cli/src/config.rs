//! Configuration file and settings resolution.
//!
//! Precedence, highest first: command-line flags, the config file, the
//! `CEFR_LEXICON` environment variable, built-in defaults.
//!
//! Boolean scoring options can be switched either way on the command line
//! (`--fail-on-missing-lemma` / `--no-fail-on-missing-lemma`), so a flag can
//! also turn off what the config file turned on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use cefr_core::ScoringConfig;
use cefr_lexicon::default_lexicon_path;
use cefr_model::AnalyzedDocument;
use cefr_pipeline::{CommandPipeline, Pipeline, PretaggedPipeline};

/// Contents of a `cefr.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Lexicon file, relative to the config file's directory.
    pub lexicon: Option<PathBuf>,
    /// Tagger command line: program followed by its arguments.
    pub pipeline: Option<Vec<String>>,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        if let Some(lexicon) = &config.lexicon
            && lexicon.is_relative()
            && let Some(dir) = path.parent()
        {
            config.lexicon = Some(dir.join(lexicon));
        }
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given on the command line; `None`/`false` means not given.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub lexicon: Option<PathBuf>,
    pub pipeline: Option<Vec<String>>,
    pub pretagged: bool,
    pub round_digits: Option<u32>,
    pub fail_on_missing_lemma: Option<bool>,
    pub log_lookups: Option<bool>,
}

/// How input text is turned into analyzed words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineSpec {
    /// Input is already CoNLL-U.
    Pretagged,
    /// Program and arguments of an external tagger.
    Command(Vec<String>),
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub lexicon: PathBuf,
    pub pipeline: Option<PipelineSpec>,
    pub scoring: ScoringConfig,
}

impl Settings {
    /// Merge the sources in precedence order.
    pub fn resolve(file: AppConfig, overrides: Overrides) -> Self {
        let lexicon = overrides
            .lexicon
            .or(file.lexicon)
            .unwrap_or_else(default_lexicon_path);

        let pipeline = if overrides.pretagged {
            Some(PipelineSpec::Pretagged)
        } else {
            overrides
                .pipeline
                .or(file.pipeline)
                .filter(|argv| !argv.is_empty())
                .map(PipelineSpec::Command)
        };

        let mut scoring = file.scoring;
        if let Some(digits) = overrides.round_digits {
            scoring.round_digits = digits;
        }
        if let Some(strict) = overrides.fail_on_missing_lemma {
            scoring.fail_on_missing_lemma = strict;
        }
        if let Some(verbose) = overrides.log_lookups {
            scoring.verbose = verbose;
        }

        Self {
            lexicon,
            pipeline,
            scoring,
        }
    }

    /// Build the configured pipeline.
    pub fn build_pipeline(&self) -> Result<AnyPipeline> {
        match &self.pipeline {
            Some(PipelineSpec::Pretagged) => Ok(AnyPipeline::Pretagged(PretaggedPipeline)),
            Some(PipelineSpec::Command(argv)) => match CommandPipeline::from_argv(argv) {
                Some(pipeline) => Ok(AnyPipeline::Command(pipeline)),
                None => bail!("pipeline command is empty"),
            },
            None => bail!(
                "no analysis pipeline configured; pass --pipeline-cmd, --pretagged, \
                 or set `pipeline` in the config file"
            ),
        }
    }
}

/// Split a `--pipeline-cmd` value into program and arguments.
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

/// The pipelines the CLI can drive.
#[derive(Debug, Clone)]
pub enum AnyPipeline {
    Pretagged(PretaggedPipeline),
    Command(CommandPipeline),
}

impl Pipeline for AnyPipeline {
    fn analyze(&self, text: &str) -> cefr_pipeline::Result<AnalyzedDocument> {
        match self {
            AnyPipeline::Pretagged(pipeline) => pipeline.analyze(text),
            AnyPipeline::Command(pipeline) => pipeline.analyze(text),
        }
    }
}
