//! CLI argument definitions for `cefr`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cefr_cli::config::{Overrides, split_command};

#[derive(Parser)]
#[command(
    name = "cefr",
    version,
    about = "Estimate the CEFR level of Swedish words, sentences and texts",
    long_about = "Estimate the CEFR level of Swedish words, sentences and texts.\n\n\
                  Words are looked up in the Kelly list by lemma; sentence and text\n\
                  scores are averages. Lemmas and part-of-speech tags come from an\n\
                  external tagger or from pre-tagged CoNLL-U input."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoringArgs {
    /// Lexicon file (CSV, TSV or Kelly XML).
    #[arg(long = "lexicon", value_name = "PATH", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Config file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Tagger command that reads text on stdin and writes CoNLL-U.
    #[arg(
        long = "pipeline-cmd",
        value_name = "CMD",
        global = true,
        conflicts_with = "pretagged"
    )]
    pub pipeline_cmd: Option<String>,

    /// Treat input as CoNLL-U that is already tagged.
    #[arg(long = "pretagged", global = true)]
    pub pretagged: bool,

    /// Decimal digits kept in sentence and text scores.
    #[arg(long = "round-digits", value_name = "N", global = true)]
    pub round_digits: Option<u32>,

    /// Fail when a lemma is missing from the lexicon.
    #[arg(
        long = "fail-on-missing-lemma",
        global = true,
        overrides_with = "no_fail_on_missing_lemma"
    )]
    pub fail_on_missing_lemma: bool,

    /// Score missing lemmas as absent, even if the config file says otherwise.
    #[arg(
        long = "no-fail-on-missing-lemma",
        global = true,
        overrides_with = "fail_on_missing_lemma"
    )]
    pub no_fail_on_missing_lemma: bool,

    /// Log every lexicon lookup at info level.
    #[arg(long = "log-lookups", global = true, overrides_with = "no_log_lookups")]
    pub log_lookups: bool,

    /// Keep lexicon lookups at debug level, even if the config file says otherwise.
    #[arg(long = "no-log-lookups", global = true, overrides_with = "log_lookups")]
    pub no_log_lookups: bool,
}

impl ScoringArgs {
    /// Flags that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            lexicon: self.lexicon.clone(),
            pipeline: self.pipeline_cmd.as_deref().map(split_command),
            pretagged: self.pretagged,
            round_digits: self.round_digits,
            fail_on_missing_lemma: switch(self.fail_on_missing_lemma, self.no_fail_on_missing_lemma),
            log_lookups: switch(self.log_lookups, self.no_log_lookups),
        }
    }
}

/// Collapse an `--x` / `--no-x` pair; `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Score the first word of the input.
    Word(InputArgs),

    /// Score the first sentence of the input.
    Sentence(InputArgs),

    /// Score a whole text.
    Text(TextArgs),

    /// List lexicon entries for a lemma or word form.
    Lookup {
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Check the lexicon for unmapped part-of-speech labels.
    Doctor {
        /// Print the report as JSON.
        #[arg(long = "json")]
        json: bool,
    },
}

#[derive(Args)]
pub struct InputArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct TextArgs {
    /// Text to score; read from --file or stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Clone, Copy)]
pub struct OutputArgs {
    /// Print a JSON object instead of plain text.
    #[arg(long = "json")]
    pub json: bool,

    /// Show how each word was scored.
    #[arg(long = "details")]
    pub details: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring(args: &[&str]) -> Overrides {
        let mut argv = vec!["cefr"];
        argv.extend_from_slice(args);
        argv.extend(["word", "bil"]);
        Cli::try_parse_from(argv).unwrap().scoring.overrides()
    }

    #[test]
    fn boolean_flags_are_unset_by_default() {
        let overrides = scoring(&[]);
        assert_eq!(overrides.fail_on_missing_lemma, None);
        assert_eq!(overrides.log_lookups, None);
    }

    #[test]
    fn negated_flags_switch_off() {
        let overrides = scoring(&["--no-fail-on-missing-lemma", "--no-log-lookups"]);
        assert_eq!(overrides.fail_on_missing_lemma, Some(false));
        assert_eq!(overrides.log_lookups, Some(false));
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let overrides = scoring(&["--fail-on-missing-lemma", "--no-fail-on-missing-lemma"]);
        assert_eq!(overrides.fail_on_missing_lemma, Some(false));
        let overrides = scoring(&["--no-log-lookups", "--log-lookups"]);
        assert_eq!(overrides.log_lookups, Some(true));
    }

    #[test]
    fn pipeline_cmd_is_split() {
        let overrides = scoring(&["--pipeline-cmd", "python -m tagger"]);
        assert_eq!(
            overrides.pipeline,
            Some(vec!["python".to_string(), "-m".to_string(), "tagger".to_string()])
        );
    }
}
