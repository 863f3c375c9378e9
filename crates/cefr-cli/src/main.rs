//! `cefr`: CEFR level estimates for Swedish text.

use clap::{ColorChoice, Parser};
use cefr_cli::config::Settings;
use cefr_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    load_settings, log_settings, run_doctor, run_lookup, run_sentence, run_text, run_word,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let settings = match load_settings(&cli.scoring) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let log_config = log_config_from_cli(&cli, &settings);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    log_settings(&settings);
    let result = match &cli.command {
        Command::Word(args) => run_word(&settings, args).map(|()| 0),
        Command::Sentence(args) => run_sentence(&settings, args).map(|()| 0),
        Command::Text(args) => run_text(&settings, args).map(|()| 0),
        Command::Lookup { word } => run_lookup(&settings, word).map(|()| 0),
        Command::Doctor { json } => {
            run_doctor(&settings, *json).map(|healthy| if healthy { 0 } else { 1 })
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// Lookup logging from the resolved settings only applies when no explicit
/// level was requested.
fn log_config_from_cli(cli: &Cli, settings: &Settings) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.log_lookups = settings.scoring.verbose && config.use_env_filter;
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
