use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use cefr_cli::config::{AnyPipeline, AppConfig, Settings};
use cefr_cli::render::{
    ScoreKind, ScoreOutput, doctor_table, document_summary, entries_table, score_line,
    sentence_summary, words_table,
};
use cefr_core::Complexity;
use cefr_lexicon::{Lexicon, LexiconReport};

use crate::cli::{InputArgs, OutputArgs, ScoringArgs, TextArgs};

pub fn load_settings(args: &ScoringArgs) -> Result<Settings> {
    let file = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    Ok(Settings::resolve(file, args.overrides()))
}

pub fn log_settings(settings: &Settings) {
    debug!(
        lexicon = %settings.lexicon.display(),
        pipeline = ?settings.pipeline,
        round_digits = settings.scoring.round_digits,
        strict = settings.scoring.fail_on_missing_lemma,
        log_lookups = settings.scoring.verbose,
        "resolved settings"
    );
}

fn load_lexicon(settings: &Settings) -> Result<Arc<Lexicon>> {
    let lexicon = Lexicon::load(&settings.lexicon)
        .with_context(|| format!("load lexicon {}", settings.lexicon.display()))?;
    Ok(Arc::new(lexicon))
}

fn complexity(settings: &Settings) -> Result<Complexity<AnyPipeline>> {
    let pipeline = settings.build_pipeline()?;
    let lexicon = load_lexicon(settings)?;
    Ok(Complexity::new(lexicon, pipeline, settings.scoring.clone()))
}

pub fn run_word(settings: &Settings, args: &InputArgs) -> Result<()> {
    let _span = info_span!("word").entered();
    let complexity = complexity(settings)?;
    if args.output.details {
        let scored = complexity.explain_word(&args.text).context("score word")?;
        let score = scored.as_ref().and_then(|w| w.score);
        print_score(
            ScoreKind::Word,
            &args.text,
            score,
            args.output,
            scored.as_ref(),
            |w| println!("{}", words_table([w])),
        )
    } else {
        let score = complexity.word(&args.text).context("score word")?;
        print_score(ScoreKind::Word, &args.text, score, args.output, None::<&()>, |()| {})
    }
}

pub fn run_sentence(settings: &Settings, args: &InputArgs) -> Result<()> {
    let _span = info_span!("sentence").entered();
    let complexity = complexity(settings)?;
    if args.output.details {
        let report = complexity
            .sentence_report(&args.text)
            .context("score sentence")?;
        let score = report.as_ref().and_then(|r| r.score);
        print_score(
            ScoreKind::Sentence,
            &args.text,
            score,
            args.output,
            report.as_ref(),
            |r| {
                println!("{}", sentence_summary(r));
                println!("{}", words_table(&r.words));
            },
        )
    } else {
        let score = complexity.sentence(&args.text).context("score sentence")?;
        print_score(
            ScoreKind::Sentence,
            &args.text,
            score,
            args.output,
            None::<&()>,
            |()| {},
        )
    }
}

pub fn run_text(settings: &Settings, args: &TextArgs) -> Result<()> {
    let _span = info_span!("text").entered();
    let text = read_text(args)?;
    let complexity = complexity(settings)?;
    if args.output.details {
        let report = complexity.report(&text).context("score text")?;
        print_score(
            ScoreKind::Text,
            &text,
            report.score,
            args.output,
            Some(&report),
            |r| {
                println!("{}", document_summary(r));
                for sentence in &r.sentences {
                    println!("{}  {}", score_line(sentence.score), sentence.text);
                    println!("{}", words_table(&sentence.words));
                }
            },
        )
    } else {
        let score = complexity.text(&text).context("score text")?;
        print_score(ScoreKind::Text, &text, score, args.output, None::<&()>, |()| {})
    }
}

pub fn run_lookup(settings: &Settings, word: &str) -> Result<()> {
    let lexicon = load_lexicon(settings)?;
    let entries = lexicon.find(word);
    info!(word, matches = entries.len(), "lexicon lookup");
    if entries.is_empty() {
        println!("No lexicon entries for {word:?}");
    } else {
        println!("{}", entries_table(&entries));
    }
    Ok(())
}

/// Returns whether the lexicon is healthy.
pub fn run_doctor(settings: &Settings, json: bool) -> Result<bool> {
    let lexicon = load_lexicon(settings)?;
    let report = LexiconReport::from_lexicon(&lexicon);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", doctor_table(&report));
    }
    Ok(report.is_healthy())
}

fn read_text(args: &TextArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("read text {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("read text from stdin")?;
    Ok(text)
}

fn print_score<D: Serialize>(
    kind: ScoreKind,
    input: &str,
    score: Option<f64>,
    output: OutputArgs,
    details: Option<&D>,
    print_details: impl FnOnce(&D),
) -> Result<()> {
    if output.json {
        let mut out = ScoreOutput::new(kind, input, score);
        if let Some(details) = details {
            out = out.with_details(details);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("{}", score_line(score));
    if let Some(details) = details {
        print_details(details);
    }
    Ok(())
}
