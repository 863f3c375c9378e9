//! External-process pipeline.
//!
//! Runs a tagger wrapper (Stanza, UDPipe, ...) that reads raw text on stdin
//! and writes CoNLL-U on stdout. The call blocks until the process exits; no
//! timeout or retry is applied.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use cefr_model::AnalyzedDocument;

use crate::Pipeline;
use crate::conllu::parse_document;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPipeline {
    program: String,
    args: Vec<String>,
}

impl CommandPipeline {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a full argument vector (`[program, args...]`).
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn failure(&self, message: impl Into<String>) -> PipelineError {
        PipelineError::Command {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

impl Pipeline for CommandPipeline {
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        debug!(program = %self.program, bytes = text.len(), "running pipeline command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failure("stdin was not captured"))?;
        let input = text.to_string();
        // Must run alongside wait_with_output, which drains stdout.
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| self.failure("stdin writer panicked"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{}: {}", output.status, stderr.trim())));
        }
        match written {
            // The tagger may exit successfully without reading all of its input.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(program = %self.program, "pipeline command closed stdin early");
            }
            other => other?,
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| self.failure(format!("output is not UTF-8: {e}")))?;
        parse_document(&stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn parses_conllu_from_child_stdout() {
        let pipeline = CommandPipeline::new("cat", Vec::<String>::new());
        let doc = pipeline
            .analyze("1\tbilar\tbil\tNOUN\n2\t.\t.\tPUNCT\n")
            .unwrap();
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].words[0].lemma, "bil");
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let pipeline = CommandPipeline::new("sh", ["-c", "echo broken model >&2; exit 3"]);
        let err = pipeline.analyze("bil").unwrap_err();
        match err {
            PipelineError::Command { program, message } => {
                assert_eq!(program, "sh");
                assert!(message.contains("broken model"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn successful_exit_without_reading_stdin_is_ok() {
        let pipeline = CommandPipeline::new("sh", ["-c", "printf '1\\tbil\\tbil\\tNOUN\\n'"]);
        let input = "bil ".repeat(256 * 1024);
        let doc = pipeline.analyze(&input).unwrap();
        assert_eq!(doc.sentences.len(), 1);
        assert_eq!(doc.sentences[0].words[0].lemma, "bil");
    }

    #[test]
    fn missing_program_is_an_error() {
        let pipeline = CommandPipeline::new("cefr-no-such-tagger", Vec::<String>::new());
        assert!(matches!(
            pipeline.analyze("bil"),
            Err(PipelineError::Command { .. })
        ));
    }

    #[test]
    fn from_argv_splits_program() {
        let argv = vec!["python".to_string(), "-m".to_string(), "tagger".to_string()];
        let pipeline = CommandPipeline::from_argv(&argv).unwrap();
        assert_eq!(pipeline, CommandPipeline::new("python", ["-m", "tagger"]));
        assert!(CommandPipeline::from_argv(&[]).is_none());
    }
}
