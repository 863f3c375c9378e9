use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid CoNLL-U at line {line}: {message}")]
    Conllu { line: usize, message: String },
    #[error("pipeline command `{program}` failed: {message}")]
    Command { program: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
