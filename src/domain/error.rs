// Error taxonomy for a single mining run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MineError {
    /// The target identifier cannot be tokenized by the chain grammar.
    #[error("invalid identifier '{0}': expected one or more ASCII letters or digits")]
    InvalidIdentifier(String),

    /// Nothing arrived on the input stream within the wait window.
    #[error("no piped input received within {waited_ms}ms")]
    NoInput { waited_ms: u64 },

    #[error("no matches found for regexp {pattern}")]
    NoMatches { pattern: String },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl MineError {
    /// Usage errors are the caller's fault and get the usage hint printed.
    pub fn is_usage(&self) -> bool {
        matches!(self, MineError::InvalidIdentifier(_) | MineError::NoInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, MineError>;
