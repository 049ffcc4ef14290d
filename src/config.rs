// Run configuration, validated before any input is read.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::{MineError, Result};

pub const DEFAULT_OUTPUT: &str = "../logfile.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub identifier: String,
    pub output: PathBuf,
    pub input_timeout: Duration,
}

impl Config {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() || !identifier.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MineError::InvalidIdentifier(identifier));
        }
        Ok(Self {
            identifier,
            output: PathBuf::from(DEFAULT_OUTPUT),
            input_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.input_timeout = timeout;
        self
    }
}
