use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a chain node before it reaches its wait policy.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Usage: {program} <sleep_duration> [additional_args...]")]
    Usage { program: String },

    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error("Could not locate own executable: {0}")]
    SelfExe(#[source] std::io::Error),

    #[error("Could not spawn {exe:?}: {source}")]
    Spawn {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChainError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChainError::Parse(err) => err.exit_code(),
            ChainError::Usage { .. } | ChainError::SelfExe(_) | ChainError::Spawn { .. } => 1,
        }
    }
}
