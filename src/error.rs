// src/error.rs
use thiserror::Error;

/// Fatal pipeline failures. Anything recoverable per row (bad shape,
/// unparseable clock) never shows up here; see `progress::Progress`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to retrieve the page: status code {status}")]
    Fetch { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0} not found on the page")]
    StructureNotFound(&'static str),

    #[error("header row not found in the table")]
    HeaderNotFound,

    #[error("column {0:?} missing from the extracted table")]
    SchemaMismatch(String),
}

impl PipelineError {
    /// HTTP status for fetch failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
