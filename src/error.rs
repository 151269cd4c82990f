//! Error types for the AI-mediated turn protocol

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CahError {
    #[error("Completion endpoint unreachable: {0}")]
    EndpointUnreachable(String),

    #[error("No models available on the completion endpoint")]
    NoModelsAvailable,

    #[error("Completion failed: {0}")]
    CompletionFailed(String),

    #[error("No decision in model output: {0}")]
    NoDecision(String),

    #[error("Card \"{0}\" not found in hand")]
    CardNotInHand(String),

    #[error("No cards in hand to play")]
    EmptyHand,

    #[error("Winner \"{0}\" is not one of the submissions")]
    WinnerNotSubmitted(String),

    #[error("No submissions to judge")]
    NoSubmissions,

    #[error("Cannot read prompt template {path}: {source}")]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read word list {path}: {source}")]
    WordListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CahError {
    /// Only a missing model registry ends the process; everything else
    /// aborts a single turn.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CahError::NoModelsAvailable)
    }
}

pub type Result<T> = std::result::Result<T, CahError>;
