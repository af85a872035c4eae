//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A malformed quiz catalog. Fatal at load time.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no quizzes")]
    Empty,
    #[error("quiz ids must be positive")]
    ZeroId,
    #[error("quiz id {0} is used more than once")]
    DuplicateId(u32),
    #[error("quiz {quiz_id} has no questions")]
    NoQuestions { quiz_id: u32 },
    #[error("quiz {quiz_id}, question {question}: needs at least 2 options, found {found}")]
    TooFewOptions {
        quiz_id: u32,
        question: usize,
        found: usize,
    },
    #[error("quiz {quiz_id}, question {question}: correct index {index} is out of bounds")]
    CorrectIndexOutOfBounds {
        quiz_id: u32,
        question: usize,
        index: usize,
    },
}

/// Errors loading a catalog file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Failures of the key-value store backing the attempt history.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to remove key {key}: {source}")]
    Remove {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors from quiz engine transitions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },
    #[error("option {selected} does not exist (question has {options} options)")]
    InvalidAnswer { selected: usize, options: usize },
    #[error("failed to save attempt: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Top-level application error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
