use std::fmt;

use models::WordId;
use thiserror::Error;
use tracing::error;

/// The store operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    List,
    Update,
    Delete,
    DeleteAll,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add_word",
            Operation::List => "get_words",
            Operation::Update => "update_word",
            Operation::Delete => "delete_word",
            Operation::DeleteAll => "delete_all_words",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Fieldless discriminant of [`WordError`], for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Persistence,
}

/// Errors surfaced by every word store, whatever the substrate.
#[derive(Debug, Clone, Error)]
pub enum WordError {
    #[error("{op}: word {id} not found")]
    NotFound { op: Operation, id: WordId },
    #[error("{op}: persistence failure: {detail}")]
    Persistence { op: Operation, id: Option<WordId>, detail: String },
}

impl WordError {
    pub fn not_found(op: Operation, id: &WordId) -> Self {
        Self::NotFound { op, id: id.clone() }
    }

    /// Wrap a substrate failure, logging it at the conversion point.
    pub fn persistence(op: Operation, id: Option<&WordId>, cause: impl fmt::Display) -> Self {
        let detail = cause.to_string();
        match id {
            Some(id) => error!(operation = %op, word_id = %id, error = %detail, "word_store_failure"),
            None => error!(operation = %op, error = %detail, "word_store_failure"),
        }
        Self::Persistence { op, id: id.cloned(), detail }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WordError::NotFound { .. } => ErrorKind::NotFound,
            WordError::Persistence { .. } => ErrorKind::Persistence,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            WordError::NotFound { op, .. } | WordError::Persistence { op, .. } => *op,
        }
    }

    pub fn word_id(&self) -> Option<&WordId> {
        match self {
            WordError::NotFound { id, .. } => Some(id),
            WordError::Persistence { id, .. } => id.as_ref(),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 1003,
            ErrorKind::Persistence => 1200,
        }
    }
}
