//! Error types for benchgraph.

use std::{fmt, num::ParseIntError, path::PathBuf};
use thiserror::Error;

/// The wrapper for the error kind, with an optional hint.
#[derive(Debug)]
pub struct GraphError {
    kind: GraphErrorKind,
    hint: Option<String>,
}

/// All errors that end a benchgraph run.
#[derive(Error, Debug)]
pub enum GraphErrorKind {
    #[error("Invalid function signature pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No data to show: no benchmark line matched the function signature pattern")]
    EmptyResultSet,

    #[error("Uploading data failed: {reason}")]
    UploadFailed { reason: String },

    #[error("Config file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart generation error: {0}")]
    Chart(#[from] charming::EchartsError),
}

impl From<figment::Error> for GraphErrorKind {
    fn from(error: figment::Error) -> Self {
        GraphErrorKind::Config(Box::new(error))
    }
}

impl GraphError {
    /// Attaches a hint to the error
    pub fn with_hint(mut self, hint: Option<impl Into<String>>) -> Self {
        if let Some(hint) = hint {
            self.hint = Some(hint.into());
        }
        self
    }

    pub fn kind(&self) -> &GraphErrorKind {
        &self.kind
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hint_text) = &self.hint {
            write!(f, " ({hint_text})")?;
        }

        Ok(())
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Convert anything a kind can be built from into a GraphError
impl<E> From<E> for GraphError
where
    GraphErrorKind: From<E>,
{
    fn from(error: E) -> Self {
        GraphError {
            kind: GraphErrorKind::from(error),
            hint: None,
        }
    }
}

/// A convenient result type for benchgraph
pub type Result<T> = std::result::Result<T, GraphError>;

/// Why a benchmark name was turned down by the function signature pattern.
///
/// These never end a run: the offending line is echoed with a failure
/// marker and processing moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Can't parse benchmark result")]
    MalformedSignature,

    #[error("No `{group}` capture group in provided expression")]
    MissingCaptureGroup { group: &'static str },

    #[error("Can't parse `numberOfThreads` value '{value}' as integer: {source}")]
    InvalidThreadCount {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
