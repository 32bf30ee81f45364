//! Error types for the catalog library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalog source.
///
/// Every variant is fatal: a catalog that fails to load is never partially
/// served.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The catalog file could not be opened or read
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The catalog source is not valid JSON or has the wrong top-level shape
    #[error("Catalog parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    /// One of the required top-level sections is absent
    #[error("Catalog is missing the '{section}' section")]
    MissingSection { section: &'static str },
    /// A record is present but cannot be interpreted
    #[error("Malformed catalog: {reason}")]
    Malformed { reason: String },
    /// Two exercises share an ID and duplicates are rejected
    #[error("Duplicate exercise ID '{id}'")]
    DuplicateExerciseId { id: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl LoadError {
    /// Creates a malformed-record error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundKind {
    /// The exercise named by the request does not exist in the catalog
    OriginalExercise,
    /// The exercise exists but does not declare the requested substitution
    Substitution,
}

impl NotFoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotFoundKind::OriginalExercise => "original exercise",
            NotFoundKind::Substitution => "substitution",
        }
    }
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A per-request lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{id}' not found")]
pub struct NotFoundError {
    pub kind: NotFoundKind,
    pub id: String,
}

impl NotFoundError {
    pub fn original_exercise(id: impl Into<String>) -> Self {
        Self {
            kind: NotFoundKind::OriginalExercise,
            id: id.into(),
        }
    }

    pub fn substitution(id: impl Into<String>) -> Self {
        Self {
            kind: NotFoundKind::Substitution,
            id: id.into(),
        }
    }
}

/// Umbrella error type for library operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog load failures (startup or reload)
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Lookup failures
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Runtime configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CatalogError {
    /// Returns the lookup kind when this is a not-found error.
    pub fn not_found_kind(&self) -> Option<NotFoundKind> {
        match self {
            CatalogError::NotFound(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, CatalogError>;
