//! Error types for catalog ingestion and line generation.
//!
//! Two failure styles coexist in a batch transform:
//!
//! - **Structural** failures (unreadable file, broken CSV, HTTP error) abort the
//!   batch immediately through [`CatalogError`].
//! - **Numeric** failures in individual fields are collected in a
//!   [`ParseReport`] while the rest of the input is still read, then turned into
//!   a single [`CatalogError::MalformedFields`] at the end of the batch so every
//!   bad field is reported at once.
//!
//! Rows with too few fields are neither: they are dropped and only counted.

use sphere_core::SphereError;
use std::fmt;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Core(#[from] SphereError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} malformed field(s) in {source_name}", .errors.len())]
    MalformedFields {
        source_name: String,
        errors: Vec<FieldError>,
    },

    #[error("Column '{column}' not found in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name} ran out of rows: needed {needed}, found {found}")]
    RowsExhausted {
        source_name: String,
        needed: usize,
        found: usize,
    },

    #[error("Fetch failed for {code}: {message}")]
    Fetch { code: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl CatalogError {
    pub fn missing_column(source_name: &str, column: &str) -> Self {
        Self::MissingColumn {
            source_name: source_name.to_string(),
            column: column.to_string(),
        }
    }

    pub fn rows_exhausted(source_name: &str, needed: usize, found: usize) -> Self {
        Self::RowsExhausted {
            source_name: source_name.to_string(),
            needed,
            found,
        }
    }

    pub fn fetch(code: &str, message: impl Into<String>) -> Self {
        Self::Fetch {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Field errors carried by a [`MalformedFields`](Self::MalformedFields) error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::MalformedFields { errors, .. } => errors,
            _ => &[],
        }
    }
}

/// One unparsable field, located by input line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// 1-based line in the input.
    pub line: u64,
    pub field: &'static str,
    pub error: SphereError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, field '{}': {}", self.line, self.field, self.error)
    }
}

/// Records read from one input, with the fields that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport<T> {
    pub records: Vec<T>,
    pub errors: Vec<FieldError>,
    /// Rows dropped for having too few fields.
    pub skipped: usize,
}

impl<T> Default for ParseReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            errors: Vec::new(),
            skipped: 0,
        }
    }
}

impl<T> ParseReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwraps a field result, recording the error against `line`.
    pub fn check<V>(
        &mut self,
        line: u64,
        field: &'static str,
        result: Result<V, SphereError>,
    ) -> Option<V> {
        match result {
            Ok(v) => Some(v),
            Err(error) => {
                self.errors.push(FieldError { line, field, error });
                None
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records if every field parsed, otherwise all field errors at once.
    pub fn into_result(self, source_name: &str) -> CatalogResult<Vec<T>> {
        if self.skipped > 0 {
            tracing::debug!(
                source = source_name,
                skipped = self.skipped,
                "dropped rows with too few fields"
            );
        }
        if self.errors.is_empty() {
            Ok(self.records)
        } else {
            Err(CatalogError::MalformedFields {
                source_name: source_name.to_string(),
                errors: self.errors,
            })
        }
    }
}
