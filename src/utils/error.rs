//! Error and warning types for extraction.
//!
//! Malformed *input text* never raises: every bad-candidate condition
//! degrades to "this candidate produces no match" and, at most, a warning
//! in the extraction report. `ExtractError` exists for the boundaries that
//! can genuinely fail (file IO in the CLI).

use std::fmt;

/// Extraction error type
#[derive(Debug, Clone)]
pub enum ExtractError {
    /// Invalid input
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ExtractError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ExtractError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ExtractError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ExtractError::InternalError {
            message: message.into(),
        }
    }
}

/// Kind of warning generated while processing candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The abbreviation text yielded no comparable units
    MalformedAbbreviation,
    /// No tokens were found ahead of the parenthesis
    NoWordsAhead,
    /// A dynamically built pattern was rejected by the regex engine
    RegexError,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MalformedAbbreviation => write!(f, "malformed abbreviation"),
            WarningKind::NoWordsAhead => write!(f, "no words ahead"),
            WarningKind::RegexError => write!(f, "regex error"),
        }
    }
}

/// A non-fatal condition hit while processing one candidate
#[derive(Debug, Clone)]
pub struct ExtractWarning {
    /// The kind of warning
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
    /// The candidate abbreviation this warning concerns
    pub abbreviation: Option<String>,
}

impl ExtractWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        ExtractWarning {
            kind,
            message: message.into(),
            abbreviation: None,
        }
    }

    /// Attach the candidate abbreviation
    pub fn with_abbreviation(mut self, abbr: impl Into<String>) -> Self {
        self.abbreviation = Some(abbr.into());
        self
    }

    /// Candidate abbreviation yielded no comparable units
    pub fn malformed_abbreviation(abbr: &str) -> Self {
        ExtractWarning::new(
            WarningKind::MalformedAbbreviation,
            format!("abbreviation '{}' yielded no comparable units", abbr),
        )
        .with_abbreviation(abbr)
    }

    /// Candidate had no tokens ahead of the parenthesis
    pub fn no_words_ahead(abbr: &str) -> Self {
        ExtractWarning::new(
            WarningKind::NoWordsAhead,
            format!("no words found ahead of '{}'", abbr),
        )
        .with_abbreviation(abbr)
    }

    /// Dynamically built usage pattern was rejected; count degraded to 0
    pub fn regex_error(abbr: &str, detail: impl fmt::Display) -> Self {
        ExtractWarning::new(
            WarningKind::RegexError,
            format!("usage pattern for '{}' rejected: {}", abbr, detail),
        )
        .with_abbreviation(abbr)
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref abbr) = self.abbreviation {
            write!(f, "[{}] {}: {}", self.kind, abbr, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}
