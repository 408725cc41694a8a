//! Structured error types for boothgrid.
//!
//! Fatal conditions (unusable grid, bad source URL) are errors; recoverable
//! conditions like a missing detail-sheet header are reported as warnings on
//! the result instead, so a broken detail sheet never blocks the layout.

/// All errors that can occur while building a booth layout.
#[derive(Debug, thiserror::Error)]
pub enum BoothGridError {
    /// Malformed delimited input.
    #[error("CSV parsing: {0}")]
    Csv(String),

    /// Unusable spreadsheet source URL.
    #[error("Invalid spreadsheet source: {0}")]
    Source(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoothGridError>;

impl From<String> for BoothGridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for BoothGridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
