//! Minimal CSV/TSV parser that produces a [`Grid`] of text cells.
//!
//! The layout parser works on raw cell text, so no type detection happens
//! here: every field stays a string, empty fields included. Blank lines are
//! kept as empty rows — row indices must match the sheet for the layout
//! parser's position/club pairing to line up. Quoted fields may span lines.

use serde::{Deserialize, Serialize};

use crate::error::{BoothGridError, Result};

/// Delimiter for parsing.
#[derive(Clone, Copy)]
pub enum Delimiter {
    Comma,
    Tab,
}

/// A 2-D grid of raw text cells. Rows may be ragged; out-of-range reads
/// return `None` so short rows behave like rows padded with empty cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid directly from rows of cells. Used by tests and by
    /// callers that already hold tabular data.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the grid.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell text at (row, col); `None` when either index is out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Parse CSV/TSV text into a [`Grid`].
///
/// Fields may be quoted; `""` inside a quoted field is an escaped quote and
/// quoted fields may contain the delimiter and newlines. `\r` before a
/// newline is dropped outside quotes.
///
/// # Errors
/// Returns [`BoothGridError::Csv`] when the text ends inside an unclosed
/// quoted field — the grid would be misaligned, which the caller must treat
/// as fatal.
pub fn parse_delimited(text: &str, delim: Delimiter) -> Result<Grid> {
    let sep = match delim {
        Delimiter::Comma => ',',
        Delimiter::Tab => '\t',
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                c if c == sep => row.push(std::mem::take(&mut field)),
                c => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(BoothGridError::Csv(
            "unterminated quoted field at end of input".to_string(),
        ));
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(Grid { rows })
}
