//! boothgrid - club-fair floor-plan parser
//!
//! Parses a booth-layout spreadsheet (fetched as CSV) into floor-grouped
//! booth records:
//! - Unicode cleanup of cell text (BOM, zero-width chars, exotic spaces)
//! - Two-rows-per-floor pairing of positions and club names
//! - Floor ordering by embedded level number (5층 down to 1층)
//! - Optional per-club detail sheet keyed by canonical club name
//!
//! # Usage
//!
//! ```
//! # fn main() -> boothgrid::Result<()> {
//! let csv = "3층,A반,B반\n,동아리X,동아리Y";
//! let layout = boothgrid::parse_layout_csv(csv)?;
//! assert_eq!(layout.floors, ["3층"]);
//! assert_eq!(layout.booth_count(), 2);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod parser;
pub mod source;
pub mod types;

pub use error::{BoothGridError, Result};
pub use types::*;

use grid::Delimiter;

/// Parse layout-sheet CSV text straight into a [`Layout`].
///
/// # Errors
/// Returns an error when the CSV text itself is malformed; a grid that
/// parses but contains no recognizable floor rows yields an empty layout.
pub fn parse_layout_csv(csv_text: &str) -> Result<Layout> {
    Ok(parser::parse_layout(&grid::parse_delimited(
        csv_text,
        Delimiter::Comma,
    )?))
}

/// Parse detail-sheet CSV text straight into [`Details`].
///
/// # Errors
/// Returns an error only for malformed CSV text. A readable sheet without
/// the expected club-name header is *not* an error; it yields an empty
/// mapping plus a warning.
pub fn parse_details_csv(csv_text: &str) -> Result<Details> {
    Ok(parser::build_details(&grid::parse_delimited(
        csv_text,
        Delimiter::Comma,
    )?))
}

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
