//! Booth layout parser.
//!
//! Orchestrates the two parsing passes: the main layout sheet (paired
//! position/club rows grouped by floor) and the optional detail sheet
//! (header row plus one record per club).

mod details;
mod layout;

use serde::Serialize;

pub use details::build_details;
pub use layout::{excluded_by_default, floor_number, parse_layout, parse_layout_with};

/// Summary counters for one layout parse, logged at debug level.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParseStats {
    pub rows_scanned: usize,
    pub pairs_processed: usize,
    pub blank_floor_rows: usize,
    pub cells_skipped_blank: usize,
    pub cells_excluded: usize,
    pub booths: usize,
    pub floors: usize,
}

/// Options for [`parse_layout_with`].
pub struct ParseOptions {
    /// Venue-specific exclusion rule: `(floor_label, position)` pairs for
    /// which it returns true never become booths. Swappable per deployment;
    /// the default is [`excluded_by_default`].
    pub exclusion: fn(&str, &str) -> bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            exclusion: excluded_by_default,
        }
    }
}
