//! Layout sheet parser.
//!
//! The sheet encodes each floor as two adjacent rows: the first holds
//! position labels (classrooms), the one below holds the club occupying
//! each position. Column 0 of the position row carries the floor label;
//! data starts at column 1.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{ParseOptions, ParseStats};
use crate::grid::Grid;
use crate::normalize::{is_blank, normalize_club_name, normalize_spaces};
use crate::types::{Booth, BoothRow, Layout};

/// Data starts at column B; column A is the floor label.
const DATA_START_COL: usize = 1;

/// Position patterns for the excluded 5F classroom: "1-7", "1 7", "17",
/// with an optional 반/교실 suffix.
#[allow(clippy::unwrap_used)] // fixed pattern, valid by construction
static POS_17_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^1[-\s]?7(?:\s*반|\s*교실)?$").unwrap());

/// First run of ASCII digits embedded in a floor label, e.g. "5층" -> 5.
/// `None` when the label has no digits.
#[must_use]
pub fn floor_number(label: &str) -> Option<i64> {
    let digits = label.chars().skip_while(|c| !c.is_ascii_digit());
    let mut value: i64 = 0;
    let mut saw_digit = false;
    for ch in digits {
        let Some(d) = ch.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(i64::from(d));
        saw_digit = true;
    }
    saw_digit.then_some(value)
}

/// Default venue rule: the 5F classroom 1-7 hosts no booth and must never
/// appear in output. Blank floor or position never excludes.
#[must_use]
pub fn excluded_by_default(floor_label: &str, position: &str) -> bool {
    if is_blank(floor_label) || is_blank(position) {
        return false;
    }
    floor_number(floor_label) == Some(5) && POS_17_RE.is_match(position)
}

/// Parse the layout grid with the default exclusion rule.
#[must_use]
pub fn parse_layout(grid: &Grid) -> Layout {
    parse_layout_with(grid, &ParseOptions::default())
}

/// Parse the layout grid into floor-grouped booth rows.
///
/// Rows are scanned top to bottom: a row whose column 0 holds a non-blank
/// floor label is a position row, the row directly below it the matching
/// club row, and the scan then advances by two. A blank floor label
/// advances by a single row so a ragged sheet can re-synchronize on the
/// next labeled row. A position row with nothing below it is dropped.
#[must_use]
pub fn parse_layout_with(grid: &Grid, options: &ParseOptions) -> Layout {
    let n_rows = grid.n_rows();
    let n_cols = grid.n_cols();
    let mut rows_by_floor: HashMap<String, Vec<BoothRow>> = HashMap::new();
    let mut stats = ParseStats::default();

    let mut r = 0;
    while r < n_rows {
        stats.rows_scanned += 1;
        let floor_label = normalize_spaces(grid.cell(r, 0).unwrap_or(""));
        if is_blank(&floor_label) {
            stats.blank_floor_rows += 1;
            r += 1;
            continue;
        }

        // Club row is the line directly below; a trailing unpaired
        // position row is dropped.
        if r + 1 >= n_rows {
            break;
        }
        stats.pairs_processed += 1;

        let mut row_items: BoothRow = Vec::new();
        for c in DATA_START_COL..n_cols {
            let position = normalize_spaces(grid.cell(r, c).unwrap_or(""));
            let club = normalize_club_name(grid.cell(r + 1, c).unwrap_or(""));

            if is_blank(&position) || is_blank(&club) {
                stats.cells_skipped_blank += 1;
                continue;
            }
            if (options.exclusion)(&floor_label, &position) {
                stats.cells_excluded += 1;
                continue;
            }

            row_items.push(Booth {
                floor: floor_label.clone(),
                position,
                club,
                column_index: u32::try_from(c).unwrap_or(u32::MAX),
            });
        }

        if !row_items.is_empty() {
            stats.booths += row_items.len();
            rows_by_floor
                .entry(floor_label)
                .or_default()
                .push(row_items);
        }

        r += 2;
    }

    let mut floors: Vec<String> = rows_by_floor.keys().cloned().collect();
    floors.sort_by(|a, b| compare_floors(a, b));
    stats.floors = floors.len();

    debug!(
        rows = stats.rows_scanned,
        pairs = stats.pairs_processed,
        booths = stats.booths,
        floors = stats.floors,
        excluded = stats.cells_excluded,
        "parsed booth layout"
    );

    Layout {
        floors,
        rows_by_floor,
    }
}

/// Descending by embedded floor number; digitless labels after numeric
/// ones; ascending label text as the stable tie-break.
fn compare_floors(a: &str, b: &str) -> std::cmp::Ordering {
    match (floor_number(a), floor_number(b)) {
        (Some(na), Some(nb)) => nb.cmp(&na).then_with(|| a.cmp(b)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
