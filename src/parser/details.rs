//! Detail sheet parser.
//!
//! The optional second sheet carries one row per club with free-text
//! columns. Row 0 is the header; the club-name column is found by trying a
//! list of accepted header spellings in priority order.

use tracing::warn;

use crate::grid::Grid;
use crate::normalize::{canonical_club_name, is_blank, normalize_club_name, normalize_spaces};
use crate::types::{ClubDetail, Details};

/// Accepted spellings for the club-name header, checked in priority order.
const NAME_HEADERS: [&str; 7] = ["동아리명", "동아리", "클럽명", "club", "Club", "name", "Name"];

const PLACE_HEADER: &str = "장소";
const ACTIVITY_TYPE_HEADER: &str = "체험유형";
const DESCRIPTION_HEADER: &str = "세부내용";

/// Build the canonical-club-name -> detail mapping from a header-row grid.
///
/// Rows with a blank name cell are skipped; later rows overwrite earlier
/// duplicates. A grid without a recognizable name header yields an empty
/// map plus a warning — never an error, the layout renders without details.
#[must_use]
pub fn build_details(grid: &Grid) -> Details {
    let mut details = Details::default();

    let headers: Vec<String> = grid
        .row(0)
        .unwrap_or(&[])
        .iter()
        .map(|h| normalize_spaces(h))
        .collect();

    let find_col = |name: &str| headers.iter().position(|h| h.as_str() == name);

    let Some(name_col) = NAME_HEADERS.iter().find_map(|h| find_col(h)) else {
        warn!(
            accepted = ?NAME_HEADERS,
            "detail sheet has no recognizable club-name header"
        );
        details.warnings.push(format!(
            "detail sheet has no club-name header (accepted: {})",
            NAME_HEADERS.join(", ")
        ));
        return details;
    };

    let place_col = find_col(PLACE_HEADER);
    let activity_col = find_col(ACTIVITY_TYPE_HEADER);
    let description_col = find_col(DESCRIPTION_HEADER);

    let col_text = |row: usize, col: Option<usize>| {
        col.and_then(|c| grid.cell(row, c))
            .map(normalize_spaces)
            .unwrap_or_default()
    };

    for row in 1..grid.n_rows() {
        let name = normalize_club_name(grid.cell(row, name_col).unwrap_or(""));
        if is_blank(&name) {
            continue;
        }
        let canon = canonical_club_name(&name).to_string();
        details.by_club.insert(
            canon,
            ClubDetail {
                place: col_text(row, place_col),
                activity_type: col_text(row, activity_col),
                description: col_text(row, description_col),
            },
        );
    }

    details
}
