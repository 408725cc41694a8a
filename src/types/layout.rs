use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Booth;
use crate::normalize::is_blank;

/// Booths sharing one position/club row pair, in left-to-right column order.
pub type BoothRow = Vec<Booth>;

/// The parsed floor plan: floor labels in display order plus each floor's
/// rows of booths.
///
/// `floors` is sorted by descending embedded floor number (5층 before 1층);
/// labels with no digits sort after all numeric ones. Only floors that
/// produced at least one booth appear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub floors: Vec<String>,
    pub rows_by_floor: HashMap<String, Vec<BoothRow>>,
}

impl Layout {
    /// Rows for one floor; an unknown label reads as no rows.
    #[must_use]
    pub fn rows(&self, floor: &str) -> &[BoothRow] {
        self.rows_by_floor.get(floor).map_or(&[], Vec::as_slice)
    }

    /// All booths in display order: floors top-down, rows in sheet order,
    /// columns left to right.
    pub fn iter_booths(&self) -> impl Iterator<Item = &Booth> {
        self.floors
            .iter()
            .flat_map(|f| self.rows(f))
            .flat_map(|row| row.iter())
    }

    #[must_use]
    pub fn booth_count(&self) -> usize {
        self.iter_booths().count()
    }

    /// Sorted, de-duplicated canonical club names, for filter dropdowns.
    #[must_use]
    pub fn club_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .iter_booths()
            .map(|b| b.canonical_club().to_string())
            .filter(|n| !is_blank(n))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booth(floor: &str, pos: &str, club: &str, col: u32) -> Booth {
        Booth {
            floor: floor.to_string(),
            position: pos.to_string(),
            club: club.to_string(),
            column_index: col,
        }
    }

    fn sample() -> Layout {
        let mut rows_by_floor = HashMap::new();
        rows_by_floor.insert(
            "3층".to_string(),
            vec![vec![
                booth("3층", "3-1", "연극반", 1),
                booth("3층", "3-2", "음-하나", 2),
            ]],
        );
        rows_by_floor.insert(
            "1층".to_string(),
            vec![vec![booth("1층", "1-1", "연극반", 1)]],
        );
        Layout {
            floors: vec!["3층".to_string(), "1층".to_string()],
            rows_by_floor,
        }
    }

    #[test]
    fn iterates_in_floor_order() {
        let layout = sample();
        let floors: Vec<&str> = layout.iter_booths().map(|b| b.floor.as_str()).collect();
        assert_eq!(floors, ["3층", "3층", "1층"]);
        assert_eq!(layout.booth_count(), 3);
    }

    #[test]
    fn club_names_are_canonical_sorted_unique() {
        let names = sample().club_names();
        assert_eq!(names, ["연극반", "음악으로 하나되기반"]);
    }

    #[test]
    fn unknown_floor_reads_as_empty() {
        assert!(sample().rows("9층").is_empty());
    }
}
