use serde::{Deserialize, Serialize};

use crate::normalize::canonical_club_name;

/// One floor-position/club pairing derived from two adjacent sheet rows.
///
/// Identity is the full (floor, column_index, position, club) tuple; there is
/// no surrogate key. `club` holds the corrected but un-aliased short name —
/// alias resolution to the official club name happens at consumption time
/// via [`Booth::canonical_club`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    /// Floor label as written in column 0, e.g. "5층".
    pub floor: String,
    /// Position text, typically a classroom like "1-3" or "과학실".
    pub position: String,
    /// Corrected club name as stored (un-aliased).
    pub club: String,
    /// Source column of the cell pair (column 0 is the floor label).
    pub column_index: u32,
}

impl Booth {
    /// The official club name used for grouping, filtering, and detail
    /// lookup.
    #[must_use]
    pub fn canonical_club(&self) -> &str {
        canonical_club_name(&self.club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booth(club: &str) -> Booth {
        Booth {
            floor: "3층".to_string(),
            position: "3-1".to_string(),
            club: club.to_string(),
            column_index: 1,
        }
    }

    #[test]
    fn canonical_club_resolves_alias() {
        assert_eq!(booth("음-하나").canonical_club(), "음악으로 하나되기반");
        assert_eq!(booth("연극반").canonical_club(), "연극반");
    }

    #[test]
    fn identity_is_field_wise() {
        assert_eq!(booth("연극반"), booth("연극반"));
        assert_ne!(booth("연극반"), booth("방송반"));
    }
}
