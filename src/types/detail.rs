use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Extra information about one club, from the optional detail sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetail {
    /// Where the activity happens ("장소").
    pub place: String,
    /// Kind of activity on offer ("체험유형").
    pub activity_type: String,
    /// Free-text description ("세부내용").
    pub description: String,
}

/// Detail records keyed by canonical club name, plus any recoverable
/// warnings raised while building them.
///
/// A missing or unrecognized name header yields an empty map and a warning,
/// never an error — the booth layout must render without details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub by_club: HashMap<String, ClubDetail>,
    pub warnings: Vec<String>,
}

impl Details {
    /// Detail record for a booth, looked up by canonical club name.
    #[must_use]
    pub fn get(&self, canonical_club: &str) -> Option<&ClubDetail> {
        self.by_club.get(canonical_club)
    }
}
