//! Selection state for the presentation layer.
//!
//! A selected booth travels through the page as one opaque URL-safe token
//! (the original UI puts it in a `sel` query parameter). The token wraps the
//! booth's identity tuple; encode/decode round-trips it field-wise.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::Booth;

/// Identity of the currently selected booth.
///
/// `club` here is the *canonical* name — the presentation layer compares and
/// displays official names, so the tuple is canonicalized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedBooth {
    pub floor: String,
    pub column_index: u32,
    pub position: String,
    pub club: String,
}

impl SelectedBooth {
    /// Build the selection tuple for a booth, resolving the club alias.
    #[must_use]
    pub fn from_booth(booth: &Booth) -> Self {
        Self {
            floor: booth.floor.clone(),
            column_index: booth.column_index,
            position: booth.position.clone(),
            club: booth.canonical_club().to_string(),
        }
    }

    /// Whether this selection identifies the given booth.
    #[must_use]
    pub fn matches(&self, booth: &Booth) -> bool {
        self.floor == booth.floor
            && self.column_index == booth.column_index
            && self.position == booth.position
            && self.club == booth.canonical_club()
    }

    /// Encode as an opaque URL-safe token: fields joined on `|`, then
    /// base64url without padding. Sheet text never contains `|`.
    #[must_use]
    pub fn encode(&self) -> String {
        let payload = format!(
            "{}|{}|{}|{}",
            self.floor, self.column_index, self.position, self.club
        );
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    }

    /// Decode a token produced by [`SelectedBooth::encode`]. Returns `None`
    /// for anything malformed: bad base64, bad UTF-8, wrong field count, or
    /// a non-numeric column index.
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
        let payload = String::from_utf8(bytes).ok()?;
        let mut parts = payload.splitn(4, '|');
        let floor = parts.next()?.to_string();
        let column_index = parts.next()?.parse().ok()?;
        let position = parts.next()?.to_string();
        let club = parts.next()?.to_string();
        Some(Self {
            floor,
            column_index,
            position,
            club,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn booth() -> Booth {
        Booth {
            floor: "4층".to_string(),
            position: "4-2".to_string(),
            club: "음-세-들".to_string(),
            column_index: 3,
        }
    }

    #[test]
    fn from_booth_canonicalizes_club() {
        let sel = SelectedBooth::from_booth(&booth());
        assert_eq!(sel.club, "음악으로 세상 들여다 보기반");
        assert!(sel.matches(&booth()));
    }

    #[test]
    fn round_trip_is_field_wise_exact() {
        let sel = SelectedBooth::from_booth(&booth());
        let decoded = SelectedBooth::decode(&sel.encode()).unwrap();
        assert_eq!(decoded, sel);
    }

    #[test]
    fn token_is_url_safe() {
        let token = SelectedBooth::from_booth(&booth()).encode();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert_eq!(SelectedBooth::decode("not base64!"), None);
        // Valid base64 but too few fields
        let short = URL_SAFE_NO_PAD.encode(b"a|b");
        assert_eq!(SelectedBooth::decode(&short), None);
        // Non-numeric column index
        let bad_col = URL_SAFE_NO_PAD.encode("a|x|b|c".as_bytes());
        assert_eq!(SelectedBooth::decode(&bad_col), None);
    }

    #[test]
    fn selection_does_not_match_other_booths() {
        let sel = SelectedBooth::from_booth(&booth());
        let mut other = booth();
        other.column_index = 4;
        assert!(!sel.matches(&other));
    }
}
