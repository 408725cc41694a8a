//! Detail sheet tests for boothgrid
//!
//! End-to-end tests over CSV text for the club-detail mapping: header
//! synonym matching, alias-keyed lookup, and the recoverable missing-header
//! path the layout must survive.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use boothgrid::{parse_details_csv, parse_layout_csv};
use test_case::test_case;

#[test]
fn details_key_on_canonical_club_names() {
    let csv = "\
동아리명,장소,체험유형,세부내용\n\
음-하나,5-3,합주,\"다 함께 연주\"\n\
연극반,강당,공연,단막극";
    let details = parse_details_csv(csv).unwrap();
    assert!(details.warnings.is_empty());

    let d = details.get("음악으로 하나되기반").unwrap();
    assert_eq!(d.place, "5-3");
    assert_eq!(d.activity_type, "합주");
    assert_eq!(d.description, "다 함께 연주");
    // The short alias is not a key
    assert!(details.get("음-하나").is_none());
}

#[test_case("동아리명" ; "primary")]
#[test_case("동아리" ; "short")]
#[test_case("클럽명" ; "legacy")]
#[test_case("club" ; "english lower")]
#[test_case("Name" ; "english cap")]
fn accepted_name_headers(header: &str) {
    let csv = format!("{header},장소\n연극반,강당");
    let details = parse_details_csv(&csv).unwrap();
    assert_eq!(details.get("연극반").unwrap().place, "강당");
}

#[test]
fn missing_name_header_is_recoverable() {
    let details = parse_details_csv("장소,세부내용\n강당,연극").unwrap();
    assert!(details.by_club.is_empty());
    assert_eq!(details.warnings.len(), 1);
    assert!(details.warnings[0].contains("club-name header"));
}

#[test]
fn layout_lookup_goes_through_the_alias() {
    // A booth stores the corrected short name; its detail row may use the
    // same short name. Both meet at the canonical key.
    let layout = parse_layout_csv("4층,4-2\n,음-세-듣").unwrap();
    let details = parse_details_csv("동아리명,세부내용\n음-세-들,음악 감상").unwrap();

    let b = &layout.rows("4층")[0][0];
    let d = details.get(b.canonical_club()).unwrap();
    assert_eq!(d.description, "음악 감상");
}

#[test]
fn typo_in_detail_sheet_still_lands_on_canonical_key() {
    let details = parse_details_csv("동아리명,장소\n음-세-듣,4-2").unwrap();
    assert_eq!(
        details.get("음악으로 세상 들여다 보기반").unwrap().place,
        "4-2"
    );
}

#[test]
fn unlisted_clubs_have_no_detail() {
    let details = parse_details_csv("동아리명,장소\n연극반,강당").unwrap();
    assert!(details.get("방송반").is_none());
}
