//! Spreadsheet source URLs.
//!
//! The layout lives in a hosted Google spreadsheet; each tab is fetched as
//! CSV through the `gviz/tq` export endpoint. This module only builds the
//! URLs — fetching is the caller's concern.

use url::Url;

use crate::error::{BoothGridError, Result};

/// Tab name of the main booth layout sheet in the original deployment.
pub const LAYOUT_SHEET_NAME: &str = "실내 부스 배치도";

/// Tab name of the club detail sheet in the original deployment.
pub const DETAILS_SHEET_NAME: &str = "동아리 활동 설명";

/// Extract the spreadsheet id from a Google Sheets URL
/// (`.../spreadsheets/d/<id>/...`).
#[must_use]
pub fn extract_sheet_id(sheet_url: &str) -> Option<String> {
    let (_, rest) = sheet_url.split_once("/spreadsheets/d/")?;
    let id: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    (!id.is_empty()).then_some(id)
}

/// CSV export URL for one named tab of a spreadsheet
/// (`.../gviz/tq?tqx=out:csv&sheet=<name>`).
///
/// # Errors
/// Returns [`BoothGridError::Source`] when no spreadsheet id can be
/// extracted from the URL.
pub fn csv_export_url(sheet_url: &str, sheet_name: &str) -> Result<String> {
    let sid = extract_sheet_id(sheet_url)
        .ok_or_else(|| BoothGridError::Source(format!("no spreadsheet id in {sheet_url}")))?;

    let base = format!("https://docs.google.com/spreadsheets/d/{sid}/gviz/tq");
    let mut url = Url::parse(&base)
        .map_err(|e| BoothGridError::Source(format!("bad export URL for id {sid}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("tqx", "out:csv")
        .append_pair("sheet", sheet_name);
    Ok(url.into())
}
