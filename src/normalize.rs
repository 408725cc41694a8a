//! Cell-text normalization and club-name canonicalization.
//!
//! Spreadsheet cells arrive with invisible junk: byte-order marks pasted in
//! from exports, zero-width characters from IME input, non-breaking and
//! full-width spaces, embedded newlines. Everything that compares or groups
//! cell text goes through [`normalize_spaces`] first so those differences
//! never split a club across filter entries.

/// Placeholder tokens a sheet author uses to mean "no value".
const BLANK_TOKENS: [&str; 3] = ["-", "\u{2014}", "\u{2013}"];

/// Known typo corrections: misspelled variant -> corrected short name.
const TYPO_FIXES: [(&str, &str); 1] = [("음-세-듣", "음-세-들")];

/// Alias table: short/abbreviated club name -> full official name.
///
/// Applied wherever a club name is used for grouping, filtering, or detail
/// lookup. Booth records store the un-aliased short form; resolution happens
/// at consumption time.
const ALIAS_TO_CANON: [(&str, &str); 2] = [
    ("음-하나", "음악으로 하나되기반"),
    ("음-세-들", "음악으로 세상 들여다 보기반"),
];

/// Normalize a raw cell value into a canonical display string.
///
/// Rules, applied in order:
/// 1. Strip BOM and zero-width characters (ZWSP, ZWNJ, ZWJ).
/// 2. Map NBSP and full-width space to a regular space.
/// 3. Map newlines and tabs to a regular space.
/// 4. Collapse whitespace runs to one space and trim.
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        match ch {
            // BOM and zero-width characters vanish entirely
            '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}' => {}
            // NBSP, full-width space, newlines, tabs, and ordinary
            // whitespace all collapse into a single space
            '\u{a0}' | '\u{3000}' => pending_space = true,
            c if c.is_whitespace() => pending_space = true,
            c => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }
    out
}

/// Whether a cell value means "no value" after normalization: empty, or one
/// of the placeholder dash tokens.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    let t = normalize_spaces(text);
    t.is_empty() || BLANK_TOKENS.contains(&t.as_str())
}

/// Normalize a club-name cell: whitespace rules plus the fixed typo fix.
///
/// The returned form is what booth records store. Use
/// [`canonical_club_name`] on top of this for grouping and lookups.
#[must_use]
pub fn normalize_club_name(name: &str) -> String {
    let name = normalize_spaces(name);
    for (typo, fixed) in TYPO_FIXES {
        if name == typo {
            return fixed.to_string();
        }
    }
    name
}

/// Resolve a (corrected) club name through the alias table. Unknown names
/// pass through unchanged.
#[must_use]
pub fn canonical_club_name(name: &str) -> &str {
    for (alias, canon) in ALIAS_TO_CANON {
        if name == alias {
            return canon;
        }
    }
    name
}
