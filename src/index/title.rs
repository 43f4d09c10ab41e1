//! Title cleaning and validity rules shared by every index strategy.

use crate::patterns::{
    COPYRIGHT_LINE, DOT_RUN, LEADING_DIGITS, MASTHEAD_FRAGMENT, PAGE_MARKER, WHITESPACE_NORMALIZE,
};

/// Lowest page an index entry may point at. Page 1 holds the index itself.
pub const MIN_PAGE_NUMBER: u32 = 2;

/// Page numbers at or above this are treated as noise.
pub const MAX_PAGE_NUMBER: u32 = 500;

/// Literal fragments that mark a candidate as masthead text, not a title.
const REJECTED_FRAGMENTS: &[&str] = &[
    "Page",
    "Factiva",
    "Inc",
    "All rights reserved",
    "©",
    "Document",
    "Unknown",
    "Dow Jones",
];

/// Whether a candidate string can be used as an article title.
///
/// Rejects candidates shorter than 3 characters, candidates containing a
/// masthead fragment, and candidates that are less than 10% letters.
#[must_use]
pub fn is_valid_title(title: &str) -> bool {
    let total = title.chars().count();
    if total < 3 {
        return false;
    }

    if REJECTED_FRAGMENTS
        .iter()
        .any(|fragment| title.contains(fragment))
    {
        return false;
    }

    let letters = title.chars().filter(|c| c.is_alphabetic()).count();
    letters * 10 >= total
}

/// Parse a digit group as a page anchor, keeping it only when in range.
pub(crate) fn page_anchor(digits: &str) -> Option<u32> {
    digits
        .parse::<u32>()
        .ok()
        .filter(|n| (MIN_PAGE_NUMBER..MAX_PAGE_NUMBER).contains(n))
}

/// Turn a raw title segment into a title: dot runs become spaces, stray
/// leading digits go, whitespace collapses.
pub(crate) fn clean_title(segment: &str) -> String {
    let collapsed = DOT_RUN.replace_all(segment, " ");
    let stripped = LEADING_DIGITS.replace(&collapsed, "");
    WHITESPACE_NORMALIZE
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

/// Remove page banners and copyright lines before matching.
pub(crate) fn strip_masthead(text: &str) -> String {
    let without_banner = PAGE_MARKER.replace_all(text, "");
    COPYRIGHT_LINE.replace_all(&without_banner, "").into_owned()
}

pub(crate) fn contains_masthead(text: &str) -> bool {
    MASTHEAD_FRAGMENT.is_match(text)
}
