//! Compiled regex patterns for article extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the pipeline stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Page Segmentation Patterns
// =============================================================================

/// Matches the "Page <n> of <m>" banner that opens every page of a digest.
/// Capture 1 is the page number.
pub static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bPage\s+(\d+)\s+of\s+\d+\b").expect("PAGE_MARKER regex")
});

// =============================================================================
// Masthead Patterns
// =============================================================================

/// Matches a copyright line from the © sign to end of line.
pub static COPYRIGHT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"©[^\n]*").expect("COPYRIGHT_LINE regex")
});

/// Matches any fragment that marks text as masthead rather than a title.
pub static MASTHEAD_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bPage\s+\d+\s+of\s+\d+\b|©|All rights reserved|Dow Jones|Factiva")
        .expect("MASTHEAD_FRAGMENT regex")
});

// =============================================================================
// Index Page Patterns
// =============================================================================

/// Canonical index line: ALL-CAPS words, a dot leader of 3+ dots, a number.
pub static CAPS_DOT_LEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\p{Lu}[\p{Lu}'&,:\-]*(?:[ \t]+\p{Lu}[\p{Lu}'&,:\-]*)*[ \t]*[.·…]{3,}[ \t]*\d+\b",
    )
    .expect("CAPS_DOT_LEADER_LINE regex")
});

/// Loose index line: ALL-CAPS words directly followed by a number.
pub static CAPS_THEN_NUMBER_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{Lu}[\p{Lu}'&,:\-]+(?:[ \t]+\p{Lu}[\p{Lu}'&,:\-]*)*[ \t]*\d+\b")
        .expect("CAPS_THEN_NUMBER_LOOSE regex")
});

/// A title of two or more ALL-CAPS words, an optional space, then digits.
/// Capture 1 is the title, capture 2 the page number.
pub static CAPS_TITLE_THEN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\p{Lu}[\p{Lu}'&,:\-]+(?:[ \t]+\p{Lu}[\p{Lu}'&,:\-]*)+) ?(\d+)\b")
        .expect("CAPS_TITLE_THEN_NUMBER regex")
});

/// At least one ALL-CAPS word of two or more letters.
pub static CAPS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{Lu}[\p{Lu}'&\-]+\b").expect("CAPS_WORD regex")
});

/// Dot leader followed by a page number. Capture 1 is the page number.
pub static DOT_LEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.·…]{2,}\s*(\d+)\b").expect("DOT_LEADER regex")
});

/// A run of two or more dot characters.
pub static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.·…]{2,}").expect("DOT_RUN regex")
});

/// Stray digit fragments at the start of a title segment (column bleed).
pub static LEADING_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s*\d+\b[.,;:)\-]*)+").expect("LEADING_DIGITS regex")
});

/// A single line ending in a number. Capture 1 is everything before the
/// digits (trailing spaces included), capture 2 the digits.
pub static LINE_TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)(\d+)[ \t]*$").expect("LINE_TRAILING_NUMBER regex")
});

/// A standalone numeric token.
pub static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\b").expect("NUMBER_TOKEN regex")
});

/// Any run of digits.
pub static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").expect("DIGIT_RUN regex")
});

// =============================================================================
// Metadata Patterns
// =============================================================================

/// The "<N> words" anchor line. Capture 1 is the count.
pub static WORD_COUNT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,3}(?:,\d{3})+|\d+)\s+words$").expect("WORD_COUNT_LINE regex")
});

/// A bare time of day ("6:50", "06:50 PM").
pub static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,2}:\d{2}(?:\s*[AP]\.?M\.?)?$").expect("TIME_OF_DAY regex")
});

/// Lines that are footer or masthead metadata, never a source or author.
pub static NON_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bpage\s+\d+\s+of\s+\d+\b|©|\bcopyright\b|all rights reserved|\bvol(?:ume)?\.?\s+\d+|\bissue\s+\d+|\bissn\b|^document\s+\w+$|^(?:english|french|german|spanish|italian|portuguese|dutch|russian|chinese|japanese|arabic)$",
    )
    .expect("NON_SOURCE regex")
});

/// Well-known news outlet and wire-service names.
pub static OUTLET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)reuters|bloomberg|associated press|agence france|\bafp\b|dow jones|newswire|news service|business wire|xinhua|press association|\bnews agency\b",
    )
    .expect("OUTLET_NAME regex")
});

/// The standalone word "Press".
pub static PRESS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bPress\b").expect("PRESS_WORD regex")
});

/// A "By " byline prefix.
pub static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^by\s+").expect("BYLINE_PREFIX regex")
});

// =============================================================================
// Boilerplate Removal Patterns
// =============================================================================

/// Full masthead banner: "Page X of Y © YYYY Publisher, Inc. All rights reserved."
/// The rights notice may be wrapped onto the next line.
pub static FULL_BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bPage[ \t]+\d+[ \t]+of[ \t]+\d+[ \t]*©[ \t]*\d{4}[^\n]*?(?:[ \t]+|[ \t]*\n[ \t]*)All(?:[ \t]+|[ \t]*\n[ \t]*)rights(?:[ \t]+|[ \t]*\n[ \t]*)reserved\.?",
    )
    .expect("FULL_BANNER regex")
});

/// "© YYYY ... provided by ..." attribution line.
pub static COPYRIGHT_PROVIDED_BY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"©[ \t]*\d{4}[^\n]*?provided by[^\n]*").expect("COPYRIGHT_PROVIDED_BY regex")
});

/// "© YYYY ... All rights reserved." notice, possibly wrapped once.
pub static COPYRIGHT_RESERVED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"©[ \t]*\d{4}[^\n]*?(?:[ \t]+|[ \t]*\n[ \t]*)All(?:[ \t]+|[ \t]*\n[ \t]*)rights(?:[ \t]+|[ \t]*\n[ \t]*)reserved\.?",
    )
    .expect("COPYRIGHT_RESERVED regex")
});

/// Bare "© YYYY Publisher, Inc." left when the rights notice is missing.
pub static COPYRIGHT_PUBLISHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"©[ \t]*\d{4}[ \t]+[^\n©]*?,[ \t]*(?:Inc|Ltd|LLC)\b\.?")
        .expect("COPYRIGHT_PUBLISHER regex")
});

/// ISSN code.
pub static ISSN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bISSN:?[ \t]*\d{4}-?\d{3}[\dXx]\b").expect("ISSN regex")
});

/// "Volume N; Issue M" tag.
pub static VOLUME_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bVol(?:ume)?\.?[ \t]+\d+[ \t]*[;,][ \t]*(?:Issue|No\.?)[ \t]+\d+")
        .expect("VOLUME_ISSUE regex")
});

/// A bare "Document <id>" line.
pub static DOCUMENT_ID_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*Document[ \t]+[A-Za-z0-9]+[ \t]*$").expect("DOCUMENT_ID_LINE regex")
});

/// A line holding only a language name.
pub static LANGUAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:English|French|German|Spanish|Italian|Portuguese|Dutch|Russian|Chinese|Japanese|Arabic)[ \t]*$",
    )
    .expect("LANGUAGE_LINE regex")
});

/// A line holding only a page range ("12-14", "pp. 3–5").
pub static PAGE_RANGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:pp?\.?[ \t]*)?\d+[ \t]*[-–][ \t]*\d+[ \t]*$")
        .expect("PAGE_RANGE_LINE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// Matches runs of whitespace other than newlines.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\S\n]+").expect("HORIZONTAL_WHITESPACE regex")
});

/// Matches any whitespace run.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_marker_captures_page_number() {
        let caps = PAGE_MARKER.captures("Page 12 of 40 © 2025").expect("marker");
        assert_eq!(&caps[1], "12");
        assert!(!PAGE_MARKER.is_match("page 12 of the report"));
    }

    #[test]
    fn dot_leader_line_matches_index_entries() {
        assert!(CAPS_DOT_LEADER_LINE.is_match("CLIMATE CRISIS DEEPENS ..... 3"));
        assert!(CAPS_DOT_LEADER_LINE.is_match("MARKETS…………12"));
        assert!(!CAPS_DOT_LEADER_LINE.is_match("Climate crisis deepens ..... 3"));
    }

    #[test]
    fn caps_title_requires_two_words() {
        assert!(CAPS_TITLE_THEN_NUMBER.is_match("MARKET REPORT 7"));
        assert!(!CAPS_TITLE_THEN_NUMBER.is_match("MARKETS 7"));
    }

    #[test]
    fn copyright_notice_may_wrap_once() {
        assert!(COPYRIGHT_RESERVED.is_match("© 2025 Factiva, Inc. All\nrights reserved."));
        assert!(COPYRIGHT_RESERVED.is_match("© 2025 Factiva, Inc.\nAll rights reserved."));
        assert!(!COPYRIGHT_RESERVED.is_match("© 2025 Factiva, Inc.\n\nAll rights reserved."));
        assert!(COPYRIGHT_PUBLISHER.is_match("© 2025 Factiva, Inc."));
        assert!(!COPYRIGHT_PUBLISHER.is_match("© 2025 Thomson Reuters"));
    }

    #[test]
    fn word_count_line_accepts_thousands_separators() {
        assert!(WORD_COUNT_LINE.is_match("842 words"));
        assert!(WORD_COUNT_LINE.is_match("1,204 Words"));
        assert!(!WORD_COUNT_LINE.is_match("about 842 words"));
    }

    #[test]
    fn time_of_day_matches_clock_lines() {
        assert!(TIME_OF_DAY.is_match("06:50 PM"));
        assert!(TIME_OF_DAY.is_match("6:50"));
        assert!(!TIME_OF_DAY.is_match("Reuters"));
    }

    #[test]
    fn horizontal_whitespace_keeps_newlines() {
        let result = HORIZONTAL_WHITESPACE.replace_all("a  \t b\n\nc", " ");
        assert_eq!(result, "a b\n\nc");
    }
}
