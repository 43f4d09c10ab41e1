//! Boilerplate removal for article bodies.
//!
//! Runs after metadata extraction: the metadata block is located by line
//! offsets that assume boilerplate lines are still present.

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{
    COPYRIGHT_PROVIDED_BY, COPYRIGHT_PUBLISHER, COPYRIGHT_RESERVED, DOCUMENT_ID_LINE, FULL_BANNER,
    HORIZONTAL_WHITESPACE, ISSN, LANGUAGE_LINE, MULTIPLE_NEWLINES, PAGE_MARKER, PAGE_RANGE_LINE,
    VOLUME_ISSUE,
};

/// Removal patterns, most specific first so partial patterns never leave
/// fragments of a longer banner behind.
static BOILERPLATE: [&LazyLock<Regex>; 10] = [
    &FULL_BANNER,
    &PAGE_MARKER,
    &COPYRIGHT_PROVIDED_BY,
    &COPYRIGHT_RESERVED,
    &COPYRIGHT_PUBLISHER,
    &ISSN,
    &VOLUME_ISSUE,
    &DOCUMENT_ID_LINE,
    &LANGUAGE_LINE,
    &PAGE_RANGE_LINE,
];

/// Strip masthead and footer boilerplate and normalize whitespace.
#[must_use]
pub fn sanitize(text_content: &str) -> String {
    let mut text = text_content.replace("\r\n", "\n");

    for pattern in BOILERPLATE {
        text = pattern.replace_all(&text, "").into_owned();
    }

    let text = MULTIPLE_NEWLINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_WHITESPACE.replace_all(text.trim(), " ");
    let text = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");

    MULTIPLE_NEWLINES
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}
