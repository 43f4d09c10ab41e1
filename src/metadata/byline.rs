//! Author and source line classification.

use crate::patterns::{BYLINE_PREFIX, NON_SOURCE, OUTLET_NAME, PRESS_WORD, TIME_OF_DAY};

/// Turn the line above the word-count anchor into an author name.
///
/// A leading "By " is dropped. Single words are rejected, and anything
/// after a pipe is cut off (the remainder must still be more than one word).
pub(crate) fn clean_author(line: &str) -> Option<String> {
    let line = BYLINE_PREFIX.replace(line.trim(), "");
    let line = line.trim();
    if !line.contains(char::is_whitespace) {
        return None;
    }

    let name = line.split_once('|').map_or(line, |(before, _)| before.trim());
    if !name.contains(char::is_whitespace) {
        return None;
    }

    Some(name.to_string())
}

/// Whether a line names an outlet rather than a person.
pub(crate) fn is_source_like(text: &str) -> bool {
    (PRESS_WORD.is_match(text) && text.split_whitespace().count() > 2) || OUTLET_NAME.is_match(text)
}

/// Masthead, footer or language-tag line.
pub(crate) fn is_boilerplate(text: &str) -> bool {
    NON_SOURCE.is_match(text)
}

/// Whether a line can be reported as the article's source.
pub(crate) fn is_valid_source(text: &str) -> bool {
    let text = text.trim();
    if text.chars().count() < 3 {
        return false;
    }
    if text.chars().filter(|c| c.is_alphabetic()).count() < 2 {
        return false;
    }
    if TIME_OF_DAY.is_match(text) || text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !is_boilerplate(text)
}
