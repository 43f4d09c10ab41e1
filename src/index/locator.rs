//! Index page detection.

use crate::patterns::{CAPS_DOT_LEADER_LINE, CAPS_THEN_NUMBER_LOOSE, NUMBER_TOKEN};
use crate::result::Page;

use super::title::strip_masthead;

/// Only this many leading pages are ever considered for the index.
pub const INDEX_SCAN_PAGES: usize = 10;

/// Whether a page looks like an article index.
///
/// A page qualifies when any of these hold (masthead banners ignored):
/// - two or more "CAPS TITLE ..... N" lines
/// - two or more "CAPS TITLE N" runs
/// - its distinct numbers, in order of first appearance, are strictly
///   ascending and there are at least two of them
#[must_use]
pub fn is_index_page(page_text: &str) -> bool {
    let text = strip_masthead(page_text);

    CAPS_DOT_LEADER_LINE.find_iter(&text).count() >= 2
        || CAPS_THEN_NUMBER_LOOSE.find_iter(&text).count() >= 2
        || has_ascending_numbers(&text)
}

/// Index pages among the first [`INDEX_SCAN_PAGES`] pages, in page order.
#[must_use]
pub fn locate_index_pages(pages: &[Page]) -> Vec<&Page> {
    pages
        .iter()
        .take(INDEX_SCAN_PAGES)
        .filter(|page| is_index_page(&page.text))
        .collect()
}

fn has_ascending_numbers(text: &str) -> bool {
    let mut distinct: Vec<u64> = Vec::new();
    for token in NUMBER_TOKEN.find_iter(text) {
        let Ok(value) = token.as_str().parse::<u64>() else {
            continue;
        };
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }

    distinct.len() >= 2 && distinct.windows(2).all(|pair| pair[0] < pair[1])
}
