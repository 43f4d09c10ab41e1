//! Direct extraction for digests without a recognizable index page.

use tracing::debug;

use crate::patterns::DOT_LEADER;
use crate::result::IndexEntry;

use super::run_cascade;
use super::title::{clean_title, is_valid_title, page_anchor, strip_masthead};

/// Run the index cascade straight over the first page's text.
///
/// On top of the cascade, the last non-blank line before the first in-range
/// dot leader is tried as a title for that leader and put first when it is
/// valid and not already present. A cascade entry for the same page whose
/// title merely ends with the recovered one is replaced by it.
#[must_use]
pub fn extract_direct(first_page_text: &str) -> Vec<IndexEntry> {
    let text = strip_masthead(first_page_text);
    let mut entries = run_cascade(&text);

    if let Some(leading) = leading_entry(&text) {
        if !entries.contains(&leading) {
            debug!(title = %leading.title, page = leading.page_number, "recovered leading title");
            entries.retain(|entry| {
                entry.page_number != leading.page_number || !entry.title.ends_with(&leading.title)
            });
            entries.insert(0, leading);
        }
    }

    entries
}

fn leading_entry(text: &str) -> Option<IndexEntry> {
    let (anchor_start, page_number) = DOT_LEADER.captures_iter(text).find_map(|caps| {
        let start = caps.get(0)?.start();
        let page_number = page_anchor(caps.get(1)?.as_str())?;
        Some((start, page_number))
    })?;

    let line = text[..anchor_start]
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())?;
    let title = clean_title(line);

    is_valid_title(&title).then(|| IndexEntry::new(title, page_number))
}
