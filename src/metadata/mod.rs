//! Metadata extraction from article bodies.
//!
//! Wire-service digests print a fixed block near the top of every article:
//!
//! ```text
//! Jane Doe            <- author
//! 842 words           <- anchor
//! 3 September 2025    <- publish date
//! 06:50 PM            <- optional time of day
//! Reuters             <- source
//! ```
//!
//! Fields are located by their offset from the "<N> words" anchor line. The
//! body must still carry its boilerplate when this runs, otherwise the
//! offsets shift.

mod byline;
pub mod date;

use tracing::debug;

use crate::options::Options;
use crate::patterns::{TIME_OF_DAY, WORD_COUNT_LINE};
use crate::result::ArticleMetadata;

pub use date::{normalize_date, parse_date};

/// Infer word count, date, source and author from a raw article body.
///
/// Only the first `options.metadata_scan_lines` non-empty lines are searched
/// for the anchor, and only the first anchor is used. A body without an
/// anchor yields empty metadata.
#[must_use]
pub fn extract_metadata(text_content: &str, title: &str, options: &Options) -> ArticleMetadata {
    let lines: Vec<&str> = text_content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((anchor, word_count)) = lines
        .iter()
        .take(options.metadata_scan_lines)
        .enumerate()
        .find_map(|(i, line)| parse_word_count(line).map(|count| (i, count)))
    else {
        debug!(title, "no word-count anchor found");
        return ArticleMetadata::default();
    };

    let publish_date = lines.get(anchor + 1).map(|line| normalize_date(line));

    let source = lines.get(anchor + 2).and_then(|line| {
        let candidate = if TIME_OF_DAY.is_match(line) {
            lines.get(anchor + 3)?
        } else {
            line
        };
        byline::is_valid_source(candidate).then(|| (*candidate).to_string())
    });

    let author = anchor
        .checked_sub(1)
        .and_then(|above| lines.get(above))
        .and_then(|line| byline::clean_author(line))
        .filter(|name| {
            !name.eq_ignore_ascii_case(title.trim())
                && !byline::is_source_like(name)
                && !byline::is_boilerplate(name)
                && !options.is_blacklisted_author(name)
        });

    ArticleMetadata {
        word_count: Some(word_count),
        publish_date,
        author,
        source,
    }
}

fn parse_word_count(line: &str) -> Option<u32> {
    let caps = WORD_COUNT_LINE.captures(line)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}
