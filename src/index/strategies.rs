//! Index parsing strategies.
//!
//! Each strategy is an independent extractor over masthead-stripped index
//! text. The cascade in [`super::run_cascade`] runs them in order; later
//! strategies only backfill when earlier ones came up short.

use crate::patterns::{
    CAPS_TITLE_THEN_NUMBER, CAPS_WORD, DIGIT_RUN, DOT_LEADER, DOT_RUN, LINE_TRAILING_NUMBER,
    WHITESPACE_NORMALIZE,
};
use crate::result::IndexEntry;

use super::title::{clean_title, contains_masthead, is_valid_title, page_anchor};

/// Characters before a trailing number searched for leader evidence.
const LEADER_WINDOW_CHARS: usize = 30;

/// A single way of pulling (title, page) pairs out of index text.
pub(crate) trait IndexStrategy: Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this strategy runs, given the entries found so far.
    fn should_run(&self, _found: &[IndexEntry]) -> bool {
        true
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry>;
}

/// Primary: "TITLE ..... N". The title is whatever sits between the
/// previous dot leader and this one.
pub(crate) struct DotLeader;

impl IndexStrategy for DotLeader {
    fn name(&self) -> &'static str {
        "dot_leader"
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry> {
        let mut entries = Vec::new();
        let mut cursor = 0;

        for caps in DOT_LEADER.captures_iter(text) {
            let (Some(leader), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let segment = &text[cursor..leader.start()];
            cursor = leader.end();

            let Some(page_number) = page_anchor(digits.as_str()) else {
                continue;
            };
            let title = clean_title(segment);
            if is_valid_title(&title) {
                entries.push(IndexEntry::new(title, page_number));
            }
        }

        entries
    }
}

/// Secondary: a line ending in a number with typographic evidence of a
/// leader just before it (dots, a wide gap, or a capital letter).
pub(crate) struct LineEndNumber;

impl IndexStrategy for LineEndNumber {
    fn name(&self) -> &'static str {
        "line_end_number"
    }

    fn should_run(&self, found: &[IndexEntry]) -> bool {
        !found.is_empty()
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry> {
        text.lines()
            .filter_map(|line| {
                let caps = LINE_TRAILING_NUMBER.captures(line)?;
                let prefix = caps.get(1).map_or("", |m| m.as_str());
                let page_number = page_anchor(caps.get(2)?.as_str())?;
                if !has_leader_evidence(prefix) {
                    return None;
                }
                let title = clean_title(prefix);
                is_valid_title(&title).then(|| IndexEntry::new(title, page_number))
            })
            .collect()
    }
}

fn has_leader_evidence(prefix: &str) -> bool {
    let skip = prefix.chars().count().saturating_sub(LEADER_WINDOW_CHARS);
    let window: String = prefix.chars().skip(skip).collect();

    DOT_RUN.is_match(&window)
        || window.contains("   ")
        || window
            .trim_end()
            .chars()
            .last()
            .is_some_and(char::is_uppercase)
}

/// Tertiary: "CAPS TITLE WORDS N" with no leader at all.
pub(crate) struct CapsThenNumber;

impl IndexStrategy for CapsThenNumber {
    fn name(&self) -> &'static str {
        "caps_then_number"
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry> {
        CAPS_TITLE_THEN_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let title = WHITESPACE_NORMALIZE
                    .replace_all(caps.get(1)?.as_str().trim(), " ")
                    .into_owned();
                let page_number = page_anchor(caps.get(2)?.as_str())?;
                if title.chars().count() <= 5 || contains_masthead(&title) {
                    return None;
                }
                is_valid_title(&title).then(|| IndexEntry::new(title, page_number))
            })
            .collect()
    }
}

/// Backup: any line of the form "<text><digits>".
pub(crate) struct LineSplit;

impl IndexStrategy for LineSplit {
    fn name(&self) -> &'static str {
        "line_split"
    }

    fn should_run(&self, found: &[IndexEntry]) -> bool {
        found.len() < 3
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry> {
        text.lines()
            .filter_map(|line| {
                let caps = LINE_TRAILING_NUMBER.captures(line.trim())?;
                let page_number = page_anchor(caps.get(2)?.as_str())?;
                let title = clean_title(caps.get(1)?.as_str());
                is_valid_title(&title).then(|| IndexEntry::new(title, page_number))
            })
            .collect()
    }
}

/// Last resort: split on digit runs and look each segment back up in the
/// text to find the number that follows it.
pub(crate) struct SegmentScan;

impl IndexStrategy for SegmentScan {
    fn name(&self) -> &'static str {
        "segment_scan"
    }

    fn should_run(&self, found: &[IndexEntry]) -> bool {
        found.len() < 5
    }

    fn try_extract(&self, text: &str) -> Vec<IndexEntry> {
        let mut entries = Vec::new();

        for segment in DIGIT_RUN.split(text) {
            let segment = segment.trim();
            if segment.chars().count() < 10
                || !CAPS_WORD.is_match(segment)
                || contains_masthead(segment)
            {
                continue;
            }

            let Some(page_number) = number_after(text, segment) else {
                continue;
            };
            let title = clean_title(segment);
            if is_valid_title(&title) {
                entries.push(IndexEntry::new(title, page_number));
            }
        }

        entries
    }
}

/// First in-range number that directly follows an occurrence of `segment`.
fn number_after(text: &str, segment: &str) -> Option<u32> {
    text.match_indices(segment).find_map(|(pos, _)| {
        let rest = text[pos + segment.len()..].trim_start();
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        page_anchor(&rest[..end])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "\nCLIMATE CRISIS DEEPENS ..... 3\nMARKET REPORT ..... 7\n";

    #[test]
    fn test_dot_leader_reads_titles_between_anchors() {
        let entries = DotLeader.try_extract(INDEX);
        assert_eq!(
            entries,
            vec![
                IndexEntry::new("CLIMATE CRISIS DEEPENS", 3),
                IndexEntry::new("MARKET REPORT", 7),
            ]
        );
    }

    #[test]
    fn test_dot_leader_skips_out_of_range_anchor() {
        let entries = DotLeader.try_extract("CONTENTS ..... 1\nOIL PRICES ..... 600\nFARM NEWS ..... 4");
        assert_eq!(entries, vec![IndexEntry::new("FARM NEWS", 4)]);
    }

    #[test]
    fn test_line_end_number_needs_leader_evidence() {
        let text = "SHIPPING LANES      12\nprices rose to 45\nPORT STRIKE 14";
        let entries = LineEndNumber.try_extract(text);
        assert_eq!(
            entries,
            vec![
                IndexEntry::new("SHIPPING LANES", 12),
                IndexEntry::new("PORT STRIKE", 14),
            ]
        );
    }

    #[test]
    fn test_line_end_number_only_runs_after_primary() {
        assert!(!LineEndNumber.should_run(&[]));
        assert!(LineEndNumber.should_run(&[IndexEntry::new("MARKET REPORT", 7)]));
    }

    fn entries(count: u32) -> Vec<IndexEntry> {
        (0..count)
            .map(|i| IndexEntry::new(format!("STORY {i}"), i + 2))
            .collect()
    }

    #[test]
    fn test_line_split_stops_at_three_entries() {
        assert!(LineSplit.should_run(&entries(2)));
        assert!(!LineSplit.should_run(&entries(3)));
    }

    #[test]
    fn test_segment_scan_stops_at_five_entries() {
        assert!(SegmentScan.should_run(&entries(4)));
        assert!(!SegmentScan.should_run(&entries(5)));
    }

    #[test]
    fn test_caps_then_number() {
        let entries = CapsThenNumber.try_extract("BANK RATES 5 and EURO ZONE OUTLOOK 9");
        assert_eq!(
            entries,
            vec![
                IndexEntry::new("BANK RATES", 5),
                IndexEntry::new("EURO ZONE OUTLOOK", 9),
            ]
        );
    }

    #[test]
    fn test_caps_then_number_rejects_short_titles() {
        assert!(CapsThenNumber.try_extract("AI UK 5").is_empty());
    }

    #[test]
    fn test_line_split_accepts_mixed_case_lines() {
        let entries = LineSplit.try_extract("Harvest forecast 6\nx 7\n");
        assert_eq!(entries, vec![IndexEntry::new("Harvest forecast", 6)]);
    }

    #[test]
    fn test_segment_scan_recovers_anchor() {
        let entries = SegmentScan.try_extract("RAIL FREIGHT EXPANDS 8 WATER POLICY SHIFT 11");
        assert_eq!(
            entries,
            vec![
                IndexEntry::new("RAIL FREIGHT EXPANDS", 8),
                IndexEntry::new("WATER POLICY SHIFT", 11),
            ]
        );
    }

    #[test]
    fn test_segment_scan_ignores_masthead() {
        assert!(SegmentScan
            .try_extract("Factiva DIGEST EDITION 4")
            .is_empty());
    }
}
