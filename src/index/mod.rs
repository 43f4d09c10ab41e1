//! Article index discovery and parsing.
//!
//! This module finds the index pages of a digest, reads (title, page)
//! entries off them through a cascade of independent strategies, and falls
//! back to reading the first page directly when no index page exists.

mod fallback;
mod locator;
mod strategies;
mod title;

use std::collections::HashSet;

use tracing::debug;

use crate::result::IndexEntry;

use strategies::{CapsThenNumber, DotLeader, IndexStrategy, LineEndNumber, LineSplit, SegmentScan};
use title::strip_masthead;

pub use fallback::extract_direct;
pub use locator::{is_index_page, locate_index_pages, INDEX_SCAN_PAGES};
pub use title::{is_valid_title, MAX_PAGE_NUMBER, MIN_PAGE_NUMBER};

/// Strategies in priority order.
static CASCADE: [&dyn IndexStrategy; 5] = [
    &DotLeader,
    &LineEndNumber,
    &CapsThenNumber,
    &LineSplit,
    &SegmentScan,
];

/// Read index entries off one index page.
///
/// Entries come back in discovery order with duplicates removed; callers
/// merging several pages should pass the union through [`dedupe_and_sort`].
#[must_use]
pub fn parse_index_page(page_text: &str) -> Vec<IndexEntry> {
    run_cascade(&strip_masthead(page_text))
}

/// Remove repeated (title, page) pairs and sort ascending by page number.
///
/// The sort is stable, so entries sharing a page keep discovery order.
#[must_use]
pub fn dedupe_and_sort(entries: Vec<IndexEntry>) -> Vec<IndexEntry> {
    let mut seen = HashSet::new();
    let mut unique: Vec<IndexEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect();
    unique.sort_by_key(|entry| entry.page_number);
    unique
}

/// Run every strategy over masthead-stripped text, accumulating new entries.
///
/// The first strategy's entries are taken as-is. Later strategies only fill
/// pages no earlier strategy has claimed.
fn run_cascade(text: &str) -> Vec<IndexEntry> {
    let mut found: Vec<IndexEntry> = Vec::new();

    for (position, strategy) in CASCADE.iter().enumerate() {
        if !strategy.should_run(&found) {
            continue;
        }

        let claimed: HashSet<u32> = found.iter().map(|entry| entry.page_number).collect();
        let mut added = 0usize;
        for entry in strategy.try_extract(text) {
            if position > 0 && claimed.contains(&entry.page_number) {
                continue;
            }
            if !found.contains(&entry) {
                found.push(entry);
                added += 1;
            }
        }
        debug!(strategy = strategy.name(), added, total = found.len(), "index strategy finished");
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_index_page() {
        let page = "Page 1 of 10\nCLIMATE CRISIS DEEPENS ..... 3\nMARKET REPORT ..... 7\n";
        assert_eq!(
            parse_index_page(page),
            vec![
                IndexEntry::new("CLIMATE CRISIS DEEPENS", 3),
                IndexEntry::new("MARKET REPORT", 7),
            ]
        );
    }

    #[test]
    fn test_parse_ignores_banner_title() {
        let entries = parse_index_page("Page 3 of 40\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_backfill_runs_when_primary_is_short() {
        let page = "ENERGY OUTLOOK ..... 4\nFarm subsidies 9\n";
        let entries = parse_index_page(page);
        assert_eq!(
            entries,
            vec![
                IndexEntry::new("ENERGY OUTLOOK", 4),
                IndexEntry::new("Farm subsidies", 9),
            ]
        );
    }

    #[test]
    fn test_backfill_never_shadows_claimed_page() {
        let page = "COVID-19 CASES RISE ..... 2\nMARKET REPORT ..... 3\n";
        assert_eq!(
            parse_index_page(page),
            vec![
                IndexEntry::new("COVID-19 CASES RISE", 2),
                IndexEntry::new("MARKET REPORT", 3),
            ]
        );
    }

    #[test]
    fn test_full_primary_page_gets_no_segment_scan_entries() {
        let page = "ALPHA NEWS ..... 2\nBETA NEWS ..... 3\nGAMMA NEWS ..... 4\n\
                    DELTA NEWS ..... 5\nEPSILON NEWS ..... 6\n\
                    see also Offshore wind FARMS report 12 inside\n";
        assert!(SegmentScan
            .try_extract(&strip_masthead(page))
            .contains(&IndexEntry::new("see also Offshore wind FARMS report", 12)));

        let entries = parse_index_page(page);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|entry| entry.page_number <= 6));
    }

    #[test]
    fn test_dedupe_and_sort() {
        let entries = vec![
            IndexEntry::new("B", 7),
            IndexEntry::new("A", 3),
            IndexEntry::new("B", 7),
            IndexEntry::new("C", 3),
        ];
        assert_eq!(
            dedupe_and_sort(entries),
            vec![
                IndexEntry::new("A", 3),
                IndexEntry::new("C", 3),
                IndexEntry::new("B", 7),
            ]
        );
    }
}
