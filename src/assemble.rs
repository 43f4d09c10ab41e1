//! Article body assembly from page spans.

use crate::result::{ExtractedArticle, IndexEntry, Page};

/// Separator placed between consecutive pages of one article.
const PAGE_SEPARATOR: &str = "\n\n";

/// Build one article per index entry from the pages it spans.
///
/// Entry `i` spans from its own page up to the page before entry `i + 1`
/// (the last entry runs to the last page). Page numbers missing from the
/// document are skipped. `entries` must already be sorted by page number.
#[must_use]
pub fn assemble(entries: &[IndexEntry], pages: &[Page]) -> Vec<ExtractedArticle> {
    let Some(last_page) = pages.last().map(|page| page.page_number) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let start = entry.page_number;
            let end = entries
                .get(i + 1)
                .map_or(last_page, |next| next.page_number.saturating_sub(1));

            let text_content = pages
                .iter()
                .filter(|page| (start..=end).contains(&page.page_number))
                .map(|page| page.text.as_str())
                .collect::<Vec<_>>()
                .join(PAGE_SEPARATOR);

            ExtractedArticle {
                title: entry.title.clone(),
                page_number: entry.page_number,
                text_content,
                ..ExtractedArticle::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(numbers: &[u32]) -> Vec<Page> {
        numbers
            .iter()
            .map(|&n| Page {
                page_number: n,
                text: format!("p{n}"),
            })
            .collect()
    }

    #[test]
    fn test_spans_run_to_next_entry() {
        let entries = vec![IndexEntry::new("A", 3), IndexEntry::new("B", 7)];
        let articles = assemble(&entries, &pages(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].text_content, "p3\n\np4\n\np5\n\np6");
        assert_eq!(articles[1].text_content, "p7\n\np8\n\np9\n\np10");
    }

    #[test]
    fn test_missing_pages_are_skipped() {
        let entries = vec![IndexEntry::new("A", 2)];
        let articles = assemble(&entries, &pages(&[1, 2, 5]));
        assert_eq!(articles[0].text_content, "p2\n\np5");
    }

    #[test]
    fn test_shared_start_page_leaves_first_empty() {
        let entries = vec![IndexEntry::new("A", 3), IndexEntry::new("B", 3)];
        let articles = assemble(&entries, &pages(&[1, 2, 3, 4]));
        assert!(articles[0].text_content.is_empty());
        assert_eq!(articles[1].text_content, "p3\n\np4");
    }

    #[test]
    fn test_no_pages() {
        assert!(assemble(&[IndexEntry::new("A", 2)], &[]).is_empty());
    }
}
