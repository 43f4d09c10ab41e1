//! Page segmentation.
//!
//! Splits the flat text of a digest into pages using the "Page X of Y"
//! banner that opens each page.

use tracing::debug;

use crate::patterns::PAGE_MARKER;
use crate::result::Page;

/// Split a document into pages at each page banner.
///
/// Each page runs from its own banner up to the next banner; the last page
/// runs to the end of the text. Non-blank text before the first banner is
/// kept at the head of the first page. A document with no banners becomes a
/// single page numbered 1. This never fails.
#[must_use]
pub fn segment(full_text: &str) -> Vec<Page> {
    split_pages(full_text).0
}

/// Like [`segment`], also reporting whether any usable banner was found.
///
/// Banners whose page number does not fit a `u32` are not usable.
pub(crate) fn split_pages(full_text: &str) -> (Vec<Page>, bool) {
    let markers: Vec<(usize, u32)> = PAGE_MARKER
        .captures_iter(full_text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
            Some((whole.start(), number))
        })
        .collect();

    if markers.is_empty() {
        debug!("no page markers found, using a single synthetic page");
        let page = Page {
            page_number: 1,
            text: full_text.to_string(),
        };
        return (vec![page], false);
    }

    let mut pages = Vec::with_capacity(markers.len());
    for (i, &(start, page_number)) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(full_text.len(), |&(next, _)| next);
        let from = if i == 0 && !full_text[..start].trim().is_empty() {
            0
        } else {
            start
        };
        pages.push(Page {
            page_number,
            text: full_text[from..end].to_string(),
        });
    }

    debug!(pages = pages.len(), "segmented document");
    (pages, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_splits_at_markers() {
        let text = "Page 1 of 3\nindex\nPage 2 of 3\nbody two\nPage 3 of 3\nbody three";
        let pages = segment(text);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text, "Page 1 of 3\nindex\n");
        assert_eq!(pages[1].text, "Page 2 of 3\nbody two\n");
        assert_eq!(pages[2].text, "Page 3 of 3\nbody three");
    }

    #[test]
    fn test_segment_without_markers_is_single_page() {
        let pages = segment("just some prose");
        assert_eq!(
            pages,
            vec![Page {
                page_number: 1,
                text: "just some prose".to_string()
            }]
        );
    }

    #[test]
    fn test_oversized_page_number_is_not_a_banner() {
        let (pages, found_markers) = split_pages("Page 99999999999 of 1\nbody");
        assert!(!found_markers);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);

        let (_, found_markers) = split_pages("Page 1 of 1\nbody");
        assert!(found_markers);
    }

    #[test]
    fn test_segment_empty_text() {
        let pages = segment("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.is_empty());
    }

    #[test]
    fn test_segment_keeps_preamble_on_first_page() {
        let pages = segment("Weekly Digest\nPage 1 of 2\nindex\nPage 2 of 2\nbody");
        assert_eq!(pages.len(), 2);
        assert!(pages[0].text.starts_with("Weekly Digest\nPage 1 of 2"));
    }

    #[test]
    fn test_segment_drops_blank_preamble() {
        let pages = segment("\n\n  Page 1 of 1\nonly");
        assert_eq!(pages[0].text, "Page 1 of 1\nonly");
    }
}
