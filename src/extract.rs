//! Extraction pipeline.
//!
//! Segment pages, find and parse the index (or read the first page
//! directly), assemble bodies, read metadata, strip boilerplate, validate.

use tracing::{debug, info};

use crate::assemble::assemble;
use crate::error::Result;
use crate::index::{dedupe_and_sort, extract_direct, locate_index_pages, parse_index_page};
use crate::metadata::extract_metadata;
use crate::options::Options;
use crate::pages::split_pages;
use crate::result::ExtractResult;
use crate::sanitize::sanitize;
use crate::validate::filter_articles;

/// Main entry point for article extraction.
pub(crate) fn extract_articles(text: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;

    let mut warnings = Vec::new();

    let (pages, found_markers) = split_pages(text);
    if !found_markers {
        warnings.push("No page markers found - treating document as a single page".to_string());
    }

    let index_pages = locate_index_pages(&pages);
    let index_page_numbers: Vec<u32> = index_pages.iter().map(|page| page.page_number).collect();
    debug!(index_pages = ?index_page_numbers, "located index pages");

    let used_fallback = index_pages.is_empty();
    let raw_entries = if used_fallback {
        warnings.push("No index page found - extracting titles from the first page".to_string());
        pages
            .first()
            .map(|page| extract_direct(&page.text))
            .unwrap_or_default()
    } else {
        index_pages
            .iter()
            .flat_map(|page| parse_index_page(&page.text))
            .collect()
    };

    let entries = dedupe_and_sort(raw_entries);
    debug!(entries = entries.len(), used_fallback, "parsed article index");
    if entries.is_empty() {
        warnings.push("No article entries found".to_string());
    }

    let mut articles = assemble(&entries, &pages);

    // Metadata first: its line offsets depend on the boilerplate still being there.
    for article in &mut articles {
        let metadata = extract_metadata(&article.text_content, &article.title, options);
        article.apply_metadata(metadata);
        article.text_content = sanitize(&article.text_content);
    }

    let (articles, discarded) = filter_articles(articles, options.max_article_chars);
    if discarded > 0 {
        warnings.push(format!(
            "Discarded {discarded} article(s) with an empty or oversized body"
        ));
    }

    info!(
        pages = pages.len(),
        articles = articles.len(),
        discarded,
        "article extraction finished"
    );

    Ok(ExtractResult {
        articles,
        entries,
        page_count: pages.len(),
        index_pages: index_page_numbers,
        used_fallback,
        discarded,
        warnings,
    })
}
