//! Result types for extraction output.
//!
//! This module defines the records produced by each pipeline stage and the
//! structured output handed back to the caller.

use serde::{Deserialize, Serialize};

/// One page of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number taken from the page banner (or 1 for a synthetic page).
    pub page_number: u32,

    /// Raw text of the page, banner included.
    pub text: String,
}

/// A title/page pair recovered from an index page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Article title as listed on the index page.
    pub title: String,

    /// Page on which the article body starts.
    pub page_number: u32,
}

impl IndexEntry {
    pub(crate) fn new(title: impl Into<String>, page_number: u32) -> Self {
        Self {
            title: title.into(),
            page_number,
        }
    }
}

/// Metadata inferred from the block around the "<N> words" anchor line.
///
/// All fields are optional: a body without the anchor simply has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Word count stated by the publisher.
    pub word_count: Option<u32>,

    /// Publication date as `YYYY-MM-DD`, or the raw line when unparseable.
    pub publish_date: Option<String>,

    /// Byline author.
    pub author: Option<String>,

    /// Originating outlet (e.g., "Reuters").
    pub source: Option<String>,
}

/// An article extracted from the digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    /// Title from the index page.
    pub title: String,

    /// First page of the article body.
    pub page_number: u32,

    /// Article body. Holds the raw page concatenation until metadata has
    /// been read, then the sanitized body.
    pub text_content: String,

    /// Word count stated by the publisher.
    pub word_count: Option<u32>,

    /// Publication date as `YYYY-MM-DD`, or the raw line when unparseable.
    pub publish_date: Option<String>,

    /// Byline author.
    pub author: Option<String>,

    /// Originating outlet.
    pub source: Option<String>,
}

impl ExtractedArticle {
    /// Copy inferred metadata onto the article.
    pub fn apply_metadata(&mut self, metadata: ArticleMetadata) {
        self.word_count = metadata.word_count;
        self.publish_date = metadata.publish_date;
        self.author = metadata.author;
        self.source = metadata.source;
    }
}

/// Result of running the extraction pipeline over one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Validated articles, ascending by page number.
    pub articles: Vec<ExtractedArticle>,

    /// Deduplicated, sorted index entries the articles were assembled from.
    pub entries: Vec<IndexEntry>,

    /// Number of pages the document was segmented into.
    pub page_count: usize,

    /// Page numbers classified as index pages.
    pub index_pages: Vec<u32>,

    /// Whether entries came from direct extraction on the first page.
    pub used_fallback: bool,

    /// Articles dropped by validation (empty or oversized body).
    pub discarded: usize,

    /// Non-fatal issues encountered during extraction.
    pub warnings: Vec<String>,
}
