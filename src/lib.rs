//! # digest-extract
//!
//! Article extraction for multi-article PDF digests (wire-service
//! compilations and similar), working on text that a prior stage has
//! already pulled out of the PDF.
//!
//! Given the page-concatenated text of a digest, the library finds the
//! index pages listing article titles with page numbers, maps each title to
//! the pages holding its body, reads word count, date, author and source
//! from the metadata block at the top of each body, strips repeated
//! boilerplate and drops invalid results.
//!
//! ## Quick Start
//!
//! ```rust
//! use digest_extract::extract;
//!
//! let text = "Page 1 of 3\nHARVEST OUTLOOK ..... 2\n\
//!             Page 2 of 3\nJane Doe\n512 words\n4 June 2025\nReuters\nCrops look strong.\n\
//!             Page 3 of 3\nYields are expected to rise.";
//!
//! let result = extract(text)?;
//! assert_eq!(result.articles.len(), 1);
//! assert_eq!(result.articles[0].title, "HARVEST OUTLOOK");
//! assert_eq!(result.articles[0].publish_date.as_deref(), Some("2025-06-04"));
//! # Ok::<(), digest_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Pages**: split on "Page X of Y" banners
//! 2. **Index**: detect index pages among the first ten and parse them with a
//!    cascade of strategies, or read the first page directly
//! 3. **Assembly**: each article spans up to the page before the next one
//! 4. **Metadata**: fields located relative to the "<N> words" line
//! 5. **Sanitizing**: masthead and footer boilerplate removed
//! 6. **Validation**: empty and oversized bodies dropped
//!
//! Malformed input never fails: every stage degrades to an empty or
//! fallback result, and the caller learns about it through
//! [`ExtractResult::warnings`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Page segmentation.
pub mod pages;

/// Index page detection and parsing.
pub mod index;

/// Article body assembly.
pub mod assemble;

/// Metadata extraction relative to the word-count anchor.
pub mod metadata;

/// Boilerplate removal.
pub mod sanitize;

/// Article validation.
pub mod validate;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ArticleMetadata, ExtractResult, ExtractedArticle, IndexEntry, Page};

/// Extracts articles from digest text using default options.
///
/// # Arguments
///
/// * `text` - The page-concatenated document text
///
/// # Returns
///
/// Returns `Ok(ExtractResult)` holding the articles found, which may be
/// none. With default options this never returns `Err`.
///
/// # Example
///
/// ```rust
/// use digest_extract::extract;
///
/// let result = extract("no index, no page banners")?;
/// assert!(result.articles.is_empty());
/// # Ok::<(), digest_extract::Error>(())
/// ```
pub fn extract(text: &str) -> Result<ExtractResult> {
    extract_with_options(text, &Options::default())
}

/// Extracts articles from digest text with custom options.
///
/// Returns `Error::InvalidOptions` when the options cannot drive a run.
///
/// # Example
///
/// ```rust
/// use digest_extract::{extract_with_options, Options};
///
/// let options = Options {
///     max_article_chars: 10_000,
///     ..Options::default()
/// };
/// let result = extract_with_options("Page 1 of 1\nnothing here", &options)?;
/// assert_eq!(result.page_count, 1);
/// # Ok::<(), digest_extract::Error>(())
/// ```
pub fn extract_with_options(text: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_articles(text, options)
}

/// Extracts articles from raw text-dump bytes with automatic encoding
/// detection.
///
/// The bytes are decoded as UTF-8, as UTF-16 when a byte order mark says
/// so, or as Windows-1252 when they are not valid UTF-8. Invalid characters
/// are replaced with � rather than causing errors.
///
/// # Example
///
/// ```rust
/// use digest_extract::extract_bytes;
///
/// let result = extract_bytes(b"Page 1 of 1\nCaf\xE9 society")?;
/// assert_eq!(result.page_count, 1);
/// # Ok::<(), digest_extract::Error>(())
/// ```
pub fn extract_bytes(bytes: &[u8]) -> Result<ExtractResult> {
    extract(&encoding::transcode_to_utf8(bytes))
}

/// Extracts articles from raw bytes with custom options and automatic
/// encoding detection.
pub fn extract_bytes_with_options(bytes: &[u8], options: &Options) -> Result<ExtractResult> {
    extract_with_options(&encoding::transcode_to_utf8(bytes), options)
}
