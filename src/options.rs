//! Configuration options for article extraction.
//!
//! The `Options` struct tunes the validation and metadata stages. The
//! index scan window and the accepted page-number range are fixed by the
//! document layout and live in [`crate::index`] as constants.

use crate::error::{Error, Result};

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use digest_extract::Options;
///
/// let options = Options {
///     max_article_chars: 20_000,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum body length (characters) an article may have and still be kept.
    ///
    /// Longer articles are discarded wholesale, never truncated.
    ///
    /// Default: `50000`
    pub max_article_chars: usize,

    /// Number of non-empty body lines searched for the "<N> words" anchor.
    ///
    /// Default: `20`
    pub metadata_scan_lines: usize,

    /// Author names to filter out during metadata extraction.
    ///
    /// Candidates containing any of these strings (case-insensitive) are
    /// dropped. Useful for desk names or agency bylines that should never be
    /// reported as a person.
    ///
    /// Default: `None`
    pub author_blacklist: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_article_chars: 50_000,
            metadata_scan_lines: 20,
            author_blacklist: None,
        }
    }
}

impl Options {
    /// Check that the options can drive an extraction run.
    pub fn validate(&self) -> Result<()> {
        if self.max_article_chars == 0 {
            return Err(Error::InvalidOptions(
                "max_article_chars must be greater than zero".to_string(),
            ));
        }
        if self.metadata_scan_lines == 0 {
            return Err(Error::InvalidOptions(
                "metadata_scan_lines must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an author candidate matches the blacklist.
    pub(crate) fn is_blacklisted_author(&self, author: &str) -> bool {
        let Some(ref blacklist) = self.author_blacklist else {
            return false;
        };
        let author = author.to_lowercase();
        blacklist
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .any(|entry| author.contains(&entry.trim().to_lowercase()))
    }
}
