//! Final article validation.

use tracing::debug;

use crate::result::ExtractedArticle;

/// Keep articles whose body is non-empty and at most `max_chars` characters.
///
/// Oversized articles are dropped whole, never truncated. Returns the kept
/// articles and the number discarded.
#[must_use]
pub fn filter_articles(
    articles: Vec<ExtractedArticle>,
    max_chars: usize,
) -> (Vec<ExtractedArticle>, usize) {
    let total = articles.len();
    let kept: Vec<ExtractedArticle> = articles
        .into_iter()
        .filter(|article| {
            let length = article.text_content.chars().count();
            let keep = length > 0 && length <= max_chars;
            if !keep {
                debug!(title = %article.title, length, "discarding article");
            }
            keep
        })
        .collect();

    let discarded = total - kept.len();
    (kept, discarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, body: String) -> ExtractedArticle {
        ExtractedArticle {
            title: title.to_string(),
            page_number: 2,
            text_content: body,
            ..ExtractedArticle::default()
        }
    }

    #[test]
    fn test_oversized_article_discarded() {
        let articles = vec![
            article("Big", "x".repeat(60_000)),
            article("Small", "fine".to_string()),
        ];
        let (kept, discarded) = filter_articles(articles, 50_000);

        assert_eq!(discarded, 1);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Small");
    }

    #[test]
    fn test_empty_article_discarded() {
        let (kept, discarded) = filter_articles(vec![article("Empty", String::new())], 50_000);
        assert!(kept.is_empty());
        assert_eq!(discarded, 1);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let (kept, discarded) = filter_articles(vec![article("Edge", "é".repeat(50_000))], 50_000);
        assert_eq!(kept.len(), 1);
        assert_eq!(discarded, 0);
    }
}
