//! Article detail lookup.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Article;

/// No article is published under the requested slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("article not found: {slug}")]
pub struct ArticleNotFound {
    /// The slug that was looked up.
    pub slug: String,
}

/// An article together with its resolvable related articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub article: Article,
    /// In `related_slugs` order; unresolved slugs are skipped.
    pub related_articles: Vec<Article>,
}

/// Find the article published under `slug` and resolve its related links.
///
/// # Errors
///
/// Returns [`ArticleNotFound`] when no article has the slug. Broken related
/// links are not errors.
pub fn find_article_page(articles: &[Article], slug: &str) -> Result<ArticlePage, ArticleNotFound> {
    let article = find_by_slug(articles, slug).ok_or_else(|| ArticleNotFound {
        slug: slug.to_owned(),
    })?;

    let related_articles = article
        .related_slugs()
        .iter()
        .filter_map(|related| find_by_slug(articles, related))
        .cloned()
        .collect();

    Ok(ArticlePage {
        article: article.clone(),
        related_articles,
    })
}

fn find_by_slug<'a>(articles: &'a [Article], slug: &str) -> Option<&'a Article> {
    articles.iter().find(|article| article.slug() == slug)
}
