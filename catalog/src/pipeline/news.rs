//! News filtering by tag and text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::text::{contains_folded, normalize_query};
use crate::domain::{Article, Selection};

/// Filter state for the news list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFilters {
    pub search_query: String,
    pub tag: Selection<String>,
}

/// Filter by exact tag and by title or excerpt text, newest first.
///
/// Publish dates compare as strings.
pub fn apply_news_filters(articles: &[Article], filters: &NewsFilters) -> Vec<Article> {
    let query = normalize_query(&filters.search_query);

    let mut result: Vec<Article> = articles
        .iter()
        .filter(|article| match filters.tag.as_only() {
            Some(tag) => article.has_tag(tag),
            None => true,
        })
        .filter(|article| {
            query.as_deref().is_none_or(|needle| {
                contains_folded(article.title(), needle) || contains_folded(article.excerpt(), needle)
            })
        })
        .cloned()
        .collect();

    result.sort_by(|left, right| right.published_at().cmp(left.published_at()));
    result
}

/// Distinct tags across `articles`, ascending.
pub fn available_tags(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .flat_map(Article::tags)
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
