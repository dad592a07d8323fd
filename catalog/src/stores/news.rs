//! News store.

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::articles::{ArticleNotFound, ArticlePage, find_article_page};
use crate::domain::{Article, Selection};
use crate::pipeline::{NewsFilters, apply_news_filters, available_tags};

/// Everything the news list renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSnapshot {
    pub articles: Vec<Article>,
    pub filters: NewsFilters,
    pub filtered_articles: Vec<Article>,
    /// Distinct tags, ascending.
    pub available_tags: Vec<String>,
}

/// Owns the loaded articles and the news filter state.
#[derive(Debug)]
pub struct NewsStore {
    snapshot: NewsSnapshot,
    subscribers: Subscribers<NewsSnapshot>,
}

impl NewsStore {
    pub fn new(articles: Vec<Article>) -> Self {
        let mut store = Self {
            snapshot: NewsSnapshot {
                articles,
                filters: NewsFilters::default(),
                filtered_articles: Vec::new(),
                available_tags: Vec::new(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &NewsSnapshot {
        &self.snapshot
    }

    pub fn filters(&self) -> &NewsFilters {
        &self.snapshot.filters
    }

    pub fn filtered_articles(&self) -> &[Article] {
        &self.snapshot.filtered_articles
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NewsSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn load_articles(&mut self, articles: Vec<Article>) {
        debug!(count = articles.len(), "loading articles");
        self.snapshot.articles = articles;
        self.commit();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update_filters(|filters| filters.search_query = query);
    }

    pub fn set_tag(&mut self, tag: Selection<String>) {
        self.update_filters(|filters| filters.tag = tag);
    }

    pub fn reset_filters(&mut self) {
        debug!("resetting news filters");
        self.update_filters(|filters| *filters = NewsFilters::default());
    }

    /// Look up an article page among the loaded articles.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleNotFound`] when no loaded article has `slug`.
    pub fn article_page(&self, slug: &str) -> Result<ArticlePage, ArticleNotFound> {
        find_article_page(&self.snapshot.articles, slug)
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut NewsFilters)) {
        update(&mut self.snapshot.filters);
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.filtered_articles = apply_news_filters(&snapshot.articles, &snapshot.filters);
        snapshot.available_tags = available_tags(&snapshot.articles);
        trace!(
            total = snapshot.articles.len(),
            filtered = snapshot.filtered_articles.len(),
            "recomputed news views"
        );
    }
}
