//! News article record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::validation::{validate_non_empty_field, validate_slug};

/// Input payload for [`Article::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ArticleDraft {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    /// ISO-8601 date or timestamp. Ordering compares these strings directly.
    pub published_at: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Slugs of related articles; unknown slugs are dropped when resolved.
    #[serde(default)]
    pub related_slugs: Vec<String>,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: u32,
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    image_url: String,
    published_at: String,
    author: String,
    tags: Vec<String>,
    related_slugs: Vec<String>,
}

impl Article {
    /// Validate and construct an article.
    pub fn new(draft: ArticleDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn excerpt(&self) -> &str {
        self.excerpt.as_str()
    }
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
    pub fn published_at(&self) -> &str {
        self.published_at.as_str()
    }
    pub fn author(&self) -> &str {
        self.author.as_str()
    }
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
    pub fn related_slugs(&self) -> &[String] {
        &self.related_slugs
    }

    /// Returns `true` when the article is tagged exactly `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

impl TryFrom<ArticleDraft> for Article {
    type Error = CatalogValidationError;

    fn try_from(draft: ArticleDraft) -> Result<Self, Self::Error> {
        let slug = validate_slug(draft.slug, "article.slug")?;
        let title = validate_non_empty_field(draft.title, "article.title")?;
        let published_at = validate_non_empty_field(draft.published_at, "article.published_at")?;

        Ok(Self {
            id: draft.id,
            slug,
            title,
            excerpt: draft.excerpt,
            content: draft.content,
            image_url: draft.image_url,
            published_at,
            author: draft.author,
            tags: draft.tags,
            related_slugs: draft.related_slugs,
        })
    }
}

impl<'de> Deserialize<'de> for Article {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ArticleDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
