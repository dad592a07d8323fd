//! Typed catalog collections provisioned from a dataset source.

use std::collections::BTreeSet;

use catalog_data::{Collection, DatasetBundle, DatasetError, DatasetSource};
use thiserror::Error;
use tracing::info;

use crate::domain::{Article, Card, Faction, GameSet, Leader, Player};

/// Errors returned while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The dataset could not be read or a record failed validation.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    /// Two records in one collection share a slug.
    #[error("duplicate slug '{slug}' in {collection}")]
    DuplicateSlug {
        /// Collection holding the duplicate.
        collection: Collection,
        /// The repeated slug.
        slug: String,
    },
}

/// Every collection the stores are built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub cards: Vec<Card>,
    pub leaders: Vec<Leader>,
    pub players: Vec<Player>,
    pub factions: Vec<Faction>,
    pub sets: Vec<GameSet>,
    pub articles: Vec<Article>,
}

impl Catalog {
    /// Load the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled documents are themselves invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::Catalog;
    ///
    /// let catalog = Catalog::bundled()?;
    /// assert!(!catalog.cards.is_empty());
    /// # Ok::<(), catalog::CatalogLoadError>(())
    /// ```
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        Self::load(&DatasetSource::Bundled)
    }

    /// Load and validate every collection from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Dataset`] for unreadable documents or
    /// invalid records and [`CatalogLoadError::DuplicateSlug`] when slugs
    /// collide.
    pub fn load(source: &DatasetSource) -> Result<Self, CatalogLoadError> {
        let bundle = DatasetBundle::load(source)?;
        let catalog = Self::from_bundle(&bundle)?;
        info!(
            %source,
            cards = catalog.cards.len(),
            leaders = catalog.leaders.len(),
            players = catalog.players.len(),
            articles = catalog.articles.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Deserialise typed records from an already provisioned bundle.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn from_bundle(bundle: &DatasetBundle) -> Result<Self, CatalogLoadError> {
        let catalog = Self {
            cards: bundle.records(Collection::Cards)?,
            leaders: bundle.records(Collection::Leaders)?,
            players: bundle.records(Collection::Players)?,
            factions: bundle.records(Collection::Factions)?,
            sets: bundle.records(Collection::Sets)?,
            articles: bundle.records(Collection::Articles)?,
        };
        ensure_unique_slugs(Collection::Cards, catalog.cards.iter().map(Card::slug))?;
        ensure_unique_slugs(Collection::Leaders, catalog.leaders.iter().map(Leader::slug))?;
        ensure_unique_slugs(
            Collection::Articles,
            catalog.articles.iter().map(Article::slug),
        )?;
        Ok(catalog)
    }
}

fn ensure_unique_slugs<'a>(
    collection: Collection,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogLoadError> {
    let mut seen = BTreeSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(CatalogLoadError::DuplicateSlug {
                collection,
                slug: slug.to_owned(),
            });
        }
    }
    Ok(())
}
