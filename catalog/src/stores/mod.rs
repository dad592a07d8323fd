//! Stateful stores that own a collection, its filter state and the views
//! derived from both.
//!
//! Stores are single-writer and synchronous: each mutation recomputes the
//! derived views, then notifies subscribers once with the new snapshot.

mod cards;
mod factions;
mod leaders;
mod news;
mod rating;
mod sets;
mod subscribers;
mod ui;

pub use cards::{CardsSnapshot, CardsStats, CardsStore};
pub use factions::{FactionsSnapshot, FactionsStore};
pub use leaders::{LeadersSnapshot, LeadersStore};
pub use news::{NewsSnapshot, NewsStore};
pub use rating::{RatingSnapshot, RatingStats, RatingStore};
pub use sets::{SetsSnapshot, SetsStore};
pub use subscribers::SubscriptionId;
pub use ui::{UiState, UiStore};

use crate::dataset::Catalog;

/// One owned instance of every store.
#[derive(Debug)]
pub struct CatalogStores {
    pub cards: CardsStore,
    pub leaders: LeadersStore,
    pub rating: RatingStore,
    pub factions: FactionsStore,
    pub sets: SetsStore,
    pub news: NewsStore,
    pub ui: UiStore,
}

impl CatalogStores {
    /// Build every store from `catalog`.
    ///
    /// The card query-string domain is computed here, once.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{Catalog, CatalogStores};
    ///
    /// let stores = CatalogStores::new(&Catalog::bundled()?);
    /// assert_eq!(stores.leaders.grouped_leaders().len(), 4);
    /// # Ok::<(), catalog::CatalogLoadError>(())
    /// ```
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            cards: CardsStore::new(catalog.cards.clone()),
            leaders: LeadersStore::new(catalog.leaders.clone()),
            rating: RatingStore::new(catalog.players.clone()),
            factions: FactionsStore::new(catalog.factions.clone(), catalog.cards.clone()),
            sets: SetsStore::new(catalog.sets.clone(), catalog.cards.clone()),
            news: NewsStore::new(catalog.articles.clone()),
            ui: UiStore::default(),
        }
    }
}
