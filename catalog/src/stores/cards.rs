//! Card catalog store.

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::domain::{Card, CardCell, CardProperty, CardSortField, FactionId, SetId, SortDirection};
use crate::pipeline::{
    CardFilterDomain, CardFilters, CardFiltersPatch, SearchParams, apply_card_filters,
    card_filters_to_search_params, search_params_to_card_filters, toggle_in_list,
};

/// Sizes of the loaded and filtered card lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CardsStats {
    pub total: usize,
    pub filtered: usize,
}

/// Everything a card list view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsSnapshot {
    pub cards: Vec<Card>,
    pub filters: CardFilters,
    pub filtered_cards: Vec<Card>,
    pub stats: CardsStats,
}

/// Owns the loaded cards and their filter state.
///
/// Every mutation recomputes the filtered view and stats before
/// subscribers are notified.
///
/// # Examples
///
/// ```
/// use catalog::domain::SetId;
/// use catalog::stores::CardsStore;
///
/// let mut store = CardsStore::new(Vec::new());
/// store.toggle_set(SetId::Uprising);
/// assert_eq!(store.search_params().to_string(), "sets=uprising");
/// ```
#[derive(Debug)]
pub struct CardsStore {
    domain: CardFilterDomain,
    snapshot: CardsSnapshot,
    subscribers: Subscribers<CardsSnapshot>,
}

impl CardsStore {
    /// Build a store whose query-string domain is taken from `cards`.
    pub fn new(cards: Vec<Card>) -> Self {
        let domain = CardFilterDomain::from_cards(&cards);
        Self::with_domain(cards, domain)
    }

    /// Build a store with an explicit query-string domain.
    pub fn with_domain(cards: Vec<Card>, domain: CardFilterDomain) -> Self {
        let mut store = Self {
            domain,
            snapshot: CardsSnapshot {
                cards,
                filters: CardFilters::default(),
                filtered_cards: Vec::new(),
                stats: CardsStats::default(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &CardsSnapshot {
        &self.snapshot
    }

    pub fn cards(&self) -> &[Card] {
        &self.snapshot.cards
    }

    pub fn filters(&self) -> &CardFilters {
        &self.snapshot.filters
    }

    pub fn filtered_cards(&self) -> &[Card] {
        &self.snapshot.filtered_cards
    }

    pub fn stats(&self) -> CardsStats {
        self.snapshot.stats
    }

    /// Tokens accepted when decoding query parameters.
    pub fn domain(&self) -> &CardFilterDomain {
        &self.domain
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CardsSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Replace the whole collection. The query-string domain is unchanged.
    pub fn load_cards(&mut self, cards: Vec<Card>) {
        debug!(count = cards.len(), "loading cards");
        self.snapshot.cards = cards;
        self.commit();
    }

    /// Merge a partial update into the filters.
    pub fn set_filters(&mut self, patch: CardFiltersPatch) {
        self.update_filters(|filters| filters.merge(patch));
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update_filters(|filters| filters.search_query = query);
    }

    pub fn set_sorting(&mut self, field: CardSortField, direction: SortDirection) {
        self.update_filters(|filters| {
            filters.sort_field = field;
            filters.sort_direction = direction;
        });
    }

    pub fn toggle_set(&mut self, set_id: SetId) {
        self.update_filters(|filters| toggle_in_list(&mut filters.selected_sets, set_id));
    }

    pub fn toggle_faction(&mut self, faction: FactionId) {
        self.update_filters(|filters| toggle_in_list(&mut filters.selected_factions, faction));
    }

    pub fn toggle_cell(&mut self, cell: CardCell) {
        self.update_filters(|filters| toggle_in_list(&mut filters.selected_cells, cell));
    }

    pub fn toggle_property(&mut self, property: CardProperty) {
        self.update_filters(|filters| toggle_in_list(&mut filters.selected_properties, property));
    }

    pub fn reset_filters(&mut self) {
        debug!("resetting card filters");
        self.update_filters(|filters| *filters = CardFilters::default());
    }

    /// Replace the filters with defaults overlaid by the decoded parameters.
    ///
    /// A missing `q` clears the search.
    pub fn sync_filters_from_search_params(&mut self, params: &SearchParams) {
        let mut patch = search_params_to_card_filters(params, &self.domain);
        patch.search_query.get_or_insert_with(String::new);
        self.update_filters(|filters| *filters = CardFilters::default().merged(patch));
    }

    /// The current filters as query parameters.
    pub fn search_params(&self) -> SearchParams {
        card_filters_to_search_params(&self.snapshot.filters)
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut CardFilters)) {
        update(&mut self.snapshot.filters);
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.filtered_cards = apply_card_filters(&snapshot.cards, &snapshot.filters);
        snapshot.stats = CardsStats {
            total: snapshot.cards.len(),
            filtered: snapshot.filtered_cards.len(),
        };
        trace!(
            total = snapshot.stats.total,
            filtered = snapshot.stats.filtered,
            "recomputed card views"
        );
    }
}
