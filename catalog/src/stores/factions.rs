//! Factions store.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::domain::{Card, Faction, FactionId, Selection};
use crate::pipeline::count_cards_by_faction;

/// Everything the factions view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionsSnapshot {
    pub factions: Vec<Faction>,
    pub selected_faction: Selection<FactionId>,
    /// `None` for `all` or an id that is not loaded.
    pub active_faction: Option<Faction>,
    pub cards_by_faction: BTreeMap<FactionId, usize>,
}

/// Owns the loaded factions, the faction cursor and the card join.
#[derive(Debug)]
pub struct FactionsStore {
    cards: Vec<Card>,
    snapshot: FactionsSnapshot,
    subscribers: Subscribers<FactionsSnapshot>,
}

impl FactionsStore {
    /// `cards` is the collection counted per faction.
    pub fn new(factions: Vec<Faction>, cards: Vec<Card>) -> Self {
        let mut store = Self {
            cards,
            snapshot: FactionsSnapshot {
                factions,
                selected_faction: Selection::All,
                active_faction: None,
                cards_by_faction: BTreeMap::new(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &FactionsSnapshot {
        &self.snapshot
    }

    pub fn active_faction(&self) -> Option<&Faction> {
        self.snapshot.active_faction.as_ref()
    }

    pub fn cards_by_faction(&self) -> &BTreeMap<FactionId, usize> {
        &self.snapshot.cards_by_faction
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FactionsSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn load_factions(&mut self, factions: Vec<Faction>) {
        debug!(count = factions.len(), "loading factions");
        self.snapshot.factions = factions;
        self.commit();
    }

    /// Replace the card collection used for counting.
    pub fn load_cards(&mut self, cards: Vec<Card>) {
        debug!(count = cards.len(), "loading cards for faction counts");
        self.cards = cards;
        self.commit();
    }

    pub fn set_selected_faction(&mut self, selection: Selection<FactionId>) {
        self.snapshot.selected_faction = selection;
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.active_faction = snapshot.selected_faction.as_only().and_then(|id| {
            snapshot
                .factions
                .iter()
                .find(|faction| faction.id() == *id)
                .cloned()
        });
        snapshot.cards_by_faction = count_cards_by_faction(&snapshot.factions, &self.cards);
        trace!(factions = snapshot.factions.len(), "recomputed faction views");
    }
}
