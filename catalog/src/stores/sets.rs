//! Game sets store.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::domain::{Card, GameSet, Selection, SetId};
use crate::pipeline::count_cards_by_set;

/// Everything the sets view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetsSnapshot {
    pub sets: Vec<GameSet>,
    pub active_set_id: Selection<SetId>,
    /// `None` for `all` or an id that is not loaded.
    pub active_set: Option<GameSet>,
    pub card_count_by_set: BTreeMap<SetId, usize>,
}

/// Owns the loaded sets, the set cursor and the card join.
#[derive(Debug)]
pub struct SetsStore {
    cards: Vec<Card>,
    snapshot: SetsSnapshot,
    subscribers: Subscribers<SetsSnapshot>,
}

impl SetsStore {
    /// `cards` is the collection counted per set.
    pub fn new(sets: Vec<GameSet>, cards: Vec<Card>) -> Self {
        let mut store = Self {
            cards,
            snapshot: SetsSnapshot {
                sets,
                active_set_id: Selection::All,
                active_set: None,
                card_count_by_set: BTreeMap::new(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &SetsSnapshot {
        &self.snapshot
    }

    pub fn active_set(&self) -> Option<&GameSet> {
        self.snapshot.active_set.as_ref()
    }

    pub fn card_count_by_set(&self) -> &BTreeMap<SetId, usize> {
        &self.snapshot.card_count_by_set
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SetsSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn load_sets(&mut self, sets: Vec<GameSet>) {
        debug!(count = sets.len(), "loading sets");
        self.snapshot.sets = sets;
        self.commit();
    }

    /// Replace the card collection used for counting.
    pub fn load_cards(&mut self, cards: Vec<Card>) {
        debug!(count = cards.len(), "loading cards for set counts");
        self.cards = cards;
        self.commit();
    }

    pub fn set_active_set(&mut self, selection: Selection<SetId>) {
        self.snapshot.active_set_id = selection;
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.active_set = snapshot
            .active_set_id
            .as_only()
            .and_then(|id| snapshot.sets.iter().find(|set| set.id() == *id).cloned());
        snapshot.card_count_by_set = count_cards_by_set(&snapshot.sets, &self.cards);
        trace!(sets = snapshot.sets.len(), "recomputed set views");
    }
}
