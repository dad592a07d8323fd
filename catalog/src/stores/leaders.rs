//! Leaders store.

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::domain::{FactionId, Leader, LeadersGroupBy, Selection, SetId};
use crate::pipeline::{LeadersFilters, LeadersGroup, apply_leaders_filters, group_leaders_by_faction};

/// Everything the leaders view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadersSnapshot {
    pub leaders: Vec<Leader>,
    pub filters: LeadersFilters,
    pub filtered_leaders: Vec<Leader>,
    /// Grouping of `filtered_leaders`; always four groups.
    pub grouped_leaders: Vec<LeadersGroup>,
}

/// Owns the loaded leaders and their filter state.
#[derive(Debug)]
pub struct LeadersStore {
    snapshot: LeadersSnapshot,
    subscribers: Subscribers<LeadersSnapshot>,
}

impl LeadersStore {
    pub fn new(leaders: Vec<Leader>) -> Self {
        let mut store = Self {
            snapshot: LeadersSnapshot {
                leaders,
                filters: LeadersFilters::default(),
                filtered_leaders: Vec::new(),
                grouped_leaders: Vec::new(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &LeadersSnapshot {
        &self.snapshot
    }

    pub fn filters(&self) -> &LeadersFilters {
        &self.snapshot.filters
    }

    pub fn filtered_leaders(&self) -> &[Leader] {
        &self.snapshot.filtered_leaders
    }

    pub fn grouped_leaders(&self) -> &[LeadersGroup] {
        &self.snapshot.grouped_leaders
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LeadersSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn load_leaders(&mut self, leaders: Vec<Leader>) {
        debug!(count = leaders.len(), "loading leaders");
        self.snapshot.leaders = leaders;
        self.commit();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update_filters(|filters| filters.search_query = query);
    }

    pub fn set_faction(&mut self, faction: Selection<FactionId>) {
        self.update_filters(|filters| filters.faction = faction);
    }

    pub fn set_set(&mut self, set_id: Selection<SetId>) {
        self.update_filters(|filters| filters.set_id = set_id);
    }

    pub fn set_group_by(&mut self, group_by: LeadersGroupBy) {
        self.update_filters(|filters| filters.group_by = group_by);
    }

    pub fn reset_filters(&mut self) {
        debug!("resetting leader filters");
        self.update_filters(|filters| *filters = LeadersFilters::default());
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut LeadersFilters)) {
        update(&mut self.snapshot.filters);
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.filtered_leaders = apply_leaders_filters(&snapshot.leaders, &snapshot.filters);
        snapshot.grouped_leaders = group_leaders_by_faction(&snapshot.filtered_leaders);
        trace!(
            total = snapshot.leaders.len(),
            filtered = snapshot.filtered_leaders.len(),
            "recomputed leader views"
        );
    }
}
