//! Leaderboard store.

use serde::Serialize;
use tracing::{debug, trace};

use super::subscribers::{Subscribers, SubscriptionId};
use crate::domain::{Player, RatingMode, RatingSortField, Selection, SortDirection};
use crate::pipeline::{RatingFilters, apply_rating_filters, available_seasons, average_rating};

/// Roster size, visible rows and their mean rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub total_players: usize,
    pub visible_players: usize,
    /// Rounded mean over the visible rows; `0` when none are visible.
    pub average_rating: i32,
}

/// Everything the leaderboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSnapshot {
    pub players: Vec<Player>,
    pub filters: RatingFilters,
    pub leaderboard: Vec<Player>,
    /// `"all"` then the roster's seasons, newest first.
    pub available_seasons: Vec<String>,
    pub stats: RatingStats,
}

/// Owns the player roster and leaderboard filter state.
#[derive(Debug)]
pub struct RatingStore {
    snapshot: RatingSnapshot,
    subscribers: Subscribers<RatingSnapshot>,
}

impl RatingStore {
    pub fn new(players: Vec<Player>) -> Self {
        let mut store = Self {
            snapshot: RatingSnapshot {
                players,
                filters: RatingFilters::default(),
                leaderboard: Vec::new(),
                available_seasons: Vec::new(),
                stats: RatingStats::default(),
            },
            subscribers: Subscribers::default(),
        };
        store.recompute_seasons();
        store.recompute();
        store
    }

    pub fn snapshot(&self) -> &RatingSnapshot {
        &self.snapshot
    }

    pub fn filters(&self) -> &RatingFilters {
        &self.snapshot.filters
    }

    pub fn leaderboard(&self) -> &[Player] {
        &self.snapshot.leaderboard
    }

    pub fn available_seasons(&self) -> &[String] {
        &self.snapshot.available_seasons
    }

    pub fn stats(&self) -> RatingStats {
        self.snapshot.stats
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&RatingSnapshot) + 'static,
    {
        self.subscribers.subscribe(&self.snapshot, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn load_players(&mut self, players: Vec<Player>) {
        debug!(count = players.len(), "loading players");
        self.snapshot.players = players;
        self.recompute_seasons();
        self.commit();
    }

    pub fn set_season(&mut self, season: Selection<String>) {
        self.update_filters(|filters| filters.season = season);
    }

    pub fn set_mode(&mut self, mode: RatingMode) {
        self.update_filters(|filters| filters.mode = mode);
    }

    pub fn set_sorting(&mut self, field: RatingSortField, direction: SortDirection) {
        self.update_filters(|filters| {
            filters.sort_field = field;
            filters.sort_direction = direction;
        });
    }

    /// Flip the direction of the active field, or switch to `field`
    /// descending.
    pub fn toggle_sort(&mut self, field: RatingSortField) {
        self.update_filters(|filters| filters.toggle_sort(field));
    }

    pub fn reset_filters(&mut self) {
        debug!("resetting rating filters");
        self.update_filters(|filters| *filters = RatingFilters::default());
    }

    fn update_filters(&mut self, update: impl FnOnce(&mut RatingFilters)) {
        update(&mut self.snapshot.filters);
        self.commit();
    }

    fn commit(&mut self) {
        self.recompute();
        self.subscribers.notify(&self.snapshot);
    }

    // Seasons depend only on the roster.
    fn recompute_seasons(&mut self) {
        self.snapshot.available_seasons = available_seasons(&self.snapshot.players);
    }

    fn recompute(&mut self) {
        let snapshot = &mut self.snapshot;
        snapshot.leaderboard = apply_rating_filters(&snapshot.players, &snapshot.filters);
        snapshot.stats = RatingStats {
            total_players: snapshot.players.len(),
            visible_players: snapshot.leaderboard.len(),
            average_rating: average_rating(&snapshot.leaderboard),
        };
        trace!(
            total = snapshot.stats.total_players,
            visible = snapshot.stats.visible_players,
            "recomputed leaderboard"
        );
    }
}
