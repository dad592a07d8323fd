//! Presentation flags that are not tied to a collection.

use serde::Serialize;
use tracing::trace;

use super::subscribers::{Subscribers, SubscriptionId};

/// Open panels and the card shown in the detail modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub is_mobile_menu_open: bool,
    pub is_filters_panel_open: bool,
    pub active_card_id: Option<u32>,
}

/// Owns [`UiState`].
#[derive(Debug, Default)]
pub struct UiStore {
    state: UiState,
    subscribers: Subscribers<UiState>,
}

impl UiStore {
    pub fn new(initial: UiState) -> Self {
        Self {
            state: initial,
            subscribers: Subscribers::default(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Call `callback` now and after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&UiState) + 'static,
    {
        self.subscribers.subscribe(&self.state, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn open_mobile_menu(&mut self) {
        self.update(|state| state.is_mobile_menu_open = true);
    }

    pub fn close_mobile_menu(&mut self) {
        self.update(|state| state.is_mobile_menu_open = false);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.update(|state| state.is_mobile_menu_open = !state.is_mobile_menu_open);
    }

    pub fn open_filters_panel(&mut self) {
        self.update(|state| state.is_filters_panel_open = true);
    }

    pub fn close_filters_panel(&mut self) {
        self.update(|state| state.is_filters_panel_open = false);
    }

    pub fn toggle_filters_panel(&mut self) {
        self.update(|state| state.is_filters_panel_open = !state.is_filters_panel_open);
    }

    pub fn open_card_modal(&mut self, card_id: u32) {
        self.update(|state| state.active_card_id = Some(card_id));
    }

    pub fn close_card_modal(&mut self) {
        self.update(|state| state.active_card_id = None);
    }

    /// Close everything.
    pub fn reset(&mut self) {
        self.update(|state| *state = UiState::default());
    }

    fn update(&mut self, change: impl FnOnce(&mut UiState)) {
        change(&mut self.state);
        trace!(state = ?self.state, "ui state changed");
        self.subscribers.notify(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn toggles_and_resets() {
        let mut store = UiStore::default();

        store.toggle_mobile_menu();
        store.open_filters_panel();
        store.open_card_modal(7);
        assert_eq!(
            store.state(),
            UiState {
                is_mobile_menu_open: true,
                is_filters_panel_open: true,
                active_card_id: Some(7),
            }
        );

        store.toggle_filters_panel();
        store.close_card_modal();
        store.close_mobile_menu();
        assert_eq!(store.state(), UiState::default());

        store.open_mobile_menu();
        store.reset();
        assert_eq!(store.state(), UiState::default());
    }
}
