//! Card filter state and the filter -> search -> sort pipeline.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::text::{compare_names, contains_folded, normalize_query};
use crate::domain::{Card, CardCell, CardProperty, CardSortField, FactionId, SetId, SortDirection};

/// Filter state for the card list.
///
/// Empty selections impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFilters {
    pub selected_sets: Vec<SetId>,
    pub selected_factions: Vec<FactionId>,
    pub selected_cells: Vec<CardCell>,
    /// A card must carry every selected property.
    pub selected_properties: Vec<CardProperty>,
    pub sort_field: CardSortField,
    pub sort_direction: SortDirection,
    pub search_query: String,
}

impl Default for CardFilters {
    fn default() -> Self {
        Self {
            selected_sets: Vec::new(),
            selected_factions: Vec::new(),
            selected_cells: Vec::new(),
            selected_properties: Vec::new(),
            sort_field: CardSortField::Name,
            sort_direction: SortDirection::Asc,
            search_query: String::new(),
        }
    }
}

impl CardFilters {
    /// Overwrite the fields present in `patch`, keeping the rest.
    pub fn merge(&mut self, patch: CardFiltersPatch) {
        let CardFiltersPatch {
            selected_sets,
            selected_factions,
            selected_cells,
            selected_properties,
            sort_field,
            sort_direction,
            search_query,
        } = patch;

        if let Some(value) = selected_sets {
            self.selected_sets = value;
        }
        if let Some(value) = selected_factions {
            self.selected_factions = value;
        }
        if let Some(value) = selected_cells {
            self.selected_cells = value;
        }
        if let Some(value) = selected_properties {
            self.selected_properties = value;
        }
        if let Some(value) = sort_field {
            self.sort_field = value;
        }
        if let Some(value) = sort_direction {
            self.sort_direction = value;
        }
        if let Some(value) = search_query {
            self.search_query = value;
        }
    }

    /// Return a copy with `patch` merged in.
    #[must_use]
    pub fn merged(mut self, patch: CardFiltersPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// A partial update to [`CardFilters`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFiltersPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_sets: Option<Vec<SetId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_factions: Option<Vec<FactionId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_cells: Option<Vec<CardCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_properties: Option<Vec<CardProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<CardSortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// Filter, search and sort `cards` without touching the input.
///
/// Predicates compose with AND; each is skipped when its selection is empty.
/// Neutral cards never match a non-empty faction selection. The sort is
/// stable, so cards with equal keys keep their input order.
///
/// # Examples
///
/// ```
/// use catalog::pipeline::{CardFilters, apply_card_filters};
///
/// let filtered = apply_card_filters(&[], &CardFilters::default());
/// assert!(filtered.is_empty());
/// ```
pub fn apply_card_filters(cards: &[Card], filters: &CardFilters) -> Vec<Card> {
    let query = normalize_query(&filters.search_query);

    let mut result: Vec<Card> = cards
        .iter()
        .filter(|card| matches_selection(&filters.selected_sets, &card.set_id()))
        .filter(|card| matches_faction(&filters.selected_factions, card.faction()))
        .filter(|card| matches_selection(&filters.selected_cells, &card.cell()))
        .filter(|card| card.has_all_properties(&filters.selected_properties))
        .filter(|card| {
            query.as_deref().is_none_or(|needle| {
                contains_folded(card.name(), needle) || contains_folded(card.name_en(), needle)
            })
        })
        .cloned()
        .collect();

    result.sort_by(|left, right| {
        filters
            .sort_direction
            .apply(compare_cards(left, right, filters.sort_field))
    });
    result
}

fn matches_selection<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn matches_faction(selected: &[FactionId], faction: Option<FactionId>) -> bool {
    if selected.is_empty() {
        return true;
    }
    faction.is_some_and(|id| selected.contains(&id))
}

fn compare_cards(left: &Card, right: &Card, field: CardSortField) -> Ordering {
    match field {
        CardSortField::Cost => left.cost().cmp(&right.cost()),
        CardSortField::Name => compare_names(left.name(), right.name()),
    }
}

/// Remove `value` when present, otherwise append it.
///
/// Selection order is preserved.
pub fn toggle_in_list<T: PartialEq>(items: &mut Vec<T>, value: T) {
    if let Some(position) = items.iter().position(|item| *item == value) {
        items.remove(position);
    } else {
        items.push(value);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::CardDraft;
    use crate::test_support::{card, neutral_card, sample_cards};

    #[fixture]
    fn cards() -> Vec<Card> {
        sample_cards()
    }

    fn slugs(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(Card::slug).collect()
    }

    #[rstest]
    fn combined_filters_narrow_to_guild_embassy(cards: Vec<Card>) {
        let filters = CardFilters {
            selected_sets: vec![SetId::Immortality, SetId::FanSietch],
            selected_factions: vec![FactionId::SpacingGuild],
            selected_cells: vec![CardCell::City],
            selected_properties: vec![CardProperty::Teamwork],
            sort_field: CardSortField::Cost,
            sort_direction: SortDirection::Desc,
            search_query: "guild".to_owned(),
        };

        let result = apply_card_filters(&cards, &filters);

        assert_eq!(slugs(&result), vec!["guild-embassy"]);
    }

    #[rstest]
    fn default_filters_keep_every_card_sorted_by_name(cards: Vec<Card>) {
        let result = apply_card_filters(&cards, &CardFilters::default());

        assert_eq!(
            slugs(&result),
            vec!["guild-embassy", "imperial-spy", "sietch-mentor"]
        );
    }

    #[rstest]
    fn property_filter_requires_every_selected_property(cards: Vec<Card>) {
        let filters = CardFilters {
            selected_properties: vec![CardProperty::PurchaseBonus, CardProperty::Teamwork],
            ..CardFilters::default()
        };

        assert!(apply_card_filters(&cards, &filters).is_empty());
    }

    #[rstest]
    fn neutral_cards_never_match_a_faction_selection(mut cards: Vec<Card>) {
        cards.push(neutral_card());
        let filters = CardFilters {
            selected_factions: FactionId::ALL.to_vec(),
            ..CardFilters::default()
        };

        let result = apply_card_filters(&cards, &filters);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|card| card.faction().is_some()));
    }

    #[rstest]
    #[case::asc(SortDirection::Asc, vec!["sietch-mentor", "imperial-spy", "guild-embassy"])]
    #[case::desc(SortDirection::Desc, vec!["guild-embassy", "imperial-spy", "sietch-mentor"])]
    fn sorts_by_cost(
        cards: Vec<Card>,
        #[case] direction: SortDirection,
        #[case] expected: Vec<&str>,
    ) {
        let filters = CardFilters {
            sort_field: CardSortField::Cost,
            sort_direction: direction,
            ..CardFilters::default()
        };

        assert_eq!(slugs(&apply_card_filters(&cards, &filters)), expected);
    }

    #[rstest]
    #[case::asc(SortDirection::Asc)]
    #[case::desc(SortDirection::Desc)]
    fn equal_costs_keep_input_order(#[case] direction: SortDirection) {
        let input = vec![
            card(10, "zeta-first", "Zeta", 3, SetId::Imperium, None, CardCell::Other, &[]),
            card(11, "alpha-second", "Alpha", 3, SetId::Imperium, None, CardCell::Other, &[]),
        ];
        let filters = CardFilters {
            sort_field: CardSortField::Cost,
            sort_direction: direction,
            ..CardFilters::default()
        };

        let result = apply_card_filters(&input, &filters);

        assert_eq!(slugs(&result), vec!["zeta-first", "alpha-second"]);
    }

    #[rstest]
    #[case::latin_name("EMBASSY", vec!["guild-embassy"])]
    #[case::whitespace("   ", vec!["guild-embassy", "imperial-spy", "sietch-mentor"])]
    #[case::no_match("harkonnen", vec![])]
    fn searches_names(cards: Vec<Card>, #[case] query: &str, #[case] expected: Vec<&str>) {
        let filters = CardFilters {
            search_query: query.to_owned(),
            ..CardFilters::default()
        };

        assert_eq!(slugs(&apply_card_filters(&cards, &filters)), expected);
    }

    fn localised_spy() -> Card {
        Card::new(CardDraft {
            id: 20,
            slug: "imperial-spy".to_owned(),
            name: "Имперский шпион".to_owned(),
            name_en: "Imperial Spy".to_owned(),
            cost: 3,
            set_id: SetId::RiseOfIx,
            faction: Some(FactionId::Emperor),
            cell: CardCell::Spy,
            properties: vec![],
            image_url: String::new(),
            is_official: true,
            text: String::new(),
        })
        .expect("valid card")
    }

    #[rstest]
    #[case::latin_only_in_name_en("imperial spy", vec!["imperial-spy"])]
    #[case::cyrillic_only_in_name("ШПИОН", vec!["imperial-spy"])]
    #[case::neither("embassy", vec![])]
    fn searches_localised_and_latin_names(#[case] query: &str, #[case] expected: Vec<&str>) {
        let cards = vec![localised_spy(), neutral_card()];
        let filters = CardFilters {
            search_query: query.to_owned(),
            ..CardFilters::default()
        };

        assert_eq!(slugs(&apply_card_filters(&cards, &filters)), expected);
    }

    #[rstest]
    fn filtering_leaves_input_untouched(cards: Vec<Card>) {
        let before = cards.clone();
        let filters = CardFilters {
            sort_direction: SortDirection::Desc,
            ..CardFilters::default()
        };

        let _ = apply_card_filters(&cards, &filters);

        assert_eq!(cards, before);
    }

    #[rstest]
    fn merge_keeps_absent_fields() {
        let mut filters = CardFilters {
            selected_sets: vec![SetId::Uprising],
            search_query: "spy".to_owned(),
            ..CardFilters::default()
        };

        filters.merge(CardFiltersPatch {
            sort_field: Some(CardSortField::Cost),
            selected_sets: Some(vec![]),
            ..CardFiltersPatch::default()
        });

        assert!(filters.selected_sets.is_empty());
        assert_eq!(filters.sort_field, CardSortField::Cost);
        assert_eq!(filters.search_query, "spy");
    }

    #[rstest]
    fn toggle_appends_then_removes() {
        let mut items = vec![SetId::Imperium];

        toggle_in_list(&mut items, SetId::Uprising);
        assert_eq!(items, vec![SetId::Imperium, SetId::Uprising]);

        toggle_in_list(&mut items, SetId::Imperium);
        assert_eq!(items, vec![SetId::Uprising]);
    }
}
