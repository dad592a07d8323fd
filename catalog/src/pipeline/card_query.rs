//! Query-string round trip for [`CardFilters`].
//!
//! Keys: `sets`, `factions`, `cells`, `props` (comma-joined tokens),
//! `sortField`, `sortDirection` and `q`. Encoding omits empty selections,
//! default sort settings and a blank query. Decoding yields a
//! [`CardFiltersPatch`] in which absent keys stay `None`, and silently drops
//! tokens outside the [`CardFilterDomain`].

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::cards::{CardFilters, CardFiltersPatch};
use super::search_params::SearchParams;
use crate::domain::{Card, CardCell, CardProperty, CardSortField, FactionId, SetId, SortDirection};

/// Query key for selected sets.
pub const SETS_KEY: &str = "sets";
/// Query key for selected factions.
pub const FACTIONS_KEY: &str = "factions";
/// Query key for selected cells.
pub const CELLS_KEY: &str = "cells";
/// Query key for selected properties.
pub const PROPERTIES_KEY: &str = "props";
/// Query key for the sort field.
pub const SORT_FIELD_KEY: &str = "sortField";
/// Query key for the sort direction.
pub const SORT_DIRECTION_KEY: &str = "sortDirection";
/// Query key for the free-text search.
pub const SEARCH_KEY: &str = "q";

const LIST_SEPARATOR: &str = ",";

/// Values actually present in a card collection.
///
/// Query tokens outside this domain are discarded on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFilterDomain {
    pub sets: BTreeSet<SetId>,
    pub factions: BTreeSet<FactionId>,
    pub cells: BTreeSet<CardCell>,
    pub properties: BTreeSet<CardProperty>,
}

impl CardFilterDomain {
    /// Collect the sets, factions, cells and properties used by `cards`.
    ///
    /// Neutral cards contribute no faction.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut domain = Self::default();
        for card in cards {
            domain.sets.insert(card.set_id());
            if let Some(faction) = card.faction() {
                domain.factions.insert(faction);
            }
            domain.cells.insert(card.cell());
            domain.properties.extend(card.properties().iter().copied());
        }
        domain
    }
}

/// Encode `filters` as query parameters.
///
/// # Examples
///
/// ```
/// use catalog::domain::{CardSortField, SetId};
/// use catalog::pipeline::{CardFilters, card_filters_to_search_params};
///
/// let filters = CardFilters {
///     selected_sets: vec![SetId::Imperium, SetId::Uprising],
///     sort_field: CardSortField::Cost,
///     search_query: "  spy ".to_owned(),
///     ..CardFilters::default()
/// };
///
/// let params = card_filters_to_search_params(&filters);
/// assert_eq!(params.to_string(), "sets=imperium%2Cuprising&sortField=cost&q=spy");
/// ```
pub fn card_filters_to_search_params(filters: &CardFilters) -> SearchParams {
    let defaults = CardFilters::default();
    let mut params = SearchParams::new();

    set_list(&mut params, SETS_KEY, &filters.selected_sets);
    set_list(&mut params, FACTIONS_KEY, &filters.selected_factions);
    set_list(&mut params, CELLS_KEY, &filters.selected_cells);
    set_list(&mut params, PROPERTIES_KEY, &filters.selected_properties);

    if filters.sort_field != defaults.sort_field {
        params.set(SORT_FIELD_KEY, filters.sort_field.as_str());
    }
    if filters.sort_direction != defaults.sort_direction {
        params.set(SORT_DIRECTION_KEY, filters.sort_direction.as_str());
    }

    let query = filters.search_query.trim();
    if !query.is_empty() {
        params.set(SEARCH_KEY, query);
    }

    params
}

fn set_list<T: Display>(params: &mut SearchParams, key: &str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    params.set(key, joined);
}

/// Decode query parameters into a partial filter update.
///
/// Never fails: unknown or out-of-domain tokens are dropped.
pub fn search_params_to_card_filters(
    params: &SearchParams,
    domain: &CardFilterDomain,
) -> CardFiltersPatch {
    CardFiltersPatch {
        selected_sets: parse_list(params, SETS_KEY, &domain.sets),
        selected_factions: parse_list(params, FACTIONS_KEY, &domain.factions),
        selected_cells: parse_list(params, CELLS_KEY, &domain.cells),
        selected_properties: parse_list(params, PROPERTIES_KEY, &domain.properties),
        sort_field: parse_token::<CardSortField>(params, SORT_FIELD_KEY),
        sort_direction: parse_token::<SortDirection>(params, SORT_DIRECTION_KEY),
        search_query: params.get(SEARCH_KEY).map(|query| query.trim().to_owned()),
    }
}

fn parse_list<T>(params: &SearchParams, key: &str, allowed: &BTreeSet<T>) -> Option<Vec<T>>
where
    T: FromStr + Ord,
{
    let raw = params.get(key)?;
    let values = raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<T>() {
            Ok(value) if allowed.contains(&value) => Some(value),
            _ => {
                debug!(key, token, "discarding query token outside the card domain");
                None
            }
        })
        .collect();
    Some(values)
}

fn parse_token<T: FromStr>(params: &SearchParams, key: &str) -> Option<T> {
    let raw = params.get(key)?;
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        debug!(key, token = raw, "discarding unknown query token");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::{neutral_card, sample_cards};

    #[fixture]
    fn domain() -> CardFilterDomain {
        CardFilterDomain::from_cards(&sample_cards())
    }

    #[rstest]
    fn domain_reflects_loaded_cards(domain: CardFilterDomain) {
        assert_eq!(
            domain.sets,
            BTreeSet::from([SetId::RiseOfIx, SetId::Immortality, SetId::FanSietch])
        );
        assert!(!domain.factions.contains(&FactionId::BeneGesserit));
        assert!(domain.properties.contains(&CardProperty::Choam));
    }

    #[rstest]
    fn neutral_cards_add_no_faction() {
        let domain = CardFilterDomain::from_cards(&[neutral_card()]);

        assert!(domain.factions.is_empty());
        assert_eq!(domain.cells, BTreeSet::from([CardCell::Other]));
    }

    #[rstest]
    fn defaults_encode_to_an_empty_query() {
        let params = card_filters_to_search_params(&CardFilters::default());

        assert!(params.is_empty());
    }

    #[rstest]
    fn round_trips_filters_within_domain(domain: CardFilterDomain) {
        let filters = CardFilters {
            selected_sets: vec![SetId::RiseOfIx, SetId::FanSietch],
            selected_factions: vec![FactionId::Emperor],
            selected_cells: vec![CardCell::Spy],
            selected_properties: vec![CardProperty::PurchaseBonus],
            sort_field: CardSortField::Cost,
            sort_direction: SortDirection::Desc,
            search_query: "spy".to_owned(),
        };

        let encoded = card_filters_to_search_params(&filters).to_string();
        let patch = search_params_to_card_filters(&SearchParams::parse(&encoded), &domain);

        assert_eq!(CardFilters::default().merged(patch), filters);
    }

    #[rstest]
    fn absent_keys_stay_unset(domain: CardFilterDomain) {
        let patch = search_params_to_card_filters(&SearchParams::parse("sets=immortality"), &domain);

        assert_eq!(
            patch,
            CardFiltersPatch {
                selected_sets: Some(vec![SetId::Immortality]),
                ..CardFiltersPatch::default()
            }
        );
    }

    #[rstest]
    #[case::unknown_token("sets=atlantis,immortality", vec![SetId::Immortality])]
    #[case::known_but_absent("sets=uprising", vec![])]
    #[case::padded("sets= rise_of_ix , fan_sietch", vec![SetId::RiseOfIx, SetId::FanSietch])]
    #[case::empty_value("sets=", vec![])]
    fn drops_tokens_outside_domain(
        domain: CardFilterDomain,
        #[case] query: &str,
        #[case] expected: Vec<SetId>,
    ) {
        let params = SearchParams::parse(&query.replace(' ', "%20"));

        let patch = search_params_to_card_filters(&params, &domain);

        assert_eq!(patch.selected_sets, Some(expected));
    }

    #[rstest]
    fn invalid_sort_tokens_are_ignored(domain: CardFilterDomain) {
        let params = SearchParams::parse("sortField=rarity&sortDirection=sideways");

        let patch = search_params_to_card_filters(&params, &domain);

        assert_eq!(patch.sort_field, None);
        assert_eq!(patch.sort_direction, None);
    }

    #[rstest]
    fn search_query_is_trimmed(domain: CardFilterDomain) {
        let patch = search_params_to_card_filters(&SearchParams::parse("q=+guild+"), &domain);

        assert_eq!(patch.search_query.as_deref(), Some("guild"));
    }
}
