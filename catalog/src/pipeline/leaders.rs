//! Leader filtering and faction grouping.

use serde::{Deserialize, Serialize};

use super::text::{compare_names, contains_folded, normalize_query};
use crate::domain::{FactionId, Leader, LeadersGroupBy, Selection, SetId};

/// Filter state for the leaders list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadersFilters {
    pub search_query: String,
    pub faction: Selection<FactionId>,
    pub set_id: Selection<SetId>,
    /// Presentation hint; the grouped view is always derived.
    pub group_by: LeadersGroupBy,
}

/// Leaders of one faction, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadersGroup {
    pub faction: FactionId,
    pub leaders: Vec<Leader>,
}

/// Filter `leaders` by faction, set and text, then sort by name.
///
/// The query matches the name, house or ability.
pub fn apply_leaders_filters(leaders: &[Leader], filters: &LeadersFilters) -> Vec<Leader> {
    let query = normalize_query(&filters.search_query);

    let mut result: Vec<Leader> = leaders
        .iter()
        .filter(|leader| filters.faction.matches(&leader.faction()))
        .filter(|leader| filters.set_id.matches(&leader.set_id()))
        .filter(|leader| {
            query.as_deref().is_none_or(|needle| {
                contains_folded(leader.name(), needle)
                    || contains_folded(leader.house(), needle)
                    || contains_folded(leader.ability(), needle)
            })
        })
        .cloned()
        .collect();

    sort_by_name(&mut result);
    result
}

/// Split `leaders` into one group per faction in canonical faction order.
///
/// Every faction gets a group, even when it has no leaders.
///
/// # Examples
///
/// ```
/// use catalog::domain::FactionId;
/// use catalog::pipeline::group_leaders_by_faction;
///
/// let groups = group_leaders_by_faction(&[]);
/// let order: Vec<FactionId> = groups.iter().map(|group| group.faction).collect();
/// assert_eq!(order, FactionId::ALL);
/// ```
pub fn group_leaders_by_faction(leaders: &[Leader]) -> Vec<LeadersGroup> {
    FactionId::ALL
        .iter()
        .map(|&faction| {
            let mut members: Vec<Leader> = leaders
                .iter()
                .filter(|leader| leader.faction() == faction)
                .cloned()
                .collect();
            sort_by_name(&mut members);
            LeadersGroup {
                faction,
                leaders: members,
            }
        })
        .collect()
}

fn sort_by_name(leaders: &mut [Leader]) {
    leaders.sort_by(|left, right| compare_names(left.name(), right.name()));
}
