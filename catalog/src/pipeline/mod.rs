//! Pure filter, sort and group functions over loaded collections.
//!
//! Every function here is total and leaves its input untouched; the stores
//! call them to recompute their derived views.

mod card_query;
mod cards;
mod counts;
mod leaders;
mod news;
mod rating;
mod search_params;
mod text;

pub use card_query::{
    CELLS_KEY, CardFilterDomain, FACTIONS_KEY, PROPERTIES_KEY, SEARCH_KEY, SETS_KEY,
    SORT_DIRECTION_KEY, SORT_FIELD_KEY, card_filters_to_search_params,
    search_params_to_card_filters,
};
pub use cards::{CardFilters, CardFiltersPatch, apply_card_filters, toggle_in_list};
pub use counts::{count_cards_by_faction, count_cards_by_set};
pub use leaders::{LeadersFilters, LeadersGroup, apply_leaders_filters, group_leaders_by_faction};
pub use news::{NewsFilters, apply_news_filters, available_tags};
pub use rating::{
    RatingFilters, TOURNAMENT_MIN_GAMES, TOURNAMENT_MIN_RATING, apply_rating_filters,
    available_seasons, average_rating, calculate_win_rate, is_eligible,
};
pub use search_params::SearchParams;
pub use text::{compare_names, contains_folded, normalize_query};
