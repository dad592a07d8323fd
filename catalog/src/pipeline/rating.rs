//! Leaderboard filtering, sorting and statistics.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::text::compare_names;
use crate::domain::{ALL_TOKEN, Player, RatingMode, RatingSortField, Selection, SortDirection};

/// Minimum rating that admits a player to the tournament view.
pub const TOURNAMENT_MIN_RATING: i32 = 1600;
/// Minimum games played that admits a player to the tournament view.
pub const TOURNAMENT_MIN_GAMES: u32 = 80;

/// Filter state for the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingFilters {
    /// Free-form season label.
    pub season: Selection<String>,
    pub mode: RatingMode,
    pub sort_field: RatingSortField,
    pub sort_direction: SortDirection,
}

impl Default for RatingFilters {
    fn default() -> Self {
        Self {
            season: Selection::All,
            mode: RatingMode::Ladder,
            sort_field: RatingSortField::Rating,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl RatingFilters {
    /// Re-selecting the active field flips the direction; a new field
    /// starts descending.
    pub fn toggle_sort(&mut self, field: RatingSortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
    }
}

/// Share of games won, or `0.0` for a player with no games.
///
/// # Examples
///
/// ```
/// use catalog::domain::{FactionId, Player, PlayerDraft};
/// use catalog::pipeline::calculate_win_rate;
///
/// let rookie = Player::new(PlayerDraft {
///     id: 1,
///     nickname: "Rookie".to_owned(),
///     rating: 1200,
///     games_played: 0,
///     wins: 0,
///     losses: 0,
///     favorite_faction: FactionId::Fremen,
///     season: "2025-S2".to_owned(),
/// })?;
/// assert_eq!(calculate_win_rate(&rookie), 0.0);
/// # Ok::<(), catalog::domain::CatalogValidationError>(())
/// ```
pub fn calculate_win_rate(player: &Player) -> f64 {
    if player.games_played() == 0 {
        return 0.0;
    }
    f64::from(player.wins()) / f64::from(player.games_played())
}

/// Players admitted by `mode`.
pub fn is_eligible(player: &Player, mode: RatingMode) -> bool {
    match mode {
        RatingMode::Ladder => true,
        RatingMode::Tournament => {
            player.rating() >= TOURNAMENT_MIN_RATING
                || player.games_played() >= TOURNAMENT_MIN_GAMES
        }
    }
}

/// Filter by season then mode, and sort.
///
/// Ties on the sort key fall back to ascending nickname whatever the
/// requested direction.
pub fn apply_rating_filters(players: &[Player], filters: &RatingFilters) -> Vec<Player> {
    let mut result: Vec<Player> = players
        .iter()
        .filter(|player| filters.season.matches(player.season()))
        .filter(|player| is_eligible(player, filters.mode))
        .cloned()
        .collect();

    result.sort_by(|left, right| {
        filters
            .sort_direction
            .apply(compare_players(left, right, filters.sort_field))
            .then_with(|| compare_names(left.nickname(), right.nickname()))
    });
    result
}

fn compare_players(left: &Player, right: &Player, field: RatingSortField) -> Ordering {
    match field {
        RatingSortField::Rating => left.rating().cmp(&right.rating()),
        RatingSortField::Wins => left.wins().cmp(&right.wins()),
        RatingSortField::GamesPlayed => left.games_played().cmp(&right.games_played()),
        RatingSortField::WinRate => compare_win_rates(left, right),
    }
}

// Compares wins/games exactly by cross-multiplying; zero games rank as 0.
fn compare_win_rates(left: &Player, right: &Player) -> Ordering {
    let ratio = |player: &Player| {
        if player.games_played() == 0 {
            (0_u64, 1_u64)
        } else {
            (u64::from(player.wins()), u64::from(player.games_played()))
        }
    };
    let (left_wins, left_games) = ratio(left);
    let (right_wins, right_games) = ratio(right);
    (left_wins * right_games).cmp(&(right_wins * left_games))
}

/// Mean rating rounded half-up, or `0` for an empty slice.
pub fn average_rating(players: &[Player]) -> i32 {
    let Ok(count) = i64::try_from(players.len()) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let sum: i64 = players.iter().map(|player| i64::from(player.rating())).sum();
    let rounded = (2 * sum + count).div_euclid(2 * count);
    i32::try_from(rounded).unwrap_or_default()
}

/// `"all"` followed by the distinct seasons, newest first.
pub fn available_seasons(players: &[Player]) -> Vec<String> {
    let seasons: BTreeSet<&str> = players.iter().map(Player::season).collect();
    std::iter::once(ALL_TOKEN)
        .chain(seasons.into_iter().rev())
        .map(str::to_owned)
        .collect()
}
