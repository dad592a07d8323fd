//! Rated player record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::enums::FactionId;
use super::validation::validate_non_empty_field;

/// Input payload for [`Player::new`].
///
/// `wins + losses <= games_played` is deliberately not checked; the ladder
/// export does not guarantee it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PlayerDraft {
    pub id: u32,
    pub nickname: String,
    pub rating: i32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub favorite_faction: FactionId,
    /// Free-form season label such as `2025-S2`.
    pub season: String,
}

/// A player on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: u32,
    nickname: String,
    rating: i32,
    games_played: u32,
    wins: u32,
    losses: u32,
    favorite_faction: FactionId,
    season: String,
}

impl Player {
    /// Validate and construct a player.
    pub fn new(draft: PlayerDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn nickname(&self) -> &str {
        self.nickname.as_str()
    }
    pub fn rating(&self) -> i32 {
        self.rating
    }
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn favorite_faction(&self) -> FactionId {
        self.favorite_faction
    }
    pub fn season(&self) -> &str {
        self.season.as_str()
    }
}

impl TryFrom<PlayerDraft> for Player {
    type Error = CatalogValidationError;

    fn try_from(draft: PlayerDraft) -> Result<Self, Self::Error> {
        let nickname = validate_non_empty_field(draft.nickname, "player.nickname")?;
        let season = validate_non_empty_field(draft.season, "player.season")?;

        Ok(Self {
            id: draft.id,
            nickname,
            rating: draft.rating,
            games_played: draft.games_played,
            wins: draft.wins,
            losses: draft.losses,
            favorite_faction: draft.favorite_faction,
            season,
        })
    }
}

impl<'de> Deserialize<'de> for Player {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PlayerDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
