//! Game set record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::enums::SetId;
use super::validation::validate_non_empty_field;

/// Input payload for [`GameSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct GameSetDraft {
    pub id: SetId,
    pub name: String,
    pub release_year: u16,
    pub official: bool,
    /// Printed card count; independent of the cards present in the dataset.
    pub card_count: u32,
    pub description: String,
}

/// The base game, an expansion, or a fan set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSet {
    id: SetId,
    name: String,
    release_year: u16,
    official: bool,
    card_count: u32,
    description: String,
}

impl GameSet {
    /// Validate and construct a game set.
    pub fn new(draft: GameSetDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> SetId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn release_year(&self) -> u16 {
        self.release_year
    }
    pub fn official(&self) -> bool {
        self.official
    }
    pub fn card_count(&self) -> u32 {
        self.card_count
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

impl TryFrom<GameSetDraft> for GameSet {
    type Error = CatalogValidationError;

    fn try_from(draft: GameSetDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "game_set.name")?;

        Ok(Self {
            id: draft.id,
            name,
            release_year: draft.release_year,
            official: draft.official,
            card_count: draft.card_count,
            description: draft.description,
        })
    }
}

impl<'de> Deserialize<'de> for GameSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        GameSetDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
