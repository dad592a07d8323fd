//! Faction record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::enums::FactionId;
use super::validation::validate_non_empty_field;

/// Input payload for [`Faction::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FactionDraft {
    pub id: FactionId,
    pub name: String,
    /// CSS colour used for faction accents.
    pub color: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// One of the four factions with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    id: FactionId,
    name: String,
    color: String,
    description: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
}

impl Faction {
    /// Validate and construct a faction.
    pub fn new(draft: FactionDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> FactionId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn color(&self) -> &str {
        self.color.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }
}

impl TryFrom<FactionDraft> for Faction {
    type Error = CatalogValidationError;

    fn try_from(draft: FactionDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "faction.name")?;

        Ok(Self {
            id: draft.id,
            name,
            color: draft.color,
            description: draft.description,
            strengths: draft.strengths,
            weaknesses: draft.weaknesses,
        })
    }
}

impl<'de> Deserialize<'de> for Faction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        FactionDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
