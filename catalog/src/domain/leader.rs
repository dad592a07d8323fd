//! Leader record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::enums::{FactionId, LeaderComplexity, SetId};
use super::validation::{validate_non_empty_field, validate_slug};

/// Input payload for [`Leader::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct LeaderDraft {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub house: String,
    pub faction: FactionId,
    pub ability: String,
    pub complexity: LeaderComplexity,
    pub set_id: SetId,
    pub image_url: String,
}

/// A leader card. Unlike cards, every leader belongs to a faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    id: u32,
    slug: String,
    name: String,
    house: String,
    faction: FactionId,
    ability: String,
    complexity: LeaderComplexity,
    set_id: SetId,
    image_url: String,
}

impl Leader {
    /// Validate and construct a leader.
    pub fn new(draft: LeaderDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn house(&self) -> &str {
        self.house.as_str()
    }
    pub fn faction(&self) -> FactionId {
        self.faction
    }
    pub fn ability(&self) -> &str {
        self.ability.as_str()
    }
    pub fn complexity(&self) -> LeaderComplexity {
        self.complexity
    }
    pub fn set_id(&self) -> SetId {
        self.set_id
    }
    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
}

impl TryFrom<LeaderDraft> for Leader {
    type Error = CatalogValidationError;

    fn try_from(draft: LeaderDraft) -> Result<Self, Self::Error> {
        let slug = validate_slug(draft.slug, "leader.slug")?;
        let name = validate_non_empty_field(draft.name, "leader.name")?;

        Ok(Self {
            id: draft.id,
            slug,
            name,
            house: draft.house,
            faction: draft.faction,
            ability: draft.ability,
            complexity: draft.complexity,
            set_id: draft.set_id,
            image_url: draft.image_url,
        })
    }
}

impl<'de> Deserialize<'de> for Leader {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        LeaderDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
