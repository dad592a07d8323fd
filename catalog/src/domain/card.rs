//! Card record.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::enums::{CardCell, CardProperty, FactionId, SetId};
use super::validation::{validate_non_empty_field, validate_slug};

/// Input payload for [`Card::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CardDraft {
    pub id: u32,
    pub slug: String,
    pub name: String,
    /// Latinised name, searched alongside the localised one.
    pub name_en: String,
    pub cost: u32,
    pub set_id: SetId,
    /// Neutral cards have no faction.
    pub faction: Option<FactionId>,
    pub cell: CardCell,
    /// Duplicates are kept as loaded.
    #[serde(default)]
    pub properties: Vec<CardProperty>,
    pub image_url: String,
    pub is_official: bool,
    #[serde(default)]
    pub text: String,
}

/// A playable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: u32,
    slug: String,
    name: String,
    name_en: String,
    cost: u32,
    set_id: SetId,
    faction: Option<FactionId>,
    cell: CardCell,
    properties: Vec<CardProperty>,
    image_url: String,
    is_official: bool,
    text: String,
}

impl Card {
    /// Validate and construct a card.
    pub fn new(draft: CardDraft) -> Result<Self, CatalogValidationError> {
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
    pub fn name_en(&self) -> &str {
        self.name_en.as_str()
    }
    pub fn cost(&self) -> u32 {
        self.cost
    }
    pub fn set_id(&self) -> SetId {
        self.set_id
    }
    pub fn faction(&self) -> Option<FactionId> {
        self.faction
    }
    pub fn cell(&self) -> CardCell {
        self.cell
    }
    pub fn properties(&self) -> &[CardProperty] {
        &self.properties
    }
    pub fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
    pub fn is_official(&self) -> bool {
        self.is_official
    }
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns `true` when the card carries every one of `required`.
    pub fn has_all_properties(&self, required: &[CardProperty]) -> bool {
        required
            .iter()
            .all(|property| self.properties.contains(property))
    }
}

impl TryFrom<CardDraft> for Card {
    type Error = CatalogValidationError;

    fn try_from(draft: CardDraft) -> Result<Self, Self::Error> {
        let slug = validate_slug(draft.slug, "card.slug")?;
        let name = validate_non_empty_field(draft.name, "card.name")?;

        Ok(Self {
            id: draft.id,
            slug,
            name,
            name_en: draft.name_en,
            cost: draft.cost,
            set_id: draft.set_id,
            faction: draft.faction,
            cell: draft.cell,
            properties: draft.properties,
            image_url: draft.image_url,
            is_official: draft.is_official,
            text: draft.text,
        })
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CardDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
