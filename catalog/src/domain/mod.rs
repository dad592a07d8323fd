//! Catalog record types and the closed vocabularies they use.
//!
//! Records are immutable once constructed. Each has a `*Draft` input type
//! that deserialises from the dataset JSON and is validated by the record
//! constructor; deserialising a record goes through the same validation.

mod article;
mod card;
mod enums;
mod error;
mod faction;
mod game_set;
mod leader;
mod macros;
mod player;
mod selection;
mod validation;

#[cfg(test)]
mod tests;

pub use article::{Article, ArticleDraft};
pub use card::{Card, CardDraft};
pub use enums::{
    CardCell, CardProperty, CardSortField, FactionId, LeaderComplexity, LeadersGroupBy,
    ParseCardCellError, ParseCardPropertyError, ParseCardSortFieldError, ParseFactionIdError,
    ParseLeaderComplexityError, ParseLeadersGroupByError, ParseRatingModeError,
    ParseRatingSortFieldError, ParseSetIdError, ParseSortDirectionError, RatingMode,
    RatingSortField, SetId, SortDirection,
};
pub use error::CatalogValidationError;
pub use faction::{Faction, FactionDraft};
pub use game_set::{GameSet, GameSetDraft};
pub use leader::{Leader, LeaderDraft};
pub use player::{Player, PlayerDraft};
pub use selection::{ALL_TOKEN, Selection};
