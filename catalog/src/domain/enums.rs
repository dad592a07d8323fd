//! Closed vocabularies used by records and filter state.
//!
//! Declaration order is significant: `Ord` follows it, and the faction order
//! is the canonical order used when grouping leaders.

use std::cmp::Ordering;

use super::macros::define_catalog_enum;

define_catalog_enum! {
    /// One of the four playable factions.
    pub enum FactionId ("faction") {
        Emperor => "emperor",
        SpacingGuild => "spacing_guild",
        BeneGesserit => "bene_gesserit",
        Fremen => "fremen",
    }
}

define_catalog_enum! {
    /// Base game, official expansions and fan sets.
    pub enum SetId ("set") {
        Imperium => "imperium",
        RiseOfIx => "rise_of_ix",
        Immortality => "immortality",
        Uprising => "uprising",
        Bloodlines => "bloodlines",
        FanSietch => "fan_sietch",
        FanChoam => "fan_choam",
    }
}

define_catalog_enum! {
    /// Board location an agent card can be sent to.
    pub enum CardCell ("card cell") {
        Landsraad => "landsraad",
        City => "city",
        Desert => "desert",
        Spy => "spy",
        Other => "other",
    }
}

define_catalog_enum! {
    /// Keyword tags printed on cards.
    pub enum CardProperty ("card property") {
        PurchaseBonus => "purchase_bonus",
        Trash => "trash",
        Graft => "graft",
        Tleilaxu => "tleilaxu",
        Command => "command",
        Teamwork => "teamwork",
        Choam => "choam",
    }
}

define_catalog_enum! {
    /// How hard a leader is to play well.
    pub enum LeaderComplexity ("leader complexity") {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

define_catalog_enum! {
    /// Sort direction shared by every sortable view.
    pub enum SortDirection ("sort direction") {
        Asc => "asc",
        Desc => "desc",
    }
}

impl SortDirection {
    /// Applies the direction to an ascending comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use catalog::domain::SortDirection;
    ///
    /// assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
    /// assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    /// ```
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

define_catalog_enum! {
    /// Sort key for the card list.
    pub enum CardSortField ("card sort field") {
        Name => "name",
        Cost => "cost",
    }
}

impl Default for CardSortField {
    fn default() -> Self {
        Self::Name
    }
}

define_catalog_enum! {
    /// Sort key for the leaderboard.
    pub enum RatingSortField ("rating sort field") {
        Rating => "rating",
        Wins => "wins",
        GamesPlayed => "gamesPlayed",
        /// Derived from wins and games played.
        WinRate => "winRate",
    }
}

impl Default for RatingSortField {
    fn default() -> Self {
        Self::Rating
    }
}

define_catalog_enum! {
    /// Which players the leaderboard admits.
    pub enum RatingMode ("rating mode") {
        /// Everyone in the selected season.
        Ladder => "ladder",
        /// Only players eligible for tournament seeding.
        Tournament => "tournament",
    }
}

impl Default for RatingMode {
    fn default() -> Self {
        Self::Ladder
    }
}

define_catalog_enum! {
    /// Presentation grouping of the leaders list.
    pub enum LeadersGroupBy ("leaders grouping") {
        None => "none",
        Faction => "faction",
    }
}

impl Default for LeadersGroupBy {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn faction_order_is_canonical() {
        assert_eq!(
            FactionId::ALL,
            &[
                FactionId::Emperor,
                FactionId::SpacingGuild,
                FactionId::BeneGesserit,
                FactionId::Fremen
            ]
        );
    }

    #[rstest]
    #[case("rise_of_ix", SetId::RiseOfIx)]
    #[case("fan_choam", SetId::FanChoam)]
    fn parses_set_tokens(#[case] token: &str, #[case] expected: SetId) {
        assert_eq!(token.parse::<SetId>(), Ok(expected));
    }

    #[rstest]
    #[case("gamesPlayed", RatingSortField::GamesPlayed)]
    #[case("winRate", RatingSortField::WinRate)]
    fn rating_sort_fields_use_camel_case_tokens(
        #[case] token: &str,
        #[case] expected: RatingSortField,
    ) {
        assert_eq!(token.parse::<RatingSortField>(), Ok(expected));
        assert_eq!(expected.to_string(), token);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Fremen".parse::<FactionId>().is_err());
    }

    #[test]
    fn flipped_direction_round_trips() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped().flipped(), SortDirection::Desc);
    }
}
