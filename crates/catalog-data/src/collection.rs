//! Names of the collections shipped in a dataset.

use std::fmt;

use serde::Serialize;

/// One of the record collections stored in a dataset.
///
/// Each collection lives in its own JSON document holding a top-level array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Playable cards.
    Cards,
    /// Leader cards.
    Leaders,
    /// Rated players on the leaderboard.
    Players,
    /// The four factions.
    Factions,
    /// Base game, expansions and fan sets.
    Sets,
    /// News articles.
    Articles,
}

impl Collection {
    /// Every collection in a dataset, in load order.
    pub const ALL: [Self; 6] = [
        Self::Cards,
        Self::Leaders,
        Self::Players,
        Self::Factions,
        Self::Sets,
        Self::Articles,
    ];

    /// Returns the collection name used in logs and errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_data::Collection;
    ///
    /// assert_eq!(Collection::Players.as_str(), "players");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Leaders => "leaders",
            Self::Players => "players",
            Self::Factions => "factions",
            Self::Sets => "sets",
            Self::Articles => "articles",
        }
    }

    /// Returns the document file name inside a dataset directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Cards => "cards.json",
            Self::Leaders => "leaders.json",
            Self::Players => "players.json",
            Self::Factions => "factions.json",
            Self::Sets => "sets.json",
            Self::Articles => "articles.json",
        }
    }

    pub(crate) const fn bundled_document(self) -> &'static str {
        match self {
            Self::Cards => include_str!("../data/cards.json"),
            Self::Leaders => include_str!("../data/leaders.json"),
            Self::Players => include_str!("../data/players.json"),
            Self::Factions => include_str!("../data/factions.json"),
            Self::Sets => include_str!("../data/sets.json"),
            Self::Articles => include_str!("../data/articles.json"),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
