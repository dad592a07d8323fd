//! Single-choice cursor over a domain value or "all".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token used on the wire for [`Selection::All`].
pub const ALL_TOKEN: &str = "all";

/// A cursor that either selects one value or leaves the view unconstrained.
///
/// Serialises as `"all"` or as the wrapped value's token.
///
/// # Examples
///
/// ```
/// use catalog::domain::{FactionId, Selection};
///
/// let cursor: Selection<FactionId> = "fremen".parse().expect("valid token");
/// assert!(cursor.matches(&FactionId::Fremen));
/// assert!(!cursor.matches(&FactionId::Emperor));
/// assert!(Selection::<FactionId>::All.matches(&FactionId::Emperor));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    /// No constraint.
    #[default]
    All,
    /// Exactly this value.
    Only(T),
}

impl<T> Selection<T> {
    /// Returns `true` when the cursor admits `value`.
    pub fn matches<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    /// Returns the selected value, or `None` for [`Selection::All`].
    pub const fn as_only(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(selected) => Some(selected),
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOKEN),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_TOKEN {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
