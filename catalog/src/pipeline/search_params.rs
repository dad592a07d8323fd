//! An ordered, form-encoded query-parameter list.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// Query parameters in insertion order.
///
/// Parsing accepts an optional leading `?`; encoding never emits one.
///
/// # Examples
///
/// ```
/// use catalog::pipeline::SearchParams;
///
/// let mut params = SearchParams::parse("?sets=imperium%2Cuprising&q=spy+master");
/// assert_eq!(params.get("sets"), Some("imperium,uprising"));
/// assert_eq!(params.get("q"), Some("spy master"));
///
/// params.set("q", "guild");
/// assert_eq!(params.to_string(), "sets=imperium%2Cuprising&q=guild");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a query string. Malformed escapes decode lossily.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every value under `key` with a single `value`.
    ///
    /// The first existing position is kept; otherwise the pair is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let mut pending = Some(value.into());
        self.pairs.retain_mut(|(name, existing)| {
            if name != key {
                return true;
            }
            match pending.take() {
                Some(value) => {
                    *existing = value;
                    true
                }
                None => false,
            }
        });
        if let Some(value) = pending {
            self.pairs.push((key.to_owned(), value));
        }
    }

    /// Drop every value under `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(name, _)| name != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromStr for SearchParams {
    type Err = std::convert::Infallible;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(query))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn empty_query_has_no_pairs() {
        assert!(SearchParams::parse("").is_empty());
        assert!(SearchParams::parse("?").is_empty());
        assert_eq!(SearchParams::new().to_string(), "");
    }

    #[rstest]
    fn get_returns_first_value() {
        let params = SearchParams::parse("q=one&q=two");

        assert_eq!(params.get("q"), Some("one"));
        assert_eq!(params.get("sets"), None);
    }

    #[rstest]
    fn set_collapses_duplicates_in_place() {
        let mut params = SearchParams::parse("q=one&sets=imperium&q=two");

        params.set("q", "three");

        assert_eq!(params.to_string(), "q=three&sets=imperium");
    }

    #[rstest]
    fn remove_drops_all_values() {
        let mut params = SearchParams::parse("q=one&sets=imperium&q=two");

        params.remove("q");

        assert_eq!(params.to_string(), "sets=imperium");
    }

    #[rstest]
    fn encodes_reserved_characters() {
        let mut params = SearchParams::new();
        params.set("q", "Шпион & co");

        let encoded = params.to_string();

        assert_eq!(SearchParams::parse(&encoded).get("q"), Some("Шпион & co"));
        assert!(!encoded.contains(' '));
    }
}
