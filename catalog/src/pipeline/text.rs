//! Text matching and name ordering shared by every pipeline.

use std::cmp::Ordering;

/// Trim and lowercase a free-text query.
///
/// Returns `None` when the query is blank, meaning "match everything".
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Case-insensitive substring test against an already-normalised needle.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Order display names case-insensitively, breaking ties on the raw text.
///
/// Identical names compare equal, so stable sorts keep their input order.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::blank("   ", None)]
    #[case::empty("", None)]
    #[case::trimmed("  Guild ", Some("guild"))]
    #[case::cyrillic("Шпион", Some("шпион"))]
    fn normalises_queries(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_query(query).as_deref(), expected);
    }

    #[rstest]
    fn folds_haystack_case() {
        assert!(contains_folded("Guild Embassy", "embassy"));
        assert!(!contains_folded("Guild Embassy", "spy"));
    }

    #[rstest]
    #[case::case_insensitive("alpha", "Beta", Ordering::Less)]
    #[case::tie_break("Alpha", "alpha", Ordering::Less)]
    #[case::identical("Stilgar", "Stilgar", Ordering::Equal)]
    fn orders_names(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(compare_names(left, right), expected);
    }
}
