//! Validation errors for catalog records.

use thiserror::Error;

/// Validation errors returned by catalog record constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogValidationError {
    /// A slug contains characters outside `[a-z0-9-]` or is untrimmed.
    #[error("{field} must contain lowercase ASCII letters, digits, and hyphens (got '{value}')")]
    InvalidSlug {
        /// Qualified field name, e.g. `card.slug`.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A required text field is empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Qualified field name, e.g. `player.nickname`.
        field: &'static str,
    },
}
