//! Validation helpers shared by catalog records.
//!
//! Slugs key article pages and card detail links: lowercase ASCII letters,
//! digits and hyphens, with no surrounding whitespace.

use super::CatalogValidationError;

pub(super) fn validate_slug(
    value: String,
    field: &'static str,
) -> Result<String, CatalogValidationError> {
    let well_formed = !value.is_empty()
        && value
            .bytes()
            .all(|byte| matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'-'));
    if !well_formed {
        return Err(CatalogValidationError::InvalidSlug { field, value });
    }
    Ok(value)
}

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogValidationError::EmptyField { field });
    }
    Ok(value)
}
