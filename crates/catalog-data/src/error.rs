//! Error types for the catalog-data crate.
//!
//! Loading a dataset either succeeds as a whole or reports the first
//! collection that failed, following the project's `thiserror` conventions.

use std::path::PathBuf;

use thiserror::Error;

use crate::collection::Collection;

/// Errors that can occur when provisioning or reading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// A dataset document could not be read from disk.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the file or directory that failed.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The manifest JSON is malformed or missing required fields.
    #[error("invalid dataset manifest: {message}")]
    ManifestError {
        /// Description of the parse error.
        message: String,
    },

    /// The manifest declares a dataset layout this crate cannot read.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the manifest.
        actual: u32,
    },

    /// A collection document is not valid JSON.
    #[error("invalid JSON in {collection} document: {message}")]
    ParseError {
        /// Collection whose document failed to parse.
        collection: Collection,
        /// Description of the parse error.
        message: String,
    },

    /// A collection document parsed but its top-level value is not an array.
    #[error("{collection} document must contain a top-level array")]
    NotAnArray {
        /// Collection whose document has the wrong shape.
        collection: Collection,
    },

    /// A single record does not match the shape requested by the caller.
    #[error("invalid record at {collection}[{index}]: {message}")]
    InvalidRecord {
        /// Collection holding the record.
        collection: Collection,
        /// Position of the record in the document.
        index: usize,
        /// Description of the mismatch.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = DatasetError::IoError {
            path: PathBuf::from("/srv/data/cards.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset file at '/srv/data/cards.json': file not found"
        );
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = DatasetError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported dataset version: expected 1, found 3"
        );
    }

    #[test]
    fn not_an_array_names_the_collection() {
        let err = DatasetError::NotAnArray {
            collection: Collection::Leaders,
        };
        assert_eq!(
            err.to_string(),
            "leaders document must contain a top-level array"
        );
    }

    #[test]
    fn invalid_record_reports_position() {
        let err = DatasetError::InvalidRecord {
            collection: Collection::Cards,
            index: 4,
            message: "missing field `slug`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid record at cards[4]: missing field `slug`"
        );
    }
}
