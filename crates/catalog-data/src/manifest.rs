//! Dataset manifest parsing.
//!
//! Every dataset directory carries a `manifest.json` naming the layout
//! version. Documents are only read once the version is known to be
//! supported.

use serde::Deserialize;

use crate::error::DatasetError;

/// Current supported dataset layout version.
pub const SUPPORTED_VERSION: u32 = 1;

/// File name of the manifest inside a dataset directory.
pub(crate) const MANIFEST_FILE: &str = "manifest.json";

pub(crate) const BUNDLED_MANIFEST: &str = include_str!("../data/manifest.json");

/// Describes a dataset: its layout version, name and last update label.
///
/// # Example
///
/// ```
/// use catalog_data::DatasetManifest;
///
/// let manifest = DatasetManifest::from_json(
///     r#"{"version": 1, "name": "local", "updatedAt": "2025-01-01"}"#,
/// )
/// .expect("valid manifest");
/// assert_eq!(manifest.name(), "local");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetManifest {
    version: u32,
    name: String,
    updated_at: String,
}

impl DatasetManifest {
    /// Parses a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ManifestError`] when the JSON is malformed and
    /// [`DatasetError::UnsupportedVersion`] when the version is not
    /// [`SUPPORTED_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawManifest =
            serde_json::from_str(json).map_err(|e| DatasetError::ManifestError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self {
            version: raw.version,
            name: raw.name,
            updated_at: raw.updated_at,
        })
    }

    /// Returns the dataset layout version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-form update label, usually an ISO date.
    #[must_use]
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManifest {
    version: u32,
    name: String,
    #[serde(default)]
    updated_at: String,
}
