//! Loading and structural validation of dataset documents.
//!
//! A [`DatasetBundle`] holds every collection as a list of JSON values. The
//! documents are checked to be arrays when the bundle is built, so record
//! deserialisation only has to deal with the shape of individual records.

use std::collections::BTreeMap;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::error::DatasetError;
use crate::manifest::{BUNDLED_MANIFEST, DatasetManifest, MANIFEST_FILE};
use crate::source::DatasetSource;

/// A complete, structurally valid dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBundle {
    manifest: DatasetManifest,
    documents: BTreeMap<Collection, Vec<Value>>,
}

impl DatasetBundle {
    /// Builds the bundle from the copy compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the bundled documents are invalid, which
    /// only happens when the shipped data files are edited by hand.
    pub fn bundled() -> Result<Self, DatasetError> {
        let manifest = DatasetManifest::from_json(BUNDLED_MANIFEST)?;
        let documents = Collection::ALL
            .into_iter()
            .map(|collection| {
                parse_document(collection, collection.bundled_document())
                    .map(|records| (collection, records))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            manifest,
            documents,
        })
    }

    /// Loads a bundle from a directory containing `manifest.json` and one
    /// document per [`Collection`].
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IoError`] when the directory or a document
    /// cannot be read, and the parse/validation variants when a document is
    /// malformed.
    pub fn from_dir(path: &Path) -> Result<Self, DatasetError> {
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|e| {
            DatasetError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let manifest = DatasetManifest::from_json(&read_file(&dir, path, MANIFEST_FILE)?)?;
        let mut documents = BTreeMap::new();
        for collection in Collection::ALL {
            let contents = read_file(&dir, path, collection.file_name())?;
            let records = parse_document(collection, &contents)?;
            debug!(
                collection = %collection,
                records = records.len(),
                "dataset document read"
            );
            documents.insert(collection, records);
        }

        Ok(Self {
            manifest,
            documents,
        })
    }

    /// Loads a bundle from the given source.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::bundled`] or [`Self::from_dir`].
    pub fn load(source: &DatasetSource) -> Result<Self, DatasetError> {
        let bundle = match source {
            DatasetSource::Bundled => Self::bundled()?,
            DatasetSource::Directory(path) => Self::from_dir(path)?,
        };
        info!(
            source = %source,
            dataset = bundle.manifest.name(),
            "dataset provisioned"
        );
        Ok(bundle)
    }

    /// Returns the dataset manifest.
    #[must_use]
    pub const fn manifest(&self) -> &DatasetManifest {
        &self.manifest
    }

    /// Returns the number of records in a collection.
    #[must_use]
    pub fn len(&self, collection: Collection) -> usize {
        self.documents.get(&collection).map_or(0, Vec::len)
    }

    /// Returns `true` when a collection holds no records.
    #[must_use]
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    /// Deserialises every record of a collection into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidRecord`] for the first record that does
    /// not deserialise, naming its position in the document.
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_data::{Collection, DatasetBundle};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct FactionName {
    ///     id: String,
    /// }
    ///
    /// let bundle = DatasetBundle::bundled().expect("bundled dataset");
    /// let factions: Vec<FactionName> = bundle.records(Collection::Factions).expect("records");
    /// assert_eq!(factions.len(), 4);
    /// assert_eq!(factions[0].id, "emperor");
    /// ```
    pub fn records<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, DatasetError> {
        self.documents
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                T::deserialize(value).map_err(|e| DatasetError::InvalidRecord {
                    collection,
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

fn read_file(dir: &Dir, root: &Path, file_name: &str) -> Result<String, DatasetError> {
    dir.read_to_string(file_name)
        .map_err(|e| DatasetError::IoError {
            path: root.join(file_name),
            message: e.to_string(),
        })
}

fn parse_document(collection: Collection, contents: &str) -> Result<Vec<Value>, DatasetError> {
    let value: Value = serde_json::from_str(contents).map_err(|e| DatasetError::ParseError {
        collection,
        message: e.to_string(),
    })?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(DatasetError::NotAnArray { collection }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn bundled_dataset_has_every_collection() {
        let bundle = DatasetBundle::bundled().expect("bundled dataset");
        for collection in Collection::ALL {
            assert!(!bundle.is_empty(collection), "{collection} is empty");
        }
    }

    #[test]
    fn bundled_dataset_has_four_factions_and_seven_sets() {
        let bundle = DatasetBundle::bundled().expect("bundled dataset");
        assert_eq!(bundle.len(Collection::Factions), 4);
        assert_eq!(bundle.len(Collection::Sets), 7);
    }

    #[rstest]
    #[case::object(r#"{"id": 1}"#)]
    #[case::number("42")]
    fn non_array_documents_are_rejected(#[case] json: &str) {
        let result = parse_document(Collection::Cards, json);
        assert_eq!(
            result,
            Err(DatasetError::NotAnArray {
                collection: Collection::Cards
            })
        );
    }

    #[test]
    fn malformed_documents_report_the_collection() {
        let result = parse_document(Collection::Sets, "[{");
        assert!(matches!(
            result,
            Err(DatasetError::ParseError {
                collection: Collection::Sets,
                ..
            })
        ));
    }

    #[test]
    fn record_errors_carry_the_index() {
        #[derive(Debug, serde::Deserialize)]
        #[expect(dead_code, reason = "only the shape is under test")]
        struct Named {
            name: String,
        }

        let bundle = DatasetBundle::bundled().expect("bundled dataset");
        let result = bundle.records::<Named>(Collection::Players);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidRecord {
                collection: Collection::Players,
                index: 0,
                ..
            })
        ));
    }
}
