//! Catalog configuration loaded via OrthoConfig.

use std::path::PathBuf;

use catalog_data::DatasetSource;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Settings shared by every catalog front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Directory holding `manifest.json` and the collection documents.
    /// The bundled dataset is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl CatalogSettings {
    /// Where the catalog dataset should be loaded from.
    pub fn dataset_source(&self) -> DatasetSource {
        self.data_dir
            .clone()
            .map_or(DatasetSource::Bundled, DatasetSource::Directory)
    }
}
