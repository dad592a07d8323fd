//! Where a dataset is provisioned from.

use std::fmt;
use std::path::PathBuf;

/// Location of the dataset documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// The copy compiled into the crate.
    #[default]
    Bundled,
    /// A directory holding `manifest.json` and one document per collection.
    Directory(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}
