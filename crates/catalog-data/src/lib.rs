//! Bundled static reference dataset for the card catalog browser.
//!
//! This crate provisions the raw collections (cards, leaders, players,
//! factions, sets, articles) that the catalog core turns into typed records.
//! It is independent of the catalog domain types; callers deserialise the
//! records they need through [`DatasetBundle::records`].
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A copy of the dataset compiled into the binary ([`DatasetBundle::bundled`])
//! - Loading the same layout from a directory on disk ([`DatasetBundle::from_dir`])
//! - Manifest version checks and structural validation of every document
//!
//! # Example
//!
//! ```
//! use catalog_data::{Collection, DatasetBundle};
//!
//! let bundle = DatasetBundle::bundled().expect("bundled dataset is valid");
//! assert_eq!(bundle.manifest().version(), 1);
//! assert!(bundle.len(Collection::Cards) > 0);
//! ```

mod bundle;
mod collection;
mod error;
mod manifest;
mod source;

pub use bundle::DatasetBundle;
pub use collection::Collection;
pub use error::DatasetError;
pub use manifest::{DatasetManifest, SUPPORTED_VERSION};
pub use source::DatasetSource;
