//! Filterable, sortable views over card-game reference data.
//!
//! The crate is layered leaves first:
//!
//! - [`domain`]: validated records and the closed vocabularies they use.
//! - [`pipeline`]: pure filter, sort and group functions, plus the card
//!   filter query-string codec.
//! - [`stores`]: owned, subscribable stores that recompute their derived
//!   views after every mutation.
//!
//! [`Catalog`] loads typed collections from a [`DatasetSource`];
//! [`CatalogStores`] builds one store of each kind from it.
//!
//! ```
//! use catalog::domain::{FactionId, SetId};
//! use catalog::{Catalog, CatalogStores};
//!
//! let mut stores = CatalogStores::new(&Catalog::bundled()?);
//! stores.cards.toggle_faction(FactionId::Fremen);
//! stores.cards.toggle_set(SetId::Imperium);
//! assert!(stores.cards.stats().filtered <= stores.cards.stats().total);
//! # Ok::<(), catalog::CatalogLoadError>(())
//! ```

pub mod articles;
pub mod config;
mod dataset;
pub mod domain;
pub mod pipeline;
pub mod stores;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use articles::{ArticleNotFound, ArticlePage, find_article_page};
pub use catalog_data::DatasetSource;
pub use config::CatalogSettings;
pub use dataset::{Catalog, CatalogLoadError};
pub use stores::CatalogStores;
