//! Product catalog for the storefront.
//!
//! The catalog is read-only from the cart's point of view: it supplies an ordered
//! list of immutable products and lookup by id. Search and category filtering
//! live here too since they only ever read the catalog.

pub mod catalog;
pub mod demo;
pub mod error;
pub mod product;

pub use catalog::{Catalog, StaticCatalog};
pub use error::CatalogError;
pub use product::{Category, Product};
