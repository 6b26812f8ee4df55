//! Catalog domain module.
//!
//! This crate contains the product data model, the read-only catalog store and
//! the filter/sort pipeline, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod catalog;
pub mod criteria;
pub mod pipeline;
pub mod product;
pub mod source;

pub use catalog::Catalog;
pub use criteria::{FilterCriteria, PriceRange, SortKey, SortOrder};
pub use product::Product;
pub use source::{CatalogSource, JsonCatalogSource, StaticCatalogSource};
