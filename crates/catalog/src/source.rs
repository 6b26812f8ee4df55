//! Catalog data sources.
//!
//! Where products come from is outside the core's contract: a hardcoded list
//! today, a fetched resource in a richer system. This seam keeps the catalog
//! itself agnostic.

use storefront_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::product::Product;

/// External collaborator supplying the product catalog.
pub trait CatalogSource {
    fn load(&self) -> DomainResult<Catalog>;
}

/// A fixed, in-memory product list (the mock-data path).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> DomainResult<Catalog> {
        Ok(Catalog::new(self.products.clone()))
    }
}

/// A JSON payload holding an array of products (the fetched-resource path).
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    payload: String,
}

impl JsonCatalogSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> DomainResult<Catalog> {
        let products: Vec<Product> = serde_json::from_str(&self.payload)
            .map_err(|e| DomainError::validation(format!("catalog payload: {e}")))?;
        Ok(Catalog::new(products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_source_loads_products_in_order() {
        let source = JsonCatalogSource::new(
            r#"[
                {"id": "1", "name": "A", "price": 1000, "category": "x", "in_stock": true},
                {"id": "2", "name": "B", "price": 500, "category": "y", "in_stock": false}
            ]"#,
        );
        let catalog = source.load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].id.as_str(), "1");
        assert_eq!(catalog.products()[1].price, 500);
    }

    #[test]
    fn json_source_rejects_malformed_payload() {
        let source = JsonCatalogSource::new("not json");
        match source.load().unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn static_source_loads_empty_catalog() {
        let catalog = StaticCatalogSource::default().load().unwrap();
        assert!(catalog.is_empty());
    }
}
