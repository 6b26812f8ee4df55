use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

use crate::product::Product;

/// The full, ordered set of available products.
///
/// Read-only after construction: the catalog is loaded once from its data
/// source and the pipeline derives filtered views from it without mutation.
/// Original order is significant - it is the tie-break order for sorting and
/// the display order when no sort is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Unique categories in first-seen order, for the filter sidebar.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}
