use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// A product record as supplied by the catalog data source.
///
/// Products are immutable: created once at catalog load, never mutated.
/// Identity is the `id` field alone. Prices are carried in the smallest
/// currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    /// Present only when a discount applies; expected >= `price`, not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    /// Opaque image reference for the presentation layer.
    #[serde(default)]
    pub image: String,
    /// Free-form category, matched case-sensitively by the pipeline.
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    /// Star rating 0-5; absent ratings sort as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Orderable key backing the `newest` sort. Optional: catalog data that
    /// carries no timestamps keeps catalog order under that sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether a discount applies (original price present and above price).
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    /// Percentage off the original price, rounded; 0 when no discount.
    pub fn discount_percent(&self) -> u8 {
        match self.original_price {
            Some(orig) if orig > self.price => {
                let off = (orig - self.price) as f64 / orig as f64 * 100.0;
                off.round() as u8
            }
            _ => 0,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
