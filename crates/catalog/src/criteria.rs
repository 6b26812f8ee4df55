use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Inclusive price bounds, in the smallest currency unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl ValueObject for PriceRange {}

/// Sort key selected in the filter panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Rating,
    Newest,
}

/// Sort direction; meaningful only when a sort key is set.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// User-selected filter/sort configuration.
///
/// Owned by the presentation layer as transient UI state and replaced
/// wholesale on every interaction - the pipeline never patches it in place.
/// Every field is independently optional; an unset field applies no
/// restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive category match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// True restricts to in-stock products; false applies no restriction.
    #[serde(default)]
    pub in_stock_only: bool,
    /// True restricts to featured products; false applies no restriction.
    #[serde(default)]
    pub featured_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// No predicates and no sort: the pipeline returns the catalog unchanged.
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Number of active criteria, shown next to the "Filters" toggle and
    /// gating the Clear All action.
    pub fn active_filter_count(&self) -> usize {
        [
            self.category.is_some(),
            self.price_range.is_some(),
            self.in_stock_only,
            self.featured_only,
            self.sort_by.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }
}

impl ValueObject for FilterCriteria {}
