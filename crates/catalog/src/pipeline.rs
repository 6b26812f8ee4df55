//! Filter/sort pipeline.
//!
//! A pure function of (catalog, criteria): no side effects, no errors. Unset
//! criteria fields apply no restriction, and with no sort key the catalog
//! order is preserved exactly. Sorting is stable, so products with equal sort
//! keys keep their relative catalog order; `Newest` over a catalog without
//! timestamps therefore degrades to catalog order rather than failing.

use core::cmp::Ordering;

use crate::catalog::Catalog;
use crate::criteria::{FilterCriteria, SortKey, SortOrder};
use crate::product::Product;

/// Derive the filtered, ordered view of the catalog for the given criteria.
pub fn apply(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    let mut view: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort_by {
        view.sort_by(|a, b| {
            let ordering = compare_by(key, a, b);
            match criteria.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    view
}

/// Whether a product satisfies every set predicate of the criteria.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    if let Some(category) = &criteria.category {
        if &product.category != category {
            return false;
        }
    }

    if let Some(range) = &criteria.price_range {
        if !range.contains(product.price) {
            return false;
        }
    }

    if criteria.in_stock_only && !product.in_stock {
        return false;
    }

    if criteria.featured_only && !product.featured {
        return false;
    }

    true
}

fn compare_by(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Price => a.price.cmp(&b.price),
        // Absent ratings compare as 0.
        SortKey::Rating => a
            .rating
            .unwrap_or(0.0)
            .total_cmp(&b.rating.unwrap_or(0.0)),
        // Option ordering puts missing timestamps before any present one.
        SortKey::Newest => a.created_at.cmp(&b.created_at),
    }
}
