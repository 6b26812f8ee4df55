use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{AggregateRoot, CartId, DomainError, DomainResult, ProductId, ValueObject};

/// A product snapshot plus the quantity selected for it.
///
/// Invariant: `quantity > 0`. The cart deletes entries instead of storing
/// zero or negative quantities, and deserialization rejects snapshots that
/// would reinstate one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCartEntry")]
pub struct CartEntry {
    pub product: Product,
    pub quantity: i64,
}

impl ValueObject for CartEntry {}

impl CartEntry {
    /// Line total in the smallest currency unit. Saturates at `u64::MAX`
    /// so totals stay defined for every state the cart admits.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(self.quantity as u64)
    }
}

/// Wire shape of an entry, before the quantity invariant is checked.
#[derive(Deserialize)]
struct UncheckedCartEntry {
    product: Product,
    quantity: i64,
}

impl TryFrom<UncheckedCartEntry> for CartEntry {
    type Error = DomainError;

    fn try_from(raw: UncheckedCartEntry) -> Result<Self, Self::Error> {
        if raw.quantity <= 0 {
            return Err(DomainError::invalid_quantity(raw.quantity));
        }
        Ok(Self {
            product: raw.product,
            quantity: raw.quantity,
        })
    }
}

/// Aggregate root: the shopping cart for one UI session.
///
/// A mapping from product identity to entry. Created empty at session start,
/// mutated by add/remove/update, never persisted by this crate (see
/// [`crate::store::CartStore`]). Entries iterate in product-id order so
/// renders are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    entries: BTreeMap<ProductId, CartEntry>,
    version: u64,
}

impl Cart {
    /// Create an empty cart for a new session.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            entries: BTreeMap::new(),
            version: 0,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// Increments the existing entry or inserts a new one. Non-positive
    /// quantities are rejected (never clamped) and leave the cart unchanged.
    pub fn add_item(&mut self, product: Product, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }

        match self.entries.get_mut(&product.id) {
            Some(entry) => {
                entry.quantity = entry
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::invariant("cart quantity overflow"))?;
            }
            None => {
                let id = product.id.clone();
                self.entries.insert(id, CartEntry { product, quantity });
            }
        }

        self.version += 1;
        Ok(())
    }

    /// The product-card "add to cart" action: one unit.
    pub fn add_one(&mut self, product: Product) -> DomainResult<()> {
        self.add_item(product, 1)
    }

    /// Delete the entry for a product. Absent ids are a silent no-op,
    /// not an error.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.entries.remove(id).is_some() {
            self.version += 1;
        }
    }

    /// Set an entry's quantity exactly (not additive).
    ///
    /// A quantity of zero or less behaves as [`Cart::remove_item`]. Ids with
    /// no entry are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(entry) = self.entries.get_mut(id) {
            if entry.quantity != quantity {
                entry.quantity = quantity;
                self.version += 1;
            }
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.version += 1;
        }
    }

    /// Sum of quantities across all entries - the navigation badge number.
    /// Zero for an empty cart, never negative; saturates at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.entries
            .values()
            .fold(0i64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Sum of price x quantity across all entries, in the smallest
    /// currency unit. Saturates at `u64::MAX`.
    pub fn subtotal(&self) -> u64 {
        self.entries
            .values()
            .fold(0u64, |acc, e| acc.saturating_add(e.line_total()))
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.contains_key(id)
    }

    /// Quantity for a product, or 0 when it has no entry.
    pub fn quantity_of(&self, id: &ProductId) -> i64 {
        self.entries.get(id).map_or(0, |e| e.quantity)
    }

    /// Entries in product-id order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CartId::new())
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
