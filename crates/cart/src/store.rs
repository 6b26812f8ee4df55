//! Cart persistence seam.
//!
//! Carts are session-only state in this core; durability belongs to an
//! external collaborator behind this load/save interface. [`Cart`] is
//! serde-serializable so real stores can snapshot it however they like.

use std::collections::HashMap;
use std::sync::RwLock;

use storefront_core::{CartId, DomainError, DomainResult};

use crate::cart::Cart;

/// External collaborator persisting carts between sessions.
pub trait CartStore {
    /// Fetch a previously saved cart, or `None` for a fresh session.
    fn load(&self, id: CartId) -> DomainResult<Option<Cart>>;

    /// Snapshot the cart's current state.
    fn save(&self, cart: &Cart) -> DomainResult<()>;
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    inner: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for InMemoryCartStore {
    fn load(&self, id: CartId) -> DomainResult<Option<Cart>> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::invariant("cart store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    fn save(&self, cart: &Cart) -> DomainResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::invariant("cart store lock poisoned"))?;
        map.insert(cart.id_typed(), cart.clone());
        Ok(())
    }
}
