//! Shopping cart domain module.
//!
//! This crate contains the cart aggregate (product -> quantity) and the
//! session-persistence seam, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod cart;
pub mod store;

pub use cart::{Cart, CartEntry};
pub use store::{CartStore, InMemoryCartStore};
