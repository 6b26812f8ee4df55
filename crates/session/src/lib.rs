//! Storefront session: the presentation layer's in-process contract.
//!
//! One session owns the catalog, the current filter criteria and the cart.
//! The derived product view is recomputed synchronously whenever catalog or
//! criteria change - explicit recomputation, no hidden observers - so the
//! presentation layer never sees a partial or stale result.

pub mod session;

pub use session::StorefrontSession;
