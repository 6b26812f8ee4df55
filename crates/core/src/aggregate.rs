//! Aggregate root trait for mutable domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small so modules can decide how they model state
/// transitions (direct mutation, pure functions, etc.) without bringing in
/// any infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Implementations should bump this exactly once per successful
    /// state-changing operation; rejected or no-op operations leave it
    /// unchanged.
    fn version(&self) -> u64;
}
