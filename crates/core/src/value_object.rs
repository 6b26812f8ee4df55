//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value with the new attributes - the filter criteria in this
/// workspace are the canonical example: the UI replaces them wholesale on
/// every interaction instead of patching fields in place.
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
