//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value. `FilterState`, `Threshold` and `SearchConfig` are value
/// objects: two filter states holding the same query and the same active
/// tokens are interchangeable, which is what lets resolution be a pure
/// function of its inputs.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Threshold(f64);
///
/// impl ValueObject for Threshold {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
