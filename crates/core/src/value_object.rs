//! Value object trait: equality by value, not identity.
//!
//! Prices, taxes and line items are defined entirely by their attribute
//! values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Implementors expose their state through accessors only.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TaxRule { rate: Decimal }
///
/// impl ValueObject for TaxRule {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
