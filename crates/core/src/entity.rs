//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Cart line items are entities: two calculated entries with the same
/// identifier denote the same position in a cart, whatever their price.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
