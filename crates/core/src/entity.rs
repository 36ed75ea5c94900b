//! Entity trait: things tracked by identity rather than by value.

/// A domain object whose identity survives state changes.
///
/// A lendable item is still the same item after it has been borrowed and
/// returned; only its identifier decides that.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier.
    fn id(&self) -> Self::Id;

    /// Whether `other` denotes the same entity, regardless of current state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
