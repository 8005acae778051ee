//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A tracked record keeps its identifier across wholesale replacement, so two
/// snapshots with the same id describe the same row even when every other
/// attribute differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
