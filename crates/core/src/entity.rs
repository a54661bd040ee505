//! Documents that keep their identity while their contents change.
//!
//! An invoice submitted, approved, or re-priced in draft is still the same
//! invoice. Two invoices with identical amounts and dates are still two
//! invoices. Equality of the data says nothing about sameness; the id does.

/// A domain object identified by an id, not by its attributes.
pub trait Entity {
    /// Identifier type. Stable for the lifetime of the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity, whatever state either is in.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
