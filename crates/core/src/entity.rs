//! Entities: records whose identity survives edits.

/// Something the ledger tracks by id rather than by value.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Id lookups over insertion-ordered collections.
pub trait EntitySlice<E: Entity> {
    fn find_by_id(&self, id: &E::Id) -> Option<&E>;
    fn position_of(&self, id: &E::Id) -> Option<usize>;
}

impl<E: Entity> EntitySlice<E> for [E] {
    fn find_by_id(&self, id: &E::Id) -> Option<&E> {
        self.iter().find(|e| e.id() == id)
    }

    fn position_of(&self, id: &E::Id) -> Option<usize> {
        self.iter().position(|e| e.id() == id)
    }
}
