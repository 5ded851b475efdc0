//! Domain Layer - Core Entity Trait
//!
//! Every record the UI keeps in a collection is addressed by an id.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Eq + std::hash::Hash + Clone;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Apply `patch` to the entity with the given id, in place.
///
/// Returns `false` when no entity carries that id. The collection keeps its
/// order and length either way.
pub fn patch_by_id<T, F>(entities: &mut [T], id: &T::Id, patch: F) -> bool
where
    T: Entity,
    F: FnOnce(&mut T),
{
    match entities.iter_mut().find(|e| e.id() == id) {
        Some(entity) => {
            patch(entity);
            true
        }
        None => false,
    }
}
