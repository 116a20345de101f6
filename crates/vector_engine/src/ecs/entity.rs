//! Entity implementation

use std::ops::{Deref, DerefMut};

slotmap::new_key_type! {
    /// Handle to an entity slot in an [`EntityStore`](super::EntityStore)
    ///
    /// Keys stay valid until the entity is reclaimed at a flush; after that
    /// lookups with the stale key return `None`.
    pub struct EntityKey;
}

/// Entity identifier, unique for the lifetime of a store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Get the raw id value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity record: identity, category tag, liveness and component slots
///
/// Dereferences to the component bag so slots read as `entity.transform`.
#[derive(Debug, Clone)]
pub struct Entity<T, C> {
    id: EntityId,
    tag: T,
    alive: bool,
    components: C,
}

impl<T: Copy, C: Default> Entity<T, C> {
    pub(super) fn new(id: u64, tag: T) -> Self {
        Self {
            id: EntityId(id),
            tag,
            alive: true,
            components: C::default(),
        }
    }

    /// Get the entity ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Get the entity's category tag
    pub fn tag(&self) -> T {
        self.tag
    }

    /// Whether the entity has not been destroyed
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the entity destroyed; it stays readable until the next flush
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Borrow the component bag
    pub fn components(&self) -> &C {
        &self.components
    }

    /// Mutably borrow the component bag
    pub fn components_mut(&mut self) -> &mut C {
        &mut self.components
    }
}

impl<T, C> Deref for Entity<T, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.components
    }
}

impl<T, C> DerefMut for Entity<T, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.components
    }
}
