//! Entity store and component kinds
//!
//! Entities are plain records: an id, an immutable tag and a caller-defined
//! bag of optional component slots. Systems are ordinary functions that walk
//! the store's tag views and branch on which slots are filled.

pub mod entity;
pub mod store;
pub mod components;

pub use entity::{Entity, EntityId, EntityKey};
pub use store::EntityStore;
