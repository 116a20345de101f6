//! Entity store with tag-indexed views and frame-deferred mutation
//!
//! Creation and destruction never touch the live views directly. New entities
//! wait in a pending list (or in the scheduled queue for staggered release)
//! and destroyed entities stay in place until [`EntityStore::flush`], which the
//! frame loop calls once before any system runs.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;

use slotmap::SlotMap;

use super::entity::{Entity, EntityKey};

/// Owns every entity and the ordered views systems iterate over
pub struct EntityStore<T, C> {
    slots: SlotMap<EntityKey, Entity<T, C>>,
    live: Vec<EntityKey>,
    by_tag: BTreeMap<T, Vec<EntityKey>>,
    pending: Vec<EntityKey>,
    scheduled: VecDeque<EntityKey>,
    next_id: u64,
}

impl<T, C> EntityStore<T, C>
where
    T: Copy + Ord + Debug,
    C: Default,
{
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            live: Vec::new(),
            by_tag: BTreeMap::new(),
            pending: Vec::new(),
            scheduled: VecDeque::new(),
            next_id: 0,
        }
    }

    fn allocate(&mut self, tag: T) -> EntityKey {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.insert(Entity::new(id, tag))
    }

    /// Create an entity that becomes visible at the next flush
    ///
    /// The returned key can be used right away to attach components.
    pub fn create(&mut self, tag: T) -> EntityKey {
        let key = self.allocate(tag);
        self.pending.push(key);
        log::trace!("Created {:?} entity {:?}", tag, key);
        key
    }

    /// Create an entity that waits in the delayed queue until released
    pub fn schedule(&mut self, tag: T) -> EntityKey {
        let key = self.allocate(tag);
        self.scheduled.push_back(key);
        key
    }

    /// Move the oldest scheduled entity to the pending list, if any
    pub fn release_next_scheduled(&mut self) -> Option<EntityKey> {
        let key = self.scheduled.pop_front()?;
        self.pending.push(key);
        Some(key)
    }

    /// Drop every entity still waiting in the delayed queue; returns how many
    pub fn clear_scheduled(&mut self) -> usize {
        let count = self.scheduled.len();
        for key in self.scheduled.drain(..) {
            self.slots.remove(key);
        }
        count
    }

    /// All live entities in insertion order
    pub fn entities(&self) -> &[EntityKey] {
        &self.live
    }

    /// Live entities with `tag` in insertion order; empty for unknown tags
    pub fn entities_by_tag(&self, tag: T) -> &[EntityKey] {
        self.by_tag.get(&tag).map_or(&[], Vec::as_slice)
    }

    /// Tags that currently index at least one live entity
    pub fn tags(&self) -> impl Iterator<Item = T> + '_ {
        self.by_tag
            .iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(tag, _)| *tag)
    }

    /// Apply pending creations, then reclaim destroyed entities
    pub fn flush(&mut self) {
        for key in std::mem::take(&mut self.pending) {
            let Some(entity) = self.slots.get(key) else {
                continue;
            };
            self.by_tag.entry(entity.tag()).or_default().push(key);
            self.live.push(key);
        }

        let slots = &self.slots;
        let is_alive = |key: &EntityKey| slots.get(*key).is_some_and(Entity::is_alive);
        let before = self.live.len();
        self.live.retain(is_alive);
        if self.live.len() == before {
            return;
        }
        for keys in self.by_tag.values_mut() {
            keys.retain(is_alive);
        }
        let reclaimed = before - self.live.len();
        let scheduled = &self.scheduled;
        self.slots
            .retain(|key, entity| entity.is_alive() || scheduled.contains(&key));
        log::trace!("Flush reclaimed {} entities", reclaimed);
    }

    /// Look up an entity, including pending and destroyed-but-unflushed ones
    pub fn get(&self, key: EntityKey) -> Option<&Entity<T, C>> {
        self.slots.get(key)
    }

    /// Mutable lookup, including pending and destroyed-but-unflushed entities
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity<T, C>> {
        self.slots.get_mut(key)
    }

    /// Whether `key` refers to an entity that exists and is not destroyed
    pub fn is_alive(&self, key: EntityKey) -> bool {
        self.slots.get(key).is_some_and(Entity::is_alive)
    }

    /// Mark an entity destroyed; returns false for unknown keys
    pub fn destroy(&mut self, key: EntityKey) -> bool {
        match self.slots.get_mut(key) {
            Some(entity) => {
                entity.destroy();
                true
            }
            None => false,
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Entities created since the last flush
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Entities still waiting in the delayed queue
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.len()
    }
}

impl<T, C> Default for EntityStore<T, C>
where
    T: Copy + Ord + Debug,
    C: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Tag {
        Ship,
        Rock,
        Shot,
    }

    #[derive(Debug, Default)]
    struct Slots {
        hits: Option<u32>,
    }

    type Store = EntityStore<Tag, Slots>;

    #[test]
    fn test_created_entities_appear_after_flush() {
        let mut store = Store::new();
        let ship = store.create(Tag::Ship);
        store.get_mut(ship).unwrap().hits = Some(3);

        assert!(store.entities().is_empty());
        assert!(store.entities_by_tag(Tag::Ship).is_empty());
        assert_eq!(store.pending_count(), 1);

        store.flush();
        assert_eq!(store.entities(), &[ship]);
        assert_eq!(store.entities_by_tag(Tag::Ship), &[ship]);
        assert_eq!(store.get(ship).unwrap().hits, Some(3));
    }

    #[test]
    fn test_destroyed_entities_stay_visible_until_flush() {
        let mut store = Store::new();
        let rock = store.create(Tag::Rock);
        store.flush();

        assert!(store.destroy(rock));
        assert_eq!(store.entities(), &[rock]);
        assert!(!store.is_alive(rock));

        store.flush();
        assert!(store.entities().is_empty());
        assert!(store.entities_by_tag(Tag::Rock).is_empty());
        assert!(store.get(rock).is_none());
        assert!(!store.destroy(rock));
    }

    #[test]
    fn test_create_then_destroy_before_flush() {
        let mut store = Store::new();
        let shot = store.create(Tag::Shot);
        store.destroy(shot);
        store.flush();
        assert!(store.is_empty());
        assert!(store.get(shot).is_none());
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let mut store = Store::new();
        let first = store.create(Tag::Rock);
        let first_id = store.get(first).unwrap().id();
        store.flush();
        store.destroy(first);
        store.flush();

        let second = store.create(Tag::Rock);
        let second_id = store.get(second).unwrap().id();
        assert!(second_id > first_id);
        assert_ne!(first, second);
    }

    #[test]
    fn test_tag_views_partition_live_entities() {
        let mut store = Store::new();
        let keys = [
            store.create(Tag::Ship),
            store.create(Tag::Rock),
            store.create(Tag::Shot),
            store.create(Tag::Rock),
            store.create(Tag::Shot),
        ];
        store.flush();
        store.destroy(keys[3]);
        store.flush();

        let mut union: Vec<EntityKey> = [Tag::Ship, Tag::Rock, Tag::Shot]
            .iter()
            .flat_map(|tag| store.entities_by_tag(*tag).to_vec())
            .collect();
        assert_eq!(union.len(), store.len());
        union.sort();
        let mut all = store.entities().to_vec();
        all.sort();
        assert_eq!(union, all);

        for key in store.entities() {
            let tag = store.get(*key).unwrap().tag();
            let views = [Tag::Ship, Tag::Rock, Tag::Shot]
                .iter()
                .filter(|t| store.entities_by_tag(**t).contains(key))
                .count();
            assert_eq!(views, 1, "{tag:?} entity appears in {views} views");
        }
    }

    #[test]
    fn test_insertion_order_within_tag() {
        let mut store = Store::new();
        let a = store.create(Tag::Rock);
        let _ = store.create(Tag::Ship);
        let b = store.create(Tag::Rock);
        store.flush();
        let c = store.create(Tag::Rock);
        store.flush();
        assert_eq!(store.entities_by_tag(Tag::Rock), &[a, b, c]);
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let store = Store::new();
        assert!(store.entities_by_tag(Tag::Shot).is_empty());
        assert_eq!(store.tags().count(), 0);
    }

    #[test]
    fn test_scheduled_entities_release_one_at_a_time() {
        let mut store = Store::new();
        let first = store.schedule(Tag::Rock);
        let second = store.schedule(Tag::Rock);
        store.flush();
        assert!(store.is_empty());
        assert_eq!(store.scheduled_count(), 2);

        assert_eq!(store.release_next_scheduled(), Some(first));
        store.flush();
        assert_eq!(store.entities(), &[first]);

        assert_eq!(store.release_next_scheduled(), Some(second));
        assert_eq!(store.release_next_scheduled(), None);
        store.flush();
        assert_eq!(store.entities(), &[first, second]);
    }

    #[test]
    fn test_cleared_schedule_releases_nothing() {
        let mut store = Store::new();
        let waiting = store.schedule(Tag::Rock);
        store.schedule(Tag::Rock);

        assert_eq!(store.clear_scheduled(), 2);
        assert_eq!(store.scheduled_count(), 0);
        assert!(store.get(waiting).is_none());
        assert_eq!(store.release_next_scheduled(), None);
    }

    #[test]
    fn test_flush_keeps_destroyed_scheduled_entities_until_released() {
        let mut store = Store::new();
        let live = store.create(Tag::Ship);
        let waiting = store.schedule(Tag::Rock);
        store.flush();
        store.destroy(live);
        store.flush();
        assert!(store.get(waiting).is_some());
        assert_eq!(store.release_next_scheduled(), Some(waiting));
    }
}
