//! In-memory component store.
//!
//! [`World`] is the reference [`ComponentStore`]: a `BTreeMap` of entity
//! records with monotonically assigned ids. Iteration is always in id order.
//!
//! Entity ids start at 1; [`EntityId::INVALID`] is never handed out.
//! Snapshots may only carry ids up to [`MAX_LOADED_ID`], which leaves the
//! spawn counter more ids than can ever be allocated.
//!
//! # Example
//!
//! ```
//! use masquerade_world::{ComponentKind, ComponentStore, World};
//!
//! let mut world = World::new();
//! let bob = world.spawn("Bob");
//! let jane = world.spawn("Jane");
//!
//! world.set_identity_slot(bob, Some(jane)).unwrap();
//! assert!(world.has_component(bob, ComponentKind::Identity));
//!
//! let ids: Vec<_> = world.entity_ids_sorted().collect();
//! assert_eq!(ids, vec![bob, jane]);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::{
    Actor, ComponentKind, ComponentRef, ComponentSet, Ghost, Identity, MetaData,
};
use crate::entity::EntityId;
use crate::error::WorldError;
use crate::lifecycle::LifeStage;
use crate::store::ComponentStore;

static GHOST: Ghost = Ghost;

/// Largest entity key or counter value [`World::from_json_str`] accepts.
pub const MAX_LOADED_ID: u64 = u64::MAX >> 1;

/// Components attached to one entity.
///
/// The ghost marker is stored as a flag so that it survives a JSON round trip
/// (a unit struct would encode as `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct EntityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<MetaData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity: Option<Identity>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    ghost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actor: Option<Actor>,
}

impl EntityRecord {
    fn components(&self) -> ComponentSet {
        let mut set = ComponentSet::empty();
        set.set(ComponentSet::META_DATA, self.meta.is_some());
        set.set(ComponentSet::IDENTITY, self.identity.is_some());
        set.set(ComponentSet::GHOST, self.ghost);
        set.set(ComponentSet::ACTOR, self.actor.is_some());
        set
    }
}

/// In-memory entity/component store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Next id to hand out. Never 0 once loaded.
    #[serde(default)]
    next_id: u64,
    /// Live entities in id order.
    entities: BTreeMap<EntityId, EntityRecord>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: BTreeMap::new(),
        }
    }

    /// Spawns a fully initialized entity with the given name.
    pub fn spawn(&mut self, name: impl Into<String>) -> EntityId {
        self.spawn_at_stage(name, LifeStage::Initialized)
    }

    /// Spawns an entity whose metadata reports `stage`.
    ///
    /// Use an early stage to model entities still under construction.
    pub fn spawn_at_stage(&mut self, name: impl Into<String>, stage: LifeStage) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let record = EntityRecord {
            meta: Some(MetaData::at_stage(name, stage)),
            ..EntityRecord::default()
        };
        self.entities.insert(id, record);

        debug!(entity = %id, %stage, "spawned entity");
        id
    }

    /// Removes an entity and all of its components.
    ///
    /// Identity slots on other entities that point at `id` are left as they
    /// are; readers treat them as unresolvable.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn despawn(&mut self, id: EntityId) -> Result<(), WorldError> {
        Self::check_handle(id)?;
        self.entities
            .remove(&id)
            .ok_or(WorldError::NoSuchEntity(id))?;
        debug!(entity = %id, "despawned entity");
        Ok(())
    }

    /// Attaches (or replaces) the identity component of `id`.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn insert_identity(&mut self, id: EntityId, identity: Identity) -> Result<(), WorldError> {
        if let Some(target) = identity.slot {
            self.warn_if_unknown(id, target);
        }
        self.record_mut(id)?.identity = Some(identity);
        Ok(())
    }

    /// Sets the identity slot of `id`, attaching an identity component if
    /// the entity has none. Returns the previous slot contents.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn set_identity_slot(
        &mut self,
        id: EntityId,
        slot: Option<EntityId>,
    ) -> Result<Option<EntityId>, WorldError> {
        if let Some(target) = slot {
            self.warn_if_unknown(id, target);
        }
        let identity = self
            .record_mut(id)?
            .identity
            .get_or_insert_with(Identity::empty);
        Ok(std::mem::replace(&mut identity.slot, slot))
    }

    /// Binds `id` to a player session.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn insert_actor(&mut self, id: EntityId, actor: Actor) -> Result<(), WorldError> {
        self.record_mut(id)?.actor = Some(actor);
        Ok(())
    }

    /// Marks `id` as a ghost.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn insert_ghost(&mut self, id: EntityId) -> Result<(), WorldError> {
        self.record_mut(id)?.ghost = true;
        Ok(())
    }

    /// Detaches the component of `kind` from `id`. Returns whether it was
    /// present.
    ///
    /// Removing [`ComponentKind::MetaData`] leaves a live entity without a
    /// name, which identity queries report as unknown.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn remove_component(
        &mut self,
        id: EntityId,
        kind: ComponentKind,
    ) -> Result<bool, WorldError> {
        let record = self.record_mut(id)?;
        let removed = match kind {
            ComponentKind::MetaData => record.meta.take().is_some(),
            ComponentKind::Identity => record.identity.take().is_some(),
            ComponentKind::Ghost => std::mem::take(&mut record.ghost),
            ComponentKind::Actor => record.actor.take().is_some(),
        };
        Ok(removed)
    }

    /// Moves `id` to another lifecycle stage.
    ///
    /// # Errors
    ///
    /// [`WorldError::MissingComponent`] if the entity has no metadata, plus
    /// the handle errors.
    pub fn set_life_stage(&mut self, id: EntityId, stage: LifeStage) -> Result<(), WorldError> {
        let meta = self
            .record_mut(id)?
            .meta
            .as_mut()
            .ok_or(WorldError::MissingComponent {
                id,
                kind: ComponentKind::MetaData,
            })?;
        meta.life_stage = stage;
        Ok(())
    }

    /// Renames `id`. Attaches fresh metadata if the entity had none.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidHandle`] or [`WorldError::NoSuchEntity`].
    pub fn rename(&mut self, id: EntityId, name: impl Into<String>) -> Result<(), WorldError> {
        let record = self.record_mut(id)?;
        match record.meta.as_mut() {
            Some(meta) => meta.name = name.into(),
            None => record.meta = Some(MetaData::new(name)),
        }
        Ok(())
    }

    /// Returns the set of component kinds attached to `id`.
    ///
    /// Unknown entities have the empty set.
    #[must_use]
    pub fn components(&self, id: EntityId) -> ComponentSet {
        self.entities
            .get(&id)
            .map_or_else(ComponentSet::empty, EntityRecord::components)
    }

    /// Returns `true` if `id` is a live entity.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Returns an iterator over entity IDs in sorted order.
    pub fn entity_ids_sorted(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the world has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Encodes the world as JSON.
    ///
    /// # Errors
    ///
    /// [`WorldError::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a world from JSON produced by [`World::to_json_string`] or
    /// written by hand as a fixture.
    ///
    /// # Errors
    ///
    /// [`WorldError::Serialization`] on malformed input.
    /// [`WorldError::IdOutOfRange`] if an entity key is `0` or either an
    /// entity key or the stored counter exceeds [`MAX_LOADED_ID`].
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        let mut world: Self = serde_json::from_str(json)?;
        if world.entities.contains_key(&EntityId::INVALID) {
            return Err(WorldError::IdOutOfRange(0));
        }
        let max_id = world.entities.keys().next_back().map_or(0, |id| id.as_u64());
        for value in [max_id, world.next_id] {
            if value > MAX_LOADED_ID {
                return Err(WorldError::IdOutOfRange(value));
            }
        }
        // Hand-written fixtures may omit or understate the counter.
        world.next_id = world.next_id.max(max_id + 1);
        Ok(world)
    }

    fn check_handle(id: EntityId) -> Result<(), WorldError> {
        if id.is_valid() {
            Ok(())
        } else {
            Err(WorldError::InvalidHandle)
        }
    }

    fn record_mut(&mut self, id: EntityId) -> Result<&mut EntityRecord, WorldError> {
        Self::check_handle(id)?;
        self.entities
            .get_mut(&id)
            .ok_or(WorldError::NoSuchEntity(id))
    }

    fn warn_if_unknown(&self, wearer: EntityId, target: EntityId) {
        if !self.contains(target) {
            warn!(
                entity = %wearer,
                disguise = %target,
                "identity slot points at an unknown entity"
            );
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentStore for World {
    fn is_valid(&self, id: EntityId) -> bool {
        id.is_valid() && self.contains(id)
    }

    fn component(&self, id: EntityId, kind: ComponentKind) -> Option<ComponentRef<'_>> {
        let record = self.entities.get(&id)?;
        match kind {
            ComponentKind::MetaData => record.meta.as_ref().map(ComponentRef::MetaData),
            ComponentKind::Identity => record.identity.as_ref().map(ComponentRef::Identity),
            ComponentKind::Ghost => record.ghost.then_some(ComponentRef::Ghost(&GHOST)),
            ComponentKind::Actor => record.actor.as_ref().map(ComponentRef::Actor),
        }
    }

    fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.components(id).has(kind)
    }
}
