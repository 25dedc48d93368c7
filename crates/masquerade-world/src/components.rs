//! Component types consumed by identity resolution.
//!
//! Each component is an optional fragment attached to an entity:
//!
//! | Component      | Data                                  |
//! |----------------|---------------------------------------|
//! | [`MetaData`]   | entity name and [`LifeStage`]         |
//! | [`Identity`]   | the disguise entity currently worn    |
//! | [`Ghost`]      | marker, no data                       |
//! | [`Actor`]      | the bound [`PlayerSession`]           |
//!
//! Lookups go through [`ComponentRef`], a tagged variant over borrowed
//! components. The [`Component`] trait maps a concrete type to its
//! [`ComponentKind`] and back out of a `ComponentRef`, which is what lets
//! [`StoreExt::try_get`](crate::StoreExt::try_get) offer typed access over an
//! object-safe store.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::EntityId;
use crate::lifecycle::LifeStage;

// =============================================================================
// Component Data
// =============================================================================

/// Name and lifecycle stage of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    /// Display name as authored for this entity.
    pub name: String,
    /// Construction progress.
    pub life_stage: LifeStage,
}

impl MetaData {
    /// Creates metadata for a fully initialized entity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            life_stage: LifeStage::Initialized,
        }
    }

    /// Creates metadata at an explicit lifecycle stage.
    #[must_use]
    pub fn at_stage(name: impl Into<String>, life_stage: LifeStage) -> Self {
        Self {
            name: name.into(),
            life_stage,
        }
    }
}

/// Disguise slot of an entity.
///
/// `slot` holds the entity whose name is shown in place of the wearer's own.
/// An empty slot means the wearer is undisguised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The disguise entity currently worn, if any.
    pub slot: Option<EntityId>,
}

impl Identity {
    /// Identity component with an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// Identity component wearing `disguise`.
    #[must_use]
    pub const fn wearing(disguise: EntityId) -> Self {
        Self {
            slot: Some(disguise),
        }
    }
}

/// Marks an observer with transparent visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost;

/// A connected player's session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSession {
    /// Account name of the player.
    pub name: String,
}

impl PlayerSession {
    /// Creates a session for the given account name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Binds an entity to a player session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The controlling session.
    pub session: PlayerSession,
}

impl Actor {
    /// Creates an actor bound to a session with the given account name.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            session: PlayerSession::new(username),
        }
    }

    /// Account name of the bound session.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.session.name
    }
}

// =============================================================================
// Component Kinds
// =============================================================================

/// Discriminant for the component types a store can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// [`MetaData`]
    MetaData,
    /// [`Identity`]
    Identity,
    /// [`Ghost`]
    Ghost,
    /// [`Actor`]
    Actor,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::MetaData, Self::Identity, Self::Ghost, Self::Actor];

    /// The single-bit [`ComponentSet`] for this kind.
    #[must_use]
    pub const fn as_set(self) -> ComponentSet {
        match self {
            Self::MetaData => ComponentSet::META_DATA,
            Self::Identity => ComponentSet::IDENTITY,
            Self::Ghost => ComponentSet::GHOST,
            Self::Actor => ComponentSet::ACTOR,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetaData => write!(f, "MetaData"),
            Self::Identity => write!(f, "Identity"),
            Self::Ghost => write!(f, "Ghost"),
            Self::Actor => write!(f, "Actor"),
        }
    }
}

bitflags! {
    /// Set of component kinds attached to one entity.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ComponentSet: u8 {
        /// Has [`MetaData`].
        const META_DATA = 1 << 0;
        /// Has [`Identity`].
        const IDENTITY = 1 << 1;
        /// Has [`Ghost`].
        const GHOST = 1 << 2;
        /// Has [`Actor`].
        const ACTOR = 1 << 3;
    }
}

impl ComponentSet {
    /// Returns `true` if `kind` is in the set.
    #[must_use]
    pub const fn has(self, kind: ComponentKind) -> bool {
        self.contains(kind.as_set())
    }
}

// =============================================================================
// Typed Access
// =============================================================================

/// A borrowed component, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRef<'a> {
    /// Borrowed [`MetaData`].
    MetaData(&'a MetaData),
    /// Borrowed [`Identity`].
    Identity(&'a Identity),
    /// Borrowed [`Ghost`].
    Ghost(&'a Ghost),
    /// Borrowed [`Actor`].
    Actor(&'a Actor),
}

impl ComponentRef<'_> {
    /// Returns the kind of the borrowed component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::MetaData(_) => ComponentKind::MetaData,
            Self::Identity(_) => ComponentKind::Identity,
            Self::Ghost(_) => ComponentKind::Ghost,
            Self::Actor(_) => ComponentKind::Actor,
        }
    }
}

/// A concrete component type that can be looked up through a store.
pub trait Component: Sized + 'static {
    /// Kind used for store lookups.
    const KIND: ComponentKind;

    /// Unwraps a [`ComponentRef`] of the matching kind.
    fn from_ref(component: ComponentRef<'_>) -> Option<&Self>;
}

impl Component for MetaData {
    const KIND: ComponentKind = ComponentKind::MetaData;

    fn from_ref(component: ComponentRef<'_>) -> Option<&Self> {
        match component {
            ComponentRef::MetaData(c) => Some(c),
            _ => None,
        }
    }
}

impl Component for Identity {
    const KIND: ComponentKind = ComponentKind::Identity;

    fn from_ref(component: ComponentRef<'_>) -> Option<&Self> {
        match component {
            ComponentRef::Identity(c) => Some(c),
            _ => None,
        }
    }
}

impl Component for Ghost {
    const KIND: ComponentKind = ComponentKind::Ghost;

    fn from_ref(component: ComponentRef<'_>) -> Option<&Self> {
        match component {
            ComponentRef::Ghost(c) => Some(c),
            _ => None,
        }
    }
}

impl Component for Actor {
    const KIND: ComponentKind = ComponentKind::Actor;

    fn from_ref(component: ComponentRef<'_>) -> Option<&Self> {
        match component {
            ComponentRef::Actor(c) => Some(c),
            _ => None,
        }
    }
}
