//! Display identity of entities.
//!
//! [`IdentityResolver`] decides what name an observer sees for an entity and
//! which entity stands in for it in further queries (for example when a
//! message needs pronouns or grammatical gender of the *visible* identity).
//!
//! The resolver reads from any [`ComponentStore`] passed into each call and
//! never mutates it. Missing components and invalid handles are not errors;
//! each one maps to a fixed fallback.
//!
//! # Name rules
//!
//! Evaluated in order, first match wins:
//!
//! 1. Invalid subject or no [`MetaData`]: empty string.
//! 2. Subject at or before [`LifeStage::Initializing`](masquerade_world::LifeStage):
//!    raw name. Nothing else is read, other components may not be ready.
//! 3. Ghost viewer and subject bound to a player: `"name (account)"`.
//! 4. No [`Identity`], empty slot, or slot entity without metadata: raw name.
//! 5. Viewer cannot see through the disguise: disguise name.
//! 6. Viewer sees through and both names match: raw name.
//! 7. Otherwise `"name (disguise)"`.
//!
//! An entity looking at itself is not special-cased. A disguised player sees
//! the same name everyone else sees.
//!
//! # Example
//!
//! ```
//! use masquerade_core::IdentityResolver;
//! use masquerade_world::World;
//!
//! let mut world = World::new();
//! let bob = world.spawn("Bob");
//! let mask = world.spawn("Jane");
//! let ghost = world.spawn("Observer");
//! world.set_identity_slot(bob, Some(mask))?;
//! world.insert_ghost(ghost)?;
//!
//! let resolver = IdentityResolver::default();
//! assert_eq!(resolver.name(bob, &world, None), "Jane");
//! assert_eq!(resolver.name(bob, &world, Some(ghost)), "Bob (Jane)");
//! assert_eq!(resolver.entity(bob, &world), mask);
//! # Ok::<(), masquerade_world::WorldError>(())
//! ```

use tracing::trace;

use masquerade_world::{Actor, ComponentStore, EntityId, Ghost, Identity, MetaData, StoreExt};

use crate::config::ResolverConfig;
use crate::resolution::NameResolution;

/// Resolves display names and identity entities.
///
/// Holds only its configuration, so one resolver can be shared freely across
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityResolver {
    config: ResolverConfig,
}

impl IdentityResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the resolver's configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the name `viewer` should see for `subject`.
    ///
    /// Pass `None` as viewer when there is no particular observer (logs,
    /// broadcast text); that is treated like an unprivileged viewer.
    #[must_use]
    pub fn name<S>(&self, subject: EntityId, store: &S, viewer: Option<EntityId>) -> String
    where
        S: ComponentStore + ?Sized,
    {
        self.resolve(subject, store, viewer).to_string()
    }

    /// Like [`IdentityResolver::name`], but reports which rule produced the
    /// name.
    #[must_use]
    pub fn resolve<S>(
        &self,
        subject: EntityId,
        store: &S,
        viewer: Option<EntityId>,
    ) -> NameResolution
    where
        S: ComponentStore + ?Sized,
    {
        let resolution = self.resolve_inner(subject, store, viewer);
        trace!(
            subject = %subject,
            viewer = ?viewer,
            branch = resolution.branch(),
            disguised = resolution.is_disguised(),
            "resolved display name"
        );
        resolution
    }

    fn resolve_inner<S>(
        &self,
        subject: EntityId,
        store: &S,
        viewer: Option<EntityId>,
    ) -> NameResolution
    where
        S: ComponentStore + ?Sized,
    {
        if !subject.is_valid() || !store.is_valid(subject) {
            return NameResolution::Unknown;
        }
        let Some(meta) = store.try_get::<MetaData>(subject) else {
            return NameResolution::Unknown;
        };

        if meta.life_stage.is_initializing() {
            return NameResolution::Initializing {
                name: meta.name.clone(),
            };
        }

        let ghost_viewer = viewer.is_some_and(|v| store.has::<Ghost>(v));

        if ghost_viewer && self.config.reveal_usernames_to_ghosts {
            if let Some(actor) = store.try_get::<Actor>(subject) {
                return NameResolution::Account {
                    name: meta.name.clone(),
                    username: actor.username().to_owned(),
                };
            }
        }

        let plain = || NameResolution::Plain {
            name: meta.name.clone(),
        };

        let Some(identity) = store.try_get::<Identity>(subject) else {
            return plain();
        };
        let Some(disguise) = identity
            .slot
            .and_then(|slot| store.try_get::<MetaData>(slot))
        else {
            return plain();
        };

        let sees_through =
            viewer.is_some_and(|v| self.can_see_through_identity(subject, v, store));

        if !sees_through {
            return NameResolution::Disguised {
                disguise: disguise.name.clone(),
            };
        }
        if meta.name == disguise.name {
            return plain();
        }

        NameResolution::Revealed {
            name: meta.name.clone(),
            disguise: disguise.name.clone(),
        }
    }

    /// Returns the entity that stands in for `subject`: the worn disguise if
    /// there is one, `subject` itself otherwise.
    ///
    /// Unlike [`IdentityResolver::name`] this does not look at the lifecycle
    /// stage.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn entity<S>(&self, subject: EntityId, store: &S) -> EntityId
    where
        S: ComponentStore + ?Sized,
    {
        store
            .try_get::<Identity>(subject)
            .and_then(|identity| identity.slot)
            .unwrap_or(subject)
    }

    /// Returns `true` if `viewer` sees through any disguise.
    ///
    /// Only ghosts do. `subject` does not take part in the decision.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn can_see_through_identity<S>(
        &self,
        _subject: EntityId,
        viewer: EntityId,
        store: &S,
    ) -> bool
    where
        S: ComponentStore + ?Sized,
    {
        store.has::<Ghost>(viewer)
    }
}

/// [`IdentityResolver::name`] with the default configuration.
#[must_use]
pub fn name<S>(subject: EntityId, store: &S, viewer: Option<EntityId>) -> String
where
    S: ComponentStore + ?Sized,
{
    IdentityResolver::default().name(subject, store, viewer)
}

/// [`IdentityResolver::entity`] with the default configuration.
#[must_use]
pub fn entity<S>(subject: EntityId, store: &S) -> EntityId
where
    S: ComponentStore + ?Sized,
{
    IdentityResolver::default().entity(subject, store)
}

/// [`IdentityResolver::can_see_through_identity`] with the default
/// configuration.
#[must_use]
pub fn can_see_through_identity<S>(subject: EntityId, viewer: EntityId, store: &S) -> bool
where
    S: ComponentStore + ?Sized,
{
    IdentityResolver::default().can_see_through_identity(subject, viewer, store)
}
