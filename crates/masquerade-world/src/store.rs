//! The component-access capability consumed by identity queries.
//!
//! [`ComponentStore`] is deliberately small and object safe: handle validity
//! plus a lookup returning a tagged [`ComponentRef`]. Typed access
//! (`store.try_get::<MetaData>(id)`) comes from the [`StoreExt`] blanket
//! extension, so callers never match on `ComponentRef` themselves.
//!
//! # Example
//!
//! ```
//! use masquerade_world::{ComponentStore, MetaData, StoreExt, World};
//!
//! let mut world = World::new();
//! let bob = world.spawn("Bob");
//!
//! let store: &dyn ComponentStore = &world;
//! assert_eq!(store.try_get::<MetaData>(bob).map(|m| m.name.as_str()), Some("Bob"));
//! ```

use tracing::warn;

use crate::components::{Component, ComponentKind, ComponentRef};
use crate::entity::EntityId;

/// Read access to entities and their components.
///
/// Lookups are non-failing: absence of a component or an unknown entity is
/// reported as `None`/`false`.
pub trait ComponentStore {
    /// Returns `true` if `id` refers to an entity this store knows about.
    fn is_valid(&self, id: EntityId) -> bool;

    /// Looks up the component of `kind` attached to `id`.
    ///
    /// Implementations must return a `ComponentRef` whose variant matches
    /// `kind`, or `None`.
    fn component(&self, id: EntityId, kind: ComponentKind) -> Option<ComponentRef<'_>>;

    /// Returns `true` if `id` carries a component of `kind`.
    fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        self.component(id, kind).is_some()
    }
}

impl<S: ComponentStore + ?Sized> ComponentStore for &S {
    fn is_valid(&self, id: EntityId) -> bool {
        (**self).is_valid(id)
    }

    fn component(&self, id: EntityId, kind: ComponentKind) -> Option<ComponentRef<'_>> {
        (**self).component(id, kind)
    }

    fn has_component(&self, id: EntityId, kind: ComponentKind) -> bool {
        (**self).has_component(id, kind)
    }
}

/// Typed lookups over any [`ComponentStore`].
pub trait StoreExt: ComponentStore {
    /// Returns the `C` component of `id`, if present.
    ///
    /// A store that answers with a component of another kind is treated as
    /// if the component were absent.
    fn try_get<C: Component>(&self, id: EntityId) -> Option<&C> {
        let component = self.component(id, C::KIND)?;
        if component.kind() != C::KIND {
            warn!(
                entity = %id,
                expected = %C::KIND,
                found = %component.kind(),
                "store returned a component of the wrong kind"
            );
            return None;
        }
        C::from_ref(component)
    }

    /// Returns `true` if `id` carries a `C` component.
    fn has<C: Component>(&self, id: EntityId) -> bool {
        self.has_component(id, C::KIND)
    }
}

impl<S: ComponentStore + ?Sized> StoreExt for S {}
